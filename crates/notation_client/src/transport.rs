use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::HeaderMap;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, Url};

use crate::request::MultipartFile;
use crate::{ClientError, ClientSettings, TransportFailure, TransportKind};

/// A fully resolved request, ready to go on the wire.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: PreparedBody,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreparedBody {
    Empty,
    /// Already encoded; the matching `Content-Type` is in the headers.
    Bytes(Vec<u8>),
    /// Encoded by the transport, which also sets the boundary header.
    Multipart(MultipartFile),
}

/// Status, headers and the complete body of a response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and reads the whole response body.
///
/// Non-2xx statuses are not failures at this level.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, TransportFailure>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    max_body_bytes: u64,
}

impl ReqwestTransport {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(|err| ClientError::Config(format!("http client: {err}")))?;
        Ok(Self {
            client,
            max_body_bytes: settings.max_body_bytes,
        })
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, TransportFailure> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .timeout(request.timeout);
        builder = match request.body {
            PreparedBody::Empty => builder,
            PreparedBody::Bytes(bytes) => builder.body(bytes),
            PreparedBody::Multipart(file) => builder.multipart(multipart_form(file)?),
        };

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();

        if let Some(content_len) = response.content_length() {
            if content_len > self.max_body_bytes {
                return Err(too_large(self.max_body_bytes, content_len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.max_body_bytes {
                return Err(too_large(self.max_body_bytes, next_len));
            }
            body.extend_from_slice(&chunk);
        }

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

fn multipart_form(file: MultipartFile) -> Result<Form, TransportFailure> {
    let part = Part::bytes(file.bytes)
        .file_name(file.file_name)
        .mime_str(&file.content_type)
        .map_err(map_reqwest_error)?;
    let form = file
        .fields
        .into_iter()
        .fold(Form::new().part(file.field, part), |form, (name, value)| {
            form.text(name, value)
        });
    Ok(form)
}

fn too_large(max_bytes: u64, actual: u64) -> TransportFailure {
    TransportFailure::new(
        TransportKind::TooLarge { max_bytes },
        format!("response has at least {actual} bytes"),
    )
}

fn map_reqwest_error(err: reqwest::Error) -> TransportFailure {
    if err.is_timeout() {
        return TransportFailure::new(TransportKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return TransportFailure::new(TransportKind::RedirectLimitExceeded, err.to_string());
    }
    TransportFailure::new(TransportKind::Network, err.to_string())
}
