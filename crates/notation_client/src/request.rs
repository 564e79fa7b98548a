use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, COOKIE, REFERER};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;

use crate::excerpt::body_excerpt;
use crate::{
    decode_text, redact_headers, CallContext, CallRecord, ClientError, PreparedBody,
    PreparedRequest, RawResponse, Session, TransportFailure, TransportKind, SESSION_COOKIE,
};

const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A single file carried in a `multipart/form-data` body, plus plain text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartFile {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub fields: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    Form(Vec<(String, String)>),
    Multipart(MultipartFile),
}

/// Description of one call relative to the session's base address.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
    pub timeout: Option<Duration>,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    pub fn form<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.body = Some(RequestBody::Form(fields));
        self
    }

    pub fn multipart(mut self, file: MultipartFile) -> Self {
        self.body = Some(RequestBody::Multipart(file));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// `METHOD /path`, used as context in errors.
    pub fn describe(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

impl Session {
    /// Execute `spec` and decode the 2xx JSON body into `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        ctx: &CallContext,
        spec: RequestSpec,
    ) -> Result<T, ClientError> {
        let call = spec.describe();
        let response = self.execute_raw(ctx, spec).await?;
        serde_json::from_slice(&response.body).map_err(|err| ClientError::Decode {
            call,
            message: err.to_string(),
        })
    }

    /// Execute `spec` and decode the 2xx body as text using its charset.
    ///
    /// Decoding is lossy; see [`decode_text`].
    pub async fn execute_text(
        &self,
        ctx: &CallContext,
        spec: RequestSpec,
    ) -> Result<String, ClientError> {
        let response = self.execute_raw(ctx, spec).await?;
        let content_type = response
            .headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        Ok(decode_text(&response.body, content_type))
    }

    /// Execute `spec`; any status outside `200..300` becomes [`ClientError::Protocol`].
    pub async fn execute_raw(
        &self,
        ctx: &CallContext,
        spec: RequestSpec,
    ) -> Result<RawResponse, ClientError> {
        let call = spec.describe();
        let prepared = self.prepare(ctx, spec)?;
        let timeout = prepared.timeout;
        let mut record = CallRecord {
            method: prepared.method.to_string(),
            url: prepared.url.to_string(),
            headers: redact_headers(&prepared.headers),
            status: None,
            elapsed: Duration::ZERO,
            body_excerpt: String::new(),
            error: None,
        };

        let started = Instant::now();
        let outcome = tokio::select! {
            biased;
            _ = ctx.cancel_token().cancelled() => Err(TransportFailure::new(
                TransportKind::Cancelled,
                "call cancelled",
            )),
            result = tokio::time::timeout(timeout, self.inner.transport.send(prepared)) => {
                result.unwrap_or_else(|_| {
                    Err(TransportFailure::new(
                        TransportKind::Timeout,
                        format!("no complete response within {timeout:?}"),
                    ))
                })
            }
        };
        record.elapsed = started.elapsed();

        let excerpt_len = self.inner.settings.log_excerpt_bytes;
        let response = match outcome {
            Ok(response) => response,
            Err(failure) => {
                record.error = Some(format!("{}: {}", failure.kind, failure.message));
                self.inner.sink.record(&record);
                return Err(ClientError::Transport {
                    call,
                    kind: failure.kind,
                    message: failure.message,
                });
            }
        };

        record.status = Some(response.status);
        record.body_excerpt = body_excerpt(&response.body, excerpt_len);
        if !response.is_success() {
            record.error = Some(format!("status {}", response.status));
            self.inner.sink.record(&record);
            return Err(ClientError::Protocol {
                call,
                status: response.status,
                body: record.body_excerpt,
            });
        }

        self.inner.sink.record(&record);
        Ok(response)
    }

    fn prepare(&self, ctx: &CallContext, spec: RequestSpec) -> Result<PreparedRequest, ClientError> {
        let call = spec.describe();
        let invalid = |message: String| ClientError::InvalidRequest {
            call: call.clone(),
            message,
        };

        if !spec.path.starts_with('/') {
            return Err(invalid(format!("path {} must start with '/'", spec.path)));
        }
        let mut url = Url::parse(&format!("{}{}", self.inner.base_address, spec.path))
            .map_err(|err| invalid(err.to_string()))?;
        if !spec.query.is_empty() {
            url.query_pairs_mut().extend_pairs(spec.query.iter());
        }

        let mut headers = spec.headers;
        let cookie = format!("{SESSION_COOKIE}={}", self.inner.settings.session_token);
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&cookie)
                .map_err(|_| invalid("session token is not a valid cookie value".into()))?,
        );
        headers.insert(
            REFERER,
            HeaderValue::from_str(&self.inner.base_address)
                .map_err(|err| invalid(err.to_string()))?,
        );

        let body = match spec.body {
            None => PreparedBody::Empty,
            Some(RequestBody::Json(value)) => {
                let bytes = serde_json::to_vec(&value).map_err(|err| invalid(err.to_string()))?;
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
                PreparedBody::Bytes(bytes)
            }
            Some(RequestBody::Form(fields)) => {
                let encoded = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(fields.iter())
                    .finish();
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
                PreparedBody::Bytes(encoded.into_bytes())
            }
            Some(RequestBody::Multipart(file)) => PreparedBody::Multipart(file),
        };

        let timeout = spec
            .timeout
            .or(ctx.timeout())
            .unwrap_or(self.inner.settings.request_timeout);

        Ok(PreparedRequest {
            method: spec.method,
            url,
            headers,
            body,
            timeout,
        })
    }
}
