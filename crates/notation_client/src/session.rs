use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use tokio_util::sync::CancellationToken;

use crate::{CallSink, ClientError, ClientSettings, LogCallSink, ReqwestTransport, Transport};

/// Cancellation and deadline for one operation.
///
/// Cancelling the token aborts the in-flight call, which then fails with
/// [`crate::TransportKind::Cancelled`].
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancel: CancellationToken,
    timeout: Option<Duration>,
}

impl CallContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Authenticated connection to the service: base address, session token,
/// transport and call sink.
///
/// Immutable once built. Clones share the same transport.
#[derive(Clone)]
pub struct Session {
    pub(crate) inner: Arc<SessionInner>,
}

pub(crate) struct SessionInner {
    pub(crate) settings: ClientSettings,
    /// Base address without a trailing slash, used verbatim as the Referer.
    pub(crate) base_address: String,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) sink: Arc<dyn CallSink>,
}

impl Session {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(&settings)?;
        Self::with_parts(settings, Arc::new(transport), Arc::new(LogCallSink))
    }

    pub fn with_parts(
        settings: ClientSettings,
        transport: Arc<dyn Transport>,
        sink: Arc<dyn CallSink>,
    ) -> Result<Self, ClientError> {
        if settings.session_token.trim().is_empty() {
            return Err(ClientError::Config("session token is empty".into()));
        }
        let base_address = settings.base_address.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_address)
            .map_err(|err| ClientError::Config(format!("base address {base_address}: {err}")))?;
        if parsed.host_str().is_none() {
            return Err(ClientError::Config(format!(
                "base address {base_address} has no host"
            )));
        }

        Ok(Self {
            inner: Arc::new(SessionInner {
                settings,
                base_address,
                transport,
                sink,
            }),
        })
    }

    pub fn base_address(&self) -> &str {
        &self.inner.base_address
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.inner.settings
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("settings", &self.inner.settings)
            .finish_non_exhaustive()
    }
}
