use std::fmt;

use notation_core::{PublishStep, SliceId};

use crate::extract::SelectorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Network,
    Timeout,
    Cancelled,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64 },
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Network => write!(f, "network error"),
            TransportKind::Timeout => write!(f, "timeout"),
            TransportKind::Cancelled => write!(f, "cancelled"),
            TransportKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            TransportKind::TooLarge { max_bytes } => {
                write!(f, "response larger than {max_bytes} bytes")
            }
        }
    }
}

/// Failure reported by a [`crate::Transport`] before any status was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub kind: TransportKind,
    pub message: String,
}

impl TransportFailure {
    pub fn new(kind: TransportKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Coarse classification of a [`ClientError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    InvalidRequest,
    Transport,
    Protocol,
    Decode,
    Extraction,
    Io,
}

/// Errors surfaced by the client. None of them is retried.
///
/// `call` is the method and path of the failing request, which includes any
/// slice or score identifier involved.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("{call}: invalid request: {message}")]
    InvalidRequest { call: String, message: String },
    #[error("{call}: transport failure ({kind}): {message}")]
    Transport {
        call: String,
        kind: TransportKind,
        message: String,
    },
    #[error("{call}: response status {status}: {body}")]
    Protocol {
        call: String,
        status: u16,
        body: String,
    },
    #[error("{call}: failed to decode response: {message}")]
    Decode { call: String, message: String },
    #[error("{call}: {what} not found in response")]
    Extraction { call: String, what: String },
    #[error("{call}: {source}")]
    Selector {
        call: String,
        #[source]
        source: SelectorError,
    },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Config(_) => ErrorKind::Config,
            ClientError::InvalidRequest { .. } => ErrorKind::InvalidRequest,
            ClientError::Transport { .. } => ErrorKind::Transport,
            ClientError::Protocol { .. } => ErrorKind::Protocol,
            ClientError::Decode { .. } => ErrorKind::Decode,
            // Selectors are fixed, so a bad one means the markup contract is broken.
            ClientError::Extraction { .. } | ClientError::Selector { .. } => ErrorKind::Extraction,
            ClientError::Io { .. } | ClientError::Runtime(_) => ErrorKind::Io,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Protocol { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn extraction(call: &str, what: impl Into<String>) -> Self {
        ClientError::Extraction {
            call: call.to_string(),
            what: what.into(),
        }
    }
}

/// A publish chain stopped at `step`.
///
/// `source` is the step's error, untouched. When `orphaned` is set the slice
/// it names still exists remotely; nothing deletes it automatically.
#[derive(Debug, thiserror::Error)]
#[error("publish failed at step `{step}`: {source}")]
pub struct PublishError {
    pub step: PublishStep,
    pub orphaned: Option<SliceId>,
    #[source]
    pub source: ClientError,
}

impl PublishError {
    pub fn into_client_error(self) -> ClientError {
        self.source
    }
}
