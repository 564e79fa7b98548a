//! Notation client: authenticated calls against the score-hosting service.
mod blocking;
mod catalog;
mod client;
mod decode;
mod error;
mod excerpt;
mod extract;
mod markup;
mod notation;
mod request;
mod session;
mod settings;
mod sink;
mod transport;

pub use blocking::BlockingClient;
pub use catalog::ScoreCatalog;
pub use client::SliceClient;
pub use decode::decode_text;
pub use error::{ClientError, ErrorKind, PublishError, TransportFailure, TransportKind};
pub use excerpt::{excerpt, TRUNCATED_MARKER};
pub use extract::{Block, HtmlDocument, Query, SelectorError};
pub use notation::NotationManager;
pub use request::{MultipartFile, RequestBody, RequestSpec};
pub use session::{CallContext, Session};
pub use settings::{
    ClientSettings, BASE_ADDRESS_ENV, DEFAULT_BASE_ADDRESS, SESSION_COOKIE, SESSION_TOKEN_ENV,
};
pub use sink::{redact_headers, CallRecord, CallSink, LogCallSink, REDACTED};
pub use transport::{PreparedBody, PreparedRequest, RawResponse, ReqwestTransport, Transport};

pub use notation_core::{
    CatalogEntry, EmbedStatus, PublishStep, PublishedNotation, ScoreId, SliceId, UploadResult,
};
