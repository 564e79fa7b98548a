use std::time::Duration;

use notation_logging::notation_call;
use reqwest::header::{HeaderMap, COOKIE};

pub const REDACTED: &str = "<redacted>";

/// One executed call, as reported to a [`CallSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub method: String,
    pub url: String,
    /// Request headers with credentials replaced by [`REDACTED`].
    pub headers: Vec<(String, String)>,
    pub status: Option<u16>,
    pub elapsed: Duration,
    pub body_excerpt: String,
    pub error: Option<String>,
}

/// Receives one record per executed call.
pub trait CallSink: Send + Sync {
    fn record(&self, record: &CallRecord);
}

/// Writes call records to the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCallSink;

impl CallSink for LogCallSink {
    fn record(&self, record: &CallRecord) {
        notation_call!(
            "{} {} status={:?} elapsed={:?} headers={:?} error={:?} body={}",
            record.method,
            record.url,
            record.status,
            record.elapsed,
            record.headers,
            record.error,
            record.body_excerpt
        );
    }
}

pub fn redact_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let shown = if *name == COOKIE {
                REDACTED.to_string()
            } else {
                String::from_utf8_lossy(value.as_bytes()).into_owned()
            };
            (name.as_str().to_string(), shown)
        })
        .collect()
}
