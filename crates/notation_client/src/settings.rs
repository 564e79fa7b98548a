use std::fmt;
use std::time::Duration;

use crate::ClientError;

pub const DEFAULT_BASE_ADDRESS: &str = "https://www.soundslice.com";
/// Environment variable holding the session token.
pub const SESSION_TOKEN_ENV: &str = "SESN";
/// Environment variable overriding the base address.
pub const BASE_ADDRESS_ENV: &str = "NOTATION_BASE_ADDR";
/// Name of the cookie that carries the session token.
pub const SESSION_COOKIE: &str = "sesn";

#[derive(Clone)]
pub struct ClientSettings {
    pub base_address: String,
    pub session_token: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_body_bytes: u64,
    pub log_excerpt_bytes: usize,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_address: DEFAULT_BASE_ADDRESS.to_string(),
            session_token: String::new(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_body_bytes: 5 * 1024 * 1024,
            log_excerpt_bytes: 512,
        }
    }
}

impl ClientSettings {
    pub fn new(base_address: impl Into<String>, session_token: impl Into<String>) -> Self {
        Self {
            base_address: base_address.into(),
            session_token: session_token.into(),
            ..Self::default()
        }
    }

    /// Read `SESN` and `NOTATION_BASE_ADDR` from the process environment.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientSettings::from_env`] with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let session_token = lookup(SESSION_TOKEN_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ClientError::Config(format!("{SESSION_TOKEN_ENV} is not set")))?;
        let base_address = lookup(BASE_ADDRESS_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_ADDRESS.to_string());
        Ok(Self::new(base_address, session_token))
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("base_address", &self.base_address)
            .field("session_token", &crate::REDACTED)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .field("redirect_limit", &self.redirect_limit)
            .field("max_body_bytes", &self.max_body_bytes)
            .field("log_excerpt_bytes", &self.log_excerpt_bytes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_token_is_config_error() {
        let err = ClientSettings::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn base_address_defaults_when_unset() {
        let settings = ClientSettings::from_lookup(lookup_from(&[("SESN", " tok ")])).unwrap();
        assert_eq!(settings.session_token, "tok");
        assert_eq!(settings.base_address, DEFAULT_BASE_ADDRESS);
    }

    #[test]
    fn base_address_can_be_overridden() {
        let settings = ClientSettings::from_lookup(lookup_from(&[
            ("SESN", "tok"),
            ("NOTATION_BASE_ADDR", "http://localhost:9000"),
        ]))
        .unwrap();
        assert_eq!(settings.base_address, "http://localhost:9000");
    }

    #[test]
    fn debug_output_hides_token() {
        let settings = ClientSettings::new("https://example.com", "secret-token");
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("https://example.com"));
    }
}
