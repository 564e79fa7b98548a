use url::Url;

use crate::SliceId;

/// Numeric `embed_status` codes understood by the score endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedStatus {
    Disabled,
    Enabled,
}

impl EmbedStatus {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            EmbedStatus::Enabled
        } else {
            EmbedStatus::Disabled
        }
    }

    pub fn code(self) -> u8 {
        match self {
            EmbedStatus::Disabled => 1,
            EmbedStatus::Enabled => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedUrlError {
    InvalidBase(String),
}

impl std::fmt::Display for EmbedUrlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbedUrlError::InvalidBase(message) => write!(f, "invalid base address: {message}"),
        }
    }
}

impl std::error::Error for EmbedUrlError {}

/// Embeddable player URL: `{scheme}://{host}/slices/{slice_id}/embed/`.
///
/// Only the origin of `base_address` is kept; any path on it is dropped.
pub fn embed_url(base_address: &str, slice_id: &SliceId) -> Result<String, EmbedUrlError> {
    let base =
        Url::parse(base_address).map_err(|err| EmbedUrlError::InvalidBase(err.to_string()))?;
    if base.cannot_be_a_base() || base.host_str().is_none() {
        return Err(EmbedUrlError::InvalidBase(format!(
            "{base_address} has no host"
        )));
    }
    let origin = base.origin().ascii_serialization();
    let slice_id = slice_id.path_segment();
    Ok(format!("{origin}/slices/{slice_id}/embed/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_service_values() {
        assert_eq!(EmbedStatus::from_enabled(true).code(), 4);
        assert_eq!(EmbedStatus::from_enabled(false).code(), 1);
    }

    #[test]
    fn embed_url_keeps_origin_only() {
        let id = SliceId::new("lPrzc");
        let url = embed_url("https://www.soundslice.com/manage/", &id).unwrap();
        assert_eq!(url, "https://www.soundslice.com/slices/lPrzc/embed/");
    }

    #[test]
    fn embed_url_keeps_explicit_port() {
        let id = SliceId::new("abc");
        let url = embed_url("http://127.0.0.1:8123", &id).unwrap();
        assert_eq!(url, "http://127.0.0.1:8123/slices/abc/embed/");
    }

    #[test]
    fn embed_url_escapes_the_slice_id() {
        let id = SliceId::new("a?b");
        let url = embed_url("https://www.soundslice.com", &id).unwrap();
        assert_eq!(url, "https://www.soundslice.com/slices/a%3Fb/embed/");
    }

    #[test]
    fn embed_url_rejects_relative_base() {
        let id = SliceId::new("abc");
        assert!(matches!(
            embed_url("/relative", &id),
            Err(EmbedUrlError::InvalidBase(_))
        ));
    }
}
