use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

/// Bytes escaped when an id is placed in a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn path_segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

/// Opaque identifier of a slice on the remote service.
///
/// Only meaningful between `create` and `delete`; nothing local keeps it alive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SliceId(String);

impl SliceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id escaped for use as exactly one URL path segment.
    pub fn path_segment(&self) -> String {
        path_segment(&self.0)
    }
}

impl fmt::Display for SliceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SliceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SliceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Catalog-level score identifier (the score "slug").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreId(String);

impl ScoreId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ScoreId {
    pub fn path_segment(&self) -> String {
        path_segment(&self.0)
    }
}

impl fmt::Display for ScoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScoreId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ScoreId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segment_escapes_url_delimiters() {
        assert_eq!(SliceId::new("a?b").path_segment(), "a%3Fb");
        assert_eq!(SliceId::new("x/y#z").path_segment(), "x%2Fy%23z");
        assert_eq!(ScoreId::new("100%").path_segment(), "100%25");
    }

    #[test]
    fn path_segment_leaves_plain_ids_alone() {
        assert_eq!(SliceId::new("lPrzc").path_segment(), "lPrzc");
        assert_eq!(ScoreId::new("my-score_1.2~x").path_segment(), "my-score_1.2~x");
    }
}
