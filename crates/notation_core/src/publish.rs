use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ScoreId, SliceId};

/// Server-assigned result of a notation upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub name: String,
}

/// Steps of the publish chain, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStep {
    /// Reading the local notation file, before anything is sent.
    ReadFile,
    Create,
    Upload,
    ResolveScore,
    EnableEmbed,
    DeriveUrl,
}

impl PublishStep {
    /// Whether a slice already exists on the remote side when this step fails.
    pub fn leaves_slice_behind(self) -> bool {
        !matches!(self, PublishStep::ReadFile | PublishStep::Create)
    }
}

impl fmt::Display for PublishStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PublishStep::ReadFile => "read file",
            PublishStep::Create => "create",
            PublishStep::Upload => "upload",
            PublishStep::ResolveScore => "resolve score",
            PublishStep::EnableEmbed => "enable embed",
            PublishStep::DeriveUrl => "derive embed url",
        };
        f.write_str(name)
    }
}

/// Outcome of a successful publish chain.
///
/// The caller owns `slice_id` from here on; it is the only handle that can
/// later delete the slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedNotation {
    pub slice_id: SliceId,
    pub score_id: ScoreId,
    pub upload: UploadResult,
    pub embed_url: String,
}
