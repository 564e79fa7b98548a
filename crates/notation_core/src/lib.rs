//! Notation core: pure data model for the score-hosting workflow.
mod catalog;
mod embed;
mod ids;
mod publish;
mod text;

pub use catalog::{CatalogEntry, EMBEDDABLE_MARKER};
pub use embed::{embed_url, EmbedStatus, EmbedUrlError};
pub use ids::{ScoreId, SliceId};
pub use publish::{PublishStep, PublishedNotation, UploadResult};
pub use text::normalize_whitespace;
