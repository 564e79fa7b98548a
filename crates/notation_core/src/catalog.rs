use serde::Serialize;

use crate::SliceId;

/// Label text that marks a listing entry as embeddable.
pub const EMBEDDABLE_MARKER: &str = "Embeddable";

/// One score block scraped from the listing page.
///
/// Fields absent from the markup stay `None` instead of failing the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slice_id: Option<SliceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub embeddable: bool,
}

impl CatalogEntry {
    /// Build an entry from raw label texts, setting `embeddable` when any label
    /// equals [`EMBEDDABLE_MARKER`] exactly.
    pub fn from_labels<I, S>(slice_id: Option<SliceId>, title: Option<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let embeddable = labels
            .into_iter()
            .any(|label| label.as_ref() == EMBEDDABLE_MARKER);
        Self {
            slice_id,
            title,
            embeddable,
        }
    }
}
