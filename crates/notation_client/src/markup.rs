//! Selectors for the service's server-rendered pages. Markup drift on the
//! service side should only ever require edits here.
use crate::Query;

/// Element on the create-via-import page carrying the new slice id.
pub(crate) fn created_slice_id() -> Query {
    Query::select("slice-practice-lists[id='title-practice-lists']").attr("slice")
}

/// One score on the listing page.
pub(crate) const ENTRY_BLOCK: &str = "div.slice-item.slice-item-full";
/// Attribute of [`ENTRY_BLOCK`] holding the slice id.
pub(crate) const ENTRY_ID_ATTR: &str = "data-score";

pub(crate) fn entry_title() -> Query {
    Query::select("a.slice-item-title")
}

pub(crate) fn entry_labels() -> Query {
    Query::select("div.slice-item-info")
        .then("span.only10col")
        .then("span.text-muted")
}
