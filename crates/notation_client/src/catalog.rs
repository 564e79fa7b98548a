use notation_core::{CatalogEntry, SliceId};
use notation_logging::notation_debug;

use crate::{markup, CallContext, ClientError, HtmlDocument, RequestSpec, SelectorError, Session};

const LISTING_PATH: &str = "/";

/// Reads the account's score listing page.
#[derive(Debug, Clone)]
pub struct ScoreCatalog {
    session: Session,
}

impl ScoreCatalog {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Every score entry on the listing page, in page order.
    pub async fn list_scores(&self, ctx: &CallContext) -> Result<Vec<CatalogEntry>, ClientError> {
        let spec = RequestSpec::get(LISTING_PATH);
        let call = spec.describe();
        let html = self.session.execute_text(ctx, spec).await?;
        let entries =
            parse_listing(&html).map_err(|source| ClientError::Selector { call, source })?;
        notation_debug!("Listing page holds {} score entries", entries.len());
        Ok(entries)
    }
}

/// Parse a listing page. Missing ids or titles leave the field empty.
pub(crate) fn parse_listing(html: &str) -> Result<Vec<CatalogEntry>, SelectorError> {
    let doc = HtmlDocument::parse(html);
    let title_query = markup::entry_title();
    let label_query = markup::entry_labels();

    doc.blocks(markup::ENTRY_BLOCK)?
        .into_iter()
        .map(|block| {
            let slice_id = block.attr(markup::ENTRY_ID_ATTR).map(SliceId::new);
            let title = block.first(&title_query)?.filter(|t| !t.is_empty());
            let labels = block.all(&label_query)?;
            Ok(CatalogEntry::from_labels(slice_id, title, labels))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_listing;

    #[test]
    fn page_without_entries_is_empty() {
        let entries = parse_listing("<html><body><p>No scores yet</p></body></html>").unwrap();
        assert!(entries.is_empty());
    }
}
