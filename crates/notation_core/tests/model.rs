use std::sync::Once;

use notation_core::{
    normalize_whitespace, CatalogEntry, PublishStep, PublishedNotation, ScoreId, SliceId,
    UploadResult,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(notation_logging::initialize_for_tests);
}

#[test]
fn embeddable_requires_exact_marker() {
    init_logging();
    let yes = CatalogEntry::from_labels(None, None, ["Private", "Embeddable"]);
    let no = CatalogEntry::from_labels(None, None, ["Not embeddable", "embeddable"]);
    assert!(yes.embeddable);
    assert!(!no.embeddable);
}

#[test]
fn catalog_entry_omits_missing_fields_when_serialized() {
    init_logging();
    let entry = CatalogEntry::from_labels(
        Some(SliceId::new("abc")),
        None,
        Vec::<String>::new(),
    );
    let json = serde_json::to_string(&entry).unwrap();
    assert_eq!(json, r#"{"sliceId":"abc","embeddable":false}"#);
}

#[test]
fn steps_before_create_leave_nothing_behind() {
    init_logging();
    let steps = [
        PublishStep::ReadFile,
        PublishStep::Create,
        PublishStep::Upload,
        PublishStep::ResolveScore,
        PublishStep::EnableEmbed,
        PublishStep::DeriveUrl,
    ];
    let leaving: Vec<PublishStep> = steps
        .into_iter()
        .filter(|step| step.leaves_slice_behind())
        .collect();
    assert_eq!(
        leaving,
        vec![
            PublishStep::Upload,
            PublishStep::ResolveScore,
            PublishStep::EnableEmbed,
            PublishStep::DeriveUrl,
        ]
    );
}

#[test]
fn published_notation_serializes_with_camel_case() {
    init_logging();
    let published = PublishedNotation {
        slice_id: SliceId::new("s1"),
        score_id: ScoreId::new("slug-1"),
        upload: UploadResult {
            name: "x.gp".to_string(),
        },
        embed_url: "https://host/slices/s1/embed/".to_string(),
    };
    let value: serde_json::Value = serde_json::to_value(&published).unwrap();
    assert_eq!(value["sliceId"], "s1");
    assert_eq!(value["scoreId"], "slug-1");
    assert_eq!(value["upload"]["name"], "x.gp");
    assert_eq!(value["embedUrl"], "https://host/slices/s1/embed/");
}

#[test]
fn normalize_matches_single_spacing() {
    assert_eq!(normalize_whitespace("a  b\n\nc"), "a b c");
}
