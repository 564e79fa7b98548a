use notation_client::{HtmlDocument, Query};
use pretty_assertions::assert_eq;

const PAGE: &str = r#"
<html><body>
  <section id="main">
    <h1 class="title">
        A   spaced
        title
    </h1>
    <ul>
      <li class="item" data-id="1"><span class="name">One</span></li>
      <li class="item" data-id="2"><span class="name">Two</span></li>
      <li class="item"><span class="name">Three</span></li>
    </ul>
  </section>
</body></html>
"#;

#[test]
fn text_is_whitespace_normalized() {
    let doc = HtmlDocument::parse(PAGE);
    let title = doc.first(&Query::select("h1.title")).unwrap();
    assert_eq!(title.as_deref(), Some("A spaced title"));
}

#[test]
fn attribute_lookup_reads_first_match() {
    let doc = HtmlDocument::parse(PAGE);
    let id = doc.first(&Query::select("li.item").attr("data-id")).unwrap();
    assert_eq!(id.as_deref(), Some("1"));
}

#[test]
fn absent_element_and_attribute_are_not_found() {
    let doc = HtmlDocument::parse(PAGE);
    assert_eq!(doc.first(&Query::select("table")).unwrap(), None);
    assert_eq!(
        doc.first(&Query::select("h1.title").attr("data-id")).unwrap(),
        None
    );
}

#[test]
fn nested_chain_collects_in_document_order() {
    let doc = HtmlDocument::parse(PAGE);
    let names = doc
        .all(&Query::select("section#main").then("li.item").then("span.name"))
        .unwrap();
    assert_eq!(names, vec!["One", "Two", "Three"]);
}

#[test]
fn blocks_scope_lookups_to_themselves() {
    let doc = HtmlDocument::parse(PAGE);
    let blocks = doc.blocks("li.item").unwrap();
    let rows: Vec<(Option<String>, Option<String>)> = blocks
        .iter()
        .map(|block| {
            (
                block.attr("data-id"),
                block.first(&Query::select("span.name")).unwrap(),
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            (Some("1".to_string()), Some("One".to_string())),
            (Some("2".to_string()), Some("Two".to_string())),
            (None, Some("Three".to_string())),
        ]
    );
    assert_eq!(blocks[0].text(), "One");
}

#[test]
fn custom_elements_are_selectable() {
    let doc = HtmlDocument::parse(
        r#"<slice-practice-lists id="title-practice-lists" slice="lPrzc"></slice-practice-lists>"#,
    );
    let slice = doc
        .first(&Query::select("slice-practice-lists[id='title-practice-lists']").attr("slice"))
        .unwrap();
    assert_eq!(slice.as_deref(), Some("lPrzc"));
}
