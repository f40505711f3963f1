use super::*;
use crate::dom::document::Document;

#[test]
fn footer_credits_year_and_name() {
    let view = render(&ContentStore::builtin(), 2026);
    let doc = Document::from_root(view.root.clone().into()).unwrap();
    let p = doc.query_tag_within(doc.root(), "p")[0];
    assert_eq!(
        doc.text_content(p),
        "© 2026 Dorsa Khalili. Made with  using Rust"
    );
    assert_eq!(doc.query_class_within(doc.root(), "icon-heart").len(), 1);
    assert_eq!(doc.query_tag_within(doc.root(), "a").len(), 3);
}

#[test]
fn footer_registers_nothing() {
    let view = render(&ContentStore::builtin(), 2026);
    assert_eq!(view.kind, SectionKind::Footer);
    assert!(view.reveals.is_empty());
    assert!(view.scrubs.is_empty());
    assert!(view.root.id.is_none());
}
