use super::*;
use crate::dom::document::Document;

#[test]
fn form_has_three_required_fields() {
    let view = render(&ContentStore::builtin());
    let doc = Document::from_root(view.root.clone().into()).unwrap();
    let form = doc.get_element_by_id(FORM_ID).unwrap();

    for field in [FormField::Name, FormField::Email, FormField::Message] {
        let id = doc.get_element_by_id(field.as_str()).unwrap();
        assert!(doc.descendants(form).contains(&id));
        assert_eq!(doc.attr(id, "required"), Some(""));
        assert_eq!(doc.attr(id, "name"), Some(field.as_str()));
    }
    let email = doc.get_element_by_id("email").unwrap();
    assert_eq!(doc.attr(email, "type"), Some("email"));
    let message = doc.get_element_by_id("message").unwrap();
    assert_eq!(doc.tag(message), Some("textarea"));
    assert_eq!(doc.attr(message, "rows"), Some("6"));
}

#[test]
fn connect_cards_link_out() {
    let view = render(&ContentStore::builtin());
    let doc = Document::from_root(view.root.clone().into()).unwrap();
    let content = doc.get_element_by_id(CONTENT_ID).unwrap();
    let hrefs: Vec<_> = doc
        .query_tag_within(content, "a")
        .into_iter()
        .filter_map(|a| doc.attr(a, "href"))
        .collect();
    assert_eq!(
        hrefs,
        vec![
            "mailto:your.email@example.com",
            "https://github.com/dorrsakh",
            "https://linkedin.com/in/dorsa-khalili",
        ]
    );
}

#[test]
fn content_fades_in_after_title() {
    let view = render(&ContentStore::builtin());
    assert_eq!(view.reveals.len(), 2);
    let body = &view.reveals[1];
    assert_eq!(body.targets, Selector::id(CONTENT_ID));
    assert_eq!(body.spec.timing.delay, 0.2);
    assert_eq!(body.spec.from.y, Some(30.0));
}
