use super::*;
use crate::dom::document::Document;

fn doc(view: &SectionView) -> Document {
    Document::from_root(view.root.clone().into()).unwrap()
}

#[test]
fn timeline_lists_every_role_in_order() {
    let view = render(&ContentStore::builtin());
    let doc = doc(&view);
    let timeline = doc.get_element_by_id(TIMELINE_ID).unwrap();
    let items = doc.query_class_within(timeline, ITEM_CLASS);
    assert_eq!(items.len(), 3);
    assert_eq!(doc.attr(items[0], "data-experience"), Some("1"));

    let text = doc.text_content(items[0]);
    assert!(text.contains("Senior Frontend Developer"));
    assert!(text.contains("2022 - Present"));
    assert!(doc.text_content(items[1]).contains("2020 - 2022"));
}

#[test]
fn current_role_dot_pulses() {
    let view = render(&ContentStore::builtin());
    let doc = doc(&view);
    let timeline = doc.get_element_by_id(TIMELINE_ID).unwrap();
    assert_eq!(doc.query_class_within(timeline, "animate-pulse").len(), 1);
}

#[test]
fn bullets_and_tags() {
    let view = render(&ContentStore::builtin());
    let doc = doc(&view);
    let timeline = doc.get_element_by_id(TIMELINE_ID).unwrap();
    let first = doc.query_class_within(timeline, ITEM_CLASS)[0];
    assert_eq!(doc.query_tag_within(first, "li").len(), 4);
    assert_eq!(doc.query_class_within(first, "border-t").len(), 1);
}

#[test]
fn items_slide_in_from_the_left() {
    let view = render(&ContentStore::builtin());
    let items = &view.reveals[1];
    assert_eq!(items.targets, Selector::class_within(TIMELINE_ID, ITEM_CLASS));
    assert_eq!(items.spec.from.x, Some(-50.0));
    assert_eq!(items.spec.stagger, 0.2);
}
