use super::*;
use crate::{
    content::{ContentBuilder, builder::project},
    dom::document::Document,
};

fn doc(view: &SectionView) -> Document {
    Document::from_root(view.root.clone().into()).unwrap()
}

#[test]
fn featured_and_other_are_partitioned() {
    let view = render(&ContentStore::builtin());
    let doc = doc(&view);

    let featured = doc.get_element_by_id(FEATURED_ID).unwrap();
    let featured_cards = doc.query_class_within(featured, CARD_CLASS);
    assert_eq!(featured_cards.len(), 2);
    assert_eq!(doc.attr(featured_cards[0], "data-project"), Some("1"));

    let other = doc.get_element_by_id(OTHER_ID).unwrap();
    let other_ids: Vec<_> = doc
        .query_class_within(other, CARD_CLASS)
        .into_iter()
        .filter_map(|c| doc.attr(c, "data-project"))
        .collect();
    assert_eq!(other_ids, vec!["3", "4"]);
}

#[test]
fn placeholder_shows_title_initial() {
    let view = render(&ContentStore::builtin());
    let doc = doc(&view);
    let featured = doc.get_element_by_id(FEATURED_ID).unwrap();
    let card = doc.query_class_within(featured, CARD_CLASS)[0];
    let placeholder = doc.query_class_within(card, "aspect-video")[0];
    assert_eq!(doc.text_content(placeholder), "E");
}

#[test]
fn compact_cards_cap_technologies() {
    let view = render(&ContentStore::builtin());
    let doc = doc(&view);
    let other = doc.get_element_by_id(OTHER_ID).unwrap();
    let card = doc.query_class_within(other, CARD_CLASS)[0];
    // "Portfolio Website" lists five technologies.
    let tags = doc.query_class_within(card, "rounded-full");
    assert_eq!(tags.len(), COMPACT_TECH_LIMIT);
}

#[test]
fn other_block_is_omitted_when_everything_is_featured() {
    let mut p = project("a", "Alpha", "First", "Tool");
    p.featured = true;
    let store = ContentBuilder::new(ContentStore::builtin().personal().clone())
        .project(p)
        .unwrap()
        .build()
        .unwrap();
    let view = render(&store);
    let doc = doc(&view);
    assert!(doc.get_element_by_id(OTHER_ID).is_none());
    let links = doc.query_tag_within(doc.root(), "a");
    assert!(links.is_empty());
}

#[test]
fn featured_cards_stagger() {
    let view = render(&ContentStore::builtin());
    let cards = &view.reveals[1];
    assert_eq!(cards.targets, Selector::class_within(FEATURED_ID, CARD_CLASS));
    assert_eq!(cards.spec.from.y, Some(60.0));
    assert_eq!(cards.spec.from.scale, Some(0.95));
    assert_eq!(cards.spec.stagger, 0.15);
}
