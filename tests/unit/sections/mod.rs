use super::*;
use crate::dom::document::Document;

#[test]
fn kinds_are_in_page_order_with_anchors() {
    let anchors: Vec<_> = SectionKind::ALL.iter().map(|k| k.anchor()).collect();
    assert_eq!(
        anchors,
        vec![
            Some("nav"),
            Some("home"),
            Some("about"),
            Some("skills"),
            Some("projects"),
            Some("experience"),
            Some("contact"),
            None,
        ]
    );
    assert!(SectionKind::Hero < SectionKind::Footer);
    assert_eq!(
        serde_json::to_string(&SectionKind::Navigation).unwrap(),
        "\"navigation\""
    );
}

#[test]
fn scroll_trigger_defaults_to_reveal_actions() {
    let spec = scroll_trigger(None);
    assert_eq!(spec.start.to_string(), "top 80%");
    assert_eq!(spec.end.to_string(), "bottom top");
    assert_eq!(spec.actions, ToggleActions::reveal(true));

    let bounded = scroll_trigger(Some(Boundary::new(Edge::Top, Edge::Percent(50.0))));
    assert_eq!(bounded.end.to_string(), "top 50%");
}

#[test]
fn title_reveal_fades_up_one_second() {
    let req = title_reveal("x-title", None);
    assert_eq!(req.targets, Selector::id("x-title"));
    assert_eq!(req.spec.from, StyleProps::new().opacity(0.0).y(50.0));
    assert_eq!(req.spec.timing.duration, 1.0);
    assert!(req.spec.trigger.is_some());
}

#[test]
fn tech_tags_render_one_span_per_technology() {
    let techs = vec!["Rust".to_string(), "Serde".to_string()];
    let doc = Document::from_root(
        el("div")
            .id("root")
            .child(tech_tags(&techs, "mb-4"))
            .into(),
    )
    .unwrap();
    let spans = doc.query_tag_within(doc.root(), "span");
    assert_eq!(spans.len(), 2);
    assert_eq!(doc.text_content(spans[1]), "Serde");
}

#[test]
fn scroll_button_carries_target() {
    let b = scroll_button("about", "btn", "Go");
    assert_eq!(b.get_attr("data-scroll-to"), Some("about"));
    assert_eq!(b.get_attr("type"), Some("button"));
    assert!(b.has_class("btn"));
}
