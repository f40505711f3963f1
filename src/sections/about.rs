use crate::{
    animation::{style::StyleProps, tween::Timing},
    content::ContentStore,
    dom::{document::Selector, node::el},
    scroll::{
        animator::RevealSpec,
        trigger::{Boundary, Edge},
    },
    sections::{
        CONTAINER, RevealRequest, SectionKind, SectionView, scroll_trigger, section_title,
        title_reveal,
    },
};

pub const TITLE_ID: &str = "about-title";
pub const CONTENT_ID: &str = "about-content";

pub fn render(store: &ContentStore) -> SectionView {
    let info = store.personal();
    let end = Some(Boundary::new(Edge::Top, Edge::Percent(50.0)));

    let content = el("div")
        .id(CONTENT_ID)
        .class("space-y-6 text-lg text-foreground/80 leading-relaxed")
        .child(el("p").text(info.bio.as_str()))
        .child(el("p").text(info.long_bio.as_str()))
        .child(el("p").class("text-foreground/60").text(format!(
            "Based in {}, I'm always open to discussing new projects, creative ideas, or \
             opportunities to be part of your visions.",
            info.location
        )));

    let root = el("section")
        .id("about")
        .class("py-20 md:py-32 relative bg-background")
        .child(
            el("div").class(CONTAINER).child(
                el("div")
                    .class("max-w-4xl mx-auto")
                    .child(section_title(TITLE_ID, "mb-12", "About Me"))
                    .child(content),
            ),
        );

    let paragraphs = RevealRequest {
        targets: Selector::tag_within(CONTENT_ID, "p"),
        anchor: Some(Selector::id(CONTENT_ID)),
        spec: RevealSpec::new(
            StyleProps::new().opacity(0.0).y(30.0),
            StyleProps::new().opacity(1.0).y(0.0),
            Timing::new(0.8),
        )
        .stagger(0.2)
        .trigger(scroll_trigger(end)),
    };

    SectionView::new(SectionKind::About, root)
        .reveal(title_reveal(TITLE_ID, end))
        .reveal(paragraphs)
}

#[cfg(test)]
#[path = "../../tests/unit/sections/about.rs"]
mod tests;
