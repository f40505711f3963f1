use crate::{
    animation::{ease::Ease, style::StyleProps, tween::Timing},
    content::{ContentStore, Experience},
    dom::{
        document::Selector,
        node::{Element, el, icon},
    },
    scroll::animator::RevealSpec,
    sections::{
        CARD_SURFACE, CONTAINER, RevealRequest, SectionKind, SectionView, scroll_trigger,
        section_title, tech_tags, title_reveal,
    },
};

pub const TITLE_ID: &str = "experience-title";
pub const TIMELINE_ID: &str = "experience-timeline";
pub const ITEM_CLASS: &str = "timeline-item";

fn meta(icon_name: &str, value: String) -> Element {
    el("div")
        .class("flex items-center gap-2")
        .child(icon(icon_name, "w-4 h-4"))
        .child(el("span").text(value))
}

fn item(exp: &Experience) -> Element {
    let dot = el("div").class(
        "absolute left-6 top-2 w-4 h-4 rounded-full bg-linear-to-r from-blue-500 to-purple-600 border-4 border-background",
    );
    let dot = if exp.end_date.is_present() {
        dot.class("animate-pulse")
    } else {
        dot
    };

    let card = el("div")
        .class("p-6 rounded-xl transition-all duration-300")
        .class(CARD_SURFACE)
        .child(
            el("div")
                .class("mb-4")
                .child(
                    el("h3")
                        .class("text-xl md:text-2xl font-bold mb-1")
                        .text(exp.position.as_str()),
                )
                .child(
                    el("h4")
                        .class("text-lg text-foreground/90 mb-3")
                        .text(exp.company.as_str()),
                )
                .child(
                    el("div")
                        .class("flex flex-wrap gap-4 text-sm text-foreground/60 mb-4")
                        .child(meta("calendar", exp.period()))
                        .child(meta("map-pin", exp.location.clone())),
                ),
        )
        .child(el("ul").class("space-y-2 mb-4").children(exp.description.iter().map(
            |line| {
                el("li")
                    .class("text-foreground/70 flex items-start gap-2")
                    .child(el("span").class("text-blue-400 mt-2").text("▹"))
                    .child(el("span").text(line.as_str()))
            },
        )))
        .child(tech_tags(&exp.technologies, "pt-4 border-t border-border"));

    el("div")
        .class(ITEM_CLASS)
        .class("relative pl-20 md:pl-24")
        .attr("data-experience", exp.id.as_str())
        .child(dot)
        .child(card)
}

pub fn render(store: &ContentStore) -> SectionView {
    let timeline = el("div").id(TIMELINE_ID).class("max-w-4xl mx-auto").child(
        el("div")
            .class("relative")
            .child(el("div").class(
                "absolute left-8 top-0 bottom-0 w-0.5 bg-linear-to-b from-blue-500 via-purple-500 to-pink-500",
            ))
            .child(
                el("div")
                    .class("space-y-12")
                    .children(store.experiences().iter().map(item)),
            ),
    );

    let root = el("section")
        .id("experience")
        .class("py-20 md:py-32 relative bg-background/50")
        .child(
            el("div")
                .class(CONTAINER)
                .child(section_title(TITLE_ID, "mb-16", "Experience"))
                .child(timeline),
        );

    let items = RevealRequest {
        targets: Selector::class_within(TIMELINE_ID, ITEM_CLASS),
        anchor: Some(Selector::id(TIMELINE_ID)),
        spec: RevealSpec::new(
            StyleProps::new().opacity(0.0).x(-50.0),
            StyleProps::new().opacity(1.0).x(0.0),
            Timing::new(0.8).ease(Ease::OutQuart),
        )
        .stagger(0.2)
        .trigger(scroll_trigger(None)),
    };

    SectionView::new(SectionKind::Experience, root)
        .reveal(title_reveal(TITLE_ID, None))
        .reveal(items)
}

#[cfg(test)]
#[path = "../../tests/unit/sections/experience.rs"]
mod tests;
