use crate::{
    animation::{ease::Ease, style::StyleProps, tween::Timing},
    content::ContentStore,
    dom::{
        document::Selector,
        node::{Element, el, external_link, icon},
    },
    scroll::{
        animator::{RevealSpec, ScrubSpec},
        trigger::{Boundary, Edge, TriggerSpec},
    },
    sections::{CONTAINER, RevealRequest, ScrubRequest, SectionKind, SectionView, scroll_button},
};

pub const TITLE_ID: &str = "hero-title";
pub const SUBTITLE_ID: &str = "hero-subtitle";
pub const CTA_ID: &str = "hero-cta";
pub const SOCIAL_ID: &str = "hero-social";

fn social_link(href: Element, label: &str, name: &str) -> Element {
    href.class("hover:text-foreground transition-colors")
        .attr("aria-label", label)
        .child(icon(name, "w-6 h-6"))
}

/// Entrance tween that plays once on the first frame after mount.
fn intro(target: &str, from: StyleProps, delay: f64) -> RevealRequest {
    let to = StyleProps {
        opacity: Some(1.0),
        x: from.x.map(|_| 0.0),
        y: from.y.map(|_| 0.0),
        scale: None,
    };
    RevealRequest {
        targets: Selector::id(target),
        anchor: None,
        spec: RevealSpec::new(
            from,
            to,
            Timing::new(1.0).delay(delay).ease(Ease::OutQuart),
        ),
    }
}

pub fn render(store: &ContentStore) -> SectionView {
    let info = store.personal();

    let backdrop = el("div")
        .class("absolute inset-0 overflow-hidden pointer-events-none")
        .child(el("div").class(
            "absolute top-1/4 left-1/4 w-96 h-96 bg-blue-500/10 rounded-full blur-3xl animate-pulse",
        ))
        .child(
            el("div")
                .class("absolute bottom-1/4 right-1/4 w-96 h-96 bg-purple-500/10 rounded-full blur-3xl animate-pulse")
                .attr("style", "animation-delay: 1s;"),
        );

    let title = el("h1")
        .id(TITLE_ID)
        .class("text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold mb-6 leading-tight")
        .child(
            el("span")
                .class("block bg-linear-to-r from-blue-400 via-purple-500 to-pink-500 bg-clip-text text-transparent")
                .text(info.name.as_str()),
        );

    let subtitle = el("p")
        .id(SUBTITLE_ID)
        .class("text-lg sm:text-xl md:text-2xl text-foreground/70 mb-12 max-w-2xl mx-auto")
        .text(info.title.as_str());

    let cta = el("div")
        .id(CTA_ID)
        .class("flex flex-col sm:flex-row gap-4 justify-center items-center mb-16")
        .child(scroll_button(
            "about",
            "bg-linear-to-r from-blue-500 to-purple-600 hover:from-blue-600 hover:to-purple-700 text-white border-0 px-8 py-4 rounded-md font-medium",
            "View My Work",
        ))
        .child(scroll_button(
            "contact",
            "border-2 border-foreground/20 hover:border-foreground/40 px-8 py-4 rounded-md font-medium",
            "Get In Touch",
        ));

    let social = el("div")
        .id(SOCIAL_ID)
        .class("flex justify-center items-center gap-6 text-foreground/60")
        .child(social_link(external_link(&info.github), "GitHub", "github"))
        .child(social_link(external_link(&info.linkedin), "LinkedIn", "linkedin"))
        .opt_child(
            info.twitter
                .as_deref()
                .map(|t| social_link(external_link(t), "Twitter", "twitter")),
        )
        .child(social_link(
            el("a").attr("href", format!("mailto:{}", info.email)),
            "Email",
            "mail",
        ));

    let indicator = el("div")
        .class("absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce")
        .child(
            el("button")
                .attr("type", "button")
                .attr("data-scroll-to", "about")
                .attr("aria-label", "Scroll down")
                .class("p-2 rounded-full hover:bg-accent transition-colors")
                .child(icon("arrow-down", "w-6 h-6 text-foreground/60")),
        );

    let root = el("section")
        .id("home")
        .class("relative min-h-screen flex items-center justify-center overflow-hidden bg-linear-to-b from-background via-background to-background/50")
        .child(backdrop)
        .child(
            el("div")
                .class(CONTAINER)
                .class("relative z-10")
                .child(
                    el("div")
                        .class("max-w-4xl mx-auto text-center")
                        .child(title)
                        .child(subtitle)
                        .child(cta)
                        .child(social),
                )
                .child(indicator),
        );

    SectionView::new(SectionKind::Hero, root)
        .reveal(intro(TITLE_ID, StyleProps::new().opacity(0.0).y(50.0), 0.0))
        .reveal(intro(SUBTITLE_ID, StyleProps::new().opacity(0.0).y(30.0), 0.3))
        .reveal(intro(CTA_ID, StyleProps::new().opacity(0.0).y(20.0), 0.6))
        .reveal(intro(SOCIAL_ID, StyleProps::new().opacity(0.0).x(-20.0), 0.9))
        .scrub(ScrubRequest {
            target: Selector::id(TITLE_ID),
            anchor: Some(Selector::id("home")),
            spec: ScrubSpec {
                to: StyleProps::new().y(-50.0),
                trigger: TriggerSpec::new(Boundary::new(Edge::Top, Edge::Top))
                    .end(Boundary::new(Edge::Bottom, Edge::Top)),
            },
        })
}

#[cfg(test)]
#[path = "../../tests/unit/sections/hero.rs"]
mod tests;
