use crate::{
    content::ContentStore,
    dom::node::{Element, el, external_link},
    sections::{CONTAINER, SectionKind, SectionView},
};

pub const NAV_ID: &str = "nav";

/// Sections listed in the navigation bar, in order.
pub const LINKS: [SectionKind; 5] = [
    SectionKind::About,
    SectionKind::Skills,
    SectionKind::Projects,
    SectionKind::Experience,
    SectionKind::Contact,
];

fn label(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::About => "About",
        SectionKind::Skills => "Skills",
        SectionKind::Projects => "Projects",
        SectionKind::Experience => "Experience",
        SectionKind::Contact => "Contact",
        SectionKind::Navigation | SectionKind::Hero | SectionKind::Footer => "",
    }
}

fn anchor_link(target: &str, text: &str) -> Element {
    el("a")
        .attr("href", format!("#{target}"))
        .attr("data-scroll-to", target)
        .text(text)
}

pub fn render(store: &ContentStore) -> SectionView {
    let info = store.personal();

    let brand = anchor_link("home", &info.name).class(
        "text-xl font-bold bg-linear-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent",
    );

    let menu = el("div")
        .class("hidden md:flex items-center gap-8")
        .children(LINKS.into_iter().filter_map(|kind| {
            kind.anchor().map(|id| {
                anchor_link(id, label(kind))
                    .class("text-sm text-foreground/70 hover:text-foreground transition-colors")
            })
        }))
        .opt_child(info.resume_url.as_deref().map(|url| {
            external_link(url)
                .class("text-sm px-4 py-2 rounded-md border border-border hover:bg-accent transition-colors")
                .text("Resume")
        }));

    let root = el("nav")
        .id(NAV_ID)
        .class("fixed top-0 left-0 right-0 z-50 bg-background/80 backdrop-blur-md border-b border-border")
        .child(
            el("div").class(CONTAINER).child(
                el("div")
                    .class("flex items-center justify-between h-16")
                    .child(brand)
                    .child(menu),
            ),
        );

    SectionView::new(SectionKind::Navigation, root)
}

#[cfg(test)]
#[path = "../../tests/unit/sections/navigation.rs"]
mod tests;
