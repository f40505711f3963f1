use crate::{
    animation::{ease::Ease, style::StyleProps, tween::Timing},
    content::{ContentStore, Project},
    dom::{
        document::Selector,
        node::{Element, el, external_link, icon},
    },
    scroll::animator::RevealSpec,
    sections::{
        CARD_SURFACE, CONTAINER, RevealRequest, SectionKind, SectionView, TECH_TAG,
        scroll_trigger, section_title, tech_tags, title_reveal,
    },
};

pub const TITLE_ID: &str = "projects-title";
pub const FEATURED_ID: &str = "projects-featured";
pub const OTHER_ID: &str = "projects-other";
pub const CARD_CLASS: &str = "project-card";

/// Technologies shown on a compact card.
pub const COMPACT_TECH_LIMIT: usize = 4;

fn link(href: &str, label: &str, icon_name: &str, icon_size: &str) -> Element {
    external_link(href)
        .class("flex items-center gap-2 text-sm text-foreground/70 hover:text-foreground transition-colors")
        .child(icon(icon_name, icon_size))
        .text(label)
}

fn links(project: &Project, live: &str, icon_size: &str) -> Element {
    el("div")
        .class("flex gap-4")
        .opt_child(
            project
                .live_url
                .as_deref()
                .map(|u| link(u, live, "external-link", icon_size)),
        )
        .opt_child(
            project
                .github_url
                .as_deref()
                .map(|u| link(u, "Code", "github", icon_size)),
        )
}

fn placeholder(project: &Project) -> Element {
    let initial: String = project.title.chars().take(1).collect();
    let inner = match project.image_url.as_deref() {
        Some(src) => el("img")
            .class("w-full h-full object-cover")
            .attr("src", src)
            .attr("alt", project.title.as_str()),
        None => el("div")
            .class("w-full h-full flex items-center justify-center text-6xl font-bold text-foreground/20")
            .text(initial),
    };
    el("div")
        .class("relative aspect-video rounded-lg overflow-hidden bg-linear-to-br from-blue-500/20 to-purple-600/20")
        .child(inner)
}

fn featured_card(project: &Project) -> Element {
    el("div")
        .class(CARD_CLASS)
        .class("group relative overflow-hidden rounded-2xl transition-all duration-300")
        .class(CARD_SURFACE)
        .attr("data-project", project.id.as_str())
        .child(
            el("div")
                .class("grid md:grid-cols-2 gap-8 p-6 md:p-8")
                .child(placeholder(project))
                .child(
                    el("div")
                        .class("flex flex-col justify-center space-y-4")
                        .child(
                            el("div")
                                .child(
                                    el("span")
                                        .class("text-sm text-foreground/60 mb-2 block")
                                        .text(project.category.as_str()),
                                )
                                .child(
                                    el("h3")
                                        .class("text-2xl md:text-3xl font-bold mb-4")
                                        .text(project.title.as_str()),
                                ),
                        )
                        .child(
                            el("p")
                                .class("text-foreground/70 leading-relaxed")
                                .text(project.description.as_str()),
                        )
                        .child(
                            el("p")
                                .class("text-foreground/60 text-sm leading-relaxed")
                                .text(project.long_description.as_str()),
                        )
                        .child(tech_tags(&project.technologies, "mb-4"))
                        .child(links(project, "Live Demo", "w-4 h-4")),
                ),
        )
}

fn compact_card(project: &Project) -> Element {
    el("div")
        .class(CARD_CLASS)
        .class("p-6 rounded-xl transition-all duration-300")
        .class(CARD_SURFACE)
        .attr("data-project", project.id.as_str())
        .child(
            el("div")
                .class("mb-4")
                .child(
                    el("span")
                        .class("text-xs text-foreground/60 mb-2 block")
                        .text(project.category.as_str()),
                )
                .child(
                    el("h4")
                        .class("text-xl font-bold mb-2")
                        .text(project.title.as_str()),
                )
                .child(
                    el("p")
                        .class("text-foreground/70 text-sm mb-4")
                        .text(project.description.as_str()),
                ),
        )
        .child(
            el("div").class("flex flex-wrap gap-2 mb-4").children(
                project
                    .technologies
                    .iter()
                    .take(COMPACT_TECH_LIMIT)
                    .map(|t| el("span").class(TECH_TAG).text(t.as_str())),
            ),
        )
        .child(links(project, "Live", "w-3 h-3"))
}

pub fn render(store: &ContentStore) -> SectionView {
    let others: Vec<&Project> = store.other_projects().collect();

    let featured = el("div")
        .id(FEATURED_ID)
        .class("space-y-12 mb-16")
        .children(store.featured_projects().map(featured_card));

    let mut container = el("div")
        .class(CONTAINER)
        .child(section_title(TITLE_ID, "mb-4", "Featured Projects"))
        .child(
            el("p")
                .class("text-center text-foreground/60 mb-16 max-w-2xl mx-auto")
                .text("A selection of projects I've worked on, showcasing my skills and experience"),
        )
        .child(featured);

    if !others.is_empty() {
        container = container
            .child(
                el("h3")
                    .class("text-2xl md:text-3xl font-bold mb-8 text-center")
                    .text("Other Projects"),
            )
            .child(
                el("div")
                    .id(OTHER_ID)
                    .class("grid md:grid-cols-2 gap-6")
                    .children(others.into_iter().map(compact_card)),
            );
    }

    let root = el("section")
        .id("projects")
        .class("py-20 md:py-32 relative bg-background")
        .child(container);

    let cards = RevealRequest {
        targets: Selector::class_within(FEATURED_ID, CARD_CLASS),
        anchor: Some(Selector::id(FEATURED_ID)),
        spec: RevealSpec::new(
            StyleProps::new().opacity(0.0).y(60.0).scale(0.95),
            StyleProps::new().opacity(1.0).y(0.0).scale(1.0),
            Timing::new(0.8).ease(Ease::OutQuart),
        )
        .stagger(0.15)
        .trigger(scroll_trigger(None)),
    };

    SectionView::new(SectionKind::Projects, root)
        .reveal(title_reveal(TITLE_ID, None))
        .reveal(cards)
}

#[cfg(test)]
#[path = "../../tests/unit/sections/projects.rs"]
mod tests;
