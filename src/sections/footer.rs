use crate::{
    content::ContentStore,
    dom::node::{Element, el, external_link, icon},
    sections::{CONTAINER, SectionKind, SectionView},
};

fn social(link: Element, label: &str, name: &str) -> Element {
    link.class("text-foreground/60 hover:text-foreground transition-colors")
        .attr("aria-label", label)
        .child(icon(name, "w-5 h-5"))
}

/// Footer with the copyright line for `year`. Registers no animations.
pub fn render(store: &ContentStore, year: i32) -> SectionView {
    let info = store.personal();

    let credit = el("p")
        .class("text-foreground/60 text-sm flex items-center gap-1")
        .text(format!("© {year} {}. Made with ", info.name))
        .child(icon("heart", "w-4 h-4 text-red-500 fill-red-500"))
        .text(" using Rust");

    let links = el("div")
        .class("flex items-center gap-6")
        .child(social(external_link(&info.github), "GitHub", "github"))
        .child(social(external_link(&info.linkedin), "LinkedIn", "linkedin"))
        .child(social(
            el("a").attr("href", format!("mailto:{}", info.email)),
            "Email",
            "mail",
        ));

    let root = el("footer")
        .class("border-t border-border bg-background/50")
        .child(
            el("div").class(CONTAINER).class("py-8").child(
                el("div")
                    .class("flex flex-col md:flex-row justify-between items-center gap-4")
                    .child(credit)
                    .child(links),
            ),
        );

    SectionView::new(SectionKind::Footer, root)
}

#[cfg(test)]
#[path = "../../tests/unit/sections/footer.rs"]
mod tests;
