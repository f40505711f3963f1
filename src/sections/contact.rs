use crate::{
    animation::{style::StyleProps, tween::Timing},
    contact::FormField,
    content::ContentStore,
    dom::{
        document::Selector,
        node::{Element, el, external_link, icon},
    },
    scroll::animator::RevealSpec,
    sections::{
        CARD_SURFACE, CONTAINER, RevealRequest, SectionKind, SectionView, scroll_trigger,
        section_title, title_reveal,
    },
};

pub const TITLE_ID: &str = "contact-title";
pub const CONTENT_ID: &str = "contact-content";
pub const FORM_ID: &str = "contact-form";

const INPUT: &str = "w-full px-4 py-3 rounded-lg border border-border bg-background/50 focus:outline-none focus:ring-2 focus:ring-blue-500 transition-all";

fn link_card(link: Element, icon_name: &str, label: &str, detail: &str) -> Element {
    link.class("flex items-center gap-4 p-4 rounded-lg transition-all group")
        .class(CARD_SURFACE)
        .child(
            el("div")
                .class("p-3 rounded-lg bg-accent/50 group-hover:bg-accent transition-colors")
                .child(icon(icon_name, "w-5 h-5")),
        )
        .child(
            el("div")
                .child(el("p").class("text-sm text-foreground/60").text(label))
                .child(el("p").class("font-medium").text(detail)),
        )
}

fn field(f: FormField, label: &str, control: Element) -> Element {
    el("div")
        .child(
            el("label")
                .class("block text-sm font-medium mb-2")
                .attr("for", f.as_str())
                .text(label),
        )
        .child(control.id(f.as_str()).attr("name", f.as_str()).attr("required", ""))
}

fn form() -> Element {
    el("form")
        .id(FORM_ID)
        .class("space-y-6")
        .child(field(
            FormField::Name,
            "Name",
            el("input")
                .attr("type", "text")
                .attr("placeholder", "Your name")
                .class(INPUT),
        ))
        .child(field(
            FormField::Email,
            "Email",
            el("input")
                .attr("type", "email")
                .attr("placeholder", "your.email@example.com")
                .class(INPUT),
        ))
        .child(field(
            FormField::Message,
            "Message",
            el("textarea")
                .attr("rows", "6")
                .attr("placeholder", "Your message...")
                .class(INPUT)
                .class("resize-none"),
        ))
        .child(
            el("button")
                .attr("type", "submit")
                .class("w-full flex items-center justify-center gap-2 bg-linear-to-r from-blue-500 to-purple-600 hover:from-blue-600 hover:to-purple-700 text-white px-6 py-3 rounded-md font-medium")
                .text("Send Message")
                .child(icon("send", "w-4 h-4")),
        )
}

pub fn render(store: &ContentStore) -> SectionView {
    let info = store.personal();

    let connect = el("div")
        .class("space-y-8")
        .child(
            el("div")
                .child(
                    el("h3")
                        .class("text-2xl font-bold mb-4")
                        .text("Let's Connect"),
                )
                .child(el("p").class("text-foreground/70 leading-relaxed").text(
                    "Feel free to reach out if you're looking for a developer, have a question, \
                     or just want to connect.",
                )),
        )
        .child(
            el("div")
                .class("space-y-4")
                .child(link_card(
                    el("a").attr("href", format!("mailto:{}", info.email)),
                    "mail",
                    "Email",
                    &info.email,
                ))
                .child(link_card(
                    external_link(&info.github),
                    "github",
                    "GitHub",
                    "View my work",
                ))
                .child(link_card(
                    external_link(&info.linkedin),
                    "linkedin",
                    "LinkedIn",
                    "Let's connect",
                )),
        );

    let content = el("div").id(CONTENT_ID).class("max-w-4xl mx-auto").child(
        el("div")
            .class("grid md:grid-cols-2 gap-12")
            .child(connect)
            .child(form()),
    );

    let root = el("section")
        .id("contact")
        .class("py-20 md:py-32 relative bg-background")
        .child(
            el("div")
                .class(CONTAINER)
                .child(section_title(TITLE_ID, "mb-4", "Get In Touch"))
                .child(
                    el("p")
                        .class("text-center text-foreground/60 mb-16 max-w-2xl mx-auto")
                        .text(
                            "I'm always open to discussing new projects, creative ideas, or \
                             opportunities to be part of your visions.",
                        ),
                )
                .child(content),
        );

    let body = RevealRequest {
        targets: Selector::id(CONTENT_ID),
        anchor: None,
        spec: RevealSpec::new(
            StyleProps::new().opacity(0.0).y(30.0),
            StyleProps::new().opacity(1.0).y(0.0),
            Timing::new(1.0).delay(0.2),
        )
        .trigger(scroll_trigger(None)),
    };

    SectionView::new(SectionKind::Contact, root)
        .reveal(title_reveal(TITLE_ID, None))
        .reveal(body)
}

#[cfg(test)]
#[path = "../../tests/unit/sections/contact.rs"]
mod tests;
