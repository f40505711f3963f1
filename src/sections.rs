//! One renderer per page section.
//!
//! Each renderer is a pure function of the [`ContentStore`](crate::content::ContentStore) that
//! returns the section's element tree together with the reveal and scrub requests it wants
//! registered once the page is mounted.

pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod projects;
pub mod skills;

use crate::{
    animation::{style::StyleProps, tween::Timing},
    dom::{
        document::Selector,
        node::{Element, el},
    },
    scroll::{
        animator::{RevealSpec, ScrubSpec},
        trigger::{Boundary, Edge, ToggleActions, TriggerSpec},
    },
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Navigation,
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
    Footer,
}

impl SectionKind {
    /// Page order.
    pub const ALL: [SectionKind; 8] = [
        Self::Navigation,
        Self::Hero,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Experience,
        Self::Contact,
        Self::Footer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
            Self::Footer => "footer",
        }
    }

    /// Element id navigation links scroll to.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Self::Navigation => Some("nav"),
            Self::Hero => Some("home"),
            Self::About => Some("about"),
            Self::Skills => Some("skills"),
            Self::Projects => Some("projects"),
            Self::Experience => Some("experience"),
            Self::Contact => Some("contact"),
            Self::Footer => None,
        }
    }
}

/// Reveal or stagger registration addressed by selector.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealRequest {
    pub targets: Selector,
    /// Element the trigger is measured on; defaults to the first target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Selector>,
    pub spec: RevealSpec,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrubRequest {
    pub target: Selector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Selector>,
    pub spec: ScrubSpec,
}

/// Rendered section: markup plus the bindings to register at mount.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionView {
    pub kind: SectionKind,
    pub root: Element,
    pub reveals: Vec<RevealRequest>,
    pub scrubs: Vec<ScrubRequest>,
}

impl SectionView {
    pub(crate) fn new(kind: SectionKind, root: Element) -> Self {
        Self {
            kind,
            root,
            reveals: Vec::new(),
            scrubs: Vec::new(),
        }
    }

    pub(crate) fn reveal(mut self, request: RevealRequest) -> Self {
        self.reveals.push(request);
        self
    }

    pub(crate) fn scrub(mut self, request: ScrubRequest) -> Self {
        self.scrubs.push(request);
        self
    }
}

pub(crate) const CONTAINER: &str = "container mx-auto px-4 sm:px-6 lg:px-8";
pub(crate) const SECTION_TITLE: &str = "text-3xl md:text-4xl lg:text-5xl font-bold text-center";
pub(crate) const TECH_TAG: &str =
    "px-3 py-1 text-xs rounded-full bg-accent/50 text-foreground/80 border border-border";
pub(crate) const CARD_SURFACE: &str =
    "border border-border bg-background/50 hover:bg-background hover:border-border/80";

/// `top 80%`, optionally ending at `end`, with `play none none reverse`.
pub(crate) fn scroll_trigger(end: Option<Boundary>) -> TriggerSpec {
    let spec = TriggerSpec::new(Boundary::new(Edge::Top, Edge::Percent(80.0)))
        .actions(ToggleActions::reveal(true));
    match end {
        Some(end) => spec.end(end),
        None => spec,
    }
}

/// Section heading fade-up: opacity 0 and y 50 to rest over one second.
pub(crate) fn title_reveal(title_id: &str, end: Option<Boundary>) -> RevealRequest {
    RevealRequest {
        targets: Selector::id(title_id),
        anchor: None,
        spec: RevealSpec::new(
            StyleProps::new().opacity(0.0).y(50.0),
            StyleProps::new().opacity(1.0).y(0.0),
            Timing::new(1.0),
        )
        .trigger(scroll_trigger(end)),
    }
}

pub(crate) fn section_title(id: &str, margin: &str, text: &str) -> Element {
    el("h2")
        .id(id)
        .class(SECTION_TITLE)
        .class(margin)
        .text(text)
}

pub(crate) fn tech_tags<'a>(techs: impl IntoIterator<Item = &'a String>, class: &str) -> Element {
    el("div")
        .class("flex flex-wrap gap-2")
        .class(class)
        .children(techs.into_iter().map(|t| el("span").class(TECH_TAG).text(t.as_str())))
}

/// Button that scrolls to the element with id `target` when clicked.
pub(crate) fn scroll_button(target: &str, classes: &str, label: &str) -> Element {
    el("button")
        .attr("type", "button")
        .attr("data-scroll-to", target)
        .class(classes)
        .text(label)
}

#[cfg(test)]
#[path = "../tests/unit/sections/mod.rs"]
mod tests;
