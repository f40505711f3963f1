use crate::{
    animation::{ease::Ease, style::StyleProps, tween::Timing},
    content::{ContentStore, Skill, SkillCategory, SkillLevel},
    dom::{
        document::Selector,
        node::{Element, el},
    },
    scroll::animator::RevealSpec,
    sections::{
        CARD_SURFACE, CONTAINER, RevealRequest, SectionKind, SectionView, scroll_trigger,
        section_title, title_reveal,
    },
};

pub const TITLE_ID: &str = "skills-title";
pub const GRID_ID: &str = "skills-grid";
pub const CARD_CLASS: &str = "skill-card";

pub fn level_color(level: SkillLevel) -> &'static str {
    match level {
        SkillLevel::Expert => "bg-gradient-to-r from-green-500 to-emerald-600",
        SkillLevel::Advanced => "bg-gradient-to-r from-blue-500 to-cyan-600",
        SkillLevel::Intermediate => "bg-gradient-to-r from-yellow-500 to-orange-600",
    }
}

/// Width class of the level bar.
pub fn level_width(level: SkillLevel) -> &'static str {
    match level {
        SkillLevel::Expert => "w-full",
        SkillLevel::Advanced => "w-4/5",
        SkillLevel::Intermediate => "w-3/5",
    }
}

fn card(skill: &Skill) -> Element {
    el("div")
        .class(CARD_CLASS)
        .class("p-4 rounded-lg transition-all")
        .class(CARD_SURFACE)
        .child(
            el("div")
                .class("flex justify-between items-center mb-2")
                .child(
                    el("span")
                        .class("font-medium text-foreground")
                        .text(skill.name.as_str()),
                )
                .child(
                    el("span")
                        .class("text-sm text-foreground/60 capitalize")
                        .text(skill.level.as_str()),
                ),
        )
        .child(
            el("div")
                .class("h-2 bg-foreground/10 rounded-full overflow-hidden")
                .child(
                    el("div")
                        .class("h-full transition-all duration-1000")
                        .class(level_color(skill.level))
                        .class(level_width(skill.level)),
                ),
        )
}

fn category_block(category: SkillCategory, skills: &[&Skill]) -> Element {
    el("div")
        .class("space-y-4")
        .attr("data-category", category.as_str())
        .child(
            el("h3")
                .class("text-xl md:text-2xl font-semibold mb-6 text-foreground/90")
                .text(category.label()),
        )
        .child(
            el("div")
                .class("grid grid-cols-1 md:grid-cols-2 gap-4")
                .children(skills.iter().map(|s| card(s))),
        )
}

pub fn render(store: &ContentStore) -> SectionView {
    let grid = el("div").id(GRID_ID).class("space-y-12").children(
        SkillCategory::ALL.into_iter().filter_map(|category| {
            let skills: Vec<&Skill> = store.skills_in(category).collect();
            (!skills.is_empty()).then(|| category_block(category, &skills))
        }),
    );

    let root = el("section")
        .id("skills")
        .class("py-20 md:py-32 relative bg-background/50")
        .child(
            el("div")
                .class(CONTAINER)
                .child(section_title(TITLE_ID, "mb-16", "Skills & Technologies"))
                .child(grid),
        );

    let cards = RevealRequest {
        targets: Selector::class_within(GRID_ID, CARD_CLASS),
        anchor: Some(Selector::id(GRID_ID)),
        spec: RevealSpec::new(
            StyleProps::new().opacity(0.0).y(30.0).scale(0.9),
            StyleProps::new().opacity(1.0).y(0.0).scale(1.0),
            Timing::new(0.6).ease(Ease::OutBack { overshoot: 1.7 }),
        )
        .stagger(0.05)
        .trigger(scroll_trigger(None)),
    };

    SectionView::new(SectionKind::Skills, root)
        .reveal(title_reveal(TITLE_ID, None))
        .reveal(cards)
}

#[cfg(test)]
#[path = "../../tests/unit/sections/skills.rs"]
mod tests;
