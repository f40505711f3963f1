//! Root composition: every section assembled into one page tree.

use chrono::Datelike;

use crate::{
    content::ContentStore,
    dom::{
        document::Document,
        node::{Node, el},
    },
    foundation::error::FolioResult,
    sections::{
        RevealRequest, ScrubRequest, SectionKind, SectionView, about, contact, experience,
        footer, hero, navigation, projects, skills,
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComposeOpts {
    /// Footer copyright year. `None` uses the current local year.
    pub year: Option<i32>,
}

/// Animation requests of one mounted section.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionEntry {
    pub kind: SectionKind,
    pub reveals: Vec<RevealRequest>,
    pub scrubs: Vec<ScrubRequest>,
}

/// Everything a client runtime needs to wire the page's animations.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Manifest {
    pub title: String,
    pub sections: Vec<SectionEntry>,
}

/// A composed page: the element tree plus the bindings each section asks for.
#[derive(Clone, Debug)]
pub struct Page {
    title: String,
    root: Node,
    sections: Vec<SectionEntry>,
}

impl Page {
    #[tracing::instrument(skip_all)]
    pub fn compose(store: &ContentStore, opts: &ComposeOpts) -> Self {
        let year = opts.year.unwrap_or_else(|| chrono::Local::now().year());
        let info = store.personal();

        let nav = navigation::render(store);
        let main = [
            hero::render(store),
            about::render(store),
            skills::render(store),
            projects::render(store),
            experience::render(store),
            contact::render(store),
        ];
        let foot = footer::render(store, year);

        let mut sections = Vec::with_capacity(SectionKind::ALL.len());
        let mut split = |view: SectionView| {
            sections.push(SectionEntry {
                kind: view.kind,
                reveals: view.reveals,
                scrubs: view.scrubs,
            });
            view.root
        };

        let nav_root = split(nav);
        let main_roots: Vec<_> = main.into_iter().map(&mut split).collect();
        let foot_root = split(foot);

        let root = el("div")
            .class("min-h-screen bg-background text-foreground")
            .child(nav_root)
            .child(el("main").children(main_roots))
            .child(foot_root);

        tracing::debug!(sections = sections.len(), year, "page composed");
        Self {
            title: format!("{} | {}", info.name, info.title),
            root: root.into(),
            sections,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Sections in page order.
    pub fn sections(&self) -> &[SectionEntry] {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> Option<&SectionEntry> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Flatten the tree. Fails only on duplicate element ids.
    pub fn document(&self) -> FolioResult<Document> {
        Document::from_root(self.root.clone())
    }

    pub fn manifest(&self) -> Manifest {
        Manifest {
            title: self.title.clone(),
            sections: self.sections.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/page.rs"]
mod tests;
