use std::collections::BTreeMap;

use crate::{
    animation::style::Style,
    config::SiteConfig,
    dom::document::{Document, NodeId},
    foundation::{
        core::{ScrollDirection, Viewport},
        error::FolioResult,
        math::clamp01,
    },
    layout::{Layout, solve},
    page::{Page, SectionEntry},
    scroll::{
        animator::{AnimatorReport, RevealScope, ScrollAnimator},
        host::ScrollHost,
        smooth::{ScrollFrame, ScrollInput, ScrollTarget, ScrollToOpts, SmoothScroll},
    },
    sections::SectionKind,
};

/// Options controlling [`PageSession`] mounting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionOpts {
    /// Wrap the page in a smooth scroll controller. Without one, input and navigation
    /// move the native offset directly.
    pub smooth: bool,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self { smooth: true }
    }
}

/// Result of one [`PageSession::frame`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameReport {
    pub frame: ScrollFrame,
    pub animator: AnimatorReport,
}

/// How a navigation request was carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigateOutcome {
    /// Eased scroll through the controller.
    Smooth,
    /// Instant native jump; no controller is mounted.
    Native,
    /// The controller is stopped and ignored the request.
    Ignored,
    /// No element with that id, or it has no layout box.
    Missing,
}

/// A composed page mounted into a headless window.
///
/// Owns the document, its layout, the scroll host, the optional smooth scroll controller
/// and the animator. Each section's bindings live under their own scope, released when the
/// section or the whole session is unmounted.
pub struct PageSession {
    page: Page,
    config: SiteConfig,
    doc: Document,
    layout: Layout,
    host: ScrollHost,
    smooth: Option<SmoothScroll>,
    animator: ScrollAnimator,
    scopes: BTreeMap<SectionKind, RevealScope>,
    last_offset: f64,
}

impl PageSession {
    pub fn mount(page: Page, config: &SiteConfig) -> FolioResult<Self> {
        Self::mount_with(page, config, SessionOpts::default())
    }

    #[tracing::instrument(skip_all, fields(title = page.title(), smooth = opts.smooth))]
    pub fn mount_with(page: Page, config: &SiteConfig, opts: SessionOpts) -> FolioResult<Self> {
        config.validate()?;
        let doc = page.document()?;
        let layout = solve(&doc, config.viewport, &config.text)?;
        let host = ScrollHost::new(config.viewport, layout.document_height())?;
        let smooth = if opts.smooth {
            Some(SmoothScroll::new(config.scroll, &host)?)
        } else {
            None
        };
        let mut animator = ScrollAnimator::new(host.scroll_y());

        let mut scopes = BTreeMap::new();
        for entry in page.sections() {
            let scope = animator.scope(entry.kind.as_str());
            register_section(&mut animator, &scope, entry, &doc, &layout)?;
            scopes.insert(entry.kind, scope);
        }

        tracing::debug!(
            reveals = animator.reveal_count(),
            scrubs = animator.scrub_count(),
            document_height = layout.document_height(),
            "page mounted"
        );
        Ok(Self {
            last_offset: host.scroll_y(),
            page,
            config: *config,
            doc,
            layout,
            host,
            smooth,
            animator,
            scopes,
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn host(&self) -> &ScrollHost {
        &self.host
    }

    pub fn animator(&self) -> &ScrollAnimator {
        &self.animator
    }

    pub fn smooth(&self) -> Option<&SmoothScroll> {
        self.smooth.as_ref()
    }

    pub fn smooth_mut(&mut self) -> Option<&mut SmoothScroll> {
        self.smooth.as_mut()
    }

    /// Sections whose bindings are still registered.
    pub fn mounted_sections(&self) -> Vec<SectionKind> {
        self.scopes.keys().copied().collect()
    }

    /// Native scroll offset of the window.
    pub fn scroll_offset(&self) -> f64 {
        self.host.scroll_y()
    }

    /// Deliver wheel or touch input. Returns false when nothing moved.
    pub fn input(&mut self, input: ScrollInput) -> bool {
        match &mut self.smooth {
            Some(smooth) => smooth.on_input(input),
            None => {
                let delta = match input {
                    ScrollInput::Wheel { delta_y } | ScrollInput::Touch { delta_y } => delta_y,
                };
                if !delta.is_finite() || delta == 0.0 {
                    return false;
                }
                let before = self.host.scroll_y();
                self.host.set_scroll(before + delta) != before
            }
        }
    }

    /// Run one animation frame at `now` seconds: the controller first, then the animator.
    pub fn frame(&mut self, now: f64) -> FrameReport {
        let frame = match &mut self.smooth {
            Some(smooth) => smooth.raf(now, &mut self.host),
            None => self.native_frame(now),
        };
        self.last_offset = frame.offset;
        let animator = self.animator.update(&frame);
        FrameReport { frame, animator }
    }

    fn native_frame(&self, now: f64) -> ScrollFrame {
        let offset = self.host.scroll_y();
        let velocity = offset - self.last_offset;
        let limit = self.host.limit();
        ScrollFrame {
            time_s: now,
            offset,
            velocity,
            direction: if velocity > 0.0 {
                ScrollDirection::Down
            } else if velocity < 0.0 {
                ScrollDirection::Up
            } else {
                ScrollDirection::Idle
            },
            progress: if limit > 0.0 { clamp01(offset / limit) } else { 0.0 },
            limit,
        }
    }

    /// Scroll to the element with id `target`, keeping clear of the fixed navigation bar.
    ///
    /// Without a controller this falls back to an instant native jump without the offset.
    pub fn navigate(&mut self, target: &str) -> NavigateOutcome {
        let Some(node) = self.doc.get_element_by_id(target) else {
            tracing::debug!(target, "navigation target not found");
            return NavigateOutcome::Missing;
        };
        let Some(top) = self.layout.top(node) else {
            tracing::debug!(target, "navigation target has no layout box");
            return NavigateOutcome::Missing;
        };
        match &mut self.smooth {
            Some(smooth) => {
                let opts = ScrollToOpts {
                    offset: self.config.navigation.offset,
                    duration: Some(self.config.navigation.duration),
                    immediate: false,
                };
                if smooth.scroll_to(ScrollTarget::Element(node), opts, &self.layout) {
                    NavigateOutcome::Smooth
                } else {
                    NavigateOutcome::Ignored
                }
            }
            None => {
                self.host.scroll_into_view(top, 0.0);
                NavigateOutcome::Native
            }
        }
    }

    /// Follow the `data-scroll-to` target of `node`, as a click on a link or CTA would.
    pub fn activate(&mut self, node: NodeId) -> Option<NavigateOutcome> {
        let target = self.doc.attr(node, "data-scroll-to")?.to_string();
        Some(self.navigate(&target))
    }

    /// Relayout for a new viewport and re-measure every trigger.
    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self, viewport: Viewport) -> FolioResult<()> {
        viewport.validate()?;
        self.layout = solve(&self.doc, viewport, &self.config.text)?;
        self.host.resize(viewport, self.layout.document_height())?;
        self.config.viewport = viewport;
        if let Some(smooth) = &mut self.smooth {
            smooth.set_limit(self.host.limit());
        }
        self.animator.refresh(&self.layout);
        Ok(())
    }

    /// Release one section's bindings. Returns how many were dropped.
    pub fn unmount_section(&mut self, kind: SectionKind) -> usize {
        match self.scopes.remove(&kind) {
            Some(scope) => self.animator.release(scope),
            None => 0,
        }
    }

    /// Tear down the controller and release every remaining scope.
    pub fn unmount(mut self) -> usize {
        self.release_all()
    }

    fn release_all(&mut self) -> usize {
        self.smooth = None;
        let scopes = std::mem::take(&mut self.scopes);
        scopes
            .into_values()
            .map(|scope| self.animator.release(scope))
            .sum()
    }

    /// Computed style of the element with id `id`.
    pub fn style_of(&self, id: &str) -> Option<Style> {
        self.doc
            .get_element_by_id(id)
            .map(|node| self.animator.style_of(node))
    }

    pub fn style_of_node(&self, node: NodeId) -> Style {
        self.animator.style_of(node)
    }
}

impl Drop for PageSession {
    fn drop(&mut self) {
        if !self.scopes.is_empty() {
            self.release_all();
        }
    }
}

fn register_section(
    animator: &mut ScrollAnimator,
    scope: &RevealScope,
    entry: &SectionEntry,
    doc: &Document,
    layout: &Layout,
) -> FolioResult<()> {
    for req in &entry.reveals {
        let targets = req.targets.resolve(doc);
        let anchor = match &req.anchor {
            Some(sel) => match sel.resolve(doc).first() {
                Some(&a) => Some(a),
                None => {
                    tracing::debug!(
                        section = entry.kind.as_str(),
                        ?sel,
                        "reveal anchor not found"
                    );
                    continue;
                }
            },
            None => None,
        };
        animator.register_stagger(scope, &targets, anchor, &req.spec, layout)?;
    }
    for req in &entry.scrubs {
        let Some(&target) = req.target.resolve(doc).first() else {
            tracing::debug!(
                section = entry.kind.as_str(),
                target = ?req.target,
                "scrub target not found"
            );
            continue;
        };
        let anchor = req
            .anchor
            .as_ref()
            .and_then(|sel| sel.resolve(doc).first().copied());
        animator.register_scrub(scope, target, anchor, &req.spec, layout)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/session/page_session.rs"]
mod tests;
