use std::collections::BTreeMap;

use crate::{
    animation::{
        playhead::Playhead,
        style::{Lerp, Style, StyleProps},
        tween::{GroupTween, Timing},
    },
    dom::document::NodeId,
    foundation::error::{FolioError, FolioResult},
    layout::Layout,
    scroll::{
        smooth::ScrollFrame,
        trigger::{Region, ToggleAction, Transition, TriggerOffsets, TriggerSpec},
    },
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct BindingId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct ScopeId(pub u64);

/// Registration handle owned by one section.
///
/// Every binding is registered under a scope; [`ScrollAnimator::release`] consumes the handle
/// and tears all of them down.
#[must_use = "scopes must be handed back to ScrollAnimator::release"]
#[derive(Debug, PartialEq, Eq)]
pub struct RevealScope {
    id: ScopeId,
    label: String,
}

impl RevealScope {
    pub fn id(&self) -> ScopeId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A reveal or stagger tween, optionally keyed to a scroll trigger.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RevealSpec {
    /// State applied at registration and restored by a reverse.
    pub from: StyleProps,
    /// State reached once the tween has played.
    #[serde(default)]
    pub to: StyleProps,
    #[serde(default)]
    pub timing: Timing,
    /// Seconds between consecutive group members.
    #[serde(default)]
    pub stagger: f64,
    /// `None` plays once on the first frame after registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<TriggerSpec>,
}

impl RevealSpec {
    pub fn new(from: StyleProps, to: StyleProps, timing: Timing) -> Self {
        Self {
            from,
            to,
            timing,
            stagger: 0.0,
            trigger: None,
        }
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn trigger(mut self, trigger: TriggerSpec) -> Self {
        self.trigger = Some(trigger);
        self
    }

    pub fn validate(&self) -> FolioResult<()> {
        if !(self.from.all_finite() && self.to.all_finite()) {
            return Err(FolioError::animation("reveal styles must be finite"));
        }
        self.tween().validate()
    }

    fn tween(&self) -> GroupTween {
        GroupTween {
            from: self.from.resolve(Style::IDENTITY),
            to: self.to.resolve(Style::IDENTITY),
            timing: self.timing,
            stagger: self.stagger,
        }
    }
}

/// Scroll-scrubbed overlay: trigger progress maps straight onto `to`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScrubSpec {
    pub to: StyleProps,
    pub trigger: TriggerSpec,
}

impl ScrubSpec {
    pub fn validate(&self) -> FolioResult<()> {
        if !self.to.all_finite() {
            return Err(FolioError::animation("scrub style must be finite"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TriggerEvent {
    pub binding: BindingId,
    /// Label of the owning scope.
    pub scope: String,
    pub transition: Transition,
    pub action: ToggleAction,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct AnimatorReport {
    pub events: Vec<TriggerEvent>,
    /// Reveal bindings still interpolating after this frame.
    pub running: usize,
}

#[derive(Clone, Debug)]
struct Armed {
    spec: TriggerSpec,
    anchor: NodeId,
    offsets: TriggerOffsets,
    region: Region,
}

impl Armed {
    fn arm(spec: TriggerSpec, anchor: NodeId, layout: &Layout, offset: f64) -> Option<Self> {
        let rect = layout.rect(anchor)?;
        let offsets = spec.offsets(rect, layout.viewport().height);
        Some(Self {
            spec,
            anchor,
            offsets,
            region: offsets.region(offset),
        })
    }
}

#[derive(Clone, Debug)]
struct Reveal {
    scope: ScopeId,
    /// Members with their stagger index at registration.
    members: Vec<(NodeId, usize)>,
    tween: GroupTween,
    playhead: Playhead,
    trigger: Option<Armed>,
    intro_pending: bool,
}

#[derive(Clone, Debug)]
struct Scrub {
    scope: ScopeId,
    target: NodeId,
    to: Style,
    trigger: Armed,
}

/// Scroll-linked reveal runtime.
///
/// Reads only the offsets published in [`ScrollFrame`]s; it never scrolls anything itself.
#[derive(Clone, Debug, Default)]
pub struct ScrollAnimator {
    offset: f64,
    next_binding: u64,
    next_scope: u64,
    scope_labels: BTreeMap<ScopeId, String>,
    reveals: BTreeMap<BindingId, Reveal>,
    scrubs: BTreeMap<BindingId, Scrub>,
    owner: BTreeMap<NodeId, BindingId>,
    styles: BTreeMap<NodeId, Style>,
    overlays: BTreeMap<NodeId, Style>,
}

impl ScrollAnimator {
    /// Start with `offset` as the last published scroll position.
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn scope(&mut self, label: &str) -> RevealScope {
        let id = ScopeId(self.next_scope);
        self.next_scope += 1;
        self.scope_labels.insert(id, label.to_string());
        RevealScope {
            id,
            label: label.to_string(),
        }
    }

    fn next_id(&mut self) -> BindingId {
        let id = BindingId(self.next_binding);
        self.next_binding += 1;
        id
    }

    /// Register a single-element reveal. See [`ScrollAnimator::register_stagger`].
    pub fn register_reveal(
        &mut self,
        scope: &RevealScope,
        target: NodeId,
        spec: &RevealSpec,
        layout: &Layout,
    ) -> FolioResult<Option<BindingId>> {
        self.register_stagger(scope, &[target], None, spec, layout)
    }

    /// Register a stagger group sharing one trigger.
    ///
    /// Targets without a layout box are skipped. The trigger is measured on `anchor`, or on
    /// the first target. Each target is detached from any earlier reveal binding and set to
    /// `from` immediately. Returns `None` when nothing was registered.
    pub fn register_stagger(
        &mut self,
        scope: &RevealScope,
        targets: &[NodeId],
        anchor: Option<NodeId>,
        spec: &RevealSpec,
        layout: &Layout,
    ) -> FolioResult<Option<BindingId>> {
        spec.validate()?;
        let members: Vec<NodeId> = targets
            .iter()
            .copied()
            .filter(|&id| {
                let present = layout.rect(id).is_some();
                if !present {
                    tracing::debug!(?id, scope = scope.label(), "reveal target has no layout box");
                }
                present
            })
            .collect();
        if members.is_empty() {
            tracing::debug!(scope = scope.label(), "reveal registered no targets");
            return Ok(None);
        }

        let trigger = match spec.trigger {
            None => None,
            Some(trigger) => {
                let anchor = anchor.unwrap_or(members[0]);
                match Armed::arm(trigger, anchor, layout, self.offset) {
                    Some(armed) => Some(armed),
                    None => {
                        tracing::debug!(
                            ?anchor,
                            scope = scope.label(),
                            "trigger anchor has no layout box"
                        );
                        return Ok(None);
                    }
                }
            }
        };

        for &id in &members {
            self.detach(id);
        }

        let tween = spec.tween();
        let id = self.next_id();
        for (i, &node) in members.iter().enumerate() {
            self.owner.insert(node, id);
            self.styles.insert(node, tween.sample(0.0, i));
        }
        let playhead = Playhead::new(tween.total(members.len()));
        self.reveals.insert(
            id,
            Reveal {
                scope: scope.id,
                members: members.into_iter().enumerate().map(|(i, n)| (n, i)).collect(),
                intro_pending: trigger.is_none(),
                tween,
                playhead,
                trigger,
            },
        );
        Ok(Some(id))
    }

    /// Register a scrubbed overlay on `target`, measured on `anchor` (or the target).
    pub fn register_scrub(
        &mut self,
        scope: &RevealScope,
        target: NodeId,
        anchor: Option<NodeId>,
        spec: &ScrubSpec,
        layout: &Layout,
    ) -> FolioResult<Option<BindingId>> {
        spec.validate()?;
        if layout.rect(target).is_none() {
            tracing::debug!(?target, scope = scope.label(), "scrub target has no layout box");
            return Ok(None);
        }
        let Some(trigger) = Armed::arm(spec.trigger, anchor.unwrap_or(target), layout, self.offset)
        else {
            tracing::debug!(scope = scope.label(), "scrub anchor has no layout box");
            return Ok(None);
        };

        // One scrub per element.
        let stale: Vec<BindingId> = self
            .scrubs
            .iter()
            .filter(|(_, s)| s.target == target)
            .map(|(id, _)| *id)
            .collect();
        for id in stale {
            self.scrubs.remove(&id);
        }

        let to = spec.to.resolve(Style::IDENTITY);
        let id = self.next_id();
        let progress = trigger.offsets.progress(self.offset);
        self.overlays
            .insert(target, Style::lerp(&Style::IDENTITY, &to, progress));
        self.scrubs.insert(
            id,
            Scrub {
                scope: scope.id,
                target,
                to,
                trigger,
            },
        );
        Ok(Some(id))
    }

    /// Remove `node` from its reveal binding, dropping the binding once empty.
    fn detach(&mut self, node: NodeId) {
        let Some(prev) = self.owner.remove(&node) else {
            return;
        };
        self.styles.remove(&node);
        let empty = match self.reveals.get_mut(&prev) {
            Some(binding) => {
                binding.members.retain(|(n, _)| *n != node);
                binding.members.is_empty()
            }
            None => false,
        };
        if empty {
            self.reveals.remove(&prev);
        }
    }

    /// Drop every binding registered under `scope` and restore its elements' base styles.
    pub fn release(&mut self, scope: RevealScope) -> usize {
        let reveals: Vec<BindingId> = self
            .reveals
            .iter()
            .filter(|(_, b)| b.scope == scope.id)
            .map(|(id, _)| *id)
            .collect();
        let scrubs: Vec<BindingId> = self
            .scrubs
            .iter()
            .filter(|(_, s)| s.scope == scope.id)
            .map(|(id, _)| *id)
            .collect();

        for id in &reveals {
            if let Some(binding) = self.reveals.remove(id) {
                for (node, _) in binding.members {
                    self.owner.remove(&node);
                    self.styles.remove(&node);
                }
            }
        }
        for id in &scrubs {
            if let Some(scrub) = self.scrubs.remove(id) {
                self.overlays.remove(&scrub.target);
            }
        }
        self.scope_labels.remove(&scope.id);
        tracing::debug!(
            scope = scope.label(),
            released = reveals.len() + scrubs.len(),
            "released scope"
        );
        reveals.len() + scrubs.len()
    }

    /// Re-measure every trigger after a relayout. Regions are re-derived without firing.
    pub fn refresh(&mut self, layout: &Layout) {
        let offset = self.offset;
        let vh = layout.viewport().height;
        let remeasure = |armed: &mut Armed| {
            if let Some(rect) = layout.rect(armed.anchor) {
                armed.offsets = armed.spec.offsets(rect, vh);
            }
            armed.region = armed.offsets.region(offset);
        };
        for binding in self.reveals.values_mut() {
            if let Some(armed) = &mut binding.trigger {
                remeasure(armed);
            }
        }
        for scrub in self.scrubs.values_mut() {
            remeasure(&mut scrub.trigger);
            self.overlays.insert(
                scrub.target,
                Style::lerp(&Style::IDENTITY, &scrub.to, scrub.trigger.offsets.progress(offset)),
            );
        }
    }

    /// Consume one published frame: fire crossings, advance playheads, recompute styles.
    pub fn update(&mut self, frame: &ScrollFrame) -> AnimatorReport {
        let now = frame.time_s;
        self.offset = frame.offset;
        let mut report = AnimatorReport::default();

        for (&id, binding) in self.reveals.iter_mut() {
            if binding.intro_pending {
                binding.intro_pending = false;
                binding.playhead.play(now);
            }
            if let Some(armed) = &mut binding.trigger {
                let region = armed.offsets.region(frame.offset);
                for &transition in Transition::between(armed.region, region) {
                    let action = armed.spec.actions.for_transition(transition);
                    apply_action(&mut binding.playhead, action, now);
                    let scope = self
                        .scope_labels
                        .get(&binding.scope)
                        .cloned()
                        .unwrap_or_default();
                    tracing::debug!(?id, %scope, ?transition, ?action, "trigger crossed");
                    report.events.push(TriggerEvent {
                        binding: id,
                        scope,
                        transition,
                        action,
                    });
                }
                armed.region = region;
            }
            binding.playhead.tick(now);
            if binding.playhead.is_running() {
                report.running += 1;
            }
            let position = binding.playhead.position();
            for &(node, index) in &binding.members {
                self.styles.insert(node, binding.tween.sample(position, index));
            }
        }

        for scrub in self.scrubs.values_mut() {
            let progress = scrub.trigger.offsets.progress(frame.offset);
            scrub.trigger.region = scrub.trigger.offsets.region(frame.offset);
            self.overlays.insert(
                scrub.target,
                Style::lerp(&Style::IDENTITY, &scrub.to, progress),
            );
        }
        report
    }

    /// Computed style: the reveal state with any scrub overlay on top.
    pub fn style_of(&self, node: NodeId) -> Style {
        let base = self.styles.get(&node).copied().unwrap_or(Style::IDENTITY);
        match self.overlays.get(&node) {
            Some(overlay) => base.compose(overlay),
            None => base,
        }
    }

    pub fn is_bound(&self, node: NodeId) -> bool {
        self.owner.contains_key(&node) || self.scrubs.values().any(|s| s.target == node)
    }

    /// Reveal binding that currently owns `node`.
    pub fn binding_of(&self, node: NodeId) -> Option<BindingId> {
        self.owner.get(&node).copied()
    }

    pub fn reveal_count(&self) -> usize {
        self.reveals.len()
    }

    pub fn scrub_count(&self) -> usize {
        self.scrubs.len()
    }

    /// Members of a reveal binding in stagger order.
    pub fn members(&self, binding: BindingId) -> Vec<NodeId> {
        self.reveals
            .get(&binding)
            .map(|b| b.members.iter().map(|(n, _)| *n).collect())
            .unwrap_or_default()
    }

    /// Group-time position of a reveal binding's playhead.
    pub fn position(&self, binding: BindingId) -> Option<f64> {
        self.reveals.get(&binding).map(|b| b.playhead.position())
    }

    pub fn region(&self, binding: BindingId) -> Option<Region> {
        self.reveals
            .get(&binding)
            .and_then(|b| b.trigger.as_ref())
            .or_else(|| self.scrubs.get(&binding).map(|s| &s.trigger))
            .map(|t| t.region)
    }
}

fn apply_action(playhead: &mut Playhead, action: ToggleAction, now: f64) {
    match action {
        ToggleAction::Play => playhead.play(now),
        ToggleAction::Pause => playhead.pause(now),
        ToggleAction::Resume => playhead.resume(now),
        ToggleAction::Reverse => playhead.reverse(now),
        ToggleAction::Restart => playhead.restart(now),
        ToggleAction::Reset => playhead.reset(now),
        ToggleAction::Complete => playhead.complete(now),
        ToggleAction::None => {}
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/animator.rs"]
mod tests;
