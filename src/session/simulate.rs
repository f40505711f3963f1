use std::collections::BTreeMap;

use crate::{
    animation::style::Style,
    config::SiteConfig,
    foundation::{
        core::{ScrollDirection, Viewport},
        error::{FolioError, FolioResult},
    },
    page::Page,
    scroll::{animator::TriggerEvent, smooth::ScrollInput},
    sections::SectionKind,
    session::page_session::{NavigateOutcome, PageSession, SessionOpts},
};

/// Upper bound on simulated frames per run.
pub const MAX_FRAMES: u64 = 1_000_000;

fn default_fps() -> f64 {
    60.0
}

fn default_sample_every() -> u32 {
    1
}

fn default_smooth() -> bool {
    true
}

/// A time-stamped host event.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptEvent {
    /// Seconds from the start of the run; applied before the first frame at or after it.
    pub at: f64,
    #[serde(flatten)]
    pub action: ScriptAction,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptAction {
    Wheel { delta_y: f64 },
    Touch { delta_y: f64 },
    Navigate { target: String },
    Resize { width: f64, height: f64 },
    UnmountSection { section: SectionKind },
}

/// Scripted run of a mounted page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default = "default_fps")]
    pub fps: f64,
    pub duration_s: f64,
    /// Overrides the config viewport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
    /// Mount with the smooth scroll controller.
    #[serde(default = "default_smooth")]
    pub smooth: bool,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
    /// Element ids whose computed styles are recorded.
    #[serde(default)]
    pub watch: Vec<String>,
    /// Record every Nth frame; the last frame is always recorded.
    #[serde(default = "default_sample_every")]
    pub sample_every: u32,
}

impl Script {
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        let script: Self = serde_json::from_str(s)
            .map_err(|e| FolioError::validation(format!("parse script JSON: {e}")))?;
        script.validate()?;
        Ok(script)
    }

    pub fn validate(&self) -> FolioResult<()> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(FolioError::validation("script fps must be > 0"));
        }
        if !(self.duration_s.is_finite() && self.duration_s >= 0.0) {
            return Err(FolioError::validation("script duration_s must be >= 0"));
        }
        if self.sample_every == 0 {
            return Err(FolioError::validation("script sample_every must be >= 1"));
        }
        if self.frame_count() > MAX_FRAMES {
            return Err(FolioError::validation(format!(
                "script needs {} frames, more than {MAX_FRAMES}",
                self.frame_count()
            )));
        }
        if let Some(v) = &self.viewport {
            v.validate()?;
        }
        for (i, e) in self.events.iter().enumerate() {
            if !(e.at.is_finite() && e.at >= 0.0) {
                return Err(FolioError::validation(format!(
                    "script event {i} time must be >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Frames at `0, 1/fps, ...` up to and including `duration_s`.
    pub fn frame_count(&self) -> u64 {
        ((self.duration_s * self.fps).floor() as u64).saturating_add(1)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSample {
    pub index: u64,
    pub time_s: f64,
    pub offset: f64,
    pub direction: ScrollDirection,
    pub running: usize,
    pub styles: BTreeMap<String, Style>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FiredEvent {
    pub time_s: f64,
    #[serde(flatten)]
    pub event: TriggerEvent,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AppliedAction {
    pub time_s: f64,
    pub action: ScriptAction,
    /// Set for navigation actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<NavigateOutcome>,
    /// Set when the action was accepted as input or released bindings.
    pub applied: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SimulationReport {
    pub frames_total: u64,
    pub final_offset: f64,
    pub limit: f64,
    pub samples: Vec<FrameSample>,
    pub events: Vec<FiredEvent>,
    pub actions: Vec<AppliedAction>,
}

/// Mount `page`, replay `script` frame by frame, and record what happened.
///
/// Output depends only on the inputs.
#[tracing::instrument(skip_all, fields(frames = script.frame_count()))]
pub fn simulate(page: Page, config: &SiteConfig, script: &Script) -> FolioResult<SimulationReport> {
    script.validate()?;
    let mut config = *config;
    if let Some(v) = script.viewport {
        config.viewport = v;
    }
    let mut session = PageSession::mount_with(
        page,
        &config,
        SessionOpts {
            smooth: script.smooth,
        },
    )?;

    let mut events: Vec<&ScriptEvent> = script.events.iter().collect();
    events.sort_by(|a, b| a.at.total_cmp(&b.at));
    let mut pending = events.into_iter().peekable();

    let frames_total = script.frame_count();
    let mut report = SimulationReport {
        frames_total,
        final_offset: 0.0,
        limit: 0.0,
        samples: Vec::new(),
        events: Vec::new(),
        actions: Vec::new(),
    };

    for index in 0..frames_total {
        let now = index as f64 / script.fps;
        while let Some(e) = pending.next_if(|e| e.at <= now + 1e-9) {
            let (outcome, applied) = apply(&mut session, &e.action)?;
            report.actions.push(AppliedAction {
                time_s: now,
                action: e.action.clone(),
                outcome,
                applied,
            });
        }

        let frame = session.frame(now);
        report.events.extend(frame.animator.events.iter().map(|ev| FiredEvent {
            time_s: now,
            event: ev.clone(),
        }));

        if index % u64::from(script.sample_every) == 0 || index + 1 == frames_total {
            let styles = script
                .watch
                .iter()
                .filter_map(|id| session.style_of(id).map(|s| (id.clone(), s)))
                .collect();
            report.samples.push(FrameSample {
                index,
                time_s: now,
                offset: frame.frame.offset,
                direction: frame.frame.direction,
                running: frame.animator.running,
                styles,
            });
        }
    }

    report.final_offset = session.scroll_offset();
    report.limit = session.host().limit();
    tracing::debug!(
        events = report.events.len(),
        final_offset = report.final_offset,
        "simulation finished"
    );
    session.unmount();
    Ok(report)
}

fn apply(
    session: &mut PageSession,
    action: &ScriptAction,
) -> FolioResult<(Option<NavigateOutcome>, bool)> {
    Ok(match action {
        ScriptAction::Wheel { delta_y } => {
            (None, session.input(ScrollInput::Wheel { delta_y: *delta_y }))
        }
        ScriptAction::Touch { delta_y } => {
            (None, session.input(ScrollInput::Touch { delta_y: *delta_y }))
        }
        ScriptAction::Navigate { target } => {
            let outcome = session.navigate(target);
            (
                Some(outcome),
                matches!(outcome, NavigateOutcome::Smooth | NavigateOutcome::Native),
            )
        }
        ScriptAction::Resize { width, height } => {
            session.resize(Viewport::new(*width, *height)?)?;
            (None, true)
        }
        ScriptAction::UnmountSection { section } => {
            (None, session.unmount_section(*section) > 0)
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/session/simulate.rs"]
mod tests;
