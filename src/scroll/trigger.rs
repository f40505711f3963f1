use std::{fmt, str::FromStr};

use crate::foundation::{
    core::Rect,
    error::{FolioError, FolioResult},
    math::{clamp01, inverse_lerp},
};

/// A position along an element or the viewport, measured from its top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
    Percent(f64),
    Px(f64),
}

impl Edge {
    /// Distance from the top of a box of height `extent`.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => extent * 0.5,
            Self::Bottom => extent,
            Self::Percent(p) => extent * p / 100.0,
            Self::Px(v) => v,
        }
    }
}

impl FromStr for Edge {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        let bad = || FolioError::animation(format!("bad trigger edge '{s}'"));
        let edge = match s {
            "top" => Self::Top,
            "center" => Self::Center,
            "bottom" => Self::Bottom,
            _ => {
                if let Some(p) = s.strip_suffix('%') {
                    Self::Percent(p.parse::<f64>().map_err(|_| bad())?)
                } else {
                    let v = s.strip_suffix("px").unwrap_or(s);
                    Self::Px(v.parse::<f64>().map_err(|_| bad())?)
                }
            }
        };
        match edge {
            Self::Percent(v) | Self::Px(v) if !v.is_finite() => Err(bad()),
            e => Ok(e),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => f.write_str("top"),
            Self::Center => f.write_str("center"),
            Self::Bottom => f.write_str("bottom"),
            Self::Percent(p) => write!(f, "{p}%"),
            Self::Px(v) => write!(f, "{v}px"),
        }
    }
}

/// `"<element edge> <viewport edge>"`: the scroll offset at which the element edge meets
/// the viewport edge. A single token applies to both.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Boundary {
    pub element: Edge,
    pub viewport: Edge,
}

impl Boundary {
    pub fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset for an element box under a viewport of `viewport_height`.
    pub fn offset(&self, element: Rect, viewport_height: f64) -> f64 {
        element.y0 + self.element.resolve(element.height()) - self.viewport.resolve(viewport_height)
    }
}

impl FromStr for Boundary {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [both] => {
                let e = both.parse::<Edge>()?;
                Ok(Self::new(e, e))
            }
            [element, viewport] => Ok(Self::new(element.parse()?, viewport.parse()?)),
            _ => Err(FolioError::animation(format!("bad trigger boundary '{s}'"))),
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.viewport)
    }
}

impl TryFrom<String> for Boundary {
    type Error = FolioError;

    fn try_from(value: String) -> FolioResult<Self> {
        value.parse()
    }
}

impl From<Boundary> for String {
    fn from(value: Boundary) -> Self {
        value.to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl ToggleAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Reverse => "reverse",
            Self::Restart => "restart",
            Self::Reset => "reset",
            Self::Complete => "complete",
            Self::None => "none",
        }
    }
}

impl FromStr for ToggleAction {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        Ok(match s {
            "play" => Self::Play,
            "pause" => Self::Pause,
            "resume" => Self::Resume,
            "reverse" => Self::Reverse,
            "restart" => Self::Restart,
            "reset" => Self::Reset,
            "complete" => Self::Complete,
            "none" => Self::None,
            other => return Err(FolioError::animation(format!("unknown toggle action '{other}'"))),
        })
    }
}

/// Actions for the four crossings, in `onEnter onLeave onEnterBack onLeaveBack` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::reveal(false)
    }
}

impl ToggleActions {
    /// `play none none reverse` when `reverse`, otherwise the one-shot `play none none none`.
    pub fn reveal(reverse: bool) -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: if reverse {
                ToggleAction::Reverse
            } else {
                ToggleAction::None
            },
        }
    }

    pub fn for_transition(&self, t: Transition) -> ToggleAction {
        match t {
            Transition::Enter => self.on_enter,
            Transition::Leave => self.on_leave,
            Transition::EnterBack => self.on_enter_back,
            Transition::LeaveBack => self.on_leave_back,
        }
    }
}

impl FromStr for ToggleActions {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [a, b, c, d] = parts.as_slice() else {
            return Err(FolioError::animation(format!(
                "toggle actions need four entries, got '{s}'"
            )));
        };
        Ok(Self {
            on_enter: a.parse()?,
            on_leave: b.parse()?,
            on_enter_back: c.parse()?,
            on_leave_back: d.parse()?,
        })
    }
}

impl fmt::Display for ToggleActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.on_enter.as_str(),
            self.on_leave.as_str(),
            self.on_enter_back.as_str(),
            self.on_leave_back.as_str()
        )
    }
}

impl TryFrom<String> for ToggleActions {
    type Error = FolioError;

    fn try_from(value: String) -> FolioResult<Self> {
        value.parse()
    }
}

impl From<ToggleActions> for String {
    fn from(value: ToggleActions) -> Self {
        value.to_string()
    }
}

/// Scroll-position trigger: active between `start` and `end`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriggerSpec {
    pub start: Boundary,
    #[serde(default = "default_end")]
    pub end: Boundary,
    #[serde(default)]
    pub actions: ToggleActions,
}

fn default_end() -> Boundary {
    Boundary::new(Edge::Bottom, Edge::Top)
}

impl TriggerSpec {
    pub fn new(start: Boundary) -> Self {
        Self {
            start,
            end: default_end(),
            actions: ToggleActions::default(),
        }
    }

    /// Reveal trigger from GSAP-style strings, e.g. `("top 80%", None, true)`.
    pub fn reveal(start: &str, end: Option<&str>, reverse: bool) -> FolioResult<Self> {
        let mut spec = Self::new(start.parse()?).actions(ToggleActions::reveal(reverse));
        if let Some(end) = end {
            spec.end = end.parse()?;
        }
        Ok(spec)
    }

    pub fn end(mut self, end: Boundary) -> Self {
        self.end = end;
        self
    }

    pub fn actions(mut self, actions: ToggleActions) -> Self {
        self.actions = actions;
        self
    }

    /// `(start, end)` scroll offsets for `element`.
    pub fn offsets(&self, element: Rect, viewport_height: f64) -> TriggerOffsets {
        TriggerOffsets {
            start: self.start.offset(element, viewport_height),
            end: self.end.offset(element, viewport_height),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TriggerOffsets {
    pub start: f64,
    pub end: f64,
}

impl TriggerOffsets {
    pub fn region(&self, offset: f64) -> Region {
        if offset < self.start {
            Region::Before
        } else if offset < self.end {
            Region::Active
        } else {
            Region::After
        }
    }

    /// Linear progress through `[start, end]`, clamped.
    pub fn progress(&self, offset: f64) -> f64 {
        clamp01(inverse_lerp(self.start, self.end, offset))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Before,
    Active,
    After,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

impl Transition {
    /// Crossings implied by a region change, in the order they happen.
    pub fn between(from: Region, to: Region) -> &'static [Transition] {
        use Region::*;
        match (from, to) {
            (Before, Active) => &[Transition::Enter],
            (Active, After) => &[Transition::Leave],
            (After, Active) => &[Transition::EnterBack],
            (Active, Before) => &[Transition::LeaveBack],
            (Before, After) => &[Transition::Enter, Transition::Leave],
            (After, Before) => &[Transition::EnterBack, Transition::LeaveBack],
            _ => &[],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/trigger.rs"]
mod tests;
