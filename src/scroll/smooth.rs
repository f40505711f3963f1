use crate::{
    animation::ease::Ease,
    dom::document::NodeId,
    foundation::{
        core::ScrollDirection,
        error::{FolioError, FolioResult},
        math::clamp01,
    },
    layout::Layout,
    scroll::host::ScrollHost,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SmoothScrollOpts {
    /// Seconds per eased scroll segment.
    pub duration: f64,
    pub ease: Ease,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
    /// When false, wheel input jumps straight to the target.
    pub smooth_wheel: bool,
}

impl Default for SmoothScrollOpts {
    fn default() -> Self {
        Self {
            duration: 1.2,
            ease: Ease::OutExpo,
            wheel_multiplier: 1.0,
            touch_multiplier: 2.0,
            smooth_wheel: true,
        }
    }
}

impl SmoothScrollOpts {
    pub fn validate(&self) -> FolioResult<()> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(FolioError::validation("scroll.duration must be > 0"));
        }
        for (name, v) in [
            ("wheel_multiplier", self.wheel_multiplier),
            ("touch_multiplier", self.touch_multiplier),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(FolioError::validation(format!(
                    "scroll.{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Raw input delivered by the host. Positive deltas scroll down.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScrollInput {
    Wheel { delta_y: f64 },
    Touch { delta_y: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollTarget {
    Offset(f64),
    Element(NodeId),
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollToOpts {
    /// Pixels added to the resolved target.
    pub offset: f64,
    /// Overrides the controller duration.
    pub duration: Option<f64>,
    pub immediate: bool,
}

/// Published scroll state for one animation frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollFrame {
    pub time_s: f64,
    pub offset: f64,
    /// Pixels moved since the previous frame.
    pub velocity: f64,
    pub direction: ScrollDirection,
    pub progress: f64,
    pub limit: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Segment {
    from: f64,
    to: f64,
    elapsed: f64,
    duration: f64,
    ease: Ease,
}

impl Segment {
    fn value(&self) -> f64 {
        let t = clamp01(self.elapsed / self.duration);
        if t >= 1.0 {
            return self.to;
        }
        let v = self.from + (self.to - self.from) * self.ease.apply(t);
        if self.ease.is_monotonic() {
            v
        } else {
            v.clamp(self.from.min(self.to), self.from.max(self.to))
        }
    }

    fn done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Eased, inertial scroll controller.
///
/// Input moves a target offset; every [`SmoothScroll::raf`] advances the animated offset
/// towards it and writes it to the [`ScrollHost`]. The animated offset is the single
/// published scroll position the animator reads.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    opts: SmoothScrollOpts,
    limit: f64,
    target: f64,
    animated: f64,
    segment: Option<Segment>,
    last_time: Option<f64>,
    last_published: f64,
    velocity: f64,
    direction: ScrollDirection,
    stopped: bool,
}

impl SmoothScroll {
    pub fn new(opts: SmoothScrollOpts, host: &ScrollHost) -> FolioResult<Self> {
        opts.validate()?;
        let start = host.scroll_y();
        Ok(Self {
            opts,
            limit: host.limit(),
            target: start,
            animated: start,
            segment: None,
            last_time: None,
            last_published: start,
            velocity: 0.0,
            direction: ScrollDirection::Idle,
            stopped: false,
        })
    }

    pub fn opts(&self) -> &SmoothScrollOpts {
        &self.opts
    }

    /// Current animated offset.
    pub fn offset(&self) -> f64 {
        self.animated
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn is_scrolling(&self) -> bool {
        self.segment.is_some()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    fn clamp(&self, y: f64) -> f64 {
        if y.is_finite() {
            y.clamp(0.0, self.limit)
        } else {
            self.target
        }
    }

    fn animate_to(&mut self, to: f64, duration: f64) {
        self.target = to;
        self.segment = Some(Segment {
            from: self.animated,
            to,
            elapsed: 0.0,
            duration,
            ease: self.opts.ease,
        });
    }

    fn jump_to(&mut self, to: f64) {
        self.target = to;
        self.animated = to;
        self.segment = None;
    }

    /// Feed wheel or touch input. Returns false when the input was ignored.
    pub fn on_input(&mut self, input: ScrollInput) -> bool {
        if self.stopped {
            return false;
        }
        let (delta, smooth) = match input {
            ScrollInput::Wheel { delta_y } => {
                (delta_y * self.opts.wheel_multiplier, self.opts.smooth_wheel)
            }
            ScrollInput::Touch { delta_y } => (delta_y * self.opts.touch_multiplier, true),
        };
        if !delta.is_finite() || delta == 0.0 {
            return false;
        }
        let to = self.clamp(self.target + delta);
        if smooth {
            self.animate_to(to, self.opts.duration);
        } else {
            self.jump_to(to);
        }
        true
    }

    /// Resolve `target` against `layout` and move there. Returns false when the target has
    /// no layout box or the controller is stopped.
    pub fn scroll_to(&mut self, target: ScrollTarget, opts: ScrollToOpts, layout: &Layout) -> bool {
        if self.stopped {
            return false;
        }
        let base = match target {
            ScrollTarget::Offset(y) => y,
            ScrollTarget::Top => 0.0,
            ScrollTarget::Bottom => self.limit,
            ScrollTarget::Element(id) => match layout.top(id) {
                Some(top) => top,
                None => {
                    tracing::debug!(?id, "scroll target has no layout box");
                    return false;
                }
            },
        };
        let to = self.clamp(base + opts.offset);
        let duration = opts
            .duration
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(self.opts.duration);
        if opts.immediate {
            self.jump_to(to);
        } else {
            self.animate_to(to, duration);
        }
        true
    }

    /// Advance to `now`, write the offset to `host`, and publish the frame.
    pub fn raf(&mut self, now: f64, host: &mut ScrollHost) -> ScrollFrame {
        let dt = match self.last_time {
            Some(prev) => (now - prev).max(0.0),
            None => 0.0,
        };
        self.last_time = Some(now);

        if let Some(seg) = &mut self.segment {
            seg.elapsed += dt;
            self.animated = seg.value();
            if seg.done() {
                self.segment = None;
            }
        }

        self.animated = host.set_scroll(self.animated);
        self.velocity = self.animated - self.last_published;
        self.direction = if self.velocity > 0.0 {
            ScrollDirection::Down
        } else if self.velocity < 0.0 {
            ScrollDirection::Up
        } else {
            ScrollDirection::Idle
        };
        self.last_published = self.animated;

        ScrollFrame {
            time_s: now,
            offset: self.animated,
            velocity: self.velocity,
            direction: self.direction,
            progress: if self.limit > 0.0 {
                clamp01(self.animated / self.limit)
            } else {
                0.0
            },
            limit: self.limit,
        }
    }

    /// Pause input handling and settle at the current offset.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.target = self.animated;
        self.segment = None;
        self.velocity = 0.0;
    }

    pub fn start(&mut self) {
        self.stopped = false;
    }

    /// Track a new scroll extent; offsets beyond it are pulled back in.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        self.animated = self.animated.clamp(0.0, self.limit);
        if let Some(seg) = &mut self.segment {
            seg.to = seg.to.clamp(0.0, self.limit);
            seg.from = seg.from.clamp(0.0, self.limit);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smooth.rs"]
mod tests;
