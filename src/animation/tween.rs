use crate::{
    animation::{
        ease::Ease,
        style::{Lerp, Style},
    },
    foundation::error::{FolioError, FolioResult},
    foundation::math::clamp01,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Seconds per element.
    pub duration: f64,
    /// Seconds before the first element starts.
    pub delay: f64,
    pub ease: Ease,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration: 0.5,
            delay: 0.0,
            ease: Ease::OutQuad,
        }
    }
}

impl Timing {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn validate(&self) -> FolioResult<()> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(FolioError::animation("tween duration must be > 0"));
        }
        if !(self.delay.is_finite() && self.delay >= 0.0) {
            return Err(FolioError::animation("tween delay must be >= 0"));
        }
        Ok(())
    }
}

/// One from/to interpolation shared by every member of a stagger group.
///
/// Member `i` runs over group time `[delay + i * stagger, delay + i * stagger + duration]`.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupTween {
    pub from: Style,
    pub to: Style,
    pub timing: Timing,
    pub stagger: f64,
}

impl GroupTween {
    pub fn validate(&self) -> FolioResult<()> {
        self.timing.validate()?;
        if !(self.stagger.is_finite() && self.stagger >= 0.0) {
            return Err(FolioError::animation("stagger interval must be >= 0"));
        }
        Ok(())
    }

    pub fn start_offset(&self, index: usize) -> f64 {
        self.timing.delay + (index as f64) * self.stagger
    }

    /// Group length for `members` elements.
    pub fn total(&self, members: usize) -> f64 {
        let last = members.saturating_sub(1);
        self.start_offset(last) + self.timing.duration
    }

    pub fn member_progress(&self, position: f64, index: usize) -> f64 {
        let start = self.start_offset(index);
        if position <= start {
            return 0.0;
        }
        if position >= start + self.timing.duration {
            return 1.0;
        }
        clamp01((position - start) / self.timing.duration)
    }

    pub fn sample(&self, position: f64, index: usize) -> Style {
        let t = self.member_progress(position, index);
        if t <= 0.0 {
            return self.from;
        }
        if t >= 1.0 {
            return self.to;
        }
        Style::lerp(&self.from, &self.to, self.timing.ease.apply(t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
