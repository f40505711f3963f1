use crate::foundation::math::clamp01;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayState {
    Paused,
    Forward,
    Backward,
}

/// Time cursor over `[0, total]` seconds, advanced by explicit frame timestamps.
#[derive(Clone, Debug, PartialEq)]
pub struct Playhead {
    position: f64,
    total: f64,
    state: PlayState,
    // direction `resume` continues in
    last_dir: PlayState,
    last_time: Option<f64>,
}

impl Playhead {
    pub fn new(total: f64) -> Self {
        Self {
            position: 0.0,
            total: total.max(0.0),
            state: PlayState::Paused,
            last_dir: PlayState::Forward,
            last_time: None,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn progress(&self) -> f64 {
        if self.total <= 0.0 {
            return if self.position > 0.0 { 1.0 } else { 0.0 };
        }
        clamp01(self.position / self.total)
    }

    /// Moving and not yet at the end it is moving towards.
    pub fn is_running(&self) -> bool {
        match self.state {
            PlayState::Paused => false,
            PlayState::Forward => self.position < self.total,
            PlayState::Backward => self.position > 0.0,
        }
    }

    /// Advance to `now`. Returns whether the position changed.
    pub fn tick(&mut self, now: f64) -> bool {
        let dt = match self.last_time {
            Some(prev) => (now - prev).max(0.0),
            None => 0.0,
        };
        self.last_time = Some(now);

        let before = self.position;
        match self.state {
            PlayState::Paused => {}
            PlayState::Forward => self.position = (self.position + dt).min(self.total),
            PlayState::Backward => self.position = (self.position - dt).max(0.0),
        }
        if !self.is_running() && self.state != PlayState::Paused {
            self.state = PlayState::Paused;
        }
        self.position != before
    }

    pub fn play(&mut self, now: f64) {
        self.tick(now);
        self.set_direction(PlayState::Forward);
    }

    pub fn reverse(&mut self, now: f64) {
        self.tick(now);
        self.set_direction(PlayState::Backward);
    }

    pub fn pause(&mut self, now: f64) {
        self.tick(now);
        self.state = PlayState::Paused;
    }

    pub fn resume(&mut self, now: f64) {
        self.tick(now);
        self.set_direction(self.last_dir);
    }

    pub fn restart(&mut self, now: f64) {
        self.tick(now);
        self.position = 0.0;
        self.set_direction(PlayState::Forward);
    }

    pub fn reset(&mut self, now: f64) {
        self.tick(now);
        self.position = 0.0;
        self.state = PlayState::Paused;
    }

    pub fn complete(&mut self, now: f64) {
        self.tick(now);
        self.position = self.total;
        self.state = PlayState::Paused;
    }

    fn set_direction(&mut self, dir: PlayState) {
        self.last_dir = dir;
        self.state = dir;
        if !self.is_running() {
            self.state = PlayState::Paused;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/playhead.rs"]
mod tests;
