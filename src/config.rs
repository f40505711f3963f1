use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::{
        core::Viewport,
        error::{FolioError, FolioResult},
    },
    layout::TextMetrics,
    scroll::smooth::SmoothScrollOpts,
};

/// How navigation links scroll to their section.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationOpts {
    /// Pixels added to the section top; negative keeps the fixed bar clear.
    pub offset: f64,
    /// Seconds.
    pub duration: f64,
}

impl Default for NavigationOpts {
    fn default() -> Self {
        Self {
            offset: -80.0,
            duration: 1.5,
        }
    }
}

impl NavigationOpts {
    pub fn validate(&self) -> FolioResult<()> {
        if !self.offset.is_finite() {
            return Err(FolioError::validation("navigation.offset must be finite"));
        }
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(FolioError::validation("navigation.duration must be > 0"));
        }
        Ok(())
    }
}

/// Runtime settings for a mounted page. Every section is optional in JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub viewport: Viewport,
    /// Text estimate used by the headless layout.
    pub text: TextMetrics,
    pub scroll: SmoothScrollOpts,
    pub navigation: NavigationOpts,
}

impl SiteConfig {
    pub fn validate(&self) -> FolioResult<()> {
        self.viewport.validate()?;
        self.text.validate()?;
        self.scroll.validate()?;
        self.navigation.validate()
    }

    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| FolioError::validation(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::validation(format!("open config '{}': {e}", path.display()))
        })?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            FolioError::validation(format!("parse config '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
