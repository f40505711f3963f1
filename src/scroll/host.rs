use crate::foundation::{
    core::Viewport,
    error::{FolioError, FolioResult},
};

/// The page window: visible viewport, document extent, and the native scroll offset.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollHost {
    viewport: Viewport,
    document_height: f64,
    scroll_y: f64,
}

impl ScrollHost {
    pub fn new(viewport: Viewport, document_height: f64) -> FolioResult<Self> {
        viewport.validate()?;
        if !(document_height.is_finite() && document_height >= 0.0) {
            return Err(FolioError::layout("document height must be >= 0"));
        }
        Ok(Self {
            viewport,
            document_height,
            scroll_y: 0.0,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn document_height(&self) -> f64 {
        self.document_height
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Largest reachable offset.
    pub fn limit(&self) -> f64 {
        (self.document_height - self.viewport.height).max(0.0)
    }

    /// Set the native offset, clamped to `[0, limit]`. Returns the applied value.
    pub fn set_scroll(&mut self, y: f64) -> f64 {
        self.scroll_y = if y.is_finite() {
            y.clamp(0.0, self.limit())
        } else {
            0.0
        };
        self.scroll_y
    }

    /// Instant native jump to an element top plus `offset`.
    pub fn scroll_into_view(&mut self, element_top: f64, offset: f64) -> f64 {
        self.set_scroll(element_top + offset)
    }

    /// Apply a new viewport and document extent; the offset is re-clamped.
    pub fn resize(&mut self, viewport: Viewport, document_height: f64) -> FolioResult<()> {
        viewport.validate()?;
        if !(document_height.is_finite() && document_height >= 0.0) {
            return Err(FolioError::layout("document height must be >= 0"));
        }
        self.viewport = viewport;
        self.document_height = document_height;
        self.set_scroll(self.scroll_y);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/host.rs"]
mod tests;
