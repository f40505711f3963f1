use crate::foundation::core::Vec2;

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with factor `t` (may exceed `[0, 1]` for overshooting eases).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// Computed visual state of one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Style {
    pub opacity: f64,
    pub translate: Vec2,
    pub scale: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Lerp for Style {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t),
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            scale: <f64 as Lerp>::lerp(&a.scale, &b.scale, t),
        }
    }
}

impl Style {
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate: Vec2::ZERO,
        scale: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Layer `overlay` on top: translations add, opacity and scale multiply.
    pub fn compose(&self, overlay: &Style) -> Style {
        Style {
            opacity: self.opacity * overlay.opacity,
            translate: self.translate + overlay.translate,
            scale: self.scale * overlay.scale,
        }
    }

    /// Inline CSS for this state.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            fmt_num(self.opacity.clamp(0.0, 1.0)),
            fmt_num(self.translate.x),
            fmt_num(self.translate.y),
            fmt_num(self.scale),
        )
    }
}

fn fmt_num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 { "0".to_string() } else { format!("{r}") }
}

/// Partial style descriptor; unset fields fall back to the base style.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl StyleProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, v: f64) -> Self {
        self.opacity = Some(v);
        self
    }

    pub fn x(mut self, v: f64) -> Self {
        self.x = Some(v);
        self
    }

    pub fn y(mut self, v: f64) -> Self {
        self.y = Some(v);
        self
    }

    pub fn scale(mut self, v: f64) -> Self {
        self.scale = Some(v);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn resolve(&self, base: Style) -> Style {
        Style {
            opacity: self.opacity.unwrap_or(base.opacity),
            translate: Vec2::new(
                self.x.unwrap_or(base.translate.x),
                self.y.unwrap_or(base.translate.y),
            ),
            scale: self.scale.unwrap_or(base.scale),
        }
    }

    pub fn all_finite(&self) -> bool {
        [self.opacity, self.x, self.y, self.scale]
            .into_iter()
            .flatten()
            .all(f64::is_finite)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/style.rs"]
mod tests;
