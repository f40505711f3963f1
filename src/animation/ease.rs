use std::{fmt, str::FromStr};

use crate::foundation::error::{FolioError, FolioResult};

/// Easing curves, named after the GSAP/Lenis presets the page uses.
///
/// Serialized as the GSAP-style string (`"power3.out"`, `"back.out(1.7)"`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    /// Lenis default: `min(1, 1.001 - 2^(-10t))`.
    OutExpo,
    OutBack { overshoot: f64 },
}

impl Default for Ease {
    fn default() -> Self {
        Self::OutQuad
    }
}

impl Ease {
    pub const BACK_OVERSHOOT: f64 = 1.70158;

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(4) / 2.0)
                }
            }
            Self::OutExpo => (1.001 - 2f64.powf(-10.0 * t)).min(1.0),
            Self::OutBack { overshoot } => {
                let c3 = overshoot + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u.powi(3) + overshoot * u.powi(2)
            }
        }
    }

    /// True when the curve never leaves `[0, 1]` on the way to 1.
    pub fn is_monotonic(self) -> bool {
        !matches!(self, Self::OutBack { overshoot } if overshoot > 0.0)
    }
}

impl FromStr for Ease {
    type Err = FolioError;

    fn from_str(s: &str) -> FolioResult<Self> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix("back.out") {
            let overshoot = match rest {
                "" => Self::BACK_OVERSHOOT,
                _ => rest
                    .strip_prefix('(')
                    .and_then(|r| r.strip_suffix(')'))
                    .and_then(|r| r.trim().parse::<f64>().ok())
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| FolioError::animation(format!("bad back.out ease '{s}'")))?,
            };
            return Ok(Self::OutBack { overshoot });
        }

        let ease = match s {
            "linear" | "none" => Self::Linear,
            "power1.in" | "quad.in" => Self::InQuad,
            "power1.out" | "power1" | "quad.out" => Self::OutQuad,
            "power1.inOut" | "quad.inOut" => Self::InOutQuad,
            "power2.in" | "cubic.in" => Self::InCubic,
            "power2.out" | "power2" | "cubic.out" => Self::OutCubic,
            "power2.inOut" | "cubic.inOut" => Self::InOutCubic,
            "power3.in" | "quart.in" => Self::InQuart,
            "power3.out" | "power3" | "quart.out" => Self::OutQuart,
            "power3.inOut" | "quart.inOut" => Self::InOutQuart,
            "expo.out" => Self::OutExpo,
            other => return Err(FolioError::animation(format!("unknown ease '{other}'"))),
        };
        Ok(ease)
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Linear => "linear",
            Self::InQuad => "power1.in",
            Self::OutQuad => "power1.out",
            Self::InOutQuad => "power1.inOut",
            Self::InCubic => "power2.in",
            Self::OutCubic => "power2.out",
            Self::InOutCubic => "power2.inOut",
            Self::InQuart => "power3.in",
            Self::OutQuart => "power3.out",
            Self::InOutQuart => "power3.inOut",
            Self::OutExpo => "expo.out",
            Self::OutBack { overshoot } => return write!(f, "back.out({overshoot})"),
        };
        f.write_str(name)
    }
}

impl TryFrom<String> for Ease {
    type Error = FolioError;

    fn try_from(value: String) -> FolioResult<Self> {
        value.parse()
    }
}

impl From<Ease> for String {
    fn from(value: Ease) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
