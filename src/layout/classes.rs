use crate::foundation::core::{Breakpoint, Viewport};

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum Display {
    #[default]
    Block,
    Flex {
        column: bool,
        wrap: bool,
    },
    Grid {
        columns: u32,
    },
    None,
}

/// A length that is either absolute or a fraction of the containing block.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum Length {
    Px(f64),
    /// Fraction in `[0, 1]`: `w-full` is `Percent(1.0)`, `w-4/5` is `Percent(0.8)`.
    Percent(f64),
}

/// Cross-axis alignment (`items-*`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Align {
    Start,
    Center,
    End,
    Stretch,
}

/// Main-axis distribution (`justify-*`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Justify {
    Start,
    Center,
    End,
    Between,
}

/// Offsets of a positioned box (`inset-0`, `top-4`, `left-1/2`).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Insets {
    pub top: Option<Length>,
    pub right: Option<Length>,
    pub bottom: Option<Length>,
    pub left: Option<Length>,
}

/// Box model derived from utility classes at one viewport width.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct BoxStyle {
    pub display: Display,
    /// Taken out of flow (`absolute`, `fixed`).
    pub out_of_flow: bool,
    pub inset: Insets,
    pub padding: Edges,
    pub margin: Edges,
    pub border: Edges,
    pub mx_auto: bool,
    pub space_y: f64,
    pub space_x: f64,
    pub gap: f64,
    pub align_items: Option<Align>,
    pub justify: Option<Justify>,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub min_height: Option<f64>,
    pub max_width: Option<f64>,
    pub aspect_ratio: Option<f64>,
    pub font_size: Option<f64>,
    pub line_height: Option<f64>,
    pub leading: Option<f64>,
}

/// Tailwind spacing unit (`p-4` = 16px).
const SPACING_PX: f64 = 4.0;

fn spacing(v: &str) -> Option<f64> {
    match v {
        "px" => Some(1.0),
        _ => v.parse::<f64>().ok().filter(|n| *n >= 0.0).map(|n| n * SPACING_PX),
    }
}

/// Spacing steps, `full` and fractions such as `1/2` or `4/5`.
fn length(v: &str) -> Option<Length> {
    if v == "full" {
        return Some(Length::Percent(1.0));
    }
    if let Some((num, den)) = v.split_once('/') {
        let num = num.parse::<f64>().ok().filter(|n| *n >= 0.0)?;
        let den = den.parse::<f64>().ok().filter(|d| *d > 0.0)?;
        return Some(Length::Percent(num / den));
    }
    spacing(v).map(Length::Px)
}

fn max_width(v: &str) -> Option<f64> {
    Some(match v {
        "xs" => 320.0,
        "sm" => 384.0,
        "md" => 448.0,
        "lg" => 512.0,
        "xl" => 576.0,
        "2xl" => 672.0,
        "3xl" => 768.0,
        "4xl" => 896.0,
        "5xl" => 1024.0,
        "6xl" => 1152.0,
        "7xl" => 1280.0,
        _ => return None,
    })
}

/// `(font_size, line_height)` for a `text-*` size token.
fn text_size(v: &str) -> Option<(f64, f64)> {
    Some(match v {
        "xs" => (12.0, 16.0),
        "sm" => (14.0, 20.0),
        "base" => (16.0, 24.0),
        "lg" => (18.0, 28.0),
        "xl" => (20.0, 28.0),
        "2xl" => (24.0, 32.0),
        "3xl" => (30.0, 36.0),
        "4xl" => (36.0, 40.0),
        "5xl" => (48.0, 48.0),
        "6xl" => (60.0, 60.0),
        "7xl" => (72.0, 72.0),
        _ => return None,
    })
}

fn container_width(viewport: &Viewport) -> Option<f64> {
    [1536.0, 1280.0, 1024.0, 768.0, 640.0]
        .into_iter()
        .find(|w| viewport.width >= *w)
}

impl BoxStyle {
    /// Interpret `classes` at `viewport`; responsive variants apply in breakpoint order.
    pub fn from_classes<S: AsRef<str>>(classes: &[S], viewport: &Viewport) -> Self {
        let mut ranked: Vec<(u8, &str)> = Vec::with_capacity(classes.len());
        for class in classes {
            let class = class.as_ref();
            match class.split_once(':') {
                None => ranked.push((0, class)),
                Some((prefix, rest)) => {
                    let Some(bp) = Breakpoint::from_prefix(prefix) else {
                        // hover:, focus:, group-hover: and friends do not affect layout
                        continue;
                    };
                    if viewport.matches(bp) {
                        ranked.push((bp as u8 + 1, rest));
                    }
                }
            }
        }
        ranked.sort_by_key(|(rank, _)| *rank);

        let mut style = BoxStyle::default();
        for (_, class) in ranked {
            style.apply(class, viewport);
        }
        style
    }

    fn apply(&mut self, class: &str, viewport: &Viewport) {
        match class {
            "block" => self.display = Display::Block,
            "hidden" => self.display = Display::None,
            "flex" => {
                self.display = Display::Flex {
                    column: false,
                    wrap: false,
                }
            }
            "grid" => self.display = Display::Grid { columns: 1 },
            "flex-col" => self.set_flex(Some(true), None),
            "flex-row" => self.set_flex(Some(false), None),
            "flex-wrap" => self.set_flex(None, Some(true)),
            "absolute" | "fixed" => self.out_of_flow = true,
            "relative" | "static" | "sticky" => self.out_of_flow = false,
            "mx-auto" => self.mx_auto = true,
            "min-h-screen" => self.min_height = Some(viewport.height),
            "h-screen" => self.height = Some(Length::Px(viewport.height)),
            "w-screen" => self.width = Some(Length::Px(viewport.width)),
            "inset-0" => {
                let zero = Some(Length::Px(0.0));
                self.inset = Insets {
                    top: zero,
                    right: zero,
                    bottom: zero,
                    left: zero,
                };
            }
            "items-start" => self.align_items = Some(Align::Start),
            "items-center" => self.align_items = Some(Align::Center),
            "items-end" => self.align_items = Some(Align::End),
            "items-stretch" => self.align_items = Some(Align::Stretch),
            "justify-start" => self.justify = Some(Justify::Start),
            "justify-center" => self.justify = Some(Justify::Center),
            "justify-end" => self.justify = Some(Justify::End),
            "justify-between" => self.justify = Some(Justify::Between),
            "border" => self.border = uniform(1.0),
            "border-t" => self.border.top = 1.0,
            "border-b" => self.border.bottom = 1.0,
            "border-l" => self.border.left = 1.0,
            "border-r" => self.border.right = 1.0,
            "aspect-video" => self.aspect_ratio = Some(16.0 / 9.0),
            "aspect-square" => self.aspect_ratio = Some(1.0),
            "container" => self.max_width = container_width(viewport),
            "max-w-full" | "max-w-none" => self.max_width = None,
            "leading-none" => self.leading = Some(1.0),
            "leading-tight" => self.leading = Some(1.25),
            "leading-snug" => self.leading = Some(1.375),
            "leading-normal" => self.leading = Some(1.5),
            "leading-relaxed" => self.leading = Some(1.625),
            "leading-loose" => self.leading = Some(2.0),
            _ => self.apply_prefixed(class),
        }
    }

    fn apply_prefixed(&mut self, class: &str) {
        let Some((key, value)) = class.split_once('-') else {
            return;
        };
        match key {
            "p" | "px" | "py" | "pt" | "pb" | "pl" | "pr" => {
                if let Some(v) = spacing(value) {
                    set_edges(&mut self.padding, key, v);
                }
            }
            "m" | "mx" | "my" | "mt" | "mb" | "ml" | "mr" => {
                if let Some(v) = spacing(value) {
                    set_edges(&mut self.margin, key, v);
                }
            }
            "space" => {
                if let Some(v) = value.strip_prefix("y-").and_then(spacing) {
                    self.space_y = v;
                }
                if let Some(v) = value.strip_prefix("x-").and_then(spacing) {
                    self.space_x = v;
                }
            }
            "border" => {
                // border widths are in px, unlike the spacing scale
                if let Ok(v) = value.parse::<f64>()
                    && v >= 0.0
                {
                    self.border = uniform(v);
                }
            }
            "top" | "right" | "bottom" | "left" => {
                if let Some(v) = length(value) {
                    let slot = match key {
                        "top" => &mut self.inset.top,
                        "right" => &mut self.inset.right,
                        "bottom" => &mut self.inset.bottom,
                        _ => &mut self.inset.left,
                    };
                    *slot = Some(v);
                }
            }
            "gap" => {
                if let Some(v) = spacing(value) {
                    self.gap = v;
                }
            }
            "w" | "h" => {
                let slot = if key == "w" {
                    &mut self.width
                } else {
                    &mut self.height
                };
                match value {
                    "auto" => *slot = None,
                    _ => {
                        if let Some(v) = length(value) {
                            *slot = Some(v);
                        }
                    }
                }
            }
            "max" => {
                if let Some(v) = value.strip_prefix("w-").and_then(max_width) {
                    self.max_width = Some(v);
                }
            }
            "grid" => {
                if let Some(n) = value
                    .strip_prefix("cols-")
                    .and_then(|n| n.parse::<u32>().ok())
                    .filter(|n| *n > 0)
                    && let Display::Grid { columns } = &mut self.display
                {
                    *columns = n;
                }
            }
            "text" => {
                if let Some((size, line)) = text_size(value) {
                    self.font_size = Some(size);
                    self.line_height = Some(line);
                }
            }
            _ => {}
        }
    }

    fn set_flex(&mut self, column: Option<bool>, wrap: Option<bool>) {
        if let Display::Flex {
            column: c,
            wrap: w,
        } = &mut self.display
        {
            if let Some(v) = column {
                *c = v;
            }
            if let Some(v) = wrap {
                *w = v;
            }
        }
    }
}

fn uniform(v: f64) -> Edges {
    Edges {
        top: v,
        right: v,
        bottom: v,
        left: v,
    }
}

fn set_edges(edges: &mut Edges, key: &str, v: f64) {
    let (top, right, bottom, left) = match &key[1..] {
        "" => (true, true, true, true),
        "x" => (false, true, false, true),
        "y" => (true, false, true, false),
        "t" => (true, false, false, false),
        "r" => (false, true, false, false),
        "b" => (false, false, true, false),
        "l" => (false, false, false, true),
        _ => return,
    };
    if top {
        edges.top = v;
    }
    if right {
        edges.right = v;
    }
    if bottom {
        edges.bottom = v;
    }
    if left {
        edges.left = v;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/classes.rs"]
mod tests;
