use taffy::prelude::{AvailableSpace, Rect as TaffyRect, Size};
use taffy::style::{
    AlignItems, Dimension, Display as TaffyDisplay, FlexDirection, FlexWrap, JustifyContent,
    LengthPercentage, LengthPercentageAuto, Position, Style,
};
use taffy::style_helpers::fr;

use crate::{
    dom::document::{Document, NodeId, NodeKind},
    foundation::core::{Rect, Viewport},
    foundation::error::{FolioError, FolioResult},
    layout::classes::{Align, BoxStyle, Display, Edges, Justify, Length},
};

/// Text measurement model used when no font shaping is available.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextMetrics {
    /// Average glyph advance as a fraction of the font size.
    pub char_width_em: f64,
    pub font_size: f64,
    pub line_height: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width_em: 0.5,
            font_size: 16.0,
            line_height: 24.0,
        }
    }
}

impl TextMetrics {
    pub fn validate(&self) -> FolioResult<()> {
        for (name, v) in [
            ("char_width_em", self.char_width_em),
            ("font_size", self.font_size),
            ("line_height", self.line_height),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(FolioError::layout(format!("text.{name} must be > 0")));
            }
        }
        Ok(())
    }
}

/// Resolved boxes in document coordinates.
#[derive(Clone, Debug)]
pub struct Layout {
    boxes: Vec<Option<Rect>>,
    document_height: f64,
    viewport: Viewport,
}

impl Layout {
    /// Border box of an element; `None` for text nodes and hidden subtrees.
    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.boxes.get(id.0 as usize).copied().flatten()
    }

    pub fn top(&self, id: NodeId) -> Option<f64> {
        self.rect(id).map(|r| r.y0)
    }

    pub fn document_height(&self) -> f64 {
        self.document_height
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Largest scroll offset: `max(0, document_height - viewport.height)`.
    pub fn scroll_limit(&self) -> f64 {
        (self.document_height - self.viewport.height).max(0.0)
    }
}

#[derive(Clone, Copy, Debug)]
struct Font {
    size: f64,
    line: f64,
}

/// Measure context of a text leaf.
#[derive(Clone, Copy, Debug)]
struct TextLeaf {
    chars: usize,
    longest_word: usize,
    font: Font,
}

impl TextLeaf {
    fn new(text: &str, font: Font) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            chars: text.chars().count(),
            longest_word: text
                .split_whitespace()
                .map(|w| w.chars().count())
                .max()
                .unwrap_or(0),
            font,
        })
    }

    /// Wraps greedily at the offered width; one glyph advance is `char_width_em * size`.
    fn measure(
        &self,
        char_width_em: f64,
        known: Size<Option<f32>>,
        available: Size<AvailableSpace>,
    ) -> Size<f32> {
        let advance = char_width_em * self.font.size;
        let full = self.chars as f64 * advance;
        let width = match (known.width, available.width) {
            (Some(w), _) => f64::from(w),
            (None, AvailableSpace::Definite(w)) => full.min(f64::from(w)),
            (None, AvailableSpace::MinContent) => self.longest_word as f64 * advance,
            (None, AvailableSpace::MaxContent) => full,
        };
        let lines = if width > 0.0 {
            (full / width).ceil().max(1.0)
        } else {
            1.0
        };
        let height = known
            .height
            .map(f64::from)
            .unwrap_or(lines * self.font.line);
        Size {
            width: width as f32,
            height: height as f32,
        }
    }
}

/// One layout node and the document elements that share its box.
struct Placed {
    node: taffy::NodeId,
    elements: Vec<NodeId>,
    margin_bottom: f64,
    children: Vec<Placed>,
}

const INLINE_TAGS: &[&str] = &[
    "a", "span", "strong", "em", "b", "i", "code", "small", "label", "button", "br",
];

/// Lay out `doc` for `viewport`, starting at the document root.
#[tracing::instrument(skip(doc, metrics), fields(nodes = doc.len()))]
pub fn solve(doc: &Document, viewport: Viewport, metrics: &TextMetrics) -> FolioResult<Layout> {
    let mut bridge = TaffyBridge {
        doc,
        viewport,
        taffy: taffy::TaffyTree::new(),
    };
    let font = Font {
        size: metrics.font_size,
        line: metrics.line_height,
    };
    let mut boxes = vec![None; doc.len()];
    let Some(root) = bridge.build(doc.root(), font, true).map_err(taffy_error)? else {
        tracing::debug!("document root is not laid out");
        return Ok(Layout {
            boxes,
            document_height: viewport.height,
            viewport,
        });
    };

    let available = Size {
        width: AvailableSpace::Definite(viewport.width as f32),
        height: AvailableSpace::MaxContent,
    };
    let char_width_em = metrics.char_width_em;
    bridge
        .taffy
        .compute_layout_with_measure(
            root.node,
            available,
            |known_dimensions, available_space, _node_id, node_context, _style| {
                match node_context {
                    Some(leaf) => leaf.measure(char_width_em, known_dimensions, available_space),
                    None => known_dimensions.unwrap_or(Size::ZERO),
                }
            },
        )
        .map_err(taffy_error)?;

    let bottom = bridge
        .place(&root, 0.0, 0.0, &mut boxes)
        .map_err(taffy_error)?;
    Ok(Layout {
        boxes,
        document_height: (bottom + root.margin_bottom).max(viewport.height),
        viewport,
    })
}

fn taffy_error(e: taffy::TaffyError) -> FolioError {
    FolioError::layout(e.to_string())
}

struct TaffyBridge<'a> {
    doc: &'a Document,
    viewport: Viewport,
    taffy: taffy::TaffyTree<TextLeaf>,
}

impl TaffyBridge<'_> {
    fn style(&self, id: NodeId) -> BoxStyle {
        BoxStyle::from_classes(self.doc.classes(id), &self.viewport)
    }

    fn is_inline(&self, id: NodeId) -> bool {
        match self.doc.tag(id) {
            None => true,
            Some(tag) => {
                INLINE_TAGS.contains(&tag)
                    && self.style(id).display == Display::Block
                    && !self.doc.has_class(id, "block")
            }
        }
    }

    fn font_for(&self, style: &BoxStyle, inherited: Font) -> Font {
        let mut font = inherited;
        if let (Some(size), Some(line)) = (style.font_size, style.line_height) {
            font = Font { size, line };
        }
        if let Some(leading) = style.leading {
            font.line = font.size * leading;
        }
        font
    }

    /// Builds the subtree under `id`; hidden elements and blank text yield `None`.
    fn build(
        &mut self,
        id: NodeId,
        inherited: Font,
        root: bool,
    ) -> Result<Option<Placed>, taffy::TaffyError> {
        if self.doc.tag(id).is_none() {
            let text = match self.doc.node(id).map(|n| &n.kind) {
                Some(NodeKind::Text(t)) => TextLeaf::new(t, inherited),
                _ => None,
            };
            let Some(leaf) = text else {
                return Ok(None);
            };
            let style = Style {
                display: TaffyDisplay::Block,
                ..Style::default()
            };
            return Ok(Some(Placed {
                node: self.taffy.new_leaf_with_context(style, leaf)?,
                elements: Vec::new(),
                margin_bottom: 0.0,
                children: Vec::new(),
            }));
        }

        let style = self.style(id);
        if style.display == Display::None {
            return Ok(None);
        }
        let font = self.font_for(&style, inherited);
        let mut taffy_style = to_taffy(&style);
        if root && style.width.is_none() {
            taffy_style.size.width = Dimension::length(self.viewport.width as f32);
        }

        let children = self.doc.children(id).to_vec();
        // Paragraph-like boxes are measured as one run of text.
        if style.display == Display::Block
            && !children.is_empty()
            && children.iter().all(|c| self.is_inline(*c))
            && let Some(leaf) = TextLeaf::new(&self.doc.text_content(id), font)
        {
            let mut elements = vec![id];
            elements.extend(
                self.doc
                    .descendants(id)
                    .into_iter()
                    .filter(|d| self.doc.tag(*d).is_some()),
            );
            return Ok(Some(Placed {
                node: self.taffy.new_leaf_with_context(taffy_style, leaf)?,
                elements,
                margin_bottom: style.margin.bottom,
                children: Vec::new(),
            }));
        }

        let mut placed = Vec::with_capacity(children.len());
        for child in children {
            if let Some(p) = self.build(child, font, false)? {
                placed.push(p);
            }
        }
        let node = if placed.is_empty() {
            self.taffy.new_leaf(taffy_style)?
        } else {
            let ids: Vec<taffy::NodeId> = placed.iter().map(|p| p.node).collect();
            self.taffy.new_with_children(taffy_style, &ids)?
        };
        Ok(Some(Placed {
            node,
            elements: vec![id],
            margin_bottom: style.margin.bottom,
            children: placed,
        }))
    }

    /// Writes absolute border boxes for `placed` and returns its bottom edge.
    fn place(
        &self,
        placed: &Placed,
        origin_x: f64,
        origin_y: f64,
        boxes: &mut [Option<Rect>],
    ) -> Result<f64, taffy::TaffyError> {
        let l = self.taffy.layout(placed.node)?;
        let x = origin_x + f64::from(l.location.x);
        let y = origin_y + f64::from(l.location.y);
        let rect = Rect::new(
            x,
            y,
            x + f64::from(l.size.width),
            y + f64::from(l.size.height),
        );
        for el in &placed.elements {
            if let Some(slot) = boxes.get_mut(el.0 as usize) {
                *slot = Some(rect);
            }
        }
        for child in &placed.children {
            self.place(child, x, y, boxes)?;
        }
        Ok(rect.y1)
    }
}

fn dimension(len: Option<Length>) -> Dimension {
    match len {
        Some(Length::Px(v)) => Dimension::length(v as f32),
        Some(Length::Percent(p)) => Dimension::percent(p as f32),
        None => Dimension::auto(),
    }
}

fn inset(len: Option<Length>) -> LengthPercentageAuto {
    match len {
        Some(Length::Px(v)) => LengthPercentageAuto::length(v as f32),
        Some(Length::Percent(p)) => LengthPercentageAuto::percent(p as f32),
        None => LengthPercentageAuto::auto(),
    }
}

fn edges(e: &Edges) -> TaffyRect<LengthPercentage> {
    TaffyRect {
        left: LengthPercentage::length(e.left as f32),
        right: LengthPercentage::length(e.right as f32),
        top: LengthPercentage::length(e.top as f32),
        bottom: LengthPercentage::length(e.bottom as f32),
    }
}

fn gap(column: f64, row: f64) -> Size<LengthPercentage> {
    Size {
        width: LengthPercentage::length(column as f32),
        height: LengthPercentage::length(row as f32),
    }
}

/// Translates a class-derived box into a taffy style. A block with `space-y-*` becomes a
/// column flexbox whose row gap is the sibling spacing.
fn to_taffy(style: &BoxStyle) -> Style {
    let mut out = Style {
        position: if style.out_of_flow {
            Position::Absolute
        } else {
            Position::Relative
        },
        inset: TaffyRect {
            left: inset(style.inset.left),
            right: inset(style.inset.right),
            top: inset(style.inset.top),
            bottom: inset(style.inset.bottom),
        },
        size: Size {
            width: dimension(style.width),
            height: dimension(style.height),
        },
        min_size: Size {
            width: Dimension::auto(),
            height: dimension(style.min_height.map(Length::Px)),
        },
        max_size: Size {
            width: dimension(style.max_width.map(Length::Px)),
            height: Dimension::auto(),
        },
        aspect_ratio: style.aspect_ratio.map(|r| r as f32),
        margin: TaffyRect {
            left: if style.mx_auto {
                LengthPercentageAuto::auto()
            } else {
                LengthPercentageAuto::length(style.margin.left as f32)
            },
            right: if style.mx_auto {
                LengthPercentageAuto::auto()
            } else {
                LengthPercentageAuto::length(style.margin.right as f32)
            },
            top: LengthPercentageAuto::length(style.margin.top as f32),
            bottom: LengthPercentageAuto::length(style.margin.bottom as f32),
        },
        padding: edges(&style.padding),
        border: edges(&style.border),
        align_items: style.align_items.map(|a| match a {
            Align::Start => AlignItems::Start,
            Align::Center => AlignItems::Center,
            Align::End => AlignItems::End,
            Align::Stretch => AlignItems::Stretch,
        }),
        justify_content: style.justify.map(|j| match j {
            Justify::Start => JustifyContent::Start,
            Justify::Center => JustifyContent::Center,
            Justify::End => JustifyContent::End,
            Justify::Between => JustifyContent::SpaceBetween,
        }),
        ..Style::default()
    };

    match style.display {
        Display::Block if style.space_y > 0.0 => {
            out.display = TaffyDisplay::Flex;
            out.flex_direction = FlexDirection::Column;
            out.gap = gap(0.0, style.space_y);
        }
        Display::Block => out.display = TaffyDisplay::Block,
        Display::Flex { column, wrap } => {
            out.display = TaffyDisplay::Flex;
            out.flex_direction = if column {
                FlexDirection::Column
            } else {
                FlexDirection::Row
            };
            out.flex_wrap = if wrap {
                FlexWrap::Wrap
            } else {
                FlexWrap::NoWrap
            };
            out.gap = if column {
                gap(style.gap, style.gap + style.space_y)
            } else {
                gap(style.gap + style.space_x, style.gap)
            };
        }
        Display::Grid { columns } => {
            out.display = TaffyDisplay::Grid;
            out.grid_template_columns = vec![fr(1.0_f32); columns.max(1) as usize];
            out.gap = gap(style.gap, style.gap);
        }
        Display::None => out.display = TaffyDisplay::None,
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/bridge.rs"]
mod tests;
