//! Container nodes.
//!
//! A block composes its children along an orientation, wraps them in
//! padding bands and an optional border, and honors span constraints.
//!
//! Rendering is two passes per invocation: an intrinsic pass renders every
//! child under the ancestor-bounded width to learn its shape, then a
//! constraint pass re-renders any child whose share of a horizontal row
//! came out tighter (wrapping is width-dependent, so a narrower budget
//! changes the child's lines — there is no cached layout to reuse).

use crate::border::{Border, BorderChars, BorderEdges, BorderStyle};
use crate::clockhand::{Clockhand, Pad, Sides};
use crate::text_measure::{grapheme_width, string_width};
use crate::types::{
    Orientation, Rendered, RenderContext, Shape, SiblingIndex, SpanRange,
};
use unicode_segmentation::UnicodeSegmentation;

use super::Node;

/// A container node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    children: Vec<Node>,
    orientation: Orientation,
    padding: Sides<Pad>,
    border: Option<Border>,
    span: SpanRange,
}

impl Block {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            children: Vec::new(),
            orientation,
            padding: Sides::none(),
            border: None,
            span: SpanRange::NONE,
        }
    }

    /// Block stacking children top to bottom.
    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Block laying children side by side.
    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Padding in clockhand shorthand.
    pub fn padding(mut self, pad: impl Into<Clockhand<Pad>>) -> Self {
        self.padding = pad.into().resolve();
        self
    }

    /// Full border in the given style.
    pub fn border(mut self, style: BorderStyle) -> Self {
        self.border = Some(Border::new(style));
        self
    }

    /// Border restricted to the edges the clockhand keeps.
    pub fn border_edges(mut self, style: BorderStyle, edges: impl Into<Clockhand<bool>>) -> Self {
        self.border = Some(Border::with_edges(style, edges));
        self
    }

    pub fn span(mut self, span: SpanRange) -> Self {
        self.span = span;
        self
    }

    /// Lay out and compose this block's subtree.
    pub fn render(&self, ctx: RenderContext) -> Rendered {
        let edges = self
            .border
            .as_ref()
            .map(|b| b.visible_edges(ctx.flow, ctx.index))
            .unwrap_or_else(BorderEdges::empty);

        let border_cols =
            usize::from(edges.contains(BorderEdges::LEFT)) + usize::from(edges.contains(BorderEdges::RIGHT));
        let border_rows =
            usize::from(edges.contains(BorderEdges::TOP)) + usize::from(edges.contains(BorderEdges::BOTTOM));

        let pad_left = self.padding.left.as_ref().map_or(0, Pad::columns);
        let pad_right = self.padding.right.as_ref().map_or(0, Pad::columns);
        let pad_rows = self.padding.top.as_ref().map_or(0, Pad::rows)
            + self.padding.bottom.as_ref().map_or(0, Pad::rows);
        let deco_cols = border_cols + pad_left + pad_right;
        let deco_rows = border_rows + pad_rows;

        let width_range = self.span.width_range(self.orientation);
        let height_range = self.span.height_range(self.orientation);

        // Width ceiling for the whole block, then for the content inside
        // the decorations.
        let own_max = match (ctx.max_width, width_range.max) {
            (Some(inherited), Some(span)) => Some(inherited.min(span)),
            (inherited, span) => inherited.or(span),
        };
        let inner_max = own_max.map(|w| w.saturating_sub(deco_cols));

        let rendered = self.render_children(inner_max);
        let mut lines = match self.orientation {
            Orientation::Vertical => stack_lines(&rendered),
            Orientation::Horizontal => join_rows(&rendered),
        };

        let mut content_width = lines.iter().map(|l| string_width(l)).max().unwrap_or(0);
        if let Some(min) = width_range.min {
            // A minimum beyond the inherited ceiling overflows; rendering
            // something oversized beats rendering nothing.
            content_width = content_width.max(min.saturating_sub(deco_cols));
        }

        // Height clamp counts the decoration rows.
        let target_rows = height_range
            .clamp(lines.len() + deco_rows)
            .saturating_sub(deco_rows);
        lines.truncate(target_rows);

        let rectangular = !edges.is_empty()
            || self.padding.right.is_some()
            || width_range.min.is_some();
        if rectangular {
            for line in &mut lines {
                pad_to_width(line, content_width);
            }
        }
        let blank = if rectangular {
            " ".repeat(content_width)
        } else {
            String::new()
        };
        while lines.len() < target_rows {
            lines.push(blank.clone());
        }

        let lines = self.apply_padding(lines, content_width, &blank);
        let lines = apply_border(lines, edges, self.border.as_ref(), content_width + pad_left + pad_right);

        let intrinsic_width = content_width + deco_cols;
        let desired_width = if width_range.is_none() {
            None
        } else {
            Some(width_range.clamp(intrinsic_width))
        };

        Rendered {
            shape: Shape {
                intrinsic_width,
                intrinsic_height: lines.len(),
                desired_width,
            },
            value: lines.join("\n"),
        }
    }

    /// Intrinsic pass, then the constraint pass where the orientation
    /// makes children share a width budget.
    fn render_children(&self, inner_max: Option<usize>) -> Vec<Rendered> {
        let total = self.children.len();
        let child_ctx = |position: usize, max_width: Option<usize>| RenderContext {
            max_width,
            flow: self.orientation,
            index: SiblingIndex::at(position, total),
        };

        let mut rendered: Vec<Rendered> = self
            .children
            .iter()
            .enumerate()
            .map(|(i, child)| child.render(child_ctx(i, inner_max)))
            .collect();

        if self.orientation.is_horizontal() {
            if let Some(limit) = inner_max {
                let natural: usize = rendered.iter().map(|r| r.shape.intrinsic_width).sum();
                if natural > limit {
                    // Distribute greedily in order; a tightened child
                    // re-renders because its wrapping changes.
                    let mut remaining = limit;
                    for (i, child) in self.children.iter().enumerate() {
                        let want = rendered[i].shape.intrinsic_width;
                        let given = want.min(remaining.max(1));
                        if given < want {
                            rendered[i] = child.render(child_ctx(i, Some(given)));
                        }
                        remaining = remaining.saturating_sub(rendered[i].shape.intrinsic_width);
                    }
                }
            }
        }

        rendered
    }

    /// Insert top/bottom bands and apply left/right bands per line.
    fn apply_padding(&self, lines: Vec<String>, content_width: usize, blank: &str) -> Vec<String> {
        let band = |pad: Option<&Pad>| -> Vec<String> {
            match pad {
                None => vec![],
                Some(Pad::Cells(n)) => vec![blank.to_string(); *n],
                Some(Pad::Fill(fragment)) => vec![fill_line(fragment, content_width)],
            }
        };

        let left = match &self.padding.left {
            None => String::new(),
            Some(Pad::Cells(n)) => " ".repeat(*n),
            Some(Pad::Fill(fragment)) => fragment.clone(),
        };
        let right = match &self.padding.right {
            None => String::new(),
            Some(Pad::Cells(n)) => " ".repeat(*n),
            Some(Pad::Fill(fragment)) => fragment.clone(),
        };

        let mut out = band(self.padding.top.as_ref());
        out.extend(lines);
        out.extend(band(self.padding.bottom.as_ref()));

        if !left.is_empty() || !right.is_empty() {
            for line in &mut out {
                *line = format!("{left}{line}{right}");
            }
        }
        out
    }
}

/// Stack children vertically. Zero-height children contribute nothing.
fn stack_lines(rendered: &[Rendered]) -> Vec<String> {
    let mut lines = Vec::new();
    for r in rendered {
        if r.shape.intrinsic_height == 0 {
            continue;
        }
        lines.extend(r.value.split('\n').map(str::to_string));
    }
    lines
}

/// Lay children side by side, row by row.
///
/// Shorter children are padded to the tallest sibling's height with blank
/// rows, and each child's lines are padded to that child's width so the
/// next column starts aligned. Padding stops at the last child with
/// content on a row, so rows stay ragged on the right.
fn join_rows(rendered: &[Rendered]) -> Vec<String> {
    let height = rendered
        .iter()
        .map(|r| r.shape.intrinsic_height)
        .max()
        .unwrap_or(0);

    let child_lines: Vec<Vec<&str>> = rendered
        .iter()
        .map(|r| {
            if r.shape.intrinsic_height == 0 {
                Vec::new()
            } else {
                r.value.split('\n').collect()
            }
        })
        .collect();

    let mut rows = Vec::with_capacity(height);
    for i in 0..height {
        let last_occupied = child_lines
            .iter()
            .rposition(|lines| !lines.get(i).copied().unwrap_or("").is_empty());

        let mut row = String::new();
        if let Some(last) = last_occupied {
            for (j, lines) in child_lines.iter().take(last + 1).enumerate() {
                let line = lines.get(i).copied().unwrap_or("");
                row.push_str(line);
                if j < last {
                    let width = string_width(line);
                    if width < rendered[j].shape.intrinsic_width {
                        row.push_str(&" ".repeat(rendered[j].shape.intrinsic_width - width));
                    }
                }
            }
        }
        rows.push(row);
    }
    rows
}

/// Pad a line with spaces up to `width` columns.
fn pad_to_width(line: &mut String, width: usize) {
    let current = string_width(line);
    if current < width {
        line.push_str(&" ".repeat(width - current));
    }
}

/// Repeat a fill fragment to cover `width` columns, then square off with
/// spaces where the last repetition doesn't land exactly.
fn fill_line(fragment: &str, width: usize) -> String {
    let mut line = String::new();
    if width == 0 || fragment.is_empty() {
        return line;
    }

    let mut columns = 0;
    'fill: loop {
        for grapheme in fragment.graphemes(true) {
            let gw = grapheme_width(grapheme);
            if columns + gw > width {
                break 'fill;
            }
            line.push_str(grapheme);
            columns += gw;
        }
    }
    pad_to_width(&mut line, width);
    line
}

/// Draw border rows and columns around the padded content.
fn apply_border(
    lines: Vec<String>,
    edges: BorderEdges,
    border: Option<&Border>,
    inner_width: usize,
) -> Vec<String> {
    let Some(border) = border else {
        return lines;
    };
    if edges.is_empty() {
        return lines;
    }
    let chars = border.style.chars();

    let left = edges.contains(BorderEdges::LEFT);
    let right = edges.contains(BorderEdges::RIGHT);

    let mut out = Vec::with_capacity(lines.len() + 2);
    if edges.contains(BorderEdges::TOP) {
        out.push(horizontal_rule(&chars, inner_width, left, right, true));
    }
    for line in lines {
        let mut bordered = String::new();
        if left {
            bordered.push_str(chars.vertical);
        }
        bordered.push_str(&line);
        if right {
            bordered.push_str(chars.vertical);
        }
        out.push(bordered);
    }
    if edges.contains(BorderEdges::BOTTOM) {
        out.push(horizontal_rule(&chars, inner_width, left, right, false));
    }
    out
}

/// One horizontal border row; corners appear only where the adjacent
/// vertical edge exists.
fn horizontal_rule(chars: &BorderChars, inner_width: usize, left: bool, right: bool, top: bool) -> String {
    let mut rule = String::new();
    if left {
        rule.push_str(if top { chars.top_left } else { chars.bottom_left });
    }
    rule.push_str(&chars.horizontal.repeat(inner_width));
    if right {
        rule.push_str(if top { chars.top_right } else { chars.bottom_right });
    }
    rule
}
