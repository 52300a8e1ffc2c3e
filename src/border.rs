//! Border styles and edge selection.
//!
//! A border is a style (which glyphs) plus an edge set (which of the four
//! sides actually draw). Edge sets come from the same clockhand shorthand
//! as padding, and get filtered again at render time so adjacent siblings
//! never draw doubled borders between them.

use bitflags::bitflags;

use crate::clockhand::Clockhand;
use crate::types::{Orientation, SiblingIndex};

// =============================================================================
// Edge flags
// =============================================================================

bitflags! {
    /// Which edges of a block draw their border.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BorderEdges: u8 {
        const TOP = 1 << 0;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT = 1 << 3;
    }
}

impl BorderEdges {
    /// Edge set from resolved clockhand sides: a side keeps its edge only
    /// when present and true.
    pub fn from_clockhand(sides: Clockhand<bool>) -> Self {
        let sides = sides.resolve();
        let mut edges = Self::empty();
        if sides.top == Some(true) {
            edges |= Self::TOP;
        }
        if sides.right == Some(true) {
            edges |= Self::RIGHT;
        }
        if sides.bottom == Some(true) {
            edges |= Self::BOTTOM;
        }
        if sides.left == Some(true) {
            edges |= Self::LEFT;
        }
        edges
    }
}

// =============================================================================
// Style catalog
// =============================================================================

/// Border glyph styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// ─ │ ┌ ┐ └ ┘
    #[default]
    Single,
    /// ═ ║ ╔ ╗ ╚ ╝
    Double,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded,
    /// ━ ┃ ┏ ┓ ┗ ┛
    Bold,
    /// ┄ ┆ ┌ ┐ └ ┘
    Dashed,
    /// - | + + + +
    Ascii,
}

/// Glyphs for one border style. Every glyph is a single terminal column.
#[derive(Debug, Clone, Copy)]
pub struct BorderChars {
    pub horizontal: &'static str,
    pub vertical: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_right: &'static str,
    pub bottom_left: &'static str,
}

impl BorderStyle {
    /// Get the glyph set for this style.
    pub const fn chars(&self) -> BorderChars {
        match self {
            Self::Single => BorderChars {
                horizontal: "─",
                vertical: "│",
                top_left: "┌",
                top_right: "┐",
                bottom_right: "┘",
                bottom_left: "└",
            },
            Self::Double => BorderChars {
                horizontal: "═",
                vertical: "║",
                top_left: "╔",
                top_right: "╗",
                bottom_right: "╝",
                bottom_left: "╚",
            },
            Self::Rounded => BorderChars {
                horizontal: "─",
                vertical: "│",
                top_left: "╭",
                top_right: "╮",
                bottom_right: "╯",
                bottom_left: "╰",
            },
            Self::Bold => BorderChars {
                horizontal: "━",
                vertical: "┃",
                top_left: "┏",
                top_right: "┓",
                bottom_right: "┛",
                bottom_left: "┗",
            },
            Self::Dashed => BorderChars {
                horizontal: "┄",
                vertical: "┆",
                top_left: "┌",
                top_right: "┐",
                bottom_right: "┘",
                bottom_left: "└",
            },
            Self::Ascii => BorderChars {
                horizontal: "-",
                vertical: "|",
                top_left: "+",
                top_right: "+",
                bottom_right: "+",
                bottom_left: "+",
            },
        }
    }
}

// =============================================================================
// Border
// =============================================================================

/// A block's border configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    pub style: BorderStyle,
    pub edges: BorderEdges,
}

impl Border {
    /// Full border in the given style.
    pub const fn new(style: BorderStyle) -> Self {
        Self { style, edges: BorderEdges::all() }
    }

    /// Border restricted to the edges the clockhand keeps.
    pub fn with_edges(style: BorderStyle, edges: impl Into<Clockhand<bool>>) -> Self {
        Self { style, edges: BorderEdges::from_clockhand(edges.into()) }
    }

    /// Edges that actually draw at this tree position.
    ///
    /// A block that is not first among its siblings drops its flow-leading
    /// edge (top under vertical flow, left under horizontal flow): that edge
    /// would double up against the previous sibling's trailing border.
    pub fn visible_edges(&self, flow: Orientation, index: SiblingIndex) -> BorderEdges {
        let mut edges = self.edges;
        if !index.is_first {
            edges -= match flow {
                Orientation::Vertical => BorderEdges::TOP,
                Orientation::Horizontal => BorderEdges::LEFT,
            };
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_from_uniform_clockhand() {
        assert_eq!(BorderEdges::from_clockhand(Clockhand::from(true)), BorderEdges::all());
        assert_eq!(
            BorderEdges::from_clockhand(Clockhand::from(false)),
            BorderEdges::empty()
        );
    }

    #[test]
    fn edges_from_sparse_clockhand() {
        // [top, right, bottom, left] with right and bottom omitted.
        let edges =
            BorderEdges::from_clockhand(Clockhand::Quad([Some(true), None, None, Some(true)]));
        assert_eq!(edges, BorderEdges::TOP | BorderEdges::LEFT);
    }

    #[test]
    fn present_false_drops_edge() {
        let edges = BorderEdges::from_clockhand(Clockhand::from([true, false]));
        assert_eq!(edges, BorderEdges::TOP | BorderEdges::BOTTOM);
    }

    #[test]
    fn first_sibling_keeps_all_edges() {
        let border = Border::new(BorderStyle::Single);
        let edges = border.visible_edges(Orientation::Vertical, SiblingIndex::at(0, 3));
        assert_eq!(edges, BorderEdges::all());
    }

    #[test]
    fn later_sibling_drops_leading_edge() {
        let border = Border::new(BorderStyle::Single);

        let vertical = border.visible_edges(Orientation::Vertical, SiblingIndex::at(1, 3));
        assert_eq!(vertical, BorderEdges::all() - BorderEdges::TOP);

        let horizontal = border.visible_edges(Orientation::Horizontal, SiblingIndex::at(2, 3));
        assert_eq!(horizontal, BorderEdges::all() - BorderEdges::LEFT);
    }

    #[test]
    fn suppression_never_reintroduces_edges() {
        let border = Border::with_edges(BorderStyle::Single, Clockhand::from([false, true]));
        let edges = border.visible_edges(Orientation::Vertical, SiblingIndex::at(1, 2));
        assert_eq!(edges, BorderEdges::RIGHT | BorderEdges::LEFT);
    }
}
