//! Root of a render.
//!
//! The root owns the tree and the width ceiling the whole pass runs under.
//! The ambient terminal query happens here, once, at the edge — the layout
//! core only ever sees plain numbers, so trees render identically under a
//! fixed width in tests and under a live terminal in production.

use crate::node::Node;
use crate::types::{Rendered, RenderContext, DEFAULT_TERMINAL_WIDTH};

/// Current terminal width in columns, or [`DEFAULT_TERMINAL_WIDTH`] when
/// there is no terminal to ask (pipes, CI).
pub fn detected_width() -> usize {
    crossterm::terminal::size()
        .map(|(columns, _rows)| columns as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

/// Entry point for rendering a tree.
///
/// Seeds the top-level width ceiling and runs exactly one top-down pass
/// per [`render`](Root::render) call. The root has no siblings, so its
/// index is always solo and no border edge is ever suppressed at this
/// level.
#[derive(Debug, Clone)]
pub struct Root {
    node: Node,
    width: usize,
}

impl Root {
    /// Root sized to the ambient terminal (queried here, once).
    pub fn new(node: impl Into<Node>) -> Self {
        Self::with_width(node, detected_width())
    }

    /// Root with an explicit width ceiling.
    pub fn with_width(node: impl Into<Node>, width: usize) -> Self {
        Self { node: node.into(), width }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    /// Render the tree to its final string.
    pub fn render(&self) -> String {
        self.render_with_shape().value
    }

    /// Render, keeping the measured shape alongside the string.
    pub fn render_with_shape(&self) -> Rendered {
        self.node.render(RenderContext::root(self.width))
    }
}
