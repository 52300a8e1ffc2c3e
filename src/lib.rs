//! # weft
//!
//! Box-model text layout engine for fixed-width terminal output.
//!
//! A tree of text nodes renders to a single `\n`-delimited string: blocks
//! compose children vertically or horizontally, expand CSS-style clockhand
//! shorthand into per-side padding and border edges, honor min/max span
//! constraints per axis, and word-wrap text to the available width under a
//! hard 70-column readability cap.
//!
//! ## Rendering model
//!
//! ```text
//! Node tree → Root::render() → RenderContext (width ceiling, sibling index)
//!           → recursive render() → { shape, value } per subtree
//! ```
//!
//! Each node's `shape` feeds its parent's layout decisions; `value` is the
//! composed string. Rendering is a pure function of node and context — a
//! tree is never mutated by a render and can be rendered repeatedly or
//! concurrently under different contexts.
//!
//! ## Example
//!
//! ```
//! use weft::{Block, BorderStyle, Root};
//!
//! let tree = Block::vertical()
//!     .child("status")
//!     .padding([0usize, 1])
//!     .border(BorderStyle::Rounded);
//!
//! assert_eq!(
//!     Root::with_width(tree, 40).render(),
//!     "╭────────╮\n│ status │\n╰────────╯"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Orientation, SpanRange, RenderContext, ...)
//! - [`clockhand`] - Per-side shorthand expansion
//! - [`border`] - Border styles and edge selection
//! - [`node`] - The node tree (Leaf, Block)
//! - [`root`] - Entry point and terminal width seeding
//! - [`text_measure`] - Visual width measurement and wrapping

pub mod border;
pub mod clockhand;
pub mod node;
pub mod root;
pub mod text_measure;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use border::{Border, BorderChars, BorderEdges, BorderStyle};

pub use clockhand::{Clockhand, Pad, Sides};

pub use node::{Block, Leaf, Node};

pub use root::{detected_width, Root};

pub use text_measure::{string_width, strip_ansi, wrap, WrapStrategy};
