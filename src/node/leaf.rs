//! Text nodes.

use crate::text_measure::{string_width, wrap, WrapStrategy};
use crate::types::{Rendered, RenderContext, Shape, MAX_COLUMN_WIDTH};

/// A text node: raw content, wrapped at render time to the width the tree
/// offers, never wider than the readability cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    value: String,
}

impl Leaf {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Wrap the text and report its measured shape.
    ///
    /// The effective width is the context ceiling clamped to
    /// [`MAX_COLUMN_WIDTH`]: prose wraps at 70 columns even on a wider
    /// terminal. Text already narrower than that passes through unmodified.
    /// An empty leaf is one line of zero width.
    pub fn render(&self, ctx: RenderContext) -> Rendered {
        let effective = ctx
            .max_width
            .unwrap_or(MAX_COLUMN_WIDTH)
            .min(MAX_COLUMN_WIDTH);

        let lines = wrap(&self.value, effective, WrapStrategy::Hyphenate);

        let shape = Shape {
            intrinsic_width: lines.iter().map(|l| string_width(l)).max().unwrap_or(0),
            intrinsic_height: lines.len(),
            desired_width: None,
        };

        Rendered { shape, value: lines.join("\n") }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::types::MAX_COLUMN_WIDTH;

    fn bounded(width: usize) -> RenderContext {
        RenderContext { max_width: Some(width), ..RenderContext::unbounded() }
    }

    #[test]
    fn short_text_passes_through() {
        let rendered = Leaf::new("hello").render(bounded(40));
        assert_eq!(rendered.value, "hello");
        assert_eq!(rendered.shape.intrinsic_width, 5);
        assert_eq!(rendered.shape.intrinsic_height, 1);
        assert_eq!(rendered.shape.desired_width, None);
    }

    #[test]
    fn empty_text_is_one_zero_width_line() {
        let rendered = Leaf::new("").render(bounded(40));
        assert_eq!(rendered.value, "");
        assert_eq!(rendered.shape.intrinsic_width, 0);
        assert_eq!(rendered.shape.intrinsic_height, 1);
    }

    #[test]
    fn cap_applies_when_terminal_is_wider() {
        let rendered = Leaf::new("_".repeat(100)).render(bounded(120));
        let widest = rendered.value.split('\n').map(string_width).max().unwrap();
        assert_eq!(widest, MAX_COLUMN_WIDTH);
    }

    #[test]
    fn cap_applies_when_no_width_is_given() {
        let rendered = Leaf::new("_".repeat(100)).render(RenderContext::unbounded());
        let widest = rendered.value.split('\n').map(string_width).max().unwrap();
        assert_eq!(widest, MAX_COLUMN_WIDTH);
    }

    #[test]
    fn narrower_context_constrains_further() {
        let rendered = Leaf::new("_".repeat(100)).render(bounded(40));
        let widest = rendered.value.split('\n').map(string_width).max().unwrap();
        assert_eq!(widest, 40);
    }

    #[test]
    fn height_counts_wrapped_lines() {
        let rendered = Leaf::new("one two three four").render(bounded(9));
        assert_eq!(rendered.value, "one two\nthree\nfour");
        assert_eq!(rendered.shape.intrinsic_height, 3);
        assert_eq!(rendered.shape.intrinsic_width, 7);
    }

    #[test]
    fn rendering_is_pure() {
        let leaf = Leaf::new("some text that wraps around a few times maybe");
        let a = leaf.render(bounded(12));
        let b = leaf.render(bounded(12));
        assert_eq!(a, b);
    }
}
