//! End-to-end rendering of composed trees.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use weft::{
    AxisRange, Block, BorderStyle, Leaf, Root, SpanRange, string_width, MAX_COLUMN_WIDTH,
};

fn boxed(text: &str) -> Block {
    Block::vertical()
        .child(text)
        .padding([0usize, 1])
        .border(BorderStyle::Single)
}

#[test]
fn bordered_paragraph_wraps_inside_decorations() {
    let tree = Block::vertical()
        .child("a quick brown fox jumps over")
        .padding([0usize, 1])
        .border(BorderStyle::Single);

    assert_eq!(
        Root::with_width(tree, 20).render(),
        "┌────────────────┐\n\
         │ a quick brown  │\n\
         │ fox jumps over │\n\
         └────────────────┘"
    );
}

#[test]
fn dashboard_of_nested_blocks() {
    let tree = Block::vertical().child(boxed("Build Status")).child(
        Block::horizontal()
            .child(boxed("ok: 12"))
            .child(boxed("fail: 0")),
    );

    assert_eq!(
        Root::with_width(tree, 40).render(),
        "┌──────────────┐\n\
         │ Build Status │\n\
         └──────────────┘\n\
         ┌────────┐─────────┐\n\
         │ ok: 12 │ fail: 0 │\n\
         └────────┘─────────┘"
    );
}

#[test]
fn horizontal_rows_match_tallest_child() {
    let tree = Block::horizontal().child("alpha\nbeta").child("gamma");
    let rendered = Root::with_width(tree, 40).render();

    assert_eq!(rendered, "alphagamma\nbeta");
    assert_eq!(rendered.split('\n').count(), 2);
}

#[test]
fn span_constraints_compose_with_borders() {
    let tree = Block::vertical()
        .child("hi")
        .border(BorderStyle::Single)
        .span(SpanRange::new(AxisRange::NONE, AxisRange::at_least(8)));

    assert_eq!(
        Root::with_width(tree, 40).render(),
        "┌──────┐\n\
         │hi    │\n\
         └──────┘"
    );
}

#[test]
fn styled_text_keeps_border_alignment() {
    let tree = Block::vertical()
        .child("\x1b[32mok\x1b[0m")
        .border(BorderStyle::Single);

    assert_eq!(
        Root::with_width(tree, 40).render(),
        "┌──┐\n│\x1b[32mok\x1b[0m│\n└──┘"
    );
}

#[test]
fn readability_cap_overrides_wide_roots() {
    let rendered = Root::with_width(Leaf::new("_".repeat(100)), 120).render();
    let widest = rendered.split('\n').map(string_width).max().unwrap();
    assert_eq!(widest, MAX_COLUMN_WIDTH);

    let rendered = Root::with_width(Leaf::new("_".repeat(100)), 40).render();
    let widest = rendered.split('\n').map(string_width).max().unwrap();
    assert_eq!(widest, 40);
}

proptest! {
    #[test]
    fn leaf_lines_never_exceed_the_effective_bound(
        text in "[ -~]{0,200}",
        width in 1usize..150,
    ) {
        let rendered = Root::with_width(Leaf::new(text), width).render();
        let bound = width.min(MAX_COLUMN_WIDTH);
        for line in rendered.split('\n') {
            prop_assert!(string_width(line) <= bound);
        }
    }

    #[test]
    fn rendering_is_idempotent(text in "[ -~]{0,120}", width in 1usize..100) {
        let root = Root::with_width(Leaf::new(text), width);
        prop_assert_eq!(root.render(), root.render());
    }

    #[test]
    fn reported_shape_matches_the_value(text in "[ -~]{0,120}", width in 1usize..100) {
        let rendered = Root::with_width(Leaf::new(text), width).render_with_shape();
        let widest = rendered.value.split('\n').map(string_width).max().unwrap_or(0);
        let height = rendered.value.split('\n').count();
        prop_assert_eq!(rendered.shape.intrinsic_width, widest);
        prop_assert_eq!(rendered.shape.intrinsic_height, height);
    }
}
