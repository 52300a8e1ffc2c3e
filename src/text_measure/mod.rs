//! Text measurement and wrapping.
//!
//! Everything the layout engine knows about text size lives here. Widths are
//! *visual* terminal columns, not character counts:
//!
//! - ANSI escape sequences occupy zero columns
//! - CJK ideographs and fullwidth forms occupy 2 columns
//! - Emoji sequences (ZWJ, skin tones, flags) occupy 2 columns
//! - Combining marks occupy 0 columns
//!
//! Wrapping breaks at Unicode word boundaries and hyphenates words wider
//! than the line (see [`WrapStrategy`]).

mod ansi;
mod width;
mod wrap;

pub use ansi::strip_ansi;
pub use width::{grapheme_width, max_line_width, string_width};
pub use wrap::{wrap, WrapStrategy};
