//! Visual width measurement in terminal columns.
//!
//! Uses Unicode East Asian Width for codepoints and grapheme cluster
//! analysis for emoji sequences. Terminal renderers treat emoji as wide
//! even where the Unicode tables say otherwise, so known emoji ranges are
//! forced to 2 columns.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use super::ansi::strip_ansi;

/// Column width of a single codepoint.
///
/// `0` for control characters, combining marks and other zero-width
/// codepoints; `2` for wide characters and emoji; `1` otherwise.
#[inline]
fn char_width(c: char) -> usize {
    match c as u32 {
        0x2600..=0x27BF => 2,   // Misc symbols, dingbats (✨ ⚡)
        0x1F300..=0x1F5FF => 2, // Pictographs
        0x1F600..=0x1F64F => 2, // Emoticons
        0x1F680..=0x1F6FF => 2, // Transport (🚀)
        0x1F900..=0x1F9FF => 2, // Supplemental pictographs
        0x1FA70..=0x1FAFF => 2, // Extended-A pictographs
        _ => c.width().unwrap_or(0),
    }
}

/// Column width of one grapheme cluster.
///
/// A cluster is a user-perceived character that may span several
/// codepoints: `é` (base + combining mark) is 1 column, a family ZWJ
/// sequence or a flag pair is 2.
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };

    if grapheme.len() == first.len_utf8() {
        return char_width(first);
    }

    // Regional indicator pair → flag emoji.
    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }

    // Any emoji-sequence marker in the tail makes the cluster wide.
    for c in chars {
        match c as u32 {
            0x200D => return 2,            // zero-width joiner
            0xFE0F => return 2,            // VS16, emoji presentation
            0x1F3FB..=0x1F3FF => return 2, // skin tone modifier
            0x20E3 => return 2,            // enclosing keycap
            _ => {}
        }
    }

    // Base character plus combining marks.
    char_width(first)
}

/// Visual width of a string in terminal columns.
///
/// ANSI escapes count as zero width; everything else is measured per
/// grapheme cluster. Pure ASCII without escapes takes a byte-counting
/// fast path.
pub fn string_width(s: &str) -> usize {
    if s.is_empty() {
        return 0;
    }

    if s.is_ascii() && !s.as_bytes().contains(&0x1B) {
        return s.bytes().filter(|&b| (0x20..0x7F).contains(&b)).count();
    }

    strip_ansi(s).graphemes(true).map(grapheme_width).sum()
}

/// Widest line of a multi-line string, in columns.
///
/// Empty input measures 0 (one empty line).
pub fn max_line_width(s: &str) -> usize {
    s.split('\n').map(string_width).max().unwrap_or(0)
}
