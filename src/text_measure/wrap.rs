//! Word wrapping for fixed-width output.
//!
//! Breaks at Unicode word boundaries (UAX #29). A word wider than the line
//! is force-broken; [`WrapStrategy`] selects whether the break point gets a
//! hyphen. Explicit `\n` in the input is always a hard break.

use unicode_segmentation::UnicodeSegmentation;

use super::ansi::ansi_runs;
use super::width::grapheme_width;

/// How to break a single word that is wider than the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapStrategy {
    /// Break at a grapheme boundary with no marker.
    BreakWord,
    /// Break one column early and mark the split with `-`.
    ///
    /// Falls back to a plain grapheme break when the line is a single
    /// column wide (no room for the hyphen).
    #[default]
    Hyphenate,
}

/// Wrap text to `max_width` columns.
///
/// Returns at least one line: empty input is one empty line, so an empty
/// text node still occupies a row. `max_width` of 0 disables soft wrapping
/// and only honors hard breaks.
pub fn wrap(text: &str, max_width: usize, strategy: WrapStrategy) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    if max_width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }

    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        wrap_line(raw_line, max_width, strategy, &mut lines);
    }
    lines
}

/// Wrap one hard line into `lines`.
///
/// Escape sequences ride along at zero width and never trigger a break,
/// so styled text wraps exactly like its visible content.
fn wrap_line(line: &str, max_width: usize, strategy: WrapStrategy, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0usize;

    for (run, is_escape) in ansi_runs(line) {
        if is_escape {
            current.push_str(run);
            continue;
        }

        for segment in run.split_word_bounds() {
            let seg_width: usize = segment.graphemes(true).map(grapheme_width).sum();

            if current_width + seg_width > max_width {
                if current_width > 0 {
                    lines.push(current.trim_end().to_string());
                    current = String::new();
                    current_width = 0;
                }

                if seg_width > max_width {
                    break_segment(segment, max_width, strategy, lines, &mut current, &mut current_width);
                    continue;
                }

                // A wrap break swallows the whitespace that caused it.
                if segment.chars().all(char::is_whitespace) {
                    continue;
                }
            }

            current.push_str(segment);
            current_width += seg_width;
        }
    }

    lines.push(current);
}

/// Force-break a segment wider than the line, per strategy.
///
/// The final chunk stays in `current` so following segments continue on
/// the same line.
fn break_segment(
    segment: &str,
    max_width: usize,
    strategy: WrapStrategy,
    lines: &mut Vec<String>,
    current: &mut String,
    current_width: &mut usize,
) {
    let hyphenate = strategy == WrapStrategy::Hyphenate && max_width > 1;
    let limit = if hyphenate { max_width - 1 } else { max_width };

    for grapheme in segment.graphemes(true) {
        let gw = grapheme_width(grapheme);

        if *current_width + gw > limit && !current.is_empty() {
            if hyphenate {
                current.push('-');
            }
            lines.push(std::mem::take(current));
            *current_width = 0;
        }

        current.push_str(grapheme);
        *current_width += gw;
    }
}
