//! Shared rendering utilities and helpers.
//!
//! Low-level pieces used by several components: cursor positioning, match
//! highlighting and width handling. Everything here counts characters, not
//! bytes, so names and post bodies with non-ASCII text line up.
//!
//! # Example
//!
//! ```
//! use neonfeed::ui::helpers::{display_width, truncate_chars};
//!
//! assert_eq!(truncate_chars("Neon nights in the city", 12), "Neon nigh...");
//! assert_eq!(display_width("café"), 4);
//! ```

use crate::ui::theme::Theme;

const ELLIPSIS: &str = "...";

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are
/// 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of terminal cells `text` occupies, counting one per character.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` characters, ending in "..." when cut.
///
/// Widths of three or fewer leave no room for the ellipsis and cut hard.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max <= ELLIPSIS.len() {
        return text.chars().take(max).collect();
    }

    let mut out: String = text.chars().take(max - ELLIPSIS.len()).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Prints `count` spaces.
pub fn pad(count: usize) {
    print!("{}", " ".repeat(count));
}

/// Renders text with highlighted character ranges for query matches.
///
/// Highlighted sections use the theme's match colors. A selected row keeps
/// its selection colors, so after each highlight the base style is restored
/// by re-emitting `restore`.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges `(start, end)`, end exclusive
/// * `theme` - Active color theme
/// * `restore` - Escape sequence re-applied after each highlighted section
///
/// Ranges past the end of `text` are clipped.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        let plain: String = chars[current_pos..start].iter().collect();
        print!("{plain}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted: String = chars[start..end].iter().collect();
        print!("{highlighted}");
        print!("{}{restore}", Theme::reset());

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_chars("hello", 5), "hello");
        assert_eq!(truncate_chars("", 0), "");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate_chars("hello world", 8), "hello...");
        assert_eq!(display_width(&truncate_chars("hello world", 8)), 8);
    }

    #[test]
    fn tiny_widths_cut_without_ellipsis() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hello", 0), "");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("♥♥♥♥♥♥", 5), "♥♥...");
        assert_eq!(display_width("♥ 234"), 5);
    }
}
