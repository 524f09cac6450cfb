//! Input box renderer.
//!
//! One bordered box serves the search query, the messages filter and the
//! comment draft; the prompt label tells them apart.

use crate::ui::helpers::{display_width, pad, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the input box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Drawn after the query while the box has focus.
const CURSOR: &str = "▏";

/// Renders the input box at the specified row.
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────┐
/// [margin] │ Search: query▏   │
/// [margin] └──────────────────┘
/// ```
///
/// An unfocused box is drawn in `border`; a focused one in
/// `search_bar_border`.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_focused {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    position_cursor(row, 1);
    pad(SEARCH_BOX_MARGIN);
    print!("{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let cursor = if search.is_focused { CURSOR } else { "" };
    let text = truncate_chars(
        &format!(" {}: {}{cursor}", search.prompt, search.query),
        inner_width,
    );

    position_cursor(row + 1, 1);
    pad(SEARCH_BOX_MARGIN);
    print!("{border}│");
    if search.is_focused {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{text}");
    pad(inner_width.saturating_sub(display_width(&text)));
    print!("{border}│{}", Theme::reset());

    position_cursor(row + 2, 1);
    pad(SEARCH_BOX_MARGIN);
    print!("{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    row + 3
}
