//! Empty state component renderer.

use crate::ui::helpers::{display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the centered two-line empty message starting at `row`.
///
/// Shown in place of the list when a view has no rows, e.g. "No
/// notifications found" under a filter nothing matches.
///
/// # Layout
///
/// ```text
/// [blank line]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let msg_len = display_width(&empty.message);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(row + 1, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.empty_state_fg));
    pad(msg_padding);
    print!("{}", empty.message);
    pad(cols.saturating_sub(msg_padding + msg_len));
    print!("{}", Theme::reset());

    let sub_len = display_width(&empty.subtitle);
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    position_cursor(row + 2, 1);
    print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    pad(sub_padding);
    print!("{}", empty.subtitle);
    pad(cols.saturating_sub(sub_padding + sub_len));
    print!("{}", Theme::reset());

    row + 3
}
