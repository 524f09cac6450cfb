//! Footer component renderer.

use crate::ui::helpers::{display_width, pad, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered at the specified row.
///
/// Hints wider than the terminal are truncated.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate_chars(&footer.keybindings, cols);
    let text_len = display_width(&help_text);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    pad(padding);
    print!("{help_text}");
    pad(cols.saturating_sub(padding + text_len));
    print!("{}", Theme::reset());
    row + 1
}
