//! Sub-tab bar renderer (search tabs, profile tabs, notification filters).

use crate::ui::helpers::{display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TabItem;

/// Renders the tab row, underlining the active tab in the accent color.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_tabs(row: usize, tabs: &[TabItem], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("  ");
    let mut used = 2;

    for tab in tabs {
        let width = display_width(&tab.label) + 3;
        if used + width > cols {
            break;
        }
        if tab.is_active {
            print!("{}\u{1b}[4m{}", Theme::bold(), Theme::fg(&theme.colors.accent));
            print!("[{}]", tab.label);
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!(" {} ", tab.label);
        }
        print!("{} ", Theme::reset());
        used += width;
    }

    pad(cols.saturating_sub(used));
    row + 1
}
