//! Navigation bar renderer.

use crate::ui::helpers::{display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NavItem;

/// Renders the six nav tabs as `1 Home  2 Search(3) ...` on one line.
///
/// The active tab is drawn in the selection colors; badges use `unread_fg`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_nav(row: usize, items: &[NavItem], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let mut used = 0;

    for item in items {
        let label = format!(" {} {} ", item.key, item.label);
        let badge = item.badge.map(|n| format!("({n}) ")).unwrap_or_default();
        let width = display_width(&label) + display_width(&badge);
        if used + width > cols {
            break;
        }

        if item.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{label}{}", Theme::reset());

        if !badge.is_empty() {
            print!("{}{badge}{}", Theme::fg(&theme.colors.unread_fg), Theme::reset());
        }
        used += width;
    }

    pad(cols.saturating_sub(used));
    row + 1
}
