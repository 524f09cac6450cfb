//! Modal menu renderer (the post actions sheet).

use crate::ui::helpers::{display_width, pad, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::OverlayInfo;

const MENU_WIDTH: usize = 32;

/// Draws a bordered menu centered over the list area, starting at `top`.
pub fn render_overlay(top: usize, overlay: &OverlayInfo, theme: &Theme, cols: usize) {
    let width = MENU_WIDTH.min(cols.saturating_sub(2)).max(4);
    let inner = width - 2;
    let left = cols.saturating_sub(width) / 2 + 1;
    let border = Theme::fg(&theme.colors.accent);

    let title = truncate_chars(&overlay.title, inner.saturating_sub(2));
    position_cursor(top, left);
    print!("{border}┌ {}{title}{}{border} ", Theme::bold(), Theme::reset());
    print!("{}┐{}", "─".repeat(inner.saturating_sub(display_width(&title) + 2)), Theme::reset());

    for (index, entry) in overlay.entries.iter().enumerate() {
        let text = truncate_chars(&format!(" {entry}"), inner);
        position_cursor(top + 1 + index, left);
        print!("{border}│");
        if index == overlay.selected {
            print!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{text}");
        pad(inner.saturating_sub(display_width(&text)));
        print!("{}{border}│{}", Theme::reset(), Theme::reset());
    }

    position_cursor(top + 1 + overlay.entries.len(), left);
    print!("{border}└{}┘{}", "─".repeat(inner), Theme::reset());
}
