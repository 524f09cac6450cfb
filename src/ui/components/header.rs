//! Header component renderer.
//!
//! Draws the title bar, with the optional unread subtitle dimmed after it.

use crate::ui::helpers::{display_width, pad, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

const SUBTITLE_SEPARATOR: &str = " · ";

/// Renders the header title bar at the specified row.
///
/// Title and subtitle are centered together on one line and the line is
/// padded to the full width so `header_bg` fills it.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate_chars(&header.title, cols);
    let subtitle = header.subtitle.as_deref().map(|sub| {
        let room = cols.saturating_sub(display_width(&title) + display_width(SUBTITLE_SEPARATOR));
        truncate_chars(sub, room)
    });

    let content_len = display_width(&title)
        + subtitle
            .as_ref()
            .filter(|s| !s.is_empty())
            .map_or(0, |s| display_width(SUBTITLE_SEPARATOR) + display_width(s));
    let padding = cols.saturating_sub(content_len) / 2;

    position_cursor(row, 1);
    let base = match &theme.colors.header_bg {
        Some(bg) => Theme::bg(bg),
        None => String::new(),
    };
    print!("{base}");
    pad(padding);

    print!("{}{}{title}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("{}{base}", Theme::reset());

    if let Some(sub) = subtitle.filter(|s| !s.is_empty()) {
        print!("{}{SUBTITLE_SEPARATOR}{sub}", Theme::fg(&theme.colors.unread_fg));
    }

    pad(cols.saturating_sub(padding + content_len));
    print!("{}", Theme::reset());
    row + 1
}
