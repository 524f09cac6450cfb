//! Banner renderer for the context lines drawn above the list.

use crate::ui::helpers::{display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BannerLine, BannerStyle};

/// Renders each banner line on its own row, styled by [`BannerStyle`].
///
/// # Returns
///
/// The next available row position (row + number of lines)
pub fn render_banner(row: usize, lines: &[BannerLine], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;

    for line in lines {
        position_cursor(current_row, 1);
        match line.style {
            BannerStyle::Plain => print!("{}", Theme::fg(&theme.colors.text_normal)),
            BannerStyle::Accent => print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent)),
            BannerStyle::Muted => print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
            BannerStyle::Success => print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.online_fg)),
            BannerStyle::Warning => print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.warning_fg)),
        }
        print!(" {}", line.text);
        pad(cols.saturating_sub(display_width(&line.text) + 1));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
