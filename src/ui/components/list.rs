//! List component renderer.
//!
//! Each [`DisplayItem`] takes two lines: markers, title and right-aligned
//! metadata on the first; the indented detail on the second.

use crate::ui::helpers::{self, display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, Marker};

/// Renders all list rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + 2 per item)
pub fn render_list(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current_row, item| render_item(current_row, item, theme, cols))
}

/// Color of a marker glyph on an unselected row.
fn marker_color<'a>(marker: Marker, theme: &'a Theme) -> &'a str {
    match marker {
        Marker::Liked => &theme.colors.like_fg,
        Marker::Saved | Marker::Following | Marker::On => &theme.colors.saved_fg,
        Marker::Unread | Marker::FollowRequest => &theme.colors.unread_fg,
        Marker::Online => &theme.colors.online_fg,
        Marker::Sensitive => &theme.colors.warning_fg,
        Marker::Category(_) => &theme.colors.accent,
        Marker::Off | Marker::Link => &theme.colors.text_dim,
    }
}

/// Renders one item.
///
/// # Styling Precedence
///
/// 1. Selection colors across both lines (if `is_selected`)
/// 2. Accent title (if `is_emphasized`)
/// 3. Normal text color
///
/// Match highlights are drawn over the title in every case.
fn render_item(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let base = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else if item.is_emphasized {
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(row, 1);
    print!("{base}");
    let pointer = if item.is_selected { "▌ " } else { "  " };
    print!("{pointer}");
    let mut used = display_width(pointer);

    for marker in &item.markers {
        let glyph = marker.glyph();
        if !item.is_selected {
            print!("{}", Theme::fg(marker_color(*marker, theme)));
        }
        print!("{glyph} {base}");
        used += display_width(glyph) + 1;
    }

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, &base);
    used += display_width(&item.title);

    let meta_len = display_width(&item.meta);
    pad(cols.saturating_sub(used + meta_len + 1));
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{} {}", item.meta, Theme::reset());

    position_cursor(row + 1, 1);
    if item.is_selected {
        print!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("    {}", item.detail);
    pad(cols.saturating_sub(display_width(&item.detail) + 4));
    print!("{}", Theme::reset());

    row + 2
}
