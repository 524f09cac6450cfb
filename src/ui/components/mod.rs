//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at a given row and returns the
//! next free row, so [`render_layout`] can stack them top to bottom.
//!
//! # Components
//!
//! - `header`: Title bar with unread subtitle
//! - `nav`: The six primary tabs with badges
//! - `search`: Bordered input box (search, filter, comment)
//! - `tabs`: Sub-tabs and notification filters
//! - `banner`: Context lines above the list
//! - `list`: Two-line rows with markers and highlights
//! - `empty`: Empty state message
//! - `overlay`: Modal menu
//! - `footer`: Keybinding hints

mod banner;
mod empty;
mod footer;
mod header;
mod list;
mod nav;
mod overlay;
mod search;
mod tabs;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use banner::render_banner;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::render_list;
use nav::render_nav;
use overlay::render_overlay;
use search::render_search_bar;
use tabs::render_tabs;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full frame.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Nav]
/// [Border]
/// [Input box - 3 lines, optional]
/// [Tabs, optional]
/// [Banner lines]
/// [List rows or empty state]
/// [Border]
/// [Footer]
/// ```
///
/// The overlay, when present, is drawn last over the list area.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_nav(current_row, &vm.nav, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    if let Some(tabs) = &vm.tabs {
        current_row = render_tabs(current_row, tabs, theme, cols);
    }
    current_row = render_banner(current_row, &vm.banner, theme, cols);
    let list_top = current_row;

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        render_list(current_row, &vm.display_items, theme, cols);
    }

    let footer_row = rows.max(list_top + 2);
    render_border(footer_row - 1, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(overlay) = &vm.overlay {
        render_overlay(list_top, overlay, theme, cols);
    }
}
