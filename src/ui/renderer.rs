//! Top-level rendering coordinator.
//!
//! Computes the view model from application state and hands it to the
//! component layout.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// # Output
///
/// Prints ANSI-styled output with absolute cursor positioning. Does not clear
/// the screen; the host redraws the pane before each call.
///
/// # Example
///
/// ```
/// use neonfeed::app::AppState;
/// use neonfeed::dataset::Dataset;
/// use neonfeed::ui::{render, Theme};
///
/// let state = AppState::new(Dataset::builtin().unwrap(), Theme::default());
/// render(&state, 24, 80);
/// ```
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
