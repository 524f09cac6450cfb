//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (`main.rs`) and the domain, dataset and
//! engagement layers. Data flows one way:
//!
//! ```text
//! Key → Event → handle_event → AppState / EngagementStore → Actions
//!                                     ↓
//!                            compute_viewmodel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the event handler
//! - [`filters`]: Substring filters and fuzzy highlight ranges
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: View, tab and input mode types
//! - [`state`]: Central application state container
//! - `view`: View model computation for [`AppState`]

pub mod actions;
pub mod filters;
pub mod handler;
pub mod modes;
pub mod state;
mod view;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, NavTab, View};
pub use state::{AppState, RowTarget};
