//! Session-local engagement state.
//!
//! - [`kind`]: [`EntityKind`] tags naming the four membership sets
//! - [`store`]: [`EngagementStore`], the toggle/query surface every view uses

pub mod kind;
pub mod store;

pub use kind::EntityKind;
pub use store::EngagementStore;
