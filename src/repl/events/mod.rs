//! # Events Module
//!
//! Event types shared between the view model, the controller and the renderer.

pub mod types;
pub mod view_events;

pub use types::Region;
pub use view_events::ViewEvent;
