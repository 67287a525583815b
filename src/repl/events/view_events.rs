//! # View Events
//!
//! Emitted by the view model when something on screen is stale. The controller
//! collects them after each batch of commands and picks the cheapest redraw.

use super::types::Region;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Full screen redraw required (terminal resize, first paint)
    FullRedrawRequired,

    /// One region needs redrawing
    RegionRedrawRequired { region: Region },

    /// Status bar needs updating
    StatusBarUpdateRequired,

    /// Only cursor position needs updating (cheapest)
    CursorUpdateRequired,
}
