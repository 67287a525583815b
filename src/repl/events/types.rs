//! # Core Event Types

/// Screen regions that can be redrawn independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Ingredient text input, including the action row beneath it
    Input,
    /// Analysis result, loading indicator or error message
    Result,
}

impl Region {
    pub fn all() -> [Region; 2] {
        [Region::Input, Region::Result]
    }
}
