//! # Models Module
//!
//! Plain data for the analyzer view: the ingredient text, the request
//! lifecycle and the built-in examples.

pub mod analysis_state;
pub mod examples;
pub mod ingredient_model;

pub use analysis_state::{AnalysisResult, RequestState, UserFacingError, SEGMENT_SEPARATOR};
pub use examples::{example, ExampleEntry, EXAMPLES};
pub use ingredient_model::IngredientModel;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_models_should_create_with_defaults() {
        let ingredients = IngredientModel::new();
        let state = RequestState::default();

        assert_eq!(ingredients.text(), "");
        assert_eq!(state, RequestState::Idle);
    }
}
