//! # ViewModel Module
//!
//! The ViewModel is split into focused `impl` blocks: core state, text editing,
//! the analysis lifecycle and display preparation.

mod analysis_manager;
mod buffer_operations;
mod core;
mod display_manager;

pub use self::core::ViewModel;
pub use display_manager::{
    DisplayLine, InputView, LineStyle, ScreenLayout, ANALYZE_LABEL, ANALYZING_LABEL, BANNER,
    DISCLAIMER, EMPTY_RESULT_MESSAGE, IDLE_HINT, INPUT_LABEL, INPUT_PLACEHOLDER, LOADING_MESSAGE,
    RESULT_LABEL, TITLE,
};
