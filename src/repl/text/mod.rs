//! # Text Utilities

pub mod wrap;

pub use wrap::{char_width, str_width, wrap_input, wrap_words, WrappedInput};
