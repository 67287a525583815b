//! # MVVM Architecture Implementation
//!
//! The ingredient form split into the usual layers: commands translate keys,
//! the view model owns text and request state, services talk to the
//! completion endpoint and views paint the terminal.

pub mod commands;
pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod text;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::AppController;
pub use events::{Region, ViewEvent};
pub use view_models::ViewModel;
pub use views::{TerminalRenderer, ViewRenderer};

// Re-export specific items from commands to avoid conflicts
pub use commands::{Command, CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot};

pub use models::{AnalysisResult, RequestState, UserFacingError, EXAMPLES};
pub use services::{AnalysisError, AnalysisService, CompletionClient};
