//! # labelwise - Ingredient Analysis in the Terminal
//!
//! Paste an ingredient list, press Enter and read a plain-language summary
//! produced by an LLM completion endpoint.
//!
//! ## Architecture
//!
//! This application follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐    Events    ┌──────────────┐    Updates   ┌──────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│  Models  │
//! │             │              │              │              │          │
//! │ - Terminal  │              │ - Request    │              │ - Text   │
//! │ - Rendering │              │   lifecycle  │              │ - State  │
//! └─────────────┘              └──────────────┘              └──────────┘
//!                                  ▲       │ tickets
//!                         Commands │       ▼
//!                           ┌──────────────┐   spawn   ┌──────────────────┐
//!                           │  Controller  │──────────▶│ AnalysisService  │
//!                           │ - Event Loop │◀──────────│ (reqwest, tokio) │
//!                           └──────────────┘ completion└──────────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod repl;

// Re-export main types for easy access
pub use repl::*;
