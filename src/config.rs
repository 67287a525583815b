//! Configuration constants and utilities for labelwise
//!
//! The analyzer configuration is resolved once at startup from command line
//! arguments, the environment and an optional `.env` file, then shared
//! read-only with the request builder.

use crate::cmd_args::CommandLineArgs;
use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;

/// Default completion endpoint (Anthropic Messages API)
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";

/// Model identifier used when none is configured
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Value of the service-version header
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Output token budget for a single analysis
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Environment variables consulted for the API key, in order
pub const API_KEY_ENV_VARS: [&str; 2] = ["LABELWISE_API_KEY", "ANTHROPIC_API_KEY"];

/// Default log file path for labelwise
pub const DEFAULT_LOG_PATH: &str = "~/.labelwise/labelwise.log";

/// Environment variable name for overriding the log file path
pub const LOG_PATH_ENV_VAR: &str = "LABELWISE_LOG_PATH";

/// Environment variable holding the tracing filter directive
pub const LOG_FILTER_ENV_VAR: &str = "LABELWISE_LOG";

/// Settings for talking to the completion service.
///
/// Built once and never mutated afterwards; clones share nothing mutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub api_version: String,
    pub model: String,
    pub max_tokens: u32,
}

impl AnalyzerConfig {
    /// Configuration with built-in defaults for everything but the endpoint and key
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key,
            api_version: DEFAULT_API_VERSION.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Resolve configuration from command line arguments and the process environment.
    ///
    /// Clap already folds `LABELWISE_ENDPOINT` and `LABELWISE_MODEL` into the
    /// arguments, so only the API key is read from the environment here.
    pub fn from_args(cmd_args: &CommandLineArgs) -> Self {
        let endpoint = cmd_args.endpoint().unwrap_or(DEFAULT_ENDPOINT);
        let config = Self::new(endpoint, get_api_key());
        match cmd_args.model() {
            Some(model) => config.with_model(model),
            None => config,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// First non-empty API key found in [`API_KEY_ENV_VARS`]
pub fn get_api_key() -> Option<String> {
    API_KEY_ENV_VARS.iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

/// Get the log file path, checking environment variable first, then falling back to default
pub fn get_log_path() -> String {
    std::env::var_os(LOG_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_LOG_PATH.to_string())
}

/// Open the log file for appending, expanding `~` and creating parent directories
pub fn open_log_file(path: &str) -> Result<File> {
    let expanded = PathBuf::from(shellexpand::tilde(path).into_owned());
    if let Some(parent) = expanded.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&expanded)
        .with_context(|| format!("opening log file {}", expanded.display()))
}
