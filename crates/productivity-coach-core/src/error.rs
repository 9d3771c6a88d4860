//! Core error types for productivity-coach-core.
//!
//! Every failure in this crate is recoverable: the caller retries with
//! corrected input (for example after earning more coins). Precondition
//! violations such as stopping an empty session are silent no-ops and never
//! surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for productivity-coach-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Shop purchase / equip errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Quiz interaction errors
    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Team roster errors
    #[error("Team error: {0}")]
    Team(#[from] TeamError),
}

/// Catalog-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Item '{0}' is already owned")]
    AlreadyOwned(String),

    #[error("Insufficient funds for '{item}': price {price}, balance {balance}")]
    InsufficientFunds {
        item: String,
        price: u64,
        balance: u64,
    },

    #[error("Item '{0}' is not owned")]
    NotOwned(String),
}

/// Quiz-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// Answer index outside the current question's options
    #[error("Answer {answer} out of range for question {question} ({options} options)")]
    InvalidAnswer {
        question: usize,
        answer: usize,
        options: usize,
    },

    /// The attempt already produced its outcome
    #[error("Quiz already finished")]
    Finished,
}

/// Team-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    #[error("No member with id '{0}'")]
    UnknownMember(String),

    #[error("Invalid invite base url '{url}': {message}")]
    InvalidInviteUrl { url: String, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Dot-path key not present in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Config directory could not be resolved or created
    #[error("Configuration directory unavailable: {0}")]
    DataDir(#[from] std::io::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
