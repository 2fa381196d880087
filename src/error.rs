use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the command layer and the settings store.
///
/// User-facing situations (empty search term, unconfigured site, invalid
/// site URL) are not errors; they are reported through command outcomes.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No command is registered under the requested id
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Command parameters could not be deserialized
    #[error("Invalid parameters for '{command}': {reason}")]
    InvalidParams { command: String, reason: String },

    /// Settings file could not be read or parsed
    #[error("Failed to read settings from {path}: {reason}")]
    SettingsRead { path: PathBuf, reason: String },

    /// Settings file could not be written
    #[error("Failed to write settings to {path}: {reason}")]
    SettingsWrite { path: PathBuf, reason: String },

    /// Setting key is not of the form `section.name`
    #[error("Invalid setting key: {0}")]
    InvalidSettingKey(String),

    /// Write requested for a scope the store does not have
    #[error("No settings file configured for {0} scope")]
    ScopeUnavailable(String),

    /// Editor state supplied to the host was unusable
    #[error("Invalid editor input: {0}")]
    InvalidEditorInput(String),

    /// Terminal I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SearchError>;
