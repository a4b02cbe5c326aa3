//! Error types for dxver operations.
//!
//! This module defines [`DxverError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DxverError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DxverError::Other`) for unexpected errors
//! - A failing version-extraction command is NOT an error: its captured
//!   output (possibly empty) is recorded as the version string

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dxver operations.
#[derive(Debug, Error)]
pub enum DxverError {
    /// Job descriptor file could not be read.
    #[error("Failed to read descriptor {path}: {source}")]
    DescriptorRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Job descriptor file is not valid JSON.
    #[error("Failed to parse descriptor {path}: {message}")]
    DescriptorParse { path: PathBuf, message: String },

    /// Job descriptor lacks a usable "name" field.
    #[error("Descriptor {path} has no applet name")]
    DescriptorMissingName { path: PathBuf },

    /// Applet name not present in the applet or virtual-applet tables.
    #[error("Unknown applet: {name}")]
    UnknownApplet { name: String },

    /// Tool identifier has no version-extraction command in the catalog.
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// The shell itself could not be spawned for a version command.
    #[error("Failed to spawn shell for '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Report serialization failed.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for dxver operations.
pub type Result<T> = std::result::Result<T, DxverError>;
