//! Error types for tfconverter-options.
//!
//! Building and applying converter options never fails. Errors only come
//! from the configuration layer, when a config file is missing, unreadable,
//! or malformed.
//!
//! # Example
//!
//! ```rust
//! use tfconverter_options::error::{ConverterOptionsError, Result};
//!
//! fn read_config(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .map_err(|e| ConverterOptionsError::io(path, e, file!(), line!()))
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Macro to create errors with automatic source location tracking.
///
/// Usage:
/// ```ignore
/// return Err(err!(FileNotFound { path: path.to_path_buf() }));
/// ```
#[macro_export]
macro_rules! err {
    ($variant:ident { $($field:ident: $value:expr),* $(,)? }) => {
        $crate::error::ConverterOptionsError::$variant {
            $($field: $value,)*
            src_path: file!(),
            src_line: line!(),
        }
    };
}

/// A specialized Result type for tfconverter-options operations.
pub type Result<T> = std::result::Result<T, ConverterOptionsError>;

/// The main error type for tfconverter-options.
#[derive(Error, Debug)]
pub enum ConverterOptionsError {
    // =========================================================================
    // I/O and File System Errors
    // =========================================================================
    /// I/O error with path context.
    #[error("I/O error at '{path}' ({src_path}:{src_line}): {source}")]
    Io {
        /// The path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// File not found.
    #[error("File not found: {path} ({src_path}:{src_line})")]
    FileNotFound {
        /// The missing file path
        path: PathBuf,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration parsing error.
    #[error("Failed to parse configuration ({src_path}:{src_line}): {message}")]
    ConfigParse {
        /// Error message
        message: String,
        /// The underlying error (if any)
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// The config file extension is not one we know how to read.
    #[error("Unsupported configuration format for '{path}' ({src_path}:{src_line}): expected .yaml, .yml or .hcl")]
    UnsupportedConfigFormat {
        /// The offending config path
        path: PathBuf,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },
}

impl ConverterOptionsError {
    /// Creates an `Io` error.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error, src_path: &'static str, src_line: u32) -> Self {
        Self::Io { path: path.into(), source, src_path, src_line }
    }

    /// Creates a `ConfigParse` error.
    #[must_use]
    pub fn config_parse(message: String, source: Option<Box<dyn std::error::Error + Send + Sync>>, src_path: &'static str, src_line: u32) -> Self {
        Self::ConfigParse { message, source, src_path, src_line }
    }

    /// Returns the appropriate exit code for the error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::PermissionDenied => 13,
            Self::FileNotFound { .. } => 14,
            Self::ConfigParse { .. } => 18,
            Self::UnsupportedConfigFormat { .. } => 19,
            Self::Io { .. } => 1,
        }
    }
}

/// Extension trait for `Result` to add context to errors.
pub trait ResultExt<T, E> {
    /// Adds a file path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;

    /// Converts a general error into a `ConfigParse` error with context.
    fn to_config_parse_error(self, message: String) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| {
            let source = *e
                .into()
                .downcast::<std::io::Error>()
                .unwrap_or_else(|e| Box::new(std::io::Error::other(e)));
            ConverterOptionsError::io(path, source, file!(), line!())
        })
    }

    fn to_config_parse_error(self, message: String) -> Result<T> {
        self.map_err(|e| ConverterOptionsError::config_parse(message, Some(e.into()), file!(), line!()))
    }
}
