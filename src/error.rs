//! Unified error types for chatpress.
//!
//! This module provides a single [`ChatpressError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! The segmenter itself never fails: malformed input degrades to fewer (or
//! zero) extracted records. Errors come only from the collaborators around
//! it — file loading and the external document-rendering backend — and are
//! surfaced to the caller unchanged, with no retry logic anywhere.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatpress operations.
///
/// # Example
///
/// ```rust
/// use chatpress::error::Result;
///
/// fn my_function() -> Result<String> {
///     // ... operations that may fail
///     Ok(String::new())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatpressError>;

/// The error type for all chatpress operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatpressError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input transcript file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Transcript content is not valid UTF-8.
    ///
    /// The whole file is read into memory before parsing; decoding happens
    /// once, up front, and a failure aborts before any output is produced.
    #[error("UTF-8 encoding error{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Utf8 {
        /// The file path, if available
        path: Option<PathBuf>,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The external document-rendering backend failed.
    ///
    /// Backend errors propagate unchanged; the core does not wrap, retry,
    /// or suppress them. A failed document conversion leaves any
    /// already-written markdown file intact.
    #[error("Document rendering failed ({backend}): {source}")]
    Render {
        /// Name of the backend that failed (e.g. "weasyprint", "chromium")
        backend: &'static str,
        /// The backend's own error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<std::string::FromUtf8Error> for ChatpressError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatpressError::Utf8 {
            path: None,
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatpressError {
    /// Creates a UTF-8 decoding error carrying the offending file path.
    pub fn utf8(path: impl Into<PathBuf>, source: std::string::FromUtf8Error) -> Self {
        ChatpressError::Utf8 {
            path: Some(path.into()),
            source,
        }
    }

    /// Creates a rendering-backend error.
    pub fn render(
        backend: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ChatpressError::Render {
            backend,
            source: source.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatpressError::Io(_))
    }

    /// Returns `true` if this is a UTF-8 decoding error.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ChatpressError::Utf8 { .. })
    }

    /// Returns `true` if this is a rendering-backend error.
    pub fn is_render(&self) -> bool {
        matches!(self, ChatpressError::Render { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
