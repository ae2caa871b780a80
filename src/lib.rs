//! # Chatpress
//!
//! A Rust library for extracting timestamped messages from exported chat
//! transcripts, grouping them by calendar date, and pressing the result
//! into Markdown, paginated documents, or a console dump.
//!
//! ## Overview
//!
//! Chatpress understands the bracketed-timestamp transcript convention used
//! by WhatsApp-style text exports:
//!
//! ```text
//! [09:00, 01/01/2024] Alice: message text,
//! possibly spanning several lines
//! [09:05, 01/01/2024] Bob: reply
//! ```
//!
//! The pipeline is a single pass: raw text goes through the
//! [`Segmenter`](segmenter::Segmenter), which produces an order-preserving
//! [`ParsedTranscript`](transcript::ParsedTranscript) grouped by date, and
//! the [`render`] module turns that read-only structure into its output
//! forms. No streaming, no concurrency, no hidden state.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatpress::prelude::*;
//!
//! let mut segmenter = Segmenter::new();
//! let parsed = segmenter.parse(
//!     "[09:00, 01/01/2024] Alice: hello\n[09:05, 01/01/2024] Bob: hi",
//! );
//!
//! let markdown = to_markdown(parsed);
//! assert!(markdown.starts_with("## 01/01/2024"));
//! ```
//!
//! ## Paginated documents
//!
//! Turning HTML into paginated bytes is delegated to a
//! [`DocumentRenderer`](render::DocumentRenderer) supplied by the embedding
//! application; chatpress builds the HTML and trusts the backend as a black
//! box:
//!
//! ```rust,no_run
//! use chatpress::prelude::*;
//! # struct MyBackend;
//! # impl DocumentRenderer for MyBackend {
//! #     fn name(&self) -> &'static str { "my-backend" }
//! #     fn render(&self, html: &str) -> chatpress::error::Result<Vec<u8>> {
//! #         Ok(html.as_bytes().to_vec())
//! #     }
//! # }
//!
//! let mut segmenter = Segmenter::new();
//! let parsed = segmenter.parse_file("whatsapp_chat.txt")?;
//!
//! write_markdown(parsed, "chat.md")?;
//! export_document(parsed, "chat.pdf", Some("Family chat"), &MyBackend)?;
//! # Ok::<(), chatpress::ChatpressError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`segmenter`] — marker scanning and date grouping
//!   - [`Segmenter`](segmenter::Segmenter), [`segment`](segmenter::segment)
//! - [`transcript`] — the parsed data model
//!   - [`Record`](transcript::Record), [`DateGroup`](transcript::DateGroup),
//!     [`ParsedTranscript`](transcript::ParsedTranscript)
//! - [`render`] — Markdown, HTML/document, and console projections
//! - [`error`] — unified error types ([`ChatpressError`], [`Result`])
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod render;
pub mod segmenter;
pub mod transcript;

// Re-export the main types at the crate root for convenience
pub use error::{ChatpressError, Result};
pub use segmenter::Segmenter;
pub use transcript::ParsedTranscript;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatpress::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{ChatpressError, Result};

    // Segmentation
    pub use crate::segmenter::{Segmenter, segment};

    // Data model
    pub use crate::transcript::{DateGroup, ParsedTranscript, Record};

    // Renderers
    pub use crate::render::{
        DocumentRenderer, export_document, pretty_print, to_html, to_markdown, write_markdown,
        write_pretty,
    };
}
