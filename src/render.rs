//! Renderers for parsed transcripts.
//!
//! Three projections of one [`ParsedTranscript`], all pure over their input:
//!
//! - [`to_markdown`] / [`write_markdown`] — structured Markdown text
//! - [`to_html`] / [`export_document`] — HTML wrapper fed to an external
//!   [`DocumentRenderer`] backend for paginated output
//! - [`write_pretty`] / [`pretty_print`] — human-readable console dump
//!
//! The Markdown layout puts one `##` section per date in first-seen order,
//! a `- **HH:MM**` line per record, and every body line indented two spaces
//! so multi-line messages stay visually attached to their timestamp:
//!
//! ```text
//! ## 01/01/2024
//! - **09:00**
//!   line1
//!   line2
//! - **09:05**
//!   next
//! ```
//!
//! Document export is a capability boundary: the Markdown→HTML conversion
//! happens here (via `pulldown-cmark`), but turning HTML into paginated
//! bytes is the job of a [`DocumentRenderer`] supplied by the surrounding
//! application. The core trusts it as a black box and propagates its
//! failures unchanged.

use std::fs;
use std::io::Write;
use std::path::Path;

use pulldown_cmark::{Parser, html};

use crate::error::Result;
use crate::transcript::ParsedTranscript;

/// External HTML-to-paginated-document backend.
///
/// Implementations wrap whatever engine the application ships — a headless
/// browser, a print pipeline, a remote service. The core never implements
/// one itself.
///
/// # Example
///
/// ```
/// use chatpress::render::DocumentRenderer;
/// use chatpress::error::Result;
///
/// /// Backend that archives the HTML bytes as-is (e.g. for testing).
/// struct PassthroughRenderer;
///
/// impl DocumentRenderer for PassthroughRenderer {
///     fn name(&self) -> &'static str {
///         "passthrough"
///     }
///
///     fn render(&self, html: &str) -> Result<Vec<u8>> {
///         Ok(html.as_bytes().to_vec())
///     }
/// }
/// ```
pub trait DocumentRenderer {
    /// Human-readable backend name, used in error messages.
    fn name(&self) -> &'static str;

    /// Renders an HTML document into paginated output bytes.
    fn render(&self, html: &str) -> Result<Vec<u8>>;
}

/// Renders the transcript as structured Markdown.
///
/// Returns an empty string for an empty transcript. Pure function of its
/// input: calling it twice yields identical output.
pub fn to_markdown(parsed: &ParsedTranscript) -> String {
    if parsed.is_empty() {
        return String::new();
    }

    let mut lines: Vec<String> = Vec::new();
    for group in parsed {
        lines.push(format!("## {}", group.date()));
        for record in group.records() {
            lines.push(format!("- **{}**", record.time()));
            // An empty body contributes no lines; the time marker stands
            // alone, it is not omitted.
            for line in record.body().lines() {
                lines.push(format!("  {line}"));
            }
        }
        // Blank separator closing each date section.
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Writes the Markdown rendering to a UTF-8 file, verbatim.
pub fn write_markdown(parsed: &ParsedTranscript, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, to_markdown(parsed))?;
    Ok(())
}

/// Converts the transcript to a full HTML document.
///
/// The Markdown rendering goes through `pulldown-cmark`; an optional title
/// is embedded in the document head.
pub fn to_html(parsed: &ParsedTranscript, title: Option<&str>) -> String {
    let markdown = to_markdown(parsed);

    let mut body = String::new();
    html::push_html(&mut body, Parser::new(&markdown));

    let mut page = String::from("<html><head>");
    if let Some(title) = title {
        page.push_str(&format!("<title>{title}</title>"));
    }
    page.push_str("</head><body>");
    page.push_str(&body);
    page.push_str("</body></html>");
    page
}

/// Exports the transcript as a paginated document file.
///
/// Builds the HTML wrapper and hands it to the backend; the resulting bytes
/// are written to `path`. Backend failures surface unchanged, before the
/// output file is touched.
pub fn export_document(
    parsed: &ParsedTranscript,
    path: impl AsRef<Path>,
    title: Option<&str>,
    renderer: &dyn DocumentRenderer,
) -> Result<()> {
    let html = to_html(parsed, title);
    let bytes = renderer.render(&html)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Writes the grouped transcript to an output sink in console form.
///
/// ```text
/// === 01/01/2024 ===
/// [09:00]
/// hello
///
/// ```
///
/// An empty transcript prints a single "no messages" notice instead.
pub fn write_pretty(parsed: &ParsedTranscript, out: &mut impl Write) -> Result<()> {
    if parsed.is_empty() {
        writeln!(out, "No messages to display.")?;
        return Ok(());
    }

    for group in parsed {
        writeln!(out, "=== {} ===", group.date())?;
        for record in group.records() {
            writeln!(out, "[{}]", record.time())?;
            writeln!(out, "{}\n", record.body())?;
        }
    }
    Ok(())
}

/// Convenience wrapper printing the console projection to stdout.
pub fn pretty_print(parsed: &ParsedTranscript) -> Result<()> {
    write_pretty(parsed, &mut std::io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::Record;

    fn sample() -> ParsedTranscript {
        let mut parsed = ParsedTranscript::new();
        parsed.push("01/01/2024", Record::new("09:00", "line1\nline2"));
        parsed.push("01/01/2024", Record::new("09:05", "next"));
        parsed.push("02/01/2024", Record::new("10:00", ""));
        parsed
    }

    struct PassthroughRenderer;

    impl DocumentRenderer for PassthroughRenderer {
        fn name(&self) -> &'static str {
            "passthrough"
        }

        fn render(&self, html: &str) -> Result<Vec<u8>> {
            Ok(html.as_bytes().to_vec())
        }
    }

    struct FailingRenderer;

    impl DocumentRenderer for FailingRenderer {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn render(&self, _html: &str) -> Result<Vec<u8>> {
            Err(crate::ChatpressError::render(
                self.name(),
                std::io::Error::other("backend exploded"),
            ))
        }
    }

    #[test]
    fn test_markdown_empty_transcript() {
        assert_eq!(to_markdown(&ParsedTranscript::new()), "");
    }

    #[test]
    fn test_markdown_layout() {
        let md = to_markdown(&sample());
        let expected = "\
## 01/01/2024
- **09:00**
  line1
  line2
- **09:05**
  next

## 02/01/2024
- **10:00**
";
        assert_eq!(md, expected);
    }

    #[test]
    fn test_markdown_idempotent() {
        let parsed = sample();
        assert_eq!(to_markdown(&parsed), to_markdown(&parsed));
    }

    #[test]
    fn test_markdown_roundtrip_counts() {
        let parsed = sample();
        let md = to_markdown(&parsed);

        let headers = md.lines().filter(|l| l.starts_with("## ")).count();
        let times = md.lines().filter(|l| l.starts_with("- **")).count();
        assert_eq!(headers, parsed.len());
        assert_eq!(times, parsed.total_records());
    }

    #[test]
    fn test_write_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.md");

        write_markdown(&sample(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_markdown(&sample()));
    }

    #[test]
    fn test_html_wrapping_and_title() {
        let html = to_html(&sample(), Some("My Chat"));
        assert!(html.starts_with("<html><head><title>My Chat</title></head><body>"));
        assert!(html.ends_with("</body></html>"));
        assert!(html.contains("<h2>01/01/2024</h2>"));
        assert!(html.contains("<strong>09:00</strong>"));

        let untitled = to_html(&sample(), None);
        assert!(untitled.starts_with("<html><head></head><body>"));
        assert!(!untitled.contains("<title>"));
    }

    #[test]
    fn test_html_empty_transcript() {
        let html = to_html(&ParsedTranscript::new(), None);
        assert_eq!(html, "<html><head></head><body></body></html>");
    }

    #[test]
    fn test_export_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.pdf");

        export_document(&sample(), &path, Some("T"), &PassthroughRenderer).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, to_html(&sample(), Some("T")).into_bytes());
    }

    #[test]
    fn test_export_document_backend_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.pdf");

        let err = export_document(&sample(), &path, None, &FailingRenderer).unwrap_err();
        assert!(err.is_render());
        assert!(err.to_string().contains("failing"));
        // Nothing was written.
        assert!(!path.exists());
    }

    #[test]
    fn test_pretty_output() {
        let mut out = Vec::new();
        write_pretty(&sample(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = "\
=== 01/01/2024 ===
[09:00]
line1
line2

[09:05]
next

=== 02/01/2024 ===
[10:00]


";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_pretty_empty_notice() {
        let mut out = Vec::new();
        write_pretty(&ParsedTranscript::new(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No messages to display.\n");
    }
}
