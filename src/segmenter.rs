//! Transcript segmenter.
//!
//! Splits a flat transcript export into discrete `(time, author, body)`
//! records and groups them by calendar date. The expected convention is
//! bracketed timestamps:
//!
//! ```text
//! [09:00, 01/01/2024] Alice: first line
//! second line of the same message
//! [09:05, 01/01/2024] Bob: reply
//! ```
//!
//! # Matching policy
//!
//! A single compiled pattern locates every `[HH:MM, DD/MM/YYYY]` marker in
//! one left-to-right pass. Message boundaries fall out of the marker
//! positions alone: each body is the slice between its header and the start
//! of the next marker (or end of input), so multi-line bodies are a
//! first-class case and no backtracking over body text ever happens. The
//! author field is the run of non-colon characters after the bracket, ended
//! by the first colon; colons inside the body can never be mistaken for the
//! separator. Every marker contains a colon in its `HH:MM` time, so the
//! author run also can never swallow a following marker.
//!
//! Malformed brackets (wrong digit counts, missing comma) simply do not
//! match. Unmatched spans are dropped from the output; there is no heuristic
//! recovery and they are never appended to a neighboring message.
//!
//! # Example
//!
//! ```
//! use chatpress::segmenter::Segmenter;
//!
//! let mut segmenter = Segmenter::new();
//! let parsed = segmenter.parse("[09:00, 01/01/2024] Alice: hello");
//!
//! assert_eq!(parsed.total_records(), 1);
//! assert_eq!(parsed.get("01/01/2024").unwrap().records()[0].time(), "09:00");
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ChatpressError, Result};
use crate::transcript::{ParsedTranscript, Record};

/// The bracketed timestamp marker delimiting message boundaries.
///
/// Exactly two digits for hours, minutes, day and month, four for the year,
/// with the literal `, ` separator. Anything else is not a marker.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(\d{2}:\d{2}), (\d{2}/\d{2}/\d{4})\]").expect("marker pattern compiles")
});

/// Segments raw transcript text into date-grouped records.
///
/// The segmenter owns the [`ParsedTranscript`] it produces; renderers borrow
/// it read-only. A fresh [`parse`](Segmenter::parse) call fully replaces any
/// prior parsed state on the same instance.
///
/// # Example
///
/// ```no_run
/// use chatpress::segmenter::Segmenter;
///
/// let mut segmenter = Segmenter::new();
/// let parsed = segmenter.parse_file("whatsapp_chat.txt")?;
/// println!("{} dates, {} messages", parsed.len(), parsed.total_records());
/// # Ok::<(), chatpress::ChatpressError>(())
/// ```
#[derive(Debug, Default)]
pub struct Segmenter {
    parsed: ParsedTranscript,
}

/// One located marker: captured fields plus byte offsets into the source.
struct Marker<'a> {
    time: &'a str,
    date: &'a str,
    /// Byte offset of the `[` opening the marker.
    start: usize,
    /// Byte offset just past the closing `]`.
    end: usize,
}

impl Segmenter {
    /// Creates a segmenter with no parsed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses raw transcript text, replacing any previously parsed state.
    ///
    /// Never fails: input with zero valid markers yields an empty transcript,
    /// and malformed spans degrade to fewer extracted records.
    pub fn parse(&mut self, raw: &str) -> &ParsedTranscript {
        self.parsed = segment(raw);
        &self.parsed
    }

    /// Reads a transcript file fully into memory and parses it.
    ///
    /// The file handle is released before parsing begins, on every exit
    /// path. Fails only on I/O errors or non-UTF-8 content; the segmentation
    /// itself cannot fail.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<&ParsedTranscript> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|e| ChatpressError::utf8(path, e))?;
        Ok(self.parse(&text))
    }

    /// Returns the most recently parsed transcript.
    ///
    /// Empty until the first [`parse`](Segmenter::parse) call.
    pub fn transcript(&self) -> &ParsedTranscript {
        &self.parsed
    }
}

/// Stateless segmentation of one input text.
///
/// Two-phase scan: locate all markers, then slice each body between its
/// header and the next marker start (or end of input).
pub fn segment(raw: &str) -> ParsedTranscript {
    let markers: Vec<Marker<'_>> = MARKER
        .captures_iter(raw)
        .map(|caps| {
            let whole = caps.get(0).expect("group 0 always present");
            Marker {
                time: caps.get(1).map_or("", |m| m.as_str()),
                date: caps.get(2).map_or("", |m| m.as_str()),
                start: whole.start(),
                end: whole.end(),
            }
        })
        .collect();

    let mut parsed = ParsedTranscript::new();

    for (i, marker) in markers.iter().enumerate() {
        let segment_end = markers.get(i + 1).map_or(raw.len(), |next| next.start);
        let tail = &raw[marker.end..segment_end];

        // Author is the non-empty run of non-colon characters before the
        // first colon. No colon in the segment, or a colon with nothing
        // before it, means no author separator: the marker is dropped.
        let Some(colon) = tail.find(':') else {
            continue;
        };
        if colon == 0 {
            continue;
        }

        let body = tail[colon + 1..].trim();
        parsed.push(marker.date, Record::new(marker.time, body));
    }

    parsed
}
