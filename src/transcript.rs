//! Data model for parsed transcripts.
//!
//! This module provides the three types produced by the segmenter:
//!
//! - [`Record`] — one `(time, body)` message occurrence
//! - [`DateGroup`] — the ordered list of records sharing one date key
//! - [`ParsedTranscript`] — the full ordered mapping from date keys to groups
//!
//! # Ordering
//!
//! Insertion order is semantically meaningful everywhere: date keys iterate
//! in first-seen order and records iterate in source-appearance order within
//! their date. Nothing is sorted, deduplicated, or re-ordered. This is why
//! [`ParsedTranscript`] is a sequence of groups plus a lookup index rather
//! than a hash map, whose iteration order would be unspecified.
//!
//! # Examples
//!
//! ```
//! use chatpress::transcript::{ParsedTranscript, Record};
//!
//! let mut parsed = ParsedTranscript::new();
//! parsed.push("01/01/2024", Record::new("09:00", "hello"));
//! parsed.push("02/01/2024", Record::new("10:00", "next day"));
//! parsed.push("01/01/2024", Record::new("23:59", "late reply"));
//!
//! assert_eq!(parsed.len(), 2);
//! assert_eq!(parsed.total_records(), 3);
//! assert_eq!(parsed.get("01/01/2024").unwrap().len(), 2);
//!
//! // Key order is first-seen, not sorted
//! let dates: Vec<_> = parsed.dates().collect();
//! assert_eq!(dates, ["01/01/2024", "02/01/2024"]);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single message occurrence: the `HH:MM` time and the message body.
///
/// Both fields hold the literal text taken from the source transcript. The
/// time is never parsed into a calendar type and never range-checked; a
/// record exists exactly because its marker appeared in the input. Records
/// are immutable once created.
///
/// Multi-line bodies keep their embedded newlines. Leading and trailing
/// whitespace is trimmed by the segmenter before construction, so a bare
/// marker with no text yields an empty body, not a missing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Literal `HH:MM` time text from the marker.
    time: String,

    /// Message text. May contain newlines; may be empty.
    body: String,
}

impl Record {
    /// Creates a record from its time and body text.
    pub fn new(time: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            body: body.into(),
        }
    }

    /// Returns the `HH:MM` time text.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` if the body is empty.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// All records sharing one `DD/MM/YYYY` date key, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateGroup {
    date: String,
    records: Vec<Record>,
}

impl DateGroup {
    /// Creates an empty group for the given date key.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            records: Vec::new(),
        }
    }

    /// Returns the `DD/MM/YYYY` date key.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the records in source-appearance order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records in this group.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the group holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn push(&mut self, record: Record) {
        self.records.push(record);
    }
}

/// The full ordered mapping of one parsed transcript.
///
/// An order-preserving map: groups live in a `Vec` in first-seen key order,
/// with a side index for key lookup. Produced by
/// [`Segmenter::parse`](crate::segmenter::Segmenter::parse) and consumed
/// read-only by the renderer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedTranscript {
    groups: Vec<DateGroup>,

    /// Date key → position in `groups`.
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ParsedTranscript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record under the given date key.
    ///
    /// A first occurrence of a key creates its group at the end of the key
    /// order; subsequent occurrences append to the existing group.
    pub fn push(&mut self, date: &str, record: Record) {
        let idx = match self.index.get(date) {
            Some(&idx) => idx,
            None => {
                self.groups.push(DateGroup::new(date));
                let idx = self.groups.len() - 1;
                self.index.insert(date.to_string(), idx);
                idx
            }
        };
        self.groups[idx].push(record);
    }

    /// Looks up the group for a date key.
    pub fn get(&self, date: &str) -> Option<&DateGroup> {
        self.index.get(date).map(|&idx| &self.groups[idx])
    }

    /// Returns `true` if the transcript contains the date key.
    pub fn contains(&self, date: &str) -> bool {
        self.index.contains_key(date)
    }

    /// Iterates groups in first-seen key order.
    pub fn iter(&self) -> std::slice::Iter<'_, DateGroup> {
        self.groups.iter()
    }

    /// Iterates date keys in first-seen order.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(DateGroup::date)
    }

    /// Returns the number of distinct date keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns the total record count across all dates.
    pub fn total_records(&self) -> usize {
        self.groups.iter().map(DateGroup::len).sum()
    }

    /// Returns `true` if no records were extracted.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a ParsedTranscript {
    type Item = &'a DateGroup;
    type IntoIter = std::slice::Iter<'a, DateGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
