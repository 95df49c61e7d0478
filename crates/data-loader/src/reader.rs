//! Two-line record reader shared by both catalog parsers.
//!
//! Catalog files group every entity into two lines:
//!
//! ```text
//! <field>, <field>
//! <item>, <item>, ...
//! ```
//!
//! [`RecordReader`] walks any `BufRead` source and yields one [`Record`] per
//! pair of lines. It stops at the first structural problem and never yields
//! anything after it.

use crate::error::{FormatIssue, RecordError};
use std::io::{BufRead, Lines};

/// Separator between fields and between list items
pub const FIELD_SEPARATOR: &str = ", ";

/// One entity's raw text: a fields line and a list line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number of the fields line
    pub line: usize,
    pub fields: String,
    pub list: String,
}

impl Record {
    /// Split the fields line into its two leading fields.
    ///
    /// Fields after the second are ignored.
    pub fn key_fields(&self) -> Result<(&str, &str), RecordError> {
        let fields = split_fields(&self.fields, self.line)?;
        match fields.as_slice() {
            [first, second, ..] => Ok((*first, *second)),
            _ => Err(RecordError::Format {
                line: self.line,
                issue: FormatIssue::MissingField,
            }),
        }
    }

    /// Split the list line into raw (untrimmed) items.
    ///
    /// A blank list line has no items. Empty items at the end of the line
    /// (`"TG002, "`) are dropped; empty items before a real one are kept.
    pub fn items(&self) -> Result<Vec<&str>, RecordError> {
        if self.list.trim().is_empty() {
            return Ok(Vec::new());
        }
        let mut items = split_fields(&self.list, self.line + 1)?;
        while items.last().is_some_and(|item| item.is_empty()) {
            items.pop();
        }
        Ok(items)
    }
}

/// Split a line on [`FIELD_SEPARATOR`].
///
/// A comma left inside a field means the separator was malformed
/// (`"Drama,Action"`, `"Title,ID"`).
pub fn split_fields(line: &str, line_no: usize) -> Result<Vec<&str>, RecordError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.iter().any(|field| field.contains(',')) {
        return Err(RecordError::Format {
            line: line_no,
            issue: FormatIssue::MalformedSeparator,
        });
    }
    Ok(fields)
}

/// Lazily reads [`Record`]s, two lines at a time.
///
/// The iterator is fused after the first error or the end of the source.
pub struct RecordReader<R> {
    lines: Lines<R>,
    line_no: usize,
    records: usize,
    done: bool,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            lines: source.lines(),
            line_no: 0,
            records: 0,
            done: false,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, RecordError> {
        match self.lines.next() {
            Some(line) => {
                self.line_no += 1;
                Ok(Some(line?))
            }
            None => Ok(None),
        }
    }

    fn read_record(&mut self) -> Result<Option<Record>, RecordError> {
        let fields = match self.next_line()? {
            Some(line) => line,
            None if self.records == 0 => {
                return Err(RecordError::Format {
                    line: 1,
                    issue: FormatIssue::EmptySource,
                });
            }
            None => return Ok(None),
        };
        let line = self.line_no;

        if fields.trim().is_empty() {
            return Err(RecordError::Format {
                line,
                issue: FormatIssue::BlankLine,
            });
        }

        let list = self.next_line()?.ok_or(RecordError::Format {
            line: line + 1,
            issue: FormatIssue::MissingLine,
        })?;

        self.records += 1;
        Ok(Some(Record { line, fields, list }))
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for RecordReader<R> {}
