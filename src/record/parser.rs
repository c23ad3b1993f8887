// src/record/parser.rs
//! Streaming parser for book source records.
//!
//! A record is a vertex region (`label name` lines) followed, after the first
//! blank line, by an edge region (`chapter:group;group;...` lines). Lines that
//! start with the comment marker are skipped in both regions.

use std::io::{self, BufRead};

use super::types::{ChapterRecord, Record, VertexRecord};
use super::DEFAULT_COMMENT_MARKER;
use crate::error::{CharnetError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Vertices,
    Edges,
}

/// Lazily classifies lines into [`Record`]s.
///
/// Single pass: once the underlying lines are exhausted, or after the first
/// error, the parser yields nothing more.
pub struct RecordParser<I> {
    book: String,
    lines: I,
    comment_marker: char,
    region: Region,
    line_no: usize,
    done: bool,
}

impl<I> RecordParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    pub fn new(book: impl Into<String>, lines: I) -> Self {
        Self {
            book: book.into(),
            lines,
            comment_marker: DEFAULT_COMMENT_MARKER,
            region: Region::Vertices,
            line_no: 0,
            done: false,
        }
    }

    #[must_use]
    pub fn with_comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = marker;
        self
    }

    /// True once the blank separator line has been seen.
    #[must_use]
    pub fn in_edge_region(&self) -> bool {
        self.region == Region::Edges
    }

    fn classify(&mut self, raw: &str) -> Option<Result<Record>> {
        let mut line = raw.trim_end_matches(['\r', '\n']);
        if self.line_no == 1 {
            line = line.strip_prefix('\u{feff}').unwrap_or(line);
        }

        if line.starts_with(self.comment_marker) {
            return None;
        }
        if line.trim().is_empty() {
            self.region = Region::Edges;
            return None;
        }

        Some(match self.region {
            Region::Vertices => self.parse_vertex(line).map(Record::Vertex),
            Region::Edges => self.parse_chapter(line).map(Record::Chapter),
        })
    }

    fn parse_vertex(&self, line: &str) -> Result<VertexRecord> {
        let Some((label, name)) = line.split_once(' ') else {
            return Err(self.malformed(line, "expected `<label> <name>`"));
        };
        if !is_valid_label(label) {
            return Err(self.malformed(line, "invalid vertex label"));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(self.malformed(line, "missing character name"));
        }

        Ok(VertexRecord {
            line: self.line_no,
            label: label.to_string(),
            name: name.to_string(),
        })
    }

    fn parse_chapter(&self, line: &str) -> Result<ChapterRecord> {
        let Some((tag, body)) = line.split_once(':') else {
            return Err(self.malformed(line, "expected `<chapter>:<groups>`"));
        };
        if tag.trim().is_empty() {
            return Err(self.malformed(line, "missing chapter tag"));
        }

        let groups = body
            .split(';')
            .map(|group| self.parse_group(line, group))
            .collect::<Result<Vec<_>>>()?;

        Ok(ChapterRecord {
            line: self.line_no,
            tag: tag.to_string(),
            groups,
        })
    }

    fn parse_group(&self, line: &str, group: &str) -> Result<Vec<String>> {
        if group.is_empty() {
            return Ok(Vec::new());
        }

        let mut labels: Vec<String> = Vec::new();
        for label in group.split(',') {
            if label.is_empty() {
                return Err(self.malformed(line, "empty label in group"));
            }
            if !is_valid_label(label) {
                return Err(self.malformed(line, "invalid label in group"));
            }
            if labels.iter().any(|l| l == label) {
                return Err(self.malformed(line, "character meets itself in group"));
            }
            labels.push(label.to_string());
        }
        Ok(labels)
    }

    fn malformed(&self, line: &str, reason: &'static str) -> CharnetError {
        CharnetError::MalformedRecord {
            book: self.book.clone(),
            line: self.line_no,
            text: line.to_string(),
            reason,
        }
    }
}

impl<I> Iterator for RecordParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let Some(next) = self.lines.next() else {
                self.done = true;
                break;
            };
            self.line_no += 1;

            let raw = match next {
                Ok(raw) => raw,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            };

            if let Some(item) = self.classify(&raw) {
                if item.is_err() {
                    self.done = true;
                }
                return Some(item);
            }
        }
        None
    }
}

/// Parser over any buffered reader, e.g. an opened `.dat` file.
pub fn from_reader<R: BufRead>(book: impl Into<String>, reader: R) -> RecordParser<io::Lines<R>> {
    RecordParser::new(book, reader.lines())
}

/// Parser over an in-memory record.
pub fn from_str<'a>(
    book: &str,
    text: &'a str,
) -> RecordParser<impl Iterator<Item = io::Result<String>> + 'a> {
    RecordParser::new(book, text.lines().map(|l| Ok(l.to_string())))
}

/// Labels are short identifiers; they may not contain separators or whitespace.
#[must_use]
pub fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && !label
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, ':' | ',' | ';'))
}
