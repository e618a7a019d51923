//! Streaming reader for the delimited layouts (`combined-csv` and `split`).
//!
//! Files are comma-separated with every field double-quoted. The first row is
//! a header and is dropped without being looked at. Blank rows are skipped
//! before ids are handed out, so ids stay dense. Spaces between a comma and
//! the start of the next field are dropped, so `"a", "b"` reads as `a`, `b`.

use std::io::{self, Read};

use ::csv::{ReaderBuilder, StringRecord};

use newsqa_core::id::RecordId;
use newsqa_core::record::{CombinedCsvRecord, Record, SplitRecord};
use newsqa_core::variant::Variant;

use super::RecordItem;
use crate::error::{Error, Result};

/// Column mapping of a delimited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLayout {
    /// `story_id, question, <span columns...>, story_text`
    CombinedCsv,
    /// `story_id, story_text, question, answer_token_ranges`
    Split,
}

impl RowLayout {
    pub fn variant(self) -> Variant {
        match self {
            RowLayout::CombinedCsv => Variant::CombinedDelimited,
            RowLayout::Split => Variant::Split,
        }
    }

    pub fn min_columns(self) -> usize {
        match self {
            RowLayout::CombinedCsv => 3,
            RowLayout::Split => 4,
        }
    }

    /// Map one non-blank data row onto the canonical record.
    pub fn map_row(self, row: &StringRecord) -> Result<Record> {
        let n = row.len();
        if n < self.min_columns() {
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            return Err(Error::Malformed(format!(
                "line {line}: expected at least {} columns for {}, found {n}",
                self.min_columns(),
                self.variant()
            )));
        }
        let col = |i: usize| row.get(i).unwrap_or_default().to_string();

        let record = match self {
            RowLayout::CombinedCsv => {
                let spans: Vec<&str> = (2..n - 1).filter_map(|i| row.get(i)).collect();
                Record::CombinedCsv(CombinedCsvRecord {
                    story_id: col(0),
                    story_text: col(n - 1),
                    question: col(1),
                    answer_char_ranges: py_list_repr(&spans),
                })
            }
            RowLayout::Split => Record::Split(SplitRecord {
                story_id: col(0),
                story_text: col(1),
                question: col(2),
                answer_token_ranges: col(3),
            }),
        };
        Ok(record)
    }
}

/// Pull iterator over a delimited file.
pub struct DelimitedReader<R: Read> {
    rdr: ::csv::Reader<SkipInitialSpace<R>>,
    layout: RowLayout,
    row: StringRecord,
    header_skipped: bool,
    next_id: RecordId,
    done: bool,
}

impl<R: Read> DelimitedReader<R> {
    pub fn new(reader: R, layout: RowLayout) -> Self {
        let rdr = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b',')
            .quote(b'"')
            .double_quote(true)
            .flexible(true)
            .from_reader(SkipInitialSpace::new(reader));
        Self {
            rdr,
            layout,
            row: StringRecord::new(),
            header_skipped: false,
            next_id: RecordId::new(0),
            done: false,
        }
    }

    pub fn layout(&self) -> RowLayout {
        self.layout
    }

    /// Read the next raw row; `Ok(false)` at end of input.
    fn read_row(&mut self) -> Result<bool> {
        self.rdr.read_record(&mut self.row).map_err(|e| {
            if e.is_io_error() {
                Error::Csv(e)
            } else {
                Error::Malformed(format!("unparseable delimited row: {e}"))
            }
        })
    }

    fn advance(&mut self) -> Result<Option<(RecordId, Record)>> {
        if !self.header_skipped {
            self.header_skipped = true;
            if !self.read_row()? {
                return Ok(None);
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(columns = self.row.len(), "discarded header row");
        }

        loop {
            if !self.read_row()? {
                #[cfg(feature = "tracing")]
                tracing::debug!(records = self.next_id.get(), "end of delimited partition");
                return Ok(None);
            }
            if is_blank(&self.row) {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    line = self.row.position().map(|p| p.line()).unwrap_or(0),
                    "skipped blank row"
                );
                continue;
            }
            let record = self.layout.map_row(&self.row)?;
            let id = self.next_id;
            self.next_id = id.next();
            return Ok(Some((id, record)));
        }
    }
}

impl<R: Read> Iterator for DelimitedReader<R> {
    type Item = RecordItem;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.advance() {
            Ok(Some(item)) => Some(Ok(item)),
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    Start,
    Unquoted,
    Quoted,
    /// A `"` inside a quoted field: either an escaped quote or the close.
    QuoteInQuoted,
}

/// Byte filter that drops spaces at the start of every field, outside quotes.
///
/// The csv parser only treats `"` as an opening quote when it is the first
/// byte of a field, so ` "text"` would otherwise keep both the space and the
/// quotes.
pub struct SkipInitialSpace<R> {
    inner: R,
    state: FieldState,
}

impl<R: Read> SkipInitialSpace<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            state: FieldState::Start,
        }
    }

    fn keep(&mut self, b: u8) -> bool {
        use FieldState::*;
        let (next, keep) = match (self.state, b) {
            (Start, b' ') => (Start, false),
            (Start, b'"') => (Quoted, true),
            (Start | Unquoted | QuoteInQuoted, b',' | b'\n' | b'\r') => (Start, true),
            (Start | Unquoted, _) => (Unquoted, true),
            (Quoted, b'"') => (QuoteInQuoted, true),
            (Quoted, _) => (Quoted, true),
            (QuoteInQuoted, b'"') => (Quoted, true),
            (QuoteInQuoted, _) => (Unquoted, true),
        };
        self.state = next;
        keep
    }
}

impl<R: Read> Read for SkipInitialSpace<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let n = self.inner.read(buf)?;
            if n == 0 {
                return Ok(0);
            }
            let mut kept = 0;
            for i in 0..n {
                let b = buf[i];
                if self.keep(b) {
                    buf[kept] = b;
                    kept += 1;
                }
            }
            // a chunk of nothing but dropped spaces must not look like EOF
            if kept > 0 {
                return Ok(kept);
            }
        }
    }
}

/// A row with no fields, or a single whitespace-only field.
fn is_blank(row: &StringRecord) -> bool {
    match row.len() {
        0 => true,
        1 => row.get(0).map_or(true, |f| f.trim().is_empty()),
        _ => false,
    }
}

/// Render strings as a list literal: `['0:3', '']`.
///
/// `combined-csv` consumers expect the span columns in exactly this form, so
/// quoting and escaping follow the list-literal conventions those consumers
/// parse: single quotes unless the text contains a single quote and no double
/// quote, backslash escapes for the active quote and backslashes, and `\x`,
/// `\u` or `\U` escapes for non-printable characters. Unassigned code points
/// are passed through unescaped.
pub fn py_list_repr(items: &[&str]) -> String {
    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        push_str_repr(&mut out, item);
    }
    out.push(']');
    out
}

fn push_str_repr(out: &mut String, s: &str) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if needs_escape(c) => {
                use std::fmt::Write as _;
                let cp = c as u32;
                let _ = if cp <= 0xff {
                    write!(out, "\\x{cp:02x}")
                } else if cp <= 0xffff {
                    write!(out, "\\u{cp:04x}")
                } else {
                    write!(out, "\\U{cp:08x}")
                };
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

/// Non-printable characters: controls, separators other than a plain space,
/// format characters and private-use code points.
fn needs_escape(c: char) -> bool {
    c.is_control() || (c.is_whitespace() && c != ' ') || is_format(c) || is_private_use(c)
}

/// Unicode general category Cf.
fn is_format(c: char) -> bool {
    matches!(
        c as u32,
        0x00AD
            | 0x0600..=0x0605
            | 0x061C
            | 0x06DD
            | 0x070F
            | 0x0890..=0x0891
            | 0x08E2
            | 0x180E
            | 0x200B..=0x200F
            | 0x202A..=0x202E
            | 0x2060..=0x2064
            | 0x2066..=0x206F
            | 0xFEFF
            | 0xFFF9..=0xFFFB
            | 0x110BD
            | 0x110CD
            | 0x13430..=0x1343F
            | 0x1BCA0..=0x1BCA3
            | 0x1D173..=0x1D17A
            | 0xE0001
            | 0xE0020..=0xE007F
    )
}

/// Unicode general category Co.
fn is_private_use(c: char) -> bool {
    matches!(c as u32, 0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD)
}
