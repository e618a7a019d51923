//! Record normalizers: raw partition file in, `(RecordId, Record)` pairs out.
//!
//! One reader per layout. [`RecordReader`] picks the reader once, from the
//! variant, so a dataset instance never mixes record shapes.

pub mod csv;
pub mod json;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use newsqa_core::id::RecordId;
use newsqa_core::record::Record;
use newsqa_core::variant::Variant;

use crate::buf::{open_partition, BoundedBufReader};
use crate::error::Result;

pub use self::csv::{py_list_repr, DelimitedReader, RowLayout};
pub use self::json::{normalize_question, normalize_story, StructuredReader};

/// Item produced by every reader.
pub type RecordItem = Result<(RecordId, Record)>;

/// A lazy, forward-only pass over one partition file.
///
/// Yields records in file order with ids starting at 0. The first error ends
/// the pass: it is yielded once and the iterator is fused afterwards.
pub enum RecordReader<R: Read> {
    Delimited(DelimitedReader<R>),
    Structured(StructuredReader),
}

impl RecordReader<BoundedBufReader<File>> {
    /// Open `path` and read it as `variant`. A missing file is missing data.
    pub fn open(variant: Variant, path: impl AsRef<Path>, buffer_bytes: usize) -> Result<Self> {
        let path = path.as_ref();
        #[cfg(feature = "tracing")]
        tracing::debug!(variant = %variant, path = %path.display(), "opening partition");
        let reader = open_partition(path, buffer_bytes)?;
        Self::from_reader(variant, reader)
    }
}

impl<R: Read> RecordReader<R> {
    /// Read an already-open handle as `variant`.
    ///
    /// Delimited layouts do no work until the first pull. The structured
    /// layout parses the document here, so a document without a `data`
    /// sequence fails before any record exists.
    pub fn from_reader(variant: Variant, reader: R) -> Result<Self> {
        match variant {
            Variant::CombinedDelimited => Ok(RecordReader::Delimited(DelimitedReader::new(
                reader,
                RowLayout::CombinedCsv,
            ))),
            Variant::Split => Ok(RecordReader::Delimited(DelimitedReader::new(
                reader,
                RowLayout::Split,
            ))),
            Variant::CombinedStructured => {
                Ok(RecordReader::Structured(StructuredReader::from_reader(reader)?))
            }
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            RecordReader::Delimited(r) => r.layout().variant(),
            RecordReader::Structured(_) => Variant::CombinedStructured,
        }
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = RecordItem;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            RecordReader::Delimited(r) => r.next(),
            RecordReader::Structured(r) => r.next(),
        }
    }
}

impl<R: Read> std::iter::FusedIterator for RecordReader<R> {}
