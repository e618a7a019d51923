#![forbid(unsafe_code)]
//! newsqa-io: partition resolution, streaming record normalizers, and writers.
//!
//! Control flow for a caller:
//!
//! ```text
//! data dir ──► selector::resolve ──► PartitionSource(s)
//!                                        │
//!                                        ▼
//!                       RecordReader::open ──► (RecordId, Record) ...
//! ```
//!
//! Every reader is a plain pull iterator: no work happens between `next()`
//! calls and dropping it closes the file.

pub mod buf;
pub mod dataset;
pub mod error;
pub mod manifest;
pub mod merge;
pub mod readers;
pub mod selector;
pub mod writers;

pub use dataset::NewsQa;
pub use error::{Error, Result};
pub use readers::RecordReader;
pub use selector::{resolve, resolve_partition, PartitionSource};
