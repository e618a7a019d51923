//! newsqa: facade over the workspace crates for tests, benches, and callers
//! that want a single dependency.

pub use newsqa_core;
pub use newsqa_io;

pub use newsqa_core::prelude::*;
pub use newsqa_io::{resolve, resolve_partition, NewsQa, PartitionSource, RecordReader};
