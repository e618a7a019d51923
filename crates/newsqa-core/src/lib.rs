#![forbid(unsafe_code)]
//! newsqa-core: pure data for the NewsQA dataset adapter.
//!
//! Variants and partitions, the three canonical record shapes, their declared
//! schemas, dataset metadata, loader configuration, and content hashing.
//! Nothing in here opens a file; `newsqa-io` owns all disk access.

pub mod config;
pub mod error;
pub mod hash;
pub mod id;
pub mod info;
pub mod manifest;
pub mod prelude;
pub mod record;
pub mod schema;
pub mod variant;

/// Version tag of the dataset layout this crate understands.
pub const VERSION: &str = "1.0.0";

pub use error::{Error, Result};
pub use record::Record;
pub use variant::{Partition, Variant};
