//! Convenient re-exports for downstream crates.

pub use crate::config::LoaderConfig;
pub use crate::error::{Error, Result};
pub use crate::id::RecordId;
pub use crate::info::DatasetInfo;
pub use crate::manifest::{PartitionDigest, SourceManifest};
pub use crate::record::{
    AnnotationSpan, AnswerRecord, CombinedCsvRecord, CombinedJsonRecord, QuestionRecord, Record,
    SplitRecord, ValidatedSpan,
};
pub use crate::schema::{DataType, Field, Schema};
pub use crate::variant::{Partition, Variant};
