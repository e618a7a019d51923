//! Format selector: map a variant and a data directory to partition files.
//!
//! Only the data directory is checked here. Partition files are checked when
//! they are opened, so resolving a layout never touches more than one path.

use std::path::{Path, PathBuf};

use newsqa_core::variant::{Partition, Variant};

use crate::error::{Error, Result};

pub const COMBINED_CSV_FILE: &str = "combined-newsqa-data-v1.csv";
pub const COMBINED_JSON_FILE: &str = "combined-newsqa-data-v1.json";
pub const SPLIT_DIR: &str = "split_data";

/// One partition of a variant, bound to the file it is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionSource {
    pub variant: Variant,
    pub partition: Partition,
    pub path: PathBuf,
}

/// File a partition is read from, relative to nothing but `root`. Pure path
/// construction; `None` when the variant has no such partition.
pub fn partition_path(variant: Variant, root: &Path, partition: Partition) -> Option<PathBuf> {
    match (variant, partition) {
        (Variant::CombinedDelimited, Partition::Combined) => Some(root.join(COMBINED_CSV_FILE)),
        (Variant::CombinedStructured, Partition::Combined) => Some(root.join(COMBINED_JSON_FILE)),
        (Variant::Split, Partition::Train) => Some(root.join(SPLIT_DIR).join("train.csv")),
        (Variant::Split, Partition::Test) => Some(root.join(SPLIT_DIR).join("test.csv")),
        (Variant::Split, Partition::Dev) => Some(root.join(SPLIT_DIR).join("dev.csv")),
        _ => None,
    }
}

/// Resolve every partition of `variant` under `root`.
///
/// Fails with [`Error::MissingData`] if `root` does not exist; nothing else
/// is validated.
pub fn resolve(variant: Variant, root: impl AsRef<Path>) -> Result<Vec<PartitionSource>> {
    let root = checked_root(root.as_ref())?;

    let sources = variant
        .partitions()
        .iter()
        .filter_map(|&partition| {
            partition_path(variant, &root, partition).map(|path| PartitionSource {
                variant,
                partition,
                path,
            })
        })
        .collect();
    Ok(sources)
}

/// Resolve a single partition by name.
pub fn resolve_partition(
    variant: Variant,
    root: impl AsRef<Path>,
    partition: Partition,
) -> Result<PartitionSource> {
    let root = checked_root(root.as_ref())?;
    let path = partition_path(variant, &root, partition).ok_or_else(|| {
        Error::Config(format!(
            "config '{variant}' has no '{partition}' partition"
        ))
    })?;
    Ok(PartitionSource {
        variant,
        partition,
        path,
    })
}

fn checked_root(root: &Path) -> Result<PathBuf> {
    let root = expand_home(root);
    if !root.exists() {
        return Err(Error::missing(root));
    }
    Ok(root)
}

/// Expand a leading `~` the way a shell would; other paths are returned as-is.
pub(crate) fn expand_home(path: &Path) -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
