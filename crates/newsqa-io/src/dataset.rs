//! `NewsQa`: the configured dataset, resolved once and read per partition.

use std::fs::File;
use std::path::{Path, PathBuf};

use newsqa_core::config::LoaderConfig;
use newsqa_core::info::DatasetInfo;
use newsqa_core::manifest::SourceManifest;
use newsqa_core::variant::{Partition, Variant};

use crate::buf::BoundedBufReader;
use crate::error::{Error, Result};
use crate::readers::RecordReader;
use crate::selector::{expand_home, resolve, PartitionSource};

/// A resolved dataset instance. Each call to [`NewsQa::records`] starts an
/// independent pass with its own id counter.
#[derive(Debug, Clone)]
pub struct NewsQa {
    cfg: LoaderConfig,
    root: PathBuf,
    sources: Vec<PartitionSource>,
}

impl NewsQa {
    /// Validate the config and resolve the partition files. Fails with
    /// missing data if the data directory does not exist.
    pub fn new(cfg: LoaderConfig) -> Result<Self> {
        cfg.validate()?;
        let root = expand_home(Path::new(cfg.data_dir.as_deref().unwrap_or_default()));
        let sources = resolve(cfg.variant, &root)?;
        #[cfg(feature = "tracing")]
        tracing::info!(
            variant = %cfg.variant,
            root = %root.display(),
            partitions = sources.len(),
            "resolved dataset"
        );
        Ok(Self { cfg, root, sources })
    }

    /// Shorthand for `NewsQa::new(LoaderConfig::new(variant, root))`.
    pub fn open(variant: Variant, root: impl AsRef<Path>) -> Result<Self> {
        Self::new(LoaderConfig::new(
            variant,
            root.as_ref().to_string_lossy().into_owned(),
        ))
    }

    pub fn variant(&self) -> Variant {
        self.cfg.variant
    }

    /// Data directory with any leading `~` expanded; every partition path
    /// lives under it.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.cfg
    }

    pub fn info(&self) -> DatasetInfo {
        DatasetInfo::for_variant(self.cfg.variant)
    }

    pub fn partitions(&self) -> &[PartitionSource] {
        &self.sources
    }

    pub fn source(&self, partition: Partition) -> Result<&PartitionSource> {
        self.sources
            .iter()
            .find(|s| s.partition == partition)
            .ok_or_else(|| {
                Error::Config(format!(
                    "config '{}' has no '{partition}' partition",
                    self.cfg.variant
                ))
            })
    }

    /// Start a fresh pass over one partition.
    pub fn records(&self, partition: Partition) -> Result<RecordReader<BoundedBufReader<File>>> {
        let source = self.source(partition)?;
        RecordReader::open(source.variant, &source.path, self.cfg.read_buffer_bytes)
    }

    /// Hash every partition file.
    pub fn manifest(&self) -> Result<SourceManifest> {
        crate::manifest::build_manifest(
            self.cfg.variant,
            &self.sources,
            self.cfg.read_buffer_bytes,
        )
    }
}
