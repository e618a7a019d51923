//! Source manifest: which files a variant resolved to and what they contained.
//!
//! Built by `newsqa-io` after hashing each partition file; the CLI prints it
//! so a locally assembled corpus can be compared against a known-good copy.

use serde::{Deserialize, Serialize};

use crate::hash::{hash_serde, Hash256};
use crate::variant::{Partition, Variant};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionDigest {
    pub partition: Partition,
    pub path: String,
    pub bytes: u64,
    pub blake3: Hash256,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceManifest {
    pub variant: Variant,

    /// Dataset layout version for provenance.
    pub version: String,

    pub partitions: Vec<PartitionDigest>,
}

impl SourceManifest {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            version: crate::VERSION.to_string(),
            partitions: Vec::new(),
        }
    }

    pub fn push(&mut self, digest: PartitionDigest) {
        self.partitions.push(digest);
    }

    pub fn total_bytes(&self) -> u64 {
        self.partitions.iter().map(|p| p.bytes).sum()
    }

    /// Single digest over the per-partition hashes, ignoring local paths.
    pub fn combined_digest(&self) -> crate::Result<Hash256> {
        let parts: Vec<(Partition, Hash256)> = self
            .partitions
            .iter()
            .map(|p| (p.partition, p.blake3))
            .collect();
        hash_serde(&(self.variant, &self.version, parts))
    }
}
