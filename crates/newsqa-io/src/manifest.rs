//! Build a [`SourceManifest`] by streaming each partition file through blake3.

use std::io::{BufRead, Read};

use newsqa_core::hash::ContentHasher;
use newsqa_core::manifest::{PartitionDigest, SourceManifest};
use newsqa_core::variant::Variant;

use crate::buf::open_partition;
use crate::error::Result;
use crate::selector::PartitionSource;

pub fn build_manifest(
    variant: Variant,
    sources: &[PartitionSource],
    buffer_bytes: usize,
) -> Result<SourceManifest> {
    let mut manifest = SourceManifest::new(variant);
    for source in sources {
        let reader = open_partition(&source.path, buffer_bytes)?;
        let hasher = hash_reader(reader)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            partition = %source.partition,
            bytes = hasher.bytes(),
            "hashed partition"
        );
        manifest.push(PartitionDigest {
            partition: source.partition,
            path: source.path.to_string_lossy().into_owned(),
            bytes: hasher.bytes(),
            blake3: hasher.finalize(),
        });
    }
    Ok(manifest)
}

fn hash_reader<R: Read + BufRead>(mut reader: R) -> Result<ContentHasher> {
    let mut hasher = ContentHasher::new();
    loop {
        let chunk = reader.fill_buf()?;
        if chunk.is_empty() {
            break;
        }
        hasher.update(chunk);
        let n = chunk.len();
        reader.consume(n);
    }
    Ok(hasher)
}
