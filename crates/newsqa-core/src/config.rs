//! Loader configuration that the CLI and library callers can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::variant::Variant;

/// Default read-buffer size for partition files (64 KiB).
pub const DEFAULT_READ_BUFFER_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Which layout to read.
    #[serde(default)]
    pub variant: Variant,

    /// Directory holding the manually downloaded corpus.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Capacity of the buffered reader wrapped around each partition file.
    #[serde(default = "default_read_buffer_bytes")]
    pub read_buffer_bytes: usize,
}

fn default_read_buffer_bytes() -> usize {
    DEFAULT_READ_BUFFER_BYTES
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            data_dir: None,
            read_buffer_bytes: DEFAULT_READ_BUFFER_BYTES,
        }
    }
}

impl LoaderConfig {
    pub fn new(variant: Variant, data_dir: impl Into<String>) -> Self {
        Self {
            variant,
            data_dir: Some(data_dir.into()),
            ..Self::default()
        }
    }

    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `NEWSQA_CONFIG`: config name (`combined-csv`, `combined-json`, `split`)
    /// - `NEWSQA_DATA_DIR`: directory holding the manually downloaded files
    /// - `NEWSQA_READ_BUFFER_BYTES`: read buffer capacity in bytes
    ///
    /// Unparseable numeric values are ignored; an unknown config name is an error.
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("NEWSQA_CONFIG") {
            cfg.variant = Variant::parse(&s)?;
        }

        if let Ok(s) = std::env::var("NEWSQA_DATA_DIR") {
            cfg.data_dir = Some(s);
        }

        if let Ok(s) = std::env::var("NEWSQA_READ_BUFFER_BYTES") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.read_buffer_bytes = v;
            }
        }

        Ok(cfg)
    }

    /// Check the fields that can be wrong before any file is touched.
    pub fn validate(&self) -> Result<()> {
        if self.read_buffer_bytes == 0 {
            return Err(Error::Config("read_buffer_bytes must be > 0".into()));
        }
        match self.data_dir.as_deref() {
            Some(dir) if !dir.trim().is_empty() => Ok(()),
            _ => Err(Error::Config(
                "no data directory configured (set NEWSQA_DATA_DIR or pass --data-dir)".into(),
            )),
        }
    }
}
