//! The three on-disk layouts of the corpus and the partitions each one carries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::Schema;

/// Dataset layout, chosen once per dataset instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Variant {
    /// `combined-newsqa-data-v1.csv`, one "combined" partition.
    #[serde(rename = "combined-csv", alias = "combined-delimited")]
    CombinedDelimited,
    /// `combined-newsqa-data-v1.json`, one "combined" partition.
    #[serde(rename = "combined-json", alias = "combined-structured")]
    CombinedStructured,
    /// `split_data/{train,test,dev}.csv`.
    #[default]
    #[serde(rename = "split")]
    Split,
}

impl Variant {
    pub const ALL: [Variant; 3] = [
        Variant::CombinedDelimited,
        Variant::CombinedStructured,
        Variant::Split,
    ];

    /// Accepts both the descriptive names and the source-repo config names.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim() {
            "combined-csv" | "combined-delimited" => Ok(Variant::CombinedDelimited),
            "combined-json" | "combined-structured" => Ok(Variant::CombinedStructured),
            "split" => Ok(Variant::Split),
            other => Err(Error::Config(format!(
                "unknown config name '{other}' (expected one of: combined-csv, combined-json, split)"
            ))),
        }
    }

    /// Source-repo config name.
    pub fn config_name(self) -> &'static str {
        match self {
            Variant::CombinedDelimited => "combined-csv",
            Variant::CombinedStructured => "combined-json",
            Variant::Split => "split",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Variant::CombinedDelimited => {
                "The whole dataset in the combined CSV format (https://github.com/Maluuba/newsqa#csv)."
            }
            Variant::CombinedStructured => {
                "The whole dataset in the combined JSON format (https://github.com/Maluuba/newsqa#json)."
            }
            Variant::Split => "Train, validation and test splits in CSV format.",
        }
    }

    pub fn partitions(self) -> &'static [Partition] {
        match self {
            Variant::CombinedDelimited | Variant::CombinedStructured => &[Partition::Combined],
            Variant::Split => &[Partition::Train, Partition::Test, Partition::Dev],
        }
    }

    /// Declared schema of the records this variant produces.
    pub fn schema(self) -> Schema {
        Schema::for_variant(self)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Variant::parse(s)
    }
}

/// One named slice of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    Combined,
    Train,
    Test,
    /// The validation split; stored on disk as `dev.csv`.
    Dev,
}

impl Partition {
    pub fn name(self) -> &'static str {
        match self {
            Partition::Combined => "combined",
            Partition::Train => "train",
            Partition::Test => "test",
            Partition::Dev => "dev",
        }
    }

    /// `validation` is accepted for `dev`.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim() {
            "combined" => Ok(Partition::Combined),
            "train" => Ok(Partition::Train),
            "test" => Ok(Partition::Test),
            "dev" | "validation" => Ok(Partition::Dev),
            other => Err(Error::Config(format!("unknown partition '{other}'"))),
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Partition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Partition::parse(s)
    }
}
