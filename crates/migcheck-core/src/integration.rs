use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The three integration shapes a migrations handle can take.
///
/// `Configuration` and `Legacy` expose the same accessors; they are kept apart
/// so reports can say which lineage a handle came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Integration {
    /// Dependency factory with a migrations repository and a metadata storage.
    #[default]
    Repository,
    /// Configuration object listing available and migrated versions.
    Configuration,
    /// Pre-namespace configuration object with the same accessors.
    Legacy,
}

impl Integration {
    pub fn as_str(self) -> &'static str {
        match self {
            Integration::Repository => "repository",
            Integration::Configuration => "configuration",
            Integration::Legacy => "legacy",
        }
    }
}

impl fmt::Display for Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
