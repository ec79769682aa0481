use std::borrow::Borrow;
use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Opaque identifier of a single migration, e.g. `Version20240101120000`.
///
/// Versions compare as plain strings. Ordering only exists so that reports are
/// deterministic; it carries no meaning for the status check.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Version {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Version {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for Version {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn displays_raw_identifier() {
        let version = Version::new("Version1");
        assert_eq!(version.to_string(), "Version1");
        assert_eq!(version.as_str(), "Version1");
    }

    #[test]
    fn serializes_as_plain_string() {
        let version = Version::from("Version2");
        assert_eq!(serde_json::to_string(&version).unwrap(), "\"Version2\"");

        let parsed: Version = serde_json::from_str("\"Version3\"").unwrap();
        assert_eq!(parsed, Version::from("Version3"));
    }

    #[test]
    fn set_lookup_by_str() {
        let set: BTreeSet<Version> = ["Version1", "Version2"].into_iter().map(Version::from).collect();
        assert!(set.contains("Version1"));
        assert!(!set.contains("Version3"));
    }
}
