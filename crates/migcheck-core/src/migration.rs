use std::path::PathBuf;

use chrono::{DateTime, Utc};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::version::Version;

/// Payload attached to an available migration. The status check never looks at it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct MigrationDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

/// A migration known to the target system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableMigration {
    version: Version,
    definition: MigrationDefinition,
}

impl AvailableMigration {
    pub fn new(version: impl Into<Version>, definition: MigrationDefinition) -> Self {
        Self {
            version: version.into(),
            definition,
        }
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn definition(&self) -> &MigrationDefinition {
        &self.definition
    }
}

/// Every migration the repository knows about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableMigrationsSet {
    items: Vec<AvailableMigration>,
}

impl AvailableMigrationsSet {
    pub fn new(items: Vec<AvailableMigration>) -> Self {
        Self { items }
    }

    pub fn iter(&self) -> impl Iterator<Item = &AvailableMigration> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn versions(&self) -> Vec<Version> {
        self.items.iter().map(|m| m.version.clone()).collect()
    }

    pub fn get(&self, version: &str) -> Option<&AvailableMigration> {
        self.items.iter().find(|m| m.version.as_str() == version)
    }
}

impl FromIterator<AvailableMigration> for AvailableMigrationsSet {
    fn from_iter<I: IntoIterator<Item = AvailableMigration>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A row of the migration history: one migration recorded as executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ExecutedMigration {
    pub version: Version,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executed_at: Option<DateTime<Utc>>,
    /// Execution time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<u64>,
}

impl ExecutedMigration {
    pub fn new(version: impl Into<Version>) -> Self {
        Self {
            version: version.into(),
            executed_at: None,
            execution_time: None,
        }
    }

    pub fn version(&self) -> &Version {
        &self.version
    }
}

/// The migration history, in the order it was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct ExecutedMigrationsList {
    items: Vec<ExecutedMigration>,
}

impl ExecutedMigrationsList {
    pub fn new(items: Vec<ExecutedMigration>) -> Self {
        Self { items }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExecutedMigration> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn versions(&self) -> Vec<Version> {
        self.items.iter().map(|m| m.version.clone()).collect()
    }

    /// Most recently executed migration. Records with a timestamp win over
    /// records without one; ties fall back to history order.
    pub fn latest(&self) -> Option<&ExecutedMigration> {
        self.items
            .iter()
            .enumerate()
            .max_by_key(|(index, m)| (m.executed_at, *index))
            .map(|(_, m)| m)
    }
}

impl FromIterator<ExecutedMigration> for ExecutedMigrationsList {
    fn from_iter<I: IntoIterator<Item = ExecutedMigration>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn available_set_exposes_versions_in_order() {
        let set: AvailableMigrationsSet = ["Version2", "Version1"]
            .into_iter()
            .map(|v| AvailableMigration::new(v, MigrationDefinition::default()))
            .collect();

        assert_eq!(set.len(), 2);
        assert_eq!(
            set.versions(),
            vec![Version::from("Version2"), Version::from("Version1")]
        );
        assert!(set.get("Version1").is_some());
        assert!(set.get("Version3").is_none());
    }

    #[test]
    fn executed_list_parses_history_rows() {
        let json = r#"[
            {"version": "Version1", "executedAt": "2024-01-01T00:00:00Z", "executionTime": 12},
            {"version": "Version2"}
        ]"#;
        let list: ExecutedMigrationsList = serde_json::from_str(json).unwrap();

        assert_eq!(list.len(), 2);
        let first = list.iter().next().unwrap();
        assert_eq!(first.execution_time, Some(12));
        assert_eq!(
            first.executed_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn latest_prefers_newest_timestamp() {
        let mut older = ExecutedMigration::new("Version2");
        older.executed_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let mut newer = ExecutedMigration::new("Version1");
        newer.executed_at = Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());

        let list = ExecutedMigrationsList::new(vec![newer, older]);
        assert_eq!(list.latest().unwrap().version().as_str(), "Version1");
    }

    #[test]
    fn latest_without_timestamps_is_last_recorded() {
        let list: ExecutedMigrationsList = ["Version1", "Version2"]
            .into_iter()
            .map(ExecutedMigration::new)
            .collect();
        assert_eq!(list.latest().unwrap().version().as_str(), "Version2");
        assert!(ExecutedMigrationsList::default().latest().is_none());
    }
}
