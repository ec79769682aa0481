use std::collections::BTreeSet;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::version::Version;

/// Difference between the available and the applied migrations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct MigrationDrift {
    /// Available but not applied yet.
    pub pending: Vec<Version>,
    /// Applied but no longer available (rolled back, renamed, removed).
    pub orphaned: Vec<Version>,
}

impl MigrationDrift {
    /// Compare the two version collections as sets. Duplicates collapse and
    /// both results come back sorted.
    pub fn between<A, B>(available: A, applied: B) -> Self
    where
        A: IntoIterator<Item = Version>,
        B: IntoIterator<Item = Version>,
    {
        let available: BTreeSet<Version> = available.into_iter().collect();
        let applied: BTreeSet<Version> = applied.into_iter().collect();

        Self {
            pending: available.difference(&applied).cloned().collect(),
            orphaned: applied.difference(&available).cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.orphaned.is_empty()
    }

    /// Operator-facing summary of the drift; empty when there is none.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if !self.pending.is_empty() {
            parts.push(format!(
                "Not all migrations applied: {}",
                join_versions(&self.pending)
            ));
        }
        if !self.orphaned.is_empty() {
            parts.push(format!(
                "Migrations applied which are not available: {}",
                join_versions(&self.orphaned)
            ));
        }
        parts.join("; ")
    }
}

/// Comma-separated version list, as used in drift messages.
pub fn join_versions(versions: &[Version]) -> String {
    versions
        .iter()
        .map(Version::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use rstest::rstest;

    fn versions(items: &[&str]) -> Vec<Version> {
        items.iter().copied().map(Version::from).collect()
    }

    #[rstest]
    #[case(&["Version1", "Version2"], &["Version1", "Version2"], &[], &[])]
    #[case(&["Version1", "Version2"], &["Version1"], &["Version2"], &[])]
    #[case(&["Version1"], &["Version1", "Version2"], &[], &["Version2"])]
    #[case(&["Version1", "Version3"], &["Version2"], &["Version1", "Version3"], &["Version2"])]
    #[case(&[], &[], &[], &[])]
    fn computes_both_differences(
        #[case] available: &[&str],
        #[case] applied: &[&str],
        #[case] pending: &[&str],
        #[case] orphaned: &[&str],
    ) {
        let drift = MigrationDrift::between(versions(available), versions(applied));
        assert_eq!(drift.pending, versions(pending));
        assert_eq!(drift.orphaned, versions(orphaned));
        assert_eq!(drift.is_empty(), pending.is_empty() && orphaned.is_empty());
    }

    #[test]
    fn ignores_order_and_duplicates() {
        let drift = MigrationDrift::between(
            versions(&["Version2", "Version1", "Version2"]),
            versions(&["Version1", "Version2", "Version1"]),
        );
        assert!(drift.is_empty());
        assert_eq!(drift.describe(), "");
    }

    #[rstest]
    #[case(&[], "")]
    #[case(&["Version1"], "Version1")]
    #[case(&["Version1", "Version2"], "Version1, Version2")]
    fn joins_versions_with_commas(#[case] items: &[&str], #[case] expected: &str) {
        assert_eq!(join_versions(&versions(items)), expected);
    }

    #[test]
    fn describes_pending_only() {
        let drift = MigrationDrift::between(
            versions(&["Version1", "Version2", "Version3"]),
            versions(&["Version1"]),
        );
        assert_snapshot!(drift.describe(), @"Not all migrations applied: Version2, Version3");
    }

    #[test]
    fn describes_pending_and_orphaned() {
        let drift = MigrationDrift::between(versions(&["Version1"]), versions(&["Version9"]));
        assert_snapshot!(
            drift.describe(),
            @"Not all migrations applied: Version1; Migrations applied which are not available: Version9"
        );
    }
}
