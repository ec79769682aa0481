#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::drift::MigrationDrift;

/// Message of a successful migration status check.
pub const ALL_MIGRATIONS_DONE: &str = "All migrations are done.";

/// Label of the migration status check when none is configured.
pub const DEFAULT_LABEL: &str = "Migration status";

/// Outcome of a health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Verdict {
    Success { message: String },
    Failure { message: String, drift: MigrationDrift },
}

impl Verdict {
    /// Success when nothing drifted, otherwise a failure describing the drift.
    pub fn from_drift(drift: MigrationDrift) -> Self {
        if drift.is_empty() {
            Verdict::Success {
                message: ALL_MIGRATIONS_DONE.to_string(),
            }
        } else {
            Verdict::Failure {
                message: drift.describe(),
                drift,
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Verdict::Failure { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Verdict::Success { message } | Verdict::Failure { message, .. } => message,
        }
    }

    pub fn drift(&self) -> Option<&MigrationDrift> {
        match self {
            Verdict::Success { .. } => None,
            Verdict::Failure { drift, .. } => Some(drift),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::Version;

    #[test]
    fn empty_drift_is_success() {
        let verdict = Verdict::from_drift(MigrationDrift::default());
        assert!(verdict.is_success());
        assert!(!verdict.is_failure());
        assert_eq!(verdict.message(), ALL_MIGRATIONS_DONE);
        assert!(verdict.drift().is_none());
    }

    #[test]
    fn pending_drift_is_failure_naming_versions() {
        let drift = MigrationDrift::between(
            vec![Version::from("Version1"), Version::from("Version2")],
            vec![Version::from("Version1")],
        );
        let verdict = Verdict::from_drift(drift.clone());

        assert!(verdict.is_failure());
        assert!(verdict.message().contains("Version2"));
        assert_eq!(verdict.drift(), Some(&drift));
    }

    #[test]
    fn serializes_with_status_tag() {
        let verdict = Verdict::from_drift(MigrationDrift::between(
            Vec::new(),
            vec![Version::from("Version2")],
        ));
        let json = serde_json::to_value(&verdict).unwrap();

        assert_eq!(json["status"], "failure");
        assert_eq!(json["drift"]["orphaned"][0], "Version2");
        assert_eq!(json["drift"]["pending"].as_array().unwrap().len(), 0);

        let back: Verdict = serde_json::from_value(json).unwrap();
        assert_eq!(back, verdict);
    }
}
