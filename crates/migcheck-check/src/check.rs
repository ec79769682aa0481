use std::fmt;
use std::sync::Arc;

use migcheck_core::{DEFAULT_LABEL, Integration, MigrationDrift, Verdict};

use crate::error::CheckError;
use crate::handle::MigrationsHandle;
use crate::source::{MigrationSource, classify};

/// A single diagnostic run by a health-check framework.
pub trait Check {
    fn check(&self) -> Result<Verdict, CheckError>;
    fn label(&self) -> &str;
}

/// Reports whether every available migration has been applied and nothing
/// unknown has been applied.
///
/// The handle is classified once, in [`MigrationStatusCheck::new`]; each call
/// to [`Check::check`] queries both collaborators again.
pub struct MigrationStatusCheck {
    source: Box<dyn MigrationSource>,
    label: String,
}

impl MigrationStatusCheck {
    pub fn new(handle: Arc<dyn MigrationsHandle>) -> Result<Self, CheckError> {
        Ok(Self::with_source(classify(handle)?))
    }

    pub fn from_handle<H>(handle: H) -> Result<Self, CheckError>
    where
        H: MigrationsHandle + 'static,
    {
        Self::new(Arc::new(handle))
    }

    pub fn with_source(source: Box<dyn MigrationSource>) -> Self {
        Self {
            source,
            label: DEFAULT_LABEL.to_string(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Integration shape the handle was classified as.
    pub fn integration(&self) -> Integration {
        self.source.integration()
    }

    /// Query both collaborators and compare what they return.
    pub fn drift(&self) -> Result<MigrationDrift, CheckError> {
        let available = self.source.list_available()?;
        let applied = self.source.list_applied()?;
        Ok(MigrationDrift::between(available, applied))
    }
}

impl Check for MigrationStatusCheck {
    fn check(&self) -> Result<Verdict, CheckError> {
        Ok(Verdict::from_drift(self.drift()?))
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for MigrationStatusCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MigrationStatusCheck")
            .field("integration", &self.integration())
            .field("label", &self.label)
            .finish()
    }
}
