//! Health check reporting whether every known database migration has been applied.
//!
//! A [`MigrationStatusCheck`] is built from a handle to the migrations system.
//! The handle is classified once, as one of three integration shapes, and each
//! [`Check::check`] call compares the available migrations with the executed ones.
//!
//! ```
//! use std::sync::Arc;
//! use migcheck::{Check, Configuration, MigrationStatusCheck, MigrationsHandle, SourceError, Version};
//!
//! struct Lists;
//!
//! impl Configuration for Lists {
//!     fn available_versions(&self) -> Result<Vec<Version>, SourceError> {
//!         Ok(vec!["Version1".into(), "Version2".into()])
//!     }
//!
//!     fn migrated_versions(&self) -> Result<Vec<Version>, SourceError> {
//!         Ok(vec!["Version1".into()])
//!     }
//! }
//!
//! impl MigrationsHandle for Lists {
//!     fn configuration(self: Arc<Self>) -> Option<Arc<dyn Configuration>> {
//!         Some(self)
//!     }
//! }
//!
//! let check = MigrationStatusCheck::from_handle(Lists)?;
//! let verdict = check.check()?;
//! assert!(verdict.is_failure());
//! assert_eq!(verdict.message(), "Not all migrations applied: Version2");
//! # Ok::<(), migcheck::CheckError>(())
//! ```

pub use migcheck_check::*;
pub use migcheck_core::*;

#[cfg(feature = "files")]
pub use migcheck_loader::{FileMetadataStorage, FileProject, FileRepository};
