use thiserror::Error;

/// Error raised by a migrations collaborator while listing migrations.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Invalid Argument for DoctrineMigration check.")]
    InvalidArgument,
    #[error(transparent)]
    Source(#[from] SourceError),
}
