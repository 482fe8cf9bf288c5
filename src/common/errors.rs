use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a run before any directory is walked.
///
/// Everything that goes wrong once traversal has started (unreadable
/// subdirectories, files that refuse to be deleted) is recorded in the
/// [`Report`](crate::cleaner::Report) instead.
#[derive(Debug, Error)]
pub enum PreconditionError {
    /// The root path does not exist
    #[error("path does not exist: '{}'", path.display())]
    NotFound { path: PathBuf },

    /// The root path exists but is not a directory
    #[error("path is not a directory: '{}'", path.display())]
    NotADirectory { path: PathBuf },

    /// The root directory cannot be opened or listed
    #[error("cannot access '{}': {source}", path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The root is a protected location and will never be cleaned
    #[error("refusing to clean protected path: '{}'", path.display())]
    Protected { path: PathBuf },
}

impl PreconditionError {
    /// The path the failed check was made against
    pub fn path(&self) -> &std::path::Path {
        match self {
            PreconditionError::NotFound { path }
            | PreconditionError::NotADirectory { path }
            | PreconditionError::Inaccessible { path, .. }
            | PreconditionError::Protected { path } => path,
        }
    }
}
