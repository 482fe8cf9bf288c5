use super::report::Outcome;
use crate::common::fs::FileSystem;
use crate::common::permissions;
use crate::common::safety::ProtectedPathGuard;
use crate::scanner::walker::Candidate;

/// Removal mode determines whether files are actually touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalMode {
    /// Delete the file
    #[default]
    Delete,
    /// Show what would be done without doing it
    DryRun,
}

impl std::fmt::Display for RemovalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemovalMode::Delete => write!(f, "delete"),
            RemovalMode::DryRun => write!(f, "dry_run"),
        }
    }
}

/// Deletes single matched files, turning every failure into an [`Outcome`]
pub struct Remover<'a, F: FileSystem> {
    fs: &'a F,
    guard: &'a ProtectedPathGuard,
    mode: RemovalMode,
}

impl<'a, F: FileSystem> Remover<'a, F> {
    pub fn new(fs: &'a F, guard: &'a ProtectedPathGuard, mode: RemovalMode) -> Self {
        Self { fs, guard, mode }
    }

    pub fn remove(&self, candidate: &Candidate) -> Outcome {
        // The walker already pruned protected trees; checked again in case
        // the candidate came from somewhere else.
        if self.guard.is_protected(&candidate.directory) {
            tracing::debug!("Not removing {} (protected)", candidate.path.display());
            return Outcome::SkippedProtected {
                path: candidate.path.clone(),
            };
        }

        if self.mode == RemovalMode::DryRun {
            return Outcome::WouldDelete {
                path: candidate.path.clone(),
                size_bytes: candidate.size_bytes,
            };
        }

        match self.fs.remove_file(&candidate.path) {
            Ok(()) => {
                tracing::debug!("Removed {}", candidate.path.display());
                Outcome::Deleted {
                    path: candidate.path.clone(),
                    size_bytes: candidate.size_bytes,
                }
            }
            Err(e) => {
                tracing::warn!("Failed to remove {}: {}", candidate.path.display(), e);
                Outcome::Failed {
                    path: candidate.path.clone(),
                    reason: permissions::describe_io_error(&e),
                }
            }
        }
    }
}
