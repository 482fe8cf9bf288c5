use serde::Serialize;
use std::path::PathBuf;

/// Terminal result of processing one matched candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Deleted { path: PathBuf, size_bytes: u64 },
    /// Dry run: the file matched and would have been removed
    WouldDelete { path: PathBuf, size_bytes: u64 },
    SkippedProtected { path: PathBuf },
    Failed { path: PathBuf, reason: String },
}

impl Outcome {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Outcome::Deleted { path, .. }
            | Outcome::WouldDelete { path, .. }
            | Outcome::SkippedProtected { path }
            | Outcome::Failed { path, .. } => path,
        }
    }
}

/// A path paired with why it could not be processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of one run. Read-only once returned by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub root: PathBuf,
    pub recursive: bool,
    pub dry_run: bool,
    /// Every regular file seen, junk or not
    pub files_examined: usize,
    pub dirs_examined: usize,
    /// Subdirectories not entered because they are protected
    pub dirs_protected: Vec<PathBuf>,
    /// Directories that could not be listed
    pub dirs_unreadable: Vec<Failure>,
    pub deleted: Vec<PathBuf>,
    pub would_delete: Vec<PathBuf>,
    pub skipped_protected: Vec<PathBuf>,
    /// Deletion failures, in the order they happened
    pub failures: Vec<Failure>,
    pub bytes_freed: u64,
    /// Set when the run was stopped before the walk finished
    pub cancelled: bool,
}

impl Report {
    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped_protected.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    /// Candidates that matched a rule and produced an outcome
    pub fn matched_count(&self) -> usize {
        self.deleted.len() + self.would_delete.len() + self.skipped_protected.len() + self.failures.len()
    }

    pub fn total_examined(&self) -> usize {
        self.files_examined
    }

    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty() || !self.dirs_unreadable.is_empty()
    }
}

/// Accumulates outcomes and traversal statistics for one run
#[derive(Debug, Default)]
pub struct Reporter {
    report: Report,
}

impl Reporter {
    pub fn new(root: PathBuf, recursive: bool, dry_run: bool) -> Self {
        Self {
            report: Report {
                root,
                recursive,
                dry_run,
                ..Report::default()
            },
        }
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Deleted { path, size_bytes } => {
                self.report.bytes_freed += size_bytes;
                self.report.deleted.push(path);
            }
            Outcome::WouldDelete { path, size_bytes } => {
                self.report.bytes_freed += size_bytes;
                self.report.would_delete.push(path);
            }
            Outcome::SkippedProtected { path } => self.report.skipped_protected.push(path),
            Outcome::Failed { path, reason } => self.report.failures.push(Failure { path, reason }),
        }
    }

    pub fn file_examined(&mut self) {
        self.report.files_examined += 1;
    }

    pub fn dir_examined(&mut self) {
        self.report.dirs_examined += 1;
    }

    pub fn dir_protected(&mut self, path: PathBuf) {
        self.report.dirs_protected.push(path);
    }

    pub fn dir_unreadable(&mut self, path: PathBuf, reason: String) {
        self.report.dirs_unreadable.push(Failure { path, reason });
    }

    pub fn cancelled(&mut self) {
        self.report.cancelled = true;
    }

    /// Snapshot of everything recorded so far. Calling it twice yields the
    /// same report.
    pub fn summary(&self) -> Report {
        self.report.clone()
    }
}
