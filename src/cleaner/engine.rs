use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::remover::{RemovalMode, Remover};
use super::report::{Report, Reporter};
use crate::common::config::Config;
use crate::common::errors::PreconditionError;
use crate::common::fs::{EntryKind, FileSystem, OsFileSystem};
use crate::common::safety::ProtectedPathGuard;
use crate::scanner::patterns::PatternMatcher;
use crate::scanner::walker::{WalkEvent, Walker};

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Walking,
    Finished,
}

/// Shared stop request, checked between candidates
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Per-run switches
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub recursive: bool,
    pub dry_run: bool,
    pub show_progress: bool,
    pub cancel: Option<CancelFlag>,
}

impl RunOptions {
    pub fn recursive(recursive: bool) -> Self {
        Self {
            recursive,
            ..Self::default()
        }
    }
}

/// Walks a root, matches filenames, removes junk and reports.
///
/// The engine keeps no state between runs: every call to [`Engine::run`]
/// starts from a fresh [`Reporter`].
pub struct Engine<F: FileSystem = OsFileSystem> {
    fs: F,
    matcher: PatternMatcher,
    guard: ProtectedPathGuard,
    state: EngineState,
}

impl Engine<OsFileSystem> {
    pub fn new(config: &Config) -> Self {
        Self::with_fs(OsFileSystem, config)
    }
}

impl<F: FileSystem> Engine<F> {
    pub fn with_fs(fs: F, config: &Config) -> Self {
        Self {
            fs,
            matcher: config.matcher(),
            guard: config.guard(),
            state: EngineState::Idle,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Clean `root`. Fails only if `root` is unusable; everything that goes
    /// wrong after that ends up in the returned report.
    pub fn run(&mut self, root: &Path, options: &RunOptions) -> Result<Report, PreconditionError> {
        self.state = EngineState::Idle;
        let root = self.check_root(root)?;

        let mode = if options.dry_run {
            RemovalMode::DryRun
        } else {
            RemovalMode::Delete
        };
        tracing::info!(
            "Cleaning {} (recursive: {}, mode: {})",
            root.display(),
            options.recursive,
            mode
        );

        let pb = if options.show_progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::with_template("{spinner:.cyan} {pos} files examined {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            Some(pb)
        } else {
            None
        };

        self.state = EngineState::Walking;
        let mut reporter = Reporter::new(root.clone(), options.recursive, options.dry_run);
        let walker = Walker::new(&self.fs, &self.guard, options.recursive);
        let remover = Remover::new(&self.fs, &self.guard, mode);

        for event in walker.walk(&root) {
            if options.cancel.as_ref().is_some_and(CancelFlag::is_cancelled) {
                tracing::info!("Run cancelled");
                reporter.cancelled();
                break;
            }

            match event {
                WalkEvent::Entered(_) => reporter.dir_examined(),
                WalkEvent::Protected(path) => reporter.dir_protected(path),
                WalkEvent::Unreadable { path, reason } => reporter.dir_unreadable(path, reason),
                WalkEvent::File(candidate) => {
                    reporter.file_examined();
                    if let Some(ref pb) = pb {
                        pb.inc(1);
                    }

                    if !self.matcher.matches(&candidate.name) {
                        continue;
                    }
                    reporter.record(remover.remove(&candidate));
                }
            }
        }

        if let Some(ref pb) = pb {
            pb.finish_and_clear();
        }

        self.state = EngineState::Finished;

        let report = reporter.summary();
        tracing::info!(
            "Finished {}: {} examined, {} deleted, {} failed",
            root.display(),
            report.files_examined,
            report.deleted_count(),
            report.failed_count()
        );
        Ok(report)
    }

    /// Resolve `root` and make sure it is a readable, unprotected directory
    fn check_root(&self, root: &Path) -> Result<PathBuf, PreconditionError> {
        // Reserved entries may themselves be symlinks (/bin on merged-usr
        // systems, /etc on macOS), so the path as given is checked too.
        if self.guard.is_protected(root) {
            return Err(PreconditionError::Protected {
                path: root.to_path_buf(),
            });
        }

        match self.fs.kind(root) {
            Ok(EntryKind::Dir) => {}
            Ok(_) => {
                return Err(PreconditionError::NotADirectory {
                    path: root.to_path_buf(),
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PreconditionError::NotFound {
                    path: root.to_path_buf(),
                })
            }
            Err(e) => {
                return Err(PreconditionError::Inaccessible {
                    path: root.to_path_buf(),
                    source: e,
                })
            }
        }

        let resolved = self
            .fs
            .canonicalize(root)
            .map_err(|e| PreconditionError::Inaccessible {
                path: root.to_path_buf(),
                source: e,
            })?;

        if self.guard.is_protected(&resolved) {
            return Err(PreconditionError::Protected { path: resolved });
        }

        self.fs
            .read_dir(&resolved)
            .map_err(|e| PreconditionError::Inaccessible {
                path: resolved.clone(),
                source: e,
            })?;

        Ok(resolved)
    }
}

/// Clean `root` with the built-in rules
pub fn run(root: impl AsRef<Path>, recursive: bool) -> Result<Report, PreconditionError> {
    Engine::new(&Config::default()).run(root.as_ref(), &RunOptions::recursive(recursive))
}
