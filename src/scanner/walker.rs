use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::common::fs::{EntryKind, FileSystem};
use crate::common::permissions;
use crate::common::safety::ProtectedPathGuard;

/// A regular file found during traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    /// Directory the file was listed from
    pub directory: PathBuf,
    pub name: String,
    pub size_bytes: u64,
}

/// Everything a walk reports, in traversal order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEvent {
    /// A directory was listed successfully
    Entered(PathBuf),
    /// A regular file
    File(Candidate),
    /// A subdirectory that was not descended into because it is protected
    Protected(PathBuf),
    /// A directory that could not be listed; the walk carries on
    Unreadable { path: PathBuf, reason: String },
}

/// Traverses a directory tree depth-first. Each call to [`Walker::walk`]
/// starts a fresh, independent traversal.
pub struct Walker<'a, F: FileSystem> {
    fs: &'a F,
    guard: &'a ProtectedPathGuard,
    recursive: bool,
}

impl<'a, F: FileSystem> Walker<'a, F> {
    pub fn new(fs: &'a F, guard: &'a ProtectedPathGuard, recursive: bool) -> Self {
        Self {
            fs,
            guard,
            recursive,
        }
    }

    pub fn walk(&self, root: &Path) -> Walk<'a, F> {
        Walk {
            fs: self.fs,
            guard: self.guard,
            recursive: self.recursive,
            frontier: vec![root.to_path_buf()],
            pending: VecDeque::new(),
        }
    }
}

/// Lazy depth-first traversal. Directories are listed one at a time as the
/// caller pulls events; nothing below the current frontier is read ahead.
///
/// Within a directory, files come in lexical order, then subdirectories are
/// visited in lexical order. Symlinks are never followed.
pub struct Walk<'a, F: FileSystem> {
    fs: &'a F,
    guard: &'a ProtectedPathGuard,
    recursive: bool,
    frontier: Vec<PathBuf>,
    pending: VecDeque<WalkEvent>,
}

impl<F: FileSystem> Walk<'_, F> {
    fn expand(&mut self, dir: PathBuf) {
        let mut entries = match self.fs.read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Cannot read directory {}: {}", dir.display(), e);
                self.pending.push_back(WalkEvent::Unreadable {
                    reason: permissions::describe_io_error(&e),
                    path: dir,
                });
                return;
            }
        };
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        self.pending.push_back(WalkEvent::Entered(dir.clone()));

        let mut subdirs = Vec::new();
        for entry in entries {
            match entry.kind {
                EntryKind::File => self.pending.push_back(WalkEvent::File(Candidate {
                    path: entry.path,
                    directory: dir.clone(),
                    name: entry.name,
                    size_bytes: entry.len,
                })),
                EntryKind::Dir if self.recursive => {
                    if self.guard.is_protected(&entry.path) {
                        tracing::debug!("Skipping protected directory {}", entry.path.display());
                        self.pending.push_back(WalkEvent::Protected(entry.path));
                    } else {
                        subdirs.push(entry.path);
                    }
                }
                // Directories in a flat walk, symlinks, sockets, devices
                _ => {}
            }
        }

        // Stack: push in reverse so the lexically first subdirectory pops next
        self.frontier.extend(subdirs.into_iter().rev());
    }
}

impl<F: FileSystem> Iterator for Walk<'_, F> {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<WalkEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            let dir = self.frontier.pop()?;
            self.expand(dir);
        }
    }
}
