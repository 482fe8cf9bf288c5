//! The filesystem operations the walker and remover need, behind a trait so
//! the engine can be driven against an in-memory tree in tests.

use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What kind of thing a directory entry is, without following symlinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    /// Sockets, FIFOs, devices
    Other,
}

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
    /// Logical size in bytes, 0 for anything that is not a regular file
    pub len: u64,
}

pub trait FileSystem {
    /// List the direct children of `dir`. Symlinks are reported as
    /// [`EntryKind::Symlink`] and never resolved.
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>>;

    /// Kind of `path`, following symlinks
    fn kind(&self, path: &Path) -> io::Result<EntryKind>;

    /// Absolute form of `path` with symlinks and `..` resolved
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Remove a single regular file. Never removes directories.
    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(e) => e,
                // Depth 0 means the directory itself could not be opened
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
            };

            let file_type = entry.file_type();
            let kind = if file_type.is_symlink() {
                EntryKind::Symlink
            } else if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };

            let len = match kind {
                EntryKind::File => entry.metadata().map(|m| m.len()).unwrap_or(0),
                _ => 0,
            };

            entries.push(FsEntry {
                path: entry.path().to_path_buf(),
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
                len,
            });
        }

        Ok(entries)
    }

    fn kind(&self, path: &Path) -> io::Result<EntryKind> {
        let metadata = std::fs::metadata(path)?;
        Ok(if metadata.is_dir() {
            EntryKind::Dir
        } else if metadata.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        })
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Node {
        File(u64),
        Dir,
        Symlink,
    }

    /// In-memory tree with absolute paths. Directories can be marked
    /// unreadable and files undeletable to simulate permission errors.
    #[derive(Debug, Default)]
    pub struct MemoryFs {
        nodes: RefCell<BTreeMap<PathBuf, Node>>,
        unreadable: BTreeSet<PathBuf>,
        undeletable: BTreeSet<PathBuf>,
        removals: RefCell<Vec<PathBuf>>,
    }

    impl MemoryFs {
        pub fn new() -> Self {
            let fs = Self::default();
            fs.nodes.borrow_mut().insert(PathBuf::from("/"), Node::Dir);
            fs
        }

        fn add(&self, path: &str, node: Node) {
            let path = PathBuf::from(path);
            let mut nodes = self.nodes.borrow_mut();
            for ancestor in path.ancestors().skip(1) {
                nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
            }
            nodes.insert(path, node);
        }

        pub fn dir(self, path: &str) -> Self {
            self.add(path, Node::Dir);
            self
        }

        pub fn file(self, path: &str, len: u64) -> Self {
            self.add(path, Node::File(len));
            self
        }

        pub fn symlink(self, path: &str) -> Self {
            self.add(path, Node::Symlink);
            self
        }

        pub fn unreadable(mut self, path: &str) -> Self {
            self.unreadable.insert(PathBuf::from(path));
            self
        }

        pub fn undeletable(mut self, path: &str) -> Self {
            self.undeletable.insert(PathBuf::from(path));
            self
        }

        /// Drop a file behind the walker's back
        pub fn vanish(&self, path: &str) {
            self.nodes.borrow_mut().remove(Path::new(path));
        }

        pub fn exists(&self, path: &str) -> bool {
            self.nodes.borrow().contains_key(Path::new(path))
        }

        pub fn removals(&self) -> Vec<PathBuf> {
            self.removals.borrow().clone()
        }
    }

    impl FileSystem for MemoryFs {
        fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
            match self.nodes.borrow().get(dir) {
                None => return Err(io::Error::from(io::ErrorKind::NotFound)),
                Some(Node::Dir) => {}
                Some(_) => return Err(io::Error::new(io::ErrorKind::Other, "not a directory")),
            }
            if self.unreadable.contains(dir) {
                return Err(io::Error::from(io::ErrorKind::PermissionDenied));
            }

            let entries = self
                .nodes
                .borrow()
                .iter()
                .filter(|(path, _)| path.parent() == Some(dir) && path.as_path() != dir)
                .map(|(path, node)| {
                    let (kind, len) = match node {
                        Node::File(len) => (EntryKind::File, *len),
                        Node::Dir => (EntryKind::Dir, 0),
                        Node::Symlink => (EntryKind::Symlink, 0),
                    };
                    FsEntry {
                        path: path.clone(),
                        name: path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default(),
                        kind,
                        len,
                    }
                })
                .collect();
            Ok(entries)
        }

        fn kind(&self, path: &Path) -> io::Result<EntryKind> {
            match self.nodes.borrow().get(path) {
                Some(Node::Dir) => Ok(EntryKind::Dir),
                Some(Node::File(_)) => Ok(EntryKind::File),
                Some(Node::Symlink) => Ok(EntryKind::Other),
                None => Err(io::Error::from(io::ErrorKind::NotFound)),
            }
        }

        fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
            if self.nodes.borrow().contains_key(path) {
                Ok(path.to_path_buf())
            } else {
                Err(io::Error::from(io::ErrorKind::NotFound))
            }
        }

        fn remove_file(&self, path: &Path) -> io::Result<()> {
            if self.undeletable.contains(path) {
                return Err(io::Error::from(io::ErrorKind::PermissionDenied));
            }
            let mut nodes = self.nodes.borrow_mut();
            match nodes.get(path).copied() {
                Some(Node::File(_)) | Some(Node::Symlink) => {
                    nodes.remove(path);
                    self.removals.borrow_mut().push(path.to_path_buf());
                    Ok(())
                }
                Some(Node::Dir) => Err(io::Error::new(io::ErrorKind::Other, "is a directory")),
                None => Err(io::Error::from(io::ErrorKind::NotFound)),
            }
        }
    }
}
