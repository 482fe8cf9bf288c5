use std::path::{Component, Path, PathBuf};

/// Directory names that are never entered, wherever they appear in a path.
/// These hold OS bookkeeping (Spotlight index, trash, restore points) whose
/// contents look like junk but must be left alone.
pub const PROTECTED_NAMES: &[&str] = &[
    ".Spotlight-V100",
    ".fseventsd",
    ".Trash",
    ".Trashes",
    "$RECYCLE.BIN",
    "System Volume Information",
];

/// System locations that must never be cleaned as a whole.
/// Matched exactly, so their subdirectories are not covered by this list.
#[cfg(not(windows))]
pub const RESERVED_PATHS: &[&str] = &[
    "/",
    "/System",
    "/Library",
    "/Applications",
    "/usr",
    "/bin",
    "/sbin",
    "/etc",
    "/var",
    "/private",
    "/opt",
    "/dev",
    "/proc",
    "/sys",
    "/boot",
];

#[cfg(windows)]
pub const RESERVED_PATHS: &[&str] = &[
    "C:\\",
    "C:\\Windows",
    "C:\\Program Files",
    "C:\\Program Files (x86)",
];

/// Decides whether a directory may be entered and cleaned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedPathGuard {
    names: Vec<String>,
    reserved: Vec<PathBuf>,
}

impl ProtectedPathGuard {
    pub fn new<N, R>(names: N, reserved: R) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<PathBuf>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            reserved: reserved.into_iter().map(Into::into).collect(),
        }
    }

    /// True if any component of `dir` is a protected name, or `dir` is
    /// itself a reserved system location.
    pub fn is_protected(&self, dir: &Path) -> bool {
        if self.reserved.iter().any(|r| r.as_path() == dir) {
            return true;
        }

        dir.components().any(|c| match c {
            Component::Normal(name) => {
                let name = name.to_string_lossy();
                self.names.iter().any(|n| n.as_str() == name.as_ref())
            }
            _ => false,
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn reserved(&self) -> &[PathBuf] {
        &self.reserved
    }
}

impl Default for ProtectedPathGuard {
    fn default() -> Self {
        Self::new(PROTECTED_NAMES.iter().copied(), RESERVED_PATHS.iter().copied())
    }
}
