//! # CleanTMP
//!
//! Removes the junk files that pile up in user folders (music, photos,
//! shared drives): OS metadata such as `.DS_Store` and `Thumbs.db`,
//! AppleDouble `._*` files, editor backups (`*~`) and Vim swap files.
//!
//! - **Fixed rules**: a compiled-in list of exact names, prefixes, suffixes and globs
//! - **Protected folders**: trash, Spotlight and restore-point folders are never entered
//! - **Single pass**: sequential, deterministic traversal with a full report
//!
//! ```no_run
//! let report = cleantmp::cleaner::run("/Volumes/Photos", true)?;
//! println!("{} files deleted", report.deleted_count());
//! # Ok::<(), cleantmp::common::errors::PreconditionError>(())
//! ```

pub mod cleaner;
pub mod cli;
pub mod common;
pub mod scanner;
