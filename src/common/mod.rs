pub mod config;
pub mod errors;
pub mod format;
pub mod fs;
pub mod permissions;
pub mod safety;
