use std::io::ErrorKind;
use std::path::Path;

/// Turn an I/O error from a delete or directory listing into a short,
/// human-readable reason for the report.
pub fn describe_io_error(err: &std::io::Error) -> String {
    match err.kind() {
        ErrorKind::PermissionDenied => "permission denied".to_string(),
        ErrorKind::NotFound => "no longer exists (removed concurrently)".to_string(),
        _ => {
            let msg = err.to_string();
            if msg.is_empty() {
                format!("{:?}", err.kind())
            } else {
                msg
            }
        }
    }
}

/// Get a helpful message for permission issues
pub fn permission_hint(path: &Path) -> String {
    format!(
        "Check the permissions of '{}' and its parent directory, or run as its owner.",
        path.display()
    )
}

/// Whether an error is worth pairing with [`permission_hint`]
pub fn is_permission_error(err: &std::io::Error) -> bool {
    err.kind() == ErrorKind::PermissionDenied
}
