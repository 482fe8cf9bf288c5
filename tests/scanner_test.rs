use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use cleantmp::common::fs::OsFileSystem;
use cleantmp::common::safety::ProtectedPathGuard;
use cleantmp::scanner::patterns::{builtin_rules, PatternMatcher, Rule};
use cleantmp::scanner::walker::{WalkEvent, Walker};

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"x").unwrap();
}

fn candidate_names(root: &Path, recursive: bool) -> Vec<String> {
    let guard = ProtectedPathGuard::default();
    let walker = Walker::new(&OsFileSystem, &guard, recursive);
    walker
        .walk(root)
        .filter_map(|e| match e {
            WalkEvent::File(c) => Some(
                c.path
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/"),
            ),
            _ => None,
        })
        .collect()
}

// ─── Pattern tests ────────────────────────────────────────────────────────────

#[test]
fn test_each_rule_kind_positive_and_negative() {
    let m = PatternMatcher::default();

    assert!(m.matches(".DS_Store"));
    assert!(!m.matches("DS_Store.txt"));

    assert!(m.matches("notes~"));
    assert!(!m.matches("notes"));

    assert!(m.matches("._cache"));
    assert!(!m.matches("cache._"));

    assert!(m.matches(".file.swp"));
    assert!(m.matches(".file.swx"));
    assert!(!m.matches(".file.sw"));
}

#[test]
fn test_matcher_ignores_ordinary_files() {
    let m = PatternMatcher::default();
    for name in ["notes.txt", "song.mp3", "IMG_0001.JPG", ".bashrc", "Thumbs.db.bak"] {
        assert!(!m.matches(name), "{} should not be junk", name);
    }
}

#[test]
fn test_matcher_fixture_rules() {
    let m = PatternMatcher::new(vec![Rule::exact("junk"), Rule::suffix(".bak")], true);
    assert!(m.matches("junk"));
    assert!(m.matches("old.bak"));
    assert!(!m.matches(".DS_Store"));
    assert_eq!(builtin_rules().len(), 7);
}

// ─── Walker tests ─────────────────────────────────────────────────────────────

#[test]
fn test_walk_real_tree_recursive() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    touch(&root.join("b.txt"));
    touch(&root.join("a.txt"));
    touch(&root.join("sub/c.txt"));
    touch(&root.join("sub/deeper/d.txt"));

    assert_eq!(
        candidate_names(root, true),
        vec!["a.txt", "b.txt", "sub/c.txt", "sub/deeper/d.txt"]
    );
}

#[test]
fn test_walk_real_tree_flat() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    touch(&root.join("top.txt"));
    touch(&root.join("sub/inner.txt"));

    assert_eq!(candidate_names(root, false), vec!["top.txt"]);
}

#[test]
fn test_walk_skips_protected_dirs_in_real_tree() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    touch(&root.join(".Trashes/501/.DS_Store"));
    touch(&root.join("System Volume Information/IndexerVolumeGuid"));
    touch(&root.join("keep/.DS_Store"));

    assert_eq!(candidate_names(root, true), vec!["keep/.DS_Store"]);
}

#[test]
fn test_walk_order_is_stable() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    for name in ["z", "m", "a"] {
        touch(&root.join(name).join("f"));
        touch(&root.join(format!("{}.txt", name)));
    }

    let first = candidate_names(root, true);
    let second = candidate_names(root, true);
    assert_eq!(first, second);
    assert_eq!(first[0], "a.txt");
}

#[cfg(unix)]
#[test]
fn test_walk_does_not_follow_directory_symlinks() {
    let tmp = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    touch(&outside.path().join(".DS_Store"));
    touch(&tmp.path().join("real.txt"));
    std::os::unix::fs::symlink(outside.path(), tmp.path().join("escape")).unwrap();
    // A cycle back to the root
    std::os::unix::fs::symlink(tmp.path(), tmp.path().join("loop")).unwrap();

    assert_eq!(candidate_names(tmp.path(), true), vec!["real.txt"]);
}

#[test]
fn test_walk_reports_entered_dirs() {
    let tmp = TempDir::new().unwrap();
    touch(&tmp.path().join("a/b/f"));

    let guard = ProtectedPathGuard::default();
    let walker = Walker::new(&OsFileSystem, &guard, true);
    let entered: Vec<PathBuf> = walker
        .walk(tmp.path())
        .filter_map(|e| match e {
            WalkEvent::Entered(p) => Some(p),
            _ => None,
        })
        .collect();
    assert_eq!(entered.len(), 3);
    assert_eq!(entered[0], tmp.path());
}
