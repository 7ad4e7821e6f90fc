//! Post-download rename pass: directory snapshots and collision-free targets.
//!
//! The downloader names files after the video title; this pass diffs the
//! output directory against a pre-download snapshot and rewrites any new
//! file whose stem the sanitizer changes. A failed rename keeps the
//! original name with no user-visible error.

use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::sanitize::sanitize_stem;

/// File names currently present in `dir` (non-recursive).
/// A missing or unreadable directory snapshots as empty.
pub fn snapshot_dir(dir: &Path) -> HashSet<OsString> {
    let mut names = HashSet::new();
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            names.insert(entry.file_name());
        }
    }
    names
}

/// First free `stem.ext`, `stem (1).ext`, `stem (2).ext`, … path in `dir`
/// (smallest positive counter).
pub fn unique_target_path(dir: &Path, stem: &str, ext: Option<&str>) -> PathBuf {
    let file_name = |stem: &str| match ext {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem.to_string(),
    };

    let mut candidate = dir.join(file_name(stem));
    let mut counter = 1u32;
    while candidate.exists() {
        candidate = dir.join(file_name(&format!("{stem} ({counter})")));
        counter += 1;
    }
    candidate
}

/// Sanitizes the stems of files in `dir` that are absent from the `before`
/// snapshot. Files whose stem is already safe are left untouched; rename
/// failures keep the original name. Returns the final path of every new
/// file, in name order.
pub fn rename_new_files(dir: &Path, before: &HashSet<OsString>) -> Vec<PathBuf> {
    let after = snapshot_dir(dir);
    let mut fresh: Vec<&OsString> = after.difference(before).collect();
    fresh.sort();

    let mut finals = Vec::with_capacity(fresh.len());
    for name in fresh {
        let path = dir.join(name);
        let stem = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem,
            None => {
                finals.push(path);
                continue;
            }
        };
        let ext = path.extension().and_then(|e| e.to_str());

        let safe = sanitize_stem(stem);
        if safe == stem {
            finals.push(path);
            continue;
        }

        let target = unique_target_path(dir, &safe, ext);
        match fs::rename(&path, &target) {
            Ok(()) => {
                tracing::debug!("renamed {} -> {}", path.display(), target.display());
                finals.push(target);
            }
            Err(err) => {
                tracing::debug!("rename of {} failed: {}", path.display(), err);
                finals.push(path);
            }
        }
    }
    finals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn snapshot_of_missing_dir_is_empty() {
        assert!(snapshot_dir(Path::new("/nonexistent/ytpick-test")).is_empty());
    }

    #[test]
    fn unique_target_prefers_the_plain_name() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            unique_target_path(dir.path(), "clip", Some("mp4")),
            dir.path().join("clip.mp4")
        );
    }

    #[test]
    fn unique_target_counts_past_occupied_names() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("clip.mp4"));
        assert_eq!(
            unique_target_path(dir.path(), "clip", Some("mp4")),
            dir.path().join("clip (1).mp4")
        );

        touch(&dir.path().join("clip (1).mp4"));
        assert_eq!(
            unique_target_path(dir.path(), "clip", Some("mp4")),
            dir.path().join("clip (2).mp4")
        );
    }

    #[test]
    fn unique_target_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("clip"));
        assert_eq!(unique_target_path(dir.path(), "clip", None), dir.path().join("clip (1)"));
    }

    #[test]
    fn renames_only_new_unsafe_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("old*file.mp4"));
        let before = snapshot_dir(dir.path());

        touch(&dir.path().join("new*file.mp4"));
        touch(&dir.path().join("safe name.mp4"));

        let finals = rename_new_files(dir.path(), &before);

        assert!(dir.path().join("newfile.mp4").exists());
        assert!(!dir.path().join("new*file.mp4").exists());
        // pre-existing files are not touched, already-safe stems keep their name
        assert!(dir.path().join("old*file.mp4").exists());
        assert!(dir.path().join("safe name.mp4").exists());
        assert_eq!(finals.len(), 2);
    }

    #[test]
    fn rename_collision_picks_first_free_counter() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("clip.mp4"));
        touch(&dir.path().join("clip (1).mp4"));
        let before = snapshot_dir(dir.path());

        touch(&dir.path().join("clip?.mp4"));
        rename_new_files(dir.path(), &before);

        assert!(dir.path().join("clip (2).mp4").exists());
        assert!(!dir.path().join("clip?.mp4").exists());
    }
}
