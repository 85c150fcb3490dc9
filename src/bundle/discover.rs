use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use walkdir::WalkDir;

use crate::config::CollectConfig;
use crate::errors::{StyleKitError, StyleKitResult};

/// Finds the files to bundle.
///
/// Files directly under `root` come first, then the contents of each
/// recursive directory in configured order. Each group is sorted so the
/// bundle is stable across platforms. The bundle output file is never
/// returned, even when its extension matches.
pub fn discover_files(config: &CollectConfig) -> StyleKitResult<Vec<PathBuf>> {
    let root = &config.root;
    if !root.is_dir() {
        return Err(walk_error(root, "not a directory"));
    }

    let output = comparable(&config.output_path);
    let keep = |path: &Path| -> bool {
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .map_or(false, |name| config.matches_extension(name));
        matches && comparable(path) != output
    };

    let mut files = top_level_files(root, &keep)?;

    for dir in &config.recursive_dirs {
        let dir = root.join(dir);
        if !dir.is_dir() {
            debug!("skipping missing directory {}", dir.display());
            continue;
        }
        files.extend(walk_files(&dir, &keep)?);
    }

    debug!("discovered {} files under {}", files.len(), root.display());
    Ok(files)
}

fn top_level_files(root: &Path, keep: &dyn Fn(&Path) -> bool) -> StyleKitResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if is_file(entry.path()) && keep(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn walk_files(dir: &Path, keep: &dyn Fn(&Path) -> bool) -> StyleKitResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        if is_file(entry.path()) && keep(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Follows symlinks, so a link to a matching file is collected under the
/// link's own name. Broken links are skipped.
fn is_file(path: &Path) -> bool {
    path.is_file()
}

/// Absolute form of `path` when it exists, the path itself otherwise.
fn comparable(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn walk_error(root: &Path, message: impl ToString) -> StyleKitError {
    StyleKitError::Walk {
        root: root.to_path_buf(),
        message: message.to_string(),
    }
}
