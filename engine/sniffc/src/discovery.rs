//! Source file discovery.
//!
//! Command-line paths may name files or directories. Directories are walked
//! recursively for `.php` and `.inc` files, skipping hidden entries and
//! dependency directories.

use std::fs;
use std::path::{Path, PathBuf};

const EXTENSIONS: &[&str] = &["php", "inc"];

fn is_source(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)))
}

/// Expand command-line paths into source files.
///
/// Files named directly are kept whatever their extension, in argument
/// order; each directory contributes its files sorted by path. Paths that
/// do not exist are kept too, so reading them reports the error.
pub fn discover(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            discover_recursive(path, &mut found);
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    files
}

fn discover_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        if path.is_dir() {
            if matches!(name, "vendor" | "node_modules") {
                continue;
            }
            discover_recursive(&path, files);
        } else if is_source(&path) {
            files.push(path);
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
