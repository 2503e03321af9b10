use std::fs;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn walks_directories_for_php_sources() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("src/sub")).unwrap();
    fs::create_dir_all(root.join("vendor/lib")).unwrap();
    fs::create_dir_all(root.join(".git")).unwrap();
    for file in [
        "src/b.php",
        "src/a.inc",
        "src/sub/c.PHP",
        "src/readme.md",
        "vendor/lib/skip.php",
        ".git/skip.php",
        "src/.hidden.php",
    ] {
        fs::write(root.join(file), "<?php\n").unwrap();
    }

    let found = discover(&[root.to_path_buf()]);
    let relative: Vec<_> = found
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(relative, vec!["src/a.inc", "src/b.php", "src/sub/c.PHP"]);
}

#[test]
fn named_files_are_kept_in_order() {
    let paths = vec![PathBuf::from("z.txt"), PathBuf::from("missing.php")];
    assert_eq!(discover(&paths), paths);
}
