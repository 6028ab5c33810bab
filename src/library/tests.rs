use super::scan_folders;
use crate::config::LibrarySettings;
use std::fs;
use tempfile::tempdir;

fn names(folders: &[super::MediaFolder]) -> Vec<String> {
    folders.iter().map(|f| f.name.clone()).collect()
}

#[test]
fn scan_folders_walks_sorted_and_keeps_empty_folders() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("b-course")).unwrap();
    fs::create_dir_all(root.join("a-course").join("part 2")).unwrap();
    fs::write(root.join("b-course").join("01.mp4"), b"x").unwrap();
    fs::write(root.join("a-course").join("part 2").join("intro.mkv"), b"x").unwrap();
    fs::write(root.join("a-course").join("readme.txt"), b"x").unwrap();

    let folders = scan_folders(root, &LibrarySettings::default());

    let root_name = root.file_name().unwrap().to_string_lossy().into_owned();
    assert_eq!(
        names(&folders),
        vec![root_name, "a-course".into(), "part 2".into(), "b-course".into()]
    );
    assert!(folders[0].files.is_empty());
    assert!(folders[1].files.is_empty());
    assert_eq!(folders[2].files.iter().next().unwrap(), "intro.mkv");
    assert_eq!(folders[3].files.len(), 1);
    assert_eq!(folders[3].path, root.join("b-course"));
}

#[test]
fn scan_folders_skips_hidden_by_default() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join(".obsidian")).unwrap();
    fs::write(root.join(".obsidian").join("a.mp4"), b"x").unwrap();
    fs::write(root.join(".hidden.mp4"), b"x").unwrap();
    fs::write(root.join("visible.mp4"), b"x").unwrap();

    let folders = scan_folders(root, &LibrarySettings::default());
    assert_eq!(folders.len(), 1);
    assert_eq!(
        folders[0].files.iter().cloned().collect::<Vec<_>>(),
        vec!["visible.mp4".to_string()]
    );

    let settings = LibrarySettings {
        include_hidden: true,
        ..LibrarySettings::default()
    };
    let folders = scan_folders(root, &settings);
    assert_eq!(folders.len(), 2);
    assert_eq!(folders[0].files.len(), 2);
}

#[test]
fn scan_folders_respects_max_depth() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let d2 = root.join("d1").join("d2");
    fs::create_dir_all(&d2).unwrap();
    fs::write(d2.join("deep.mp4"), b"x").unwrap();

    let settings = LibrarySettings {
        max_depth: Some(1),
        ..LibrarySettings::default()
    };
    let folders = scan_folders(root, &settings);
    let found = names(&folders);
    assert!(found.contains(&"d1".to_string()));
    assert!(!found.contains(&"d2".to_string()));
}

#[test]
fn scan_folders_on_missing_root_yields_nothing() {
    let dir = tempdir().unwrap();
    let folders = scan_folders(&dir.path().join("missing"), &LibrarySettings::default());
    assert!(folders.is_empty());
}

#[cfg(unix)]
#[test]
fn scan_folders_follows_symlinks_only_when_asked() {
    let dir = tempdir().unwrap();
    let outside = tempdir().unwrap();
    fs::write(outside.path().join("linked.mp4"), b"x").unwrap();
    std::os::unix::fs::symlink(outside.path(), dir.path().join("shared")).unwrap();

    let folders = scan_folders(dir.path(), &LibrarySettings::default());
    assert!(!names(&folders).contains(&"shared".to_string()));

    let settings = LibrarySettings {
        follow_links: true,
        ..LibrarySettings::default()
    };
    let folders = scan_folders(dir.path(), &settings);
    let shared = folders.iter().find(|f| f.name == "shared").unwrap();
    assert!(shared.files.contains("linked.mp4"));
}
