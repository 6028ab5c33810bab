use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::MediaFolder;

fn normalized_extensions(settings: &LibrarySettings) -> Vec<String> {
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn is_media_file(path: &Path, exts: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn folder_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| path.display().to_string())
}

/// List the media files directly inside `dir` (non-recursive).
fn list_media(dir: &Path, exts: &[String], settings: &LibrarySettings) -> BTreeSet<String> {
    let mut files = BTreeSet::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("cannot list {}: {e}", dir.display());
            return files;
        }
    };

    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        if !path.is_file()
            || (!settings.include_hidden && is_hidden(&path))
            || !is_media_file(&path, exts)
        {
            continue;
        }
        // Item names are the merge key and get joined back onto the folder
        // path, so a lossy name would point at a file that does not exist.
        match entry.file_name().into_string() {
            Ok(name) => {
                files.insert(name);
            }
            Err(raw) => log::warn!("skipping non UTF-8 file name {raw:?} in {}", dir.display()),
        }
    }

    files
}

/// Walk `root` and return every folder (root included) in sorted depth-first
/// order, each with the media files it directly contains.
///
/// Folders without media are still returned with an empty file set.
pub fn scan_folders(root: &Path, settings: &LibrarySettings) -> Vec<MediaFolder> {
    let exts = normalized_extensions(settings);
    let mut folders = Vec::new();

    let mut walker = WalkDir::new(root)
        .follow_links(settings.follow_links)
        .sort_by_file_name();
    if let Some(d) = settings.max_depth {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let files = list_media(path, &exts, settings);
        log::debug!("{}: {} media file(s)", path.display(), files.len());

        folders.push(MediaFolder {
            path: path.to_path_buf(),
            name: folder_name(path),
            files,
        });
    }

    folders
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn is_media_file_matches_configured_extensions_case_insensitive() {
        let exts = normalized_extensions(&LibrarySettings::default());
        assert!(is_media_file(Path::new("/tmp/a.mp4"), &exts));
        assert!(is_media_file(Path::new("/tmp/a.MKV"), &exts));
        assert!(is_media_file(Path::new("/tmp/a.Mpeg"), &exts));
        assert!(is_media_file(Path::new("/tmp/a.wmv"), &exts));
        assert!(!is_media_file(Path::new("/tmp/a.mp3"), &exts));
        assert!(!is_media_file(Path::new("/tmp/checklist.md"), &exts));
        assert!(!is_media_file(Path::new("/tmp/mp4"), &exts));
    }

    #[test]
    fn normalized_extensions_strip_dots_and_blanks() {
        let settings = LibrarySettings {
            extensions: vec![".MP4".into(), " mkv ".into(), "".into()],
            ..LibrarySettings::default()
        };
        assert_eq!(normalized_extensions(&settings), vec!["mp4", "mkv"]);
    }

    #[test]
    fn list_media_is_not_recursive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.mp4"), b"x").unwrap();
        fs::write(dir.path().join("a.MOV"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        fs::create_dir(dir.path().join("nested.mp4")).unwrap();
        fs::write(dir.path().join("nested.mp4").join("c.mp4"), b"x").unwrap();

        let settings = LibrarySettings::default();
        let exts = normalized_extensions(&settings);
        let files: Vec<String> = list_media(dir.path(), &exts, &settings).into_iter().collect();
        assert_eq!(files, vec!["a.MOV".to_string(), "b.mp4".to_string()]);
    }

    #[test]
    fn folder_name_uses_last_component() {
        assert_eq!(folder_name(Path::new("/courses/Rust 101")), "Rust 101");
        assert_eq!(folder_name(Path::new("/")), "/");
    }
}
