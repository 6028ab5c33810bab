use std::collections::BTreeSet;
use std::path::PathBuf;

/// One directory of the course tree and the lesson files directly inside it.
#[derive(Debug, Clone)]
pub struct MediaFolder {
    pub path: PathBuf,
    /// Display name: the directory's own name, or the full path when it has none.
    pub name: String,
    /// Recognized media file names, in codepoint order.
    pub files: BTreeSet<String>,
}
