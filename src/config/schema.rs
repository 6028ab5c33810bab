use serde::{Deserialize, Serialize};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/coursedash/config.toml` or `~/.config/coursedash/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags
/// 2) Environment variables (prefix `COURSEDASH__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub probe: ProbeSettings,
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as video lessons (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks while walking the course tree.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Optional cap on directory recursion depth (root = 0).
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: ["mp4", "mkv", "avi", "mov", "flv", "webm", "wmv", "mpeg", "mpg"]
                .into_iter()
                .map(String::from)
                .collect(),
            follow_links: false,
            include_hidden: false,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeSettings {
    /// How lesson durations are measured.
    pub backend: ProbeBackend,
    /// Program used by the `ffprobe` backend.
    pub ffprobe_path: String,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            backend: ProbeBackend::Auto,
            ffprobe_path: "ffprobe".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ProbeBackend {
    /// `ffprobe` first, then container metadata.
    Auto,
    Ffprobe,
    #[serde(alias = "lofty")]
    Metadata,
    /// Skip probing; every duration is zero.
    #[serde(alias = "off", alias = "disabled")]
    None,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    #[serde(alias = "english")]
    En,
    #[serde(alias = "persian", alias = "farsi")]
    Fa,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SmartTag {
    /// Substring looked up (case-insensitive) in the lesson file name.
    pub keyword: String,
    pub tag: String,
}

impl SmartTag {
    fn new(keyword: &str, tag: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            tag: tag.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportSettings {
    /// File name of the per-folder checklist.
    pub checklist_file: String,
    /// File name of the top-level index written into the root folder.
    pub index_file: String,
    /// Language used for report labels and console messages.
    pub language: Language,
    /// Header emojis; one is picked per folder.
    pub emojis: Vec<String>,
    /// Header tags; one is picked per folder.
    pub tags: Vec<String>,
    /// Keyword tags appended to matching lessons. First match wins, so order matters.
    pub smart_tags: Vec<SmartTag>,
    /// Pick header decorations at random. When false the first emoji and tag are used.
    pub randomize: bool,
    /// Fixed seed for decoration picks (reproducible output).
    pub seed: Option<u64>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            checklist_file: "checklist.md".to_string(),
            index_file: "Index.md".to_string(),
            language: Language::En,
            emojis: ["🎬", "📺", "🎥", "📚", "📝", "🔥", "🚀", "⭐", "💡", "🎧"]
                .into_iter()
                .map(String::from)
                .collect(),
            tags: ["#lesson", "#chapter", "#study", "#watching", "#learning"]
                .into_iter()
                .map(String::from)
                .collect(),
            smart_tags: vec![
                SmartTag::new("intro", "#beginner"),
                SmartTag::new("project", "#project"),
                SmartTag::new("advanced", "#advanced"),
                SmartTag::new("bonus", "#bonus"),
                SmartTag::new("exercise", "#exercise"),
            ],
            randomize: true,
            seed: None,
        }
    }
}
