use clap::Parser;
use std::path::PathBuf;

use crate::config::{Language, ProbeBackend, Settings};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Build markdown watch-progress checklists for folders of video lessons",
    long_about = None
)]
pub struct Cli {
    /// Root folder of the course tree. Prompted for when omitted.
    pub root: Option<PathBuf>,

    /// Config file to load instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Language for report labels and messages
    #[arg(long = "lang", value_enum)]
    pub language: Option<Language>,

    /// How lesson durations are measured
    #[arg(long, value_enum)]
    pub probe: Option<ProbeBackend>,

    /// Seed for the header emoji/tag picks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Compute everything but write no files
    #[arg(long)]
    pub dry_run: bool,

    /// Do not write the top-level index
    #[arg(long)]
    pub no_index: bool,

    /// Log per-lesson details
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    pub print_default_config: bool,
}

impl Cli {
    /// Layer command-line overrides on top of loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(language) = self.language {
            settings.report.language = language;
        }
        if let Some(backend) = self.probe {
            settings.probe.backend = backend;
        }
        if let Some(seed) = self.seed {
            settings.report.seed = Some(seed);
            settings.report.randomize = true;
        }
    }
}
