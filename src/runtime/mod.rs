use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;

use crate::config::Settings;
use crate::probe;
use crate::report::{Decorator, Labels};

mod cli;
mod pipeline;
mod settings;

pub use cli::Cli;
pub use pipeline::{Options, generate};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

/// Ask for the root folder on stdin. `None` when nothing was entered.
fn prompt_root(labels: &Labels) -> io::Result<Option<PathBuf>> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", labels.prompt_root)?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    // Paths dragged into a terminal often arrive quoted.
    let answer = line.trim().trim_matches(|c: char| c == '"' || c == '\'');
    Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.print_default_config {
        print!("{}", Settings::default().to_toml()?);
        return Ok(());
    }

    let mut settings = settings::load_settings(cli.config.as_deref())?;
    cli.apply(&mut settings);
    let labels = Labels::for_language(settings.report.language);

    let root = match cli.root.clone() {
        Some(root) => root,
        None => match prompt_root(labels)? {
            Some(root) => root,
            None => {
                println!("{}", labels.no_videos);
                return Ok(());
            }
        },
    };

    if !root.is_dir() {
        println!("{}", labels.missing_root(&root));
        return Ok(());
    }
    // Absolute paths give working file:// links.
    let root = root.canonicalize().unwrap_or(root);

    let probe = probe::from_settings(&settings.probe);
    let mut decorator = Decorator::from_settings(&settings.report);
    let opts = Options {
        dry_run: cli.dry_run,
        skip_index: cli.no_index,
    };

    let summary = generate(
        &root,
        &settings,
        probe.as_ref(),
        &mut decorator,
        chrono::Local::now().naive_local(),
        opts,
    )?;

    if summary.reports.is_empty() {
        println!("{}", labels.no_videos);
        return Ok(());
    }
    if cli.dry_run {
        log::info!("dry run: no files were written");
    }
    println!("{}", labels.dashboards_written(summary.reports.len()));
    if let Some(index) = &summary.index {
        println!("{}", labels.index_written(index));
    }

    Ok(())
}
