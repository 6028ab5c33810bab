//! Per-folder pipeline: read the old checklist, merge, render, write.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use rand::Rng;

use crate::config::Settings;
use crate::error::Result;
use crate::library::{MediaFolder, scan_folders};
use crate::probe::DurationProbe;
use crate::progress::{FolderProgress, FolderRef, aggregate, build_index, extract};
use crate::report::{Decorator, Labels, RenderContext, render_checklist, render_index};

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Compute and log, but write nothing.
    pub dry_run: bool,
    pub skip_index: bool,
}

/// What a run produced.
#[derive(Debug, Default)]
pub struct Summary {
    /// Checklists written (or that would have been, on a dry run).
    pub reports: Vec<PathBuf>,
    pub index: Option<PathBuf>,
}

/// Previous checklist text, if there is a usable one.
///
/// Unreadable files count as no prior state; bad UTF-8 is decoded lossily so
/// the remaining lines still count.
pub fn read_prior_report(path: &Path) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("ignoring unreadable {}: {e}", path.display());
            None
        }
    }
}

/// Checklist location relative to `root`, `/`-separated for markdown links.
fn relative_link(root: &Path, report: &Path) -> String {
    match report.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => report.display().to_string(),
    }
}

fn process_folder<R: Rng>(
    root: &Path,
    folder: &MediaFolder,
    settings: &Settings,
    probe: &dyn DurationProbe,
    decorator: &mut Decorator<R>,
    updated_at: NaiveDateTime,
    opts: Options,
) -> Result<Option<(FolderRef, FolderProgress)>> {
    let report_path = folder.path.join(&settings.report.checklist_file);
    let prior = extract(read_prior_report(&report_path).as_deref());

    let Some(progress) = aggregate(
        &folder.name,
        folder.files.iter().cloned(),
        |name| probe.duration(&folder.path.join(name)),
        &prior,
    ) else {
        log::debug!("{}: no lessons, skipping", folder.path.display());
        return Ok(None);
    };

    let decoration = decorator.pick();
    let ctx = RenderContext {
        folder_path: &folder.path,
        decoration: &decoration,
        labels: Labels::for_language(settings.report.language),
        smart_tags: &settings.report.smart_tags,
        updated_at,
    };
    let text = render_checklist(&progress, &ctx);

    if !opts.dry_run {
        fs::write(&report_path, text)?;
    }
    log::info!(
        "{}: {}/{} watched, {}% sessions, {}% time",
        report_path.display(),
        progress.completed_count(),
        progress.items().len(),
        progress.session_percent(),
        progress.time_percent()
    );

    let folder_ref = FolderRef {
        title: folder.name.clone(),
        report_link: relative_link(root, &report_path),
    };
    Ok(Some((folder_ref, progress)))
}

/// Refresh every checklist under `root` and, unless skipped, the index.
///
/// Folders are handled one at a time in sorted walk order, which is also the
/// row order of the index. No index is written when no folder has lessons.
pub fn generate<R: Rng>(
    root: &Path,
    settings: &Settings,
    probe: &dyn DurationProbe,
    decorator: &mut Decorator<R>,
    updated_at: NaiveDateTime,
    opts: Options,
) -> Result<Summary> {
    let mut summary = Summary::default();
    let mut dashboards = Vec::new();

    for folder in scan_folders(root, &settings.library) {
        if let Some(done) =
            process_folder(root, &folder, settings, probe, decorator, updated_at, opts)?
        {
            summary
                .reports
                .push(folder.path.join(&settings.report.checklist_file));
            dashboards.push(done);
        }
    }

    if dashboards.is_empty() || opts.skip_index {
        return Ok(summary);
    }

    let index = build_index(dashboards.iter().map(|(r, p)| (r.clone(), p)));
    let text = render_index(&index, Labels::for_language(settings.report.language));
    let index_path = root.join(&settings.report.index_file);
    if !opts.dry_run {
        fs::write(&index_path, text)?;
    }
    log::info!("{}: {} folder(s)", index_path.display(), index.len());
    summary.index = Some(index_path);

    Ok(summary)
}
