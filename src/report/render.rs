use std::path::Path;

use chrono::NaiveDateTime;

use crate::config::SmartTag;
use crate::progress::{FolderProgress, IndexModel};

use super::decorate::Decoration;
use super::format::{
    escape_link_text, escape_table_cell, file_link, format_duration, link_destination,
    progress_bar, single_line, smart_tag,
};
use super::labels::Labels;

/// Everything a checklist needs beyond the progress model itself.
pub struct RenderContext<'a> {
    /// Folder the lessons live in; lesson links point into it.
    pub folder_path: &'a Path,
    pub decoration: &'a Decoration,
    pub labels: &'static Labels,
    pub smart_tags: &'a [SmartTag],
    pub updated_at: NaiveDateTime,
}

/// Render the markdown checklist for one folder.
///
/// One task line per lesson: checkbox, escaped name linking to the file,
/// duration and an optional smart tag. The checkbox and the bracketed name
/// are what [`checked_item`](crate::progress::checked_item) reads back.
pub fn render_checklist(progress: &FolderProgress, ctx: &RenderContext<'_>) -> String {
    let labels = ctx.labels;
    let title = single_line(progress.name());
    let mut lines = Vec::new();

    if ctx.decoration.emoji.is_empty() {
        lines.push(format!("# {title}"));
    } else {
        lines.push(format!("# {} {title}", ctx.decoration.emoji));
    }
    if !ctx.decoration.tag.is_empty() {
        lines.push(format!("{} {}", labels.tag, ctx.decoration.tag));
    }
    lines.push(String::new());
    if let Some(next) = progress.next_up() {
        lines.push(format!("{} `{}`", labels.next_session, single_line(next.name())));
        lines.push(String::new());
    }
    lines.push(labels.open_hint.to_string());
    lines.push(String::new());

    for item in progress.items() {
        let status = if item.is_completed() { 'x' } else { ' ' };
        let mut line = format!(
            "- [{status}] 🎞 [{}]({}) ⏱ `{}`",
            escape_link_text(item.name()),
            file_link(ctx.folder_path, item.name()),
            format_duration(item.duration()),
        );
        if let Some(tag) = smart_tag(item.name(), ctx.smart_tags) {
            line.push(' ');
            line.push_str(tag);
        }
        lines.push(line);
    }

    let session = progress.session_percent();
    let time = progress.time_percent();
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(format!(
        "{} `{session}%` {}",
        labels.session_progress,
        progress_bar(session)
    ));
    lines.push(String::new());
    lines.push(format!("{} `{time}%` {}", labels.time_progress, progress_bar(time)));
    lines.push(String::new());
    lines.push(format!(
        "{} `{}`",
        labels.total_time,
        format_duration(progress.total_time())
    ));
    lines.push(format!(
        "{} `{}`",
        labels.remaining_time,
        format_duration(progress.remaining_time())
    ));
    lines.push(String::new());
    lines.push(format!(
        "{} `{}`",
        labels.last_updated,
        ctx.updated_at.format("%Y-%m-%d %H:%M")
    ));
    lines.push(String::new());
    lines.push(labels.footer.to_string());

    lines.join("\n") + "\n"
}

/// Render the top-level summary table.
pub fn render_index(index: &IndexModel, labels: &Labels) -> String {
    let mut lines = vec![
        labels.index_title.to_string(),
        labels.index_info.to_string(),
        String::new(),
        labels.index_header.to_string(),
        labels.index_rule.to_string(),
    ];

    lines.extend(index.entries().iter().map(|entry| {
        format!(
            "| [{}]({}) | {} {}% | {} {}% |",
            escape_table_cell(&escape_link_text(&entry.folder.title)),
            escape_table_cell(&link_destination(&entry.folder.report_link)),
            progress_bar(entry.session_percent),
            entry.session_percent,
            progress_bar(entry.time_percent),
            entry.time_percent,
        )
    }));

    lines.join("\n") + "\n"
}
