use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::config::SmartTag;

const BAR_CELLS: u8 = 10;

/// Format a `Duration` as `Hh Mm`, or just `Mm` under an hour. Seconds are dropped.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Ten-cell bar, one filled cell per full 10%.
pub fn progress_bar(percent: u8) -> String {
    let filled = percent.min(100) / 10;
    let mut bar = "🟩".repeat(filled as usize);
    bar.push_str(&"⬜".repeat((BAR_CELLS - filled) as usize));
    bar
}

/// First configured tag whose keyword appears in `name`, ignoring case.
pub fn smart_tag<'a>(name: &str, tags: &'a [SmartTag]) -> Option<&'a str> {
    let name = name.to_lowercase();
    tags.iter()
        .find(|t| !t.keyword.is_empty() && name.contains(&t.keyword.to_lowercase()))
        .map(|t| t.tag.as_str())
}

/// Escape text for use inside `[...]` so the checklist parser reads it back verbatim.
///
/// Line breaks become `\n` and `\r` so a task never spans two lines.
pub fn escape_link_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '[' | ']' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// `text` with line breaks shown as `\n` and `\r`, for headings and notes.
pub fn single_line(text: &str) -> String {
    text.replace('\n', "\\n").replace('\r', "\\r")
}

/// Escape `|` so text can sit inside a table cell.
pub fn escape_table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// A link destination that survives spaces and parentheses.
pub fn link_destination(target: &str) -> String {
    if target
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '<' | '>'))
    {
        let target = target
            .replace('<', "%3C")
            .replace('>', "%3E")
            .replace('\n', "%0A")
            .replace('\r', "%0D");
        format!("<{target}>")
    } else {
        target.to_string()
    }
}

/// `file://` link to `name` inside `folder`, or a relative link when the
/// folder path cannot be expressed as a URL.
pub fn file_link(folder: &Path, name: &str) -> String {
    match Url::from_file_path(folder.join(name)) {
        Ok(url) => url.as_str().replace('(', "%28").replace(')', "%29"),
        Err(()) => link_destination(name),
    }
}
