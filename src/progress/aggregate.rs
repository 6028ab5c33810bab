use std::collections::{BTreeSet, HashSet};
use std::time::Duration;

use crate::probe::ProbeError;

use super::model::{FolderProgress, Item};

/// Whole-number percentage of `part` in `whole`, rounded down; 0 for an empty whole.
fn percent(part: u128, whole: u128) -> u8 {
    if whole == 0 {
        return 0;
    }
    // Clamped so inconsistent input still stays within 0..=100.
    (part.min(whole) * 100 / whole) as u8
}

/// Merge the current lesson files of a folder with the lessons checked in
/// its previous checklist.
///
/// `files` may come in any order and may repeat; items are built in name
/// order. `probe` is asked once per lesson; a failure counts the lesson as
/// zero-length instead of aborting the folder. Names in `prior_completed`
/// without a matching file are ignored.
///
/// Returns `None` for a folder without lessons.
pub fn aggregate<I, S, P>(
    folder_name: &str,
    files: I,
    mut probe: P,
    prior_completed: &HashSet<String>,
) -> Option<FolderProgress>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    P: FnMut(&str) -> Result<Duration, ProbeError>,
{
    let names: BTreeSet<String> = files.into_iter().map(Into::into).collect();
    if names.is_empty() {
        return None;
    }

    let items: Vec<Item> = names
        .into_iter()
        .map(|name| {
            let duration = probe(&name).unwrap_or_else(|e| {
                log::warn!("{folder_name}/{name}: no duration, counting as 0 ({e})");
                Duration::ZERO
            });
            let completed = prior_completed.contains(&name);
            log::debug!("{folder_name}/{name}: {duration:?}, completed={completed}");
            Item::new(name, duration, completed)
        })
        .collect();

    let mut total_time = Duration::ZERO;
    let mut watched_time = Duration::ZERO;
    let mut completed = 0usize;
    for item in &items {
        total_time = total_time.saturating_add(item.duration());
        if item.is_completed() {
            watched_time = watched_time.saturating_add(item.duration());
            completed += 1;
        }
    }

    let next_up = items.iter().position(|item| !item.is_completed());

    Some(FolderProgress {
        name: folder_name.to_string(),
        session_percent: percent(completed as u128, items.len() as u128),
        time_percent: percent(watched_time.as_nanos(), total_time.as_nanos()),
        items,
        completed,
        total_time,
        watched_time,
        next_up,
    })
}
