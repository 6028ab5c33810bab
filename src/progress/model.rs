//! Progress model types: `Item`, `FolderProgress` and the index projection.

use std::time::Duration;

/// One lesson file inside a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    duration: Duration,
    completed: bool,
}

impl Item {
    pub(crate) fn new(name: String, duration: Duration, completed: bool) -> Self {
        Self {
            name,
            duration,
            completed,
        }
    }

    /// File name; the join key against the previous checklist.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Play length, zero when it could not be measured.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

/// Computed progress for one folder. Built in full by
/// [`aggregate`](super::aggregate) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderProgress {
    pub(crate) name: String,
    pub(crate) items: Vec<Item>,
    pub(crate) completed: usize,
    pub(crate) session_percent: u8,
    pub(crate) time_percent: u8,
    pub(crate) total_time: Duration,
    pub(crate) watched_time: Duration,
    pub(crate) next_up: Option<usize>,
}

impl FolderProgress {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lessons in name order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn completed_count(&self) -> usize {
        self.completed
    }

    /// Completed lessons as a whole percentage of all lessons.
    pub fn session_percent(&self) -> u8 {
        self.session_percent
    }

    /// Watched time as a whole percentage of total time.
    pub fn time_percent(&self) -> u8 {
        self.time_percent
    }

    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    pub fn watched_time(&self) -> Duration {
        self.watched_time
    }

    pub fn remaining_time(&self) -> Duration {
        self.total_time - self.watched_time
    }

    /// First lesson in name order that is not completed yet.
    pub fn next_up(&self) -> Option<&Item> {
        self.next_up.map(|i| &self.items[i])
    }
}

/// How the index refers to one folder's checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRef {
    pub title: String,
    /// Checklist location relative to the index file, `/`-separated.
    pub report_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub folder: FolderRef,
    pub session_percent: u8,
    pub time_percent: u8,
}

/// Summary table rows in folder discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexModel {
    pub(crate) entries: Vec<IndexEntry>,
}

impl IndexModel {
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
