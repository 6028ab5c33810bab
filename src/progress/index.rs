use super::model::{FolderProgress, FolderRef, IndexEntry, IndexModel};

/// Collect per-folder percentages into index rows, keeping the given order.
pub fn build_index<'a, I>(entries: I) -> IndexModel
where
    I: IntoIterator<Item = (FolderRef, &'a FolderProgress)>,
{
    IndexModel {
        entries: entries
            .into_iter()
            .map(|(folder, progress)| IndexEntry {
                folder,
                session_percent: progress.session_percent(),
                time_percent: progress.time_percent(),
            })
            .collect(),
    }
}
