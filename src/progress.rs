//! Watch-progress engine.
//!
//! Everything here is pure: callers hand in file names, a duration lookup and
//! the previous checklist text, and get back an immutable [`FolderProgress`].
//! Directory walking, probing and file I/O live in the runtime.

mod aggregate;
mod index;
mod model;
mod state;

pub use aggregate::aggregate;
pub use index::build_index;
pub use model::{FolderProgress, FolderRef, IndexEntry, IndexModel, Item};
pub use state::{checked_item, extract};
