//! Markdown rendering for folder checklists and the top-level index.
//!
//! Rendering is the only place cosmetic randomness enters: header
//! decorations come from a [`Decorator`] picked per folder, never from the
//! progress model.

mod decorate;
mod format;
mod labels;
mod render;

pub use decorate::{Decoration, Decorator};
pub use format::{format_duration, progress_bar};
pub use labels::Labels;
pub use render::{RenderContext, render_checklist, render_index};
