//! Course tree discovery: which folders exist and which lessons each holds.

mod model;
mod scan;

pub use model::MediaFolder;
pub use scan::scan_folders;

#[cfg(test)]
mod tests;
