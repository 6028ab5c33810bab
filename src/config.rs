//! Configuration loader and schema types.
//!
//! This module exposes the settings schema that drives scanning, probing and
//! report rendering, plus helpers to load it from disk and the environment.

mod load;
mod schema;

pub use schema::*;
