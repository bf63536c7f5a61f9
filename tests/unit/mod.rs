//! Unit tests module
//!
//! Exercises the helper modules through the public API only.

mod entry_data;
mod path_matching;
mod title_resolution;
