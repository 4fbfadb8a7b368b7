//! Configuration management for the bakery panel
//!
//! A single JSON file holds every visual threshold and timing the
//! interactive components read. Missing fields fall back to the values in
//! [`crate::constants`].

pub mod settings;

pub use settings::Config;
