//! egui front end for the site

mod app;
mod components;
pub mod constants;

pub use app::run_gui;
