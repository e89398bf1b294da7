//! Ratatui front-end for the student roster. Five numbered menus drive every
//! list operation; forms and prompts pop up over the menu for input, and the
//! footer carries the outcome of the last action.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
