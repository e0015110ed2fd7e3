//! Taleforge TUI - six-view terminal shell with path routing.
//!
//! Views:
//! 1. Dashboard - overview and storage status
//! 2. TTS Studio - rate, pitch and volume sliders
//! 3. Story Generator - creativity and length sliders
//! 4. Adventure Mode - placeholder scene
//! 5. File Library - files recorded in local storage
//! 6. Hardware Settings - audio device sliders
//!
//! Any other path renders the Not Found view inside the same shell.

pub mod app;
pub mod input;
pub mod logging;
pub mod persistence;
pub mod router;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::{handle_key, handle_mouse};
pub use router::Router;

#[cfg(test)]
mod test_helpers;
