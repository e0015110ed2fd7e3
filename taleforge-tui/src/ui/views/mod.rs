//! Routed views. Each renders inside the shell's view frame.
//!
//! - Dashboard: destinations and their paths
//! - TTS Studio: voice sliders
//! - Story Generator: generation sliders
//! - Adventure Mode: description only
//! - File Library: entries read from the local store
//! - Hardware Settings: device sliders
//! - Not Found: any path outside the route table

pub mod adventure;
pub mod dashboard;
pub mod library;
pub mod not_found;
pub mod settings;
pub mod sliders;
pub mod story;
pub mod tts_studio;

use ratatui::layout::Rect;
use ratatui::Frame;

use taleforge_core::{Route, RouteMatch};

use crate::app::AppState;

pub fn render(f: &mut Frame, area: Rect, app: &mut AppState, current: &RouteMatch) {
    match current {
        RouteMatch::Found(Route::Dashboard) => dashboard::render(f, area),
        RouteMatch::Found(Route::TtsStudio) => tts_studio::render(f, area, app),
        RouteMatch::Found(Route::StoryGenerator) => story::render(f, area, app),
        RouteMatch::Found(Route::AdventureMode) => adventure::render(f, area),
        RouteMatch::Found(Route::FileLibrary) => library::render(f, area, app),
        RouteMatch::Found(Route::HardwareSettings) => settings::render(f, area, app),
        RouteMatch::NotFound(path) => not_found::render(f, area, path),
    }
}
