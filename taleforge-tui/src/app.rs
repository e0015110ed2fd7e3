//! Application state: single-owner, main-thread only.
//!
//! The only background work is the storage bootstrap; its result reaches the
//! UI solely through the shared store cell.

use std::sync::Arc;
use std::thread::JoinHandle;

use taleforge_core::{Bootstrap, LibraryEntry, Route, RouteMatch, StorageError};

use crate::router::{Router, Transition};
use crate::ui::widgets::{RangeAttrs, SliderHandle, SliderInput};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    GoTo,
    Help,
}

/// One slider owned by a view: its config, current value and handle.
#[derive(Debug, Clone)]
pub struct SliderField {
    pub key: &'static str,
    pub label: &'static str,
    pub attrs: RangeAttrs,
    pub show_value: bool,
    pub value: f64,
    pub handle: SliderHandle,
}

impl SliderField {
    pub fn new(key: &'static str, label: &'static str, attrs: RangeAttrs, value: f64) -> Self {
        Self {
            key,
            label,
            attrs,
            show_value: true,
            value,
            handle: SliderHandle::default(),
        }
    }

    pub fn hide_value(mut self) -> Self {
        self.show_value = false;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.attrs.disabled = true;
        self
    }
}

/// A vertical stack of sliders with a focus cursor.
#[derive(Debug, Clone)]
pub struct SliderPanel {
    pub fields: Vec<SliderField>,
    pub cursor: usize,
}

impl SliderPanel {
    pub fn new(fields: Vec<SliderField>) -> Self {
        let mut panel = Self { fields, cursor: 0 };
        panel.sync_focus();
        panel
    }

    pub fn tts_studio() -> Self {
        Self::new(vec![
            SliderField::new("rate", "Rate", RangeAttrs::new(0.5, 2.0, 0.1), 1.0),
            SliderField::new("pitch", "Pitch", RangeAttrs::new(0.5, 2.0, 0.1), 1.0),
            SliderField::new("volume", "Volume", RangeAttrs::new(0.0, 100.0, 5.0), 80.0),
        ])
    }

    pub fn story_generator() -> Self {
        Self::new(vec![
            SliderField::new("creativity", "Creativity", RangeAttrs::new(0.0, 1.0, 0.05), 0.7),
            SliderField::new("length", "Length", RangeAttrs::new(100.0, 2000.0, 100.0), 600.0)
                .hide_value(),
        ])
    }

    pub fn hardware_settings() -> Self {
        Self::new(vec![
            SliderField::new("output_volume", "Output Volume", RangeAttrs::new(0.0, 100.0, 1.0), 75.0),
            SliderField::new("mic_gain", "Microphone Gain", RangeAttrs::new(0.0, 100.0, 1.0), 50.0),
            SliderField::new("buffer_ms", "Buffer (ms)", RangeAttrs::new(64.0, 1024.0, 64.0), 256.0)
                .disabled(),
        ])
    }

    pub fn focus_next(&mut self) {
        if self.cursor + 1 < self.fields.len() {
            self.cursor += 1;
        }
        self.sync_focus();
    }

    pub fn focus_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.sync_focus();
    }

    pub fn focus_index(&mut self, index: usize) {
        if index < self.fields.len() {
            self.cursor = index;
            self.sync_focus();
        }
    }

    pub fn sync_focus(&mut self) {
        let cursor = self.cursor;
        for (i, field) in self.fields.iter_mut().enumerate() {
            if i == cursor {
                field.handle.focus();
            } else {
                field.handle.blur();
            }
        }
    }

    /// Accept a proposed value for the slider at `index`.
    pub fn apply(&mut self, index: usize, input: SliderInput) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = input.value;
        }
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        self.fields.iter().find(|f| f.key == key).map(|f| f.value)
    }

    /// Drop all handles; called when the owning view unmounts.
    pub fn release(&mut self) {
        for field in &mut self.fields {
            field.handle.release();
        }
    }
}

/// File Library view state: a snapshot read from the store on mount.
#[derive(Debug, Default)]
pub struct LibraryViewState {
    pub entries: Vec<LibraryEntry>,
    pub cursor: usize,
    pub error: Option<String>,
    /// The store had not arrived yet at the last refresh.
    pub awaiting_store: bool,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub router: Router,
    pub running: bool,
    pub mounted: bool,

    // View states
    pub tts: SliderPanel,
    pub story: SliderPanel,
    pub hardware: SliderPanel,
    pub library: LibraryViewState,

    // Cross-cutting
    pub bootstrap: Arc<Bootstrap>,
    pub status_message: Option<(String, StatusLevel)>,
    pub overlay: Overlay,
    pub path_input: String,
}

impl AppState {
    pub fn new(bootstrap: Arc<Bootstrap>, start_path: &str) -> Self {
        Self {
            router: Router::new(start_path),
            running: true,
            mounted: false,
            tts: SliderPanel::tts_studio(),
            story: SliderPanel::story_generator(),
            hardware: SliderPanel::hardware_settings(),
            library: LibraryViewState::default(),
            bootstrap,
            status_message: None,
            overlay: Overlay::None,
            path_input: String::new(),
        }
    }

    /// Mount the shell: start the storage bootstrap (first mount only) and
    /// enter the current view. The returned handle is only useful to tests.
    pub fn mount(&mut self) -> Option<JoinHandle<()>> {
        let handle = self.bootstrap.start();
        self.mounted = true;
        let current = self.router.current().clone();
        self.enter(&current);
        handle
    }

    /// Unmount the shell. Storage is left as it is.
    pub fn unmount(&mut self) {
        self.tts.release();
        self.story.release();
        self.hardware.release();
        self.mounted = false;
    }

    pub fn navigate(&mut self, path: &str) {
        if let Some(t) = self.router.navigate(path) {
            self.transition(t);
        }
    }

    pub fn go_to(&mut self, route: Route) {
        self.navigate(route.path());
    }

    pub fn back(&mut self) {
        match self.router.back() {
            Some(t) => self.transition(t),
            None => self.set_warning("No previous page"),
        }
    }

    fn transition(&mut self, t: Transition) {
        tracing::debug!(from = ?t.from, to = ?t.to, "route change");
        self.leave(&t.from);
        if self.mounted {
            self.enter(&t.to);
        }
    }

    fn leave(&mut self, from: &RouteMatch) {
        if let Some(panel) = from.route().and_then(|r| self.panel_mut(r)) {
            panel.release();
        }
    }

    fn enter(&mut self, to: &RouteMatch) {
        match to.route() {
            Some(Route::FileLibrary) => self.refresh_library(),
            Some(route) => {
                if let Some(panel) = self.panel_mut(route) {
                    panel.sync_focus();
                }
            }
            None => {}
        }
    }

    /// Per-frame housekeeping: pick up a store that arrived late.
    pub fn tick(&mut self) {
        if self.library.awaiting_store
            && self.router.active_route() == Some(Route::FileLibrary)
            && self.bootstrap.store().is_ready()
        {
            self.refresh_library();
        }
    }

    pub fn refresh_library(&mut self) {
        let cell = self.bootstrap.store();
        let result = cell.lock().and_then(|store| store.list_library_files());
        match result {
            Ok(entries) => {
                self.library.cursor = self.library.cursor.min(entries.len().saturating_sub(1));
                self.library.entries = entries;
                self.library.error = None;
                self.library.awaiting_store = false;
            }
            Err(e) => {
                self.library.awaiting_store = matches!(e, StorageError::NotInitialized);
                if !self.library.awaiting_store {
                    tracing::warn!("library listing failed: {}", e);
                }
                self.library.entries.clear();
                self.library.error = Some(e.to_string());
            }
        }
    }

    /// Slider panel belonging to `route`, if that view has one.
    pub fn panel_mut(&mut self, route: Route) -> Option<&mut SliderPanel> {
        match route {
            Route::TtsStudio => Some(&mut self.tts),
            Route::StoryGenerator => Some(&mut self.story),
            Route::HardwareSettings => Some(&mut self.hardware),
            _ => None,
        }
    }

    pub fn active_panel_mut(&mut self) -> Option<&mut SliderPanel> {
        let route = self.router.active_route()?;
        self.panel_mut(route)
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
