//! Input dispatch: overlays first, then global keys, then the active view.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use taleforge_core::Route;

use crate::app::{AppState, Overlay, SliderPanel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::GoTo => {
            handle_goto_overlay(app, key);
            return;
        }
        Overlay::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            if let Some(route) = Route::from_index(index) {
                app.go_to(route);
            }
            return;
        }
        KeyCode::Tab => {
            let from = app.router.active_route().unwrap_or(Route::Dashboard);
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.go_to(from.prev());
            } else {
                app.go_to(from.next());
            }
            return;
        }
        KeyCode::BackTab => {
            let from = app.router.active_route().unwrap_or(Route::Dashboard);
            app.go_to(from.prev());
            return;
        }
        KeyCode::Char('g') => {
            app.overlay = Overlay::GoTo;
            app.path_input.clear();
            return;
        }
        KeyCode::Char('b') | KeyCode::Backspace => {
            app.back();
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        _ => {}
    }

    // 3. View-specific keys.
    match app.router.active_route() {
        Some(Route::FileLibrary) => handle_library_key(app, key),
        Some(_) => {
            if let Some(panel) = app.active_panel_mut() {
                handle_slider_key(panel, key);
            }
        }
        None => {}
    }
}

fn handle_goto_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
            app.path_input.clear();
        }
        KeyCode::Enter => {
            let path = std::mem::take(&mut app.path_input);
            app.overlay = Overlay::None;
            if !path.is_empty() {
                app.navigate(&path);
            }
        }
        KeyCode::Backspace => {
            app.path_input.pop();
        }
        KeyCode::Char(c) => {
            app.path_input.push(c);
        }
        _ => {}
    }
}

fn handle_slider_key(panel: &mut SliderPanel, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => panel.focus_next(),
        KeyCode::Char('k') | KeyCode::Up => panel.focus_prev(),
        _ => {
            let idx = panel.cursor;
            let Some(field) = panel.fields.get(idx) else {
                return;
            };
            if let Some(input) = field.attrs.on_key(field.value, key) {
                tracing::debug!(slider = field.key, from = input.previous, to = input.value, "slider input");
                panel.apply(idx, input);
            }
        }
    }
}

fn handle_library_key(app: &mut AppState, key: KeyEvent) {
    let count = app.library.entries.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if count > 0 && app.library.cursor + 1 < count {
                app.library.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.library.cursor = app.library.cursor.saturating_sub(1);
        }
        KeyCode::Char('r') => {
            app.refresh_library();
            if app.library.error.is_none() {
                let n = app.library.entries.len();
                app.set_status(format!("Library reloaded: {n} files"));
            }
        }
        _ => {}
    }
}

/// Handle a mouse event. A left click on a slider track focuses it and
/// applies the value under the pointer.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if app.overlay != Overlay::None {
        return;
    }
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return;
    }
    let Some(panel) = app.active_panel_mut() else {
        return;
    };

    let hit = panel
        .fields
        .iter()
        .position(|f| f.handle.contains(mouse.column, mouse.row));
    if let Some(idx) = hit {
        panel.focus_index(idx);
        let field = &panel.fields[idx];
        if let Some(input) = field.handle.on_mouse(field.value, &field.attrs, mouse.column, mouse.row) {
            panel.apply(idx, input);
        }
    }
}
