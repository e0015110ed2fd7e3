//! App state persistence - JSON save/load across restarts.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app::{AppState, SliderPanel};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub last_path: Option<String>,
    pub tts: BTreeMap<String, f64>,
    pub story: BTreeMap<String, f64>,
    pub hardware: BTreeMap<String, f64>,
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("ignoring corrupt state file {}: {}", path.display(), e);
            PersistedState::default()
        }),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        last_path: app
            .router
            .active_route()
            .map(|route| route.path().to_string()),
        tts: panel_values(&app.tts),
        story: panel_values(&app.story),
        hardware: panel_values(&app.hardware),
    }
}

/// Apply persisted slider values to AppState. Unknown keys are ignored and
/// values are snapped onto each slider's step grid within its range. `last_path` is read by the
/// caller before the router is built.
pub fn apply(app: &mut AppState, state: &PersistedState) {
    restore_panel(&mut app.tts, &state.tts);
    restore_panel(&mut app.story, &state.story);
    restore_panel(&mut app.hardware, &state.hardware);
}

fn panel_values(panel: &SliderPanel) -> BTreeMap<String, f64> {
    panel
        .fields
        .iter()
        .map(|f| (f.key.to_string(), f.value))
        .collect()
}

fn restore_panel(panel: &mut SliderPanel, values: &BTreeMap<String, f64>) {
    for field in &mut panel.fields {
        if let Some(&v) = values.get(field.key) {
            if v.is_finite() {
                field.value = field.attrs.snap(v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::counting_bootstrap;

    #[test]
    fn roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let (boot, _) = counting_bootstrap();
        let mut app = AppState::new(boot, "/story");
        app.tts.fields[2].value = 40.0;

        save(&path, &extract(&app)).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded.last_path.as_deref(), Some("/story"));
        assert_eq!(loaded.tts.get("volume"), Some(&40.0));
        assert_eq!(loaded.hardware.len(), 3);
    }

    #[test]
    fn unmatched_location_is_not_saved() {
        let (boot, _) = counting_bootstrap();
        let mut app = AppState::new(boot, "/tts");
        app.navigate("/nowhere");
        assert_eq!(extract(&app).last_path, None);

        app.navigate("/library");
        assert_eq!(extract(&app).last_path.as_deref(), Some("/library"));
    }

    #[test]
    fn apply_snaps_off_grid_values() {
        let (boot, _) = counting_bootstrap();
        let mut app = AppState::new(boot, "/");
        let mut state = PersistedState::default();
        state.story.insert("creativity".into(), 0.73);
        state.story.insert("length".into(), 640.0);
        state.hardware.insert("buffer_ms".into(), 300.0);

        apply(&mut app, &state);

        assert_eq!(app.story.value("creativity"), Some(0.75));
        assert_eq!(app.story.value("length"), Some(600.0));
        assert_eq!(app.hardware.value("buffer_ms"), Some(320.0));
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert!(loaded.last_path.is_none());
        assert!(loaded.tts.is_empty());
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();
        let loaded = load(&path);
        assert!(loaded.last_path.is_none());
    }

    #[test]
    fn apply_clamps_and_ignores_unknown_keys() {
        let (boot, _) = counting_bootstrap();
        let mut app = AppState::new(boot, "/");
        let mut state = PersistedState::default();
        state.tts.insert("volume".into(), 500.0);
        state.tts.insert("echo".into(), 3.0);
        state.story.insert("creativity".into(), f64::NAN);

        apply(&mut app, &state);

        assert_eq!(app.tts.value("volume"), Some(100.0));
        assert_eq!(app.tts.fields.len(), 3);
        assert_eq!(app.story.value("creativity"), Some(0.7));
    }
}
