//! Route table: six literal paths, resolved by exact match.

use serde::{Deserialize, Serialize};

/// A routed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Dashboard,
    TtsStudio,
    StoryGenerator,
    AdventureMode,
    FileLibrary,
    HardwareSettings,
}

/// The route table, in navigation order.
pub const ROUTES: [Route; 6] = [
    Route::Dashboard,
    Route::TtsStudio,
    Route::StoryGenerator,
    Route::AdventureMode,
    Route::FileLibrary,
    Route::HardwareSettings,
];

/// Outcome of resolving a navigation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    Found(Route),
    NotFound(String),
}

impl RouteMatch {
    pub fn route(&self) -> Option<Route> {
        match self {
            RouteMatch::Found(r) => Some(*r),
            RouteMatch::NotFound(_) => None,
        }
    }
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::TtsStudio => "/tts",
            Route::StoryGenerator => "/story",
            Route::AdventureMode => "/adventure",
            Route::FileLibrary => "/library",
            Route::HardwareSettings => "/settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::TtsStudio => "TTS Studio",
            Route::StoryGenerator => "Story Generator",
            Route::AdventureMode => "Adventure Mode",
            Route::FileLibrary => "File Library",
            Route::HardwareSettings => "Hardware Settings",
        }
    }

    /// Exact match only: no trimming, case folding or trailing-slash tolerance.
    pub fn resolve(path: &str) -> RouteMatch {
        ROUTES
            .iter()
            .copied()
            .find(|r| r.path() == path)
            .map(RouteMatch::Found)
            .unwrap_or_else(|| RouteMatch::NotFound(path.to_string()))
    }

    pub fn index(self) -> usize {
        match self {
            Route::Dashboard => 0,
            Route::TtsStudio => 1,
            Route::StoryGenerator => 2,
            Route::AdventureMode => 3,
            Route::FileLibrary => 4,
            Route::HardwareSettings => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        ROUTES.get(i).copied()
    }

    pub fn next(self) -> Route {
        ROUTES[(self.index() + 1) % ROUTES.len()]
    }

    pub fn prev(self) -> Route {
        ROUTES[(self.index() + ROUTES.len() - 1) % ROUTES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_path_resolves_to_its_route() {
        for route in ROUTES {
            assert_eq!(Route::resolve(route.path()), RouteMatch::Found(route));
        }
    }

    #[test]
    fn literal_table() {
        let table: Vec<(&str, &str)> = ROUTES.iter().map(|r| (r.path(), r.label())).collect();
        assert_eq!(
            table,
            vec![
                ("/", "Dashboard"),
                ("/tts", "TTS Studio"),
                ("/story", "Story Generator"),
                ("/adventure", "Adventure Mode"),
                ("/library", "File Library"),
                ("/settings", "Hardware Settings"),
            ]
        );
    }

    #[test]
    fn paths_are_unique() {
        let paths: HashSet<&str> = ROUTES.iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), ROUTES.len());
    }

    #[test]
    fn near_misses_are_not_found() {
        for path in ["/tts/", "/TTS", " /tts", "", "/tts?voice=a", "/story/1", "//"] {
            assert_eq!(
                Route::resolve(path),
                RouteMatch::NotFound(path.to_string()),
                "path {path:?}"
            );
        }
    }

    #[test]
    fn route_cycle() {
        assert_eq!(Route::Dashboard.next(), Route::TtsStudio);
        assert_eq!(Route::HardwareSettings.next(), Route::Dashboard);
        assert_eq!(Route::Dashboard.prev(), Route::HardwareSettings);
        for i in 0..6 {
            assert_eq!(Route::from_index(i).unwrap().index(), i);
        }
        assert!(Route::from_index(6).is_none());
    }
}
