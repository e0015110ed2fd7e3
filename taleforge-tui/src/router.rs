//! Path router: current location, exact-match resolution, back history.

use std::collections::VecDeque;

use taleforge_core::{Route, RouteMatch};

const HISTORY_CAP: usize = 32;

/// A location change. `from` is the view being unmounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: RouteMatch,
    pub to: RouteMatch,
}

#[derive(Debug, Clone)]
pub struct Router {
    location: String,
    current: RouteMatch,
    history: VecDeque<String>,
}

impl Router {
    pub fn new(start_path: &str) -> Self {
        Self {
            location: start_path.to_string(),
            current: Route::resolve(start_path),
            history: VecDeque::with_capacity(HISTORY_CAP),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn current(&self) -> &RouteMatch {
        &self.current
    }

    pub fn active_route(&self) -> Option<Route> {
        self.current.route()
    }

    /// Go to `path`. Navigating to the current location is a no-op.
    pub fn navigate(&mut self, path: &str) -> Option<Transition> {
        if path == self.location {
            return None;
        }
        let previous = std::mem::replace(&mut self.location, path.to_string());
        self.history.push_back(previous);
        if self.history.len() > HISTORY_CAP {
            self.history.pop_front();
        }
        Some(self.swap_to(path))
    }

    pub fn go_to(&mut self, route: Route) -> Option<Transition> {
        self.navigate(route.path())
    }

    /// Return to the previous location, if any.
    pub fn back(&mut self) -> Option<Transition> {
        let path = self.history.pop_back()?;
        self.location = path.clone();
        Some(self.swap_to(&path))
    }

    fn swap_to(&mut self, path: &str) -> Transition {
        let to = Route::resolve(path);
        let from = std::mem::replace(&mut self.current, to.clone());
        Transition { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_given_path() {
        let router = Router::new("/library");
        assert_eq!(router.location(), "/library");
        assert_eq!(router.active_route(), Some(Route::FileLibrary));
    }

    #[test]
    fn navigate_reports_transition() {
        let mut router = Router::new("/");
        let t = router.navigate("/tts").unwrap();
        assert_eq!(t.from, RouteMatch::Found(Route::Dashboard));
        assert_eq!(t.to, RouteMatch::Found(Route::TtsStudio));
        assert!(router.navigate("/tts").is_none());
    }

    #[test]
    fn unknown_path_is_not_found() {
        let mut router = Router::new("/");
        let t = router.navigate("/nowhere").unwrap();
        assert_eq!(t.to, RouteMatch::NotFound("/nowhere".into()));
        assert_eq!(router.active_route(), None);
        assert_eq!(router.location(), "/nowhere");
    }

    #[test]
    fn back_walks_history() {
        let mut router = Router::new("/");
        router.navigate("/tts");
        router.navigate("/story");
        assert_eq!(router.back().unwrap().to, RouteMatch::Found(Route::TtsStudio));
        assert_eq!(router.back().unwrap().to, RouteMatch::Found(Route::Dashboard));
        assert!(router.back().is_none());
        assert_eq!(router.location(), "/");
    }

    #[test]
    fn history_is_bounded() {
        let mut router = Router::new("/");
        for i in 0..100 {
            router.navigate(&format!("/p{i}"));
        }
        let mut steps = 0;
        while router.back().is_some() {
            steps += 1;
        }
        assert_eq!(steps, HISTORY_CAP);
    }
}
