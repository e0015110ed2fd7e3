//! Top nav bar: brand plus one tab per route, active route highlighted.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use taleforge_core::ROUTES;

use crate::app::AppState;
use crate::theme;

pub const BRAND: &str = "taleforge";

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let active = app.router.active_route();

    let mut spans: Vec<Span> = vec![Span::styled(format!(" {BRAND} "), theme::accent_bold())];
    for route in ROUTES {
        let style = if Some(route) == active {
            theme::nav_active()
        } else {
            theme::muted()
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" {}:{} ", route.index() + 1, route.label()),
            style,
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
