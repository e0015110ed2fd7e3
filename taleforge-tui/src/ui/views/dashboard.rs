//! Dashboard: where everything lives.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use taleforge_core::ROUTES;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("Welcome to Taleforge", theme::accent_bold())),
        Line::from(Span::styled(
            "Voice, stories and adventures, all stored locally.",
            theme::muted(),
        )),
        Line::from(""),
    ];

    for route in ROUTES.iter().skip(1) {
        lines.push(Line::from(vec![
            Span::styled(format!("  [{}] ", route.index() + 1), theme::accent()),
            Span::styled(format!("{:<20}", route.label()), theme::text()),
            Span::styled(route.path(), theme::muted()),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
