//! Fallback for paths outside the route table.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, path: &str) {
    let lines = vec![
        Line::from(vec![
            Span::styled("No page at ", theme::warning()),
            Span::styled(format!("{path:?}"), theme::accent_bold()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press b to go back, g to enter a path, or 1-6 to pick a page.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
