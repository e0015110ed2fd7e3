//! Adventure Mode.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Choose your path", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "Interactive stories narrated scene by scene. Saved adventures are kept in local storage.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
