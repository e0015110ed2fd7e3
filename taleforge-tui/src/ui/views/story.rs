//! Story Generator: creativity and target length.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::views::sliders;

pub fn render(f: &mut Frame, area: Rect, app: &mut AppState) {
    let (header, body) = sliders::split_header(area);

    let words = app.story.value("length").unwrap_or_default();
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Target length is approximate ", theme::muted()),
            Span::styled(format!("(~{words:.0} words)"), theme::secondary()),
        ])),
        header,
    );
    sliders::render_panel(f, body, &mut app.story);
}
