//! Hardware Settings: output volume, microphone gain, audio buffer.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::views::sliders;

pub fn render(f: &mut Frame, area: Rect, app: &mut AppState) {
    let (header, body) = sliders::split_header(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Buffer size is fixed by the audio backend.",
            theme::muted(),
        ))),
        header,
    );
    sliders::render_panel(f, body, &mut app.hardware);
}
