//! TTS Studio: voice rate, pitch and volume.

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
            "[j/k]select [h/l]adjust",
            theme::muted(),
        ))),
        header,
    );
    sliders::render_panel(f, body, &mut app.tts);
}
