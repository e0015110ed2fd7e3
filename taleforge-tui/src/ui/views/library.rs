//! File Library: entries read from the local store.
//!
//! This is the one view that needs storage. When the store never came up it
//! says so and shows nothing else; the rest of the shell is unaffected.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let lib = &app.library;

    if let Some(err) = &lib.error {
        let lines = vec![
            Line::from(Span::styled("Library unavailable", theme::warning())),
            Line::from(Span::styled(err.as_str(), theme::muted())),
            Line::from(""),
            Line::from(Span::styled("[r]retry", theme::muted())),
        ];
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    if lib.entries.is_empty() {
        let lines = vec![
            Line::from(Span::styled("No files yet.", theme::muted())),
            Line::from(Span::styled(
                "Add some with the `library add` command, then press r.",
                theme::muted(),
            )),
        ];
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    let header = Row::new(
        ["Name", "Kind", "Size", "Added"]
            .into_iter()
            .map(|h| Cell::from(h).style(theme::accent_bold())),
    );

    let rows = lib.entries.iter().enumerate().map(|(i, e)| {
        let style = if i == lib.cursor {
            theme::text().add_modifier(Modifier::REVERSED)
        } else {
            theme::text()
        };
        Row::new(vec![
            Cell::from(e.name.clone()),
            Cell::from(e.kind.as_str()),
            Cell::from(format_size(e.size_bytes)),
            Cell::from(e.added_at.format("%Y-%m-%d %H:%M").to_string()),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Min(20),
        Constraint::Length(6),
        Constraint::Length(9),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths).header(header).column_spacing(1);
    f.render_widget(table, area);
}

pub fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KIB {
        format!("{bytes} B")
    } else if b < KIB * KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{:.1} MiB", b / (KIB * KIB))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_formatting() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KiB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MiB");
    }
}
