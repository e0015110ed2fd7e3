//! Overlay widgets: go-to-path prompt and key help.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use taleforge_core::ROUTES;

use crate::theme;
use crate::ui::centered_rect;

/// Path prompt opened with `g`.
pub fn render_goto(f: &mut Frame, area: Rect, input: &str) {
    let popup = centered_rect(50, 30, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Go to path [Enter]go [Esc]cancel ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let known: Vec<&str> = ROUTES.iter().map(|r| r.path()).collect();
    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", theme::accent()),
            Span::styled(input, theme::accent_bold()),
            Span::styled("_", theme::accent()),
        ]),
        Line::from(""),
        Line::from(Span::styled(known.join("  "), theme::muted())),
    ];

    f.render_widget(Paragraph::new(text), inner);
}

/// Key reference opened with `?`.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keys [Esc]close ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Navigation");
    key(&mut lines, "1-6", "Jump to page by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle pages forward / back");
    key(&mut lines, "g", "Go to a path");
    key(&mut lines, "b / Backspace", "Back to previous page");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Sliders");
    key(&mut lines, "j / k", "Focus next / previous slider");
    key(&mut lines, "h / l", "Decrease / increase by one step");
    key(&mut lines, "PgDn / PgUp", "Decrease / increase by ten steps");
    key(&mut lines, "Home / End", "Jump to minimum / maximum");
    key(&mut lines, "Click", "Set value at pointer");
    lines.push(Line::from(""));

    section(&mut lines, "File Library");
    key(&mut lines, "j / k", "Move selection");
    key(&mut lines, "r", "Reload from storage");

    f.render_widget(Paragraph::new(lines), inner);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
