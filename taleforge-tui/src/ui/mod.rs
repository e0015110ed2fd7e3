//! Layout shell: nav bar, routed view, status bar, overlays.

pub mod nav_bar;
pub mod overlays;
pub mod status_bar;
pub mod views;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use taleforge_core::RouteMatch;

use crate::app::{AppState, Overlay};
use crate::theme;

/// Draw the entire UI. The shell wraps exactly one routed view.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let nav_area = chunks[0];
    let main_area = chunks[1];
    let status_area = chunks[2];

    nav_bar::render(f, nav_area, app);
    draw_view(f, main_area, app);
    status_bar::render(f, status_area, app);

    match &app.overlay {
        Overlay::GoTo => overlays::render_goto(f, main_area, &app.path_input),
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::None => {}
    }
}

/// Title for the view frame: label and path, or Not Found and the path.
pub fn view_title(current: &RouteMatch) -> String {
    match current {
        RouteMatch::Found(route) => format!(" {} {} ", route.label(), route.path()),
        RouteMatch::NotFound(path) => format!(" Not Found {} ", path),
    }
}

fn draw_view(f: &mut Frame, area: Rect, app: &mut AppState) {
    let current = app.router.current().clone();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(view_title(&current))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    views::render(f, inner, app, &current);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
