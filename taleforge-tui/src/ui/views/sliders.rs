//! Stacked slider rendering shared by the slider-based views.

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::SliderPanel;
use crate::ui::widgets::Slider;

const MAX_WIDTH: u16 = 64;

/// Draw every field of `panel` top to bottom, one blank row apart.
/// Fields that do not fit are left unmounted.
pub fn render_panel(f: &mut Frame, area: Rect, panel: &mut SliderPanel) {
    let width = area.width.min(MAX_WIDTH);
    let bottom = area.y + area.height;
    let mut y = area.y;

    for field in &mut panel.fields {
        let slider = Slider::new(field.value)
            .label(field.label)
            .show_value(field.show_value)
            .attrs(field.attrs);

        let h = slider.height();
        if y + h > bottom {
            field.handle.release();
            continue;
        }
        let rect = Rect::new(area.x, y, width, h);
        f.render_stateful_widget(slider, rect, &mut field.handle);
        y += h + 1;
    }
}

/// Split off a two-row hint header above the sliders.
pub fn split_header(area: Rect) -> (Rect, Rect) {
    let header = Rect {
        height: area.height.min(2),
        ..area
    };
    let body = Rect {
        y: area.y + header.height,
        height: area.height - header.height,
        ..area
    };
    (header, body)
}
