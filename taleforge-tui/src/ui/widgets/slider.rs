//! Labeled horizontal slider widget.
//!
//! The slider is controlled: it draws whatever `value` it is given and never
//! stores one. Key and mouse input are turned into a [`SliderInput`] carrying
//! the proposed value; the caller decides whether to apply it and passes the
//! new value back in on the next frame.
//!
//! Layout (with a label):
//!
//! ```text
//! Volume                                  42
//! ━━━━━━━━━━━━━━━━●────────────────────────
//! ```
//!
//! [`RangeAttrs`] is the bare range-control option set (bounds, step,
//! disabled). `Slider` forwards it untouched to [`RangeTrack`], which draws
//! the track row.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{StatefulWidget, Widget};
use serde::{Deserialize, Serialize};

use crate::theme;

const FILLED: &str = "━";
const EMPTY: &str = "─";
const THUMB: &str = "●";
const MAX_DECIMALS: usize = 4;

/// Range-control options, forwarded verbatim to the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeAttrs {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub disabled: bool,
}

impl Default for RangeAttrs {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            disabled: false,
        }
    }
}

/// A value change proposed by user interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderInput {
    pub previous: f64,
    pub value: f64,
}

impl RangeAttrs {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self {
            min,
            max,
            step,
            disabled: false,
        }
    }

    fn bounds(&self) -> (f64, f64) {
        if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        }
    }

    /// Step used for keyboard moves. Non-positive or non-finite steps fall
    /// back to 1% of the span.
    pub fn effective_step(&self) -> f64 {
        if self.step.is_finite() && self.step > 0.0 {
            self.step
        } else {
            let (lo, hi) = self.bounds();
            ((hi - lo) / 100.0).max(f64::EPSILON)
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        let (lo, hi) = self.bounds();
        if value.is_nan() {
            return lo;
        }
        value.clamp(lo, hi)
    }

    /// Snap to the step grid anchored at `min`, then clamp.
    pub fn snap(&self, value: f64) -> f64 {
        let (lo, _) = self.bounds();
        let step = self.effective_step();
        let steps = ((value - lo) / step).round();
        let snapped = lo + steps * step;
        let factor = 10f64.powi(self.decimals() as i32);
        self.clamp((snapped * factor).round() / factor)
    }

    /// Position of `value` along the track, in `[0, 1]`.
    pub fn fraction(&self, value: f64) -> f64 {
        let (lo, hi) = self.bounds();
        if hi <= lo {
            return 0.0;
        }
        (self.clamp(value) - lo) / (hi - lo)
    }

    pub fn value_at_fraction(&self, fraction: f64) -> f64 {
        let (lo, hi) = self.bounds();
        self.snap(lo + fraction.clamp(0.0, 1.0) * (hi - lo))
    }

    /// Decimal places implied by the step (`0.25` gives 2, `5` gives 0).
    pub fn decimals(&self) -> usize {
        let step = self.effective_step();
        (0..MAX_DECIMALS)
            .find(|&d| {
                let scaled = step * 10f64.powi(d as i32);
                (scaled - scaled.round()).abs() < 1e-9
            })
            .unwrap_or(MAX_DECIMALS)
    }

    /// Render a value with the step's precision.
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.decimals(), value)
    }

    /// Translate a key press into a proposed value. Returns `None` when the
    /// key is not a slider key, the control is disabled, or nothing changes.
    pub fn on_key(&self, value: f64, key: KeyEvent) -> Option<SliderInput> {
        if self.disabled || key.kind != KeyEventKind::Press {
            return None;
        }
        let (lo, hi) = self.bounds();
        let step = self.effective_step();
        let proposed = match key.code {
            KeyCode::Left | KeyCode::Char('h') => value - step,
            KeyCode::Right | KeyCode::Char('l') => value + step,
            KeyCode::PageDown => value - step * 10.0,
            KeyCode::PageUp => value + step * 10.0,
            KeyCode::Home => lo,
            KeyCode::End => hi,
            _ => return None,
        };
        self.propose(value, proposed)
    }

    fn propose(&self, previous: f64, proposed: f64) -> Option<SliderInput> {
        let value = self.snap(proposed);
        if value == previous {
            None
        } else {
            Some(SliderInput { previous, value })
        }
    }
}

/// Caller-owned handle to a mounted slider.
///
/// The slider fills in its track area when rendered through
/// [`StatefulWidget`]. The owner can focus it or read its geometry, and
/// calls [`SliderHandle::release`] when the view holding it goes away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliderHandle {
    area: Option<Rect>,
    focused: bool,
}

impl SliderHandle {
    /// Track area from the last render, if mounted.
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    pub fn is_mounted(&self) -> bool {
        self.area.is_some()
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn release(&mut self) {
        self.area = None;
        self.focused = false;
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.is_some_and(|a| {
            column >= a.x && column < a.x + a.width && row >= a.y && row < a.y + a.height
        })
    }

    /// Translate a click at (`column`, `row`) into a proposed value.
    pub fn on_mouse(
        &self,
        value: f64,
        attrs: &RangeAttrs,
        column: u16,
        row: u16,
    ) -> Option<SliderInput> {
        if attrs.disabled || !self.contains(column, row) {
            return None;
        }
        let area = self.area?;
        let span = area.width.saturating_sub(1).max(1) as f64;
        let fraction = (column - area.x) as f64 / span;
        attrs.propose(value, attrs.value_at_fraction(fraction))
    }
}

/// The bare range track: one full-width row with a thumb.
#[derive(Debug, Clone)]
pub struct RangeTrack {
    value: f64,
    attrs: RangeAttrs,
    style: Style,
    focused: bool,
}

impl RangeTrack {
    pub fn new(value: f64, attrs: RangeAttrs) -> Self {
        Self {
            value,
            attrs,
            style: Style::default(),
            focused: false,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Column (relative to the track start) where the thumb lands.
    pub fn thumb_offset(&self, width: u16) -> u16 {
        if width == 0 {
            return 0;
        }
        let span = (width - 1) as f64;
        (self.attrs.fraction(self.value) * span).round() as u16
    }
}

impl Widget for RangeTrack {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mut base = theme::slider_track();
        if self.attrs.disabled {
            base = theme::muted().add_modifier(Modifier::DIM);
        }
        let style = base.patch(self.style);
        let thumb_style = if self.focused && !self.attrs.disabled {
            style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            style.add_modifier(Modifier::BOLD)
        };

        let thumb = self.thumb_offset(area.width);
        for i in 0..area.width {
            let (symbol, cell_style) = match i.cmp(&thumb) {
                std::cmp::Ordering::Less => (FILLED, style),
                std::cmp::Ordering::Equal => (THUMB, thumb_style),
                std::cmp::Ordering::Greater => (EMPTY, style),
            };
            buf.set_string(area.x + i, area.y, symbol, cell_style);
        }
    }
}

/// Range control with an optional label/value header.
#[derive(Debug, Clone)]
pub struct Slider<'a> {
    label: Option<&'a str>,
    show_value: bool,
    value: f64,
    attrs: RangeAttrs,
    style: Style,
}

impl<'a> Slider<'a> {
    pub fn new(value: f64) -> Self {
        Self {
            label: None,
            show_value: true,
            value,
            attrs: RangeAttrs::default(),
            style: Style::default(),
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn show_value(mut self, show: bool) -> Self {
        self.show_value = show;
        self
    }

    pub fn attrs(mut self, attrs: RangeAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.attrs.min = min;
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.attrs.max = max;
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.attrs.step = step;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.attrs.disabled = disabled;
        self
    }

    /// Extra track styling, layered over the fixed base style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = self.style.patch(style);
        self
    }

    /// Rows needed: header (if labeled) plus the track.
    pub fn height(&self) -> u16 {
        if self.label.is_some() {
            2
        } else {
            1
        }
    }

    fn render_inner(self, area: Rect, buf: &mut Buffer, focused: bool) -> Option<Rect> {
        if area.width == 0 || area.height == 0 {
            return None;
        }

        let mut track_y = area.y;
        if let Some(label) = self.label {
            if area.height >= 2 {
                let label_style = if focused {
                    theme::slider_label().patch(theme::accent())
                } else {
                    theme::slider_label()
                };
                buf.set_stringn(area.x, area.y, label, area.width as usize, label_style);
                if self.show_value {
                    let text = self.attrs.format(self.value);
                    let w = text.chars().count() as u16;
                    if w < area.width {
                        let x = area.x + area.width - w;
                        buf.set_string(x, area.y, &text, theme::slider_value());
                    }
                }
                track_y += 1;
            }
        }

        let track_area = Rect::new(area.x, track_y, area.width, 1);
        RangeTrack::new(self.value, self.attrs)
            .style(self.style)
            .focused(focused)
            .render(track_area, buf);
        Some(track_area)
    }
}

impl Widget for Slider<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf, false);
    }
}

impl StatefulWidget for Slider<'_> {
    type State = SliderHandle;

    fn render(self, area: Rect, buf: &mut Buffer, handle: &mut SliderHandle) {
        let focused = handle.focused;
        handle.area = self.render_inner(area, buf, focused);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::buffer_lines;
    use crossterm::event::KeyModifiers;
    use proptest::prelude::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn render(slider: Slider, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        Widget::render(slider, area, &mut buf);
        buffer_lines(&buf)
    }

    #[test]
    fn labeled_slider_shows_label_and_value() {
        let lines = render(
            Slider::new(42.0).label("Volume").show_value(true).min(0.0).max(100.0),
            40,
            2,
        );
        assert!(lines[0].contains("Volume"));
        assert!(lines[0].contains("42"));
        assert!(!lines[0].contains("42.0"));
        assert!(lines[1].contains(THUMB));
    }

    #[test]
    fn unlabeled_slider_has_no_header() {
        let slider = Slider::new(7.0).show_value(false);
        assert_eq!(slider.height(), 1);
        let lines = render(slider, 20, 2);
        // Track sits on the first row; the second row is untouched.
        assert!(lines[0].contains(THUMB));
        assert!(!lines[0].contains('7'));
        assert_eq!(lines[1].trim(), "");
    }

    #[test]
    fn show_value_false_hides_value_but_keeps_label() {
        let lines = render(Slider::new(42.0).label("Length").show_value(false), 30, 2);
        assert!(lines[0].contains("Length"));
        assert!(!lines[0].contains("42"));
    }

    #[test]
    fn value_is_shown_verbatim_even_out_of_range() {
        let lines = render(Slider::new(150.0).label("Gain").max(100.0), 30, 2);
        assert!(lines[0].contains("150"));
        // Thumb pinned to the right edge.
        assert!(lines[1].ends_with(THUMB));
    }

    #[test]
    fn thumb_position_tracks_value() {
        let attrs = RangeAttrs::new(0.0, 10.0, 1.0);
        assert_eq!(RangeTrack::new(0.0, attrs).thumb_offset(11), 0);
        assert_eq!(RangeTrack::new(5.0, attrs).thumb_offset(11), 5);
        assert_eq!(RangeTrack::new(10.0, attrs).thumb_offset(11), 10);
    }

    #[test]
    fn extra_style_is_layered_on_base() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        Widget::render(
            Slider::new(50.0).style(Style::default().add_modifier(Modifier::ITALIC)),
            area,
            &mut buf,
        );
        let cell = &buf[(0, 0)];
        assert_eq!(cell.fg, theme::slider_track().fg.unwrap());
        assert!(cell.modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn key_input_proposes_without_mutating() {
        let attrs = RangeAttrs::new(0.0, 100.0, 5.0);
        let value = 40.0;
        let input = attrs.on_key(value, press(KeyCode::Right)).unwrap();
        assert_eq!(input, SliderInput { previous: 40.0, value: 45.0 });

        // Rendering again with the old value still shows the old value.
        let lines = render(Slider::new(value).label("Volume").attrs(attrs), 30, 2);
        assert!(lines[0].contains("40"));
        assert!(!lines[0].contains("45"));
    }

    #[test]
    fn key_input_edges() {
        let attrs = RangeAttrs::new(0.0, 1.0, 0.1);
        assert_eq!(attrs.on_key(1.0, press(KeyCode::Right)), None);
        assert_eq!(attrs.on_key(0.5, press(KeyCode::Home)).unwrap().value, 0.0);
        assert_eq!(attrs.on_key(0.5, press(KeyCode::End)).unwrap().value, 1.0);
        assert_eq!(attrs.on_key(0.5, press(KeyCode::Char('x'))), None);
        assert!((attrs.on_key(0.5, press(KeyCode::Left)).unwrap().value - 0.4).abs() < 1e-9);

        let disabled = RangeAttrs { disabled: true, ..attrs };
        assert_eq!(disabled.on_key(0.5, press(KeyCode::Right)), None);
    }

    #[test]
    fn release_events_are_ignored() {
        let attrs = RangeAttrs::default();
        let mut key = press(KeyCode::Right);
        key.kind = KeyEventKind::Release;
        assert_eq!(attrs.on_key(10.0, key), None);
    }

    #[test]
    fn decimals_follow_step() {
        assert_eq!(RangeAttrs::new(0.0, 10.0, 1.0).decimals(), 0);
        assert_eq!(RangeAttrs::new(0.0, 2.0, 0.1).decimals(), 1);
        assert_eq!(RangeAttrs::new(0.0, 1.0, 0.25).decimals(), 2);
        assert_eq!(RangeAttrs::new(0.0, 2.0, 0.1).format(1.5), "1.5");
    }

    #[test]
    fn degenerate_step_falls_back() {
        let attrs = RangeAttrs::new(0.0, 50.0, 0.0);
        assert_eq!(attrs.effective_step(), 0.5);
        let attrs = RangeAttrs::new(0.0, 50.0, f64::NAN);
        assert_eq!(attrs.effective_step(), 0.5);
    }

    #[test]
    fn handle_tracks_mount_and_release() {
        let area = Rect::new(2, 3, 20, 4);
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 10));
        let mut handle = SliderHandle::default();
        assert!(!handle.is_mounted());

        StatefulWidget::render(Slider::new(10.0).label("Rate"), area, &mut buf, &mut handle);
        assert_eq!(handle.area(), Some(Rect::new(2, 4, 20, 1)));

        handle.focus();
        assert!(handle.is_focused());
        handle.release();
        assert!(!handle.is_mounted());
        assert!(!handle.is_focused());
    }

    #[test]
    fn mouse_click_maps_to_value() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 11, 2));
        let mut handle = SliderHandle::default();
        let attrs = RangeAttrs::new(0.0, 10.0, 1.0);
        StatefulWidget::render(
            Slider::new(0.0).attrs(attrs),
            Rect::new(0, 0, 11, 1),
            &mut buf,
            &mut handle,
        );

        assert_eq!(handle.on_mouse(0.0, &attrs, 5, 0).unwrap().value, 5.0);
        assert_eq!(handle.on_mouse(0.0, &attrs, 10, 0).unwrap().value, 10.0);
        assert_eq!(handle.on_mouse(0.0, &attrs, 0, 0), None);
        assert_eq!(handle.on_mouse(0.0, &attrs, 5, 1), None);
    }

    proptest! {
        #[test]
        fn key_steps_stay_in_bounds(
            min in -100.0..100.0_f64,
            span in 0.5..500.0_f64,
            step in 0.01..50.0_f64,
            start in 0.0..1.0_f64,
            presses in proptest::collection::vec(0..6u8, 1..40),
        ) {
            let attrs = RangeAttrs::new(min, min + span, step);
            let mut value = attrs.value_at_fraction(start);
            for p in presses {
                let code = match p {
                    0 => KeyCode::Left,
                    1 => KeyCode::Right,
                    2 => KeyCode::PageUp,
                    3 => KeyCode::PageDown,
                    4 => KeyCode::Home,
                    _ => KeyCode::End,
                };
                if let Some(input) = attrs.on_key(value, press(code)) {
                    prop_assert_eq!(input.previous, value);
                    value = input.value;
                }
                prop_assert!(value >= attrs.min && value <= attrs.max);
            }
        }
    }
}
