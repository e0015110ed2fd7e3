//! Reusable widgets shared by the views.

pub mod slider;

pub use slider::{RangeAttrs, RangeTrack, Slider, SliderHandle, SliderInput};
