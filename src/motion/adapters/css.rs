//! Style-string adapter: writes CSS values to a [`StyleSink`].

use crate::motion::render::{color_string, gradient_string};
use crate::motion::{Color, Gradient, StyleProperty, StyleSink};

/// Write a color to the `fill` property.
pub fn write_fill<S: StyleSink + ?Sized>(color: &Color, sink: &mut S) {
    sink.set_style(StyleProperty::Fill, &color_string(color));
}

/// Write a color to the `background` property.
pub fn write_background_color<S: StyleSink + ?Sized>(color: &Color, sink: &mut S) {
    sink.set_style(StyleProperty::Background, &color_string(color));
}

/// Write a `linear-gradient(...)` to the `background` property.
pub fn write_background_gradient<S: StyleSink + ?Sized>(gradient: &Gradient, sink: &mut S) {
    sink.set_style(StyleProperty::Background, &gradient_string(gradient));
}
