//! Pure formatting of colors and gradients into style and attribute strings.

use super::color::Color;
use super::gradient::{Gradient, GradientStop};

/// Format a color as `rgba(r, g, b, a)`.
#[must_use]
pub fn color_string(color: &Color) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        color.r, color.g, color.b, color.a
    )
}

/// Format a gradient stop as `rgba(r, g, b, a) P%`.
#[must_use]
pub fn stop_string(stop: &GradientStop) -> String {
    format!(
        "{} {}",
        color_string(&stop.color),
        offset_string(stop.length_percentage)
    )
}

/// Format a gradient as `linear-gradient(Ddeg, <stop>, <stop>, ...)`.
#[must_use]
pub fn gradient_string(gradient: &Gradient) -> String {
    let parts: Vec<String> = std::iter::once(format!("{}deg", gradient.angle))
        .chain(gradient.stops.iter().map(stop_string))
        .collect();
    format!("linear-gradient({})", parts.join(", "))
}

/// SVG `gradientTransform` value for a gradient angle.
#[must_use]
pub fn rotation_transform(angle: i32) -> String {
    format!("rotate({angle})")
}

/// Percentage string used for CSS stop lengths and SVG stop offsets.
#[must_use]
pub fn offset_string(length_percentage: i32) -> String {
    format!("{length_percentage}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_string() {
        assert_eq!(color_string(&Color::new(25, 50, 12, 1)), "rgba(25, 50, 12, 1)");
        // alpha is emitted as-is, no 0-1 normalization
        assert_eq!(color_string(&Color::new(0, 0, 0, 255)), "rgba(0, 0, 0, 255)");
    }

    #[test]
    fn test_gradient_string() {
        let gradient = Gradient::new(
            45,
            vec![
                GradientStop::new(0, Color::rgb(255, 0, 0)),
                GradientStop::new(100, Color::new(0, 0, 255, 0)),
            ],
        );
        assert_eq!(
            gradient_string(&gradient),
            "linear-gradient(45deg, rgba(255, 0, 0, 1) 0%, rgba(0, 0, 255, 0) 100%)"
        );
    }

    #[test]
    fn test_gradient_string_without_stops() {
        assert_eq!(gradient_string(&Gradient::new(-30, vec![])), "linear-gradient(-30deg)");
    }

    #[test]
    fn test_svg_attribute_values() {
        assert_eq!(rotation_transform(90), "rotate(90)");
        assert_eq!(offset_string(35), "35%");
    }
}
