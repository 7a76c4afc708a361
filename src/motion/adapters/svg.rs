//! Node-attribute adapter: rebuilds an SVG gradient node in place.

use crate::motion::render::{color_string, offset_string, rotation_transform};
use crate::motion::{Gradient, GradientNode};

/// Attribute carrying the gradient rotation on the container node.
pub const TRANSFORM_ATTRIBUTE: &str = "gradientTransform";

/// Replace the node's stops with the gradient's stops and set its rotation.
///
/// Existing stop nodes are cleared first; new ones are appended in stop order.
pub fn write_gradient_node<N: GradientNode + ?Sized>(gradient: &Gradient, node: &mut N) {
    node.clear_stops();
    node.set_attribute(TRANSFORM_ATTRIBUTE, &rotation_transform(gradient.angle));
    for stop in &gradient.stops {
        node.append_stop(
            &offset_string(stop.length_percentage),
            &color_string(&stop.color),
        );
    }
}
