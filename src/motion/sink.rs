//! Sinks - the write targets motions commit rendered values to.
//!
//! Hosts implement [`StyleSink`] and [`GradientNode`] over their live
//! elements. [`StyleMap`] and [`SvgGradient`] are in-memory implementations
//! for headless use and tests.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Style properties a motion can write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Fill,
    Background,
}

impl StyleProperty {
    /// CSS property name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Background => "background",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An element style surface accepting property strings.
pub trait StyleSink {
    /// Assign a style property.
    fn set_style(&mut self, property: StyleProperty, value: &str);
}

/// A gradient container node with child stop nodes.
pub trait GradientNode {
    /// Remove every child stop node.
    fn clear_stops(&mut self);

    /// Set an attribute on the container itself.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Append a child stop node after the existing ones.
    fn append_stop(&mut self, offset: &str, stop_color: &str);
}

/// In-memory style surface.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleMap {
    values: HashMap<StyleProperty, String>,
    writes: usize,
}

impl StyleMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a property.
    #[must_use]
    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.values.get(&property).map(String::as_str)
    }

    /// Total number of writes received.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl StyleSink for StyleMap {
    fn set_style(&mut self, property: StyleProperty, value: &str) {
        self.writes += 1;
        self.values.insert(property, value.to_string());
    }
}

/// A `<stop>` child of an in-memory gradient node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgStop {
    pub offset: String,
    pub stop_color: String,
}

/// In-memory `<linearGradient>` node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SvgGradient {
    attributes: BTreeMap<String, String>,
    stops: Vec<SvgStop>,
}

impl SvgGradient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node carrying an `id` attribute.
    #[must_use]
    pub fn with_id(id: &str) -> Self {
        let mut node = Self::new();
        node.set_attribute("id", id);
        node
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn stops(&self) -> &[SvgStop] {
        &self.stops
    }

    /// Serialize the node as SVG markup. Attributes are emitted in name order.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut markup = String::from("<linearGradient");
        for (name, value) in &self.attributes {
            markup.push_str(&format!(" {name}=\"{value}\""));
        }
        markup.push('>');
        for stop in &self.stops {
            markup.push_str(&format!(
                "<stop offset=\"{}\" stop-color=\"{}\"/>",
                stop.offset, stop.stop_color
            ));
        }
        markup.push_str("</linearGradient>");
        markup
    }
}

impl GradientNode for SvgGradient {
    fn clear_stops(&mut self) {
        self.stops.clear();
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn append_stop(&mut self, offset: &str, stop_color: &str) {
        self.stops.push(SvgStop {
            offset: offset.to_string(),
            stop_color: stop_color.to_string(),
        });
    }
}
