//! In-memory scene of named sinks.

use std::collections::HashMap;

use super::SinkRegistry;
use crate::motion::{GradientNode, StyleMap, StyleSink, SvgGradient};

/// Named style surfaces and gradient nodes, for headless rendering.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    elements: HashMap<String, StyleMap>,
    gradients: HashMap<String, SvgGradient>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element with an empty style surface.
    pub fn add_element(&mut self, name: &str) -> &mut StyleMap {
        self.elements.entry(name.to_string()).or_default()
    }

    /// Register a gradient node whose `id` is `name`.
    pub fn add_gradient(&mut self, name: &str) -> &mut SvgGradient {
        self.gradients
            .entry(name.to_string())
            .or_insert_with(|| SvgGradient::with_id(name))
    }

    #[must_use]
    pub fn element(&self, name: &str) -> Option<&StyleMap> {
        self.elements.get(name)
    }

    #[must_use]
    pub fn gradient(&self, name: &str) -> Option<&SvgGradient> {
        self.gradients.get(name)
    }
}

impl SinkRegistry for Scene {
    fn style_sink(&mut self, target: &str) -> Option<&mut (dyn StyleSink + 'static)> {
        self.elements
            .get_mut(target)
            .map(|element| element as &mut (dyn StyleSink + 'static))
    }

    fn gradient_node(&mut self, target: &str) -> Option<&mut (dyn GradientNode + 'static)> {
        self.gradients
            .get_mut(target)
            .map(|node| node as &mut (dyn GradientNode + 'static))
    }
}
