//! Axis-aligned box generator.

use hewn_geometry::Bounds3;
use serde::Serialize;

use super::{BoundsGenerator, GeneratorDefinition};
use crate::preview::PreviewRenderer;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BoxDefinition {
    pub bounds: Bounds3,
}

impl GeneratorDefinition for BoxDefinition {
    const KIND: &'static str = "Box";

    fn validate(&mut self) {
        if !(self.bounds.min.is_finite() && self.bounds.max.is_finite()) {
            self.bounds = Bounds3::default();
        }
        self.bounds = self.bounds.normalized();
    }
}

impl BoundsGenerator for BoxDefinition {
    fn apply_bounds(&mut self, bounds: &Bounds3) {
        self.bounds = *bounds;
    }

    fn paint(renderer: &mut dyn PreviewRenderer, bounds: &Bounds3) {
        let corners = bounds.corners();
        // Corner indices differing in exactly one bit share an edge.
        for a in 0..8usize {
            for bit in [1usize, 2, 4] {
                let b = a | bit;
                if b != a {
                    renderer.draw_line(corners[a], corners[b]);
                }
            }
        }
    }
}
