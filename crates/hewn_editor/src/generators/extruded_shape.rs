//! Free-drawn footprint extruded into a prism.

use hewn_geometry::{Axis, Curve2D, Vec2};
use serde::Serialize;

use super::{GeneratorDefinition, ShapeGenerator};
use crate::preview::PreviewRenderer;

/// Closed footprint extruded straight up (or down) by `height`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExtrudedShapeDefinition {
    pub shape: Curve2D,
    pub height: f32,
}

impl Default for ExtrudedShapeDefinition {
    fn default() -> Self {
        Self {
            shape: Curve2D::rectangle(Vec2::splat(-0.5), Vec2::splat(0.5)),
            height: 1.0,
        }
    }
}

impl GeneratorDefinition for ExtrudedShapeDefinition {
    const KIND: &'static str = "ExtrudedShape";

    fn validate(&mut self) {
        if !self.height.is_finite() {
            self.height = 0.0;
        }
        // Brushes are built from counter-clockwise footprints.
        if self.shape.signed_area() < 0.0 {
            self.shape.reverse();
        }
    }
}

impl ShapeGenerator for ExtrudedShapeDefinition {
    fn apply_initial_shape(&mut self, shape: &Curve2D) {
        self.shape = shape.clone();
    }

    fn apply_height(&mut self, height: f32) {
        self.height = height;
    }

    fn paint(renderer: &mut dyn PreviewRenderer, shape: &Curve2D, height: f32) {
        let bottom: Vec<_> = shape.points().iter().map(|&p| Axis::Y.plane_point(p)).collect();
        renderer.draw_polyline(&bottom, true);
        if height == 0.0 {
            return;
        }
        let top: Vec<_> = shape.points().iter().map(|&p| Axis::Y.extrude_point(p, height)).collect();
        renderer.draw_polyline(&top, true);
        for (b, t) in bottom.iter().zip(&top) {
            renderer.draw_line(*b, *t);
        }
    }
}
