//! Upright cylinder generator with an elliptical cross-section.

use glam::Vec3;
use hewn_geometry::Bounds3;
use serde::Serialize;

use super::{BoundsGenerator, GeneratorDefinition};
use crate::preview::PreviewRenderer;

const MIN_SIDES: u32 = 3;
const MAX_SIDES: u32 = 128;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CylinderDefinition {
    /// Center of the bottom cap
    pub bottom_center: Vec3,
    pub diameter_x: f32,
    pub diameter_z: f32,
    /// Signed; negative heights grow downward from the bottom cap
    pub height: f32,
    pub sides: u32,
}

impl Default for CylinderDefinition {
    fn default() -> Self {
        Self {
            bottom_center: Vec3::ZERO,
            diameter_x: 1.0,
            diameter_z: 1.0,
            height: 1.0,
            sides: 16,
        }
    }
}

impl GeneratorDefinition for CylinderDefinition {
    const KIND: &'static str = "Cylinder";

    fn validate(&mut self) {
        self.sides = self.sides.clamp(MIN_SIDES, MAX_SIDES);
        self.diameter_x = self.diameter_x.abs();
        self.diameter_z = self.diameter_z.abs();
        if !self.height.is_finite() {
            self.height = 0.0;
        }
    }
}

impl BoundsGenerator for CylinderDefinition {
    fn apply_bounds(&mut self, bounds: &Bounds3) {
        let size = bounds.size();
        let center = bounds.center();
        self.bottom_center = Vec3::new(center.x, bounds.min.y, center.z);
        self.diameter_x = size.x.abs();
        self.diameter_z = size.z.abs();
        self.height = size.y;
    }

    fn paint(renderer: &mut dyn PreviewRenderer, bounds: &Bounds3) {
        let size = bounds.size();
        let center = bounds.center();
        let radius_x = Vec3::X * size.x.abs() * 0.5;
        let radius_z = Vec3::Z * size.z.abs() * 0.5;
        let bottom = Vec3::new(center.x, bounds.min.y, center.z);
        let top = Vec3::new(center.x, bounds.max.y, center.z);

        renderer.draw_ellipse(bottom, radius_x, radius_z);
        renderer.draw_ellipse(top, radius_x, radius_z);
        for side in [radius_x, -radius_x, radius_z, -radius_z] {
            renderer.draw_line(bottom + side, top + side);
        }
    }
}
