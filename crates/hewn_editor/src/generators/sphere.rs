//! Ellipsoid generator.

use glam::Vec3;
use hewn_geometry::Bounds3;
use serde::Serialize;

use super::{BoundsGenerator, GeneratorDefinition};
use crate::placement::PlacementFlags;
use crate::preview::PreviewRenderer;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SphereDefinition {
    pub center: Vec3,
    pub diameter: Vec3,
    pub horizontal_segments: u32,
    pub vertical_segments: u32,
}

impl Default for SphereDefinition {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            diameter: Vec3::ONE,
            horizontal_segments: 8,
            vertical_segments: 8,
        }
    }
}

impl GeneratorDefinition for SphereDefinition {
    const KIND: &'static str = "Sphere";

    fn validate(&mut self) {
        self.diameter = self.diameter.abs();
        self.horizontal_segments = self.horizontal_segments.clamp(3, 64);
        self.vertical_segments = self.vertical_segments.clamp(2, 64);
    }
}

impl BoundsGenerator for SphereDefinition {
    fn placement_flags() -> PlacementFlags {
        PlacementFlags::SAME_LENGTH_XZ
            | PlacementFlags::HEIGHT_EQUALS_XZ
            | PlacementFlags::GENERATE_FROM_CENTER_Y
    }

    fn apply_bounds(&mut self, bounds: &Bounds3) {
        self.center = bounds.center();
        self.diameter = bounds.abs_size();
    }

    fn paint(renderer: &mut dyn PreviewRenderer, bounds: &Bounds3) {
        let center = bounds.center();
        let radius = bounds.abs_size() * 0.5;
        let (x, y, z) = (Vec3::X * radius.x, Vec3::Y * radius.y, Vec3::Z * radius.z);

        renderer.draw_ellipse(center, x, z);
        renderer.draw_ellipse(center, x, y);
        renderer.draw_ellipse(center, z, y);
    }
}
