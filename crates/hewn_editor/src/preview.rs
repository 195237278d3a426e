//! Preview outlines painted while a generator is being placed.
//!
//! Generators paint in their local frame; the renderer maps every point
//! through the current placement matrix so the host can draw the lines
//! straight into the scene view.

use glam::{Mat4, Vec3};
use hewn_geometry::consts::TAU;

/// Line sink for generator previews.
pub trait PreviewRenderer {
    /// Matrix applied to every subsequent point.
    fn set_matrix(&mut self, matrix: Mat4);

    fn draw_line(&mut self, from: Vec3, to: Vec3);

    /// Segments to use for curved outlines.
    fn segments(&self) -> usize {
        32
    }

    fn draw_polyline(&mut self, points: &[Vec3], closed: bool) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1]);
        }
        if closed && points.len() > 2 {
            self.draw_line(points[points.len() - 1], points[0]);
        }
    }

    /// Ellipse around `center` spanned by two radius vectors.
    fn draw_ellipse(&mut self, center: Vec3, radius_a: Vec3, radius_b: Vec3) {
        let segments = self.segments().max(3);
        let points: Vec<Vec3> = (0..segments)
            .map(|i| {
                let angle = TAU * i as f32 / segments as f32;
                center + radius_a * angle.cos() + radius_b * angle.sin()
            })
            .collect();
        self.draw_polyline(&points, true);
    }
}

/// Renderer that records world-space line segments for the host to draw.
#[derive(Clone, Debug)]
pub struct PreviewLines {
    matrix: Mat4,
    segments: usize,
    lines: Vec<[Vec3; 2]>,
}

impl Default for PreviewLines {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewLines {
    pub fn new() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
            segments: 32,
            lines: Vec::new(),
        }
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments.max(3);
        self
    }

    /// Drop last frame's lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Recorded segments in world space.
    pub fn lines(&self) -> &[[Vec3; 2]] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl PreviewRenderer for PreviewLines {
    fn set_matrix(&mut self, matrix: Mat4) {
        self.matrix = matrix;
    }

    fn draw_line(&mut self, from: Vec3, to: Vec3) {
        self.lines.push([
            self.matrix.transform_point3(from),
            self.matrix.transform_point3(to),
        ]);
    }

    fn segments(&self) -> usize {
        self.segments
    }
}
