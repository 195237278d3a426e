//! Closed 2D footprints.

use glam::Vec2;

use crate::error::{GeometryError, Result};

/// A closed polygonal footprint on the placement plane.
///
/// The last point connects back to the first. The center is the mean of
/// the control points; moving it translates the whole footprint.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve2D {
    points: Vec<Vec2>,
}

impl Curve2D {
    /// Build a footprint from its control points.
    pub fn new(points: Vec<Vec2>) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewPoints(points.len()));
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(GeometryError::NonFinitePoint { index });
        }
        Ok(Self { points })
    }

    /// Axis-aligned rectangle spanning `min`..`max`, wound counter-clockwise.
    pub fn rectangle(min: Vec2, max: Vec2) -> Self {
        Self {
            points: vec![
                Vec2::new(min.x, min.y),
                Vec2::new(max.x, min.y),
                Vec2::new(max.x, max.y),
                Vec2::new(min.x, max.y),
            ],
        }
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mean of the control points.
    pub fn center(&self) -> Vec2 {
        if self.points.is_empty() {
            return Vec2::ZERO;
        }
        let sum: Vec2 = self.points.iter().copied().sum();
        sum / self.points.len() as f32
    }

    /// Move the footprint so its center lands on `center`.
    pub fn set_center(&mut self, center: Vec2) {
        let delta = center - self.center();
        if delta == Vec2::ZERO {
            return;
        }
        for point in &mut self.points {
            *point += delta;
        }
    }

    /// Flip the winding direction.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Shoelace area; positive when wound counter-clockwise.
    pub fn signed_area(&self) -> f32 {
        let twice: f32 = self.edges().map(|(a, b)| a.perp_dot(b)).sum();
        twice * 0.5
    }

    /// Min and max corners of the footprint's extent.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        self.points.iter().fold(
            (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
            |(min, max), &p| (min.min(p), max.max(p)),
        )
    }

    /// Consecutive point pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}
