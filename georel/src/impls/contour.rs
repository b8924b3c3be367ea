use serde::{Deserialize, Serialize};

use crate::geometry_type::{ClosedContourGeometryType, ContourGeometryType, GeometryType};

/// Linestring backed by a `Vec` of points. Implements [`crate::Contour`].
///
/// Dereferences into the vector of its vertices.
#[derive(Debug, Default, Clone, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct Contour<P> {
    points: Vec<P>,
    is_closed: bool,
}

impl<P> Contour<P> {
    /// Linestring whose last point is not connected to the first one.
    pub fn open(points: Vec<P>) -> Self {
        Self {
            points,
            is_closed: false,
        }
    }

    /// Linestring whose last point is connected to the first one. The first point must not be repeated at the end.
    pub fn closed(points: Vec<P>) -> Self {
        Self {
            points,
            is_closed: true,
        }
    }
}

impl<P> std::ops::Deref for Contour<P> {
    type Target = Vec<P>;

    fn deref(&self) -> &Vec<P> {
        &self.points
    }
}

impl<P> std::ops::DerefMut for Contour<P> {
    fn deref_mut(&mut self) -> &mut Vec<P> {
        &mut self.points
    }
}

impl<P> From<Vec<P>> for Contour<P> {
    fn from(points: Vec<P>) -> Self {
        Self::open(points)
    }
}

impl<P> crate::contour::Contour for Contour<P> {
    type Point = P;

    fn is_closed(&self) -> bool {
        self.is_closed
    }

    fn iter_points(&self) -> impl Iterator<Item = &P> {
        self.points.iter()
    }
}

impl<P> GeometryType for Contour<P> {
    type Type = ContourGeometryType;
}

/// Ring backed by a `Vec` of points. Implements [`crate::ClosedContour`].
#[derive(Debug, Default, Clone, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct ClosedContour<P> {
    /// Vertices of the ring, without the first one repeated at the end.
    pub points: Vec<P>,
}

impl<P> ClosedContour<P> {
    /// Creates a ring going through the given points.
    pub fn new(points: Vec<P>) -> Self {
        Self { points }
    }
}

impl<P> crate::contour::ClosedContour for ClosedContour<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &P> {
        self.points.iter()
    }
}

impl<P> GeometryType for ClosedContour<P> {
    type Type = ClosedContourGeometryType;
}
