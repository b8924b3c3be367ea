//! Linestrings and rings.
//!
//! A [`Contour`] is a sequence of points connected by straight segments. It is **closed** when the last point is
//! connected back to the first one. A [`ClosedContour`] is a contour that is always closed, which is what rings of
//! polygons are made of. Every `ClosedContour` is also a `Contour`.
//!
//! Closed contours do not repeat their first point at the end. The closing segment is produced by
//! [`Contour::iter_segments`] instead. A ring that does repeat the first point gives a zero-length closing segment,
//! which algorithms in this crate ignore.

use crate::cartesian::{CartesianClosedContour, CartesianPoint2d, Rect};
use crate::geometry::CartesianGeometry2dSpecialization;
use crate::geometry_type::{ClosedContourGeometryType, ContourGeometryType, GeometryType};
use crate::segment::{any_within, SegmentRef};

/// Sequence of points connected by straight segments (a linestring).
pub trait Contour {
    /// Type of the vertices.
    type Point;

    /// Whether the last point is connected to the first one.
    fn is_closed(&self) -> bool;

    /// Iterates over the vertices of the contour. The first vertex is not repeated at the end for closed contours.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Same as [`Contour::iter_points`], but for closed contours the first vertex is repeated at the end.
    fn iter_points_closing(&self) -> impl Iterator<Item = &Self::Point> {
        let closing = if self.is_closed() {
            self.iter_points().next()
        } else {
            None
        };

        self.iter_points().chain(closing)
    }

    /// Iterates over the segments between consecutive vertices, including the closing segment of closed contours.
    fn iter_segments(&self) -> impl Iterator<Item = SegmentRef<'_, Self::Point>> {
        let mut points = self.iter_points_closing();
        let first = points.next();
        points.scan(first, |prev, next| {
            let start = prev.replace(next)?;
            Some(SegmentRef(start, next))
        })
    }
}

/// A contour that is always closed (a ring).
pub trait ClosedContour {
    /// Type of the vertices.
    type Point;

    /// Iterates over the vertices of the ring, without repeating the first one at the end.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;
}

impl<P, T: ClosedContour<Point = P>> Contour for T {
    type Point = P;

    fn is_closed(&self) -> bool {
        true
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        ClosedContour::iter_points(self)
    }
}

impl<P, C> CartesianGeometry2dSpecialization<P, ContourGeometryType> for C
where
    P: CartesianPoint2d,
    C: Contour<Point = P> + GeometryType<Type = ContourGeometryType>,
{
    fn is_point_inside_spec<Other: CartesianPoint2d<Num = P::Num>>(
        &self,
        point: &Other,
        tolerance: P::Num,
    ) -> bool {
        any_within(self.iter_segments(), point, tolerance)
    }

    fn bounding_rectangle_spec(&self) -> Option<Rect<P::Num>> {
        Rect::from_points(self.iter_points())
    }
}

impl<P, C> CartesianGeometry2dSpecialization<P, ClosedContourGeometryType> for C
where
    P: CartesianPoint2d,
    C: ClosedContour<Point = P> + GeometryType<Type = ClosedContourGeometryType>,
{
    fn is_point_inside_spec<Other: CartesianPoint2d<Num = P::Num>>(
        &self,
        point: &Other,
        tolerance: P::Num,
    ) -> bool {
        self.contains_point(point) || any_within(self.iter_segments(), point, tolerance)
    }

    fn bounding_rectangle_spec(&self) -> Option<Rect<P::Num>> {
        Rect::from_points(ClosedContour::iter_points(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2;
    use crate::geometry::CartesianGeometry2d;

    #[test]
    fn iter_points_closing() {
        let contour =
            crate::impls::Contour::open(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        assert_eq!(contour.iter_points_closing().count(), 2);
        assert_eq!(
            contour.iter_points_closing().last(),
            Some(&Point2::new(1.0, 1.0))
        );

        let contour =
            crate::impls::ClosedContour::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        assert_eq!(contour.iter_points_closing().count(), 3);
        assert_eq!(
            contour.iter_points_closing().last(),
            Some(&Point2::new(0.0, 0.0))
        );
    }

    #[test]
    fn iter_segments() {
        let contour = crate::impls::Contour::open(vec![Point2::new(0.0, 0.0)]);
        assert_eq!(contour.iter_segments().count(), 0);

        let contour =
            crate::impls::Contour::open(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        assert_eq!(contour.iter_segments().count(), 1);
        assert_eq!(
            contour.iter_segments().last(),
            Some(SegmentRef(&Point2::new(0.0, 0.0), &Point2::new(1.0, 1.0)))
        );

        let contour =
            crate::impls::ClosedContour::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        assert_eq!(contour.iter_segments().count(), 2);
        assert_eq!(
            contour.iter_segments().last(),
            Some(SegmentRef(&Point2::new(1.0, 1.0), &Point2::new(0.0, 0.0)))
        );
    }

    #[test]
    fn is_point_inside() {
        let line = crate::impls::Contour::open(vec![Point2::new(0, 0), Point2::new(4, 0)]);
        assert!(line.is_point_inside(&Point2::new(2, 1), 1));
        assert!(!line.is_point_inside(&Point2::new(2, 2), 1));
        assert_eq!(line.bounding_rectangle(), Some(Rect::new(0, 0, 4, 0)));

        let ring = crate::impls::ClosedContour::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 2.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 0.0),
        ]);
        assert!(ring.is_point_inside(&Point2::new(1.0, 1.0), 0.0));
        assert!(ring.is_point_inside(&Point2::new(2.5, 1.0), 0.5));
        assert!(!ring.is_point_inside(&Point2::new(2.5, 1.0), 0.1));
    }
}
