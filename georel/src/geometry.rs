use num_traits::AsPrimitive;

use crate::cartesian::{CartesianBox, CartesianPoint, CartesianPoint2d, Point2, Rect};
use crate::geometry_type::{
    BoxGeometryType, GeometryKind, GeometryType, PointGeometryType, SegmentGeometryType,
};
use crate::impls::{
    ClosedContour, Contour, MultiContour, MultiPoint, MultiPolygon, Polygon, Segment,
};
use crate::segment::SegmentRef;

/// Geometry of any supported kind.
///
/// This is the runtime counterpart of the trait based geometries: it carries its [`GeometryKind`] as the enum
/// variant, so algorithms can be selected by the kinds of the operands at run time (see [`equals`](crate::equals)).
#[derive(Debug, Clone, PartialEq)]
pub enum Geom<P: CartesianPoint> {
    /// Single point.
    Point(P),
    /// Axis aligned box.
    Rect(Rect<P::Num>),
    /// Straight line segment.
    Segment(Segment<P>),
    /// Linestring. Closed contours of this variant are still linestrings, not rings.
    Contour(Contour<P>),
    /// Ring.
    ClosedContour(ClosedContour<P>),
    /// Polygon.
    Polygon(Polygon<P>),
    /// Set of points.
    MultiPoint(MultiPoint<P>),
    /// Set of linestrings.
    MultiContour(MultiContour<P>),
    /// Set of polygons.
    MultiPolygon(MultiPolygon<P>),
}

impl<P: CartesianPoint> Geom<P> {
    /// Kind of the geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geom::Point(_) => GeometryKind::Point,
            Geom::Rect(_) => GeometryKind::Box,
            Geom::Segment(_) => GeometryKind::Segment,
            Geom::Contour(_) => GeometryKind::LineString,
            Geom::ClosedContour(_) => GeometryKind::Ring,
            Geom::Polygon(_) => GeometryKind::Polygon,
            Geom::MultiPoint(_) => GeometryKind::MultiPoint,
            Geom::MultiContour(_) => GeometryKind::MultiLineString,
            Geom::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }

    /// Number of dimensions of the geometry's coordinate space.
    pub fn dimensions(&self) -> usize {
        P::DIMENSIONS
    }
}

/// Geometry in 2d cartesian coordinates.
pub trait CartesianGeometry2d<P: CartesianPoint2d> {
    /// Returns true if the point lies inside the geometry or not further than `tolerance` from it.
    fn is_point_inside<Other: CartesianPoint2d<Num = P::Num>>(
        &self,
        point: &Other,
        tolerance: P::Num,
    ) -> bool;

    /// Smallest rectangle containing the geometry. Returns `None` for empty geometries.
    fn bounding_rectangle(&self) -> Option<Rect<P::Num>>;
}

impl<P: CartesianPoint2d> CartesianGeometry2d<P> for Geom<P> {
    fn is_point_inside<Other: CartesianPoint2d<Num = P::Num>>(
        &self,
        point: &Other,
        tolerance: P::Num,
    ) -> bool {
        match self {
            Geom::Point(v) => v.distance_sq(point) <= tolerance * tolerance,
            Geom::Rect(v) => {
                CartesianGeometry2d::<Point2<P::Num>>::is_point_inside(v, point, tolerance)
            }
            Geom::Segment(v) => v.is_point_inside(point, tolerance),
            Geom::Contour(v) => v.is_point_inside(point, tolerance),
            Geom::ClosedContour(v) => v.is_point_inside(point, tolerance),
            Geom::Polygon(v) => v.is_point_inside(point, tolerance),
            Geom::MultiPoint(v) => v.is_point_inside(point, tolerance),
            Geom::MultiContour(v) => v.is_point_inside(point, tolerance),
            Geom::MultiPolygon(v) => v.is_point_inside(point, tolerance),
        }
    }

    fn bounding_rectangle(&self) -> Option<Rect<P::Num>> {
        match self {
            Geom::Point(v) => Some(Rect::from_point(v)),
            Geom::Rect(v) => Some(*v),
            Geom::Segment(v) => v.bounding_rectangle(),
            Geom::Contour(v) => v.bounding_rectangle(),
            Geom::ClosedContour(v) => v.bounding_rectangle(),
            Geom::Polygon(v) => v.bounding_rectangle(),
            Geom::MultiPoint(v) => v.bounding_rectangle(),
            Geom::MultiContour(v) => v.bounding_rectangle(),
            Geom::MultiPolygon(v) => v.bounding_rectangle(),
        }
    }
}

impl<P: CartesianPoint> From<P> for Geom<P> {
    fn from(value: P) -> Self {
        Self::Point(value)
    }
}

impl<P: CartesianPoint> From<Segment<P>> for Geom<P> {
    fn from(value: Segment<P>) -> Self {
        Self::Segment(value)
    }
}

impl<P: CartesianPoint> From<Contour<P>> for Geom<P> {
    fn from(value: Contour<P>) -> Self {
        Self::Contour(value)
    }
}

impl<P: CartesianPoint> From<ClosedContour<P>> for Geom<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self::ClosedContour(value)
    }
}

impl<P: CartesianPoint> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Self::Polygon(value)
    }
}

impl<P: CartesianPoint> From<MultiPoint<P>> for Geom<P> {
    fn from(value: MultiPoint<P>) -> Self {
        Self::MultiPoint(value)
    }
}

impl<P: CartesianPoint> From<MultiContour<P>> for Geom<P> {
    fn from(value: MultiContour<P>) -> Self {
        Self::MultiContour(value)
    }
}

impl<P: CartesianPoint> From<MultiPolygon<P>> for Geom<P> {
    fn from(value: MultiPolygon<P>) -> Self {
        Self::MultiPolygon(value)
    }
}

/// Specialization of [`CartesianGeometry2d`] for one geometry type `GT`.
pub trait CartesianGeometry2dSpecialization<P: CartesianPoint2d, GT>: GeometryType {
    /// See [`CartesianGeometry2d::is_point_inside`].
    fn is_point_inside_spec<Other: CartesianPoint2d<Num = P::Num>>(
        &self,
        point: &Other,
        tolerance: P::Num,
    ) -> bool;

    /// See [`CartesianGeometry2d::bounding_rectangle`].
    fn bounding_rectangle_spec(&self) -> Option<Rect<P::Num>>;
}

impl<P, T> CartesianGeometry2d<P> for T
where
    P: CartesianPoint2d,
    T: CartesianGeometry2dSpecialization<P, <Self as GeometryType>::Type>,
{
    fn is_point_inside<Other: CartesianPoint2d<Num = P::Num>>(
        &self,
        point: &Other,
        tolerance: P::Num,
    ) -> bool {
        self.is_point_inside_spec(point, tolerance)
    }

    fn bounding_rectangle(&self) -> Option<Rect<P::Num>> {
        self.bounding_rectangle_spec()
    }
}

impl<P> CartesianGeometry2dSpecialization<P, PointGeometryType> for P
where
    P: CartesianPoint2d + GeometryType<Type = PointGeometryType>,
{
    fn is_point_inside_spec<Other: CartesianPoint2d<Num = P::Num>>(
        &self,
        point: &Other,
        tolerance: P::Num,
    ) -> bool {
        self.distance_sq(point) <= tolerance * tolerance
    }

    fn bounding_rectangle_spec(&self) -> Option<Rect<P::Num>> {
        Some(Rect::from_point(self))
    }
}

impl<P, B> CartesianGeometry2dSpecialization<P, BoxGeometryType> for B
where
    P: CartesianPoint2d,
    B: CartesianBox<Point = P> + GeometryType<Type = BoxGeometryType>,
{
    fn is_point_inside_spec<Other: CartesianPoint2d<Num = P::Num>>(
        &self,
        point: &Other,
        tolerance: P::Num,
    ) -> bool {
        let min = self.min_corner();
        let max = self.max_corner();

        point.x() + tolerance >= min.x()
            && point.x() <= max.x() + tolerance
            && point.y() + tolerance >= min.y()
            && point.y() <= max.y() + tolerance
    }

    fn bounding_rectangle_spec(&self) -> Option<Rect<P::Num>> {
        let min = self.min_corner();
        let max = self.max_corner();
        Some(Rect::new(min.x(), min.y(), max.x(), max.y()))
    }
}

impl<P, S> CartesianGeometry2dSpecialization<P, SegmentGeometryType> for S
where
    P: CartesianPoint2d,
    S: crate::segment::Segment<Point = P> + GeometryType<Type = SegmentGeometryType>,
{
    fn is_point_inside_spec<Other: CartesianPoint2d<Num = P::Num>>(
        &self,
        point: &Other,
        tolerance: P::Num,
    ) -> bool {
        let tolerance: f64 = tolerance.as_();
        SegmentRef(self.start(), self.end()).distance_to_point_sq(point) <= tolerance * tolerance
    }

    fn bounding_rectangle_spec(&self) -> Option<Rect<P::Num>> {
        Rect::from_points([self.start(), self.end()].into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let point: Geom<Point2<i32>> = Point2::new(1, 1).into();
        assert_eq!(point.kind(), GeometryKind::Point);
        assert_eq!(point.dimensions(), 2);

        let ring: Geom<Point2<i32>> = ClosedContour::new(vec![Point2::new(0, 0)]).into();
        assert_eq!(ring.kind(), GeometryKind::Ring);

        let closed_line: Geom<Point2<i32>> = Contour::closed(vec![Point2::new(0, 0)]).into();
        assert_eq!(closed_line.kind(), GeometryKind::LineString);

        let rect: Geom<Point2<i32>> = Geom::Rect(Rect::new(0, 0, 1, 1));
        assert_eq!(rect.kind(), GeometryKind::Box);
    }

    #[test]
    fn point_inside() {
        let geoms: Vec<Geom<Point2>> = vec![
            Point2::new(1.0, 1.0).into(),
            Geom::Rect(Rect::new(0.0, 0.0, 1.0, 1.0)),
            Segment::new(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0)).into(),
            Contour::open(vec![Point2::new(1.0, 0.0), Point2::new(1.0, 3.0)]).into(),
            MultiPoint::from(vec![Point2::new(5.0, 5.0), Point2::new(1.0, 1.1)]).into(),
        ];

        for geom in &geoms {
            assert!(geom.is_point_inside(&Point2::new(1.0, 1.0), 0.2), "{geom:?}");
            assert!(!geom.is_point_inside(&Point2::new(3.0, -1.0), 0.2), "{geom:?}");
        }
    }

    #[test]
    fn bounding_rectangle() {
        let segment: Geom<Point2<i32>> = Segment::new(Point2::new(3, 0), Point2::new(1, 2)).into();
        assert_eq!(segment.bounding_rectangle(), Some(Rect::new(1, 0, 3, 2)));

        let empty: Geom<Point2<i32>> = MultiPolygon::from(vec![]).into();
        assert_eq!(empty.bounding_rectangle(), None);
    }
}
