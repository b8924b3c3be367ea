use crate::cartesian::{CartesianPoint2d, CartesianPolygon, Rect};
use crate::contour::Contour;
use crate::geometry::CartesianGeometry2dSpecialization;
use crate::geometry_type::{GeometryType, PolygonGeometryType};
use crate::segment::{any_within, SegmentRef};

/// Polygon geometry. Polygon consists of one outer contour, and zero or more inner contours.
///
/// Inner contours represent *holes* in a polygon. The order of the inner contours carries no meaning: two polygons
/// with the same holes listed in different order describe the same area.
///
/// All contours of a polygon are expected to be closed.
pub trait Polygon {
    /// Contour type.
    type Contour: Contour;

    /// Outer contour of the polygon.
    fn outer_contour(&self) -> &Self::Contour;
    /// iterates over inner contours.
    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour>;

    /// Iterates over all contours of the polygon starting with the outer one.
    fn iter_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        std::iter::once(self.outer_contour()).chain(self.inner_contours())
    }

    /// Iterates over all segments of the polygon contour lines.
    fn iter_segments(
        &self,
    ) -> impl Iterator<Item = SegmentRef<'_, <Self::Contour as Contour>::Point>> {
        self.iter_contours().flat_map(|contour| contour.iter_segments())
    }
}

impl<P, Poly> CartesianGeometry2dSpecialization<P, PolygonGeometryType> for Poly
where
    P: CartesianPoint2d,
    Poly: Polygon + GeometryType<Type = PolygonGeometryType>,
    Poly::Contour: Contour<Point = P>,
{
    fn is_point_inside_spec<Other: CartesianPoint2d<Num = P::Num>>(
        &self,
        point: &Other,
        tolerance: P::Num,
    ) -> bool {
        is_point_inside(self, point, tolerance)
    }

    fn bounding_rectangle_spec(&self) -> Option<Rect<P::Num>> {
        Rect::from_points(self.outer_contour().iter_points())
    }
}

/// A point is inside a polygon if it is contained in it, or is not further than `tolerance` from its border.
pub(crate) fn is_point_inside<P, Poly, Other>(
    polygon: &Poly,
    point: &Other,
    tolerance: P::Num,
) -> bool
where
    P: CartesianPoint2d,
    Poly: Polygon,
    Poly::Contour: Contour<Point = P>,
    Other: CartesianPoint2d<Num = P::Num>,
{
    polygon.contains_point(point) || any_within(polygon.iter_segments(), point, tolerance)
}
