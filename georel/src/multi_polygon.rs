use crate::cartesian::{CartesianPoint2d, Rect};
use crate::contour::Contour;
use crate::geometry::CartesianGeometry2dSpecialization;
use crate::geometry_type::{GeometryType, MultiPolygonGeometryType};
use crate::polygon::Polygon;
use crate::segment::SegmentRef;

/// Geometry consisting of several polygons.
pub trait MultiPolygon {
    /// Polygon type.
    type Polygon: Polygon;

    /// Iterates over polygons.
    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon>;

    /// Iterates over segments of all contours of all the polygons.
    fn iter_segments(
        &self,
    ) -> impl Iterator<
        Item = SegmentRef<'_, <<Self::Polygon as Polygon>::Contour as Contour>::Point>,
    > {
        self.polygons().flat_map(|polygon| polygon.iter_segments())
    }
}

impl<P, Poly> CartesianGeometry2dSpecialization<P, MultiPolygonGeometryType> for Poly
where
    P: CartesianPoint2d,
    Poly: MultiPolygon + GeometryType<Type = MultiPolygonGeometryType>,
    <Poly::Polygon as Polygon>::Contour: Contour<Point = P>,
{
    fn is_point_inside_spec<Other: CartesianPoint2d<Num = P::Num>>(
        &self,
        point: &Other,
        tolerance: P::Num,
    ) -> bool {
        self.polygons()
            .any(|p| crate::polygon::is_point_inside(p, point, tolerance))
    }

    fn bounding_rectangle_spec(&self) -> Option<Rect<P::Num>> {
        Rect::merge_all(
            self.polygons()
                .filter_map(|p| Rect::from_points(p.outer_contour().iter_points())),
        )
    }
}
