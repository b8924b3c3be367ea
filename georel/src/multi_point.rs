use crate::cartesian::{CartesianPoint2d, Rect};
use crate::geometry::CartesianGeometry2dSpecialization;
use crate::geometry_type::{GeometryType, MultiPointGeometryType};

/// Geometry consisting of several points.
pub trait MultiPoint {
    /// Type of the points.
    type Point;

    /// Iterates over the points.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;
}

impl<P, MP> CartesianGeometry2dSpecialization<P, MultiPointGeometryType> for MP
where
    P: CartesianPoint2d,
    MP: MultiPoint<Point = P> + GeometryType<Type = MultiPointGeometryType>,
{
    fn is_point_inside_spec<Other: CartesianPoint2d<Num = P::Num>>(
        &self,
        point: &Other,
        tolerance: P::Num,
    ) -> bool {
        self.iter_points()
            .any(|p| p.distance_sq(point) <= tolerance * tolerance)
    }

    fn bounding_rectangle_spec(&self) -> Option<Rect<P::Num>> {
        Rect::from_points(self.iter_points())
    }
}
