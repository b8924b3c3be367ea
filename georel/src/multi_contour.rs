use crate::cartesian::{CartesianPoint2d, Rect};
use crate::contour::Contour;
use crate::geometry::CartesianGeometry2dSpecialization;
use crate::geometry_type::{GeometryType, MultiContourGeometryType};
use crate::segment::{any_within, SegmentRef};

/// Geometry consisting of several contours.
pub trait MultiContour {
    /// Contour type.
    type Contour: Contour;

    /// Iterator over contours.
    fn contours(&self) -> impl Iterator<Item = &Self::Contour>;

    /// Iterates over segments of all the contours.
    fn iter_segments(
        &self,
    ) -> impl Iterator<Item = SegmentRef<'_, <Self::Contour as Contour>::Point>> {
        self.contours().flat_map(|contour| contour.iter_segments())
    }
}

impl<P, C> CartesianGeometry2dSpecialization<P, MultiContourGeometryType> for C
where
    P: CartesianPoint2d,
    C: MultiContour + GeometryType<Type = MultiContourGeometryType>,
    C::Contour: Contour<Point = P>,
{
    fn is_point_inside_spec<Other: CartesianPoint2d<Num = P::Num>>(
        &self,
        point: &Other,
        tolerance: P::Num,
    ) -> bool {
        any_within(self.iter_segments(), point, tolerance)
    }

    fn bounding_rectangle_spec(&self) -> Option<Rect<P::Num>> {
        Rect::merge_all(
            self.contours()
                .filter_map(|c| Rect::from_points(c.iter_points())),
        )
    }
}
