use crate::cartesian::impls::Point2;
use crate::cartesian::traits::cartesian_point::CartesianPoint2d;
use crate::contour::Contour;
use crate::polygon::Polygon;
use crate::segment::SegmentRef;

/// Polygon in 2d cartesian coordinates. This trait is auto-implemented for all illegible types.
pub trait CartesianPolygon {
    /// Type of the points of the polygon.
    type Point: CartesianPoint2d;

    /// Returns true if the `point` lies inside or on one of the polygon's sides.
    ///
    /// Points inside holes are not contained in the polygon.
    fn contains_point<P>(&self, point: &P) -> bool
    where
        P: CartesianPoint2d<Num = <Self::Point as crate::cartesian::CartesianPoint>::Num>;
}

impl<P, C, T> CartesianPolygon for T
where
    P: CartesianPoint2d,
    C: Contour<Point = P>,
    T: Polygon<Contour = C>,
{
    type Point = P;

    fn contains_point<Point: CartesianPoint2d<Num = P::Num>>(&self, point: &Point) -> bool {
        winding_number(self.iter_segments(), point) % 2 != 0
    }
}

/// Sum of the winding numbers of the closed contours, that are given by their segments, around the point.
///
/// A point lying on one of the segments is considered to be wound around.
pub(crate) fn winding_number<'a, P, Other>(
    segments: impl Iterator<Item = SegmentRef<'a, P>>,
    point: &Other,
) -> i64
where
    P: CartesianPoint2d + 'a,
    Other: CartesianPoint2d<Num = P::Num>,
{
    let mut wn = 0i64;
    let x = point.x();
    let y = point.y();

    for segment in segments {
        if segment.0.x() < x && segment.1.x() < x {
            continue;
        }

        let is_to_right = segment.0.x() > x && segment.1.x() > x || {
            let x_max = if segment.0.x() > segment.1.x() {
                segment.0.x()
            } else {
                segment.1.x()
            };
            let ray_p1 = Point2::new(x, y);
            let ray_p2 = Point2::new(x_max, y);
            let ray = SegmentRef(&ray_p1, &ray_p2);

            segment.intersects(&ray)
        };

        if is_to_right {
            if segment.0.y() < y && segment.1.y() >= y {
                wn += 1;
            } else if segment.0.y() > y && segment.1.y() <= y {
                wn -= 1;
            }
        }
    }

    wn
}
