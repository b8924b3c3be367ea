use num_traits::AsPrimitive;

use crate::cartesian::traits::cartesian_point::CartesianPoint2d;
use crate::cartesian::traits::polygon::winding_number;
use crate::contour::{ClosedContour, Contour};

/// Closed contour in 2d cartesian coordinates. This trait is auto-implemented for all closed contours.
pub trait CartesianClosedContour {
    /// Type of the points of the contour.
    type Point: CartesianPoint2d;

    /// Signed area of the contour. Positive for counterclockwise contours, negative for clockwise ones.
    fn area_signed(&self) -> f64
    where
        Self: Sized;

    /// Returns true if the point is inside the contour or on its border.
    fn contains_point<Other>(&self, point: &Other) -> bool
    where
        Self: Sized,
        Other: CartesianPoint2d<Num = <Self::Point as crate::cartesian::CartesianPoint>::Num>;
}

impl<P, T> CartesianClosedContour for T
where
    P: CartesianPoint2d,
    T: ClosedContour<Point = P>,
{
    type Point = P;

    fn area_signed(&self) -> f64
    where
        Self: Sized,
    {
        area_signed(ClosedContour::iter_points(self))
    }

    fn contains_point<Other>(&self, point: &Other) -> bool
    where
        Self: Sized,
        Other: CartesianPoint2d<Num = P::Num>,
    {
        winding_number(self.iter_segments(), point) != 0
    }
}

/// Signed area of the ring going through the given points (shoelace formula). The ring is closed implicitly, so
/// repeating the first point at the end does not change the result.
pub(crate) fn area_signed<'a, P>(points: impl Iterator<Item = &'a P>) -> f64
where
    P: CartesianPoint2d + 'a,
{
    let mut points = points.map(|p| -> (f64, f64) { (p.x().as_(), p.y().as_()) });
    let Some(first) = points.next() else {
        return 0.0;
    };

    let mut prev = first;
    let mut aggr = 0.0;
    for p in points.chain(std::iter::once(first)) {
        aggr += prev.0 * p.1 - p.0 * prev.1;
        prev = p;
    }

    aggr / 2.0
}

/// Contour in 2d cartesian coordinates. This trait is auto-implemented for all contours.
pub trait CartesianContour<P: CartesianPoint2d>: Contour<Point = P> {
    /// Squared distance from the point to the closest segment of the contour. Returns `None` if the contour has no
    /// segments.
    fn distance_to_point_sq<Point>(&self, point: &Point) -> Option<f64>
    where
        Self: Sized,
        Point: CartesianPoint2d<Num = P::Num>,
    {
        self.iter_segments()
            .map(|v| v.distance_to_point_sq(point))
            .min_by(f64::total_cmp)
    }
}

impl<T: Contour<Point = P>, P: CartesianPoint2d> CartesianContour<P> for T {}
