//! Straight line segments.
//!
//! [`Segment`] is the trait for any two-point geometry. [`SegmentRef`] is a segment borrowing its points from
//! another geometry; it is what [`Contour::iter_segments`](crate::Contour::iter_segments) returns.

use nalgebra::Vector2;
use num_traits::AsPrimitive;

use crate::cartesian::{CartesianPoint2d, Orientation};
use crate::geometry_type::{GeometryType, SegmentGeometryType};

/// A straight line segment between two points.
pub trait Segment {
    /// Type of the endpoints.
    type Point;

    /// First endpoint of the segment.
    fn start(&self) -> &Self::Point;
    /// Second endpoint of the segment.
    fn end(&self) -> &Self::Point;
}

/// A strait line segment between two borrowed points.
#[derive(Debug, PartialEq)]
pub struct SegmentRef<'a, Point>(pub &'a Point, pub &'a Point);

impl<P> Clone for SegmentRef<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for SegmentRef<'_, P> {}

impl<'a, P: CartesianPoint2d> SegmentRef<'a, P> {
    /// Shortest euclidian distance (squared) between a point and the segment:
    ///
    /// * if the normal from the point to the segment ends inside the segment, the returned value is the squared length
    ///   of the normal
    /// * if the normal from the point to the segment ends outside of the segment, the returned value is the smaller one
    ///   of the distances between the point and the segment's endpoints
    pub fn distance_to_point_sq<Point: CartesianPoint2d<Num = P::Num>>(
        &self,
        point: &Point,
    ) -> f64 {
        let start = self.0.to_f64();
        let end = self.1.to_f64();
        let point = point.to_f64();

        if self.0.near_equal(self.1) {
            return (point - start).norm_squared();
        }

        let ds: Vector2<f64> = end - start;
        let dp: Vector2<f64> = point - start;
        let ds_len = ds.norm_squared();

        let r = dp.dot(&ds) / ds_len;
        if r <= 0.0 {
            dp.norm_squared()
        } else if r >= 1.0 {
            (point - end).norm_squared()
        } else {
            let cross = dp.y * ds.x - dp.x * ds.y;
            cross * cross / ds_len
        }
    }

    /// Returns true, if the segment has at least one common point with the `other` segment.
    pub fn intersects<Point: CartesianPoint2d<Num = P::Num>>(
        &self,
        other: &SegmentRef<Point>,
    ) -> bool {
        fn on_segment<Num: num_traits::Num + PartialOrd>(
            p: &impl CartesianPoint2d<Num = Num>,
            q: &impl CartesianPoint2d<Num = Num>,
            r: &impl CartesianPoint2d<Num = Num>,
        ) -> bool {
            let x_max = if p.x() >= r.x() { p.x() } else { r.x() };
            let x_min = if p.x() <= r.x() { p.x() } else { r.x() };
            let y_max = if p.y() >= r.y() { p.y() } else { r.y() };
            let y_min = if p.y() <= r.y() { p.y() } else { r.y() };

            q.x() <= x_max && q.x() >= x_min && q.y() <= y_max && q.y() >= y_min
        }

        let o1 = Orientation::triplet(self.0, other.0, self.1);
        let o2 = Orientation::triplet(self.0, other.1, self.1);
        let o3 = Orientation::triplet(other.0, self.0, other.1);
        let o4 = Orientation::triplet(other.0, self.1, other.1);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        if o1 == Orientation::Collinear && on_segment(self.0, other.0, self.1) {
            return true;
        }
        if o2 == Orientation::Collinear && on_segment(self.0, other.1, self.1) {
            return true;
        }
        if o3 == Orientation::Collinear && on_segment(other.0, self.0, other.1) {
            return true;
        }
        if o4 == Orientation::Collinear && on_segment(other.0, self.1, other.1) {
            return true;
        }

        false
    }
}

/// Returns true if any of the segments is not further than `tolerance` from the point.
pub(crate) fn any_within<'a, P, Other>(
    mut segments: impl Iterator<Item = SegmentRef<'a, P>>,
    point: &Other,
    tolerance: P::Num,
) -> bool
where
    P: CartesianPoint2d + 'a,
    Other: CartesianPoint2d<Num = P::Num>,
{
    let tolerance: f64 = tolerance.as_();
    segments.any(|segment| segment.distance_to_point_sq(point) <= tolerance * tolerance)
}

impl<P> Segment for SegmentRef<'_, P> {
    type Point = P;

    fn start(&self) -> &P {
        self.0
    }

    fn end(&self) -> &P {
        self.1
    }
}

impl<P> GeometryType for SegmentRef<'_, P> {
    type Type = SegmentGeometryType;
}
