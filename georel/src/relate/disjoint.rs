//! Disjointness of points and boxes.
//!
//! Two geometries are disjoint if they have no common point. Geometries that only touch each other (a point on the
//! border of a box, two boxes sharing a side) are not disjoint.

use crate::cartesian::{CartesianBox, CartesianPoint};
use crate::geometry_type::{BoxGeometryType, GeometryType, PointGeometryType};
use crate::num::NearEq;

/// Geometry that can be checked for having no common points with `Rhs`.
pub trait Disjoint<Rhs: ?Sized = Self> {
    /// Returns true if the geometries have no common points.
    fn is_disjoint(&self, other: &Rhs) -> bool;
}

/// Specialization of [`Disjoint`] for the geometry types `GT1` and `GT2`.
pub trait DisjointSpecialization<Rhs: ?Sized, GT1, GT2> {
    /// See [`Disjoint::is_disjoint`].
    fn is_disjoint_spec(&self, other: &Rhs) -> bool;
}

impl<A, B> Disjoint<B> for A
where
    A: GeometryType,
    B: GeometryType,
    A: DisjointSpecialization<B, <A as GeometryType>::Type, <B as GeometryType>::Type>,
{
    fn is_disjoint(&self, other: &B) -> bool {
        self.is_disjoint_spec(other)
    }
}

impl<A, B> DisjointSpecialization<B, PointGeometryType, PointGeometryType> for A
where
    A: CartesianPoint,
    B: CartesianPoint<Num = A::Num>,
{
    fn is_disjoint_spec(&self, other: &B) -> bool {
        const { assert!(A::DIMENSIONS == B::DIMENSIONS, "points of different dimensions") };
        point_point(self, other)
    }
}

impl<A, B> DisjointSpecialization<B, PointGeometryType, BoxGeometryType> for A
where
    A: CartesianPoint,
    B: CartesianBox,
    B::Point: CartesianPoint<Num = A::Num>,
{
    fn is_disjoint_spec(&self, other: &B) -> bool {
        const {
            assert!(
                A::DIMENSIONS == <B::Point as CartesianPoint>::DIMENSIONS,
                "point and box of different dimensions"
            )
        };
        point_box(self, other)
    }
}

impl<A, B> DisjointSpecialization<B, BoxGeometryType, PointGeometryType> for A
where
    B: DisjointSpecialization<A, PointGeometryType, BoxGeometryType>,
{
    fn is_disjoint_spec(&self, other: &B) -> bool {
        other.is_disjoint_spec(self)
    }
}

impl<A, B> DisjointSpecialization<B, BoxGeometryType, BoxGeometryType> for A
where
    A: CartesianBox,
    B: CartesianBox,
    B::Point: CartesianPoint<Num = <A::Point as CartesianPoint>::Num>,
{
    fn is_disjoint_spec(&self, other: &B) -> bool {
        const {
            assert!(
                <A::Point as CartesianPoint>::DIMENSIONS
                    == <B::Point as CartesianPoint>::DIMENSIONS,
                "boxes of different dimensions"
            )
        };
        box_box(self, other)
    }
}

/// Returns true if the points differ in at least one dimension.
///
/// Only the dimensions present in both points are compared.
pub fn point_point<A, B>(a: &A, b: &B) -> bool
where
    A: CartesianPoint,
    B: CartesianPoint<Num = A::Num>,
{
    coords(a).zip(coords(b)).any(|(a, b)| !a.near_eq(&b))
}

/// Returns true if the point lies outside the box in at least one dimension.
pub fn point_box<P, B>(point: &P, rect: &B) -> bool
where
    P: CartesianPoint,
    B: CartesianBox,
    B::Point: CartesianPoint<Num = P::Num>,
{
    let min = rect.min_corner();
    let max = rect.max_corner();
    for dimension in 0..P::DIMENSIONS {
        let (Some(c), Some(min), Some(max)) = (
            point.coord(dimension),
            min.coord(dimension),
            max.coord(dimension),
        ) else {
            break;
        };
        if is_less(c, min) || is_less(max, c) {
            return true;
        }
    }

    false
}

/// Returns true if the boxes are separated in at least one dimension.
pub fn box_box<A, B>(a: &A, b: &B) -> bool
where
    A: CartesianBox,
    B: CartesianBox,
    B::Point: CartesianPoint<Num = <A::Point as CartesianPoint>::Num>,
{
    let (a_min, a_max) = (a.min_corner(), a.max_corner());
    let (b_min, b_max) = (b.min_corner(), b.max_corner());

    for dimension in 0..<A::Point as CartesianPoint>::DIMENSIONS {
        let (Some(a_min), Some(a_max), Some(b_min), Some(b_max)) = (
            a_min.coord(dimension),
            a_max.coord(dimension),
            b_min.coord(dimension),
            b_max.coord(dimension),
        ) else {
            break;
        };
        if is_less(a_max, b_min) || is_less(b_max, a_min) {
            return true;
        }
    }

    false
}

pub(crate) fn coords<P: CartesianPoint>(point: &P) -> impl Iterator<Item = P::Num> + '_ {
    (0..P::DIMENSIONS).map_while(|dimension| point.coord(dimension))
}

fn is_less<N: NearEq + PartialOrd>(a: N, b: N) -> bool {
    a < b && !a.near_eq(&b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::{Point2, Point3, Rect};

    #[test]
    fn points() {
        assert!(!Point2::new(1, 1).is_disjoint(&Point2::new(1, 1)));
        assert!(Point2::new(1, 1).is_disjoint(&Point2::new(1, 2)));
        assert!(!Point2::new(0.1 + 0.2, 1.0).is_disjoint(&Point2::new(0.3, 1.0)));
        assert!(Point3::new(1.0, 1.0, 1.0).is_disjoint(&Point3::new(1.0, 1.0, 1.5)));
    }

    #[test]
    fn point_and_box() {
        let rect = Rect::new(0, 0, 2, 2);
        assert!(!Point2::new(1, 1).is_disjoint(&rect));
        assert!(!Point2::new(2, 1).is_disjoint(&rect));
        assert!(Point2::new(3, 1).is_disjoint(&rect));
        assert!(rect.is_disjoint(&Point2::new(1, -1)));
        assert!(!rect.is_disjoint(&Point2::new(0, 0)));
    }

    #[test]
    fn boxes() {
        let rect = Rect::new(0.0, 0.0, 2.0, 2.0);
        assert!(!rect.is_disjoint(&Rect::new(1.0, 1.0, 3.0, 3.0)));
        assert!(!rect.is_disjoint(&Rect::new(2.0, 0.0, 3.0, 1.0)));
        assert!(!rect.is_disjoint(&Rect::new(0.5, 0.5, 1.0, 1.0)));
        assert!(rect.is_disjoint(&Rect::new(2.5, 0.0, 3.0, 1.0)));
        assert!(rect.is_disjoint(&Rect::new(0.0, -2.0, 1.0, -1.0)));
    }
}
