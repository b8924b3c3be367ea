//! Geometric equality.
//!
//! Two geometries are equal if they consist of the same point set. The check does not depend on the number of
//! redundant vertices, the vertex a ring starts at, the direction of traversal, or the order of the holes and
//! members of multi-geometries.
//!
//! Points and boxes are compared coordinate by coordinate. All other combinations are compared by decomposing both
//! geometries into straight runs (see [`collect_vectors`](super::collect_vectors)) after a cheap trivial check of
//! their areas or lengths.
//!
//! [`Equals`] is implemented only for the supported combinations of geometry types, so comparing e.g. a point with a
//! polygon does not compile. The same combinations are listed in the runtime registry used by
//! [`equals`](crate::equals).

use std::cell::OnceCell;

use crate::cartesian::{CartesianBox, CartesianPoint};
use crate::geometry_type::{
    BoxGeometryType, ClosedContourGeometryType, ContourGeometryType, GeometryType,
    MultiContourGeometryType, MultiPolygonGeometryType, PointGeometryType, PolygonGeometryType,
    SegmentGeometryType,
};
use crate::measure::Area;
use crate::num::NearEq;
use crate::relate::collect_vectors::{same_vectors, CollectVectors, CollectedVector};
use crate::relate::disjoint;

/// Geometry that can be compared for equality with `Rhs`.
pub trait Equals<Rhs: ?Sized = Self> {
    /// Returns true if both geometries consist of the same point set.
    fn equals(&self, other: &Rhs) -> bool;
}

/// Specialization of [`Equals`] for the geometry types `GT1` and `GT2`.
pub trait EqualsSpecialization<Rhs: ?Sized, GT1, GT2> {
    /// See [`Equals::equals`].
    fn equals_spec(&self, other: &Rhs) -> bool;
}

impl<A, B> Equals<B> for A
where
    A: GeometryType,
    B: GeometryType,
    A: EqualsSpecialization<B, <A as GeometryType>::Type, <B as GeometryType>::Type>,
{
    fn equals(&self, other: &B) -> bool {
        self.equals_spec(other)
    }
}

impl<A, B> EqualsSpecialization<B, PointGeometryType, PointGeometryType> for A
where
    A: CartesianPoint,
    B: CartesianPoint<Num = A::Num>,
{
    fn equals_spec(&self, other: &B) -> bool {
        const { assert!(A::DIMENSIONS == B::DIMENSIONS, "points of different dimensions") };
        !disjoint::point_point(self, other)
    }
}

impl<A, B> EqualsSpecialization<B, BoxGeometryType, BoxGeometryType> for A
where
    A: CartesianBox,
    B: CartesianBox,
    B::Point: CartesianPoint<Num = <A::Point as CartesianPoint>::Num>,
{
    fn equals_spec(&self, other: &B) -> bool {
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

/// Returns true if the min and max corners of the boxes are equal in every dimension.
pub(crate) fn box_box<A, B>(a: &A, b: &B) -> bool
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
        if !a_min.near_eq(&b_min) || !a_max.near_eq(&b_max) {
            return false;
        }
    }

    true
}

/// One side of a comparison by straight runs. The runs are collected at most once.
#[derive(Debug)]
pub struct Operand<'a, G: ?Sized> {
    geometry: &'a G,
    runs: OnceCell<Vec<CollectedVector>>,
}

impl<'a, G: ?Sized> Operand<'a, G> {
    /// Wraps a geometry.
    pub fn new(geometry: &'a G) -> Self {
        Self {
            geometry,
            runs: OnceCell::new(),
        }
    }

    /// The wrapped geometry.
    pub fn geometry(&self) -> &'a G {
        self.geometry
    }
}

impl<G: CollectVectors + ?Sized> Operand<'_, G> {
    /// Canonical straight runs of the geometry.
    pub fn runs(&self) -> &[CollectedVector] {
        self.runs.get_or_init(|| self.geometry.collected_vectors())
    }
}

/// Necessary condition for two geometries to be equal, checked before the runs are compared.
pub trait TrivialCheck<A: ?Sized, B: ?Sized> {
    /// Returns false if the geometries cannot be equal.
    fn check(a: &Operand<'_, A>, b: &Operand<'_, B>) -> bool;
}

/// Equal areal geometries have equal areas.
#[derive(Debug, Copy, Clone, Default)]
pub struct AreaCheck;

impl<A: Area + ?Sized, B: Area + ?Sized> TrivialCheck<A, B> for AreaCheck {
    fn check(a: &Operand<'_, A>, b: &Operand<'_, B>) -> bool {
        same_measure(a.geometry().area(), b.geometry().area())
    }
}

/// Equal linear geometries cover lines of equal total length.
///
/// Parts that are traversed more than once are counted once, so this is not the same as comparing
/// [`Length`](crate::Length) of the geometries.
#[derive(Debug, Copy, Clone, Default)]
pub struct LengthCheck;

impl<A, B> TrivialCheck<A, B> for LengthCheck
where
    A: CollectVectors + ?Sized,
    B: CollectVectors + ?Sized,
{
    fn check(a: &Operand<'_, A>, b: &Operand<'_, B>) -> bool {
        same_measure(covered_length(a.runs()), covered_length(b.runs()))
    }
}

fn covered_length(runs: &[CollectedVector]) -> f64 {
    runs.iter()
        .map(|run| {
            let d = run.direction();
            d.dx().hypot(d.dy())
        })
        .sum()
}

/// Measures are sums of many terms, so they are compared with a looser tolerance than coordinates. The check
/// only needs to reject clearly different geometries.
fn same_measure(a: f64, b: f64) -> bool {
    approx::relative_eq!(a, b, epsilon = 1e-9, max_relative = 1e-9)
}

/// Compares two geometries by their straight runs, after the trivial check `C`.
pub fn equals_by_collection<C, A, B>(a: &A, b: &B) -> bool
where
    C: TrivialCheck<A, B>,
    A: CollectVectors + ?Sized,
    B: CollectVectors + ?Sized,
{
    let a = Operand::new(a);
    let b = Operand::new(b);
    if !C::check(&a, &b) {
        log::debug!("Geometries rejected by the trivial check");
        return false;
    }

    let (a, b) = (a.runs(), b.runs());
    if a.len() != b.len() {
        log::debug!(
            "Geometries have different number of straight runs: {} and {}",
            a.len(),
            b.len()
        );
        return false;
    }

    same_vectors(a, b)
}

macro_rules! collection_equals {
    ($check:ty => $(($gt1:ty, $gt2:ty)),* $(,)?) => {$(
        impl<A, B> EqualsSpecialization<B, $gt1, $gt2> for A
        where
            A: CollectVectors,
            B: CollectVectors,
            $check: TrivialCheck<A, B>,
        {
            fn equals_spec(&self, other: &B) -> bool {
                equals_by_collection::<$check, A, B>(self, other)
            }
        }
    )*};
}

macro_rules! reverse_dispatch {
    ($(($gt1:ty, $gt2:ty)),* $(,)?) => {$(
        impl<A, B> EqualsSpecialization<B, $gt1, $gt2> for A
        where
            B: EqualsSpecialization<A, $gt2, $gt1>,
        {
            fn equals_spec(&self, other: &B) -> bool {
                reversed::<A, B, $gt2, $gt1>(self, other)
            }
        }
    )*};
}

fn reversed<A, B, GT1, GT2>(a: &A, b: &B) -> bool
where
    A: ?Sized,
    B: EqualsSpecialization<A, GT1, GT2> + ?Sized,
{
    b.equals_spec(a)
}

collection_equals!(AreaCheck =>
    (ClosedContourGeometryType, ClosedContourGeometryType),
    (PolygonGeometryType, PolygonGeometryType),
    (PolygonGeometryType, ClosedContourGeometryType),
    (ClosedContourGeometryType, BoxGeometryType),
    (PolygonGeometryType, BoxGeometryType),
    (MultiPolygonGeometryType, MultiPolygonGeometryType),
    (MultiPolygonGeometryType, PolygonGeometryType),
    (MultiPolygonGeometryType, ClosedContourGeometryType),
);

collection_equals!(LengthCheck =>
    (ContourGeometryType, ContourGeometryType),
    (ContourGeometryType, MultiContourGeometryType),
    (MultiContourGeometryType, MultiContourGeometryType),
    (SegmentGeometryType, SegmentGeometryType),
    (ContourGeometryType, SegmentGeometryType),
);

reverse_dispatch!(
    (ClosedContourGeometryType, PolygonGeometryType),
    (BoxGeometryType, ClosedContourGeometryType),
    (BoxGeometryType, PolygonGeometryType),
    (PolygonGeometryType, MultiPolygonGeometryType),
    (ClosedContourGeometryType, MultiPolygonGeometryType),
    (MultiContourGeometryType, ContourGeometryType),
    (SegmentGeometryType, ContourGeometryType),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::{Point2, Point3, Rect};
    use crate::impls::{
        ClosedContour, Contour, MultiContour, MultiPolygon, Polygon, Segment,
    };

    fn points(coords: &[(i32, i32)]) -> Vec<Point2<i32>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn ring(coords: &[(i32, i32)]) -> ClosedContour<Point2<i32>> {
        ClosedContour::new(points(coords))
    }

    #[test]
    fn points_equal() {
        assert!(Point2::new(1, 1).equals(&Point2::new(1, 1)));
        assert!(!Point2::new(1, 1).equals(&Point2::new(1, 2)));
        assert!(Point3::new(1.0, 2.0, 3.0).equals(&Point3::new(1.0, 2.0, 3.0)));
        assert!(Point2::new(0.1 + 0.2, 0.0).equals(&Point2::new(0.3, 0.0)));
    }

    #[test]
    fn boxes_equal() {
        assert!(Rect::new(1, 2, 3, 4).equals(&Rect::new(1, 2, 3, 4)));
        assert!(Rect::new(1, 2, 3, 4).equals(&Rect::new(3, 4, 1, 2)));
        assert!(!Rect::new(1, 1, 2, 2).equals(&Rect::new(1, 2, 2, 2)));
    }

    #[test]
    fn rings_equal() {
        let triangle = ring(&[(0, 0), (0, 2), (2, 2), (0, 0)]);
        assert!(triangle.equals(&triangle));
        assert!(triangle.equals(&ring(&[(2, 2), (0, 0), (0, 2), (2, 2)])));
        assert!(triangle.equals(&ring(&[(0, 0), (2, 2), (0, 2)])));
        assert!(triangle.equals(&ring(&[(0, 0), (0, 2), (2, 2), (1, 1), (0, 0)])));
        assert!(triangle.equals(&ring(&[(0, 0), (0, 1), (0, 2), (2, 2), (0, 0)])));
        assert!(!triangle.equals(&ring(&[(1, 1), (1, 3), (3, 3), (1, 1)])));

        let a = ring(&[(4, 0), (5, 3), (8, 4), (7, 7), (4, 8), (0, 4), (4, 0)]);
        let b = ring(&[(4, 0), (7, 1), (8, 4), (5, 5), (4, 8), (0, 4), (4, 0)]);
        assert!(!a.equals(&b));
    }

    #[test]
    fn polygons_with_holes() {
        let outer = ring(&[(0, 0), (0, 9), (9, 9), (9, 0)]);
        let hole1 = ring(&[(1, 1), (2, 1), (2, 2), (1, 2)]);
        let hole2 = ring(&[(5, 5), (6, 5), (6, 6), (5, 6)]);

        let a = Polygon::new(outer.clone(), vec![hole1.clone(), hole2.clone()]);
        let b = Polygon::new(outer.clone(), vec![hole2.clone(), hole1.clone()]);
        assert!(a.equals(&b));

        let c = Polygon::new(outer.clone(), vec![hole1.clone()]);
        assert!(!a.equals(&c));
        assert!(!c.equals(&Polygon::from(outer.clone())));
        assert!(Polygon::from(outer.clone()).equals(&outer));
        assert!(outer.equals(&Polygon::from(outer.clone())));
    }

    #[test]
    fn box_and_areal() {
        let rect = Rect::new(1, 1, 2, 2);
        let square = ring(&[(1, 1), (1, 2), (2, 2), (2, 1), (1, 1)]);
        assert!(rect.equals(&square));
        assert!(square.equals(&rect));
        assert!(Polygon::from(square.clone()).equals(&rect));
        assert!(rect.equals(&Polygon::from(square.clone())));
        assert!(!Rect::new(1, 1, 2, 3).equals(&square));
    }

    #[test]
    fn multi_polygons() {
        let a = Polygon::from(points(&[(0, 0), (0, 1), (1, 1), (1, 0)]));
        let b = Polygon::from(points(&[(5, 5), (5, 6), (6, 6), (6, 5)]));
        let mp = MultiPolygon::from(vec![a.clone(), b.clone()]);
        assert!(mp.equals(&MultiPolygon::from(vec![b.clone(), a.clone()])));
        assert!(!mp.equals(&a));
        assert!(MultiPolygon::from(vec![a.clone()]).equals(&a));
        assert!(a.equals(&MultiPolygon::from(vec![a.clone()])));
        assert!(a.outer_contour.equals(&MultiPolygon::from(vec![a.clone()])));
    }

    #[test]
    fn linestrings() {
        let line = Contour::open(points(&[(0, 0), (1, 0), (2, 0)]));
        let multi = MultiContour::from(vec![Contour::open(points(&[(0, 0), (2, 0)]))]);
        assert!(line.equals(&multi));
        assert!(multi.equals(&line));
        assert!(line.equals(&Contour::open(points(&[(2, 0), (0, 0)]))));

        let split = MultiContour::from(vec![
            Contour::open(points(&[(0, 0), (1, 0)])),
            Contour::open(points(&[(1, 0), (2, 0)])),
        ]);
        assert!(multi.equals(&split));

        let segment = Segment::new(Point2::new(2, 0), Point2::new(0, 0));
        assert!(line.equals(&segment));
        assert!(segment.equals(&line));
        assert!(!segment.equals(&Segment::new(Point2::new(0, 0), Point2::new(1, 0))));
    }

    #[test]
    fn retraced_parts_are_counted_once() {
        let spike = Contour::open(points(&[(0, 0), (5, 0), (3, 0), (6, 0)]));
        let plain = Contour::open(points(&[(0, 0), (6, 0)]));
        assert!(LengthCheck::check(&Operand::new(&spike), &Operand::new(&plain)));
        assert!(spike.equals(&plain));
        assert!(plain.equals(&spike));

        let doubled = MultiContour::from(vec![
            Contour::open(points(&[(0, 0), (2, 0)])),
            Contour::open(points(&[(2, 0), (3, 0)])),
            Contour::open(points(&[(2, 0), (3, 0)])),
            Contour::open(points(&[(3, 0), (4, 0)])),
        ]);
        let line = Contour::open(points(&[(0, 0), (2, 0), (4, 0)]));
        assert!(line.equals(&doubled));

        let longer = Contour::open(points(&[(0, 0), (7, 0)]));
        assert!(!LengthCheck::check(&Operand::new(&spike), &Operand::new(&longer)));
        assert!(!spike.equals(&longer));
    }

    #[test]
    fn area_check_rejects_before_collecting() {
        let small = ring(&[(0, 0), (0, 1), (1, 1), (1, 0)]);
        let large = ring(&[(0, 0), (0, 2), (2, 2), (2, 0)]);
        let (a, b) = (Operand::new(&small), Operand::new(&large));
        assert!(!AreaCheck::check(&a, &b));
        assert!(a.runs.get().is_none());
        assert_eq!(a.runs().len(), 4);
    }

    #[test]
    fn degenerate_geometries_are_equal() {
        let a = ring(&[(1, 1), (1, 1), (1, 1)]);
        let b = ring(&[(3, 3)]);
        assert!(a.equals(&b));
    }
}
