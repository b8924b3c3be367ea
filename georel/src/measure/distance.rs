use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianClosedContour, CartesianPoint2d, CartesianPolygon};
use crate::contour::{ClosedContour, Contour};
use crate::error::GeorelError;
use crate::geometry_type::{
    ClosedContourGeometryType, ContourGeometryType, GeometryKind, GeometryType,
    PointGeometryType, PolygonGeometryType, SegmentGeometryType,
};
use crate::multi_contour::MultiContour;
use crate::multi_polygon::MultiPolygon;
use crate::not_implemented::{not_implemented, DistanceTag, Term};
use crate::num::near_eq_f64;
use crate::polygon::Polygon;
use crate::segment::{Segment, SegmentRef};
use crate::Geom;

/// Shortest euclidean distance between two geometries.
///
/// Distance is implemented between a point and a point, segment, contour, ring or polygon (in both argument
/// orders). Points inside rings and polygons have zero distance to them. Distance to an empty geometry is
/// infinite.
pub trait Distance<Rhs: ?Sized = Self> {
    /// Distance between the geometries.
    fn distance(&self, other: &Rhs) -> f64;
}

/// Specialization of [`Distance`] for the geometry types `GT1` and `GT2`.
pub trait DistanceSpecialization<Rhs: ?Sized, GT1, GT2> {
    /// See [`Distance::distance`].
    fn distance_spec(&self, other: &Rhs) -> f64;
}

impl<A, B> Distance<B> for A
where
    A: GeometryType,
    B: GeometryType,
    A: DistanceSpecialization<B, <A as GeometryType>::Type, <B as GeometryType>::Type>,
{
    fn distance(&self, other: &B) -> f64 {
        self.distance_spec(other)
    }
}

impl<A, B> DistanceSpecialization<B, PointGeometryType, PointGeometryType> for A
where
    A: CartesianPoint2d,
    B: CartesianPoint2d<Num = A::Num>,
{
    fn distance_spec(&self, other: &B) -> f64 {
        point_point(self, other)
    }
}

impl<A, P, S> DistanceSpecialization<S, PointGeometryType, SegmentGeometryType> for A
where
    A: CartesianPoint2d,
    P: CartesianPoint2d<Num = A::Num>,
    S: Segment<Point = P>,
{
    fn distance_spec(&self, other: &S) -> f64 {
        SegmentRef(other.start(), other.end())
            .distance_to_point_sq(self)
            .sqrt()
    }
}

impl<A, P, C> DistanceSpecialization<C, PointGeometryType, ContourGeometryType> for A
where
    A: CartesianPoint2d,
    P: CartesianPoint2d<Num = A::Num>,
    C: Contour<Point = P>,
{
    fn distance_spec(&self, other: &C) -> f64 {
        contour_distance(other, self)
    }
}

impl<A, P, C> DistanceSpecialization<C, PointGeometryType, ClosedContourGeometryType> for A
where
    A: CartesianPoint2d,
    P: CartesianPoint2d<Num = A::Num>,
    C: ClosedContour<Point = P>,
{
    fn distance_spec(&self, other: &C) -> f64 {
        if CartesianClosedContour::contains_point(other, self) {
            return 0.0;
        }

        contour_distance(other, self)
    }
}

impl<A, P, Poly> DistanceSpecialization<Poly, PointGeometryType, PolygonGeometryType> for A
where
    A: CartesianPoint2d,
    P: CartesianPoint2d<Num = A::Num>,
    Poly: Polygon,
    Poly::Contour: Contour<Point = P>,
{
    fn distance_spec(&self, other: &Poly) -> f64 {
        polygon_distance(other, self)
    }
}

macro_rules! reverse_dispatch {
    ($(($gt1:ty, $gt2:ty)),* $(,)?) => {$(
        impl<A, B> DistanceSpecialization<B, $gt1, $gt2> for A
        where
            B: DistanceSpecialization<A, $gt2, $gt1>,
        {
            fn distance_spec(&self, other: &B) -> f64 {
                other.distance_spec(self)
            }
        }
    )*};
}

reverse_dispatch!(
    (SegmentGeometryType, PointGeometryType),
    (ContourGeometryType, PointGeometryType),
    (ClosedContourGeometryType, PointGeometryType),
    (PolygonGeometryType, PointGeometryType),
);

fn point_point<A, B>(a: &A, b: &B) -> f64
where
    A: CartesianPoint2d,
    B: CartesianPoint2d<Num = A::Num>,
{
    nalgebra::distance(&a.to_f64(), &b.to_f64())
}

/// Distance from the point to the closest segment of the contour. Contours without segments are treated as sets of
/// points.
fn contour_distance<C, P, Other>(contour: &C, point: &Other) -> f64
where
    C: Contour<Point = P>,
    P: CartesianPoint2d,
    Other: CartesianPoint2d<Num = P::Num>,
{
    match contour
        .iter_segments()
        .map(|segment| segment.distance_to_point_sq(point))
        .min_by(f64::total_cmp)
    {
        Some(distance_sq) => distance_sq.sqrt(),
        None => contour
            .iter_points()
            .map(|p| point_point(p, point))
            .min_by(f64::total_cmp)
            .unwrap_or(f64::INFINITY),
    }
}

fn polygon_distance<Poly, P, Other>(polygon: &Poly, point: &Other) -> f64
where
    Poly: Polygon,
    Poly::Contour: Contour<Point = P>,
    P: CartesianPoint2d,
    Other: CartesianPoint2d<Num = P::Num>,
{
    if CartesianPolygon::contains_point(polygon, point) {
        return 0.0;
    }

    polygon
        .iter_contours()
        .map(|contour| contour_distance(contour, point))
        .min_by(f64::total_cmp)
        .unwrap_or(f64::INFINITY)
}

/// Distance between a geometry and a point.
///
/// Returns [`GeorelError::NotImplemented`] for boxes and multi-geometries of points.
pub fn distance_to_point<P, Other>(geometry: &Geom<P>, point: &Other) -> Result<f64, GeorelError>
where
    P: CartesianPoint2d,
    Other: CartesianPoint2d<Num = P::Num>,
{
    let distance = match geometry {
        Geom::Point(v) => point_point(v, point),
        Geom::Segment(v) => SegmentRef(&v.start, &v.end)
            .distance_to_point_sq(point)
            .sqrt(),
        Geom::Contour(v) => contour_distance(v, point),
        Geom::ClosedContour(v) => {
            if CartesianClosedContour::contains_point(v, point) {
                0.0
            } else {
                contour_distance(v, point)
            }
        }
        Geom::Polygon(v) => polygon_distance(v, point),
        Geom::MultiContour(v) => v
            .contours()
            .map(|contour| contour_distance(contour, point))
            .min_by(f64::total_cmp)
            .unwrap_or(f64::INFINITY),
        Geom::MultiPolygon(v) => v
            .polygons()
            .map(|polygon| polygon_distance(polygon, point))
            .min_by(f64::total_cmp)
            .unwrap_or(f64::INFINITY),
        Geom::Rect(_) | Geom::MultiPoint(_) => {
            log::warn!("Distance to {} is not implemented", geometry.kind());
            return Err(not_implemented::<DistanceTag>([
                Term::Kind(geometry.kind()),
                Term::Kind(GeometryKind::Point),
            ]));
        }
    };

    Ok(distance)
}

/// Position of a point relative to a segment: the distance to the line through the segment and the distance along
/// that line to the nearest end of the segment.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPointAx {
    /// Distance from the segment's nearest end to the projection of the point, if the projection lies outside of
    /// the segment. Zero if it lies inside.
    pub along_track: f64,
    /// Distance from the point to its projection on the line through the segment.
    pub cross_track: f64,
}

impl ProjectedPointAx {
    /// Returns true if `self` exceeds `limit` in at least one of the components.
    pub fn exceeds(&self, limit: &ProjectedPointAx) -> bool {
        self.along_track > limit.along_track || self.cross_track > limit.cross_track
    }
}

/// Projects the point `p` onto the line through `p1` and `p2`. See [`ProjectedPointAx`].
///
/// If the segment has zero length both components equal the distance between `p` and `p1`.
pub fn projected_point_ax<P, Other>(p: &Other, p1: &P, p2: &P) -> ProjectedPointAx
where
    P: CartesianPoint2d,
    Other: CartesianPoint2d<Num = P::Num>,
{
    let p = p.to_f64();
    let p1 = p1.to_f64();
    let p2 = p2.to_f64();

    let v: Vector2<f64> = p2 - p1;
    let w: Vector2<f64> = p - p1;
    let c2 = v.dot(&v);

    if near_eq_f64(c2, 0.0) {
        let distance = nalgebra::distance(&p, &p1);
        return ProjectedPointAx {
            along_track: distance,
            cross_track: distance,
        };
    }

    let c1 = w.dot(&v);
    let projected = p1 + v * (c1 / c2);
    let cross_track = nalgebra::distance(&p, &projected);
    let along_track = if c1 <= 0.0 {
        nalgebra::distance(&p1, &projected)
    } else if c2 <= c1 {
        nalgebra::distance(&p2, &projected)
    } else {
        0.0
    };

    ProjectedPointAx {
        along_track,
        cross_track,
    }
}
