use crate::cartesian::CartesianPoint2d;
use crate::contour::Contour;
use crate::geometry_type::{
    BoxGeometryType, ClosedContourGeometryType, ContourGeometryType, GeometryType,
    MultiContourGeometryType, MultiPointGeometryType, MultiPolygonGeometryType, PointGeometryType,
    PolygonGeometryType, SegmentGeometryType,
};
use crate::multi_contour::MultiContour;
use crate::segment::{Segment, SegmentRef};
use crate::Geom;

/// Length of a linear geometry: the sum of the lengths of its segments.
///
/// Points and areal geometries (boxes, rings, polygons) have zero length.
pub trait Length {
    /// Length of the geometry.
    fn length(&self) -> f64;
}

/// Specialization of [`Length`] for the geometry type `GT`.
pub trait LengthSpecialization<GT> {
    /// See [`Length::length`].
    fn length_spec(&self) -> f64;
}

impl<T> Length for T
where
    T: GeometryType + LengthSpecialization<<T as GeometryType>::Type>,
{
    fn length(&self) -> f64 {
        self.length_spec()
    }
}

macro_rules! zero_length {
    ($($gt:ty),*) => {$(
        impl<T: GeometryType<Type = $gt>> LengthSpecialization<$gt> for T {
            fn length_spec(&self) -> f64 {
                0.0
            }
        }
    )*};
}

zero_length!(
    PointGeometryType,
    BoxGeometryType,
    ClosedContourGeometryType,
    PolygonGeometryType,
    MultiPointGeometryType,
    MultiPolygonGeometryType
);

impl<P, S> LengthSpecialization<SegmentGeometryType> for S
where
    P: CartesianPoint2d,
    S: Segment<Point = P>,
{
    fn length_spec(&self) -> f64 {
        segment_length(SegmentRef(self.start(), self.end()))
    }
}

impl<P, C> LengthSpecialization<ContourGeometryType> for C
where
    P: CartesianPoint2d,
    C: Contour<Point = P>,
{
    fn length_spec(&self) -> f64 {
        self.iter_segments().map(segment_length).sum()
    }
}

impl<P, MC> LengthSpecialization<MultiContourGeometryType> for MC
where
    P: CartesianPoint2d,
    MC: MultiContour,
    MC::Contour: Contour<Point = P>,
{
    fn length_spec(&self) -> f64 {
        self.iter_segments().map(segment_length).sum()
    }
}

fn segment_length<P: CartesianPoint2d>(segment: SegmentRef<'_, P>) -> f64 {
    nalgebra::distance(&segment.0.to_f64(), &segment.1.to_f64())
}

impl<P: CartesianPoint2d> Length for Geom<P> {
    fn length(&self) -> f64 {
        match self {
            Geom::Point(_) | Geom::Rect(_) | Geom::MultiPoint(_) => 0.0,
            Geom::ClosedContour(_) | Geom::Polygon(_) | Geom::MultiPolygon(_) => 0.0,
            Geom::Segment(v) => v.length(),
            Geom::Contour(v) => v.length(),
            Geom::MultiContour(v) => v.length(),
        }
    }
}
