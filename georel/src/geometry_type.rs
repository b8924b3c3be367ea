//! See documentation for [`GeometryType`] trait.
use serde::{Deserialize, Serialize};

/// This trait allows automatically implement algorithm traits (e.g. [`Equals`](crate::Equals),
/// [`Area`](crate::Area)) for types that implement specific geometry traits (e.g. [`Polygon`](crate::Polygon) etc).
pub trait GeometryType {
    /// Type of the geometry. Algorithms are implemented for one of the following types:
    /// * [`PointGeometryType`]
    /// * [`BoxGeometryType`]
    /// * [`SegmentGeometryType`]
    /// * [`ContourGeometryType`]
    /// * [`ClosedContourGeometryType`]
    /// * [`PolygonGeometryType`]
    /// * [`MultiPointGeometryType`]
    /// * [`MultiContourGeometryType`]
    /// * [`MultiPolygonGeometryType`]
    type Type: GeometryTypeMarker;
}

/// Marker type of a geometry kind.
pub trait GeometryTypeMarker {
    /// Runtime tag corresponding to the marker.
    const KIND: GeometryKind;
}

/// Point geometry marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct PointGeometryType;

/// Axis aligned box geometry marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct BoxGeometryType;

/// Straight line segment geometry marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct SegmentGeometryType;

/// Multipoint geometry marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct MultiPointGeometryType;

/// Contour (linestring) geometry marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct ContourGeometryType;

/// Closed contour (ring) geometry marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct ClosedContourGeometryType;

/// MultiContour geometry marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct MultiContourGeometryType;

/// Polygon geometry marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct PolygonGeometryType;

/// MultiPolygon geometry marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct MultiPolygonGeometryType;

impl GeometryTypeMarker for PointGeometryType {
    const KIND: GeometryKind = GeometryKind::Point;
}

impl GeometryTypeMarker for BoxGeometryType {
    const KIND: GeometryKind = GeometryKind::Box;
}

impl GeometryTypeMarker for SegmentGeometryType {
    const KIND: GeometryKind = GeometryKind::Segment;
}

impl GeometryTypeMarker for MultiPointGeometryType {
    const KIND: GeometryKind = GeometryKind::MultiPoint;
}

impl GeometryTypeMarker for ContourGeometryType {
    const KIND: GeometryKind = GeometryKind::LineString;
}

impl GeometryTypeMarker for ClosedContourGeometryType {
    const KIND: GeometryKind = GeometryKind::Ring;
}

impl GeometryTypeMarker for MultiContourGeometryType {
    const KIND: GeometryKind = GeometryKind::MultiLineString;
}

impl GeometryTypeMarker for PolygonGeometryType {
    const KIND: GeometryKind = GeometryKind::Polygon;
}

impl GeometryTypeMarker for MultiPolygonGeometryType {
    const KIND: GeometryKind = GeometryKind::MultiPolygon;
}

/// Runtime tag of a geometry kind.
///
/// Multiplicity is part of the kind: use [`GeometryKind::is_multi`] to check it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GeometryKind {
    /// Single point.
    Point,
    /// Axis aligned box.
    Box,
    /// Straight line segment.
    Segment,
    /// Open or closed sequence of connected points.
    LineString,
    /// Closed contour bounding a simple area.
    Ring,
    /// Outer ring with zero or more holes.
    Polygon,
    /// Set of points.
    MultiPoint,
    /// Set of linestrings.
    MultiLineString,
    /// Set of polygons.
    MultiPolygon,
}

impl GeometryKind {
    /// Returns the kind of the geometry type `T`.
    pub const fn of<T: GeometryType>() -> Self {
        <T::Type as GeometryTypeMarker>::KIND
    }

    /// Whether the geometry is a collection of geometries of the same kind.
    pub const fn is_multi(self) -> bool {
        matches!(
            self,
            Self::MultiPoint | Self::MultiLineString | Self::MultiPolygon
        )
    }

    /// Name of the kind as used in diagnostic messages.
    pub const fn term(self) -> &'static str {
        match self {
            Self::Point => "POINT",
            Self::Box => "BOX",
            Self::Segment => "SEGMENT",
            Self::LineString => "LINESTRING",
            Self::Ring => "RING",
            Self::Polygon => "POLYGON",
            Self::MultiPoint => "MULTI_POINT",
            Self::MultiLineString => "MULTI_LINESTRING",
            Self::MultiPolygon => "MULTI_POLYGON",
        }
    }
}

impl std::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.term())
    }
}
