use geo_types::{Coord, CoordNum, Line, LineString};

use crate::contour::Contour;
use crate::geometry_type::{ContourGeometryType, GeometryType, SegmentGeometryType};
use crate::segment::Segment;

/// Closed linestrings repeat their first point at the end. The repeated point is skipped, since the closing
/// segment is produced by the contour itself.
impl<T: CoordNum> Contour for LineString<T> {
    type Point = Coord<T>;

    fn is_closed(&self) -> bool {
        self.0.len() > 1 && LineString::is_closed(self)
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        let count = if Contour::is_closed(self) {
            self.0.len() - 1
        } else {
            self.0.len()
        };

        self.0[..count].iter()
    }
}

impl<T: CoordNum> GeometryType for LineString<T> {
    type Type = ContourGeometryType;
}

impl<T: CoordNum> Segment for Line<T> {
    type Point = Coord<T>;

    fn start(&self) -> &Coord<T> {
        &self.start
    }

    fn end(&self) -> &Coord<T> {
        &self.end
    }
}

impl<T: CoordNum> GeometryType for Line<T> {
    type Type = SegmentGeometryType;
}
