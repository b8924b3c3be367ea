use geo_types::{CoordNum, LineString, MultiLineString};

use crate::geometry_type::{GeometryType, MultiContourGeometryType};
use crate::multi_contour::MultiContour;

impl<T: CoordNum> MultiContour for MultiLineString<T> {
    type Contour = LineString<T>;

    fn contours(&self) -> impl Iterator<Item = &Self::Contour> {
        self.0.iter()
    }
}

impl<T: CoordNum> GeometryType for MultiLineString<T> {
    type Type = MultiContourGeometryType;
}
