use geo_types::{Coord, CoordNum, LineString, Rect};

use crate::cartesian::CartesianBox;
use crate::geometry_type::{BoxGeometryType, GeometryType, PolygonGeometryType};
use crate::polygon::Polygon;

impl<T: CoordNum> Polygon for geo_types::Polygon<T> {
    type Contour = LineString<T>;

    fn outer_contour(&self) -> &Self::Contour {
        self.exterior()
    }

    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        self.interiors().iter()
    }
}

impl<T: CoordNum> GeometryType for geo_types::Polygon<T> {
    type Type = PolygonGeometryType;
}

impl<T: CoordNum + crate::num::CoordNum> CartesianBox for Rect<T> {
    type Point = Coord<T>;

    fn min_corner(&self) -> Coord<T> {
        self.min()
    }

    fn max_corner(&self) -> Coord<T> {
        self.max()
    }
}

impl<T: CoordNum> GeometryType for Rect<T> {
    type Type = BoxGeometryType;
}
