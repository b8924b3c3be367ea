use geo_types::{Coord, CoordNum, Point};

use crate::cartesian::{CartesianPoint, CartesianPoint2d};
use crate::geometry_type::{GeometryType, PointGeometryType};

impl<T: CoordNum + crate::num::CoordNum> CartesianPoint for Coord<T> {
    type Num = T;
    const DIMENSIONS: usize = 2;

    fn coord(&self, dimension: usize) -> Option<T> {
        match dimension {
            0 => Some(self.x),
            1 => Some(self.y),
            _ => None,
        }
    }
}

impl<T: CoordNum + crate::num::CoordNum> CartesianPoint2d for Coord<T> {
    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }
}

impl<T: CoordNum> GeometryType for Coord<T> {
    type Type = PointGeometryType;
}

impl<T: CoordNum + crate::num::CoordNum> CartesianPoint for Point<T> {
    type Num = T;
    const DIMENSIONS: usize = 2;

    fn coord(&self, dimension: usize) -> Option<T> {
        self.0.coord(dimension)
    }
}

impl<T: CoordNum + crate::num::CoordNum> CartesianPoint2d for Point<T> {
    fn x(&self) -> T {
        self.0.x
    }

    fn y(&self) -> T {
        self.0.y
    }
}

impl<T: CoordNum> GeometryType for Point<T> {
    type Type = PointGeometryType;
}
