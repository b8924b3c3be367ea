use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::cartesian::traits::{CartesianPoint, CartesianPoint2d, CartesianPoint3d};
use crate::geometry_type::{GeometryType, PointGeometryType};
use crate::num::CoordNum;

/// A point in 2-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point2<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num> Point2<Num> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }
}

/// Vector between two points in 2-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Vector2<Num = f64> {
    dx: Num,
    dy: Num,
}

impl<Num: Copy> Vector2<Num> {
    /// Creates a new vector with the given coordinates.
    pub fn new(dx: Num, dy: Num) -> Self {
        Self { dx, dy }
    }

    /// Returns x coordinate of the vector.
    pub fn dx(&self) -> Num {
        self.dx
    }

    /// Returns y coordinate of the vector.
    pub fn dy(&self) -> Num {
        self.dy
    }
}

impl<Num> std::ops::Sub<Point2<Num>> for Point2<Num>
where
    Num: std::ops::Sub<Num, Output = Num>,
{
    type Output = Vector2<Num>;

    fn sub(self, rhs: Point2<Num>) -> Self::Output {
        Vector2 {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

impl<Num> AbsDiffEq for Point2<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

/// A point in 3-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point3<Num = f64> {
    x: Num,
    y: Num,
    z: Num,
}

impl<Num> Point3<Num> {
    /// Creates a new instance of the point by its coordinates.
    pub const fn new(x: Num, y: Num, z: Num) -> Self {
        Self { x, y, z }
    }
}

impl<Num: CoordNum> CartesianPoint for Point2<Num> {
    type Num = Num;
    const DIMENSIONS: usize = 2;

    fn coord(&self, dimension: usize) -> Option<Num> {
        match dimension {
            0 => Some(self.x),
            1 => Some(self.y),
            _ => None,
        }
    }
}

impl<Num: CoordNum> CartesianPoint2d for Point2<Num> {
    fn x(&self) -> Num {
        self.x
    }
    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: CoordNum> CartesianPoint for Point3<Num> {
    type Num = Num;
    const DIMENSIONS: usize = 3;

    fn coord(&self, dimension: usize) -> Option<Num> {
        match dimension {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }
}

impl<Num: CoordNum> CartesianPoint3d for Point3<Num> {
    fn x(&self) -> Self::Num {
        self.x
    }

    fn y(&self) -> Self::Num {
        self.y
    }

    fn z(&self) -> Self::Num {
        self.z
    }
}

impl<Num: CoordNum> GeometryType for Point2<Num> {
    type Type = PointGeometryType;
}

impl<Num: CoordNum> GeometryType for Point3<Num> {
    type Type = PointGeometryType;
}
