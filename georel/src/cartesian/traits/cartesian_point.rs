use crate::cartesian::impls::Vector2;
use crate::num::{CoordNum, NearEq};
use num_traits::AsPrimitive;

/// A point in cartesian coordinate space of any number of dimensions.
///
/// This is the accessor protocol used by dimension-generic algorithms (point and box predicates). Coordinates are
/// accessed by dimension index, from `0` to `DIMENSIONS - 1`.
pub trait CartesianPoint {
    /// Numeric type of the coordinates.
    type Num: CoordNum;

    /// Number of dimensions of the point.
    const DIMENSIONS: usize;

    /// Returns the coordinate in the given dimension, or `None` if `dimension >= DIMENSIONS`.
    fn coord(&self, dimension: usize) -> Option<Self::Num>;
}

/// A point in 2-dimensional cartesian coordinate space.
pub trait CartesianPoint2d: CartesianPoint {
    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Returns true if both coordinates of the points are equal within the tolerance of the numeric type.
    fn near_equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool {
        self.x().near_eq(&other.x()) && self.y().near_eq(&other.y())
    }

    /// Vector from `other` to `self`.
    fn sub(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Vector2<Self::Num> {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Squared euclidean distance between the points.
    fn distance_sq(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        let v = self.sub(other);
        v.dx() * v.dx() + v.dy() * v.dy()
    }

    /// Coordinates of the point converted into `f64`.
    fn to_f64(&self) -> nalgebra::Point2<f64> {
        nalgebra::Point2::new(self.x().as_(), self.y().as_())
    }
}

/// A point in 3-dimensional cartesian coordinate space.
pub trait CartesianPoint3d: CartesianPoint {
    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;
    /// Z coordinate.
    fn z(&self) -> Self::Num;
}
