use crate::cartesian::CartesianPoint;

/// Axis aligned box in cartesian coordinate space of any number of dimensions, given by its two extreme corners.
///
/// Every coordinate of the minimum corner must not be greater than the corresponding coordinate of the maximum corner.
pub trait CartesianBox {
    /// Type of the corner points.
    type Point: CartesianPoint;

    /// Corner with the smallest coordinates.
    fn min_corner(&self) -> Self::Point;
    /// Corner with the largest coordinates.
    fn max_corner(&self) -> Self::Point;
}
