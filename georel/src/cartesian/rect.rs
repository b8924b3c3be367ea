use serde::{Deserialize, Serialize};

use crate::cartesian::impls::Point2;
use crate::cartesian::traits::{CartesianBox, CartesianPoint2d};
use crate::geometry_type::{BoxGeometryType, GeometryType};
use crate::num::CoordNum;

/// Axis aligned rectangle (a box in 2d cartesian space).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    x_min: N,
    y_min: N,
    x_max: N,
    y_max: N,
}

impl<N: CoordNum> Rect<N> {
    /// Creates a new rectangle. The coordinates are normalized, so that `x_min <= x_max` and `y_min <= y_max`.
    pub fn new(x1: N, y1: N, x2: N, y2: N) -> Self {
        let (x_min, x_max) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (y_min, y_max) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Minimum x coordinate.
    pub fn x_min(&self) -> N {
        self.x_min
    }

    /// Maximum x coordinate.
    pub fn x_max(&self) -> N {
        self.x_max
    }

    /// Minimum y coordinate.
    pub fn y_min(&self) -> N {
        self.y_min
    }

    /// Maximum y coordinate.
    pub fn y_max(&self) -> N {
        self.y_max
    }

    /// Width of the rectangle. Computed in `f64`, so it does not overflow for integer coordinates.
    pub fn width(&self) -> f64 {
        let (min, max): (f64, f64) = (self.x_min.as_(), self.x_max.as_());
        max - min
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        let (min, max): (f64, f64) = (self.y_min.as_(), self.y_max.as_());
        max - min
    }

    /// Area of the rectangle.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: if self.x_min < other.x_min {
                self.x_min
            } else {
                other.x_min
            },
            y_min: if self.y_min < other.y_min {
                self.y_min
            } else {
                other.y_min
            },
            x_max: if self.x_max > other.x_max {
                self.x_max
            } else {
                other.x_max
            },
            y_max: if self.y_max > other.y_max {
                self.y_max
            } else {
                other.y_max
            },
        }
    }

    /// Merges all the rectangles of the iterator. Returns `None` if the iterator is empty.
    pub fn merge_all(iter: impl IntoIterator<Item = Self>) -> Option<Self> {
        iter.into_iter().reduce(|acc, rect| acc.merge(rect))
    }

    /// Rectangle of zero size at the given point.
    pub fn from_point(p: &impl CartesianPoint2d<Num = N>) -> Self {
        Self {
            x_min: p.x(),
            x_max: p.x(),
            y_min: p.y(),
            y_max: p.y(),
        }
    }

    /// Bounding rectangle of the points. Returns `None` if the iterator is empty.
    pub fn from_points<'a, P: CartesianPoint2d<Num = N> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        let mut x_min = first.x();
        let mut y_min = first.y();
        let mut x_max = first.x();
        let mut y_max = first.y();

        for p in points {
            if x_min > p.x() {
                x_min = p.x();
            }
            if y_min > p.y() {
                y_min = p.y();
            }
            if x_max < p.x() {
                x_max = p.x();
            }
            if y_max < p.y() {
                y_max = p.y();
            }
        }

        Some(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Returns true if the point is inside the rectangle or on its border.
    pub fn contains(&self, point: &impl CartesianPoint2d<Num = N>) -> bool {
        self.x_min <= point.x()
            && self.x_max >= point.x()
            && self.y_min <= point.y()
            && self.y_max >= point.y()
    }

    /// Returns true if the rectangles have at least one common point.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x_min <= other.x_max
            && self.x_max >= other.x_min
            && self.y_min <= other.y_max
            && self.y_max >= other.y_min
    }

    /// Converts coordinates of the rectangle into `f64`.
    pub fn to_f64(&self) -> Rect<f64> {
        Rect {
            x_min: self.x_min.as_(),
            y_min: self.y_min.as_(),
            x_max: self.x_max.as_(),
            y_max: self.y_max.as_(),
        }
    }
}

impl<N: CoordNum> CartesianBox for Rect<N> {
    type Point = Point2<N>;

    fn min_corner(&self) -> Point2<N> {
        Point2::new(self.x_min, self.y_min)
    }

    fn max_corner(&self) -> Point2<N> {
        Point2::new(self.x_max, self.y_max)
    }
}

impl<N: CoordNum> GeometryType for Rect<N> {
    type Type = BoxGeometryType;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_corners() {
        let rect = Rect::new(3, 4, 1, 2);
        assert_eq!(rect.x_min(), 1);
        assert_eq!(rect.y_min(), 2);
        assert_eq!(rect.x_max(), 3);
        assert_eq!(rect.y_max(), 4);
        assert_eq!(rect.width(), 2.0);
        assert_eq!(rect.area(), 4.0);
    }

    #[test]
    fn size_of_full_range_box() {
        let rect = Rect::new(i32::MIN, 0, i32::MAX, 1);
        assert_eq!(rect.width(), u32::MAX as f64);
        assert_eq!(rect.height(), 1.0);
        assert_eq!(rect.area(), u32::MAX as f64);
    }

    #[test]
    fn merge_all() {
        assert_eq!(Rect::<f64>::merge_all(vec![]), None);
        let merged = Rect::merge_all(vec![
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(2.0, -1.0, 3.0, 0.5),
        ]);
        assert_eq!(merged, Some(Rect::new(0.0, -1.0, 3.0, 1.0)));
    }

    #[test]
    fn contains_and_intersects() {
        let rect = Rect::new(0, 0, 2, 2);
        assert!(rect.contains(&Point2::new(0, 1)));
        assert!(rect.contains(&Point2::new(1, 1)));
        assert!(!rect.contains(&Point2::new(3, 1)));

        assert!(rect.intersects(&Rect::new(2, 2, 3, 3)));
        assert!(!rect.intersects(&Rect::new(2, 3, 3, 4)));
    }

    #[test]
    fn from_points() {
        let points = [Point2::new(1.0, 5.0), Point2::new(-1.0, 2.0), Point2::new(0.0, 7.0)];
        assert_eq!(
            Rect::from_points(points.iter()),
            Some(Rect::new(-1.0, 2.0, 1.0, 7.0))
        );
        assert_eq!(Rect::<f64>::from_points(std::iter::empty::<&Point2>()), None);
    }
}
