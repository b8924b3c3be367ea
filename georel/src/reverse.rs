use crate::cartesian::CartesianPoint;
use crate::impls::{ClosedContour, Contour, MultiContour, MultiPolygon, Polygon};
use crate::Geom;

/// Geometry whose vertex order can be reversed in place.
///
/// Reversing does not change the point set of a geometry, so a reversed geometry is always
/// [equal](crate::Equals) to the original one. For polygons all the contours are reversed, including holes.
pub trait Reverse {
    /// Reverses the order of the vertices of every contour of the geometry.
    fn reverse(&mut self);
}

impl<P> Reverse for Contour<P> {
    fn reverse(&mut self) {
        <[P]>::reverse(self);
    }
}

impl<P> Reverse for ClosedContour<P> {
    fn reverse(&mut self) {
        self.points.reverse();
    }
}

impl<P> Reverse for Polygon<P> {
    fn reverse(&mut self) {
        self.outer_contour.reverse();
        for contour in &mut self.inner_contours {
            contour.reverse();
        }
    }
}

impl<P> Reverse for MultiContour<P> {
    fn reverse(&mut self) {
        for contour in self.contours_mut() {
            contour.reverse();
        }
    }
}

impl<P> Reverse for MultiPolygon<P> {
    fn reverse(&mut self) {
        for polygon in &mut self.parts {
            polygon.reverse();
        }
    }
}

impl<P: CartesianPoint> Reverse for Geom<P> {
    fn reverse(&mut self) {
        match self {
            Geom::Point(_) | Geom::Rect(_) => {}
            Geom::Segment(v) => std::mem::swap(&mut v.start, &mut v.end),
            Geom::Contour(v) => v.reverse(),
            Geom::ClosedContour(v) => v.reverse(),
            Geom::Polygon(v) => v.reverse(),
            Geom::MultiPoint(_) => {}
            Geom::MultiContour(v) => v.reverse(),
            Geom::MultiPolygon(v) => v.reverse(),
        }
    }
}

#[cfg(feature = "geo-types")]
mod geo_types_impls {
    use geo_types::{CoordNum, LineString, MultiLineString, MultiPolygon, Polygon};

    use super::Reverse;

    impl<T: CoordNum> Reverse for LineString<T> {
        fn reverse(&mut self) {
            self.0.reverse();
        }
    }

    impl<T: CoordNum> Reverse for Polygon<T> {
        fn reverse(&mut self) {
            self.exterior_mut(|exterior| exterior.reverse());
            self.interiors_mut(|interiors| {
                for interior in interiors {
                    interior.reverse();
                }
            });
        }
    }

    impl<T: CoordNum> Reverse for MultiLineString<T> {
        fn reverse(&mut self) {
            for line in &mut self.0 {
                line.reverse();
            }
        }
    }

    impl<T: CoordNum> Reverse for MultiPolygon<T> {
        fn reverse(&mut self) {
            for polygon in &mut self.0 {
                polygon.reverse();
            }
        }
    }
}
