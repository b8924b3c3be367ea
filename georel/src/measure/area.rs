use crate::cartesian::{area_signed, CartesianBox, CartesianPoint2d};
use crate::contour::{ClosedContour, Contour};
use crate::geometry_type::{
    BoxGeometryType, ClosedContourGeometryType, ContourGeometryType, GeometryType,
    MultiContourGeometryType, MultiPointGeometryType, MultiPolygonGeometryType, PointGeometryType,
    PolygonGeometryType, SegmentGeometryType,
};
use crate::multi_polygon::MultiPolygon;
use crate::polygon::Polygon;
use crate::Geom;

/// Area enclosed by a geometry.
///
/// The area is unsigned, so it does not depend on the winding of the contours. The area of a polygon is the area
/// of its outer contour minus the areas of its holes. Points and linear geometries have zero area.
pub trait Area {
    /// Area of the geometry.
    fn area(&self) -> f64;
}

/// Specialization of [`Area`] for the geometry type `GT`.
pub trait AreaSpecialization<GT> {
    /// See [`Area::area`].
    fn area_spec(&self) -> f64;
}

impl<T> Area for T
where
    T: GeometryType + AreaSpecialization<<T as GeometryType>::Type>,
{
    fn area(&self) -> f64 {
        self.area_spec()
    }
}

macro_rules! zero_area {
    ($($gt:ty),*) => {$(
        impl<T: GeometryType<Type = $gt>> AreaSpecialization<$gt> for T {
            fn area_spec(&self) -> f64 {
                0.0
            }
        }
    )*};
}

zero_area!(
    PointGeometryType,
    SegmentGeometryType,
    ContourGeometryType,
    MultiPointGeometryType,
    MultiContourGeometryType
);

impl<B> AreaSpecialization<BoxGeometryType> for B
where
    B: CartesianBox,
    B::Point: CartesianPoint2d,
{
    fn area_spec(&self) -> f64 {
        let min = self.min_corner().to_f64();
        let max = self.max_corner().to_f64();

        (max.x - min.x) * (max.y - min.y)
    }
}

impl<P, C> AreaSpecialization<ClosedContourGeometryType> for C
where
    P: CartesianPoint2d,
    C: ClosedContour<Point = P>,
{
    fn area_spec(&self) -> f64 {
        area_signed(ClosedContour::iter_points(self)).abs()
    }
}

impl<P, Poly> AreaSpecialization<PolygonGeometryType> for Poly
where
    P: CartesianPoint2d,
    Poly: Polygon,
    Poly::Contour: Contour<Point = P>,
{
    fn area_spec(&self) -> f64 {
        polygon_area(self)
    }
}

impl<P, MP> AreaSpecialization<MultiPolygonGeometryType> for MP
where
    P: CartesianPoint2d,
    MP: MultiPolygon,
    <MP::Polygon as Polygon>::Contour: Contour<Point = P>,
{
    fn area_spec(&self) -> f64 {
        self.polygons().map(polygon_area).sum()
    }
}

fn polygon_area<P, Poly>(polygon: &Poly) -> f64
where
    P: CartesianPoint2d,
    Poly: Polygon,
    Poly::Contour: Contour<Point = P>,
{
    let outer = area_signed(polygon.outer_contour().iter_points()).abs();
    let holes: f64 = polygon
        .inner_contours()
        .map(|contour| area_signed(contour.iter_points()).abs())
        .sum();

    outer - holes
}

impl<P: CartesianPoint2d> Area for Geom<P> {
    fn area(&self) -> f64 {
        match self {
            Geom::Point(_) | Geom::Segment(_) | Geom::Contour(_) => 0.0,
            Geom::MultiPoint(_) | Geom::MultiContour(_) => 0.0,
            Geom::Rect(v) => v.area(),
            Geom::ClosedContour(v) => v.area(),
            Geom::Polygon(v) => v.area(),
            Geom::MultiPolygon(v) => v.area(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::{Point2, Rect};
    use crate::impls;

    fn square(x: i32, y: i32, size: i32) -> impls::ClosedContour<Point2<i32>> {
        impls::ClosedContour::new(vec![
            Point2::new(x, y),
            Point2::new(x + size, y),
            Point2::new(x + size, y + size),
            Point2::new(x, y + size),
        ])
    }

    #[test]
    fn areal_geometries() {
        assert_eq!(square(0, 0, 3).area(), 9.0);

        let mut clockwise = square(0, 0, 3);
        clockwise.points.reverse();
        assert_eq!(clockwise.area(), 9.0);

        let polygon = impls::Polygon::new(square(0, 0, 10), vec![square(1, 1, 2), clockwise]);
        assert_eq!(polygon.area(), 87.0);

        let multi = impls::MultiPolygon::from(vec![polygon, square(20, 20, 1).into()]);
        assert_eq!(multi.area(), 88.0);

        assert_eq!(Rect::new(1.0, 1.0, 3.0, 4.5).area(), 7.0);
    }

    #[test]
    fn box_spanning_integer_range() {
        let rect = Rect::new(i32::MIN, 0, i32::MAX, 2);
        assert_eq!(Area::area(&rect), 2.0 * u32::MAX as f64);
        assert_eq!(Geom::<Point2<i32>>::Rect(rect).area(), 2.0 * u32::MAX as f64);
    }

    #[test]
    fn non_areal_geometries() {
        assert_eq!(Point2::new(1.0, 1.0).area(), 0.0);
        let closed =
            impls::Contour::closed(vec![Point2::new(0, 0), Point2::new(0, 1), Point2::new(1, 1)]);
        assert_eq!(closed.area(), 0.0);
        assert_eq!(
            impls::Segment::new(Point2::new(0, 0), Point2::new(1, 1)).area(),
            0.0
        );
    }

    #[test]
    fn dynamic_geometries() {
        let geom: Geom<Point2<i32>> = Geom::Rect(Rect::new(0, 0, 2, 2));
        assert_eq!(geom.area(), 4.0);

        let geom: Geom<Point2<i32>> = square(0, 0, 2).into();
        assert_eq!(geom.area(), 4.0);

        let geom: Geom<Point2<i32>> = impls::Contour::open(vec![Point2::new(0, 0)]).into();
        assert_eq!(geom.area(), 0.0);
    }
}
