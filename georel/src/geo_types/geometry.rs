use geo_types::{Coord, CoordNum, Geometry, LineString};

use crate::cartesian::Rect;
use crate::error::GeorelError;
use crate::impls;
use crate::Geom;

impl<T: CoordNum + crate::num::CoordNum> TryFrom<Geometry<T>> for Geom<Coord<T>> {
    type Error = GeorelError;

    fn try_from(value: Geometry<T>) -> Result<Self, Self::Error> {
        Ok(match value {
            Geometry::Point(v) => Geom::Point(v.0),
            Geometry::Line(v) => Geom::Segment(impls::Segment::new(v.start, v.end)),
            Geometry::LineString(v) => Geom::Contour(contour(v)),
            Geometry::Polygon(v) => Geom::Polygon(polygon(v)),
            Geometry::MultiPoint(v) => {
                Geom::MultiPoint(v.0.into_iter().map(|p| p.0).collect::<Vec<_>>().into())
            }
            Geometry::MultiLineString(v) => {
                Geom::MultiContour(v.0.into_iter().map(contour).collect::<Vec<_>>().into())
            }
            Geometry::MultiPolygon(v) => {
                Geom::MultiPolygon(v.0.into_iter().map(polygon).collect::<Vec<_>>().into())
            }
            Geometry::Rect(v) => Geom::Rect(Rect::new(v.min().x, v.min().y, v.max().x, v.max().y)),
            Geometry::Triangle(_) => {
                return Err(GeorelError::Conversion(
                    "triangles are not supported".to_string(),
                ))
            }
            Geometry::GeometryCollection(_) => {
                return Err(GeorelError::Conversion(
                    "geometry collections are not supported".to_string(),
                ))
            }
        })
    }
}

fn contour<T: CoordNum>(line: LineString<T>) -> impls::Contour<Coord<T>> {
    let is_closed = line.0.len() > 1 && line.is_closed();
    let mut points = line.0;
    if is_closed {
        points.pop();
        impls::Contour::closed(points)
    } else {
        impls::Contour::open(points)
    }
}

fn ring<T: CoordNum>(line: LineString<T>) -> impls::ClosedContour<Coord<T>> {
    let mut points = line.0;
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    impls::ClosedContour::new(points)
}

fn polygon<T: CoordNum>(polygon: geo_types::Polygon<T>) -> impls::Polygon<Coord<T>> {
    let (exterior, interiors) = polygon.into_inner();
    impls::Polygon::new(ring(exterior), interiors.into_iter().map(ring).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeometryKind;
    use assert_matches::assert_matches;
    use geo_types::{coord, line_string, point, polygon};

    #[test]
    fn closed_linestring_drops_repeated_point() {
        let line = line_string![(x: 0, y: 0), (x: 1, y: 0), (x: 1, y: 1), (x: 0, y: 0)];
        let geom = Geom::<Coord<i32>>::try_from(Geometry::LineString(line)).expect("conversion");
        assert_eq!(geom.kind(), GeometryKind::LineString);
        assert_eq!(
            geom,
            Geom::Contour(impls::Contour::closed(vec![
                coord! { x: 0, y: 0 },
                coord! { x: 1, y: 0 },
                coord! { x: 1, y: 1 },
            ]))
        );
    }

    #[test]
    fn polygon_rings() {
        let polygon = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0)],
            interiors: [[(x: 1.0, y: 1.0), (x: 2.0, y: 1.0), (x: 2.0, y: 2.0)]]
        );
        let geom = Geom::<Coord<f64>>::try_from(Geometry::Polygon(polygon)).expect("conversion");
        let Geom::Polygon(polygon) = geom else {
            panic!("not a polygon");
        };

        assert_eq!(polygon.outer_contour.points.len(), 3);
        assert_eq!(polygon.inner_contours[0].points.len(), 3);
    }

    #[test]
    fn simple_geometries() {
        let geom =
            Geom::<Coord<i32>>::try_from(Geometry::Point(point!(x: 1, y: 2))).expect("conversion");
        assert_eq!(geom, Geom::Point(coord! { x: 1, y: 2 }));

        let rect = geo_types::Rect::new(coord! { x: 3, y: 1 }, coord! { x: 1, y: 2 });
        let geom = Geom::<Coord<i32>>::try_from(Geometry::Rect(rect)).expect("conversion");
        assert_eq!(geom, Geom::Rect(Rect::new(1, 1, 3, 2)));
    }

    #[test]
    fn unsupported_geometries() {
        let triangle = geo_types::Triangle::new(
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 1.0, y: 0.0 },
            coord! { x: 0.0, y: 1.0 },
        );
        assert_matches!(
            Geom::<Coord<f64>>::try_from(Geometry::Triangle(triangle)),
            Err(GeorelError::Conversion(_))
        );
        assert_matches!(
            Geom::<Coord<f64>>::try_from(Geometry::GeometryCollection(Default::default())),
            Err(GeorelError::Conversion(_))
        );
    }
}
