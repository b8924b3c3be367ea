//! Equality of geometries read from WKT, checked through the dynamic dispatch in both argument orders and for both
//! integer and floating point coordinates.

#![cfg(feature = "geo-types")]

use std::str::FromStr;

use geo_types::{polygon, Coord, Geometry};
use georel::cartesian::Rect;
use georel::{equals, impls, Equals, Geom};
use wkt::TryFromWkt;

trait Coordinate:
    geo_types::CoordNum + georel::num::CoordNum + wkt::WktNum + FromStr + Default
{
}

impl<T> Coordinate for T where
    T: geo_types::CoordNum + georel::num::CoordNum + wkt::WktNum + FromStr + Default
{
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn geom<T: Coordinate>(wkt: &str) -> Geom<Coord<T>> {
    let geometry = Geometry::<T>::try_from_wkt_str(wkt).expect("valid wkt");
    Geom::try_from(geometry).expect("supported geometry")
}

fn ring<T: Coordinate>(wkt: &str) -> Geom<Coord<T>> {
    match geom::<T>(wkt) {
        Geom::Polygon(polygon) => Geom::ClosedContour(polygon.outer_contour),
        other => panic!("expected polygon, got {:?}", other.kind()),
    }
}

fn segment<T: Coordinate>(wkt: &str) -> Geom<Coord<T>> {
    match geom::<T>(wkt) {
        Geom::Contour(contour) => {
            assert_eq!(contour.len(), 2, "segment must have two points");
            Geom::Segment(impls::Segment::new(contour[0], contour[1]))
        }
        other => panic!("expected linestring, got {:?}", other.kind()),
    }
}

fn rect<T: Coordinate>(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Geom<Coord<T>> {
    let c = |v: i32| T::from_i32(v).expect("representable");
    Geom::Rect(Rect::new(c(x_min), c(y_min), c(x_max), c(y_max)))
}

fn check<T: Coordinate>(name: &str, a: &Geom<Coord<T>>, b: &Geom<Coord<T>>, expected: bool) {
    assert_eq!(equals(a, b), Ok(expected), "{name}: a = b");
    assert_eq!(equals(b, a), Ok(expected), "{name}: b = a");
}

const CASE_P1: &str = "POLYGON((0 0,0 2,2 2,0 0))";

fn points<T: Coordinate>() {
    check::<T>("p1", &geom("POINT(1 1)"), &geom("POINT(1 1)"), true);
    check::<T>("p2", &geom("POINT(1 1)"), &geom("POINT(1 2)"), false);
}

fn boxes<T: Coordinate>() {
    check::<T>("b1", &rect(1, 1, 2, 2), &rect(1, 2, 2, 2), false);
    check::<T>("b2", &rect(1, 2, 3, 4), &rect(1, 2, 3, 4), true);
}

fn rings<T: Coordinate>() {
    let p1 = ring::<T>(CASE_P1);
    check("poly_eq", &p1, &p1, true);
    check("poly_sh", &ring("POLYGON((2 2,0 0,0 2,2 2))"), &p1, true);
    check("poly_extra", &p1, &ring("POLYGON((0 0,0 2,2 2,1 1,0 0))"), true);
    check(
        "poly_shifted_extra1",
        &ring("POLYGON((2 2,1 1,0 0,0 2,2 2))"),
        &p1,
        true,
    );
    check(
        "poly_shifted_extra2",
        &ring("POLYGON((1 1,0 0,0 2,2 2,1 1))"),
        &p1,
        true,
    );
    check::<T>(
        "poly_degenerate",
        &ring("POLYGON((0 0,0 2,2 2,2 2,0 0))"),
        &ring("POLYGON((0 0,0 2,0 2,2 2,0 0))"),
        true,
    );
    check::<T>(
        "poly_bends",
        &ring("POLYGON((4 0,5 3,8 4,7 7,4 8,0 4,4 0))"),
        &ring("POLYGON((4 0,7 1,8 4,5 5,4 8,0 4,4 0))"),
        false,
    );
    check("poly_uneq", &p1, &ring("POLYGON((1 1,1 3,3 3,1 1))"), false);
}

fn polygons<T: Coordinate>() {
    check::<T>(
        "poly_sh2",
        &geom(CASE_P1),
        &geom("POLYGON((0 2,2 2,0 0,0 2))"),
        true,
    );
    check::<T>(
        "poly_hole",
        &geom("POLYGON((0 0,0 4,4 4,0 0))"),
        &geom("POLYGON((0 0,0 4,4 4,0 0),(1 1,2 1,2 2,1 2,1 1))"),
        false,
    );
    check::<T>(
        "poly_holes",
        &geom("POLYGON((0 0,0 4,4 4,0 0),(1 1,2 1,2 2,1 2,1 1))"),
        &geom("POLYGON((0 0,0 4,4 4,0 0),(1 1,2 1,2 2,1 2,1 1))"),
        true,
    );
    check::<T>(
        "poly_uneq_holes",
        &geom("POLYGON((0 0,0 4,4 4,0 0),(1 1,2 1,2 2,1 2,1 1))"),
        &geom("POLYGON((0 0,0 4,4 4,0 0),(2 2,3 2,3 3,2 3,2 2))"),
        false,
    );
    check::<T>(
        "poly_holes_diff_order",
        &geom("POLYGON((0 0,0 4,4 4,0 0),(1 1,2 1,2 2,1 2,1 1),(2 2,3 2,3 3,2 3,2 2))"),
        &geom("POLYGON((0 0,0 4,4 4,0 0),(2 2,3 2,3 3,2 3,2 2),(1 1,2 1,2 2,1 2,1 1))"),
        true,
    );
    check::<T>(
        "poly_holes_diff_order_3",
        &geom("POLYGON((0 0,0 10,10 10,0 0),(1 1,2 1,2 2,1 2,1 1),(4 1,5 1,5 2,4 2,4 1),(2 2,3 2,3 3,2 3,2 2))"),
        &geom("POLYGON((0 0,0 10,10 10,0 0),(4 1,5 1,5 2,4 2,4 1),(2 2,3 2,3 3,2 3,2 2),(1 1,2 1,2 2,1 2,1 1))"),
        true,
    );
    check::<T>(
        "poly_holes_shifted_points",
        &geom("POLYGON((0 0,0 3,3 3,3 0,0 0),(1 1,2 1,2 2,1 2,1 1))"),
        &geom("POLYGON((0 0,0 3,3 3,3 0,0 0),(2 2,1 2,1 1,2 1,2 2))"),
        true,
    );
    check::<T>("poly_ring", &geom(CASE_P1), &ring(CASE_P1), true);
}

fn box_and_areal<T: Coordinate>() {
    let square = "POLYGON((1 1,1 2,2 2,2 1,1 1))";
    check::<T>("boxring", &rect(1, 1, 2, 2), &ring(square), true);
    check::<T>("boxpoly", &rect(1, 1, 2, 2), &geom(square), true);
    check::<T>("boxpoly_uneq", &geom(square), &rect(1, 1, 2, 3), false);
}

fn segments<T: Coordinate>() {
    let s = segment::<T>("LINESTRING(0 0,3 3)");
    check("seg_eq", &s, &segment("LINESTRING(0 0,3 3)"), true);
    check("seg_rev", &s, &segment("LINESTRING(3 3,0 0)"), true);
    check("seg_part1", &s, &segment("LINESTRING(0 0,1 1)"), false);
    check("seg_part2", &s, &segment("LINESTRING(3 3,2 2)"), false);
    check("seg_overlap", &s, &segment("LINESTRING(1 1,4 4)"), false);
    check("seg_apart", &s, &segment("LINESTRING(1 0,2 0)"), false);
}

fn linestrings<T: Coordinate>() {
    let cases = [
        ("ls2d_1", "LINESTRING(1 1,3 3)", "LINESTRING(3 3,1 1)", true),
        ("ls2d_2", "LINESTRING(1 1,3 3,2 5)", "LINESTRING(1 1,2 2,3 3,2 5)", true),
        ("ls2d_3", "LINESTRING(1 0,3 3,2 5)", "LINESTRING(1 1,2 2,3 3,2 5)", false),
        ("ls2d_4", "LINESTRING(1 0,3 3,2 5)", "LINESTRING(1 1,3 3,2 5)", false),
        (
            "ls2d_5",
            "LINESTRING(0 5,5 5,10 5,10 0,5 0,5 5,5 10,10 10,15 10,15 5,10 5,10 10,10 15)",
            "LINESTRING(0 5,15 5,15 10,5 10,5 0,10 0,10 15)",
            true,
        ),
        (
            "ls2d_6",
            "LINESTRING(0 5,5 5,10 5,10 10,5 10,5 5,5 0)",
            "LINESTRING(0 5,5 5,5 10,10 10,10 5,5 5,5 0)",
            true,
        ),
        (
            "ls2d_7",
            "LINESTRING(0 5,10 5,10 10,5 10,5 0)",
            "LINESTRING(0 5,5 5,5 10,10 10,10 5,5 5,5 0)",
            true,
        ),
        ("ls2d_8", "LINESTRING(0 0,5 0,5 0,6 0)", "LINESTRING(0 0,6 0)", true),
        ("ls2d_seg", "LINESTRING(1 1,2 2)", "LINESTRING(1 1,2 2)", true),
        ("ls2d_rev", "LINESTRING(1 1,2 2)", "LINESTRING(2 2,1 1)", true),
        (
            "ls2d_ring1",
            "LINESTRING(0 0,5 0,5 5,0 5,0 0)",
            "LINESTRING(5 5,0 5,0 0,5 0,5 5)",
            true,
        ),
        (
            "ls2d_ring2",
            "LINESTRING(0 0,5 0,5 5,0 5,0 0)",
            "LINESTRING(5 5,5 0,0 0,0 5,5 5)",
            true,
        ),
        ("ls2d_spike", "LINESTRING(0 0,5 0,3 0,6 0)", "LINESTRING(0 0,6 0)", true),
        (
            "ls2d_overl_ring1",
            "LINESTRING(0 0,5 0,5 5,0 5,0 0)",
            "LINESTRING(5 5,0 5,0 0,5 0,5 5,0 5)",
            true,
        ),
        (
            "ls2d_overl_ring2",
            "LINESTRING(0 0,5 0,5 5,0 5,0 0)",
            "LINESTRING(5 5,5 0,0 0,0 5,5 5,5 0)",
            true,
        ),
    ];

    for (name, a, b, expected) in cases {
        check::<T>(name, &geom(a), &geom(b), expected);
    }
}

fn multi_linestrings<T: Coordinate>() {
    let cases = [
        ("ls_mls_1", "LINESTRING(0 0,1 0,2 0)", "MULTILINESTRING((0 0,2 0))", true),
        (
            "ls_mls_2",
            "LINESTRING(0 0,1 0,2 0)",
            "MULTILINESTRING((0 0,1 0),(1 0,2 0))",
            true,
        ),
        (
            "ls_mls_3",
            "LINESTRING(0 0,2 0,4 0)",
            "MULTILINESTRING((0 0,2 0),(2 0,3 0),(3 0,4 0))",
            true,
        ),
        (
            "ls_mls_duplicate",
            "LINESTRING(0 0,2 0,4 0)",
            "MULTILINESTRING((0 0,2 0),(2 0,3 0),(2 0,3 0),(3 0,4 0))",
            true,
        ),
        (
            "ls_mls_gap",
            "LINESTRING(0 0,2 0,4 0)",
            "MULTILINESTRING((0 0,2 0),(3 0,4 0))",
            false,
        ),
        (
            "ls_mls_spike1",
            "LINESTRING(0 0,2 0,2 2,2 0,4 0)",
            "MULTILINESTRING((0 0,4 0),(2 2,2 0))",
            true,
        ),
        (
            "ls_mls_spike2",
            "LINESTRING(0 0,2 0,2 2,2 0,4 0)",
            "MULTILINESTRING((0 0,4 0),(2 2,2 -1))",
            false,
        ),
        (
            "ls_mls_ring1",
            "LINESTRING(0 0,5 0,5 5,0 5,0 0)",
            "MULTILINESTRING((5 5,0 5,0 0),(0 0,5 0,5 5))",
            true,
        ),
        (
            "ls_mls_ring2",
            "LINESTRING(0 0,5 0,5 5,0 5,0 0)",
            "MULTILINESTRING((5 5,5 0,0 0),(0 0,0 5,5 5))",
            true,
        ),
        (
            "ls_mls_overl_ring1",
            "LINESTRING(0 0,5 0,5 5,0 5,0 0)",
            "MULTILINESTRING((5 5,0 5,0 0),(0 0,5 0,5 5,0 5))",
            true,
        ),
        (
            "ls_mls_overl_ring2",
            "LINESTRING(0 0,5 0,5 5,0 5,0 0)",
            "MULTILINESTRING((5 5,5 0,0 0),(0 0,0 5,5 5,5 0))",
            true,
        ),
        (
            "mls_mls",
            "MULTILINESTRING((0 5,10 5,10 10,5 10),(5 10,5 0,5 2),(5 2,5 5,0 5))",
            "MULTILINESTRING((5 5,0 5),(5 5,5 0),(10 10,10 5,5 5,5 10,10 10))",
            true,
        ),
    ];

    for (name, a, b, expected) in cases {
        check::<T>(name, &geom(a), &geom(b), expected);
    }
}

fn all<T: Coordinate>() {
    init_logger();
    points::<T>();
    boxes::<T>();
    rings::<T>();
    polygons::<T>();
    box_and_areal::<T>();
    segments::<T>();
    linestrings::<T>();
    multi_linestrings::<T>();
}

#[test]
fn integer_coordinates() {
    all::<i32>();
}

#[test]
fn float_coordinates() {
    all::<f64>();
}

#[test]
fn tiny_segments_are_not_equal() {
    init_logger();
    check::<f64>(
        "ls2d_small1",
        &geom("LINESTRING(5.6956521739130430148634331999347 -0.60869565217391330413931882503675,5.5 -0.50000000000000066613381477509392)"),
        &geom("LINESTRING(5.5 -0.50000000000000066613381477509392,5.5 -0.5)"),
        false,
    );
    check::<f64>(
        "ls2d_small2",
        &geom("LINESTRING(-3.2333333333333333925452279800083 5.5999999999999978683717927196994,-3.2333333333333333925452279800083 5.5999999999999996447286321199499)"),
        &geom("LINESTRING(-3.2333333333333325043668082798831 5.5999999999999996447286321199499,-3.2333333333333333925452279800083 5.5999999999999996447286321199499)"),
        false,
    );
}

#[test]
fn static_equality_of_geo_types() {
    let line: geo_types::LineString<f64> = vec![(0.0, 0.0), (2.0, 0.0), (4.0, 0.0)].into();
    let multi = geo_types::MultiLineString::new(vec![
        vec![(4.0, 0.0), (1.0, 0.0)].into(),
        vec![(0.0, 0.0), (1.0, 0.0)].into(),
    ]);
    assert!(line.equals(&multi));
    assert!(multi.equals(&line));

    let polygon = geo_types::polygon![
        (x: 1.0, y: 1.0),
        (x: 1.0, y: 2.0),
        (x: 2.0, y: 2.0),
        (x: 2.0, y: 1.0),
    ];
    let rect = geo_types::Rect::new((1.0, 1.0), (2.0, 2.0));
    assert!(polygon.equals(&rect));
    assert!(rect.equals(&polygon));
}
