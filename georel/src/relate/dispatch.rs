//! Runtime selection of the equality algorithm by the kinds of the operands.

use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPoint2d;
use crate::error::GeorelError;
use crate::geometry_type::GeometryKind;
use crate::not_implemented::{not_implemented, EqualsTag, Term};
use crate::relate::disjoint;
use crate::relate::equals::{box_box, equals_by_collection, AreaCheck, LengthCheck};
use crate::Geom;

/// Trivial check run before comparing straight runs of two geometries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrivialCheckKind {
    /// Areas must be equal.
    Area,
    /// Lengths must be equal.
    Length,
}

/// Algorithm used to compare two geometries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Points are equal if they are not disjoint.
    PointPoint,
    /// Boxes are equal if their corners are equal.
    BoxBox,
    /// Geometries are equal if they consist of the same straight runs.
    Collection(TrivialCheckKind),
}

/// Result of looking up a pair of geometry kinds in the registry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// The pair is registered in the given order.
    Direct(Strategy),
    /// The pair is registered in the reversed order. The operands must be swapped before applying the strategy.
    Reversed(Strategy),
    /// The pair is not registered in either order.
    NotImplemented,
}

#[derive(Debug, Copy, Clone)]
enum Dimensions {
    Any,
    Exactly(usize),
}

impl Dimensions {
    const fn matches(self, dimensions: usize) -> bool {
        match self {
            Dimensions::Any => true,
            Dimensions::Exactly(d) => d == dimensions,
        }
    }
}

#[derive(Debug, Copy, Clone)]
struct Registration {
    kind1: GeometryKind,
    kind2: GeometryKind,
    dimensions: Dimensions,
    strategy: Strategy,
}

const fn register(
    kind1: GeometryKind,
    kind2: GeometryKind,
    dimensions: Dimensions,
    strategy: Strategy,
) -> Registration {
    Registration {
        kind1,
        kind2,
        dimensions,
        strategy,
    }
}

const AREA: Strategy = Strategy::Collection(TrivialCheckKind::Area);
const LENGTH: Strategy = Strategy::Collection(TrivialCheckKind::Length);
const PLANAR: Dimensions = Dimensions::Exactly(2);

const REGISTRY: &[Registration] = {
    use GeometryKind::*;
    &[
        register(Point, Point, Dimensions::Any, Strategy::PointPoint),
        register(Box, Box, Dimensions::Any, Strategy::BoxBox),
        register(Ring, Ring, PLANAR, AREA),
        register(Polygon, Polygon, PLANAR, AREA),
        register(Polygon, Ring, PLANAR, AREA),
        register(Ring, Box, PLANAR, AREA),
        register(Polygon, Box, PLANAR, AREA),
        register(MultiPolygon, MultiPolygon, PLANAR, AREA),
        register(MultiPolygon, Polygon, PLANAR, AREA),
        register(MultiPolygon, Ring, PLANAR, AREA),
        register(LineString, LineString, PLANAR, LENGTH),
        register(LineString, MultiLineString, PLANAR, LENGTH),
        register(MultiLineString, MultiLineString, PLANAR, LENGTH),
        register(Segment, Segment, PLANAR, LENGTH),
        register(LineString, Segment, PLANAR, LENGTH),
    ]
};

const fn lookup(kind1: GeometryKind, kind2: GeometryKind, dimensions: usize) -> Option<Strategy> {
    let mut i = 0;
    while i < REGISTRY.len() {
        let registration = &REGISTRY[i];
        if registration.kind1 as u8 == kind1 as u8
            && registration.kind2 as u8 == kind2 as u8
            && registration.dimensions.matches(dimensions)
        {
            return Some(registration.strategy);
        }

        i += 1;
    }

    None
}

/// Selects the equality algorithm for geometries of the given kinds in the space with the given number of
/// dimensions.
///
/// ```
/// use georel::{resolve, GeometryKind, Resolution};
///
/// assert!(matches!(resolve(GeometryKind::Box, GeometryKind::Polygon, 2), Resolution::Reversed(_)));
/// assert_eq!(resolve(GeometryKind::Point, GeometryKind::Polygon, 2), Resolution::NotImplemented);
/// ```
pub const fn resolve(kind1: GeometryKind, kind2: GeometryKind, dimensions: usize) -> Resolution {
    if let Some(strategy) = lookup(kind1, kind2, dimensions) {
        Resolution::Direct(strategy)
    } else if let Some(strategy) = lookup(kind2, kind1, dimensions) {
        Resolution::Reversed(strategy)
    } else {
        Resolution::NotImplemented
    }
}

/// Checks if two geometries consist of the same point set.
///
/// This is the runtime counterpart of [`Equals`](crate::Equals): the algorithm is selected by the kinds of the
/// geometries with [`resolve`]. Combinations that are not supported return [`GeorelError::NotImplemented`], and
/// geometries with different number of dimensions return [`GeorelError::DimensionMismatch`].
pub fn equals<P1, P2>(a: &Geom<P1>, b: &Geom<P2>) -> Result<bool, GeorelError>
where
    P1: CartesianPoint2d,
    P2: CartesianPoint2d<Num = P1::Num>,
{
    if a.dimensions() != b.dimensions() {
        return Err(GeorelError::DimensionMismatch {
            first: a.dimensions(),
            second: b.dimensions(),
        });
    }

    let resolution = resolve(a.kind(), b.kind(), a.dimensions());
    log::trace!(
        "Equality of {} and {} resolved to {resolution:?}",
        a.kind(),
        b.kind()
    );

    match resolution {
        Resolution::Direct(strategy) => apply(strategy, a, b),
        Resolution::Reversed(strategy) => apply(strategy, b, a),
        Resolution::NotImplemented => {
            log::warn!("Equality of {} and {} is not implemented", a.kind(), b.kind());
            Err(not_implemented::<EqualsTag>([
                Term::Kind(a.kind()),
                Term::Kind(b.kind()),
            ]))
        }
    }
}

fn apply<P1, P2>(strategy: Strategy, a: &Geom<P1>, b: &Geom<P2>) -> Result<bool, GeorelError>
where
    P1: CartesianPoint2d,
    P2: CartesianPoint2d<Num = P1::Num>,
{
    match (strategy, a, b) {
        (Strategy::PointPoint, Geom::Point(a), Geom::Point(b)) => {
            Ok(!disjoint::point_point(a, b))
        }
        (Strategy::BoxBox, Geom::Rect(a), Geom::Rect(b)) => Ok(box_box(a, b)),
        (Strategy::Collection(TrivialCheckKind::Area), a, b) => {
            Ok(equals_by_collection::<AreaCheck, _, _>(a, b))
        }
        (Strategy::Collection(TrivialCheckKind::Length), a, b) => {
            Ok(equals_by_collection::<LengthCheck, _, _>(a, b))
        }
        _ => Err(not_implemented::<EqualsTag>([
            Term::Kind(a.kind()),
            Term::Kind(b.kind()),
        ])),
    }
}
