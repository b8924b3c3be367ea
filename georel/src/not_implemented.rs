//! Reporting of algorithms that are not implemented for a combination of geometries.
//!
//! Every algorithm is identified by an [`AlgorithmTag`]. The tag decides what happens when the algorithm is requested
//! for geometries it does not support:
//!
//! * [`NotImplementedPolicy::CompileTime`]: the combination is rejected at build time. The static surface of such an
//!   algorithm is only implemented for supported combinations, and [`assert_implemented!`](crate::assert_implemented)
//!   can be used to check a combination of kinds in a `const` context.
//! * [`NotImplementedPolicy::Runtime`]: the dynamic surface returns [`GeorelError::NotImplemented`] naming the
//!   algorithm and the offending terms.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::GeorelError;
use crate::geometry_type::GeometryKind;
use crate::relate::Resolution;

/// When a not implemented combination of an algorithm is reported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotImplementedPolicy {
    /// The build fails.
    CompileTime,
    /// An error is returned at run time.
    Runtime,
}

/// Identifies an algorithm in diagnostics.
pub trait AlgorithmTag {
    /// Name of the algorithm.
    const NAME: &'static str;
    /// How not implemented combinations are reported.
    const POLICY: NotImplementedPolicy = NotImplementedPolicy::CompileTime;
}

/// Geometric equality.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct EqualsTag;

impl AlgorithmTag for EqualsTag {
    const NAME: &'static str = "equals";
}

/// Distance between a geometry and a point.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct DistanceTag;

impl AlgorithmTag for DistanceTag {
    const NAME: &'static str = "distance";
    const POLICY: NotImplementedPolicy = NotImplementedPolicy::Runtime;
}

/// A term describing a parameter of a not implemented algorithm.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// Kind of a geometry parameter.
    Kind(GeometryKind),
    /// Number of dimensions of the coordinate space.
    Dimension(usize),
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Kind(kind) => write!(f, "{kind}"),
            Term::Dimension(dimensions) => write!(f, "DIMENSION<{dimensions}>"),
        }
    }
}

impl From<GeometryKind> for Term {
    fn from(value: GeometryKind) -> Self {
        Self::Kind(value)
    }
}

/// Checks that the dispatch `resolution` of the algorithm `A` found an implementation.
///
/// With the [`NotImplementedPolicy::CompileTime`] policy a not implemented resolution panics, which is a build error
/// when the function is evaluated in a `const` item. With the [`NotImplementedPolicy::Runtime`] policy the check
/// passes and the error is reported by the dynamic surface of the algorithm.
pub const fn require_implemented<A: AlgorithmTag>(resolution: Resolution) {
    if matches!(A::POLICY, NotImplementedPolicy::CompileTime)
        && matches!(resolution, Resolution::NotImplemented)
    {
        panic!("algorithm is not implemented for the given geometry kinds");
    }
}

/// Error reporting that the algorithm `A` is not implemented for the parameters described by `terms`.
pub fn not_implemented<A: AlgorithmTag>(terms: impl IntoIterator<Item = Term>) -> GeorelError {
    GeorelError::NotImplemented {
        algorithm: A::NAME,
        terms: terms.into_iter().collect(),
    }
}

/// Fails the build if [`equals`](crate::equals) is not implemented for the given pair of
/// [`GeometryKind`](crate::GeometryKind) variants in the given number of dimensions.
///
/// ```
/// georel::assert_implemented!(Polygon, Box, 2);
/// georel::assert_implemented!(Segment, LineString, 2);
/// ```
///
/// ```compile_fail
/// georel::assert_implemented!(Point, Polygon, 2);
/// ```
#[macro_export]
macro_rules! assert_implemented {
    ($kind1:ident, $kind2:ident, $dimensions:expr) => {
        const _: () = $crate::not_implemented::require_implemented::<
            $crate::not_implemented::EqualsTag,
        >($crate::resolve(
            $crate::GeometryKind::$kind1,
            $crate::GeometryKind::$kind2,
            $dimensions,
        ));
    };
}
