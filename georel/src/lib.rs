//! This crate contains trait based geometry types and the algorithms that work on them: spatial predicates
//! (equality, containment, disjointness), measurements (area, length, distance) and a spatial index.
//!
//! Geometries are described by traits ([`Contour`], [`Polygon`], [`MultiPolygon`] etc.) rather than concrete
//! types, so the algorithms can be used with any geometry representation. Simple implementations of the traits are
//! provided in the [`impls`] module, and the `geo-types` feature implements them for the [`geo_types`] crate.
//!
//! The central predicate is [`Equals`]: two geometries are equal if they describe the same point set, no matter how
//! many vertices they have, which vertex they start at, or in which direction they are traversed. Equality can be
//! checked statically (through the [`Equals`] trait, which is only implemented for supported combinations of
//! geometry types) or dynamically on [`Geom`] values with the [`equals`] function.
//!
//! ```
//! use georel::cartesian::Point2;
//! use georel::impls::ClosedContour;
//! use georel::Equals;
//!
//! let ring = ClosedContour::new(vec![Point2::new(0, 0), Point2::new(0, 2), Point2::new(2, 2)]);
//! let rotated = ClosedContour::new(vec![
//!     Point2::new(2, 2),
//!     Point2::new(1, 1),
//!     Point2::new(0, 0),
//!     Point2::new(0, 2),
//! ]);
//!
//! assert!(ring.equals(&rotated));
//! ```

pub mod cartesian;
pub mod error;
mod geometry;
mod geometry_type;
pub mod impls;
pub mod measure;
pub mod not_implemented;
pub mod num;
pub mod relate;
mod reverse;
pub mod segment;

mod contour;
mod multi_contour;
mod multi_point;
mod multi_polygon;
mod polygon;

#[cfg(feature = "geo-types")]
mod geo_types;

#[cfg(feature = "rstar")]
pub mod index;

pub use contour::{ClosedContour, Contour};
pub use error::GeorelError;
pub use geometry::{CartesianGeometry2d, Geom};
pub use geometry_type::*;
pub use measure::{distance_to_point, Area, Distance, Length};
pub use multi_contour::MultiContour;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use polygon::Polygon;
pub use relate::{equals, resolve, Disjoint, Equals, Resolution, Strategy, TrivialCheckKind};
pub use reverse::Reverse;
pub use segment::Segment;
