//! Implementation of the crate's geometry traits for the [`geo_types`] crate types.

mod coord;
mod geometry;
mod linestring;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod polygon;
