//! Types and functions on geometries in cartesian coordinates.

mod impls;
mod orient;
mod rect;
mod traits;

pub use impls::{Point2, Point3, Vector2};
pub use orient::Orientation;
pub use rect::Rect;
pub(crate) use traits::area_signed;
pub use traits::*;
