mod cartesian_box;
mod cartesian_point;
mod contour;
mod polygon;

pub use cartesian_box::CartesianBox;
pub use cartesian_point::{CartesianPoint, CartesianPoint2d, CartesianPoint3d};

pub(crate) use contour::area_signed;
pub use contour::{CartesianClosedContour, CartesianContour};
pub use polygon::CartesianPolygon;
