//! Measurements of geometries: area, length and distance.

mod area;
mod distance;
mod length;

pub use area::{Area, AreaSpecialization};
pub use distance::{
    distance_to_point, projected_point_ax, Distance, DistanceSpecialization, ProjectedPointAx,
};
pub use length::{Length, LengthSpecialization};
