//! Spatial relations between geometries: equality and disjointness.

mod collect_vectors;
mod disjoint;
mod dispatch;
mod equals;

pub use collect_vectors::{
    CollectVectors, CollectVectorsSpecialization, CollectedVector, VectorCollector,
};
pub use disjoint::{box_box, point_box, point_point, Disjoint, DisjointSpecialization};
pub use dispatch::{equals, resolve, Resolution, Strategy, TrivialCheckKind};
pub use equals::{
    equals_by_collection, AreaCheck, Equals, EqualsSpecialization, LengthCheck, Operand,
    TrivialCheck,
};
