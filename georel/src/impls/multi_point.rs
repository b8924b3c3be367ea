use serde::{Deserialize, Serialize};

use crate::geometry_type::{GeometryType, MultiPointGeometryType};

/// Unordered set of points. Implements [`crate::MultiPoint`].
#[derive(Debug, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct MultiPoint<P>(Vec<P>);

impl<P> From<Vec<P>> for MultiPoint<P> {
    fn from(points: Vec<P>) -> Self {
        Self(points)
    }
}

impl<P> crate::multi_point::MultiPoint for MultiPoint<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.0.iter()
    }
}

impl<P> GeometryType for MultiPoint<P> {
    type Type = MultiPointGeometryType;
}
