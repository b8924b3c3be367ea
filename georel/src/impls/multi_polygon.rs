use serde::{Deserialize, Serialize};

use crate::geometry_type::{GeometryType, MultiPolygonGeometryType};
use crate::impls::Polygon;

/// Set of polygons. Implements [`crate::MultiPolygon`].
#[derive(Debug, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct MultiPolygon<P> {
    /// Member polygons. Their order carries no meaning.
    pub parts: Vec<Polygon<P>>,
}

impl<P> MultiPolygon<P> {
    /// Member polygons.
    pub fn parts(&self) -> &[Polygon<P>] {
        &self.parts
    }
}

impl<P> From<Vec<Polygon<P>>> for MultiPolygon<P> {
    fn from(parts: Vec<Polygon<P>>) -> Self {
        Self { parts }
    }
}

impl<P> crate::multi_polygon::MultiPolygon for MultiPolygon<P> {
    type Polygon = Polygon<P>;

    fn polygons(&self) -> impl Iterator<Item = &Polygon<P>> {
        self.parts.iter()
    }
}

impl<P> GeometryType for MultiPolygon<P> {
    type Type = MultiPolygonGeometryType;
}
