use serde::{Deserialize, Serialize};

use crate::geometry_type::{GeometryType, PolygonGeometryType};
use crate::impls::ClosedContour;

/// Polygon with an outer ring and any number of holes. Implements [`crate::Polygon`].
#[derive(Debug, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct Polygon<P> {
    /// Outer ring.
    pub outer_contour: ClosedContour<P>,
    /// Holes. Their order carries no meaning.
    pub inner_contours: Vec<ClosedContour<P>>,
}

impl<P> Polygon<P> {
    /// Creates a polygon from its outer ring and holes.
    pub fn new(outer_contour: ClosedContour<P>, inner_contours: Vec<ClosedContour<P>>) -> Self {
        Self {
            outer_contour,
            inner_contours,
        }
    }
}

impl<P> crate::polygon::Polygon for Polygon<P> {
    type Contour = ClosedContour<P>;

    fn outer_contour(&self) -> &ClosedContour<P> {
        &self.outer_contour
    }

    fn inner_contours(&self) -> impl Iterator<Item = &'_ ClosedContour<P>> {
        self.inner_contours.iter()
    }
}

/// Polygon without holes.
impl<P> From<ClosedContour<P>> for Polygon<P> {
    fn from(outer_contour: ClosedContour<P>) -> Self {
        Self::new(outer_contour, vec![])
    }
}

/// Polygon without holes, with the outer ring going through the points.
impl<P> From<Vec<P>> for Polygon<P> {
    fn from(points: Vec<P>) -> Self {
        ClosedContour::new(points).into()
    }
}

impl<P> GeometryType for Polygon<P> {
    type Type = PolygonGeometryType;
}
