use serde::{Deserialize, Serialize};

use crate::geometry_type::{GeometryType, MultiContourGeometryType};
use crate::impls::Contour;

/// Set of linestrings. Implements [`crate::MultiContour`].
#[derive(Debug, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub struct MultiContour<P>(Vec<Contour<P>>);

impl<P> MultiContour<P> {
    /// Linestrings of the set, for modification in place.
    pub fn contours_mut(&mut self) -> &mut [Contour<P>] {
        &mut self.0
    }
}

impl<P> From<Vec<Contour<P>>> for MultiContour<P> {
    fn from(contours: Vec<Contour<P>>) -> Self {
        Self(contours)
    }
}

impl<P> crate::multi_contour::MultiContour for MultiContour<P> {
    type Contour = Contour<P>;

    fn contours(&self) -> impl Iterator<Item = &Contour<P>> {
        self.0.iter()
    }
}

impl<P> GeometryType for MultiContour<P> {
    type Type = MultiContourGeometryType;
}
