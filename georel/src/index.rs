//! Spatial index of geometries based on [`rstar::RTree`].
//!
//! Geometries are indexed by their bounding rectangles. Queries first select the geometries whose bounding
//! rectangles match the query, so for precise results they should be followed by a check on the geometries
//! themselves (as [`SpatialIndex::find_equal`] and [`SpatialIndex::try_find_equal`] do).

use rstar::{Envelope, RTree, RTreeObject, SelectionFunction, AABB};

use crate::cartesian::{CartesianPoint2d, Rect};
use crate::error::GeorelError;
use crate::geometry::CartesianGeometry2d;
use crate::relate::{equals, Equals};
use crate::Geom;

/// A geometry stored in the [`SpatialIndex`] together with its bounding rectangle.
#[derive(Debug, Clone)]
pub struct IndexedGeometry<G> {
    geometry: G,
    envelope: AABB<[f64; 2]>,
}

impl<G> IndexedGeometry<G> {
    /// The stored geometry.
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Bounding rectangle of the geometry.
    pub fn bounding_rectangle(&self) -> Rect {
        let lower = self.envelope.lower();
        let upper = self.envelope.upper();
        Rect::new(lower[0], lower[1], upper[0], upper[1])
    }
}

impl<G> RTreeObject for IndexedGeometry<G> {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// R-tree of geometries.
///
/// Geometries without a bounding rectangle (empty geometries) are stored outside the tree: they are counted by
/// [`SpatialIndex::len`] and can be removed, but are never returned by spatial queries.
#[derive(Debug, Clone)]
pub struct SpatialIndex<G> {
    tree: RTree<IndexedGeometry<G>>,
    empty: Vec<G>,
}

impl<G> Default for SpatialIndex<G> {
    fn default() -> Self {
        Self {
            tree: RTree::new(),
            empty: vec![],
        }
    }
}

impl<G> SpatialIndex<G> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an index containing all the given geometries. This is faster than inserting them one by one.
    pub fn bulk_load<P>(geometries: Vec<G>) -> Self
    where
        P: CartesianPoint2d,
        G: CartesianGeometry2d<P>,
    {
        let mut indexed = Vec::with_capacity(geometries.len());
        let mut empty = vec![];
        for geometry in geometries {
            match envelope(&geometry) {
                Some(envelope) => indexed.push(IndexedGeometry { geometry, envelope }),
                None => empty.push(geometry),
            }
        }

        log::debug!(
            "Loaded {} geometries into spatial index ({} empty)",
            indexed.len() + empty.len(),
            empty.len()
        );

        Self {
            tree: RTree::bulk_load(indexed),
            empty,
        }
    }

    /// Adds a geometry to the index.
    pub fn insert<P>(&mut self, geometry: G)
    where
        P: CartesianPoint2d,
        G: CartesianGeometry2d<P>,
    {
        match envelope(&geometry) {
            Some(envelope) => self.tree.insert(IndexedGeometry { geometry, envelope }),
            None => self.empty.push(geometry),
        }
    }

    /// Removes a geometry equal (by `PartialEq`) to the given one from the index and returns it.
    pub fn remove<P>(&mut self, geometry: &G) -> Option<G>
    where
        P: CartesianPoint2d,
        G: CartesianGeometry2d<P> + PartialEq,
    {
        match envelope(geometry) {
            Some(envelope) => self
                .tree
                .remove_with_selection_function(Identical { envelope, geometry })
                .map(|indexed| indexed.geometry),
            None => {
                let position = self.empty.iter().position(|g| g == geometry)?;
                Some(self.empty.swap_remove(position))
            }
        }
    }

    /// Number of geometries in the index.
    pub fn len(&self) -> usize {
        self.tree.size() + self.empty.len()
    }

    /// Returns true if the index contains no geometries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all geometries in the index, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &G> {
        self.tree
            .iter()
            .map(IndexedGeometry::geometry)
            .chain(self.empty.iter())
    }

    /// Geometries whose bounding rectangles intersect the given rectangle.
    pub fn locate_in_envelope_intersecting<N: crate::num::CoordNum>(
        &self,
        rect: &Rect<N>,
    ) -> impl Iterator<Item = &G> {
        let rect = rect.to_f64();
        let envelope = AABB::from_corners(
            [rect.x_min(), rect.y_min()],
            [rect.x_max(), rect.y_max()],
        );
        self.locate_intersecting(envelope)
    }

    /// Geometries whose bounding rectangles contain the given point.
    pub fn locate_at_point(&self, point: &impl CartesianPoint2d) -> impl Iterator<Item = &G> {
        let point = point.to_f64();
        self.locate_intersecting(AABB::from_point([point.x, point.y]))
    }

    /// Geometries of the index equal to the given one.
    pub fn find_equal<'a, P>(&'a self, geometry: &'a G) -> impl Iterator<Item = &'a G> + 'a
    where
        P: CartesianPoint2d,
        G: CartesianGeometry2d<P> + Equals,
    {
        self.equality_candidates::<P>(geometry)
            .filter(move |candidate| Equals::equals(*candidate, geometry))
    }

    /// Geometries that can be equal to the given one.
    ///
    /// Geometries equal within the coordinate tolerance can have bounding rectangles that miss each other by that
    /// tolerance, so the query rectangle is grown by [`ENVELOPE_MARGIN`].
    fn equality_candidates<'a, P>(&'a self, geometry: &G) -> Box<dyn Iterator<Item = &'a G> + 'a>
    where
        P: CartesianPoint2d,
        G: CartesianGeometry2d<P>,
    {
        match envelope(geometry) {
            Some(envelope) => Box::new(self.locate_intersecting(grow(envelope))),
            None => Box::new(self.empty.iter()),
        }
    }

    fn locate_intersecting(&self, envelope: AABB<[f64; 2]>) -> impl Iterator<Item = &G> {
        self.tree
            .locate_with_selection_function(Intersecting(envelope))
            .map(IndexedGeometry::geometry)
    }
}

fn envelope<P, G>(geometry: &G) -> Option<AABB<[f64; 2]>>
where
    P: CartesianPoint2d,
    G: CartesianGeometry2d<P>,
{
    let rect = geometry.bounding_rectangle()?.to_f64();
    Some(AABB::from_corners(
        [rect.x_min(), rect.y_min()],
        [rect.x_max(), rect.y_max()],
    ))
}

impl<P: CartesianPoint2d> SpatialIndex<Geom<P>> {
    /// Geometries of the index equal to the given one, compared with [`equals`].
    ///
    /// Returns the error of [`equals`] if `geometry` cannot be compared with one of the geometries whose bounding
    /// rectangles intersect its own.
    pub fn try_find_equal(&self, geometry: &Geom<P>) -> Result<Vec<&Geom<P>>, GeorelError> {
        let mut found = vec![];
        for candidate in self.equality_candidates::<P>(geometry) {
            if equals(candidate, geometry)? {
                found.push(candidate);
            }
        }

        Ok(found)
    }
}

/// Relative margin added to bounding rectangles when looking for equal geometries. It is not less than the
/// coordinate tolerance of `f32` and `f64`.
const ENVELOPE_MARGIN: f64 = f32::EPSILON as f64;

fn grow(envelope: AABB<[f64; 2]>) -> AABB<[f64; 2]> {
    let margin = |v: f64| ENVELOPE_MARGIN * v.abs().max(1.0);
    let [x_min, y_min] = envelope.lower();
    let [x_max, y_max] = envelope.upper();
    AABB::from_corners(
        [x_min - margin(x_min), y_min - margin(y_min)],
        [x_max + margin(x_max), y_max + margin(y_max)],
    )
}

struct Intersecting(AABB<[f64; 2]>);

impl<G> SelectionFunction<IndexedGeometry<G>> for Intersecting {
    fn should_unpack_parent(&self, envelope: &AABB<[f64; 2]>) -> bool {
        self.0.intersects(envelope)
    }

    fn should_unpack_leaf(&self, leaf: &IndexedGeometry<G>) -> bool {
        self.0.intersects(&leaf.envelope)
    }
}

struct Identical<'a, G> {
    envelope: AABB<[f64; 2]>,
    geometry: &'a G,
}

impl<G: PartialEq> SelectionFunction<IndexedGeometry<G>> for Identical<'_, G> {
    fn should_unpack_parent(&self, envelope: &AABB<[f64; 2]>) -> bool {
        envelope.contains_envelope(&self.envelope)
    }

    fn should_unpack_leaf(&self, leaf: &IndexedGeometry<G>) -> bool {
        leaf.geometry == *self.geometry
    }
}
