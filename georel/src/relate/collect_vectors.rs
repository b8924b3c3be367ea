//! Decomposition of geometries into canonical sets of straight runs.
//!
//! Every edge of a geometry (a pair of consecutive vertices of one of its contours) lies on some straight line. All
//! edges lying on the same line are merged into maximal runs: edges that overlap or touch become one run, no matter
//! in which order or direction they were traversed and how many redundant vertices they had. Each run is described by
//! a [`CollectedVector`] going from its lexicographically smaller end to the larger one.
//!
//! Two geometries consisting of the same point set produce the same set of runs, so after sorting the runs can be
//! compared element-wise.

use std::cmp::Ordering;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianBox, CartesianPoint2d, Point2};
use crate::contour::{ClosedContour, Contour};
use crate::geometry_type::{
    BoxGeometryType, ClosedContourGeometryType, ContourGeometryType, GeometryType,
    MultiContourGeometryType, MultiPolygonGeometryType, PolygonGeometryType, SegmentGeometryType,
};
use crate::multi_contour::MultiContour;
use crate::multi_polygon::MultiPolygon;
use crate::polygon::Polygon;
use crate::segment::{Segment, SegmentRef};
use crate::Geom;

/// Relative tolerance for deciding that two edges lie on the same line and that two runs on a line touch.
const COLLINEARITY_TOLERANCE: f64 = 16.0 * f64::EPSILON;

/// A maximal straight run of a geometry.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectedVector {
    from: Point2<f64>,
    to: Point2<f64>,
}

impl CollectedVector {
    fn new(from: Point2<f64>, to: Point2<f64>) -> Self {
        Self { from, to }
    }

    /// Lexicographically smaller end of the run.
    pub fn start(&self) -> Point2<f64> {
        self.from
    }

    /// Lexicographically larger end of the run.
    pub fn end(&self) -> Point2<f64> {
        self.to
    }

    /// Direction and length of the run.
    pub fn direction(&self) -> crate::cartesian::Vector2<f64> {
        self.to - self.from
    }

    /// Returns true if the ends of the runs are equal within the floating point tolerance.
    pub fn near_eq(&self, other: &Self) -> bool {
        self.from.near_equal(&other.from) && self.to.near_equal(&other.to)
    }

    /// Total order of the runs: by the start position, then by the end position.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.from
            .x()
            .total_cmp(&other.from.x())
            .then_with(|| self.from.y().total_cmp(&other.from.y()))
            .then_with(|| self.to.x().total_cmp(&other.to.x()))
            .then_with(|| self.to.y().total_cmp(&other.to.y()))
    }
}

/// Accumulates edges of one or more geometries and merges them into [`CollectedVector`]s.
#[derive(Debug, Default, Clone)]
pub struct VectorCollector {
    edges: Vec<Edge>,
    scale: f64,
}

#[derive(Debug, Copy, Clone)]
struct Edge {
    from: nalgebra::Point2<f64>,
    to: nalgebra::Point2<f64>,
}

/// Part of a line covered by one edge, in the coordinates along the line.
#[derive(Debug, Copy, Clone)]
struct Interval {
    start: f64,
    end: f64,
    edge: Edge,
}

impl Edge {
    /// Angle of the edge direction. Edges go from the lexicographically smaller point, so the angle is in
    /// `(-PI/2, PI/2]`.
    fn angle(&self) -> f64 {
        let d = self.to - self.from;
        d.y.atan2(d.x)
    }

    /// Signed distance from the origin to the line through the edge with the given unit direction.
    fn offset(&self, direction: &Vector2<f64>) -> f64 {
        direction.perp(&self.from.coords)
    }

    fn interval(self, direction: &Vector2<f64>) -> Interval {
        let t_from = direction.dot(&self.from.coords);
        let t_to = direction.dot(&self.to.coords);
        if t_from <= t_to {
            Interval {
                start: t_from,
                end: t_to,
                edge: self,
            }
        } else {
            Interval {
                start: t_to,
                end: t_from,
                edge: Edge {
                    from: self.to,
                    to: self.from,
                },
            }
        }
    }
}

impl VectorCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an edge between two points. Zero length edges are ignored.
    pub fn add_edge<P: CartesianPoint2d>(&mut self, start: &P, end: &P) {
        if start.near_equal(end) {
            return;
        }

        let start = start.to_f64();
        let end = end.to_f64();
        if start == end {
            return;
        }

        let (from, to) = if lexicographic_cmp(&start, &end) == Ordering::Greater {
            (end, start)
        } else {
            (start, end)
        };

        self.scale = self
            .scale
            .max(from.x.abs())
            .max(from.y.abs())
            .max(to.x.abs())
            .max(to.y.abs());
        self.edges.push(Edge { from, to });
    }

    /// Adds all the segments of the iterator.
    pub fn add_segments<'a, P: CartesianPoint2d + 'a>(
        &mut self,
        segments: impl Iterator<Item = SegmentRef<'a, P>>,
    ) {
        for segment in segments {
            self.add_edge(segment.0, segment.1);
        }
    }

    /// Number of non-degenerate edges added so far.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Merges the edges into runs and returns them in canonical order.
    ///
    /// Edges are grouped by direction and then by the offset of their line, so the whole operation takes
    /// `O(n log n)` time.
    pub fn finish(self) -> Vec<CollectedVector> {
        let tolerance = COLLINEARITY_TOLERANCE * self.scale.max(1.0);

        let mut edges: Vec<(f64, Edge)> = self
            .edges
            .into_iter()
            .map(|edge| (edge.angle(), edge))
            .collect();
        edges.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut vectors = vec![];
        for parallel in edges.chunk_by(|a, b| b.0 - a.0 <= COLLINEARITY_TOLERANCE) {
            let (_, first) = parallel[0];
            let direction = (first.to - first.from).normalize();

            let mut on_lines: Vec<(f64, Edge)> = parallel
                .iter()
                .map(|&(_, edge)| (edge.offset(&direction), edge))
                .collect();
            on_lines.sort_by(|a, b| a.0.total_cmp(&b.0));

            for line in on_lines.chunk_by(|a, b| b.0 - a.0 <= tolerance) {
                let intervals = line
                    .iter()
                    .map(|&(_, edge)| edge.interval(&direction))
                    .collect();
                merge_intervals(intervals, tolerance, &mut vectors);
            }
        }

        vectors.sort_by(CollectedVector::total_cmp);
        vectors
    }
}

/// Merges touching and overlapping intervals of one line into maximal runs.
fn merge_intervals(mut intervals: Vec<Interval>, tolerance: f64, runs: &mut Vec<CollectedVector>) {
    intervals.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut intervals = intervals.into_iter();
    let Some(mut current) = intervals.next() else {
        return;
    };

    for next in intervals {
        if next.start <= current.end + tolerance {
            if next.end > current.end {
                current.end = next.end;
                current.edge.to = next.edge.to;
            }
        } else {
            runs.push(current.into_vector());
            current = next;
        }
    }

    runs.push(current.into_vector());
}

impl Interval {
    fn into_vector(self) -> CollectedVector {
        let a = Point2::new(self.edge.from.x, self.edge.from.y);
        let b = Point2::new(self.edge.to.x, self.edge.to.y);
        if lexicographic_cmp(&self.edge.from, &self.edge.to) == Ordering::Greater {
            CollectedVector::new(b, a)
        } else {
            CollectedVector::new(a, b)
        }
    }
}

fn lexicographic_cmp(a: &nalgebra::Point2<f64>, b: &nalgebra::Point2<f64>) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Compares two canonical sets of runs.
pub(crate) fn same_vectors(a: &[CollectedVector], b: &[CollectedVector]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.near_eq(b))
}

/// Geometries that can be decomposed into straight runs. This trait is auto-implemented for all segments, boxes,
/// contours, polygons and their multi-variants in 2d space.
pub trait CollectVectors {
    /// Adds all edges of the geometry to the collector.
    fn collect_vectors(&self, collector: &mut VectorCollector);

    /// Canonical set of straight runs of the geometry.
    fn collected_vectors(&self) -> Vec<CollectedVector> {
        let mut collector = VectorCollector::new();
        self.collect_vectors(&mut collector);
        collector.finish()
    }
}

/// Specialization of [`CollectVectors`] for one geometry type `GT`.
pub trait CollectVectorsSpecialization<GT>: GeometryType {
    /// See [`CollectVectors::collect_vectors`].
    fn collect_vectors_spec(&self, collector: &mut VectorCollector);
}

impl<T> CollectVectors for T
where
    T: GeometryType + CollectVectorsSpecialization<<T as GeometryType>::Type>,
{
    fn collect_vectors(&self, collector: &mut VectorCollector) {
        self.collect_vectors_spec(collector)
    }
}

impl<B> CollectVectorsSpecialization<BoxGeometryType> for B
where
    B: CartesianBox + GeometryType<Type = BoxGeometryType>,
    B::Point: CartesianPoint2d,
{
    fn collect_vectors_spec(&self, collector: &mut VectorCollector) {
        let min = self.min_corner().to_f64();
        let max = self.max_corner().to_f64();
        let corners = [
            Point2::new(min.x, min.y),
            Point2::new(min.x, max.y),
            Point2::new(max.x, max.y),
            Point2::new(max.x, min.y),
        ];

        for i in 0..corners.len() {
            collector.add_edge(&corners[i], &corners[(i + 1) % corners.len()]);
        }
    }
}

impl<P, S> CollectVectorsSpecialization<SegmentGeometryType> for S
where
    P: CartesianPoint2d,
    S: Segment<Point = P> + GeometryType<Type = SegmentGeometryType>,
{
    fn collect_vectors_spec(&self, collector: &mut VectorCollector) {
        collector.add_edge(self.start(), self.end());
    }
}

impl<P, C> CollectVectorsSpecialization<ContourGeometryType> for C
where
    P: CartesianPoint2d,
    C: Contour<Point = P> + GeometryType<Type = ContourGeometryType>,
{
    fn collect_vectors_spec(&self, collector: &mut VectorCollector) {
        collector.add_segments(self.iter_segments());
    }
}

impl<P, C> CollectVectorsSpecialization<ClosedContourGeometryType> for C
where
    P: CartesianPoint2d,
    C: ClosedContour<Point = P> + GeometryType<Type = ClosedContourGeometryType>,
{
    fn collect_vectors_spec(&self, collector: &mut VectorCollector) {
        collector.add_segments(self.iter_segments());
    }
}

impl<P, Poly> CollectVectorsSpecialization<PolygonGeometryType> for Poly
where
    P: CartesianPoint2d,
    Poly: Polygon + GeometryType<Type = PolygonGeometryType>,
    Poly::Contour: Contour<Point = P>,
{
    fn collect_vectors_spec(&self, collector: &mut VectorCollector) {
        collector.add_segments(self.iter_segments());
    }
}

impl<P, MC> CollectVectorsSpecialization<MultiContourGeometryType> for MC
where
    P: CartesianPoint2d,
    MC: MultiContour + GeometryType<Type = MultiContourGeometryType>,
    MC::Contour: Contour<Point = P>,
{
    fn collect_vectors_spec(&self, collector: &mut VectorCollector) {
        collector.add_segments(self.iter_segments());
    }
}

impl<P, MP> CollectVectorsSpecialization<MultiPolygonGeometryType> for MP
where
    P: CartesianPoint2d,
    MP: MultiPolygon + GeometryType<Type = MultiPolygonGeometryType>,
    <MP::Polygon as Polygon>::Contour: Contour<Point = P>,
{
    fn collect_vectors_spec(&self, collector: &mut VectorCollector) {
        collector.add_segments(self.iter_segments());
    }
}

impl<P: CartesianPoint2d> CollectVectors for Geom<P> {
    fn collect_vectors(&self, collector: &mut VectorCollector) {
        match self {
            Geom::Point(_) | Geom::MultiPoint(_) => {}
            Geom::Rect(v) => v.collect_vectors(collector),
            Geom::Segment(v) => v.collect_vectors(collector),
            Geom::Contour(v) => v.collect_vectors(collector),
            Geom::ClosedContour(v) => v.collect_vectors(collector),
            Geom::Polygon(v) => v.collect_vectors(collector),
            Geom::MultiContour(v) => v.collect_vectors(collector),
            Geom::MultiPolygon(v) => v.collect_vectors(collector),
        }
    }
}
