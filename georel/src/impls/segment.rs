use serde::{Deserialize, Serialize};

use crate::geometry_type::{GeometryType, SegmentGeometryType};

/// Simple implementation of the [`Segment`](crate::Segment) trait that owns its endpoints.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Segment<P> {
    /// First endpoint.
    pub start: P,
    /// Second endpoint.
    pub end: P,
}

impl<P> Segment<P> {
    /// Creates a new segment.
    pub fn new(start: P, end: P) -> Self {
        Self { start, end }
    }
}

impl<P> crate::segment::Segment for Segment<P> {
    type Point = P;

    fn start(&self) -> &P {
        &self.start
    }

    fn end(&self) -> &P {
        &self.end
    }
}

impl<P> GeometryType for Segment<P> {
    type Type = SegmentGeometryType;
}
