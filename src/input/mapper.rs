//! Device-to-canvas coordinate mapping.
//!
//! The host owns the actual transform (widget position, scaling, etc.); the
//! core only calls it. Any `Fn(Point) -> Point` closure works as a mapper.

use crate::util::Point;

/// Maps a raw device point into canvas-local coordinates.
pub trait CoordinateMapper {
    fn to_local(&self, point: Point) -> Point;
}

impl<F> CoordinateMapper for F
where
    F: Fn(Point) -> Point,
{
    fn to_local(&self, point: Point) -> Point {
        self(point)
    }
}

/// Canvas placed at `origin` in device space with a uniform `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasViewport {
    pub origin: Point,
    pub scale: f64,
}

impl CanvasViewport {
    pub fn new(origin: Point, scale: f64) -> Self {
        Self { origin, scale }
    }
}

impl Default for CanvasViewport {
    /// Canvas-local equals device space.
    fn default() -> Self {
        Self {
            origin: Point::default(),
            scale: 1.0,
        }
    }
}

impl CoordinateMapper for CanvasViewport {
    fn to_local(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.origin.x) / self.scale,
            (point.y - self.origin.y) / self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_subtracts_origin_then_scales() {
        let viewport = CanvasViewport::new(Point::new(100.0, 50.0), 2.0);
        assert_eq!(
            viewport.to_local(Point::new(120.0, 70.0)),
            Point::new(10.0, 10.0)
        );
    }

    #[test]
    fn closures_are_mappers() {
        let flip = |p: Point| Point::new(p.x, 600.0 - p.y);
        assert_eq!(flip.to_local(Point::new(3.0, 100.0)), Point::new(3.0, 500.0));
    }
}
