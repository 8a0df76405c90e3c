//! Drawing primitive definitions.

use super::bounds::BoundingBox;
use super::color::Color;
use crate::util::Point;
use serde::{Deserialize, Serialize};

/// A drawable shape produced by one gesture.
///
/// Mutable while it is a draft on the canvas; after commit the operation that
/// built it lets go and nothing edits it again. Each variant carries its own
/// paint style so primitives render independently.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Primitive {
    /// Rectangle outline spanning `min`..`max`
    RectOutline {
        min: Point,
        max: Point,
        /// Stroke width in canvas units
        width: f64,
        color: Color,
    },
    /// Ellipse outline inscribed in `min`..`max`
    EllipseOutline {
        min: Point,
        max: Point,
        width: f64,
        color: Color,
    },
    /// Filled rectangle spanning `min`..`max`
    RectFill { min: Point, max: Point, color: Color },
    /// Filled ellipse inscribed in `min`..`max`
    EllipseFill { min: Point, max: Point, color: Color },
    /// Decimated pointer trail
    Freehand {
        points: Vec<Point>,
        width: f64,
        color: Color,
    },
    /// Click-placed vertices joined by straight segments
    Polyline {
        points: Vec<Point>,
        width: f64,
        color: Color,
    },
}

impl Primitive {
    /// Returns the axis-aligned bounding box of the control points.
    ///
    /// `None` only for a path without any points.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Primitive::RectOutline { min, max, .. }
            | Primitive::EllipseOutline { min, max, .. }
            | Primitive::RectFill { min, max, .. }
            | Primitive::EllipseFill { min, max, .. } => {
                Some(BoundingBox::from_corners(*min, *max))
            }
            Primitive::Freehand { points, .. } | Primitive::Polyline { points, .. } => {
                BoundingBox::from_points(points)
            }
        }
    }

    /// Whether this primitive may enter the committed set.
    ///
    /// Boxes, ellipses and freehand paths need a nonzero extent; a polyline
    /// needs at least two distinct vertices.
    pub fn is_committable(&self) -> bool {
        match self {
            Primitive::Polyline { points, .. } => match points.split_first() {
                Some((first, rest)) => rest.iter().any(|p| p != first),
                None => false,
            },
            _ => self.bounding_box().is_some_and(|bounds| bounds.has_extent()),
        }
    }

    /// Moves both defining corners of a box-like primitive.
    ///
    /// Corners are normalized by the caller. Path primitives are left unchanged.
    pub fn set_corners(&mut self, new_min: Point, new_max: Point) {
        match self {
            Primitive::RectOutline { min, max, .. }
            | Primitive::EllipseOutline { min, max, .. }
            | Primitive::RectFill { min, max, .. }
            | Primitive::EllipseFill { min, max, .. } => {
                *min = new_min;
                *max = new_max;
            }
            Primitive::Freehand { .. } | Primitive::Polyline { .. } => {}
        }
    }

    /// Control points of a path primitive, `None` for box-like variants.
    pub fn path_points(&self) -> Option<&[Point]> {
        match self {
            Primitive::Freehand { points, .. } | Primitive::Polyline { points, .. } => {
                Some(points)
            }
            _ => None,
        }
    }

    /// Short label used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Primitive::RectOutline { .. } => "rect-outline",
            Primitive::EllipseOutline { .. } => "ellipse-outline",
            Primitive::RectFill { .. } => "rect-fill",
            Primitive::EllipseFill { .. } => "ellipse-fill",
            Primitive::Freehand { .. } => "freehand",
            Primitive::Polyline { .. } => "polyline",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::WHITE;

    fn polyline(points: &[(f64, f64)]) -> Primitive {
        Primitive::Polyline {
            points: points.iter().copied().map(Point::from).collect(),
            width: 2.0,
            color: WHITE,
        }
    }

    #[test]
    fn zero_extent_box_is_not_committable() {
        let p = Point::new(4.0, 4.0);
        let shape = Primitive::RectFill {
            min: p,
            max: p,
            color: WHITE,
        };
        assert!(!shape.is_committable());
    }

    #[test]
    fn box_bounds_follow_corners() {
        let mut shape = Primitive::EllipseOutline {
            min: Point::default(),
            max: Point::default(),
            width: 2.0,
            color: WHITE,
        };
        shape.set_corners(Point::new(10.0, 10.0), Point::new(50.0, 30.0));
        let bounds = shape.bounding_box().expect("box has bounds");
        assert_eq!((bounds.x, bounds.y, bounds.right, bounds.top), (10.0, 10.0, 50.0, 30.0));
        assert!(shape.is_committable());
    }

    #[test]
    fn polyline_needs_two_distinct_points() {
        assert!(!polyline(&[]).is_committable());
        assert!(!polyline(&[(3.0, 3.0)]).is_committable());
        assert!(!polyline(&[(3.0, 3.0), (3.0, 3.0)]).is_committable());
        assert!(polyline(&[(3.0, 3.0), (3.0, 3.0), (4.0, 3.0)]).is_committable());
    }

    #[test]
    fn freehand_single_point_is_degenerate() {
        let shape = Primitive::Freehand {
            points: vec![Point::new(1.0, 1.0)],
            width: 2.0,
            color: WHITE,
        };
        assert!(!shape.is_committable());
        assert_eq!(shape.path_points().map(<[Point]>::len), Some(1));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(polyline(&[(0.0, 0.0), (1.0, 0.0)])).unwrap();
        assert_eq!(json["kind"], "polyline");
        assert_eq!(json["points"][1]["x"], 1.0);
    }
}
