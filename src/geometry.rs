//! Segment vs. axis-aligned box clipping
//!
//! The collision model treats every blocked grid cell as a closed unit
//! square. A straight move is blocked when its segment meets any of those
//! squares, which is decided with the Liang–Barsky parametric clip.

use crate::types::Point2;
use serde::{Deserialize, Serialize};

/// Closed axis-aligned rectangle `[xmin, xmax] × [ymin, ymax]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Aabb {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Aabb { xmin, xmax, ymin, ymax }
    }

    /// Unit square centred on `center`, the footprint of one grid cell
    pub fn unit_square(center: Point2) -> Self {
        Aabb::new(center.x - 0.5, center.x + 0.5, center.y - 0.5, center.y + 0.5)
    }

    pub fn center(&self) -> Point2 {
        Point2::new((self.xmin + self.xmax) / 2.0, (self.ymin + self.ymax) / 2.0)
    }

    /// Whether the segment `start → end` meets this box
    pub fn intersects_segment(&self, start: Point2, end: Point2) -> bool {
        liang_barsky(self, start, end)
    }
}

/// Liang–Barsky test of the segment `start → end` against `bbox`.
///
/// Comparisons are exact and the box is closed: touching an edge or a
/// single corner counts as an intersection.
pub fn liang_barsky(bbox: &Aabb, start: Point2, end: Point2) -> bool {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    // (p, q) for the left, right, bottom and top boundaries
    let constraints = [
        (-dx, start.x - bbox.xmin),
        (dx, bbox.xmax - start.x),
        (-dy, start.y - bbox.ymin),
        (dy, bbox.ymax - start.y),
    ];

    let mut t_enter = 0.0_f64;
    let mut t_exit = 1.0_f64;

    for (p, q) in constraints {
        if p == 0.0 {
            if q < 0.0 {
                return false;
            }
            continue;
        }

        let r = q / p;
        if p < 0.0 {
            t_enter = t_enter.max(r);
        } else {
            t_exit = t_exit.min(r);
        }

        if t_enter > t_exit {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_at(x: f64, y: f64) -> Aabb {
        Aabb::unit_square(Point2::new(x, y))
    }

    #[test]
    fn test_segment_through_box() {
        let bbox = unit_at(1.0, 1.0);
        assert!(liang_barsky(&bbox, Point2::new(0.0, 0.0), Point2::new(2.0, 2.0)));
        assert!(liang_barsky(&bbox, Point2::new(1.0, -3.0), Point2::new(1.0, 3.0)));
    }

    #[test]
    fn test_segment_beside_box() {
        let bbox = unit_at(1.0, 1.0);
        assert!(!liang_barsky(&bbox, Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)));
        assert!(!liang_barsky(&bbox, Point2::new(-1.0, 0.0), Point2::new(-1.0, 5.0)));
    }

    #[test]
    fn test_segment_stops_short() {
        let bbox = unit_at(3.0, 0.0);
        assert!(!liang_barsky(&bbox, Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)));
        assert!(liang_barsky(&bbox, Point2::new(0.0, 0.0), Point2::new(2.5, 0.0)));
    }

    #[test]
    fn test_touching_corner_blocks() {
        // Diagonal (0,0)->(1,1) grazes the corner of the square at (1,0)
        let bbox = unit_at(1.0, 0.0);
        assert!(liang_barsky(&bbox, Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)));
    }

    #[test]
    fn test_degenerate_segment() {
        let bbox = unit_at(1.0, 1.0);
        assert!(!liang_barsky(&bbox, Point2::new(3.0, 3.0), Point2::new(3.0, 3.0)));
        assert!(liang_barsky(&bbox, Point2::new(1.2, 0.8), Point2::new(1.2, 0.8)));
    }

    #[test]
    fn test_reversed_direction() {
        let bbox = unit_at(1.0, 1.0);
        assert!(liang_barsky(&bbox, Point2::new(2.0, 2.0), Point2::new(0.0, 0.0)));
        assert!(bbox.intersects_segment(Point2::new(1.0, 3.0), Point2::new(1.0, -3.0)));
    }
}
