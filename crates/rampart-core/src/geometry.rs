//! Distance, stepping, and axis-aligned box helpers shared by every entity.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// Outcome of stepping toward a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Remaining distance was below the step length (or zero).
    Reached,
    /// Moved a full step; carries the new position.
    Moved(Vec2),
}

/// Step from `from` toward `to` by `speed` units.
///
/// Returns `Reached` when the remaining distance is less than `speed`, or when
/// the two points coincide. Never produces a NaN direction.
pub fn step_toward(from: Vec2, to: Vec2, speed: f64) -> Step {
    let delta = to - from;
    let distance = delta.length();

    if distance < speed || distance <= f64::EPSILON {
        Step::Reached
    } else {
        Step::Moved(from + delta / distance * speed)
    }
}

/// Straight-line distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f64 {
    a.distance(b)
}

/// Axis-aligned box given by its min and max corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Box of `size` centered on `center`.
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Enemy collision probe: spans from the enemy's anchor to anchor + half size.
    pub fn probe(anchor: Vec2, size: Vec2) -> Self {
        Self {
            min: anchor,
            max: anchor + size / 2.0,
        }
    }

    /// Strict overlap test; touching edges do not count.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Whether `point` lies inside or on the edge of the box.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_toward_coincident_points() {
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(step_toward(p, p, 5.0), Step::Reached);
        // Zero speed at zero distance must not divide by zero.
        assert_eq!(step_toward(p, p, 0.0), Step::Reached);
    }

    #[test]
    fn test_step_toward_moves_exact_speed() {
        let from = Vec2::new(0.0, 0.0);
        let to = Vec2::new(30.0, 40.0);
        match step_toward(from, to, 5.0) {
            Step::Moved(p) => {
                assert!((p.x - 3.0).abs() < 1e-12);
                assert!((p.y - 4.0).abs() < 1e-12);
            }
            Step::Reached => panic!("should not reach a target 50 units away"),
        }

        let pairs = [
            (Vec2::new(10.0, -7.5), Vec2::new(-123.4, 56.7), 1.0),
            (Vec2::new(-3.0, 2.0), Vec2::new(41.0, 97.0), 0.5),
            (Vec2::new(250.0, 250.0), Vec2::new(251.0, 260.0), 2.5),
        ];
        for (from, to, speed) in pairs {
            let Step::Moved(p) = step_toward(from, to, speed) else {
                panic!("{from} -> {to} reached in one step of {speed}");
            };
            let step = p - from;
            let remaining = to - from;
            assert!((step.length() - speed).abs() < 1e-9);
            assert!(step.perp_dot(remaining).abs() < 1e-9);
            assert!(step.dot(remaining) > 0.0);
        }
    }

    #[test]
    fn test_probe_uses_half_extent_from_anchor() {
        let probe = Bounds::probe(Vec2::new(100.0, 100.0), Vec2::new(20.0, 20.0));
        assert_eq!(probe.min, Vec2::new(100.0, 100.0));
        assert_eq!(probe.max, Vec2::new(110.0, 110.0));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Bounds::centered(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Bounds::centered(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
        let c = Bounds::centered(Vec2::new(9.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&c));
    }
}
