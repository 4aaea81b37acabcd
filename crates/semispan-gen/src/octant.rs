//! Midpoint decision-variable walk over one octant.

use semispan_core::Radius;
use std::iter::FusedIterator;

/// A boundary point produced by [`OctantWalk`].
///
/// Points lie in the octant between the apex `(0, radius)` and the
/// 45° diagonal, so `x <= y + 1` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OctantPoint {
    /// Column offset from the vertical axis.
    pub x: u32,
    /// Row, `0` at the equator.
    pub y: u32,
}

/// Integer-only walk from the apex towards the diagonal.
///
/// Starts at `(0, radius)` with decision variable `p = 1 - radius`. Each
/// step advances `x` by one and adds `2x + 1` to `p`; if `p` is then
/// positive the midpoint of the candidate pixel lies outside the circle,
/// so `y` steps down and `p` drops by `2y`. The walk stops once `x >= y`.
///
/// The apex itself is not yielded. Every step yields exactly one point, so
/// a walk over `radius` yields at most `radius` points.
///
/// # Examples
///
/// ```
/// use semispan_core::Radius;
/// use semispan_gen::{OctantPoint, OctantWalk};
///
/// let pts: Vec<_> = OctantWalk::new(Radius::new(5).unwrap()).collect();
/// assert_eq!(
///     pts,
///     vec![
///         OctantPoint { x: 1, y: 5 },
///         OctantPoint { x: 2, y: 4 },
///         OctantPoint { x: 3, y: 3 },
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct OctantWalk {
    x: i64,
    y: i64,
    p: i64,
}

impl OctantWalk {
    /// Start a walk at the apex of a circle of `radius`.
    pub fn new(radius: Radius) -> Self {
        let r = i64::from(radius.get());
        Self { x: 0, y: r, p: 1 - r }
    }

    /// Current decision variable.
    pub fn decision(&self) -> i64 {
        self.p
    }

    /// Current position (the last yielded point, or the apex).
    pub fn point(&self) -> OctantPoint {
        OctantPoint {
            x: self.x as u32,
            y: self.y as u32,
        }
    }
}

impl Iterator for OctantWalk {
    type Item = OctantPoint;

    fn next(&mut self) -> Option<OctantPoint> {
        if self.x >= self.y {
            return None;
        }
        self.x += 1;
        self.p += 2 * self.x + 1;
        if self.p > 0 {
            self.y -= 1;
            self.p -= 2 * self.y;
        }
        Some(self.point())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.x >= self.y {
            return (0, Some(0));
        }
        // x and y close by one or two per step.
        let gap = (self.y - self.x) as usize;
        (gap.div_ceil(2), Some(gap))
    }
}

impl FusedIterator for OctantWalk {}
