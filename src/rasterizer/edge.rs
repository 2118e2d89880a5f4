//! Bresenham-style edge stepper
//!
//! Produces the x coordinate of a triangle edge once per scanline using
//! integer error accumulation only. The variant is chosen once, from the
//! edge's slope, when the stepper is built. The error terms are kept in
//! i64 so any pair of i32 endpoints is safe.

use super::math::ScreenPoint;

#[derive(Debug, Clone)]
pub enum EdgeStepper {
    /// Horizontal, vertical or zero-length edge: always at the end x
    Constant { x: i32 },
    /// |dx| > |dy|: may cross several x per row, reports the last one reached
    Shallow {
        x: i64,
        x_end: i64,
        sign: i64,
        d: i64,
        dx2: i64,
        dy2: i64,
    },
    /// |dx| <= |dy|: at most one x step per row, reports x before stepping
    Steep {
        x: i64,
        x_end: i64,
        sign: i64,
        d: i64,
        dx2: i64,
        dy2: i64,
    },
}

impl EdgeStepper {
    /// Build a stepper walking from `a` to `b`, one row per `next()` call
    pub fn new(a: ScreenPoint, b: ScreenPoint) -> Self {
        let dx = b.x as i64 - a.x as i64;
        let dy = (b.y as i64 - a.y as i64).abs();

        if dx == 0 || dy == 0 {
            return EdgeStepper::Constant { x: b.x };
        }

        let sign = dx.signum();
        let dx = dx.abs();

        if dx > dy {
            EdgeStepper::Shallow {
                x: a.x as i64,
                x_end: b.x as i64,
                sign,
                d: 2 * dy - dx,
                dx2: 2 * dx,
                dy2: 2 * dy,
            }
        } else {
            EdgeStepper::Steep {
                x: a.x as i64,
                x_end: b.x as i64,
                sign,
                d: 2 * dx - dy,
                dx2: 2 * dx,
                dy2: 2 * dy,
            }
        }
    }

    /// Advance one row and return the edge's x for that row
    pub fn next(&mut self) -> i32 {
        match self {
            EdgeStepper::Constant { x } => *x,
            EdgeStepper::Shallow { x, x_end, sign, d, dx2, dy2 } => {
                while *d <= 0 && *x != *x_end {
                    *x += *sign;
                    *d += *dy2;
                }
                *d -= *dx2;
                *x as i32
            }
            EdgeStepper::Steep { x, x_end, sign, d, dx2, dy2 } => {
                let current = *x;
                if *d > 0 && *x != *x_end {
                    *x += *sign;
                    *d -= *dy2;
                }
                *d += *dx2;
                current as i32
            }
        }
    }
}
