//! Hit-point projection and grid line rasterization.
//!
//! A laser sweep arrives as polar ranges relative to the robot heading.
//! [`laser_sweep`] projects each reading to a global-frame hit point;
//! [`cells_between`] rasterizes the robot-to-hit segment into the discrete
//! cells the beam passed through.
//!
//! # Algorithm
//!
//! [`cells_between`] is Bresenham's line algorithm: integer-only traversal
//! stepping along the axis of greater absolute delta, accumulating error in
//! the other axis. Every cell of the path is emitted, endpoints included.

use crate::core::types::{Point2D, Pose2D, RangeScan};
use std::f32::consts::{FRAC_PI_2, PI};

/// Angular offset of beam `i` of `n` from the robot heading.
///
/// Beams span [-π/2, +π/2] inclusive of both ends; a single-beam sweep
/// points straight along the heading.
#[inline]
fn beam_offset(i: usize, n: usize) -> f32 {
    if n <= 1 {
        return 0.0;
    }
    -FRAC_PI_2 + i as f32 * PI / (n - 1) as f32
}

/// Project a laser sweep to global-frame hit points.
///
/// Hit point `i` is `(x + r_i * cos(theta + a_i), y + r_i * sin(theta + a_i))` where `a_i`
/// is the beam offset. Points are real-valued and unscaled; the grid applies
/// its own resolution. Pure function, no side effects.
pub fn laser_sweep(pose: &Pose2D, scan: &RangeScan) -> Vec<Point2D> {
    let n = scan.len();
    let mut points = Vec::with_capacity(n);
    for (i, &range) in scan.ranges.iter().enumerate() {
        let angle = pose.theta + beam_offset(i, n);
        let (sin_a, cos_a) = angle.sin_cos();
        points.push(Point2D::new(
            pose.x + range * cos_a,
            pose.y + range * sin_a,
        ));
    }
    points
}

/// All grid cells on the line from `c0` to `c1`, endpoints included.
///
/// Steps one cell at a time along the dominant axis; the other axis steps
/// when the accumulated error crosses half the dominant delta. Equal deltas
/// take the x-major branch. `c0 == c1` yields a single cell. The path is
/// gap-free in the 8-connected sense.
pub fn cells_between(c0: (i32, i32), c1: (i32, i32)) -> Vec<(i32, i32)> {
    let (x0, y0) = c0;
    let (x1, y1) = c1;
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 > x1 { -1 } else { 1 };
    let sy = if y0 > y1 { -1 } else { 1 };

    let mut cells = Vec::with_capacity((dx.max(dy) + 1) as usize);
    let (mut x, mut y) = (x0, y0);

    // Error terms are doubled to stay in integers: `err` carries
    // 2 * (accumulated error), starting from half the dominant delta.
    if dx >= dy {
        let mut err = dx;
        while x != x1 {
            cells.push((x, y));
            err -= 2 * dy;
            if err < 0 {
                y += sy;
                err += 2 * dx;
            }
            x += sx;
        }
    } else {
        let mut err = dy;
        while y != y1 {
            cells.push((x, y));
            err -= 2 * dx;
            if err < 0 {
                x += sx;
                err += 2 * dy;
            }
            y += sy;
        }
    }
    cells.push((x, y));
    cells
}
