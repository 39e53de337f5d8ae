// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Nearest-anchor-point selection for annotation leaders.
//!
//! A leader attaches to a symbol frame at one of up to three anchor points.
//! Older sources expose only the two side connection points (middle-left
//! and middle-right of the frame); newer ones add a third candidate between
//! them. The selected anchor is the candidate nearest to the leader start,
//! with ties resolving toward the earlier candidate in comparison order.

use nalgebra::Point3;

/// Distances within this tolerance count as equal.
const DISTANCE_TOL: f64 = 1e-9;

/// Anchor candidates around a symbol frame, in frame coordinates.
#[derive(Debug, Clone)]
pub struct AnchorFrame {
    pub left_bottom: Point3<f64>,
    pub right_bottom: Point3<f64>,
    pub middle_bottom: Point3<f64>,
    /// Second frame point, the between-candidate used in symbol mode.
    pub frame_point: Point3<f64>,
}

/// Leader geometry as read back from the kernel: the leader position and
/// any break points, most recent last.
#[derive(Debug, Clone, Default)]
pub struct Leader {
    pub position: [f64; 2],
    pub break_points: Vec<[f64; 2]>,
}

impl Leader {
    /// The effective start point: the last break point when one exists,
    /// the leader position otherwise. The plane height comes from the frame.
    fn start(&self, z: f64) -> Point3<f64> {
        let [x, y] = self.break_points.last().copied().unwrap_or(self.position);
        Point3::new(x, y, z)
    }
}

/// Anchor-selection flags carried by the writing context.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorOptions {
    /// The source exposes the third, between-the-sides candidate.
    pub three_point: bool,
    /// In symbol mode the between-candidate is the frame point rather than
    /// the middle bottom point.
    pub symbol_mode: bool,
}

/// Which anchor candidate was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSlot {
    Left,
    Middle,
    Right,
}

impl AnchorSlot {
    /// Stable candidate index: left 0, middle 1, right 2.
    pub fn index(self) -> usize {
        match self {
            AnchorSlot::Left => 0,
            AnchorSlot::Middle => 1,
            AnchorSlot::Right => 2,
        }
    }
}

/// `a` is less than `b`, granting `a` the benefit of the tolerance.
///
/// True on near-equality, so in a chain of comparisons the earlier
/// candidate wins ties.
fn nearly_less(a: f64, b: f64) -> bool {
    a - b < DISTANCE_TOL
}

/// Selects the anchor candidate nearest to the leader start.
pub fn nearest_anchor(
    leader: &Leader,
    frame: &AnchorFrame,
    options: AnchorOptions,
) -> (Point3<f64>, AnchorSlot) {
    let left = frame.left_bottom;
    let right = frame.right_bottom;
    let start = leader.start(left.z);

    if options.three_point {
        let between = if options.symbol_mode {
            frame.frame_point
        } else {
            frame.middle_bottom
        };

        let d_left = (left - start).norm();
        let d_between = (between - start).norm();
        let d_right = (right - start).norm();

        if nearly_less(d_left, d_between) {
            if nearly_less(d_left, d_right) {
                (left, AnchorSlot::Left)
            } else if nearly_less(d_between, d_right) {
                (between, AnchorSlot::Middle)
            } else {
                (right, AnchorSlot::Right)
            }
        } else if nearly_less(d_between, d_right) {
            (between, AnchorSlot::Middle)
        } else if nearly_less(d_left, d_right) {
            (left, AnchorSlot::Left)
        } else {
            (right, AnchorSlot::Right)
        }
    } else {
        let d_left = (left - start).norm();
        let d_right = (right - start).norm();
        if nearly_less(d_left, d_right) {
            (left, AnchorSlot::Left)
        } else {
            (right, AnchorSlot::Right)
        }
    }
}
