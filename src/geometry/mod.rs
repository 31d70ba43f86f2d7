mod grid;
pub mod hit_testing;

pub use grid::GridMapping;
pub use hit_testing::hit_test;

use egui::Pos2;

/// Placement of a straight segment: where its middle is, how long it is and
/// which way it points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPlacement {
    pub midpoint: Pos2,
    pub length: f32,
    /// `atan2(dy, dx)` in degrees, in `(-180, 180]`.
    pub rotation_degrees: f32,
}

/// Place a segment drawn from `start` to `end`.
///
/// Swapping the endpoints gives the same midpoint and length, with the rotation
/// off by 180 degrees. A zero-length segment has rotation 0.
pub fn segment_placement(start: Pos2, end: Pos2) -> SegmentPlacement {
    let delta = end - start;
    SegmentPlacement {
        midpoint: start + delta * 0.5,
        length: delta.length(),
        rotation_degrees: delta.y.atan2(delta.x).to_degrees(),
    }
}
