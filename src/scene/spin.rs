use std::f32::consts::TAU;

use crate::util::time::FrameClock;

const REFERENCE_FPS: f64 = 60.0;

/// Continuous rotation of a preview about the vertical axis.
///
/// Kept by the view that shows it; the editor state never sees the angle.
#[derive(Debug, Clone)]
pub struct SpinAnimation {
    angle: f32,
    per_frame: f32,
    clock: FrameClock,
}

impl SpinAnimation {
    /// `per_frame` is the rotation in radians per 60 Hz frame.
    pub fn new(per_frame: f32) -> Self {
        Self {
            angle: 0.0,
            per_frame,
            clock: FrameClock::default(),
        }
    }

    /// Current rotation in radians, in `[0, TAU)`
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Advance to time `now` (seconds).
    pub fn tick(&mut self, now: f64) -> f32 {
        let frames = self.clock.delta(now) * REFERENCE_FPS;
        self.angle = (self.angle + self.per_frame * frames as f32).rem_euclid(TAU);
        self.angle
    }

    /// Stop and rewind; the next tick starts from a fresh clock.
    pub fn reset(&mut self) {
        self.angle = 0.0;
        self.clock.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_second_is_sixty_frames() {
        let mut spin = SpinAnimation::new(0.003);
        spin.tick(1.0);
        let angle = spin.tick(1.2);
        assert!((angle - 0.003 * 12.0).abs() < 1e-5);
    }

    #[test]
    fn angle_wraps_around() {
        let mut spin = SpinAnimation::new(3.0);
        spin.tick(0.0);
        for i in 1..=100 {
            spin.tick(i as f64 * 0.1);
        }
        assert!(spin.angle() >= 0.0 && spin.angle() < TAU);
    }

    #[test]
    fn reset_rewinds() {
        let mut spin = SpinAnimation::new(0.01);
        spin.tick(0.0);
        spin.tick(0.2);
        spin.reset();
        assert_eq!(spin.angle(), 0.0);
        assert_eq!(spin.tick(5.0), 0.0);
    }
}
