//! Shots, passes and steals. Each one overwrites the ball's velocity and lift.

use glam::Vec2;

use super::ball::Ball;
use crate::tuning::Tuning;

/// Shoot from `from` toward `at` with `charge` frames of power.
/// Returns false, leaving the ball untouched, when the direction is degenerate.
pub fn shoot(ball: &mut Ball, from: Vec2, at: Vec2, charge: u32, t: &Tuning) -> bool {
    let dir = (at - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return false;
    }
    ball.launch(dir * t.shot_speed(charge), t.shot_lift(charge));
    true
}

/// Pass from `from` toward `target`. Returns false when there is no direction.
pub fn pass(ball: &mut Ball, from: Vec2, target: Vec2, t: &Tuning) -> bool {
    let dir = (target - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return false;
    }
    ball.launch(dir * t.pass_speed, t.pass_lift);
    true
}

/// Knock the ball loose along `dir` (normalized here) after a tackle.
pub fn steal(ball: &mut Ball, dir: Vec2, t: &Tuning) {
    ball.launch(dir.normalize_or_zero() * t.steal_speed, t.steal_lift);
}

/// Brief ring drawn where the viewer won the ball back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TackleRing {
    pub pos: Vec2,
    pub frames_left: u32,
    pub total: u32,
}

impl TackleRing {
    pub fn new(pos: Vec2, frames: u32) -> Self {
        Self { pos, frames_left: frames, total: frames.max(1) }
    }

    /// Remaining strength in `[0, 1]`.
    pub fn strength(&self) -> f32 {
        self.frames_left as f32 / self.total as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_charge_shot_to_the_right() {
        let t = Tuning::default();
        let mut ball = Ball::new(Vec2::new(471.0, 500.0));
        assert!(shoot(&mut ball, Vec2::new(450.0, 500.0), Vec2::new(800.0, 500.0), 0, &t));
        assert_eq!(ball.vel, Vec2::new(2.5, 0.0));
        assert_eq!(ball.vz, 5.0);
    }

    #[test]
    fn full_charge_shot() {
        let t = Tuning::default();
        let mut ball = Ball::new(Vec2::ZERO);
        shoot(&mut ball, Vec2::ZERO, Vec2::new(0.0, -10.0), 32, &t);
        assert!((ball.vel - Vec2::new(0.0, -10.5)).length() < 1e-5);
        assert!((ball.vz - 11.4).abs() < 1e-5);
    }

    #[test]
    fn degenerate_directions_do_nothing() {
        let t = Tuning::default();
        let mut ball = Ball::new(Vec2::ZERO);
        ball.vel = Vec2::new(1.0, 1.0);
        assert!(!shoot(&mut ball, Vec2::ONE, Vec2::ONE, 5, &t));
        assert!(!pass(&mut ball, Vec2::ONE, Vec2::ONE, &t));
        assert_eq!(ball.vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn pass_is_fixed_strength() {
        let t = Tuning::default();
        let mut ball = Ball::new(Vec2::ZERO);
        assert!(pass(&mut ball, Vec2::ZERO, Vec2::new(0.0, 300.0), &t));
        assert_eq!(ball.vel, Vec2::new(0.0, 4.5));
        assert_eq!(ball.vz, 2.5);
    }

    #[test]
    fn steal_impulse() {
        let t = Tuning::default();
        let mut ball = Ball::new(Vec2::ZERO);
        steal(&mut ball, Vec2::new(-20.0, 0.0), &t);
        assert_eq!(ball.vel, Vec2::new(-4.0, 0.0));
        assert_eq!(ball.vz, 6.0);
    }

    #[test]
    fn ring_fades() {
        let mut ring = TackleRing::new(Vec2::ZERO, 12);
        assert_eq!(ring.strength(), 1.0);
        ring.frames_left = 6;
        assert_eq!(ring.strength(), 0.5);
    }
}
