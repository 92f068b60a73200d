use glam::Vec2;

use crate::pitch::{self, BALL_SIZE, FIELD_H, FIELD_W};
use crate::tuning::Tuning;

/// The ball: planar motion plus an independent height above the grass.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub z: f32,
    pub vz: f32,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, vel: Vec2::ZERO, z: 0.0, vz: 0.0 }
    }

    pub fn reset_to(&mut self, pos: Vec2) {
        *self = Self::new(pos);
    }

    /// Overwrite planar velocity and lift.
    pub fn launch(&mut self, vel: Vec2, lift: f32) {
        self.vel = vel;
        self.vz = lift;
    }

    /// Hold the ball at `pos` with no motion, as while dribbling.
    pub fn pin(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.z = 0.0;
        self.vz = 0.0;
    }

    /// One free-flight step: friction, planar move, gravity and floor bounce,
    /// then rebounds off the touchlines and off the byelines outside the goal mouth.
    pub fn step(&mut self, t: &Tuning) {
        self.vel *= t.ball_friction;
        self.pos += self.vel;

        self.vz += t.gravity;
        self.z += self.vz;
        if self.z < 0.0 {
            self.z = 0.0;
            if self.vz.abs() > t.min_bounce_speed {
                self.vz *= -t.floor_bounce;
            } else {
                self.vz = 0.0;
            }
        }

        let r = BALL_SIZE / 2.0;
        if !pitch::in_goal_mouth(self.pos.y) {
            if self.pos.x < r {
                self.pos.x = r;
                self.vel.x *= -t.wall_bounce;
            }
            if self.pos.x > FIELD_W - r {
                self.pos.x = FIELD_W - r;
                self.vel.x *= -t.wall_bounce;
            }
        }
        if self.pos.y < r {
            self.pos.y = r;
            self.vel.y *= -t.wall_bounce;
        }
        if self.pos.y > FIELD_H - r {
            self.pos.y = FIELD_H - r;
            self.vel.y *= -t.wall_bounce;
        }
    }

    pub fn is_resting(&self) -> bool {
        self.z == 0.0 && self.vz == 0.0
    }
}
