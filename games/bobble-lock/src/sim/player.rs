use std::collections::VecDeque;

use glam::Vec2;

use super::Side;

/// One footballer, either the viewer's or an AI.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing angle in radians; only changes while moving.
    pub facing: f32,
    /// Recent positions while running, newest first.
    pub trail: VecDeque<Vec2>,
    pub hop_phase: f32,
    pub kicking: bool,
    pub kick_timer: u32,
    pub controlled: bool,
    pub side: Side,
}

impl Player {
    pub fn new(pos: Vec2, side: Side, controlled: bool) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            facing: 0.0,
            trail: VecDeque::with_capacity(10),
            hop_phase: 0.0,
            kicking: false,
            kick_timer: 0,
            controlled,
            side,
        }
    }

    /// Put the player back on a kick-off spot at rest.
    pub fn reset_to(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.trail.clear();
        self.hop_phase = 0.0;
    }

    pub fn start_kick(&mut self, frames: u32) {
        self.kicking = true;
        self.kick_timer = frames;
    }

    /// Count the kick flourish down, clearing the flag when it runs out.
    pub fn tick_kick(&mut self) {
        if self.kick_timer > 0 {
            self.kick_timer -= 1;
            if self.kick_timer == 0 {
                self.kicking = false;
            }
        }
    }

    /// Vertical bob of the hopping gait.
    pub fn hop_offset(&self, hop_height: f32) -> f32 {
        self.hop_phase.sin().abs() * hop_height
    }

    pub fn facing_dir(&self) -> Vec2 {
        Vec2::from_angle(self.facing)
    }
}
