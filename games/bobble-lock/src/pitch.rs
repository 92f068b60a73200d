//! Fixed pitch geometry, in logical surface units.

use glam::Vec2;

pub const FIELD_W: f32 = 1800.0;
pub const FIELD_H: f32 = 1000.0;

/// Vertical span of the goal mouth.
pub const GOAL_MOUTH: f32 = 220.0;
/// Height of the penalty box markings.
pub const PENALTY_BOX_H: f32 = 260.0;
pub const PENALTY_BOX_W: f32 = 160.0;
pub const GOAL_AREA_W: f32 = 80.0;
pub const GOAL_AREA_H: f32 = 130.0;
pub const GOAL_DEPTH: f32 = 40.0;
pub const CENTER_CIRCLE_R: f32 = 90.0;

/// Side length of an entity's square footprint.
pub const PLAYER_SIZE: f32 = 30.0;
pub const BALL_SIZE: f32 = 22.0;

/// Ball-to-entity distance below which the ball can be picked up.
pub const POSSESSION_DIST: f32 = (PLAYER_SIZE + BALL_SIZE) / 2.0;
/// Ball distance in front of the holder while dribbling.
pub const DRIBBLE_OFFSET: f32 = PLAYER_SIZE * 0.7;

pub const CENTER: Vec2 = Vec2::new(FIELD_W / 2.0, FIELD_H / 2.0);

/// Kick-off spots: the controlled player, then the two AIs.
pub const PLAYER_START: Vec2 = Vec2::new(FIELD_W * 0.25, FIELD_H / 2.0);
pub const AI_STARTS: [Vec2; 2] = [
    Vec2::new(FIELD_W * 0.75, FIELD_H / 2.0 - 60.0),
    Vec2::new(FIELD_W * 0.75, FIELD_H / 2.0 + 60.0),
];
pub const BALL_START: Vec2 = CENTER;

/// Clamp an entity centre so its footprint stays on the pitch.
pub fn clamp_entity(pos: Vec2) -> Vec2 {
    let half = PLAYER_SIZE / 2.0;
    pos.clamp(Vec2::splat(half), Vec2::new(FIELD_W - half, FIELD_H - half))
}

/// True when `y` lies strictly inside the goal mouth.
pub fn in_goal_mouth(y: f32) -> bool {
    y > CENTER.y - GOAL_MOUTH / 2.0 && y < CENTER.y + GOAL_MOUTH / 2.0
}
