//! Gameplay feel constants, overridable at runtime from JSON.
//!
//! Every field defaults to the shipped value, so a partial document such as
//! `{"run_speed": 2.4}` only changes what it names.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // Movement
    pub walk_speed: f32,
    pub run_speed: f32,
    /// Fraction of the speed added to velocity per step.
    pub accel_factor: f32,
    pub player_friction: f32,
    pub hop_freq: f32,
    pub run_hop_multiplier: f32,
    pub hop_height: f32,
    pub trail_length: usize,
    pub kick_frames: u32,

    // AI
    /// Beyond this distance to its target an AI runs.
    pub ai_run_distance: f32,
    /// Within this distance an AI stands still.
    pub ai_idle_distance: f32,

    // Ball
    pub ball_friction: f32,
    pub wall_bounce: f32,
    pub gravity: f32,
    pub floor_bounce: f32,
    /// Minimum impact speed that still bounces.
    pub min_bounce_speed: f32,
    /// Highest the ball can be and still be picked up.
    pub reach_height: f32,

    // Actions
    pub max_charge: u32,
    pub shot_base_speed: f32,
    pub shot_speed_per_charge: f32,
    pub shot_base_lift: f32,
    pub shot_lift_per_charge: f32,
    pub pass_speed: f32,
    pub pass_lift: f32,
    pub steal_speed: f32,
    pub steal_lift: f32,
    /// Player reach multiplier when stealing from an AI.
    pub player_tackle_reach: f32,
    pub tackle_ring_frames: u32,

    // Match flow
    pub celebration_frames: u32,
    pub winning_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            walk_speed: 1.25,
            run_speed: 2.0,
            accel_factor: 0.5,
            player_friction: 0.85,
            hop_freq: 0.18,
            run_hop_multiplier: 1.7,
            hop_height: 6.0,
            trail_length: 10,
            kick_frames: 8,

            ai_run_distance: 80.0,
            ai_idle_distance: 2.0,

            ball_friction: 0.985,
            wall_bounce: 0.85,
            gravity: -0.7,
            floor_bounce: 0.7,
            min_bounce_speed: 1.5,
            reach_height: 10.0,

            max_charge: 32,
            shot_base_speed: 2.5,
            shot_speed_per_charge: 0.25,
            shot_base_lift: 5.0,
            shot_lift_per_charge: 0.2,
            pass_speed: 4.5,
            pass_lift: 2.5,
            steal_speed: 4.0,
            steal_lift: 6.0,
            player_tackle_reach: 1.2,
            tackle_ring_frames: 12,

            celebration_frames: 60,
            winning_score: 5,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Planar speed of a shot released with `charge` frames of power.
    pub fn shot_speed(&self, charge: u32) -> f32 {
        self.shot_base_speed + self.shot_speed_per_charge * charge as f32
    }

    /// Vertical lift of a shot released with `charge` frames of power.
    pub fn shot_lift(&self, charge: u32) -> f32 {
        self.shot_base_lift + self.shot_lift_per_charge * charge as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{"run_speed": 2.4, "winning_score": 3}"#).unwrap();
        assert_eq!(t.run_speed, 2.4);
        assert_eq!(t.winning_score, 3);
        assert_eq!(t.walk_speed, Tuning::default().walk_speed);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Tuning::from_json("{}").unwrap(), Tuning::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Tuning::from_json("{\"run_speed\": \"fast\"}").is_err());
    }

    #[test]
    fn shot_formula() {
        let t = Tuning::default();
        assert_eq!(t.shot_speed(0), 2.5);
        assert_eq!(t.shot_lift(0), 5.0);
        assert!((t.shot_speed(32) - 10.5).abs() < 1e-6);
        assert!((t.shot_lift(32) - 11.4).abs() < 1e-5);
    }
}
