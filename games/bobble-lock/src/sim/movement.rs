//! Acceleration, gait, friction and bounds for both the viewer and the AIs.

use glam::Vec2;

use super::player::Player;
use crate::input::InputState;
use crate::pitch;
use crate::tuning::Tuning;

/// Accelerate along `dir` (unit or zero) and advance the gait.
pub fn steer(p: &mut Player, dir: Vec2, running: bool, t: &Tuning) {
    if dir == Vec2::ZERO {
        p.hop_phase = 0.0;
        p.trail.clear();
        return;
    }
    let speed = if running { t.run_speed } else { t.walk_speed };
    p.vel += dir * speed * t.accel_factor;
    p.facing = dir.y.atan2(dir.x);
    p.hop_phase += t.hop_freq * if running { t.run_hop_multiplier } else { 1.0 };
    if running {
        p.trail.push_front(p.pos);
        p.trail.truncate(t.trail_length);
    } else {
        p.trail.clear();
    }
}

/// Apply friction, move, and keep the footprint on the pitch.
pub fn integrate(p: &mut Player, t: &Tuning) {
    p.vel *= t.player_friction;
    p.pos += p.vel;
    p.pos = pitch::clamp_entity(p.pos);
}

/// One step for the viewer's player.
pub fn update_controlled(p: &mut Player, input: &InputState, t: &Tuning) {
    steer(p, input.direction(), input.running(), t);
    integrate(p, t);
    p.tick_kick();
}

/// One step for an AI chasing `target`. Returns the pre-move distance to it.
pub fn update_ai(p: &mut Player, target: Vec2, t: &Tuning) -> f32 {
    let offset = target - p.pos;
    let dist = offset.length();
    if dist > t.ai_idle_distance {
        steer(p, offset / dist, dist > t.ai_run_distance, t);
    } else {
        steer(p, Vec2::ZERO, false, t);
    }
    integrate(p, t);
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keys;
    use crate::sim::Side;
    use bobble_engine::{InputEvent, InputQueue};

    fn held(codes: &[u32]) -> InputState {
        let mut q = InputQueue::new();
        for &key_code in codes {
            q.push(InputEvent::KeyDown { key_code });
        }
        let mut input = InputState::new();
        input.apply(&q);
        input
    }

    #[test]
    fn walking_accelerates_then_decays() {
        let t = Tuning::default();
        let mut p = Player::new(Vec2::new(450.0, 500.0), Side::Left, true);
        update_controlled(&mut p, &held(&[keys::D]), &t);
        // 1.25 * 0.5 then friction
        assert!((p.vel.x - 0.625 * 0.85).abs() < 1e-6);
        assert!((p.pos.x - (450.0 + 0.625 * 0.85)).abs() < 1e-4);
        assert_eq!(p.facing, 0.0);
        assert!((p.hop_phase - 0.18).abs() < 1e-6);
        assert!(p.trail.is_empty());
    }

    #[test]
    fn running_leaves_bounded_trail() {
        let t = Tuning::default();
        let mut p = Player::new(Vec2::new(450.0, 500.0), Side::Left, true);
        let input = held(&[keys::S, keys::SHIFT]);
        let start = p.pos;
        update_controlled(&mut p, &input, &t);
        assert_eq!(p.trail.front(), Some(&start));
        assert!((p.hop_phase - 0.18 * 1.7).abs() < 1e-6);
        for _ in 0..30 {
            update_controlled(&mut p, &input, &t);
        }
        assert_eq!(p.trail.len(), 10);
        assert!((p.facing - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn stopping_resets_gait_but_keeps_facing() {
        let t = Tuning::default();
        let mut p = Player::new(Vec2::new(450.0, 500.0), Side::Left, true);
        update_controlled(&mut p, &held(&[keys::A, keys::SHIFT]), &t);
        update_controlled(&mut p, &InputState::new(), &t);
        assert_eq!(p.hop_phase, 0.0);
        assert!(p.trail.is_empty());
        assert!((p.facing - std::f32::consts::PI).abs() < 1e-6);
        assert!(p.vel.x < 0.0);
    }

    #[test]
    fn stays_on_pitch_when_pushing_into_corner() {
        let t = Tuning::default();
        let mut p = Player::new(Vec2::new(20.0, 20.0), Side::Left, true);
        let input = held(&[keys::UP, keys::LEFT, keys::SHIFT]);
        for _ in 0..100 {
            update_controlled(&mut p, &input, &t);
            assert!(p.pos.x >= 15.0 && p.pos.y >= 15.0);
        }
        assert_eq!(p.pos, Vec2::new(15.0, 15.0));
    }

    #[test]
    fn ai_runs_when_far_and_idles_when_close() {
        let t = Tuning::default();
        let mut ai = Player::new(Vec2::new(1350.0, 440.0), Side::Right, false);
        let dist = update_ai(&mut ai, Vec2::new(900.0, 440.0), &t);
        assert_eq!(dist, 450.0);
        assert_eq!(ai.trail.len(), 1);
        assert!(ai.vel.x < 0.0);

        let mut idle = Player::new(Vec2::new(900.0, 500.0), Side::Right, false);
        idle.hop_phase = 2.0;
        update_ai(&mut idle, Vec2::new(901.0, 500.0), &t);
        assert_eq!(idle.hop_phase, 0.0);
        assert_eq!(idle.vel, Vec2::ZERO);
    }
}
