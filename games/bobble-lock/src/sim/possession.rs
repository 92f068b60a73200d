use super::ball::Ball;
use super::player::Player;
use crate::pitch::{DRIBBLE_OFFSET, POSSESSION_DIST};

/// First player able to pick up a loose, low ball, in table order.
/// Returns `None` while someone already holds it.
pub fn first_taker(players: &[Player], ball: &Ball, holder: Option<usize>, reach_height: f32) -> Option<usize> {
    if holder.is_some() || ball.z >= reach_height {
        return None;
    }
    players
        .iter()
        .position(|p| p.pos.distance(ball.pos) < POSSESSION_DIST)
}

/// Pin the ball in front of its holder.
pub fn dribble(holder: &Player, ball: &mut Ball) {
    ball.pin(holder.pos + holder.facing_dir() * DRIBBLE_OFFSET);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;
    use glam::Vec2;

    fn squad() -> Vec<Player> {
        vec![
            Player::new(Vec2::new(450.0, 500.0), Side::Left, true),
            Player::new(Vec2::new(1350.0, 440.0), Side::Right, false),
            Player::new(Vec2::new(1350.0, 560.0), Side::Right, false),
        ]
    }

    #[test]
    fn nearby_low_ball_is_taken() {
        let players = squad();
        let ball = Ball::new(Vec2::new(470.0, 500.0));
        assert_eq!(first_taker(&players, &ball, None, 10.0), Some(0));
    }

    #[test]
    fn high_or_far_or_held_ball_is_not_taken() {
        let players = squad();
        let mut ball = Ball::new(Vec2::new(470.0, 500.0));
        assert_eq!(first_taker(&players, &ball, Some(1), 10.0), None);
        ball.z = 10.0;
        assert_eq!(first_taker(&players, &ball, None, 10.0), None);
        ball.z = 0.0;
        ball.pos.x = 476.0;
        assert_eq!(first_taker(&players, &ball, None, 10.0), None);
    }

    #[test]
    fn controlled_player_wins_ties() {
        let mut players = squad();
        players[1].pos = Vec2::new(500.0, 500.0);
        let ball = Ball::new(Vec2::new(475.0, 500.0));
        assert_eq!(first_taker(&players, &ball, None, 10.0), Some(0));
    }

    #[test]
    fn dribble_offset_follows_facing() {
        let mut p = Player::new(Vec2::new(600.0, 300.0), Side::Left, true);
        p.facing = std::f32::consts::FRAC_PI_2;
        let mut ball = Ball::new(Vec2::ZERO);
        ball.vel = Vec2::new(4.0, 4.0);
        ball.z = 3.0;
        ball.vz = 1.0;
        dribble(&p, &mut ball);
        assert!((ball.pos - Vec2::new(600.0, 321.0)).length() < 1e-4);
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!((ball.z, ball.vz), (0.0, 0.0));
    }
}
