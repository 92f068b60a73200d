use super::player::Player;
use crate::pitch::{self, PLAYER_SIZE};

/// Push two overlapping players apart to exactly one footprint and swap half
/// of each other's velocity. Coincident centres are left alone.
pub fn separate(a: &mut Player, b: &mut Player) -> bool {
    let delta = b.pos - a.pos;
    let dist = delta.length();
    if dist <= 0.0 || dist >= PLAYER_SIZE {
        return false;
    }
    let push = delta / dist * (PLAYER_SIZE - dist) * 0.5;
    a.pos -= push;
    b.pos += push;
    let (va, vb) = (a.vel, b.vel);
    a.vel = vb * 0.5;
    b.vel = va * 0.5;
    true
}

/// Resolve every pair in table order (viewer against each AI first, then the
/// AIs against each other) and clamp everyone back onto the pitch.
pub fn resolve(players: &mut [Player]) {
    let n = players.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = players.split_at_mut(j);
            if separate(&mut head[i], &mut tail[0]) {
                log::trace!("players {} and {} collided", i, j);
            }
        }
    }
    for p in players.iter_mut() {
        p.pos = pitch::clamp_entity(p.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;
    use glam::Vec2;

    #[test]
    fn overlap_ends_at_threshold_with_half_swap() {
        let mut a = Player::new(Vec2::new(900.0, 500.0), Side::Left, true);
        let mut b = Player::new(Vec2::new(920.0, 500.0), Side::Right, false);
        a.vel = Vec2::new(2.0, 0.0);
        b.vel = Vec2::new(-1.0, 0.5);
        assert!(separate(&mut a, &mut b));
        assert!((a.pos.distance(b.pos) - PLAYER_SIZE).abs() < 1e-4);
        assert_eq!(a.pos, Vec2::new(895.0, 500.0));
        assert_eq!(b.pos, Vec2::new(925.0, 500.0));
        assert_eq!(a.vel, Vec2::new(-0.5, 0.25));
        assert_eq!(b.vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn coincident_and_distant_pairs_are_skipped() {
        let mut a = Player::new(Vec2::new(900.0, 500.0), Side::Left, true);
        let mut b = Player::new(Vec2::new(900.0, 500.0), Side::Right, false);
        assert!(!separate(&mut a, &mut b));
        b.pos.x = 930.0;
        assert!(!separate(&mut a, &mut b));
        assert_eq!(a.pos, Vec2::new(900.0, 500.0));
    }

    #[test]
    fn resolve_handles_every_pair_and_clamps() {
        let mut players = vec![
            Player::new(Vec2::new(600.0, 500.0), Side::Left, true),
            Player::new(Vec2::new(610.0, 500.0), Side::Right, false),
            Player::new(Vec2::new(20.0, 20.0), Side::Right, false),
        ];
        players[2].pos = Vec2::new(16.0, 16.0);
        resolve(&mut players);
        assert!((players[0].pos.distance(players[1].pos) - PLAYER_SIZE).abs() < 1e-4);
        for p in &players {
            assert_eq!(p.pos, pitch::clamp_entity(p.pos));
        }
    }
}
