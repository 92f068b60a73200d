use super::ball::Ball;
use super::Side;
use crate::pitch::{self, FIELD_W};

/// Side that scored, if the ball has crossed a byeline inside the goal mouth.
pub fn scored(ball: &Ball) -> Option<Side> {
    if !pitch::in_goal_mouth(ball.pos.y) {
        return None;
    }
    if ball.pos.x < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x > FIELD_W {
        Some(Side::Left)
    } else {
        None
    }
}
