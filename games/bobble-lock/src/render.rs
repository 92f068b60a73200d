//! Vector drawing of a match. Reads state only.

use glam::Vec2;
use bobble_engine::{draw_text_centered, TextStyle, VectorColor, VectorState};

use crate::pitch::{
    self, CENTER, CENTER_CIRCLE_R, FIELD_H, FIELD_W, GOAL_AREA_H, GOAL_AREA_W, GOAL_DEPTH, GOAL_MOUTH,
    PENALTY_BOX_H, PENALTY_BOX_W, PLAYER_SIZE,
};
use crate::sim::actions::TackleRing;
use crate::sim::ball::Ball;
use crate::sim::player::Player;
use crate::sim::{Match, Phase, Side, CONTROLLED};

const GRASS: VectorColor = VectorColor::hex(0xa6e060);
const LINES: VectorColor = VectorColor::hex(0xd6f7b6);
const LINE_WIDTH: f32 = 4.0;
const TRAIL: VectorColor = VectorColor::hex(0xbfa76a);
const TRAIL_RADIUS: f32 = 12.0;
const KICK: VectorColor = VectorColor::hex(0xfff700);
const SHADOW: VectorColor = VectorColor::hex(0x222222);
const BAR_OUTLINE: VectorColor = VectorColor::hex(0x333333);
const SHOT_ARROW: VectorColor = VectorColor::hex(0xff6b35);
const PASS_START: VectorColor = VectorColor::hex(0x4fc3f7);
const PASS_END: VectorColor = VectorColor::hex(0x1976d2);
const BALL_RADIUS: f32 = pitch::BALL_SIZE / 2.0;

pub fn side_color(side: Side) -> VectorColor {
    match side {
        Side::Left => VectorColor::hex(0xe74c3c),
        Side::Right => VectorColor::hex(0x3498db),
    }
}

/// Draw the whole frame. `pointer` is where the shot arrow points.
pub fn draw(m: &Match, pointer: Vec2, v: &mut VectorState) {
    draw_field(v);
    draw_goal(v, 0.0, 1.0);
    draw_goal(v, FIELD_W, -1.0);

    for p in &m.players {
        draw_trail(v, p);
    }
    for p in &m.players {
        draw_player(v, p, m.tuning.hop_height);
    }
    draw_ball(v, &m.ball);

    if m.holder == Some(CONTROLLED) {
        let pos = m.players[CONTROLLED].pos;
        if let Some(charge) = m.charge {
            let pct = charge as f32 / m.tuning.max_charge.max(1) as f32;
            draw_power(v, pos, pointer, pct);
        }
        if let Some(target) = m.aim {
            draw_pass_aim(v, pos, target);
        }
    }

    if let Some(ring) = &m.tackle_ring {
        draw_tackle_ring(v, ring);
    }

    let score = TextStyle::new(48.0, LINES);
    draw_text_centered(v, &m.score.left.to_string(), Vec2::new(FIELD_W * 0.25, 60.0), &score);
    draw_text_centered(v, &m.score.right.to_string(), Vec2::new(FIELD_W * 0.75, 60.0), &score);

    match (&m.phase, &m.banner) {
        (Phase::Celebrating { .. }, Some(banner)) => {
            let color = side_color(banner.side);
            draw_text_centered(v, "GOAL", CENTER - Vec2::new(0.0, 20.0), &TextStyle::new(96.0, color));
            draw_text_centered(v, &banner.byline(), CENTER + Vec2::new(0.0, 60.0), &TextStyle::new(32.0, color));
        }
        (Phase::Over, _) => {
            v.fill_rect(Vec2::ZERO, FIELD_W, FIELD_H, VectorColor::BLACK.with_alpha(0.5));
            let white = VectorColor::WHITE;
            draw_text_centered(v, "FULL TIME", CENTER - Vec2::new(0.0, 50.0), &TextStyle::new(72.0, white));
            let line = format!("{} - {}", m.score.left, m.score.right);
            draw_text_centered(v, &line, CENTER + Vec2::new(0.0, 50.0), &TextStyle::new(64.0, white));
        }
        _ => {}
    }
}

fn draw_field(v: &mut VectorState) {
    v.fill_rect(Vec2::ZERO, FIELD_W, FIELD_H, GRASS);
    v.stroke_rect(Vec2::ZERO, FIELD_W, FIELD_H, LINE_WIDTH, LINES);
    v.line(Vec2::new(CENTER.x, 0.0), Vec2::new(CENTER.x, FIELD_H), LINE_WIDTH, LINES);
    v.stroke_circle(CENTER, CENTER_CIRCLE_R, LINE_WIDTH, LINES);

    for (box_w, box_h) in [(PENALTY_BOX_W, PENALTY_BOX_H), (GOAL_AREA_W, GOAL_AREA_H)] {
        let top = CENTER.y - box_h / 2.0;
        v.stroke_rect(Vec2::new(0.0, top), box_w, box_h, LINE_WIDTH, LINES);
        v.stroke_rect(Vec2::new(FIELD_W - box_w, top), box_w, box_h, LINE_WIDTH, LINES);
    }
}

/// Posts on the byline at `x`, net drawn toward `inward` (+1 or -1).
fn draw_goal(v: &mut VectorState, x: f32, inward: f32) {
    let top = CENTER.y - GOAL_MOUTH / 2.0;
    let bottom = CENTER.y + GOAL_MOUTH / 2.0;
    let back = x + inward * GOAL_DEPTH;
    let net = VectorColor::WHITE.with_alpha(0.6);

    v.stroke_polyline(
        &[Vec2::new(x, top), Vec2::new(back, top), Vec2::new(back, bottom), Vec2::new(x, bottom)],
        2.0,
        VectorColor::WHITE,
    );
    for i in 0..5 {
        let step = i as f32 * 8.0;
        v.line(Vec2::new(x + inward * step, top + step), Vec2::new(back, top + step + GOAL_DEPTH), 2.0, net);
    }
    for i in 1..=5 {
        let y = top + i as f32 * GOAL_MOUTH / 6.0;
        v.line(Vec2::new(x, y), Vec2::new(back, y), 2.0, net);
    }
    v.line(Vec2::new(x, top), Vec2::new(x, bottom), 8.0, VectorColor::WHITE);
}

fn draw_trail(v: &mut VectorState, p: &Player) {
    for (i, at) in p.trail.iter().enumerate() {
        let alpha = 0.15 * (1.0 - i as f32 / 10.0);
        v.fill_circle(*at, TRAIL_RADIUS, TRAIL.with_alpha(alpha));
    }
}

fn draw_player(v: &mut VectorState, p: &Player, hop_height: f32) {
    let center = p.pos - Vec2::new(0.0, p.hop_offset(hop_height));
    let radius = PLAYER_SIZE / 2.0;
    let fill = if p.kicking { KICK } else { side_color(p.side) };
    v.fill_circle(center, radius, fill);
    if p.controlled {
        v.stroke_circle(center, radius, 2.0, VectorColor::WHITE);
    }
}

fn draw_ball(v: &mut VectorState, ball: &Ball) {
    let s = 1.0 - (ball.z / 60.0).min(0.7);
    let alpha = 0.25 + 0.5 * (1.0 - (ball.z / 60.0).min(1.0));
    v.fill_ellipse(
        ball.pos + Vec2::new(0.0, BALL_RADIUS),
        Vec2::new(BALL_RADIUS * s * 1.2, BALL_RADIUS * 0.5 * s),
        SHADOW.with_alpha(alpha),
    );
    v.fill_circle(ball.pos - Vec2::new(0.0, ball.z), BALL_RADIUS, VectorColor::WHITE);
}

/// Filled triangular head ending at `tip`. Returns where the shaft should stop.
fn arrow_head(v: &mut VectorState, tip: Vec2, dir: Vec2, length: f32, half_width: f32, color: VectorColor) -> Vec2 {
    let base = tip - dir * length;
    let side = dir.perp() * half_width;
    v.fill_polygon(&[tip, base + side, base - side], color);
    base
}

fn draw_power(v: &mut VectorState, pos: Vec2, pointer: Vec2, pct: f32) {
    let bar = pos - Vec2::new(30.0, 50.0);
    v.fill_rect(bar, 60.0 * pct, 10.0, KICK.faded(0.8));
    v.stroke_rect(bar, 60.0, 10.0, 1.0, BAR_OUTLINE.faded(0.8));

    let dir = (pointer - pos).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    let color = SHOT_ARROW.faded(0.9);
    let tip = pos + dir * (60.0 + 40.0 * pct);
    let base = arrow_head(v, tip, dir, 15.0, 7.0, color);
    v.line(pos, base, 7.0, color);
}

fn draw_pass_aim(v: &mut VectorState, pos: Vec2, target: Vec2) {
    let offset = target - pos;
    let dist = offset.length();
    if dist <= 0.0 {
        return;
    }
    let dir = offset / dist;
    let tip = pos + dir * dist.min(120.0);
    let base = arrow_head(v, tip, dir, 18.0, 8.0, PASS_END.faded(0.7));
    v.gradient_line(pos, base, 8.0, PASS_START.faded(0.7), PASS_END.faded(0.7));
}

fn draw_tackle_ring(v: &mut VectorState, ring: &TackleRing) {
    v.stroke_circle(ring.pos, 24.0, 16.0, KICK.faded(0.7 * ring.strength()));
}
