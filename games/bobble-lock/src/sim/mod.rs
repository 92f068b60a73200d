//! The match simulation: one explicit context advanced one fixed step at a time.
//!
//! Step order while playing:
//! 1. button transitions (charge/aim start, shot/pass release, kick flourish)
//! 2. viewer movement, then each AI (with its tackle check)
//! 3. loose-ball flight
//! 4. pickup of a loose ball
//! 5. charge build-up and pass-aim tracking
//! 6. player-player collisions
//! 7. viewer steals from an AI holder
//! 8. dribble pin
//! 9. goal check

pub mod actions;
pub mod ball;
pub mod collision;
pub mod goal;
pub mod movement;
pub mod player;
pub mod possession;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::input::{Edge, InputState};
use crate::pitch::{self, PLAYER_SIZE};
use crate::tuning::Tuning;
use actions::TackleRing;
use ball::Ball;
use player::Player;

/// Index of the viewer's player in the entity table.
pub const CONTROLLED: usize = 0;

/// Half of the pitch, and the team defending it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    fn bump(&mut self, side: Side) -> u32 {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *slot += 1;
        *slot
    }
}

/// Match flow. Transitions: Playing→Celebrating, Celebrating→Playing, Playing→Over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Celebrating { frames_left: u32 },
    Over,
}

/// Who scored last, shown during the celebration.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalBanner {
    pub side: Side,
    pub scorer: String,
}

impl GoalBanner {
    pub fn byline(&self) -> String {
        format!("By {}", self.scorer)
    }
}

/// Notable things a step produced, for the HUD and audio.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchEvent {
    Goal { side: Side, scorer: String },
    PossessionChanged(Option<usize>),
    Tackle { by: usize, from: usize },
    GameOver { score: Score },
}

pub struct Match {
    pub players: [Player; 3],
    pub ball: Ball,
    pub holder: Option<usize>,
    /// Last player to win the ball, used to credit goals.
    pub last_touch: Option<usize>,
    /// Shot power while the primary button is held with the ball.
    pub charge: Option<u32>,
    /// Pass target while the secondary button is held with the ball.
    pub aim: Option<Vec2>,
    pub score: Score,
    pub phase: Phase,
    pub tackle_ring: Option<TackleRing>,
    pub banner: Option<GoalBanner>,
    pub tuning: Tuning,
    /// Display name credited for the viewer's goals.
    pub viewer_name: String,
}

impl Match {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            players: [
                Player::new(pitch::PLAYER_START, Side::Left, true),
                Player::new(pitch::AI_STARTS[0], Side::Right, false),
                Player::new(pitch::AI_STARTS[1], Side::Right, false),
            ],
            ball: Ball::new(pitch::BALL_START),
            holder: None,
            last_touch: None,
            charge: None,
            aim: None,
            score: Score::default(),
            phase: Phase::Playing,
            tackle_ring: None,
            banner: None,
            tuning,
            viewer_name: String::from("Player"),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// Back to kick-off: positions, ball and every in-progress action.
    pub fn reset_layout(&mut self) {
        self.players[CONTROLLED].reset_to(pitch::PLAYER_START);
        for (ai, start) in self.players[1..].iter_mut().zip(pitch::AI_STARTS) {
            ai.reset_to(start);
        }
        self.ball.reset_to(pitch::BALL_START);
        self.holder = None;
        self.last_touch = None;
        self.charge = None;
        self.aim = None;
    }

    /// Advance one fixed step.
    pub fn step(&mut self, input: &InputState, edges: &[Edge]) -> Vec<MatchEvent> {
        let mut events = Vec::new();
        let holder_before = self.holder;

        match self.phase {
            Phase::Over => return events,
            Phase::Celebrating { frames_left } => {
                self.tick_effects();
                let frames_left = frames_left.saturating_sub(1);
                if frames_left == 0 {
                    self.phase = Phase::Playing;
                    self.banner = None;
                    log::info!("kick-off");
                } else {
                    self.phase = Phase::Celebrating { frames_left };
                }
                return events;
            }
            Phase::Playing => {}
        }

        self.tick_effects();
        for edge in edges {
            self.apply_edge(*edge);
        }

        movement::update_controlled(&mut self.players[CONTROLLED], input, &self.tuning);
        self.update_ais(input, &mut events);

        if self.holder.is_none() {
            self.ball.step(&self.tuning);
        }

        if let Some(taker) =
            possession::first_taker(&self.players, &self.ball, self.holder, self.tuning.reach_height)
        {
            self.take(taker);
        }

        if self.holder == Some(CONTROLLED) {
            if let Some(power) = self.charge.as_mut() {
                *power = (*power + 1).min(self.tuning.max_charge);
            }
            if let Some(target) = self.aim.as_mut() {
                *target = input.pointer;
            }
        }

        collision::resolve(&mut self.players);
        self.player_steal(input, &mut events);

        if let Some(h) = self.holder {
            possession::dribble(&self.players[h], &mut self.ball);
        }

        if let Some(side) = goal::scored(&self.ball) {
            self.on_goal(side, &mut events);
        }

        if self.holder != holder_before {
            events.push(MatchEvent::PossessionChanged(self.holder));
        }
        events
    }

    fn tick_effects(&mut self) {
        if let Some(ring) = self.tackle_ring.as_mut() {
            ring.frames_left = ring.frames_left.saturating_sub(1);
            if ring.frames_left == 0 {
                self.tackle_ring = None;
            }
        }
    }

    fn take(&mut self, idx: usize) {
        self.holder = Some(idx);
        self.last_touch = Some(idx);
        self.ball.pin(self.ball.pos);
    }

    fn apply_edge(&mut self, edge: Edge) {
        let has_ball = self.holder == Some(CONTROLLED);
        let from = self.players[CONTROLLED].pos;
        match edge {
            Edge::PrimaryDown => {
                if has_ball {
                    self.charge = Some(0);
                }
            }
            Edge::PrimaryUp { at } => {
                if let Some(power) = self.charge.take() {
                    if has_ball {
                        if !actions::shoot(&mut self.ball, from, at, power, &self.tuning) {
                            log::debug!("shot released on top of the player");
                        }
                        self.holder = None;
                        log::debug!("shot with power {}", power);
                    }
                }
            }
            Edge::SecondaryDown { at } => {
                if has_ball {
                    self.aim = Some(at);
                }
            }
            Edge::SecondaryUp => {
                if let Some(target) = self.aim.take() {
                    if has_ball && actions::pass(&mut self.ball, from, target, &self.tuning) {
                        self.holder = None;
                    }
                }
            }
            Edge::Kick => self.players[CONTROLLED].start_kick(self.tuning.kick_frames),
        }
    }

    fn update_ais(&mut self, input: &InputState, events: &mut Vec<MatchEvent>) {
        for i in 1..self.players.len() {
            let target = match self.holder {
                Some(h) if h != i => self.players[h].pos,
                _ => self.ball.pos,
            };
            let toward = target - self.players[i].pos;
            let dist = movement::update_ai(&mut self.players[i], target, &self.tuning);

            if self.holder == Some(CONTROLLED)
                && dist < PLAYER_SIZE
                && input.primary
                && self.charge.is_none()
            {
                self.take(i);
                // The dribble pin later in this step overwrites the impulse.
                actions::steal(&mut self.ball, toward, &self.tuning);
                events.push(MatchEvent::Tackle { by: i, from: CONTROLLED });
                log::info!("AI {} tackled the viewer", i);
            }
        }
    }

    fn player_steal(&mut self, input: &InputState, events: &mut Vec<MatchEvent>) {
        if !input.primary || self.charge.is_some() {
            return;
        }
        let Some(h) = self.holder.filter(|&h| h != CONTROLLED) else { return };
        let offset = self.players[h].pos - self.players[CONTROLLED].pos;
        let dist = offset.length();
        if dist <= 0.0 || dist >= PLAYER_SIZE * self.tuning.player_tackle_reach {
            return;
        }
        self.take(CONTROLLED);
        // Overwritten by the dribble pin below, like the AI tackle.
        actions::steal(&mut self.ball, -offset, &self.tuning);
        self.tackle_ring = Some(TackleRing::new(self.players[h].pos, self.tuning.tackle_ring_frames));
        events.push(MatchEvent::Tackle { by: CONTROLLED, from: h });
        log::info!("viewer stole the ball from AI {}", h);
    }

    fn on_goal(&mut self, side: Side, events: &mut Vec<MatchEvent>) {
        let goals = self.score.bump(side);
        let scorer = if self.last_touch == Some(CONTROLLED) {
            self.viewer_name.clone()
        } else {
            String::from("AI")
        };
        log::info!(
            "goal for {} by {} ({} - {})",
            side.as_str(),
            scorer,
            self.score.left,
            self.score.right
        );
        self.banner = Some(GoalBanner { side, scorer: scorer.clone() });
        self.reset_layout();
        events.push(MatchEvent::Goal { side, scorer });

        if goals >= self.tuning.winning_score {
            self.phase = Phase::Over;
            events.push(MatchEvent::GameOver { score: self.score });
            log::info!("full time: {} - {}", self.score.left, self.score.right);
        } else {
            self.phase = Phase::Celebrating { frames_left: self.tuning.celebration_frames.max(1) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bobble_engine::{InputEvent, InputQueue, PointerButton};

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    fn feed(input: &mut InputState, events: &[InputEvent]) -> Vec<Edge> {
        let mut q = InputQueue::new();
        for e in events {
            q.push(*e);
        }
        input.apply(&q)
    }

    fn held_by_viewer() -> Match {
        let mut m = Match::new(Tuning::default());
        m.ball.pos = m.players[CONTROLLED].pos + Vec2::new(20.0, 0.0);
        let none = InputState::new();
        m.step(&none, &[]);
        assert_eq!(m.holder, Some(CONTROLLED));
        m
    }

    #[test]
    fn kick_off_layout() {
        let m = Match::new(Tuning::default());
        assert_eq!(m.players[0].pos, Vec2::new(450.0, 500.0));
        assert_eq!(m.players[1].pos, Vec2::new(1350.0, 440.0));
        assert_eq!(m.players[2].pos, Vec2::new(1350.0, 560.0));
        assert_eq!(m.ball.pos, Vec2::new(900.0, 500.0));
        assert_eq!(m.phase, Phase::Playing);
    }

    #[test]
    fn pickup_pins_ball_at_dribble_offset() {
        let m = held_by_viewer();
        let p = &m.players[CONTROLLED];
        assert!(approx(m.ball.pos, p.pos + p.facing_dir() * pitch::DRIBBLE_OFFSET));
        assert_eq!(m.ball.vel, Vec2::ZERO);
        assert_eq!(m.last_touch, Some(CONTROLLED));
    }

    #[test]
    fn zero_charge_shot_to_the_right() {
        let mut m = held_by_viewer();
        let mut input = InputState::new();
        let p = m.players[CONTROLLED].pos;
        let edges = feed(&mut input, &[
            InputEvent::PointerDown { x: p.x + 200.0, y: p.y, button: PointerButton::Primary },
            InputEvent::PointerUp { x: p.x + 200.0, y: p.y, button: PointerButton::Primary },
        ]);
        for e in &edges {
            m.apply_edge(*e);
        }
        assert_eq!(m.holder, None);
        assert_eq!(m.ball.vel, Vec2::new(2.5, 0.0));
        assert_eq!(m.ball.vz, 5.0);
        assert_eq!(m.charge, None);
    }

    #[test]
    fn charge_builds_while_held_and_caps() {
        let mut m = held_by_viewer();
        let mut input = InputState::new();
        let edges = feed(&mut input, &[InputEvent::PointerDown {
            x: 900.0,
            y: 500.0,
            button: PointerButton::Primary,
        }]);
        m.step(&input, &edges);
        assert_eq!(m.charge, Some(1));
        for _ in 0..50 {
            m.step(&input, &[]);
        }
        assert_eq!(m.charge, Some(32));
        assert_eq!(m.holder, Some(CONTROLLED));
    }

    #[test]
    fn pass_follows_pointer_and_releases() {
        let mut m = held_by_viewer();
        let mut input = InputState::new();
        let p = m.players[CONTROLLED].pos;
        let edges = feed(&mut input, &[InputEvent::PointerDown {
            x: p.x,
            y: p.y - 100.0,
            button: PointerButton::Secondary,
        }]);
        m.step(&input, &edges);
        feed(&mut input, &[InputEvent::PointerMove { x: p.x, y: p.y + 300.0 }]);
        m.step(&input, &[]);
        assert_eq!(m.aim, Some(Vec2::new(p.x, p.y + 300.0)));

        let from = m.players[CONTROLLED].pos;
        let edges = feed(&mut input, &[InputEvent::PointerUp {
            x: p.x,
            y: p.y + 300.0,
            button: PointerButton::Secondary,
        }]);
        m.apply_edge(edges[0]);
        assert_eq!(m.holder, None);
        assert_eq!(m.aim, None);
        let expected = (Vec2::new(p.x, p.y + 300.0) - from).normalize() * 4.5;
        assert!(approx(m.ball.vel, expected));
        assert_eq!(m.ball.vz, 2.5);
    }

    #[test]
    fn zero_length_pass_keeps_ball() {
        let mut m = held_by_viewer();
        let at = m.players[CONTROLLED].pos;
        m.apply_edge(Edge::SecondaryDown { at });
        m.apply_edge(Edge::SecondaryUp);
        assert_eq!(m.holder, Some(CONTROLLED));
        assert_eq!(m.aim, None);
    }

    #[test]
    fn release_clears_charge_even_without_ball() {
        let mut m = held_by_viewer();
        m.apply_edge(Edge::PrimaryDown);
        m.holder = Some(1);
        m.apply_edge(Edge::PrimaryUp { at: Vec2::ZERO });
        assert_eq!(m.charge, None);
        assert_eq!(m.holder, Some(1));
    }

    #[test]
    fn ai_tackles_viewer_holding_primary() {
        let mut m = held_by_viewer();
        // Short reach so the viewer cannot win it straight back
        m.tuning.player_tackle_reach = 0.5;
        m.players[1].pos = m.players[CONTROLLED].pos + Vec2::new(25.0, 0.0);
        m.players[1].vel = Vec2::ZERO;
        let mut input = InputState::new();
        input.primary = true;
        let events = m.step(&input, &[]);
        assert_eq!(m.holder, Some(1));
        assert_eq!(m.last_touch, Some(1));
        assert!(events.contains(&MatchEvent::Tackle { by: 1, from: CONTROLLED }));
        assert!(events.contains(&MatchEvent::PossessionChanged(Some(1))));
        assert!(m.tackle_ring.is_none());
    }

    #[test]
    fn viewer_wins_ai_tackle_straight_back_in_reach() {
        let mut m = held_by_viewer();
        m.players[1].pos = m.players[CONTROLLED].pos + Vec2::new(25.0, 0.0);
        m.players[1].vel = Vec2::ZERO;
        let mut input = InputState::new();
        input.primary = true;
        let events = m.step(&input, &[]);
        assert!(events.contains(&MatchEvent::Tackle { by: 1, from: CONTROLLED }));
        assert!(events.contains(&MatchEvent::Tackle { by: CONTROLLED, from: 1 }));
        assert_eq!(m.holder, Some(CONTROLLED));
        assert!(m.tackle_ring.is_some());
        assert!(!events.iter().any(|e| matches!(e, MatchEvent::PossessionChanged(_))));
    }

    #[test]
    fn charging_viewer_cannot_be_tackled() {
        let mut m = held_by_viewer();
        m.players[1].pos = m.players[CONTROLLED].pos + Vec2::new(25.0, 0.0);
        m.charge = Some(3);
        let mut input = InputState::new();
        input.primary = true;
        m.step(&input, &[]);
        assert_eq!(m.holder, Some(CONTROLLED));
    }

    #[test]
    fn viewer_steals_from_ai_with_ring() {
        let mut m = Match::new(Tuning::default());
        m.holder = Some(2);
        m.players[2].pos = Vec2::new(1000.0, 500.0);
        m.players[CONTROLLED].pos = Vec2::new(1000.0 - 33.0, 500.0);
        m.players[1].pos = Vec2::new(200.0, 900.0);
        let mut input = InputState::new();
        input.primary = true;
        let events = m.step(&input, &[]);
        assert_eq!(m.holder, Some(CONTROLLED));
        assert_eq!(m.last_touch, Some(CONTROLLED));
        assert!(events.contains(&MatchEvent::Tackle { by: CONTROLLED, from: 2 }));
        let ring = m.tackle_ring.expect("ring");
        assert_eq!(ring.frames_left, 12);
    }

    #[test]
    fn stolen_ball_is_pinned_to_the_new_holder() {
        let mut m = held_by_viewer();
        m.tuning.player_tackle_reach = 0.5;
        m.players[1].pos = m.players[CONTROLLED].pos + Vec2::new(25.0, 0.0);
        m.players[1].vel = Vec2::ZERO;
        let mut input = InputState::new();
        input.primary = true;
        m.step(&input, &[]);
        assert_eq!(m.holder, Some(1));
        let ai = &m.players[1];
        assert!(approx(m.ball.pos, ai.pos + ai.facing_dir() * pitch::DRIBBLE_OFFSET));
        assert_eq!(m.ball.vel, Vec2::ZERO);
        assert_eq!((m.ball.z, m.ball.vz), (0.0, 0.0));
    }

    #[test]
    fn ai_chases_the_holder_not_the_ball() {
        let mut m = held_by_viewer();
        let viewer = m.players[CONTROLLED].pos;
        // Ball left far from the holder so the two targets disagree
        m.ball.pos = Vec2::new(1350.0, 900.0);
        let ai = m.players[1].pos;
        m.players[1].vel = Vec2::ZERO;
        m.step(&InputState::new(), &[]);
        let heading = m.players[1].vel.normalize();
        assert!(approx(heading, (viewer - ai).normalize()));
        assert!(heading.x < -0.9);
    }

    #[test]
    fn released_primary_blocks_ai_tackle() {
        let mut m = held_by_viewer();
        m.players[1].pos = m.players[CONTROLLED].pos + Vec2::new(25.0, 0.0);
        m.players[1].vel = Vec2::ZERO;
        let events = m.step(&InputState::new(), &[]);
        assert_eq!(m.holder, Some(CONTROLLED));
        assert!(!events.iter().any(|e| matches!(e, MatchEvent::Tackle { .. })));
    }

    #[test]
    fn released_primary_blocks_viewer_steal() {
        let mut m = Match::new(Tuning::default());
        m.holder = Some(2);
        m.players[2].pos = Vec2::new(1000.0, 500.0);
        m.players[CONTROLLED].pos = Vec2::new(1000.0 - 33.0, 500.0);
        m.players[1].pos = Vec2::new(200.0, 900.0);
        let events = m.step(&InputState::new(), &[]);
        assert_eq!(m.holder, Some(2));
        assert!(m.tackle_ring.is_none());
        assert!(!events.iter().any(|e| matches!(e, MatchEvent::Tackle { .. })));
    }

    #[test]
    fn single_holder_and_exact_dribble_every_step() {
        let mut m = held_by_viewer();
        let mut input = InputState::new();
        feed(&mut input, &[
            InputEvent::KeyDown { key_code: crate::input::keys::D },
            InputEvent::KeyDown { key_code: crate::input::keys::SHIFT },
        ]);
        for _ in 0..120 {
            m.step(&input, &[]);
            if m.phase != Phase::Playing {
                break;
            }
            if let Some(h) = m.holder {
                let p = &m.players[h];
                assert!(approx(m.ball.pos, p.pos + p.facing_dir() * pitch::DRIBBLE_OFFSET));
            }
            for p in &m.players {
                assert_eq!(p.pos, pitch::clamp_entity(p.pos));
            }
        }
    }

    #[test]
    fn goal_scores_once_and_resets_layout() {
        let mut m = Match::new(Tuning::default());
        m.viewer_name = String::from("Isagi");
        m.last_touch = Some(CONTROLLED);
        m.ball.pos = Vec2::new(1795.0, 500.0);
        m.ball.vel = Vec2::new(10.0, 0.0);
        m.players[CONTROLLED].pos = Vec2::new(1200.0, 200.0);
        let events = m.step(&InputState::new(), &[]);
        assert_eq!(m.score, Score { left: 1, right: 0 });
        assert!(events.contains(&MatchEvent::Goal { side: Side::Left, scorer: String::from("Isagi") }));
        assert_eq!(m.players[CONTROLLED].pos, pitch::PLAYER_START);
        assert_eq!(m.players[1].vel, Vec2::ZERO);
        assert_eq!(m.ball, Ball::new(pitch::BALL_START));
        assert_eq!(m.holder, None);
        assert_eq!(m.phase, Phase::Celebrating { frames_left: 60 });
        assert_eq!(m.banner.as_ref().map(|b| b.byline()), Some(String::from("By Isagi")));
    }

    #[test]
    fn ai_goal_is_credited_to_ai() {
        let mut m = Match::new(Tuning::default());
        m.last_touch = Some(1);
        m.ball.pos = Vec2::new(3.0, 480.0);
        m.ball.vel = Vec2::new(-10.0, 0.0);
        let events = m.step(&InputState::new(), &[]);
        assert_eq!(m.score, Score { left: 0, right: 1 });
        assert!(events.contains(&MatchEvent::Goal { side: Side::Right, scorer: String::from("AI") }));
    }

    #[test]
    fn no_goal_outside_the_mouth() {
        let mut m = Match::new(Tuning::default());
        m.ball.pos = Vec2::new(1795.0, 200.0);
        m.ball.vel = Vec2::new(10.0, 0.0);
        m.step(&InputState::new(), &[]);
        assert_eq!(m.score, Score::default());
        assert_eq!(m.phase, Phase::Playing);
    }

    #[test]
    fn celebration_freezes_then_resumes() {
        let mut m = Match::new(Tuning::default());
        m.phase = Phase::Celebrating { frames_left: 2 };
        m.banner = Some(GoalBanner { side: Side::Left, scorer: String::from("AI") });
        let mut input = InputState::new();
        feed(&mut input, &[InputEvent::KeyDown { key_code: crate::input::keys::D }]);
        m.step(&input, &[]);
        assert_eq!(m.players[CONTROLLED].pos, pitch::PLAYER_START);
        m.step(&input, &[]);
        assert_eq!(m.phase, Phase::Playing);
        assert!(m.banner.is_none());
        m.step(&input, &[]);
        assert!(m.players[CONTROLLED].pos.x > pitch::PLAYER_START.x);
    }

    #[test]
    fn fifth_goal_ends_the_match_for_good() {
        let mut m = Match::new(Tuning::default());
        m.score = Score { left: 4, right: 2 };
        m.ball.pos = Vec2::new(1799.0, 500.0);
        m.ball.vel = Vec2::new(10.0, 0.0);
        let events = m.step(&InputState::new(), &[]);
        assert_eq!(m.phase, Phase::Over);
        assert!(events.contains(&MatchEvent::GameOver { score: Score { left: 5, right: 2 } }));

        let mut input = InputState::new();
        feed(&mut input, &[InputEvent::KeyDown { key_code: crate::input::keys::D }]);
        let frozen = m.players[CONTROLLED].pos;
        for _ in 0..10 {
            assert!(m.step(&input, &[]).is_empty());
        }
        assert_eq!(m.players[CONTROLLED].pos, frozen);
        assert_eq!(m.score, Score { left: 5, right: 2 });
    }

    #[test]
    fn ring_fades_out() {
        let mut m = Match::new(Tuning::default());
        m.tackle_ring = Some(TackleRing::new(Vec2::ZERO, 2));
        m.step(&InputState::new(), &[]);
        assert_eq!(m.tackle_ring.map(|r| r.frames_left), Some(1));
        m.step(&InputState::new(), &[]);
        assert!(m.tackle_ring.is_none());
    }
}
