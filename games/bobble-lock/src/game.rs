use bobble_engine::api::game::GameConfig;
use bobble_engine::input::queue::{InputQueue, ViewportMap};
use bobble_engine::{EngineContext, Game, GameEvent, RenderContext};

use crate::identity::Identity;
use crate::input::InputState;
use crate::pitch::{FIELD_H, FIELD_W};
use crate::render;
use crate::sim::{Match, MatchEvent, Phase};
use crate::tuning::Tuning;

/// Game event kinds to the host HUD
pub mod game_events {
    /// `a = left`, `b = right`
    pub const SCORE: f32 = 1.0;
    /// `a = scoring side index`, `b = celebration frames`
    pub const GOAL: f32 = 2.0;
    /// `a = left`, `b = right`
    pub const GAME_OVER: f32 = 3.0;
    /// `a = holder index, or -1 for a loose ball`
    pub const POSSESSION: f32 = 4.0;
}

/// Sound cues, indexed by the host's audio table
pub mod sounds {
    use bobble_engine::SoundEvent;

    pub const GOAL: SoundEvent = SoundEvent(1);
}

pub struct BobbleLock {
    state: Match,
    input: InputState,
    identity: Option<Identity>,
}

impl BobbleLock {
    pub fn new() -> Self {
        Self {
            state: Match::new(Tuning::default()),
            input: InputState::new(),
            identity: None,
        }
    }

    pub fn state(&self) -> &Match {
        &self.state
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// The viewer's name is what goal banners credit.
    pub fn set_identity(&mut self, identity: Identity) {
        log::info!("playing as {}", identity.username);
        self.state.viewer_name = identity.username.clone();
        self.identity = Some(identity);
    }

    /// Swap gameplay tuning mid-match. Score and phase carry over.
    pub fn load_tuning(&mut self, json: &str) -> Result<(), serde_json::Error> {
        self.state.tuning = Tuning::from_json(json)?;
        log::info!("tuning reloaded");
        Ok(())
    }

    pub fn set_viewport(&mut self, viewport: Option<ViewportMap>) {
        self.input.set_viewport(viewport);
    }

    /// Text for the host's banner overlay; empty while nothing is shown.
    pub fn banner_text(&self) -> String {
        match (&self.state.phase, &self.state.banner) {
            (Phase::Over, _) => format!("Final score {} - {}", self.state.score.left, self.state.score.right),
            (Phase::Celebrating { .. }, Some(banner)) => format!("GOAL {}", banner.byline()),
            _ => String::new(),
        }
    }

    fn forward(&self, ctx: &mut EngineContext, event: MatchEvent) {
        match event {
            MatchEvent::Goal { side, .. } => {
                ctx.emit_sound(sounds::GOAL);
                let score = self.state.score;
                ctx.emit_event(GameEvent::pair(game_events::SCORE, score.left as f32, score.right as f32));
                let frames = match self.state.phase {
                    Phase::Celebrating { frames_left } => frames_left,
                    _ => 0,
                };
                ctx.emit_event(GameEvent::pair(game_events::GOAL, side.index() as f32, frames as f32));
            }
            MatchEvent::GameOver { score } => {
                ctx.emit_event(GameEvent::pair(game_events::GAME_OVER, score.left as f32, score.right as f32));
            }
            MatchEvent::PossessionChanged(holder) => {
                let a = holder.map(|h| h as f32).unwrap_or(-1.0);
                ctx.emit_event(GameEvent::pair(game_events::POSSESSION, a, 0.0));
            }
            MatchEvent::Tackle { by, from } => {
                log::debug!("tackle by {} on {}", by, from);
            }
        }
    }
}

impl Default for BobbleLock {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for BobbleLock {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: 1.0 / 60.0,
            world_width: FIELD_W,
            world_height: FIELD_H,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.emit_event(GameEvent::pair(game_events::SCORE, 0.0, 0.0));
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        if self.state.is_over() {
            return;
        }
        let edges = self.input.apply(input);
        for event in self.state.step(&self.input, &edges) {
            self.forward(ctx, event);
        }
    }

    fn render(&self, ctx: &mut RenderContext) {
        render::draw(&self.state, self.input.pointer, ctx.vectors);
    }
}
