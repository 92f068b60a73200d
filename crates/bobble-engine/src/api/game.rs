use crate::api::types::{GameEvent, SoundEvent};
use crate::input::queue::InputQueue;
#[cfg(feature = "vectors")]
use crate::systems::vector::VectorState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60, one step per refresh on a 60 Hz display).
    pub fixed_dt: f32,
    /// Logical surface width in game units.
    pub world_width: f32,
    /// Logical surface height in game units.
    pub world_height: f32,
    /// Maximum number of tessellated vector vertices per frame (default: 65536).
    pub max_vector_vertices: usize,
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_vector_vertices: 65536,
            max_sounds: 32,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state and announce it to the host.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed simulation step. Read input, advance state, emit sounds and events.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Read-only render pass. Runs once per frame after all due steps.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable per-frame output, passed to Game::init and Game::update.
pub struct EngineContext {
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    frame: u64,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            sounds: Vec::new(),
            events: Vec::new(),
            frame: 0,
        }
    }

    /// Emit a sound event to be forwarded to the host.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Number of fixed steps run since init.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance the step counter. Called by the runner after each `Game::update`.
    pub fn advance_frame(&mut self) {
        self.frame += 1;
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context handed to `Game::render`.
pub struct RenderContext<'a> {
    #[cfg(feature = "vectors")]
    pub vectors: &'a mut VectorState,
    /// Logical surface size, for games that lay out relative to it.
    pub world: (f32, f32),
    #[cfg(not(feature = "vectors"))]
    _marker: std::marker::PhantomData<&'a ()>,
}

impl<'a> RenderContext<'a> {
    #[cfg(feature = "vectors")]
    pub fn new(vectors: &'a mut VectorState, world: (f32, f32)) -> Self {
        Self { vectors, world }
    }

    #[cfg(not(feature = "vectors"))]
    pub fn new(world: (f32, f32)) -> Self {
        Self {
            world,
            _marker: std::marker::PhantomData,
        }
    }
}
