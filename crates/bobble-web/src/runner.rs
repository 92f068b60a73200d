use bobble_engine::bridge::protocol::HEADER_FLOATS;
use bobble_engine::{
    Game, GameConfig, EngineContext, RenderContext,
    InputEvent, InputQueue, FixedTimestep, ProtocolLayout,
};
#[cfg(feature = "vectors")]
use bobble_engine::VectorState;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner through
/// `export_game!` and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    #[cfg(feature = "vectors")]
    vectors: VectorState,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    /// Flat buffer of sound event IDs for SharedArrayBuffer reads.
    sound_buffer: Vec<u8>,
    header: [f32; HEADER_FLOATS],
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let sound_buffer = Vec::with_capacity(config.max_sounds);

        Self {
            game,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            #[cfg(feature = "vectors")]
            vectors: VectorState::with_capacity(config.max_vector_vertices),
            timestep,
            layout,
            config,
            initialized: false,
            sound_buffer,
            header: [0.0; HEADER_FLOATS],
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.timestep = FixedTimestep::new(self.config.fixed_dt);
        self.ctx.clear_frame_data();
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.pack_frame(0);
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: step the game as often as the timestep allows,
    /// then render once.
    ///
    /// Events from the host are delivered to the first due step only.
    /// When no step is due they stay queued for the next tick.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Init-time sounds/events survive until the first tick reads them out
        if self.ctx.frame() > 0 {
            self.ctx.clear_frame_data();
        }

        let steps = self.timestep.accumulate(dt);
        if steps == 0 {
            self.render();
            return;
        }
        if self.ctx.frame() == 0 {
            self.ctx.clear_frame_data();
        }

        let pending = self.input.take();
        let empty = InputQueue::new();
        for step in 0..steps {
            let input = if step == 0 { &pending } else { &empty };
            self.game.update(&mut self.ctx, input);
            self.ctx.advance_frame();
        }

        self.render();
    }

    fn render(&mut self) {
        #[cfg(feature = "vectors")]
        {
            self.vectors.clear();
            let mut render_ctx = RenderContext::new(
                &mut self.vectors,
                (self.config.world_width, self.config.world_height),
            );
            self.game.render(&mut render_ctx);
            if self.vectors.dropped() > 0 {
                log::debug!("vector buffer full, {} shapes dropped", self.vectors.dropped());
            }
        }
        #[cfg(not(feature = "vectors"))]
        {
            let mut render_ctx = RenderContext::new((self.config.world_width, self.config.world_height));
            self.game.render(&mut render_ctx);
        }

        let frame = self.ctx.frame();
        self.pack_frame(frame);
    }

    /// Pack sound ids and refresh the header block.
    fn pack_frame(&mut self, frame: u64) {
        self.sound_buffer.clear();
        for sound in &self.ctx.sounds {
            if self.sound_buffer.len() == self.config.max_sounds {
                break;
            }
            match u8::try_from(sound.0) {
                Ok(id) => self.sound_buffer.push(id),
                Err(_) => log::warn!("sound id {} does not fit the byte buffer, skipped", sound.0),
            }
        }
        self.header = self.layout.header(
            &self.config,
            frame,
            self.vector_vertex_count() as usize,
            self.sound_buffer.len(),
            self.ctx.events.len(),
        );
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len().min(self.config.max_events) as u32
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.vectors.buffer_ptr()
    }

    pub fn vector_vertex_count(&self) -> u32 {
        #[cfg(feature = "vectors")]
        {
            self.vectors.vertex_count() as u32
        }
        #[cfg(not(feature = "vectors"))]
        {
            0
        }
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn frame(&self) -> u64 {
        self.ctx.frame()
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_vector_vertices(&self) -> u32 {
        self.layout.max_vector_vertices as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.layout.max_sounds as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
