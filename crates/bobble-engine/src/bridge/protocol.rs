//! SharedArrayBuffer layout.
//! Must stay in sync with the host's `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Vectors: max_vector_vertices × 6 floats]
//! [Sounds: max_sounds × 1 float]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Capacities are written once into the header at init.
//! The host reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_WORLD_WIDTH: usize = 3;
pub const HEADER_WORLD_HEIGHT: usize = 4;
pub const HEADER_MAX_VECTOR_VERTICES: usize = 5;
pub const HEADER_VECTOR_VERTEX_COUNT: usize = 6;
pub const HEADER_MAX_SOUNDS: usize = 7;
pub const HEADER_SOUND_COUNT: usize = 8;
pub const HEADER_MAX_EVENTS: usize = 9;
pub const HEADER_EVENT_COUNT: usize = 10;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 2.0;

/// Floats per vector vertex: x, y, r, g, b, a. Fixed wire format.
pub const VECTOR_VERTEX_FLOATS: usize = 6;

/// Floats per game event: kind, a, b, c. Fixed wire format.
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_vector_vertices: usize,
    pub max_sounds: usize,
    pub max_events: usize,

    pub vector_data_floats: usize,
    pub sound_data_floats: usize,
    pub event_data_floats: usize,

    /// Offset (in floats) where vector data begins.
    pub vector_data_offset: usize,
    /// Offset (in floats) where sound data begins.
    pub sound_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_vector_vertices: usize, max_sounds: usize, max_events: usize) -> Self {
        let vector_data_floats = max_vector_vertices * VECTOR_VERTEX_FLOATS;
        let sound_data_floats = max_sounds;
        let event_data_floats = max_events * EVENT_FLOATS;

        let vector_data_offset = HEADER_FLOATS;
        let sound_data_offset = vector_data_offset + vector_data_floats;
        let event_data_offset = sound_data_offset + sound_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_vector_vertices,
            max_sounds,
            max_events,
            vector_data_floats,
            sound_data_floats,
            event_data_floats,
            vector_data_offset,
            sound_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_vector_vertices, config.max_sounds, config.max_events)
    }

    /// Fill a header block for the given frame. Counts are clamped to capacity.
    pub fn header(
        &self,
        config: &GameConfig,
        frame: u64,
        vector_vertices: usize,
        sounds: usize,
        events: usize,
    ) -> [f32; HEADER_FLOATS] {
        let mut h = [0.0; HEADER_FLOATS];
        h[HEADER_FRAME_COUNTER] = frame as f32;
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        h[HEADER_WORLD_WIDTH] = config.world_width;
        h[HEADER_WORLD_HEIGHT] = config.world_height;
        h[HEADER_MAX_VECTOR_VERTICES] = self.max_vector_vertices as f32;
        h[HEADER_VECTOR_VERTEX_COUNT] = vector_vertices.min(self.max_vector_vertices) as f32;
        h[HEADER_MAX_SOUNDS] = self.max_sounds as f32;
        h[HEADER_SOUND_COUNT] = sounds.min(self.max_sounds) as f32;
        h[HEADER_MAX_EVENTS] = self.max_events as f32;
        h[HEADER_EVENT_COUNT] = events.min(self.max_events) as f32;
        h
    }
}
