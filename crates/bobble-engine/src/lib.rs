pub mod api;
pub mod core;
pub mod systems;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{SoundEvent, GameEvent};
pub use core::rng::Rng;
pub use core::time::FixedTimestep;
pub use input::queue::{InputEvent, InputQueue, PointerButton, ViewportMap};
pub use bridge::protocol::ProtocolLayout;

#[cfg(feature = "vectors")]
pub use systems::vector::{VectorState, VectorVertex, VectorColor};
#[cfg(feature = "vectors")]
pub use systems::text::{TextStyle, draw_text, draw_text_centered};
