use wasm_bindgen::prelude::*;
use bobble_engine::{Rng, ViewportMap};
use glam::Vec2;

pub mod game;
pub mod identity;
pub mod input;
pub mod lobby;
pub mod pitch;
pub mod render;
pub mod sim;
pub mod tuning;

use game::BobbleLock;
use identity::Identity;
use lobby::{LobbyRegistry, SessionId};

bobble_web::export_game!(BobbleLock, "bobble-lock", vectors);

/// Hand over the Discord user payload, or nothing when auth failed.
#[wasm_bindgen]
pub fn game_set_identity(discord_user_json: Option<String>) {
    let mut rng = Rng::from_unit(js_sys::Math::random());
    let identity = Identity::resolve(discord_user_json.as_deref(), &mut rng);
    with_runner(|r| r.game_mut().set_identity(identity));
}

/// The resolved identity as `{id, username, avatar}` JSON.
#[wasm_bindgen]
pub fn game_identity() -> Option<String> {
    with_runner(|r| {
        r.game()
            .identity()
            .and_then(|id| serde_json::to_string(id).ok())
    })
}

#[wasm_bindgen]
pub fn game_load_tuning(json: &str) -> Result<(), JsValue> {
    with_runner(|r| r.game_mut().load_tuning(json)).map_err(|err| {
        log::warn!("rejected tuning: {}", err);
        JsValue::from_str(&err.to_string())
    })
}

#[wasm_bindgen]
pub fn goal_banner() -> String {
    with_runner(|r| r.game().banner_text())
}

/// Canvas client rect, so pointer events can be sent in client coordinates.
/// A zero-sized rect switches mapping off.
#[wasm_bindgen]
pub fn game_set_viewport(left: f32, top: f32, width: f32, height: f32) {
    let viewport = (width > 0.0 && height > 0.0).then(|| {
        ViewportMap::new(
            Vec2::new(left, top),
            Vec2::new(width, height),
            Vec2::new(pitch::FIELD_W, pitch::FIELD_H),
        )
    });
    with_runner(|r| r.game_mut().set_viewport(viewport));
}

// ---- Local lobby ----

thread_local! {
    static LOBBY: RefCell<LobbyRegistry> = RefCell::new(LobbyRegistry::new());
}

#[wasm_bindgen]
pub fn lobby_connect() -> u32 {
    LOBBY.with(|cell| cell.borrow_mut().connect().0)
}

/// Run one JSON command. Returns the broadcast to relay, if any.
#[wasm_bindgen]
pub fn lobby_command(session: u32, json: &str) -> Result<Option<String>, JsValue> {
    let result = LOBBY.with(|cell| cell.borrow_mut().handle_json(SessionId(session), json));
    match result {
        Ok(Some(broadcast)) => serde_json::to_string(&broadcast)
            .map(Some)
            .map_err(|err| JsValue::from_str(&err.to_string())),
        Ok(None) => Ok(None),
        Err(err) => {
            log::warn!("lobby command rejected: {}", err);
            Err(JsValue::from_str(&err.to_string()))
        }
    }
}

#[wasm_bindgen]
pub fn lobby_leave(session: u32) -> Option<String> {
    LOBBY
        .with(|cell| cell.borrow_mut().leave(SessionId(session)))
        .and_then(|broadcast| serde_json::to_string(&broadcast).ok())
}
