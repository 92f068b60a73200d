//! Folds queued host events into a per-step input snapshot.

use std::collections::HashSet;

use glam::Vec2;
use bobble_engine::{InputEvent, InputQueue, PointerButton, ViewportMap};

/// DOM key codes the game listens to.
pub mod keys {
    pub const SHIFT: u32 = 16;
    pub const SPACE: u32 = 32;
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const DOWN: u32 = 40;
    pub const A: u32 = 65;
    pub const D: u32 = 68;
    pub const S: u32 = 83;
    pub const W: u32 = 87;
}

/// A button transition, replayed in arrival order before the step simulates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    PrimaryDown,
    /// Primary released; carries the pointer position at release time.
    PrimaryUp { at: Vec2 },
    /// Secondary pressed; carries the pointer position at press time.
    SecondaryDown { at: Vec2 },
    SecondaryUp,
    Kick,
}

/// Held-state snapshot. Last writer wins for everything it tracks.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held_keys: HashSet<u32>,
    pub pointer: Vec2,
    pub primary: bool,
    pub secondary: bool,
    /// When set, pointer events carry client coordinates and are mapped.
    viewport: Option<ViewportMap>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_viewport(&mut self, viewport: Option<ViewportMap>) {
        self.viewport = viewport;
    }

    fn map(&self, x: f32, y: f32) -> Vec2 {
        let p = Vec2::new(x, y);
        match &self.viewport {
            Some(v) => v.to_logical(p),
            None => p,
        }
    }

    /// Apply this step's events and return the button transitions among them.
    pub fn apply(&mut self, queue: &InputQueue) -> Vec<Edge> {
        let mut edges = Vec::new();
        for event in queue.iter() {
            match *event {
                InputEvent::PointerMove { x, y } => {
                    self.pointer = self.map(x, y);
                }
                InputEvent::PointerDown { x, y, button } => {
                    self.pointer = self.map(x, y);
                    match button {
                        PointerButton::Primary => {
                            self.primary = true;
                            edges.push(Edge::PrimaryDown);
                        }
                        PointerButton::Secondary => {
                            self.secondary = true;
                            edges.push(Edge::SecondaryDown { at: self.pointer });
                        }
                        PointerButton::Auxiliary => {}
                    }
                }
                InputEvent::PointerUp { x, y, button } => {
                    self.pointer = self.map(x, y);
                    match button {
                        PointerButton::Primary => {
                            self.primary = false;
                            edges.push(Edge::PrimaryUp { at: self.pointer });
                        }
                        PointerButton::Secondary => {
                            self.secondary = false;
                            edges.push(Edge::SecondaryUp);
                        }
                        PointerButton::Auxiliary => {}
                    }
                }
                InputEvent::KeyDown { key_code } => {
                    self.held_keys.insert(key_code);
                    if key_code == keys::SPACE {
                        edges.push(Edge::Kick);
                    }
                }
                InputEvent::KeyUp { key_code } => {
                    self.held_keys.remove(&key_code);
                }
                InputEvent::Custom { kind, .. } => {
                    log::debug!("unhandled custom event {}", kind);
                }
            }
        }
        edges
    }

    pub fn is_held(&self, key_code: u32) -> bool {
        self.held_keys.contains(&key_code)
    }

    pub fn running(&self) -> bool {
        self.is_held(keys::SHIFT)
    }

    /// Unit movement direction from WASD and arrows, `ZERO` when idle or cancelled out.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.is_held(keys::W) || self.is_held(keys::UP) {
            dir.y -= 1.0;
        }
        if self.is_held(keys::S) || self.is_held(keys::DOWN) {
            dir.y += 1.0;
        }
        if self.is_held(keys::A) || self.is_held(keys::LEFT) {
            dir.x -= 1.0;
        }
        if self.is_held(keys::D) || self.is_held(keys::RIGHT) {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }
}
