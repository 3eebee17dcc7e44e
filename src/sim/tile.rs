//! Draggable hour tiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::palette::Color;

/// A numbered tile the player drags onto the clock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Hour on the tile (1..=12), unique among active tiles
    pub number: u8,
    pub pos: Vec2,
    /// Spawn position, where a wrong drop bounces back to
    pub home: Vec2,
    pub color: Color,
    pub dragging: bool,
    /// Pointer position relative to the tile center while dragging
    #[serde(skip)]
    pub drag_offset: Vec2,
}

impl Tile {
    pub fn new(number: u8, pos: Vec2, color: Color) -> Self {
        Self {
            number,
            pos,
            home: pos,
            color,
            dragging: false,
            drag_offset: Vec2::ZERO,
        }
    }

    /// Grab the tile at `pointer`, keeping the grab point under the cursor
    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.dragging = true;
        self.drag_offset = pointer - self.pos;
    }

    /// Follow the pointer. Returns false if the tile is not being dragged.
    pub fn drag_to(&mut self, pointer: Vec2) -> bool {
        if !self.dragging {
            return false;
        }
        self.pos = pointer - self.drag_offset;
        true
    }

    pub fn move_to(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.drag_offset = Vec2::ZERO;
    }

    /// Return to the spawn position
    pub fn snap_back(&mut self) {
        self.pos = self.home;
    }

    /// Whether `point` is on the tile face
    pub fn hit_test(&self, point: Vec2, radius: f32) -> bool {
        self.pos.distance_squared(point) <= radius * radius
    }
}
