//! Hour Tower - A clock-learning drag-and-drop game
//!
//! Core modules:
//! - `sim`: Deterministic game core (board, tiles, tower, placement, session)
//! - `feedback`: Timed messages and hand-wiggle animation handles
//! - `sound`: Sound effect switch for the presentation layer
//! - `settings`: Layout and gameplay configuration
//! - `palette`: Neon display colors

pub mod feedback;
pub mod palette;
pub mod settings;
pub mod sim;
pub mod sound;

pub use palette::Color;
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Reference layout constants (800x600 canvas)
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Clock face
    pub const BOARD_CENTER_X: f32 = 325.0;
    pub const BOARD_CENTER_Y: f32 = 325.0;
    pub const BOARD_RADIUS: f32 = 180.0;
    /// Slots sit this far inside the clock rim
    pub const SLOT_INSET: f32 = 40.0;
    pub const NUM_SLOTS: usize = 12;
    /// Degrees between adjacent hour slots
    pub const SLOT_STEP_DEG: f32 = 30.0;

    /// Draggable tile radius
    pub const TILE_RADIUS: f32 = 25.0;
    /// Drop distance accepted at the reference board radius
    pub const PLACEMENT_THRESHOLD: f32 = 30.0;

    /// Spawn ring around the clock (reference radius)
    pub const SPAWN_RING_MIN: f32 = 220.0;
    pub const SPAWN_RING_MAX: f32 = 260.0;
    /// Spawn rectangle, keeps tiles clear of the tower and buttons
    pub const SPAWN_MIN_X: f32 = 30.0;
    pub const SPAWN_MAX_X: f32 = 570.0;
    pub const SPAWN_MIN_Y: f32 = 80.0;
    pub const SPAWN_MAX_Y: f32 = 480.0;
    pub const MAX_SPAWN_ATTEMPTS: u32 = 1000;

    /// Points per correct placement
    pub const SCORE_AWARD: u32 = 10;
    /// Correct placements per tower block
    pub const TIER_SIZE: u32 = 12;

    /// Tower area
    pub const TOWER_HEIGHT: f32 = 450.0;
    pub const TOWER_BLOCK_PITCH: f32 = 40.0;
    /// Space kept free for the tower title and progress bar
    pub const TOWER_HEADER: f32 = 120.0;

    /// Message durations (ms)
    pub const MESSAGE_MS: u32 = 2000;
    pub const VICTORY_MESSAGE_MS: u32 = 3000;

    /// Hand wiggle animation
    pub const WIGGLE_STEPS: u32 = 6;
    pub const WIGGLE_STEP_MS: u32 = 100;
    pub const WIGGLE_AMPLITUDE_DEG: f32 = 5.0;
}

/// Convert polar (r, theta) around `center` to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(center: Vec2, r: f32, theta: f32) -> Vec2 {
    center + Vec2::new(r * theta.cos(), r * theta.sin())
}
