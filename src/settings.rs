//! Layout and gameplay settings
//!
//! Defaults reproduce the reference 800x600 layout. Settings are plain data;
//! the presentation layer decides where (if anywhere) they come from.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid layout: {0}")]
    Invalid(&'static str),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Clock face ===
    pub board_center: Vec2,
    pub board_radius: f32,
    // Radius-relative distances below are given for the reference
    // 180-unit clock and scaled by `layout_scale()` when read.
    /// Distance from the rim to the slot ring
    pub base_slot_inset: f32,
    pub base_tile_radius: f32,

    // === Tile spawning ===
    /// Distance band from the board center where tiles appear
    pub base_spawn_ring_min: f32,
    pub base_spawn_ring_max: f32,
    /// Accepted spawn rectangle (top-left, bottom-right)
    pub spawn_min: Vec2,
    pub spawn_max: Vec2,
    pub max_spawn_attempts: u32,

    // === Scoring ===
    pub score_award: u32,
    /// Correct placements per tower block
    pub tier_size: u32,

    // === Feedback timing ===
    pub message_ms: u32,
    pub victory_message_ms: u32,
    pub wiggle_steps: u32,
    pub wiggle_step_ms: u32,
    pub wiggle_amplitude_deg: f32,

    // === Audio ===
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            board_center: Vec2::new(BOARD_CENTER_X, BOARD_CENTER_Y),
            board_radius: BOARD_RADIUS,
            base_slot_inset: SLOT_INSET,
            base_tile_radius: TILE_RADIUS,

            base_spawn_ring_min: SPAWN_RING_MIN,
            base_spawn_ring_max: SPAWN_RING_MAX,
            spawn_min: Vec2::new(SPAWN_MIN_X, SPAWN_MIN_Y),
            spawn_max: Vec2::new(SPAWN_MAX_X, SPAWN_MAX_Y),
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,

            score_award: SCORE_AWARD,
            tier_size: TIER_SIZE,

            message_ms: MESSAGE_MS,
            victory_message_ms: VICTORY_MESSAGE_MS,
            wiggle_steps: WIGGLE_STEPS,
            wiggle_step_ms: WIGGLE_STEP_MS,
            wiggle_amplitude_deg: WIGGLE_AMPLITUDE_DEG,

            sound_enabled: true,
        }
    }
}

impl Settings {
    /// Reference layout with the clock resized; radius-relative distances
    /// (slot inset, tile size, spawn ring) scale along with it.
    pub fn with_board_radius(radius: f32) -> Self {
        let mut settings = Self::default();
        settings.set_board_radius(radius);
        settings
    }

    pub fn set_board_radius(&mut self, radius: f32) {
        self.board_radius = radius;
    }

    /// Board radius relative to the reference clock
    #[inline]
    pub fn layout_scale(&self) -> f32 {
        self.board_radius / BOARD_RADIUS
    }

    #[inline]
    pub fn slot_inset(&self) -> f32 {
        self.base_slot_inset * self.layout_scale()
    }

    #[inline]
    pub fn tile_radius(&self) -> f32 {
        self.base_tile_radius * self.layout_scale()
    }

    #[inline]
    pub fn spawn_ring_min(&self) -> f32 {
        self.base_spawn_ring_min * self.layout_scale()
    }

    #[inline]
    pub fn spawn_ring_max(&self) -> f32 {
        self.base_spawn_ring_max * self.layout_scale()
    }

    /// Radius of the ring the hour slots sit on
    #[inline]
    pub fn slot_ring_radius(&self) -> f32 {
        self.board_radius - self.slot_inset()
    }

    /// Max drop distance from a slot center that still counts as correct.
    /// 30 units at the reference radius, proportional to tile size.
    #[inline]
    pub fn placement_threshold(&self) -> f32 {
        PLACEMENT_THRESHOLD * self.tile_radius() / TILE_RADIUS
    }

    /// Distance from the board center to the nearest and farthest points
    /// of the spawn rectangle
    fn spawn_rect_reach(&self) -> (f32, f32) {
        let c = self.board_center;
        let nearest = c.clamp(self.spawn_min, self.spawn_max).distance(c);
        let far = Vec2::new(
            (c.x - self.spawn_min.x).abs().max((self.spawn_max.x - c.x).abs()),
            (c.y - self.spawn_min.y).abs().max((self.spawn_max.y - c.y).abs()),
        );
        (nearest, far.length())
    }

    /// Whether a point lies strictly inside the spawn rectangle
    #[inline]
    pub fn in_spawn_bounds(&self, pos: Vec2) -> bool {
        pos.x > self.spawn_min.x
            && pos.x < self.spawn_max.x
            && pos.y > self.spawn_min.y
            && pos.y < self.spawn_max.y
    }

    /// Reject layouts the game cannot be played on
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.board_radius > 0.0) {
            return Err(SettingsError::Invalid("board radius must be positive"));
        }
        if !(self.slot_inset() >= 0.0 && self.slot_inset() < self.board_radius) {
            return Err(SettingsError::Invalid("slot inset must lie inside the board"));
        }
        if !(self.tile_radius() > 0.0) {
            return Err(SettingsError::Invalid("tile radius must be positive"));
        }
        if !(self.spawn_ring_min() <= self.spawn_ring_max()) {
            return Err(SettingsError::Invalid("spawn ring bounds are inverted"));
        }
        if self.spawn_ring_min() < self.board_radius + self.tile_radius() {
            return Err(SettingsError::Invalid("spawn ring overlaps the clock face"));
        }
        if !(self.spawn_min.x < self.spawn_max.x && self.spawn_min.y < self.spawn_max.y) {
            return Err(SettingsError::Invalid("spawn rectangle is empty"));
        }
        let (nearest, farthest) = self.spawn_rect_reach();
        if nearest > self.spawn_ring_max() || farthest < self.spawn_ring_min() {
            return Err(SettingsError::Invalid("spawn ring misses the spawn rectangle"));
        }
        if self.tier_size == 0 {
            return Err(SettingsError::Invalid("tier size must be at least 1"));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::debug!("Loaded settings (board radius {})", settings.board_radius);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_layout() {
        let s = Settings::default();
        assert!(s.validate().is_ok());
        assert_eq!(s.slot_ring_radius(), 140.0);
        assert_eq!(s.placement_threshold(), 30.0);
        assert!(s.sound_enabled);
    }

    #[test]
    fn test_threshold_scales_with_radius() {
        let s = Settings::with_board_radius(360.0);
        assert!((s.placement_threshold() - 60.0).abs() < 1e-4);
        assert!((s.slot_ring_radius() - 280.0).abs() < 1e-4);
        assert!((s.spawn_ring_max() - 520.0).abs() < 1e-3);
    }

    #[test]
    fn test_radius_from_json_scales_layout() {
        let s = Settings::from_json(
            r#"{
                "canvas_width": 1200.0,
                "canvas_height": 1200.0,
                "board_radius": 360.0,
                "board_center": [600.0, 600.0],
                "spawn_min": [20.0, 20.0],
                "spawn_max": [1180.0, 1180.0]
            }"#,
        )
        .unwrap();
        assert!((s.placement_threshold() - 60.0).abs() < 1e-4);
        assert!((s.slot_ring_radius() - 280.0).abs() < 1e-4);
        assert!((s.spawn_ring_min() - 440.0).abs() < 1e-3);
        assert!((s.spawn_ring_max() - 520.0).abs() < 1e-3);
        assert!((s.tile_radius() - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_rejects_spawn_ring_on_clock_face() {
        let err = Settings::from_json(r#"{ "base_spawn_ring_min": 150.0 }"#);
        assert!(matches!(err, Err(SettingsError::Invalid(_))));

        // A 360 clock does not leave room for tiles on the 800x600 canvas
        let err = Settings::from_json(r#"{ "board_radius": 360.0 }"#);
        assert!(matches!(err, Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "sound_enabled": false, "tier_size": 6 }"#).unwrap();
        assert!(!s.sound_enabled);
        assert_eq!(s.tier_size, 6);
        assert_eq!(s.board_radius, BOARD_RADIUS);
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings::with_board_radius(200.0);
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn test_rejects_impossible_layout() {
        let err = Settings::from_json(r#"{ "base_slot_inset": 200.0 }"#);
        assert!(matches!(err, Err(SettingsError::Invalid(_))));

        let err = Settings::from_json(r#"{ "tier_size": 0 }"#);
        assert!(matches!(err, Err(SettingsError::Invalid(_))));

        let err = Settings::from_json("{ not json");
        assert!(matches!(err, Err(SettingsError::Json(_))));
    }

    #[test]
    fn test_spawn_bounds_are_exclusive() {
        let s = Settings::default();
        assert!(s.in_spawn_bounds(Vec2::new(300.0, 300.0)));
        assert!(!s.in_spawn_bounds(Vec2::new(30.0, 300.0)));
        assert!(!s.in_spawn_bounds(Vec2::new(300.0, 480.0)));
        assert!(!s.in_spawn_bounds(Vec2::new(600.0, 300.0)));
    }
}
