//! Outbound notifications and placement outcomes
//!
//! The session queues events as it mutates; the presentation layer drains
//! them once per input turn and redraws accordingly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::validator::PlacementError;
use crate::palette::Color;
use crate::sound::SoundEffect;

/// Result of dropping a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementResult {
    Correct,
    /// Off target; the model is untouched
    Incorrect,
    Rejected(PlacementError),
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Tiles left to place
    InProgress,
    /// Every tile placed; drags are no longer accepted
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    TileCreated { number: u8, pos: Vec2, color: Color },
    TileRemoved { number: u8 },
    TileMoved { number: u8, pos: Vec2 },
    SlotOccupied { number: u8, pos: Vec2 },
    ScoreChanged { score: u32 },
    TierProgress { count: u32, tier_size: u32 },
    /// A tower block was added
    TierComplete { tiers_built: u32 },
    GameComplete { score: u32 },
    /// Wrong drop: bounce the tile toward `home` and wiggle the hands
    PlacementIncorrect { number: u8, home: Vec2 },
    PlacementRejected { number: u8, reason: PlacementError },
    SoundToggled { enabled: bool },
    PlaySound(SoundEffect),
    /// Tower cleared by a full reset; a `BoardCleared` follows
    GameReset,
    /// Every slot emptied ahead of a new deal
    BoardCleared,
}
