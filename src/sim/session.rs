//! Game session: owns tiles, board, tower and score
//!
//! All mutation happens through the methods here, one input turn at a time.
//! Only one tile can be held by the pointer at once.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::board::Board;
use super::events::{GameEvent, GamePhase, PlacementResult};
use super::tile::Tile;
use super::tower::{TierEvent, Tower};
use super::validator::{PlacementError, Verdict, check_placement};
use crate::consts::NUM_SLOTS;
use crate::palette;
use crate::polar_to_cartesian;
use crate::settings::{Settings, SettingsError};
use crate::sound::{SoundEffect, SoundEffects};

/// Spawn grid used when random sampling keeps missing the spawn rectangle.
/// Cells over the clock face are skipped.
const FALLBACK_COLS: usize = 6;
const FALLBACK_ROWS: usize = 5;
/// Coarse grid for layouts where every fine cell touches the face
const COARSE_COLS: usize = 4;
const COARSE_ROWS: usize = 3;

pub struct GameSession {
    settings: Settings,
    board: Board,
    /// Active tiles, sorted by number
    tiles: Vec<Tile>,
    tower: Tower,
    score: u32,
    phase: GamePhase,
    /// Number of the tile currently held by the pointer
    held: Option<u8>,
    sound: SoundEffects,
    seed: u64,
    /// Games dealt since construction
    deals: u32,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session and deal the first game
    pub fn new(settings: Settings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        let mut session = Self {
            board: Board::from_settings(&settings),
            tiles: Vec::with_capacity(NUM_SLOTS),
            tower: Tower::new(settings.tier_size),
            score: 0,
            phase: GamePhase::InProgress,
            held: None,
            sound: SoundEffects::new(settings.sound_enabled),
            seed,
            deals: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            settings,
        };
        session.start_new_game();
        Ok(session)
    }

    /// Deal 12 fresh tiles onto an empty clock. The tower is kept, so
    /// consecutive games keep stacking blocks; use `reset_game` to clear it.
    pub fn start_new_game(&mut self) {
        for tile in self.tiles.drain(..) {
            self.events.push(GameEvent::TileRemoved {
                number: tile.number,
            });
        }
        self.held = None;
        self.board.reset();
        self.events.push(GameEvent::BoardCleared);
        self.score = 0;
        self.phase = GamePhase::InProgress;

        for i in 0..NUM_SLOTS {
            let number = i as u8 + 1;
            let pos = self.spawn_position(i);
            let tile = Tile::new(number, pos, palette::color_by_index(i));
            self.events.push(GameEvent::TileCreated {
                number,
                pos,
                color: tile.color,
            });
            self.tiles.push(tile);
        }
        self.events.push(GameEvent::ScoreChanged { score: 0 });
        self.deals += 1;
        if self.deals == 1 {
            log::info!("Deal 1 ready (seed {})", self.seed);
        } else {
            log::info!("Deal {} ready", self.deals);
        }
    }

    /// Back to a freshly constructed session: empty board, empty tower,
    /// zero score, 12 new tiles
    pub fn reset_game(&mut self) {
        self.tower.reset();
        self.events.push(GameEvent::GameReset);
        self.start_new_game();
    }

    /// Drop tile `number` at `pos`
    pub fn attempt_placement(&mut self, number: u8, pos: Vec2) -> PlacementResult {
        let verdict = match self.tile_index(number) {
            Some(_) => check_placement(&self.board, number, pos),
            None if self.board.is_occupied(number) => {
                Verdict::NotPlaceable(PlacementError::SlotAlreadyOccupied(number))
            }
            None => Verdict::NotPlaceable(PlacementError::InvalidNumber(number)),
        };

        match verdict {
            Verdict::Correct => {
                self.place(number);
                PlacementResult::Correct
            }
            Verdict::WrongLocation => {
                log::debug!("Tile {} dropped off target at {:?}", number, pos);
                let home = self.tile(number).map_or(pos, |t| t.home);
                self.events
                    .push(GameEvent::PlacementIncorrect { number, home });
                self.play(SoundEffect::Error);
                PlacementResult::Incorrect
            }
            Verdict::NotPlaceable(reason) => {
                log::debug!("Tile {} rejected: {}", number, reason);
                self.events
                    .push(GameEvent::PlacementRejected { number, reason });
                PlacementResult::Rejected(reason)
            }
        }
    }

    /// Commit a validated placement
    fn place(&mut self, number: u8) {
        let Some(index) = self.tile_index(number) else {
            return;
        };
        if let Err(e) = self.board.occupy(number) {
            // check_placement saw the slot free this turn
            log::warn!("Slot for {} changed under placement: {}", number, e);
            return;
        }
        self.tiles.remove(index);
        if self.held == Some(number) {
            self.held = None;
        }
        let slot_pos = self.board.find_slot(number).map_or(Vec2::ZERO, |s| s.pos);
        self.events.push(GameEvent::TileRemoved { number });
        self.events.push(GameEvent::SlotOccupied {
            number,
            pos: slot_pos,
        });

        self.score += self.settings.score_award;
        self.events.push(GameEvent::ScoreChanged { score: self.score });

        match self.tower.record_success() {
            TierEvent::Progress { count } => self.events.push(GameEvent::TierProgress {
                count,
                tier_size: self.tower.tier_size,
            }),
            TierEvent::Complete { tiers_built } => {
                log::info!("Tower block {} built", tiers_built);
                self.events.push(GameEvent::TierComplete { tiers_built });
            }
        }
        self.play(SoundEffect::Success);

        if self.tiles.is_empty() {
            self.phase = GamePhase::Completed;
            log::info!("Clock complete, score {}", self.score);
            self.events.push(GameEvent::GameComplete { score: self.score });
            self.play(SoundEffect::Victory);
        }
    }

    /// Grab tile `number` with the pointer at `pointer`. Refused while
    /// another tile is held or once the game is complete.
    pub fn begin_drag(&mut self, number: u8, pointer: Vec2) -> bool {
        if self.phase == GamePhase::Completed || self.held.is_some() {
            return false;
        }
        let Some(tile) = self.tile_mut(number) else {
            return false;
        };
        tile.begin_drag(pointer);
        self.held = Some(number);
        true
    }

    /// Move tile `number` to follow the pointer. No validation happens here.
    pub fn drag_tile(&mut self, number: u8, x: f32, y: f32) -> bool {
        if self.phase == GamePhase::Completed {
            return false;
        }
        if self.held.is_some_and(|held| held != number) {
            return false;
        }
        let pointer = Vec2::new(x, y);
        let Some(tile) = self.tile_mut(number) else {
            return false;
        };
        if !tile.drag_to(pointer) {
            tile.move_to(pointer);
        }
        let pos = tile.pos;
        self.events.push(GameEvent::TileMoved { number, pos });
        true
    }

    /// Let go of the held tile: validate where it landed and bounce it home
    /// if it missed. `None` if nothing was held.
    pub fn release_drag(&mut self) -> Option<PlacementResult> {
        let number = self.held.take()?;
        let pos = {
            let tile = self.tile_mut(number)?;
            tile.end_drag();
            tile.pos
        };

        let result = self.attempt_placement(number, pos);
        if result == PlacementResult::Incorrect {
            if let Some(tile) = self.tile_mut(number) {
                tile.snap_back();
                let pos = tile.pos;
                self.events.push(GameEvent::TileMoved { number, pos });
            }
        }
        Some(result)
    }

    /// Flip the sound switch, returning the new state
    pub fn toggle_sound(&mut self) -> bool {
        let enabled = self.sound.toggle();
        self.events.push(GameEvent::SoundToggled { enabled });
        enabled
    }

    fn play(&mut self, effect: SoundEffect) {
        if self.sound.play(effect) {
            self.events.push(GameEvent::PlaySound(effect));
        }
    }

    /// Topmost tile under `point`
    pub fn tile_at(&self, point: Vec2) -> Option<u8> {
        let radius = self.settings.tile_radius();
        self.tiles
            .iter()
            .rev()
            .find(|t| t.hit_test(point, radius))
            .map(|t| t.number)
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == GamePhase::Completed
    }

    /// Tiles still to place
    pub fn remaining(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, number: u8) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.number == number)
    }

    pub fn held(&self) -> Option<u8> {
        self.held
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    pub fn sound(&self) -> &SoundEffects {
        &self.sound
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn tile_index(&self, number: u8) -> Option<usize> {
        self.tiles.iter().position(|t| t.number == number)
    }

    fn tile_mut(&mut self, number: u8) -> Option<&mut Tile> {
        self.tiles.iter_mut().find(|t| t.number == number)
    }

    /// Rejection-sample a point on the spawn ring inside the spawn rectangle,
    /// falling back to a fixed grid cell after `max_spawn_attempts` misses
    fn spawn_position(&mut self, index: usize) -> Vec2 {
        let s = &self.settings;
        for _ in 0..s.max_spawn_attempts {
            let angle = self.rng.random_range(0.0..TAU);
            let dist = self.rng.random_range(s.spawn_ring_min()..=s.spawn_ring_max());
            let pos = polar_to_cartesian(s.board_center, dist, angle);
            if s.in_spawn_bounds(pos) {
                return pos;
            }
        }
        log::warn!(
            "No spawn point found for tile {} after {} tries, using grid",
            index + 1,
            s.max_spawn_attempts
        );
        fallback_position(s, index)
    }
}

/// Deterministic cell center inside the spawn rectangle, clear of the
/// clock face when the rectangle leaves room for it
pub fn fallback_position(settings: &Settings, index: usize) -> Vec2 {
    let clearance = settings.board_radius + settings.tile_radius();
    let clear: Vec<Vec2> = (0..FALLBACK_COLS * FALLBACK_ROWS)
        .map(|i| grid_cell(settings, FALLBACK_COLS, FALLBACK_ROWS, i))
        .filter(|p| p.distance(settings.board_center) > clearance)
        .collect();
    if clear.is_empty() {
        grid_cell(settings, COARSE_COLS, COARSE_ROWS, index)
    } else {
        clear[index % clear.len()]
    }
}

fn grid_cell(settings: &Settings, cols: usize, rows: usize, index: usize) -> Vec2 {
    let size = settings.spawn_max - settings.spawn_min;
    let col = index % cols;
    let row = (index / cols) % rows;
    settings.spawn_min
        + Vec2::new(
            size.x * (col as f32 + 0.5) / cols as f32,
            size.y * (row as f32 + 0.5) / rows as f32,
        )
}
