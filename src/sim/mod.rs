//! Deterministic game core
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - Synchronous, one input turn at a time
//! - No rendering or platform dependencies

pub mod board;
pub mod events;
pub mod session;
pub mod tile;
pub mod tower;
pub mod validator;

pub use board::{Board, Slot, layout};
pub use events::{GameEvent, GamePhase, PlacementResult};
pub use session::GameSession;
pub use tile::Tile;
pub use tower::{TierEvent, Tower};
pub use validator::{PlacementError, Verdict, check_placement, is_correct};
