//! Placement validation
//!
//! Pure checks against the board; nothing here records occupancy.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::board::Board;

/// Why a drop cannot be placed at all (as opposed to landing off-target)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PlacementError {
    #[error("{0} is not an hour that is still in play")]
    InvalidNumber(u8),
    #[error("the slot for {0} is already filled")]
    SlotAlreadyOccupied(u8),
}

/// Outcome of checking one drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// On target and the slot is free
    Correct,
    /// Too far from the hour's slot
    WrongLocation,
    NotPlaceable(PlacementError),
}

/// True iff `drop_pos` lies strictly within the board threshold of the
/// slot for `number`. Ignores occupancy.
pub fn is_correct(board: &Board, number: u8, drop_pos: Vec2) -> bool {
    board
        .find_slot(number)
        .is_some_and(|slot| slot.pos.distance(drop_pos) < board.threshold)
}

/// Full check: a filled slot is never placeable, even when the drop is on target
pub fn check_placement(board: &Board, number: u8, drop_pos: Vec2) -> Verdict {
    let Some(slot) = board.find_slot(number) else {
        return Verdict::NotPlaceable(PlacementError::InvalidNumber(number));
    };
    if slot.occupied {
        return Verdict::NotPlaceable(PlacementError::SlotAlreadyOccupied(number));
    }
    if is_correct(board, number, drop_pos) {
        Verdict::Correct
    } else {
        Verdict::WrongLocation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;

    #[test]
    fn test_exact_target_is_correct() {
        let board = Board::from_settings(&Settings::default());
        for slot in board.slots() {
            assert!(is_correct(&board, slot.number, slot.pos));
        }
    }

    #[test]
    fn test_threshold_boundary() {
        let board = Board::from_settings(&Settings::default());
        let target = board.find_slot(4).unwrap().pos;

        assert!(is_correct(&board, 4, target + Vec2::new(29.5, 0.0)));
        assert!(!is_correct(&board, 4, target + Vec2::new(30.5, 0.0)));
        assert!(!is_correct(&board, 4, target + Vec2::new(0.0, -45.0)));
        assert!(!is_correct(&board, 4, target + Vec2::new(21.0, 28.0)));

        // Exactly on the threshold is a miss: 3 o'clock sits at (465, 325)
        let three = board.find_slot(3).unwrap().pos;
        assert_eq!(three, Vec2::new(465.0, 325.0));
        assert!(!is_correct(&board, 3, three + Vec2::new(30.0, 0.0)));
        assert!(is_correct(&board, 3, three + Vec2::new(29.0, 0.0)));
    }

    #[test]
    fn test_neighbouring_slot_is_wrong() {
        let board = Board::from_settings(&Settings::default());
        let three = board.find_slot(3).unwrap().pos;
        assert_eq!(check_placement(&board, 7, three), Verdict::WrongLocation);
        assert_eq!(check_placement(&board, 3, three), Verdict::Correct);
    }

    #[test]
    fn test_occupied_slot_not_placeable() {
        let mut board = Board::from_settings(&Settings::default());
        let five = board.find_slot(5).unwrap().pos;
        board.occupy(5).unwrap();

        // Geometry still matches, but the slot is taken
        assert!(is_correct(&board, 5, five));
        assert_eq!(
            check_placement(&board, 5, five),
            Verdict::NotPlaceable(PlacementError::SlotAlreadyOccupied(5))
        );
    }

    #[test]
    fn test_unknown_hour() {
        let board = Board::from_settings(&Settings::default());
        assert!(!is_correct(&board, 0, board.center));
        assert_eq!(
            check_placement(&board, 13, board.center),
            Verdict::NotPlaceable(PlacementError::InvalidNumber(13))
        );
    }
}
