//! Clock-face slot geometry
//!
//! Twelve hour slots on a ring inside the clock rim. Slot index 0 is at the
//! top (12 o'clock) and indices run clockwise, so index `i` holds hour `i`
//! except index 0, which holds 12. Screen coordinates: y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::validator::PlacementError;
use crate::Settings;
use crate::consts::{NUM_SLOTS, SLOT_STEP_DEG};
use crate::polar_to_cartesian;

/// One hour position on the clock
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Hour this slot accepts (1..=12)
    pub number: u8,
    /// Target center
    pub pos: Vec2,
    pub occupied: bool,
}

/// Hour shown at slot index `i`
#[inline]
pub fn number_at_index(i: usize) -> u8 {
    if i == 0 { 12 } else { i as u8 }
}

/// Screen angle (radians) of slot index `i`: `i*30° - 90°`
#[inline]
pub fn slot_angle(i: usize) -> f32 {
    (i as f32 * SLOT_STEP_DEG - 90.0).to_radians()
}

/// Lay out the 12 slots around `center` at `ring_radius` (rim radius minus inset)
pub fn layout(center: Vec2, ring_radius: f32) -> [Slot; NUM_SLOTS] {
    std::array::from_fn(|i| Slot {
        number: number_at_index(i),
        pos: polar_to_cartesian(center, ring_radius, slot_angle(i)),
        occupied: false,
    })
}

/// The clock face: fixed slots plus an hour -> slot lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub center: Vec2,
    pub radius: f32,
    /// Drop distance that still counts as on-target
    pub threshold: f32,
    slots: [Slot; NUM_SLOTS],
    /// `index_of[n - 1]` is the slot index for hour `n`
    index_of: [usize; NUM_SLOTS],
}

impl Board {
    pub fn new(center: Vec2, radius: f32, inset: f32, threshold: f32) -> Self {
        let slots = layout(center, radius - inset);
        let mut index_of = [0usize; NUM_SLOTS];
        for (i, slot) in slots.iter().enumerate() {
            index_of[slot.number as usize - 1] = i;
        }
        Self {
            center,
            radius,
            threshold,
            slots,
            index_of,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.board_center,
            settings.board_radius,
            settings.slot_inset(),
            settings.placement_threshold(),
        )
    }

    /// Slot index for an hour, `None` outside 1..=12
    #[inline]
    pub fn slot_index(&self, number: u8) -> Option<usize> {
        match number as usize {
            n @ 1..=NUM_SLOTS => Some(self.index_of[n - 1]),
            _ => None,
        }
    }

    pub fn find_slot(&self, number: u8) -> Option<&Slot> {
        self.slot_index(number).map(|i| &self.slots[i])
    }

    pub fn slots(&self) -> &[Slot; NUM_SLOTS] {
        &self.slots
    }

    pub fn is_occupied(&self, number: u8) -> bool {
        self.find_slot(number).is_some_and(|s| s.occupied)
    }

    /// Mark an hour's slot filled. Each slot fills at most once per game.
    pub fn occupy(&mut self, number: u8) -> Result<(), PlacementError> {
        let i = self
            .slot_index(number)
            .ok_or(PlacementError::InvalidNumber(number))?;
        let slot = &mut self.slots[i];
        if slot.occupied {
            return Err(PlacementError::SlotAlreadyOccupied(number));
        }
        slot.occupied = true;
        Ok(())
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.occupied).count()
    }

    /// Clear every slot
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.occupied = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_board() -> Board {
        Board::from_settings(&Settings::default())
    }

    #[test]
    fn test_every_hour_has_exactly_one_slot() {
        let board = reference_board();
        for n in 1..=12u8 {
            let matching = board.slots().iter().filter(|s| s.number == n).count();
            assert_eq!(matching, 1, "hour {n}");
            assert_eq!(board.find_slot(n).unwrap().number, n);
        }
        assert!(board.find_slot(0).is_none());
        assert!(board.find_slot(13).is_none());
    }

    #[test]
    fn test_clock_positions() {
        let board = reference_board();
        let c = board.center;

        // 12 straight up, 3 to the right, 6 down, 9 left (ring radius 140)
        let twelve = board.find_slot(12).unwrap().pos;
        assert!((twelve - (c + Vec2::new(0.0, -140.0))).length() < 1e-3);
        let three = board.find_slot(3).unwrap().pos;
        assert!((three - (c + Vec2::new(140.0, 0.0))).length() < 1e-3);
        let six = board.find_slot(6).unwrap().pos;
        assert!((six - (c + Vec2::new(0.0, 140.0))).length() < 1e-3);
        let nine = board.find_slot(9).unwrap().pos;
        assert!((nine - (c + Vec2::new(-140.0, 0.0))).length() < 1e-3);
    }

    #[test]
    fn test_occupy_once() {
        let mut board = reference_board();
        assert!(board.occupy(5).is_ok());
        assert!(board.is_occupied(5));
        assert_eq!(board.occupy(5), Err(PlacementError::SlotAlreadyOccupied(5)));
        assert_eq!(board.occupy(13), Err(PlacementError::InvalidNumber(13)));
        assert_eq!(board.occupied_count(), 1);

        board.reset();
        assert_eq!(board.occupied_count(), 0);
        assert!(board.occupy(5).is_ok());
    }
}
