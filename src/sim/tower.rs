//! Clock tower progress
//!
//! Every correct placement adds progress; a full tier adds a block.

use serde::{Deserialize, Serialize};

use crate::consts::{TOWER_BLOCK_PITCH, TOWER_HEADER, TOWER_HEIGHT};
use crate::palette::{self, Color};

/// What a recorded success did to the tower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TierEvent {
    /// Still filling the current tier (new count)
    Progress { count: u32 },
    /// Tier filled: a block was added (new block total)
    Complete { tiers_built: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tower {
    pub tiers_built: u32,
    /// Always in `0..tier_size`
    pub progress_in_tier: u32,
    pub tier_size: u32,
}

impl Tower {
    pub fn new(tier_size: u32) -> Self {
        Self {
            tiers_built: 0,
            progress_in_tier: 0,
            tier_size: tier_size.max(1),
        }
    }

    pub fn record_success(&mut self) -> TierEvent {
        self.progress_in_tier += 1;
        if self.progress_in_tier >= self.tier_size {
            self.progress_in_tier = 0;
            self.tiers_built += 1;
            TierEvent::Complete {
                tiers_built: self.tiers_built,
            }
        } else {
            TierEvent::Progress {
                count: self.progress_in_tier,
            }
        }
    }

    pub fn reset(&mut self) {
        self.tiers_built = 0;
        self.progress_in_tier = 0;
    }

    /// Fill fraction of the progress bar
    pub fn progress_ratio(&self) -> f32 {
        self.progress_in_tier as f32 / self.tier_size as f32
    }

    /// "n/12 Numbers Placed"
    pub fn progress_label(&self) -> String {
        format!("{}/{} Numbers Placed", self.progress_in_tier, self.tier_size)
    }

    /// Blocks that fit on screen; later tiers still count but are not drawn
    pub fn visible_blocks(&self) -> u32 {
        self.tiers_built.min(max_visible_blocks())
    }

    /// The bell sits on top once the first block exists
    pub fn has_bell(&self) -> bool {
        self.tiers_built > 0
    }
}

/// Blocks stack upward from the tower floor, stopping below the header
pub fn max_visible_blocks() -> u32 {
    // Block k sits at floor - 40 - 40k and must stay below the header
    let usable = TOWER_HEIGHT - TOWER_BLOCK_PITCH - TOWER_HEADER;
    (usable / TOWER_BLOCK_PITCH).ceil() as u32
}

/// Color of block `k` (0 = bottom)
pub fn block_color(k: u32) -> Color {
    palette::color_by_index(k as usize)
}
