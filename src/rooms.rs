//! Door storage for a single room.

use serde_derive::{Deserialize, Serialize};

/// The doors of one room, stored as a bitset over wall indices.
///
/// Rooms are topology agnostic; wall index bounds are the maze layer's
/// concern. Two rooms are equal when they hold the same set of doors.
#[derive(Default, Eq, PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Room {
    doors: u8,
}

impl Room {
    pub fn new() -> Room {
        Room { doors: 0 }
    }

    pub fn has_door(&self, wall_index: u8) -> bool {
        self.doors & (1 << wall_index) != 0
    }

    pub fn add_door(&mut self, wall_index: u8) {
        self.doors |= 1 << wall_index;
    }

    pub fn remove_door(&mut self, wall_index: u8) {
        self.doors &= !(1 << wall_index);
    }

    pub fn set_door(&mut self, wall_index: u8, open: bool) {
        if open {
            self.add_door(wall_index);
        } else {
            self.remove_door(wall_index);
        }
    }

    /// True when the room has no doors at all.
    pub fn is_empty(&self) -> bool {
        self.doors == 0
    }

    pub fn door_count(&self) -> u32 {
        self.doors.count_ones()
    }
}
