//! Wall references.
//!
//! A wall is a lightweight value: a room position plus a wall index,
//! carrying its topology so that derived walls (the back, the opposite,
//! the walls around a corner) can be computed on demand. Walls are never
//! linked into an object graph; deriving a wall always produces a fresh
//! value.

use smallvec::SmallVec;

use crate::errors::*;
use crate::topology::{Direction, RoomCoordinate, Topology};

#[derive(Copy, Clone, Debug)]
pub struct Wall {
    topology: Topology,
    pub room_pos: RoomCoordinate,
    pub index: u8,
}

pub type WallSmallVec = SmallVec<[Wall; 6]>;

impl Wall {
    pub fn new(topology: Topology, room_pos: RoomCoordinate, index: u8) -> Wall {
        Wall {
            topology: topology,
            room_pos: room_pos,
            index: index,
        }
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// The step to the room on the other side of this wall.
    pub fn direction(&self) -> Direction {
        self.topology.direction(self.room_pos, self.index)
    }

    /// The same wall as seen from the neighbouring room.
    pub fn back(&self) -> Wall {
        let (dx, dy) = self.direction();
        Wall {
            topology: self.topology,
            room_pos: RoomCoordinate::new(self.room_pos.x + dx, self.room_pos.y + dy),
            index: self.topology.back_index(self.index),
        }
    }

    /// The wall spanning the other side of the same room, where the
    /// topology defines one.
    pub fn opposite(&self) -> Result<Wall> {
        let index = self.topology.opposite_index(self.index)?;
        Ok(Wall {
            topology: self.topology,
            room_pos: self.room_pos,
            index: index,
        })
    }

    /// Start and end angle of this wall around its room centre.
    pub fn span(&self) -> (f64, f64) {
        self.topology.span(self.room_pos, self.index)
    }

    /// Every wall touching this wall's starting corner, this wall first,
    /// counter-clockwise around the corner. Each yielded wall is viewed
    /// from the room whose span starts in the shared corner.
    pub fn corner_walls(&self) -> CornerWalls {
        CornerWalls {
            start: *self,
            next: Some(*self),
        }
    }

    fn is_same_value(&self, other: &Wall) -> bool {
        self.room_pos == other.room_pos && self.index == other.index
    }
}

/// A wall and its back are the same physical wall and compare equal.
impl PartialEq for Wall {
    fn eq(&self, other: &Wall) -> bool {
        self.is_same_value(other) || self.back().is_same_value(other)
    }
}
impl Eq for Wall {}

/// Iterator over the walls meeting at one corner: repeatedly step to the
/// back of the current wall and rotate to the next wall index in that
/// room, until the starting wall comes around again.
#[derive(Copy, Clone, Debug)]
pub struct CornerWalls {
    start: Wall,
    next: Option<Wall>,
}

impl Iterator for CornerWalls {
    type Item = Wall;

    fn next(&mut self) -> Option<Wall> {
        let current = self.next?;
        let back = current.back();
        let wall_count = back.topology.wall_count();
        let candidate = Wall::new(back.topology, back.room_pos, (back.index + 1) % wall_count);
        self.next = if candidate == self.start {
            None
        } else {
            Some(candidate)
        };
        Some(current)
    }
}
