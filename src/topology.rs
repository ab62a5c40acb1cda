//! Wall tables for the supported room shapes.
//!
//! A topology fixes how many walls a room has, which neighbouring room
//! each wall leads to, and the angular span each wall covers around the
//! room centre. Walls are enumerated so that consecutive indices share a
//! corner; the spans of one room tile the full circle with no gap and no
//! overlap. For hexagonal rooms the direction vectors depend on the row
//! parity, for triangular rooms both the directions and the angles depend
//! on the parity of `x + y` (neighbouring triangles are mirror images).

use std::f64::consts::PI;

use serde_derive::{Deserialize, Serialize};

use crate::errors::*;

/// A position on the room grid.
///
/// Coordinates are signed: walls may refer to rooms just outside the
/// maze, e.g. the back of a boundary wall.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd, Serialize, Deserialize)]
pub struct RoomCoordinate {
    pub x: i32,
    pub y: i32,
}

impl RoomCoordinate {
    pub fn new(x: i32, y: i32) -> RoomCoordinate {
        RoomCoordinate { x: x, y: y }
    }
}

impl From<(i32, i32)> for RoomCoordinate {
    fn from(x_y_pair: (i32, i32)) -> RoomCoordinate {
        RoomCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

/// Integer step from a room to one of its neighbours.
pub type Direction = (i32, i32);

#[derive(Eq, PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
pub enum Topology {
    Square,
    Hex,
    Tri,
}

/// Wall indices of square rooms.
pub mod square {
    pub const LEFT: u8 = 0;
    pub const UP: u8 = 1;
    pub const RIGHT: u8 = 2;
    pub const DOWN: u8 = 3;
}

/// Wall indices of hexagonal rooms.
pub mod hex {
    pub const LEFT: u8 = 0;
    pub const UP_LEFT: u8 = 1;
    pub const UP_RIGHT: u8 = 2;
    pub const RIGHT: u8 = 3;
    pub const DOWN_RIGHT: u8 = 4;
    pub const DOWN_LEFT: u8 = 5;
}

/// Wall indices of triangular rooms. The two diagonals swap sides with
/// the room parity.
pub mod tri {
    pub const DIAGONAL_1: u8 = 0;
    pub const DIAGONAL_2: u8 = 1;
    pub const HORIZONTAL: u8 = 2;
}

const SQUARE_DIRECTIONS: [Direction; 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

// One table per row parity; odd rows are shifted half a room to the right
// so their diagonal neighbours differ.
const HEX_DIRECTIONS: [[Direction; 6]; 2] = [
    [(-1, 0), (-1, 1), (0, 1), (1, 0), (0, -1), (-1, -1)],
    [(-1, 0), (0, 1), (1, 1), (1, 0), (1, -1), (0, -1)],
];

// Indexed by (x + y) parity.
const TRI_DIRECTIONS: [[Direction; 3]; 2] = [
    [(-1, 0), (1, 0), (0, -1)],
    [(1, 0), (-1, 0), (0, 1)],
];

// Wall start angles, counter-clockwise positive, one full turn per room.
// Wall `i` spans from its own angle to the angle of wall `i + 1`.
const SQUARE_ANGLES: [f64; 4] = [5.0 * PI / 4.0, 3.0 * PI / 4.0, PI / 4.0, 7.0 * PI / 4.0];

const HEX_ANGLES: [f64; 6] = [
    7.0 * PI / 6.0,
    5.0 * PI / 6.0,
    PI / 2.0,
    PI / 6.0,
    11.0 * PI / 6.0,
    3.0 * PI / 2.0,
];

// Triangles pointing the other way use the same angles rotated by pi.
const TRI_ANGLES: [[f64; 3]; 2] = [
    [7.0 * PI / 6.0, PI / 2.0, 11.0 * PI / 6.0],
    [PI / 6.0, 3.0 * PI / 2.0, 5.0 * PI / 6.0],
];

lazy_static! {
    // Vertical distance between hexagonal rows, derived from the angle
    // table so that row packing follows the wall geometry.
    static ref HEX_VERTICAL_STEP: f64 = 1.0 - 0.5 * HEX_ANGLES[1].sin();
}

impl Topology {
    pub fn wall_count(self) -> u8 {
        match self {
            Topology::Square => 4,
            Topology::Hex => 6,
            Topology::Tri => 3,
        }
    }

    fn parity(self, pos: RoomCoordinate) -> usize {
        match self {
            Topology::Square => 0,
            Topology::Hex => pos.y.rem_euclid(2) as usize,
            Topology::Tri => (pos.x + pos.y).rem_euclid(2) as usize,
        }
    }

    /// The step from the room at `pos` to the neighbour behind `wall_index`.
    ///
    /// Panics if the wall index is out of range for the topology.
    pub fn direction(self, pos: RoomCoordinate, wall_index: u8) -> Direction {
        let i = wall_index as usize;
        match self {
            Topology::Square => SQUARE_DIRECTIONS[i],
            Topology::Hex => HEX_DIRECTIONS[self.parity(pos)][i],
            Topology::Tri => TRI_DIRECTIONS[self.parity(pos)][i],
        }
    }

    /// The wall of the room at `pos` whose neighbour lies one `direction`
    /// step away.
    pub fn wall_from_direction(self, pos: RoomCoordinate, direction: Direction) -> Result<u8> {
        for i in 0..self.wall_count() {
            if self.direction(pos, i) == direction {
                return Ok(i);
            }
        }
        Err(ErrorKind::InvalidDirection(direction.0, direction.1).into())
    }

    /// Start and end angle of a wall around its room centre, in radians.
    pub fn span(self, pos: RoomCoordinate, wall_index: u8) -> (f64, f64) {
        let i = wall_index as usize;
        let n = self.wall_count() as usize;
        match self {
            Topology::Square => (SQUARE_ANGLES[i], SQUARE_ANGLES[(i + 1) % n]),
            Topology::Hex => (HEX_ANGLES[i], HEX_ANGLES[(i + 1) % n]),
            Topology::Tri => {
                let angles = &TRI_ANGLES[self.parity(pos)];
                (angles[i], angles[(i + 1) % n])
            }
        }
    }

    /// The index of the same wall as seen from the neighbouring room.
    ///
    /// Triangular neighbours are mirror images and keep the local index;
    /// square and hexagonal rooms use the wall halfway around.
    pub fn back_index(self, wall_index: u8) -> u8 {
        match self {
            Topology::Tri => wall_index,
            _ => {
                let n = self.wall_count();
                (wall_index + n / 2) % n
            }
        }
    }

    /// The wall spanning the other side of the same room, where defined.
    pub fn opposite_index(self, wall_index: u8) -> Result<u8> {
        match self {
            Topology::Tri => Err(ErrorKind::NoOpposite.into()),
            _ => Ok(self.back_index(wall_index)),
        }
    }

    /// Centre of a room in maze units.
    pub fn room_center(self, pos: RoomCoordinate) -> (f64, f64) {
        match self {
            Topology::Square | Topology::Tri => (pos.x as f64 + 0.5, pos.y as f64 + 0.5),
            Topology::Hex => {
                let x_offset = if pos.y.rem_euclid(2) == 1 { 1.0 } else { 0.5 };
                (
                    pos.x as f64 + x_offset,
                    *HEX_VERTICAL_STEP * pos.y as f64 + 0.5,
                )
            }
        }
    }
}

pub const TOPOLOGIES: [Topology; 3] = [Topology::Square, Topology::Hex, Topology::Tri];
