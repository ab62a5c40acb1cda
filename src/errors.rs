//! Error types shared across the crate.
//!
//! All conditions here are local and recoverable: they are returned to the
//! caller and never abort the process.

use crate::topology::RoomCoordinate;

error_chain! {
    errors {
        /// A room position argument lies outside the maze grid.
        OutOfBounds(pos: RoomCoordinate) {
            description("room position outside the maze")
            display("room position ({}, {}) is outside the maze", pos.x, pos.y)
        }

        /// Two room positions with no connecting wall between them.
        NotAdjacent(a: RoomCoordinate, b: RoomCoordinate) {
            description("rooms are not adjacent")
            display("no wall connects ({}, {}) and ({}, {})", a.x, a.y, b.x, b.y)
        }

        /// A direction vector that matches no wall of the topology.
        InvalidDirection(dx: i32, dy: i32) {
            description("direction matches no wall")
            display("({}, {}) is not a wall direction of this topology", dx, dy)
        }

        /// The topology defines no wall opposite the given one. Triangular
        /// rooms have three walls and no room-local antipode.
        NoOpposite {
            description("wall has no opposite in this topology")
        }

        /// A walk required a door but the wall crossed has none.
        NoDoor {
            description("wall has no door")
        }

        /// No door-connected path exists between the requested rooms.
        NoPath {
            description("no path between the rooms")
        }
    }
}
