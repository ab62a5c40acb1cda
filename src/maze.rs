//! The maze container: a rectangular grid of rooms bound to one topology.

use serde_derive::{Deserialize, Serialize};

use crate::errors::*;
use crate::rooms::Room;
use crate::topology::{RoomCoordinate, Topology};
use crate::units::{Height, Width};
use crate::walls::{Wall, WallSmallVec};

/// A `width` x `height` grid of rooms.
///
/// Invariant: if a room has a door on a wall leading to an in-bounds
/// neighbour, that neighbour holds the matching door on the back wall.
/// Every mutation entry point updates both sides together, never one.
/// Doors on boundary walls (neighbour out of bounds) are legal and live
/// on a single room.
#[derive(Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct Maze {
    width: u32,
    height: u32,
    topology: Topology,
    rooms: Vec<Room>,
}

impl Maze {
    /// Create a maze with all doors closed.
    ///
    /// Returns `None` if either dimension is zero.
    pub fn new(width: Width, height: Height, topology: Topology) -> Option<Maze> {
        let (Width(w), Height(h)) = (width, height);
        if w == 0 || h == 0 {
            return None;
        }
        Some(Maze {
            width: w,
            height: h,
            topology: topology,
            rooms: vec![Room::new(); w as usize * h as usize],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Number of rooms in the maze.
    #[inline]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Is the room position inside the maze?
    #[inline]
    pub fn contains(&self, pos: RoomCoordinate) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    fn room_index(&self, pos: RoomCoordinate) -> Result<usize> {
        if self.contains(pos) {
            Ok(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            Err(ErrorKind::OutOfBounds(pos).into())
        }
    }

    pub fn room_at(&self, pos: RoomCoordinate) -> Result<&Room> {
        let index = self.room_index(pos)?;
        Ok(&self.rooms[index])
    }

    /// All walls of the room at `pos`, one per wall index.
    pub fn walls_of(&self, pos: RoomCoordinate) -> Result<WallSmallVec> {
        self.room_index(pos)?;
        Ok((0..self.topology.wall_count())
            .map(|i| Wall::new(self.topology, pos, i))
            .collect())
    }

    /// The walls of the room at `pos` that have doors.
    pub fn doors_of(&self, pos: RoomCoordinate) -> Result<WallSmallVec> {
        let room = *self.room_at(pos)?;
        Ok((0..self.topology.wall_count())
            .filter(|&i| room.has_door(i))
            .map(|i| Wall::new(self.topology, pos, i))
            .collect())
    }

    /// Are two rooms next to each other? Purely geometric: ignores doors
    /// and maze bounds.
    pub fn adjacent(&self, a: RoomCoordinate, b: RoomCoordinate) -> bool {
        self.topology
            .wall_from_direction(a, (b.x - a.x, b.y - a.y))
            .is_ok()
    }

    /// Are two rooms joined by a door?
    pub fn connected(&self, a: RoomCoordinate, b: RoomCoordinate) -> bool {
        let door_from = |from: RoomCoordinate, to: RoomCoordinate| {
            self.topology
                .wall_from_direction(from, (to.x - from.x, to.y - from.y))
                .ok()
                .and_then(|i| self.room_at(from).ok().map(|room| room.has_door(i)))
                .unwrap_or(false)
        };
        if self.contains(a) {
            door_from(a, b)
        } else {
            door_from(b, a)
        }
    }

    /// Set or clear the door on `wall`, and symmetrically on the back
    /// wall when the neighbouring room is inside the maze.
    ///
    /// All door mutation funnels through here so the two sides of a wall
    /// never disagree.
    pub fn set_door(&mut self, wall: Wall, open: bool) -> Result<()> {
        let index = self.room_index(wall.room_pos)?;
        self.rooms[index].set_door(wall.index, open);

        let back = wall.back();
        if let Ok(back_index) = self.room_index(back.room_pos) {
            self.rooms[back_index].set_door(back.index, open);
        }
        Ok(())
    }

    /// Open the door between two neighbouring rooms.
    ///
    /// `a` must be inside the maze; `b` may be outside, in which case the
    /// door exists on `a`'s side only.
    pub fn add_door(&mut self, a: RoomCoordinate, b: RoomCoordinate) -> Result<()> {
        self.change_door(a, b, true)
    }

    /// Close the door between two neighbouring rooms.
    pub fn remove_door(&mut self, a: RoomCoordinate, b: RoomCoordinate) -> Result<()> {
        self.change_door(a, b, false)
    }

    fn change_door(&mut self, a: RoomCoordinate, b: RoomCoordinate, open: bool) -> Result<()> {
        if !self.contains(a) {
            return Err(ErrorKind::OutOfBounds(a).into());
        }
        let index = self
            .topology
            .wall_from_direction(a, (b.x - a.x, b.y - a.y))
            .chain_err(|| ErrorKind::NotAdjacent(a, b))?;
        self.set_door(Wall::new(self.topology, a, index), open)
    }

    /// Is this a boundary wall: its room inside the maze, the room behind
    /// it outside?
    pub fn edge(&self, wall: Wall) -> bool {
        self.contains(wall.room_pos) && !self.contains(wall.back().room_pos)
    }

    /// The room reached by crossing `wall`.
    ///
    /// Fails with `OutOfBounds` when the destination is not in the maze,
    /// and with `NoDoor` when `require_door` is set and the wall has no
    /// door.
    pub fn walk(&self, wall: Wall, require_door: bool) -> Result<RoomCoordinate> {
        let destination = wall.back().room_pos;
        if !self.contains(destination) {
            return Err(ErrorKind::OutOfBounds(destination).into());
        }
        if require_door && !self.room_at(wall.room_pos)?.has_door(wall.index) {
            return Err(ErrorKind::NoDoor.into());
        }
        Ok(destination)
    }

    /// Room positions in row-major order.
    pub fn room_positions(&self) -> RoomPositions {
        RoomPositions {
            width: self.width,
            current: 0,
            count: self.size(),
        }
    }

    /// All boundary walls of the maze, in unspecified order.
    pub fn edge_walls(&self) -> Vec<Wall> {
        let mut walls = Vec::new();
        for pos in self.room_positions() {
            for index in 0..self.topology.wall_count() {
                let wall = Wall::new(self.topology, pos, index);
                if self.edge(wall) {
                    walls.push(wall);
                }
            }
        }
        walls
    }
}

#[derive(Debug, Copy, Clone)]
pub struct RoomPositions {
    width: u32,
    current: usize,
    count: usize,
}

impl Iterator for RoomPositions {
    type Item = RoomCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.count {
            let x = (self.current % self.width as usize) as i32;
            let y = (self.current / self.width as usize) as i32;
            self.current += 1;
            Some(RoomCoordinate::new(x, y))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.current;
        (remaining, Some(remaining))
    }
}
impl ExactSizeIterator for RoomPositions {} // default impl using size_hint()

#[cfg(test)]
mod tests {

    use quickcheck::quickcheck;

    use super::*;
    use crate::topology::{square, tri};

    fn square_maze(w: u32, h: u32) -> Maze {
        Maze::new(Width(w), Height(h), Topology::Square).expect("valid dimensions")
    }

    fn gc(x: i32, y: i32) -> RoomCoordinate {
        RoomCoordinate::new(x, y)
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(Maze::new(Width(0), Height(5), Topology::Square).is_none());
        assert!(Maze::new(Width(5), Height(0), Topology::Hex).is_none());
        assert!(Maze::new(Width(1), Height(1), Topology::Tri).is_some());
    }

    #[test]
    fn bounds() {
        let m = square_maze(10, 20);
        assert!(m.contains(gc(0, 0)));
        assert!(m.contains(gc(9, 19)));
        assert!(!m.contains(gc(10, 0)));
        assert!(!m.contains(gc(0, 20)));
        assert!(!m.contains(gc(-1, 0)));
        assert!(!m.contains(gc(0, -1)));

        match m.room_at(gc(10, 0)) {
            Err(Error(ErrorKind::OutOfBounds(pos), _)) => assert_eq!(pos, gc(10, 0)),
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn new_maze_has_all_doors_closed() {
        let m = square_maze(4, 4);
        for pos in m.room_positions() {
            assert!(m.room_at(pos).unwrap().is_empty());
            assert!(m.doors_of(pos).unwrap().is_empty());
        }
    }

    #[test]
    fn adding_a_door_updates_both_rooms() {
        let mut m = square_maze(10, 20);
        m.add_door(gc(3, 4), gc(4, 4)).expect("rooms are adjacent");

        assert!(m.room_at(gc(3, 4)).unwrap().has_door(square::RIGHT));
        assert!(m.room_at(gc(4, 4)).unwrap().has_door(square::LEFT));
        assert!(m.connected(gc(3, 4), gc(4, 4)));
        assert!(m.connected(gc(4, 4), gc(3, 4)));

        // No other room was touched.
        let doored = m
            .room_positions()
            .filter(|&p| !m.room_at(p).unwrap().is_empty())
            .count();
        assert_eq!(doored, 2);
    }

    #[test]
    fn a_door_in_a_boundary_wall_touches_one_room() {
        let mut m = square_maze(10, 20);
        m.add_door(gc(0, 0), gc(-1, 0)).expect("boundary door");

        assert!(m.room_at(gc(0, 0)).unwrap().has_door(square::LEFT));
        let doored = m
            .room_positions()
            .filter(|&p| !m.room_at(p).unwrap().is_empty())
            .count();
        assert_eq!(doored, 1);
        assert!(m.connected(gc(0, 0), gc(-1, 0)));
        assert!(m.connected(gc(-1, 0), gc(0, 0)));
    }

    #[test]
    fn doors_between_non_neighbours_are_rejected() {
        let mut m = square_maze(10, 20);
        match m.add_door(gc(0, 0), gc(2, 0)) {
            Err(Error(ErrorKind::NotAdjacent(a, b), _)) => {
                assert_eq!(a, gc(0, 0));
                assert_eq!(b, gc(2, 0));
            }
            other => panic!("expected NotAdjacent, got {:?}", other),
        }
        match m.add_door(gc(-1, 0), gc(0, 0)) {
            Err(Error(ErrorKind::OutOfBounds(_), _)) => (),
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn removing_a_door_clears_both_rooms() {
        let mut m = square_maze(3, 3);
        m.add_door(gc(1, 1), gc(1, 2)).unwrap();
        assert!(m.connected(gc(1, 1), gc(1, 2)));

        m.remove_door(gc(1, 2), gc(1, 1)).unwrap();
        assert!(!m.connected(gc(1, 1), gc(1, 2)));
        assert!(m.room_at(gc(1, 1)).unwrap().is_empty());
        assert!(m.room_at(gc(1, 2)).unwrap().is_empty());
    }

    #[test]
    fn explicit_wall_form_mirrors_across_triangle_boundaries() {
        let mut m = Maze::new(Width(4), Height(4), Topology::Tri).unwrap();
        let wall = Wall::new(Topology::Tri, gc(2, 1), tri::DIAGONAL_1);
        m.set_door(wall, true).unwrap();

        // (2, 1) has odd diagonal parity so DIAGONAL_1 leads right, and
        // the mirrored neighbour keeps the same local wall index.
        assert!(m.room_at(gc(2, 1)).unwrap().has_door(tri::DIAGONAL_1));
        assert!(m.room_at(gc(3, 1)).unwrap().has_door(tri::DIAGONAL_1));
        assert!(m.connected(gc(2, 1), gc(3, 1)));

        m.set_door(wall, false).unwrap();
        assert!(m.room_at(gc(3, 1)).unwrap().is_empty());
    }

    #[test]
    fn adjacency_is_geometric() {
        let m = square_maze(3, 3);
        assert!(m.adjacent(gc(0, 0), gc(1, 0)));
        assert!(m.adjacent(gc(0, 0), gc(0, 1)));
        assert!(!m.adjacent(gc(0, 0), gc(1, 1)));
        assert!(!m.adjacent(gc(0, 0), gc(2, 0)));
        // Walls on the boundary still have a neighbour, outside the maze.
        assert!(m.adjacent(gc(0, 0), gc(-1, 0)));
    }

    #[test]
    fn walking_through_walls() {
        let mut m = square_maze(3, 3);
        let right = Wall::new(Topology::Square, gc(0, 0), square::RIGHT);

        assert_eq!(m.walk(right, false).unwrap(), gc(1, 0));
        match m.walk(right, true) {
            Err(Error(ErrorKind::NoDoor, _)) => (),
            other => panic!("expected NoDoor, got {:?}", other),
        }

        m.add_door(gc(0, 0), gc(1, 0)).unwrap();
        assert_eq!(m.walk(right, true).unwrap(), gc(1, 0));

        let left = Wall::new(Topology::Square, gc(0, 0), square::LEFT);
        match m.walk(left, false) {
            Err(Error(ErrorKind::OutOfBounds(pos), _)) => assert_eq!(pos, gc(-1, 0)),
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn edge_walls_of_a_one_room_wide_maze() {
        // Degenerate width: every left and right wall sits on the boundary.
        let m = square_maze(1, 8);
        for pos in m.room_positions() {
            assert!(m.edge(Wall::new(Topology::Square, pos, square::LEFT)));
            assert!(m.edge(Wall::new(Topology::Square, pos, square::RIGHT)));
        }
        assert!(!m.edge(Wall::new(Topology::Square, gc(0, 3), square::UP)));
        assert_eq!(m.edge_walls().len(), 2 * 8 + 2);
    }

    #[test]
    fn edge_wall_count_of_a_square_maze() {
        let m = square_maze(7, 3);
        assert_eq!(m.edge_walls().len(), 2 * 7 + 2 * 3);
    }

    #[test]
    fn room_positions_are_row_major() {
        let m = square_maze(3, 2);
        let positions: Vec<RoomCoordinate> = m.room_positions().collect();
        assert_eq!(
            positions,
            vec![gc(0, 0), gc(1, 0), gc(2, 0), gc(0, 1), gc(1, 1), gc(2, 1)]
        );
        assert_eq!(m.room_positions().len(), 6);
    }

    #[test]
    fn walls_of_lists_every_wall_once() {
        let m = Maze::new(Width(2), Height(2), Topology::Hex).unwrap();
        let walls = m.walls_of(gc(1, 1)).unwrap();
        assert_eq!(walls.len(), 6);
        for (i, wall) in walls.iter().enumerate() {
            assert_eq!(wall.index, i as u8);
            assert_eq!(wall.room_pos, gc(1, 1));
        }
        assert!(m.walls_of(gc(2, 0)).is_err());
    }

    #[test]
    fn quickcheck_door_symmetry() {
        // Any sequence of door changes leaves `connected` symmetric for
        // every adjacent pair.
        fn prop(ops: Vec<(u8, u8, u8, bool)>) -> bool {
            let mut m = square_maze(4, 4);
            for (x, y, wall, open) in ops {
                let a = gc(i32::from(x % 4), i32::from(y % 4));
                let direction = Topology::Square.direction(a, wall % 4);
                let b = gc(a.x + direction.0, a.y + direction.1);
                let result = if open {
                    m.add_door(a, b)
                } else {
                    m.remove_door(a, b)
                };
                if result.is_err() {
                    return false;
                }
            }
            for pos in m.room_positions() {
                for i in 0..4 {
                    let direction = Topology::Square.direction(pos, i);
                    let neighbour = gc(pos.x + direction.0, pos.y + direction.1);
                    if m.connected(pos, neighbour) != m.connected(neighbour, pos) {
                        return false;
                    }
                }
            }
            true
        }
        quickcheck(prop as fn(Vec<(u8, u8, u8, bool)>) -> bool);
    }

    #[test]
    fn serialization_round_trips() {
        let mut m = Maze::new(Width(5), Height(4), Topology::Hex).unwrap();
        m.add_door(gc(0, 0), gc(1, 0)).unwrap();
        m.add_door(gc(1, 0), gc(1, 1)).unwrap();
        m.add_door(gc(4, 3), gc(4, 2)).unwrap();

        let encoded = serde_json::to_string(&m).expect("serializable");
        let decoded: Maze = serde_json::from_str(&encoded).expect("deserializable");
        assert_eq!(m, decoded);
    }
}
