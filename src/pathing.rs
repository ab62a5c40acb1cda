//! Shortest path search over the door graph.

use crate::errors::*;
use crate::maze::Maze;
use crate::topology::RoomCoordinate;
use crate::utils::{self, FnvHashMap};
use crate::walls::Wall;

/// Find a shortest door path between two rooms, inclusive of both ends.
///
/// The search runs breadth first over the door graph (rooms are nodes,
/// doors are the only edges), seeded from `to` and growing toward `from`.
/// Each visited room records the wall leading one step back toward `to`
/// together with its distance, so reconstruction simply walks forward
/// from `from` through the recorded walls and never reverses a list.
///
/// Equal-length alternatives resolve by visit order; only the length of
/// the result is guaranteed. Fails with `NoPath` when either end is
/// outside the maze or no door-connected route exists.
pub fn shortest_path(
    maze: &Maze,
    from: RoomCoordinate,
    to: RoomCoordinate,
) -> Result<Vec<RoomCoordinate>> {
    if !maze.contains(from) || !maze.contains(to) {
        return Err(ErrorKind::NoPath.into());
    }
    if from == to {
        return Ok(vec![from]);
    }

    // One entry per visited room: the wall one step closer to `to`, and
    // the distance to `to`. Absence stands in for an infinite distance.
    let mut toward_to: FnvHashMap<RoomCoordinate, (Wall, u32)> = utils::fnv_hashmap(maze.size());

    let mut frontier = vec![to];
    let mut distance = 0u32;
    'search: while !frontier.is_empty() {
        let mut new_frontier = vec![];
        distance += 1;

        for &room_pos in &frontier {
            for &door in maze.doors_of(room_pos)?.iter() {
                if maze.edge(door) {
                    // A door in the outer boundary leads out of the grid.
                    continue;
                }
                let neighbour = maze.walk(door, true)?;
                if neighbour == to || toward_to.contains_key(&neighbour) {
                    continue;
                }
                toward_to.insert(neighbour, (door.back(), distance));
                if neighbour == from {
                    break 'search;
                }
                new_frontier.push(neighbour);
            }
        }
        frontier = new_frontier;
    }

    if !toward_to.contains_key(&from) {
        return Err(ErrorKind::NoPath.into());
    }

    let mut path = vec![from];
    let mut current = from;
    while current != to {
        let (wall, _) = toward_to[&current];
        current = maze.walk(wall, true)?;
        path.push(current);
    }
    Ok(path)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::generators;
    use crate::maze::Maze;
    use crate::topology::{Topology, TOPOLOGIES};
    use crate::units::{Height, Width};

    fn gc(x: i32, y: i32) -> RoomCoordinate {
        RoomCoordinate::new(x, y)
    }

    fn assert_valid_path(maze: &Maze, path: &[RoomCoordinate]) {
        for pair in path.windows(2) {
            assert!(
                maze.connected(pair[0], pair[1]),
                "{:?} and {:?} are not joined by a door",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn a_room_connects_to_itself_trivially() {
        let maze = Maze::new(Width(3), Height(3), Topology::Square).unwrap();
        let path = shortest_path(&maze, gc(1, 1), gc(1, 1)).unwrap();
        assert_eq!(path, vec![gc(1, 1)]);
    }

    #[test]
    fn out_of_bounds_ends_have_no_path() {
        let maze = Maze::new(Width(3), Height(3), Topology::Square).unwrap();
        for (from, to) in [(gc(-1, 0), gc(0, 0)), (gc(0, 0), gc(3, 0))].iter() {
            match shortest_path(&maze, *from, *to) {
                Err(Error(ErrorKind::NoPath, _)) => (),
                other => panic!("expected NoPath, got {:?}", other),
            }
        }
    }

    #[test]
    fn disconnected_rooms_have_no_path() {
        // No doors at all.
        let maze = Maze::new(Width(3), Height(3), Topology::Square).unwrap();
        match shortest_path(&maze, gc(0, 0), gc(2, 2)) {
            Err(Error(ErrorKind::NoPath, _)) => (),
            other => panic!("expected NoPath, got {:?}", other),
        }
    }

    #[test]
    fn a_boundary_door_does_not_open_a_path() {
        let mut maze = Maze::new(Width(2), Height(1), Topology::Square).unwrap();
        maze.add_door(gc(0, 0), gc(-1, 0)).unwrap();
        match shortest_path(&maze, gc(0, 0), gc(1, 0)) {
            Err(Error(ErrorKind::NoPath, _)) => (),
            other => panic!("expected NoPath, got {:?}", other),
        }
    }

    #[test]
    fn the_shorter_of_two_routes_wins() {
        // Two routes from (0, 0) to (2, 0): straight along the bottom row
        // in two doors, or around through the middle row in four.
        let mut maze = Maze::new(Width(3), Height(2), Topology::Square).unwrap();
        maze.add_door(gc(0, 0), gc(1, 0)).unwrap();
        maze.add_door(gc(1, 0), gc(2, 0)).unwrap();

        maze.add_door(gc(0, 0), gc(0, 1)).unwrap();
        maze.add_door(gc(0, 1), gc(1, 1)).unwrap();
        maze.add_door(gc(1, 1), gc(2, 1)).unwrap();
        maze.add_door(gc(2, 1), gc(2, 0)).unwrap();

        let path = shortest_path(&maze, gc(0, 0), gc(2, 0)).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], gc(0, 0));
        assert_eq!(path[2], gc(2, 0));
        assert_valid_path(&maze, &path);
    }

    #[test]
    fn a_corridor_walks_end_to_end() {
        let mut maze = Maze::new(Width(5), Height(1), Topology::Square).unwrap();
        for x in 0..4 {
            maze.add_door(gc(x, 0), gc(x + 1, 0)).unwrap();
        }
        let path = shortest_path(&maze, gc(0, 0), gc(4, 0)).unwrap();
        assert_eq!(
            path,
            vec![gc(0, 0), gc(1, 0), gc(2, 0), gc(3, 0), gc(4, 0)]
        );
    }

    #[test]
    fn paths_across_generated_mazes() {
        for &topology in TOPOLOGIES.iter() {
            let mut maze = Maze::new(Width(7), Height(6), topology).unwrap();
            let mut state = 77u64;
            let mut rand = move |n: usize| {
                state = state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                (state >> 33) as usize % n
            };
            generators::randomized_prim(&mut maze, &mut rand).unwrap();

            let from = gc(0, 0);
            let to = gc(6, 5);
            let path = shortest_path(&maze, from, to).unwrap();
            assert_eq!(path[0], from);
            assert_eq!(*path.last().unwrap(), to);
            assert_valid_path(&maze, &path);

            // A perfect maze has a unique route, so both directions have
            // the same length.
            let reverse = shortest_path(&maze, to, from).unwrap();
            assert_eq!(reverse.len(), path.len());
        }
    }
}
