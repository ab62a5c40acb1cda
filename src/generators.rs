//! Maze generation.

use rand::Rng;

use crate::errors::*;
use crate::maze::Maze;
use crate::topology::RoomCoordinate;
use crate::walls::Wall;

/// Carve a perfect maze with the randomized Prim algorithm.
///
/// `rand` is the only source of nondeterminism: called with a maximum
/// `n > 0` it must return a value in `[0, n)`, so a seeded implementation
/// reproduces the same maze. The frontier is selected uniformly over
/// candidate *walls*, not rooms, which grows locally clustered corridors;
/// swapping in a Kruskal or uniform-spanning-tree construction changes
/// the visual character of the mazes.
///
/// Starting from an all-doors-closed maze this opens exactly
/// `width * height - 1` doors and leaves every room reachable from every
/// other room.
pub fn randomized_prim<F>(maze: &mut Maze, rand: &mut F) -> Result<()>
where
    F: FnMut(usize) -> usize,
{
    // Start in a random room; its boundary walls can never hold a door
    // carved by the generator, so they never enter the frontier.
    let start = RoomCoordinate::new(
        rand(maze.width() as usize) as i32,
        rand(maze.height() as usize) as i32,
    );

    let mut frontier: Vec<Wall> = Vec::new();
    for &wall in maze.walls_of(start)?.iter() {
        if !maze.edge(wall) {
            frontier.push(wall);
        }
    }

    while !frontier.is_empty() {
        let wall = frontier.remove(rand(frontier.len()));

        // Frontier walls never sit on the maze boundary, so the room
        // behind them is in bounds.
        let next = maze.walk(wall, false)?;
        if !maze.room_at(next)?.is_empty() {
            // The room gained a door since this wall was queued; opening
            // another door into it would close a cycle.
            continue;
        }

        // First visit: open the door and queue the walls of the new room
        // that lead to rooms not yet visited.
        maze.set_door(wall, true)?;
        for &next_wall in maze.walls_of(next)?.iter() {
            if maze.edge(next_wall) {
                continue;
            }
            let destination = maze.walk(next_wall, false)?;
            if maze.room_at(destination)?.is_empty() {
                frontier.push(next_wall);
            }
        }
    }

    Ok(())
}

/// Drive [`randomized_prim`] from a `rand` crate RNG.
pub fn randomized_prim_with_rng<R: Rng>(maze: &mut Maze, rng: &mut R) -> Result<()> {
    randomized_prim(maze, &mut |n| rng.gen::<usize>() % n)
}
