//! Wall tracing for rendering.
//!
//! Walks the graph of doorless walls and emits them as line segments
//! grouped into continuous strokes: straight runs and corners become one
//! polyline instead of one broken segment per room.

use bit_set::BitSet;

use crate::maze::Maze;
use crate::walls::Wall;

/// A point in maze units, produced from room centres and wall span
/// angles. Conversion to device space is the caller's concern.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Path construction commands fed to the emit callback of [`trace_walls`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathOp {
    MoveTo(Point),
    LineTo(Point),
    Stroke,
}

/// Painted marks for both sides of every wall, held outside the rooms and
/// torn down with the trace pass.
struct PaintedWalls {
    marks: BitSet,
    wall_count: usize,
    width: i32,
}

impl PaintedWalls {
    fn new(maze: &Maze) -> PaintedWalls {
        let wall_count = maze.topology().wall_count() as usize;
        PaintedWalls {
            marks: BitSet::with_capacity(maze.size() * wall_count),
            wall_count: wall_count,
            width: maze.width() as i32,
        }
    }

    // Callers only mark and query walls of in-bounds rooms.
    fn bit(&self, wall: Wall) -> usize {
        let room = (wall.room_pos.y * self.width + wall.room_pos.x) as usize;
        room * self.wall_count + wall.index as usize
    }

    fn contains(&self, wall: Wall) -> bool {
        self.marks.contains(self.bit(wall))
    }

    fn insert(&mut self, wall: Wall) {
        self.marks.insert(self.bit(wall));
    }
}

/// Emit every doorless wall of the maze exactly once, grouped into
/// strokes.
///
/// Each wall becomes a single `LineTo`; a `MoveTo` opens every stroke and
/// a `Stroke` closes it. Walls are drawn from whichever side they are
/// reached first, and each stroke follows walls corner to corner for as
/// long as an unpainted doorless wall continues the line.
pub fn trace_walls<F>(maze: &Maze, emit: &mut F)
where
    F: FnMut(PathOp),
{
    let mut painted = PaintedWalls::new(maze);
    let mut queue: Vec<Wall> = Vec::new();
    let mut needs_move = true;

    seed_queue(maze, &painted, &mut queue);
    while let Some(wall) = queue.pop() {
        if painted.contains(wall) {
            // Queued from one of its corners, then reached and drawn
            // through the other. Only possible between strokes.
            if queue.is_empty() {
                seed_queue(maze, &painted, &mut queue);
            }
            continue;
        }

        // Walls continuing the stroke out of this wall's starting corner.
        let remaining = corner_continuations(maze, &painted, wall);
        queue.extend_from_slice(&remaining);

        let (start_angle, end_angle) = wall.span();
        let (center_x, center_y) = maze.topology().room_center(wall.room_pos);
        let endpoint = |angle: f64| Point {
            x: center_x + angle.cos(),
            y: center_y + angle.sin(),
        };

        // Continuation walls run *into* the shared corner, so a fresh
        // stroke starts from the span end and every wall is drawn toward
        // its span start.
        if needs_move {
            emit(PathOp::MoveTo(endpoint(end_angle)));
        }
        emit(PathOp::LineTo(endpoint(start_angle)));

        painted.insert(wall);
        if !maze.edge(wall) {
            painted.insert(wall.back());
        }

        if remaining.is_empty() {
            emit(PathOp::Stroke);
            needs_move = true;
        } else {
            needs_move = false;
        }

        if queue.is_empty() {
            seed_queue(maze, &painted, &mut queue);
        }
    }
}

/// The undrawn, unpainted walls sharing `wall`'s starting corner, each
/// normalised to the side whose span runs into the corner.
fn corner_continuations(maze: &Maze, painted: &PaintedWalls, wall: Wall) -> Vec<Wall> {
    let mut remaining = Vec::new();
    for corner_wall in wall.corner_walls().skip(1) {
        // The corner walk yields each wall viewed from the room whose
        // span *starts* in the corner; the back view ends there instead,
        // which is what lets the stroke move along the wall rather than
        // spin around the corner. A wall whose back room is outside the
        // maze cannot continue this stroke and is left for a later
        // seeding pass.
        let candidate = corner_wall.back();
        if !maze.contains(candidate.room_pos) || candidate == wall {
            continue;
        }
        if let Ok(room) = maze.room_at(candidate.room_pos) {
            if !room.has_door(candidate.index) && !painted.contains(candidate) {
                remaining.push(candidate);
            }
        }
    }
    remaining
}

/// Refill the queue with the doorless unpainted walls of the first room
/// that still has any.
fn seed_queue(maze: &Maze, painted: &PaintedWalls, queue: &mut Vec<Wall>) {
    for pos in maze.room_positions() {
        if let Ok(room) = maze.room_at(pos) {
            let mut walls = Vec::new();
            for index in 0..maze.topology().wall_count() {
                let wall = Wall::new(maze.topology(), pos, index);
                if !room.has_door(index) && !painted.contains(wall) {
                    walls.push(wall);
                }
            }
            if !walls.is_empty() {
                queue.extend_from_slice(&walls);
                return;
            }
        }
    }
}
