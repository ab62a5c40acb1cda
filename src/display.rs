//! Text rendering of mazes.
//!
//! Square mazes render with box drawing characters; other topologies fall
//! back to a one line summary, as their geometry has no character-grid
//! representation.

use std::fmt;

use crate::maze::Maze;
use crate::topology::{square, RoomCoordinate, Topology};
use crate::utils::{self, FnvHashSet};

const WALL_L: &str = "╴";
const WALL_R: &str = "╶";
const WALL_U: &str = "╵";
const WALL_D: &str = "╷";
const WALL_LR_3: &str = "───";
const WALL_LR: &str = "─";
const WALL_UD: &str = "│";
const WALL_LD: &str = "┐";
const WALL_RU: &str = "└";
const WALL_LU: &str = "┘";
const WALL_RD: &str = "┌";
const WALL_LRU: &str = "┴";
const WALL_LRD: &str = "┬";
const WALL_LRUD: &str = "┼";
const WALL_RUD: &str = "├";
const WALL_LUD: &str = "┤";

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.topology() == Topology::Square {
            render_square(self, |_| String::from("   "), f)
        } else {
            write!(
                f,
                "{:?} maze, {} x {} rooms",
                self.topology(),
                self.width(),
                self.height()
            )
        }
    }
}

/// Renders a maze with the rooms of a path marked, for showing solutions
/// on a terminal.
#[derive(Debug)]
pub struct PathOverlay<'a> {
    maze: &'a Maze,
    on_path: FnvHashSet<RoomCoordinate>,
}

impl<'a> PathOverlay<'a> {
    pub fn new(maze: &'a Maze, path: &[RoomCoordinate]) -> PathOverlay<'a> {
        let mut on_path = utils::fnv_hashset(path.len());
        on_path.extend(path.iter().cloned());
        PathOverlay {
            maze: maze,
            on_path: on_path,
        }
    }
}

impl<'a> fmt::Display for PathOverlay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.maze.topology() != Topology::Square {
            return write!(f, "{}", self.maze);
        }
        render_square(
            self.maze,
            |pos| {
                if self.on_path.contains(&pos) {
                    String::from(" . ")
                } else {
                    String::from("   ")
                }
            },
            f,
        )
    }
}

/// Box drawing renderer for square mazes.
///
/// Rows print from the top of the maze down, so the room at `y = 0` ends
/// up on the last line. Each room only renders its body, its east
/// boundary and its south boundary; the row above supplies the north
/// wall. The corner glyph joins up to four wall sections depending on
/// which passages around the corner are open. Doors in the outer
/// boundary are not drawn as openings.
fn render_square<F>(maze: &Maze, body: F, f: &mut fmt::Formatter) -> fmt::Result
where
    F: Fn(RoomCoordinate) -> String,
{
    let columns = maze.width() as i32;
    let top_row = maze.height() as i32 - 1;

    // A passage exists when the neighbour is inside the maze and the
    // shared wall has a door.
    let open_to = |pos: RoomCoordinate, index: u8| -> bool {
        let (dx, dy) = maze.topology().direction(pos, index);
        let neighbour = RoomCoordinate::new(pos.x + dx, pos.y + dy);
        maze.contains(neighbour) && maze.connected(pos, neighbour)
    };

    // The north most boundary is a special case; everything below reuses
    // the southern boundary of the row above.
    let mut output = String::from(WALL_RD);
    for x in 0..columns {
        let pos = RoomCoordinate::new(x, top_row);
        output.push_str(WALL_LR_3);
        if open_to(pos, square::RIGHT) {
            output.push_str(WALL_LR);
        } else if x == columns - 1 {
            output.push_str(WALL_LD);
        } else {
            output.push_str(WALL_LRD);
        }
    }
    output.push('\n');

    for y in (0..=top_row).rev() {
        let screen_bottom_row = y == 0;

        let mut middle_section = String::from(WALL_UD);
        let mut bottom_section = String::new();

        for x in 0..columns {
            let pos = RoomCoordinate::new(x, y);
            let last_column = x == columns - 1;
            let east_open = open_to(pos, square::RIGHT);
            let south_open = open_to(pos, square::DOWN);

            middle_section.push_str(&body(pos));
            middle_section.push_str(if east_open { " " } else { WALL_UD });

            if x == 0 {
                bottom_section = if screen_bottom_row {
                    String::from(WALL_RU)
                } else if south_open {
                    String::from(WALL_UD)
                } else {
                    String::from(WALL_RUD)
                };
            }
            bottom_section.push_str(if south_open { "   " } else { WALL_LR_3 });

            let corner = match (screen_bottom_row, last_column) {
                (true, true) => WALL_LU,
                (true, false) => {
                    if east_open {
                        WALL_LR
                    } else {
                        WALL_LRU
                    }
                }
                (false, true) => {
                    if south_open {
                        WALL_UD
                    } else {
                        WALL_LUD
                    }
                }
                (false, false) => {
                    // The glyph south east of this room joins the wall
                    // sections that are actually closed around that
                    // corner.
                    let east = RoomCoordinate::new(x + 1, y);
                    let south = RoomCoordinate::new(x, y - 1);
                    let access_se_from_east = open_to(east, square::DOWN);
                    let access_se_from_south = open_to(south, square::RIGHT);
                    let show_left_section = !south_open;
                    let show_right_section = !access_se_from_east;
                    let show_up_section = !east_open;
                    let show_down_section = !access_se_from_south;

                    match (
                        show_left_section,
                        show_right_section,
                        show_up_section,
                        show_down_section,
                    ) {
                        (true, true, true, true) => WALL_LRUD,
                        (true, true, true, false) => WALL_LRU,
                        (true, true, false, true) => WALL_LRD,
                        (true, false, true, true) => WALL_LUD,
                        (false, true, true, true) => WALL_RUD,
                        (true, true, false, false) => WALL_LR,
                        (false, false, true, true) => WALL_UD,
                        (false, true, true, false) => WALL_RU,
                        (true, false, false, true) => WALL_LD,
                        (true, false, true, false) => WALL_LU,
                        (false, true, false, true) => WALL_RD,
                        (true, false, false, false) => WALL_L,
                        (false, true, false, false) => WALL_R,
                        (false, false, true, false) => WALL_U,
                        (false, false, false, true) => WALL_D,
                        _ => " ",
                    }
                }
            };
            bottom_section.push_str(corner);
        }

        output.push_str(&middle_section);
        output.push('\n');
        output.push_str(&bottom_section);
        output.push('\n');
    }

    write!(f, "{}", output)
}
