#![cfg_attr(feature="clippy", feature(plugin))]
#![cfg_attr(feature="clippy", plugin(clippy))]

use docopt::Docopt;
use itertools::Itertools;
use serde_derive::Deserialize;

use amaze::{
    display::PathOverlay,
    generators,
    maze::Maze,
    pathing,
    topology::{RoomCoordinate, Topology},
    tracing::{self, PathOp},
    units::{Height, Width},
};
use rand::{SeedableRng, XorShiftRng};
use std::fs::File;
use std::io::Write as IoWrite;

const USAGE: &str = "Amaze

Usage:
    amaze_driver -h | --help
    amaze_driver [--walls=<n>] [--width=<w>] [--height=<h>] [--seed=<s>] [--solve] [--svg-out=<path>]

Options:
    -h --help          Show this screen.
    --walls=<n>        Wall count per room: 4 (square), 6 (hexagonal) or 3 (triangular) [default: 4].
    --width=<w>        Maze width in rooms [default: 15].
    --height=<h>       Maze height in rooms [default: 10].
    --seed=<s>         Seed the random generator for reproducible mazes.
    --solve            Find a route between opposite corners and mark it on the text rendering.
    --svg-out=<path>   Write the maze walls to an SVG file.
";

#[derive(Debug, Deserialize)]
struct DriverArgs {
    flag_walls: u8,
    flag_width: u32,
    flag_height: u32,
    flag_seed: Option<u32>,
    flag_solve: bool,
    flag_svg_out: Option<String>,
}

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::amaze::errors::Error, ::amaze::errors::ErrorKind);
        }
        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;
use error_chain::bail;

fn main() -> Result<()> {
    let args: DriverArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let topology = match args.flag_walls {
        4 => Topology::Square,
        6 => Topology::Hex,
        3 => Topology::Tri,
        other => bail!("unsupported wall count {}, expected 3, 4 or 6", other),
    };
    let mut maze = Maze::new(Width(args.flag_width), Height(args.flag_height), topology)
        .ok_or("maze dimensions must be greater than zero")?;

    let mut rng = match args.flag_seed {
        Some(seed) => {
            XorShiftRng::from_seed([seed | 1, 0x193a_6754, 0xa8a7_d469, 0x9783_0e05])
        }
        None => rand::weak_rng(),
    };
    generators::randomized_prim_with_rng(&mut maze, &mut rng)?;

    if args.flag_solve {
        let start = RoomCoordinate::new(0, 0);
        let goal = RoomCoordinate::new(args.flag_width as i32 - 1, args.flag_height as i32 - 1);
        let path = pathing::shortest_path(&maze, start, goal)?;
        println!("{}", PathOverlay::new(&maze, &path));
        println!(
            "route: {}",
            path.iter().map(|p| format!("({}, {})", p.x, p.y)).join(" -> ")
        );
    } else {
        println!("{}", maze);
    }

    if let Some(svg_path) = args.flag_svg_out {
        write_svg(&maze, &svg_path)?;
        println!("wrote {}", svg_path);
    }

    Ok(())
}

/// Write the traced walls as a single SVG path element.
///
/// The emit callback of the tracer feeds the path data directly; maze
/// units scale up so the stroke width is visible at the default zoom, and
/// the y axis flips because SVG grows downwards.
fn write_svg(maze: &Maze, file_path: &str) -> Result<()> {
    const ROOM_PIXELS: f64 = 30.0;
    const MARGIN: f64 = 5.0;

    let (min_x, min_y, max_x, max_y) = wall_bounds(maze);
    let to_x = |x: f64| (x - min_x) * ROOM_PIXELS + MARGIN;
    let to_y = |y: f64| (max_y - y) * ROOM_PIXELS + MARGIN;

    let mut data = String::new();
    tracing::trace_walls(maze, &mut |op| match op {
        PathOp::MoveTo(p) => data.push_str(&format!("M {:.2} {:.2} ", to_x(p.x), to_y(p.y))),
        PathOp::LineTo(p) => data.push_str(&format!("L {:.2} {:.2} ", to_x(p.x), to_y(p.y))),
        PathOp::Stroke => (),
    });

    let image_width = (max_x - min_x) * ROOM_PIXELS + 2.0 * MARGIN;
    let image_height = (max_y - min_y) * ROOM_PIXELS + 2.0 * MARGIN;

    let mut file = File::create(file_path)?;
    writeln!(
        file,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}">"#,
        image_width, image_height
    )?;
    writeln!(
        file,
        r#"  <path d="{}" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
        data.trim_end()
    )?;
    writeln!(file, "</svg>")?;
    Ok(())
}

/// Bounding box of the wall endpoints along the maze boundary.
fn wall_bounds(maze: &Maze) -> (f64, f64, f64, f64) {
    let mut min_x = ::std::f64::INFINITY;
    let mut min_y = ::std::f64::INFINITY;
    let mut max_x = ::std::f64::NEG_INFINITY;
    let mut max_y = ::std::f64::NEG_INFINITY;

    for wall in maze.edge_walls() {
        let (start_angle, _) = wall.span();
        let (cx, cy) = maze.topology().room_center(wall.room_pos);
        let px = cx + start_angle.cos();
        let py = cy + start_angle.sin();
        if px < min_x {
            min_x = px;
        }
        if py < min_y {
            min_y = py;
        }
        if px > max_x {
            max_x = px;
        }
        if py > max_y {
            max_y = py;
        }
    }

    (min_x, min_y, max_x, max_y)
}
