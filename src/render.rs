use std::io::{self, Write};
use itertools::Itertools;
use crate::coord::*;

/// Clears the terminal and moves the cursor to the top-left corner.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[;H";

pub const LIVE: char = '@';
pub const DEAD: char = ' ';

/// Grid of the bounding box, top row is the largest `y`.
pub fn render(cells: &LiveSet) -> String {
  let (min, max) = bounding_box(cells);
  (min.y..=max.y).rev()
    .map(|y| {
      (min.x..=max.x)
        .map(|x| if cells.contains(&Coord::new(x, y)) { LIVE } else { DEAD })
        .collect::<String>()
    })
    .join("\n")
}

pub fn write_frame(out: &mut impl Write, cells: &LiveSet) -> io::Result<()> {
  writeln!(out, "{}{}", CLEAR_SCREEN, render(cells))?;
  out.flush()
}
