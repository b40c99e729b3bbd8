use crate::coord::Coord;

#[derive(Debug)]
pub struct Pattern {
  pub name: &'static str,
  pub cells: &'static [Coord],
}

const fn c(x: i64, y: i64) -> Coord {
  Coord::new(x, y)
}

/// Default seed of every benchmark trial.
pub const R_PENTOMINO: [Coord; 5] = [c(0, 0), c(0, 1), c(1, 1), c(-1, 0), c(0, -1)];

pub const BLOCK: [Coord; 4] = [c(0, 0), c(1, 0), c(0, 1), c(1, 1)];

pub const BLINKER: [Coord; 3] = [c(0, 0), c(1, 0), c(2, 0)];

/// Travels one cell towards `(+1, -1)` every 4 generations.
pub const GLIDER: [Coord; 5] = [c(0, 1), c(1, 0), c(-1, -1), c(0, -1), c(1, -1)];

pub const ACORN: [Coord; 7] = [
  c(-2, 1),
  c(0, 0),
  c(-3, -1), c(-2, -1), c(1, -1), c(2, -1), c(3, -1),
];

pub const PATTERNS: &[Pattern] = &[
  Pattern { name: "r-pentomino", cells: &R_PENTOMINO },
  Pattern { name: "block", cells: &BLOCK },
  Pattern { name: "blinker", cells: &BLINKER },
  Pattern { name: "glider", cells: &GLIDER },
  Pattern { name: "acorn", cells: &ACORN },
];

pub fn by_name(name: &str) -> Option<&'static Pattern> {
  PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
