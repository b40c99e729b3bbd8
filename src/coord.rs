use itertools::{Itertools, MinMaxResult};
use rustc_hash::FxHashSet;
use std::fmt;

/// One cell of the grid.
///
/// The grid spans the whole `i64` range on both axes. Cells on its edge have
/// fewer than eight neighbors: nothing lies beyond `i64::MIN` or `i64::MAX`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Coord {
  pub x: i64,
  pub y: i64,
}

pub type LiveSet = FxHashSet<Coord>;

/// `(min, max)` corners, both inclusive.
pub type BoundingBox = (Coord, Coord);

const OFFSETS: [(i64, i64); 8] = [
  (-1, -1), (-1, 0), (-1, 1),
  (0, -1),           (0, 1),
  (1, -1),  (1, 0),  (1, 1),
];

impl Coord {
  pub const fn new(x: i64, y: i64) -> Self {
    Self { x, y }
  }

  /// Panics on overflow, see [`Coord::checked_offset`].
  pub fn offset(self, dx: i64, dy: i64) -> Self {
    Self::new(self.x + dx, self.y + dy)
  }

  /// `None` when the result falls off the grid.
  pub fn checked_offset(self, dx: i64, dy: i64) -> Option<Self> {
    Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
  }
}

impl From<(i64, i64)> for Coord {
  fn from((x, y): (i64, i64)) -> Self {
    Self::new(x, y)
  }
}

impl fmt::Display for Coord {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

/// Moore neighborhood of `pos`, excluding `pos` itself and anything past the
/// edge of the grid.
pub fn neighbors_of(pos: Coord) -> impl Iterator<Item = Coord> {
  OFFSETS.into_iter().filter_map(move |(dx, dy)| pos.checked_offset(dx, dy))
}

pub fn live_set(cells: &[(i64, i64)]) -> LiveSet {
  cells.iter().map(|&c| Coord::from(c)).collect()
}

pub fn count_live_neighbors(alive: &LiveSet, pos: Coord) -> u8 {
  neighbors_of(pos).filter(|n| alive.contains(n)).count() as u8
}

/// Bounding box of the live cells, `(0,0)-(1,1)` when there are none.
pub fn bounding_box<'a>(cells: impl IntoIterator<Item = &'a Coord>) -> BoundingBox {
  let cells: Vec<&Coord> = cells.into_iter().collect();
  let xs = cells.iter().map(|c| c.x).minmax();
  let ys = cells.iter().map(|c| c.y).minmax();
  match (xs, ys) {
    (MinMaxResult::NoElements, _) | (_, MinMaxResult::NoElements) => {
      (Coord::new(0, 0), Coord::new(1, 1))
    }
    (xs, ys) => {
      let (x0, x1) = bounds(xs);
      let (y0, y1) = bounds(ys);
      (Coord::new(x0, y0), Coord::new(x1, y1))
    }
  }
}

fn bounds(r: MinMaxResult<i64>) -> (i64, i64) {
  match r {
    MinMaxResult::NoElements => (0, 1),
    MinMaxResult::OneElement(v) => (v, v),
    MinMaxResult::MinMax(lo, hi) => (lo, hi),
  }
}

/// Cells sorted by `(x, y)`, handy for comparing sets in tests and logs.
pub fn sorted(cells: &LiveSet) -> Vec<Coord> {
  cells.iter().copied().sorted().collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_neighbors_of_origin() {
    let expected = live_set(&[
      (-1, -1), (-1, 0), (-1, 1),
      (0, -1),           (0, 1),
      (1, -1),  (1, 0),  (1, 1),
    ]);
    let actual: LiveSet = neighbors_of(Coord::new(0, 0)).collect();
    assert_eq!(actual, expected);
  }

  #[test]
  fn test_neighbors_of_shifted() {
    let plus_one: LiveSet = neighbors_of(Coord::new(0, 0))
      .map(|c| c.offset(1, 1))
      .collect();
    let actual: LiveSet = neighbors_of(Coord::new(1, 1)).collect();
    assert_eq!(actual, plus_one);
    assert!(!plus_one.contains(&Coord::new(1, 1)));
  }

  #[test]
  fn test_neighbors_at_grid_edge() {
    assert_eq!(neighbors_of(Coord::new(i64::MAX, 0)).count(), 5);
    assert_eq!(neighbors_of(Coord::new(i64::MIN, i64::MAX)).count(), 3);
    assert!(neighbors_of(Coord::new(i64::MAX, i64::MIN)).all(|n| n.x < i64::MAX && n.y > i64::MIN));
    assert_eq!(Coord::new(i64::MAX, 0).checked_offset(1, 0), None);
    assert_eq!(Coord::new(0, i64::MIN).checked_offset(0, 1), Some(Coord::new(0, i64::MIN + 1)));
  }

  #[test]
  fn test_count_live_neighbors() {
    let alive = live_set(&[(0, 0), (1, 0), (2, 0)]);
    assert_eq!(count_live_neighbors(&alive, Coord::new(1, 0)), 2);
    assert_eq!(count_live_neighbors(&alive, Coord::new(1, 1)), 3);
    assert_eq!(count_live_neighbors(&alive, Coord::new(5, 5)), 0);
  }

  #[test]
  fn test_bounding_box() {
    let alive = live_set(&[(0, 0), (0, 1), (1, 1), (-1, 0), (0, -1)]);
    assert_eq!(bounding_box(&alive), (Coord::new(-1, -1), Coord::new(1, 1)));

    let single = live_set(&[(7, -3)]);
    assert_eq!(bounding_box(&single), (Coord::new(7, -3), Coord::new(7, -3)));
  }

  #[test]
  fn test_bounding_box_empty() {
    assert_eq!(bounding_box(&LiveSet::default()), (Coord::new(0, 0), Coord::new(1, 1)));
  }
}
