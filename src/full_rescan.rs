//! Baseline engine: every generation recounts the neighbors of all cells
//! next to a live cell.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use crate::coord::*;
use crate::rule::{Rule, GAME_OF_LIFE};

pub type NeighborCounts = FxHashMap<Coord, u8>;

/// Live neighbor count of every cell with at least one live neighbor.
pub fn neighbor_counts(alive: &LiveSet) -> NeighborCounts {
  let mut counts = NeighborCounts::with_capacity_and_hasher(alive.len() * 8, Default::default());
  for &cell in alive {
    accumulate(&mut counts, cell);
  }
  counts
}

/// Same counts as [`neighbor_counts`], folded per worker and merged by
/// addition.
pub fn par_neighbor_counts(alive: &LiveSet) -> NeighborCounts {
  alive.par_iter()
    .fold(NeighborCounts::default, |mut counts, &cell| {
      accumulate(&mut counts, cell);
      counts
    })
    .reduce(NeighborCounts::default, |a, b| {
      if a.len() < b.len() { merge(b, a) } else { merge(a, b) }
    })
}

fn merge(mut into: NeighborCounts, from: NeighborCounts) -> NeighborCounts {
  for (pos, n) in from {
    *into.entry(pos).or_default() += n;
  }
  into
}

fn accumulate(counts: &mut NeighborCounts, cell: Coord) {
  for n in neighbors_of(cell) {
    *counts.entry(n).or_default() += 1;
  }
}

/// One B3/S23 generation.
pub fn advance(alive: &LiveSet) -> LiveSet {
  FullRescanEngine::new(GAME_OF_LIFE).step(alive)
}

#[derive(Clone, Copy, Debug)]
pub struct FullRescanEngine {
  rule: Rule,
  parallel: bool,
}

impl FullRescanEngine {
  pub fn new(rule: Rule) -> Self {
    Self { rule, parallel: false }
  }

  pub fn parallel(mut self, parallel: bool) -> Self {
    self.parallel = parallel;
    self
  }

  pub fn step(&self, alive: &LiveSet) -> LiveSet {
    let counts = if self.parallel {
      par_neighbor_counts(alive)
    } else {
      neighbor_counts(alive)
    };

    let rule = &self.rule;
    let mut next: LiveSet = counts.iter()
      .filter(|&(pos, &count)| rule.next_state(alive.contains(pos), count))
      .map(|(&pos, _)| pos)
      .collect();

    // lonely cells never show up in the counts
    if rule.survives(0) {
      next.extend(alive.iter().filter(|c| !counts.contains_key(*c)));
    }
    next
  }
}
