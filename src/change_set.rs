//! Change-driven engine: only neighborhoods of cells that flipped in the
//! previous generation are re-examined.

use rayon::prelude::*;
use crate::coord::*;
use crate::rule::{Rule, GAME_OF_LIFE};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ChangeKind {
  Birth,
  Death,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Change {
  pub kind: ChangeKind,
  pub position: Coord,
}

impl Change {
  pub fn birth(position: Coord) -> Self {
    Self { kind: ChangeKind::Birth, position }
  }

  pub fn death(position: Coord) -> Self {
    Self { kind: ChangeKind::Death, position }
  }
}

/// `alive` is one generation behind: the board stands for
/// `apply_updates(alive, changes)`.
#[derive(Clone, Debug, Default)]
pub struct Board {
  pub alive: LiveSet,
  pub changes: Vec<Change>,
}

impl Board {
  /// Board whose first `advance` produces `cells` unchanged.
  ///
  /// Besides one birth per seed cell, every dead neighbor of the seed gets a
  /// death. Those are no-ops when applied, but they put the seed cells
  /// themselves into the affected set, so isolated seed cells get classified.
  pub fn seeded(cells: impl IntoIterator<Item = Coord>) -> Self {
    let seed: LiveSet = cells.into_iter().collect();
    let mut changes: Vec<Change> = seed.iter().copied().map(Change::birth).collect();
    let padding: LiveSet = seed.iter()
      .flat_map(|&c| neighbors_of(c))
      .filter(|n| !seed.contains(n))
      .collect();
    changes.extend(padding.into_iter().map(Change::death));

    Self {
      alive: LiveSet::default(),
      changes,
    }
  }

  /// The generation this board represents.
  pub fn live_cells(&self) -> LiveSet {
    apply_updates(&self.alive, &self.changes)
  }

  pub fn population(&self) -> usize {
    self.live_cells().len()
  }
}

pub fn apply_updates(alive: &LiveSet, changes: &[Change]) -> LiveSet {
  let mut next = alive.clone();
  for change in changes {
    match change.kind {
      ChangeKind::Birth => {
        next.insert(change.position);
      }
      ChangeKind::Death => {
        next.remove(&change.position);
      }
    }
  }
  next
}

pub fn affected_cells(changes: &[Change]) -> LiveSet {
  let mut result = LiveSet::with_capacity_and_hasher(changes.len() * 8, Default::default());
  for change in changes {
    result.extend(neighbors_of(change.position));
  }
  result
}

/// B3/S23 transition of a single cell, `None` when it keeps its state.
pub fn classify(alive: &LiveSet, pos: Coord) -> Option<Change> {
  classify_with(&GAME_OF_LIFE, alive, pos)
}

pub fn classify_with(rule: &Rule, alive: &LiveSet, pos: Coord) -> Option<Change> {
  let is_alive = alive.contains(&pos);
  let count = count_live_neighbors(alive, pos);
  match (is_alive, rule.next_state(is_alive, count)) {
    (false, true) => Some(Change::birth(pos)),
    (true, false) => Some(Change::death(pos)),
    _ => None,
  }
}

pub fn compute_changes(alive: &LiveSet, affected: &LiveSet) -> Vec<Change> {
  compute_changes_with(&GAME_OF_LIFE, alive, affected)
}

pub fn compute_changes_with(rule: &Rule, alive: &LiveSet, affected: &LiveSet) -> Vec<Change> {
  affected.iter()
    .filter_map(|&pos| classify_with(rule, alive, pos))
    .collect()
}

pub fn par_compute_changes_with(rule: &Rule, alive: &LiveSet, affected: &LiveSet) -> Vec<Change> {
  affected.par_iter()
    .filter_map(|&pos| classify_with(rule, alive, pos))
    .collect()
}

/// One B3/S23 generation.
pub fn advance(board: Board) -> Board {
  ChangeSetEngine::new(GAME_OF_LIFE).step(board)
}

#[derive(Clone, Copy, Debug)]
pub struct ChangeSetEngine {
  rule: Rule,
  parallel: bool,
}

impl ChangeSetEngine {
  pub fn new(rule: Rule) -> Self {
    Self { rule, parallel: false }
  }

  pub fn parallel(mut self, parallel: bool) -> Self {
    self.parallel = parallel;
    self
  }

  pub fn step(&self, board: Board) -> Board {
    let alive = apply_updates(&board.alive, &board.changes);
    let mut affected = affected_cells(&board.changes);
    if !self.rule.births_survive() {
      affected.extend(board.changes.iter().map(|c| c.position));
    }

    let changes = if self.parallel {
      par_compute_changes_with(&self.rule, &alive, &affected)
    } else {
      compute_changes_with(&self.rule, &alive, &affected)
    };
    Board { alive, changes }
  }
}
