use std::fmt;
use std::mem;
use std::str::FromStr;
use crate::change_set::{Board, ChangeSetEngine};
use crate::config::LifeConfig;
use crate::coord::*;
use crate::full_rescan::FullRescanEngine;

/// A strategy for advancing a live set one generation at a time.
pub trait Engine {
  type State;

  fn seed(&self, cells: &[Coord]) -> Self::State;

  fn advance(&self, state: Self::State) -> Self::State;

  fn live_cells(&self, state: &Self::State) -> LiveSet;
}

impl Engine for ChangeSetEngine {
  type State = Board;

  fn seed(&self, cells: &[Coord]) -> Board {
    Board::seeded(cells.iter().copied())
  }

  fn advance(&self, board: Board) -> Board {
    self.step(board)
  }

  fn live_cells(&self, board: &Board) -> LiveSet {
    board.live_cells()
  }
}

impl Engine for FullRescanEngine {
  type State = LiveSet;

  fn seed(&self, cells: &[Coord]) -> LiveSet {
    cells.iter().copied().collect()
  }

  fn advance(&self, alive: LiveSet) -> LiveSet {
    self.step(&alive)
  }

  fn live_cells(&self, alive: &LiveSet) -> LiveSet {
    alive.clone()
  }
}

/// Runs `state` forward `generations` times.
pub fn run<E: Engine>(engine: &E, mut state: E::State, generations: u64) -> E::State {
  for _ in 0..generations {
    state = engine.advance(state);
  }
  state
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EngineKind {
  ChangeSet,
  FullRescan,
}

impl Default for EngineKind {
  fn default() -> Self {
    EngineKind::ChangeSet
  }
}

impl fmt::Display for EngineKind {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(match self {
      EngineKind::ChangeSet => "change-set",
      EngineKind::FullRescan => "full-rescan",
    })
  }
}

impl FromStr for EngineKind {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "change-set" | "changeset" => Ok(EngineKind::ChangeSet),
      "full-rescan" | "fullrescan" => Ok(EngineKind::FullRescan),
      other => Err(format!("unknown engine {:?}, expected change-set or full-rescan", other)),
    }
  }
}

enum State {
  ChangeSet(ChangeSetEngine, Board),
  FullRescan(FullRescanEngine, LiveSet),
}

/// An engine picked by [`LifeConfig`] together with its state.
pub struct Simulation {
  state: State,
  generation: u64,
}

impl Simulation {
  pub fn new(config: &LifeConfig, seed: &[Coord]) -> Self {
    let state = match config.engine {
      EngineKind::ChangeSet => {
        let engine = ChangeSetEngine::new(config.rule).parallel(config.parallel);
        State::ChangeSet(engine, engine.seed(seed))
      }
      EngineKind::FullRescan => {
        let engine = FullRescanEngine::new(config.rule).parallel(config.parallel);
        State::FullRescan(engine, engine.seed(seed))
      }
    };
    Self { state, generation: 0 }
  }

  pub fn step(&mut self) {
    match &mut self.state {
      State::ChangeSet(engine, board) => {
        *board = engine.advance(mem::take(board));
      }
      State::FullRescan(engine, alive) => {
        *alive = engine.advance(mem::take(alive));
      }
    }
    self.generation += 1;
  }

  pub fn generation(&self) -> u64 {
    self.generation
  }

  pub fn live_cells(&self) -> LiveSet {
    match &self.state {
      State::ChangeSet(engine, board) => engine.live_cells(board),
      State::FullRescan(engine, alive) => engine.live_cells(alive),
    }
  }

  pub fn population(&self) -> usize {
    match &self.state {
      State::ChangeSet(_, board) => board.population(),
      State::FullRescan(_, alive) => alive.len(),
    }
  }
}
