use pretty_assertions::assert_eq;
use sparselife::coord::{live_set, sorted, Coord, LiveSet};
use sparselife::engine::{EngineKind, Simulation};
use sparselife::patterns::{ACORN, BLINKER, BLOCK, GLIDER, R_PENTOMINO};
use sparselife::LifeConfig;

const ENGINES: [EngineKind; 2] = [EngineKind::ChangeSet, EngineKind::FullRescan];

fn simulate(kind: EngineKind, seed: &[Coord], generations: u64) -> LiveSet {
  let config = LifeConfig::default().engine(kind);
  let mut sim = Simulation::new(&config, seed);
  for _ in 0..generations {
    sim.step();
  }
  sim.live_cells()
}

#[test]
fn block_is_still_life() {
  for kind in ENGINES {
    let block: LiveSet = BLOCK.iter().copied().collect();
    assert_eq!(simulate(kind, &BLOCK, 1), block);
    assert_eq!(simulate(kind, &BLOCK, 10), block);
  }
}

#[test]
fn blinker_has_period_two() {
  for kind in ENGINES {
    assert_eq!(simulate(kind, &BLINKER, 1), live_set(&[(1, -1), (1, 0), (1, 1)]));
    assert_eq!(simulate(kind, &BLINKER, 2), live_set(&[(0, 0), (1, 0), (2, 0)]));
    assert_eq!(simulate(kind, &BLINKER, 101), live_set(&[(1, -1), (1, 0), (1, 1)]));
  }
}

#[test]
fn empty_stays_empty() {
  for kind in ENGINES {
    assert!(simulate(kind, &[], 1).is_empty());
    assert!(simulate(kind, &[], 5).is_empty());
  }
}

#[test]
fn isolated_cell_dies() {
  for kind in ENGINES {
    assert!(simulate(kind, &[Coord::new(-4, 9)], 1).is_empty());
  }
}

#[test]
fn cells_at_grid_edge() {
  let corner = [
    Coord::new(i64::MAX - 1, i64::MIN),
    Coord::new(i64::MAX, i64::MIN),
    Coord::new(i64::MAX - 1, i64::MIN + 1),
    Coord::new(i64::MAX, i64::MIN + 1),
  ];
  for kind in ENGINES {
    assert!(simulate(kind, &[Coord::new(i64::MAX, 0)], 1).is_empty());
    assert!(simulate(kind, &[Coord::new(3, i64::MIN)], 1).is_empty());
    let block: LiveSet = corner.iter().copied().collect();
    assert_eq!(simulate(kind, &corner, 5), block);
  }
}

#[test]
fn glider_travels() {
  for kind in ENGINES {
    let moved: LiveSet = GLIDER.iter().map(|c| c.offset(1, -1)).collect();
    assert_eq!(simulate(kind, &GLIDER, 4), moved);
    let far: LiveSet = GLIDER.iter().map(|c| c.offset(25, -25)).collect();
    assert_eq!(simulate(kind, &GLIDER, 100), far);
  }
}

#[test]
fn r_pentomino_first_generation() {
  let expected = vec![
    Coord::new(-1, -1), Coord::new(-1, 0), Coord::new(-1, 1),
    Coord::new(0, -1), Coord::new(0, 1),
    Coord::new(1, 1),
  ];
  for kind in ENGINES {
    assert_eq!(sorted(&simulate(kind, &R_PENTOMINO, 1)), expected);
  }
}

#[test]
fn r_pentomino_populations() {
  for kind in ENGINES {
    assert_eq!(simulate(kind, &R_PENTOMINO, 2).len(), 7);
    assert_eq!(simulate(kind, &R_PENTOMINO, 1000).len(), 156);
    assert_eq!(simulate(kind, &R_PENTOMINO, 1103).len(), 116);
  }
}

#[test]
fn acorn_populations() {
  for kind in ENGINES {
    assert_eq!(simulate(kind, &ACORN, 1).len(), 8);
    assert_eq!(simulate(kind, &ACORN, 2).len(), 10);
    assert_eq!(simulate(kind, &ACORN, 200).len(), 169);
  }
}
