use rand::{RngCore, SeedableRng};
use sparselife::change_set::{self, Board};
use sparselife::coord::{sorted, Coord, LiveSet};
use sparselife::full_rescan;
use sparselife::patterns::{ACORN, R_PENTOMINO};
use sparselife::{ChangeSetEngine, FullRescanEngine, Rule, GAME_OF_LIFE};

fn random_soup(width: i64, height: i64, density: f64, seed: u64) -> Vec<Coord> {
  let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
  let threshold = (u64::MAX as f64 * density) as u64;
  let mut cells = vec![];
  for y in -(height / 2)..=(height / 2) {
    for x in -(width / 2)..=(width / 2) {
      if rng.next_u64() <= threshold {
        cells.push(Coord::new(x, y));
      }
    }
  }
  cells
}

/// Both engines must agree on every generation, not just the last one.
fn assert_engines_agree(rule: Rule, seed: &[Coord], generations: u64, parallel: bool) {
  let change_set = ChangeSetEngine::new(rule).parallel(parallel);
  let full_rescan = FullRescanEngine::new(rule).parallel(parallel);

  let mut board = Board::seeded(seed.iter().copied());
  let mut alive: LiveSet = seed.iter().copied().collect();
  for generation in 1..=generations {
    board = change_set.step(board);
    alive = full_rescan.step(&alive);
    assert_eq!(
      sorted(&board.live_cells()),
      sorted(&alive),
      "live-set mismatch at generation {} for rule {}",
      generation,
      rule,
    );
  }
}

#[test]
fn r_pentomino_1000_generations() {
  assert_engines_agree(GAME_OF_LIFE, &R_PENTOMINO, 1000, false);
}

#[test]
fn acorn_300_generations() {
  assert_engines_agree(GAME_OF_LIFE, &ACORN, 300, false);
}

#[test]
fn random_soups() {
  for (density, seed) in [(0.10, 0xA1u64), (0.35, 0xB2), (0.60, 0xC3)] {
    assert_engines_agree(GAME_OF_LIFE, &random_soup(48, 48, density, seed), 40, false);
  }
}

#[test]
fn random_soups_parallel() {
  for seed in [11u64, 22, 33] {
    assert_engines_agree(GAME_OF_LIFE, &random_soup(64, 64, 0.4, seed), 30, true);
  }
}

#[test]
fn other_rules() {
  let soup = random_soup(40, 40, 0.3, 0x5EED);
  for rule in ["B36/S23", "B2/S", "B3/S012345678", "B34/S34"] {
    assert_engines_agree(rule.parse().unwrap(), &soup, 25, false);
  }
}

#[test]
fn free_functions_match_engines() {
  let mut board = Board::seeded(R_PENTOMINO.iter().copied());
  let mut alive: LiveSet = R_PENTOMINO.iter().copied().collect();
  for _ in 0..100 {
    board = change_set::advance(board);
    alive = full_rescan::advance(&alive);
  }
  assert_eq!(board.live_cells(), alive);
  assert_eq!(alive.len(), 121);
}
