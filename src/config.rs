use std::time::Duration;
use crate::engine::EngineKind;
use crate::rule::{Rule, GAME_OF_LIFE};

pub const DEFAULT_GENERATIONS: u64 = 1000;
pub const DEFAULT_TRIALS: u32 = 5;
/// 30 frames per second.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(1000 / 30);

/// Settings of a benchmark run.
///
/// Start from `LifeConfig::default()` and adjust individual knobs via the
/// builder methods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeConfig {
  pub rule: Rule,
  pub engine: EngineKind,
  /// Classify cells on the rayon global pool.
  pub parallel: bool,
  /// Generations advanced per trial.
  pub generations: u64,
  pub trials: u32,
  /// Render every generation to the terminal.
  pub show_work: bool,
  /// Pause after each rendered frame.
  pub frame_delay: Duration,
}

impl Default for LifeConfig {
  fn default() -> Self {
    Self {
      rule: GAME_OF_LIFE,
      engine: EngineKind::default(),
      parallel: false,
      generations: DEFAULT_GENERATIONS,
      trials: DEFAULT_TRIALS,
      show_work: false,
      frame_delay: DEFAULT_FRAME_DELAY,
    }
  }
}

impl LifeConfig {
  pub fn rule(mut self, rule: Rule) -> Self {
    self.rule = rule;
    self
  }

  pub fn engine(mut self, engine: EngineKind) -> Self {
    self.engine = engine;
    self
  }

  pub fn parallel(mut self, parallel: bool) -> Self {
    self.parallel = parallel;
    self
  }

  pub fn generations(mut self, n: u64) -> Self {
    self.generations = n;
    self
  }

  /// At least one trial always runs.
  pub fn trials(mut self, n: u32) -> Self {
    self.trials = n.max(1);
    self
  }

  pub fn show_work(mut self, show: bool) -> Self {
    self.show_work = show;
    self
  }

  pub fn frame_delay(mut self, delay: Duration) -> Self {
    self.frame_delay = delay;
    self
  }
}
