use std::io::{self, Write};
use std::thread::sleep;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};
use crate::config::LifeConfig;
use crate::coord::Coord;
use crate::engine::Simulation;
use crate::render::write_frame;

#[derive(Clone, Debug, PartialEq)]
pub struct TrialReport {
  pub generations: u64,
  pub elapsed: Duration,
  /// Live cells after the last generation.
  pub population: usize,
}

impl TrialReport {
  pub fn generations_per_second(&self) -> f64 {
    if self.generations == 0 {
      return 0.0;
    }
    self.generations as f64 / self.elapsed.as_secs_f64()
  }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BenchmarkReport {
  pub trials: Vec<TrialReport>,
}

impl BenchmarkReport {
  pub fn mean_generations_per_second(&self) -> f64 {
    if self.trials.is_empty() {
      return 0.0;
    }
    let total: f64 = self.trials.iter().map(TrialReport::generations_per_second).sum();
    total / self.trials.len() as f64
  }
}

/// Advances a fresh simulation of `seed` for `config.generations`
/// generations, handing every generation to `on_frame`.
pub fn run_trial<F>(config: &LifeConfig, seed: &[Coord], mut on_frame: F) -> io::Result<TrialReport>
where
  F: FnMut(&Simulation) -> io::Result<()>,
{
  let mut sim = Simulation::new(config, seed);
  let start = Instant::now();
  for _ in 0..config.generations {
    sim.step();
    trace!(generation = sim.generation(), "advanced");
    on_frame(&sim)?;
  }
  let elapsed = start.elapsed();

  Ok(TrialReport {
    generations: sim.generation(),
    elapsed,
    population: sim.population(),
  })
}

/// Runs `config.trials` trials, each from a fresh copy of `seed`, writing
/// frames (when `show_work` is set) and one throughput line per trial to
/// `out`.
pub fn run_benchmark(
  config: &LifeConfig,
  seed: &[Coord],
  out: &mut impl Write,
) -> io::Result<BenchmarkReport> {
  let mut report = BenchmarkReport::default();
  for trial in 0..config.trials {
    debug!(trial, engine = %config.engine, rule = %config.rule, "starting trial");

    let result = if config.show_work {
      run_trial(config, seed, |sim| {
        write_frame(out, &sim.live_cells())?;
        sleep(config.frame_delay);
        Ok(())
      })?
    } else {
      run_trial(config, seed, |_| Ok(()))?
    };

    debug!(
      trial,
      elapsed = ?result.elapsed,
      population = result.population,
      "finished trial"
    );
    writeln!(out, "{:.2} generations per second", result.generations_per_second())?;
    report.trials.push(result);
  }

  info!(
    trials = report.trials.len(),
    mean = report.mean_generations_per_second(),
    "benchmark complete"
  );
  Ok(report)
}
