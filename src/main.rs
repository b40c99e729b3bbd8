use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use sparselife::config::LifeConfig;
use sparselife::coord::Coord;
use sparselife::driver::run_benchmark;
use sparselife::error::ArgsError;
use sparselife::patterns::{self, Pattern};
use sparselife::rle;

const USAGE: &str = "usage: sparselife [--engine change-set|full-rescan] [--generations N] \
[--trials N] [--rule B3/S23] [--pattern NAME] [--parallel] [--show-work] [PATTERN.rle]";

#[derive(Debug)]
enum Seed {
  Builtin(&'static Pattern),
  File(PathBuf),
}

#[derive(Debug)]
struct MainArgs {
  config: LifeConfig,
  /// `--rule` overrides the rule named in a pattern file.
  rule_given: bool,
  seed: Seed,
}

fn parse_value<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, ArgsError> {
  value.parse().map_err(|_| ArgsError::InvalidValue {
    flag,
    value: value.to_owned(),
  })
}

fn next_value<'a>(
  iter: &mut impl Iterator<Item = &'a String>,
  flag: &'static str,
) -> Result<&'a str, ArgsError> {
  iter.next().map(String::as_str).ok_or(ArgsError::MissingValue(flag))
}

fn parse_args(args: &[String]) -> Result<MainArgs, ArgsError> {
  let mut config = LifeConfig::default();
  let mut rule_given = false;
  let mut seed = Seed::Builtin(&patterns::PATTERNS[0]);

  let mut iter = args.iter().skip(1);
  while let Some(arg) = iter.next() {
    match arg.as_str() {
      "--engine" => {
        config = config.engine(parse_value("--engine", next_value(&mut iter, "--engine")?)?);
      }
      "--generations" => {
        config = config.generations(parse_value("--generations", next_value(&mut iter, "--generations")?)?);
      }
      "--trials" => {
        config = config.trials(parse_value("--trials", next_value(&mut iter, "--trials")?)?);
      }
      "--rule" => {
        config = config.rule(parse_value("--rule", next_value(&mut iter, "--rule")?)?);
        rule_given = true;
      }
      "--pattern" => {
        let name = next_value(&mut iter, "--pattern")?;
        let pattern = patterns::by_name(name).ok_or_else(|| ArgsError::InvalidValue {
          flag: "--pattern",
          value: name.to_owned(),
        })?;
        seed = Seed::Builtin(pattern);
      }
      "--parallel" => {
        config = config.parallel(true);
      }
      "--show-work" => {
        config = config.show_work(true);
      }
      other if other.starts_with("--") => {
        return Err(ArgsError::Unknown(other.to_owned()));
      }
      path => {
        seed = Seed::File(PathBuf::from(path));
      }
    }
  }

  Ok(MainArgs { config, rule_given, seed })
}

fn main() -> anyhow::Result<()> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let subscriber = FmtSubscriber::builder()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .finish();
  tracing::subscriber::set_global_default(subscriber)?;

  let args: Vec<String> = std::env::args().collect();
  let MainArgs { mut config, rule_given, seed } = parse_args(&args)
    .with_context(|| USAGE.to_owned())?;

  let cells: Vec<Coord> = match seed {
    Seed::Builtin(pattern) => {
      info!(pattern = pattern.name, "using built-in pattern");
      pattern.cells.to_vec()
    }
    Seed::File(path) => {
      let src = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
      let pattern = rle::read(src)
        .with_context(|| format!("failed to parse {}", path.display()))?;
      if let (Some(rule), false) = (pattern.rule, rule_given) {
        config = config.rule(rule);
      }
      info!(path = %path.display(), cells = pattern.cells.len(), "loaded pattern");
      pattern.cells
    }
  };

  info!(
    engine = %config.engine,
    rule = %config.rule,
    generations = config.generations,
    trials = config.trials,
    parallel = config.parallel,
    "starting benchmark"
  );

  let stdout = io::stdout();
  let mut out = stdout.lock();
  let report = run_benchmark(&config, &cells, &mut out)?;
  writeln!(
    out,
    "{:.2} generations per second, mean of {} trials",
    report.mean_generations_per_second(),
    report.trials.len(),
  )?;
  Ok(())
}
