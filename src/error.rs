use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
  #[error("neighbor count {0} is out of range 0..=8")]
  CountOutOfRange(u8),
  #[error("B0 is not supported by the sparse engines")]
  BirthOnZero,
  #[error("invalid rule notation {0:?}, expected e.g. \"B3/S23\"")]
  Syntax(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RleError {
  #[error("missing `x = .., y = ..` header line")]
  MissingHeader,
  #[error("invalid header line {0:?}")]
  InvalidHeader(String),
  #[error("invalid character {0:?} in pattern body")]
  InvalidCharacter(char),
  #[error("pattern body is not terminated by `!`")]
  UnexpectedEof,
  #[error("run count does not fit the coordinate range")]
  RunOverflow,
  #[error("run of {run} exceeds the {limit} cells of the pattern box")]
  RunOutOfRange { run: i64, limit: i64 },
  #[error("invalid rule in header: {0}")]
  Rule(#[from] RuleError),
  #[error("header regex: {0}")]
  Regex(String),
}

/// Command line errors of the `sparselife` binary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
  #[error("{0} requires a value")]
  MissingValue(&'static str),
  #[error("invalid value {value:?} for {flag}")]
  InvalidValue { flag: &'static str, value: String },
  #[error("unknown argument: {0}")]
  Unknown(String),
}
