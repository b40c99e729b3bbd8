use std::fmt::{self, Display};
use std::str::FromStr;
use crate::error::RuleError;

/// Outer totalistic rule over the Moore neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
  birth: NeighborMask,
  survival: NeighborMask,
}

/// Bit `n` is set when `n` live neighbors trigger the transition.
pub type NeighborMask = u16;

pub const GAME_OF_LIFE: Rule = Rule {
  birth: 0b000001000,
  survival: 0b000001100,
};

impl Default for Rule {
  fn default() -> Self {
    GAME_OF_LIFE
  }
}

impl Rule {
  pub fn from_counts(birth: &[u8], survival: &[u8]) -> Result<Self, RuleError> {
    let mut rule = Rule { birth: 0, survival: 0 };
    for &num in birth {
      rule.set_birth(num)?;
    }
    for &num in survival {
      rule.set_survival(num)?;
    }
    Ok(rule)
  }

  fn set_birth(&mut self, num: u8) -> Result<(), RuleError> {
    if num > 8 {
      return Err(RuleError::CountOutOfRange(num));
    }
    if num == 0 {
      return Err(RuleError::BirthOnZero);
    }
    self.birth |= 1 << num;
    Ok(())
  }

  fn set_survival(&mut self, num: u8) -> Result<(), RuleError> {
    if num > 8 {
      return Err(RuleError::CountOutOfRange(num));
    }
    self.survival |= 1 << num;
    Ok(())
  }

  pub fn births(&self, count: u8) -> bool {
    self.birth >> count & 1 != 0
  }

  pub fn survives(&self, count: u8) -> bool {
    self.survival >> count & 1 != 0
  }

  /// State of a cell in the next generation.
  pub fn next_state(&self, alive: bool, count: u8) -> bool {
    if alive {
      self.survives(count)
    } else {
      self.births(count)
    }
  }

  /// Every birth count is also a survival count, so a cell whose neighbor
  /// count did not change keeps its state.
  pub fn births_survive(&self) -> bool {
    self.birth & !self.survival == 0
  }
}

impl Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "B")?;
    let mut b = self.birth;
    while b != 0 {
      write!(f, "{}", b.trailing_zeros())?;
      b &= b - 1;
    }
    write!(f, "/S")?;
    let mut s = self.survival;
    while s != 0 {
      write!(f, "{}", s.trailing_zeros())?;
      s &= s - 1;
    }
    Ok(())
  }
}

impl FromStr for Rule {
  type Err = RuleError;

  fn from_str(src: &str) -> Result<Self, Self::Err> {
    let syntax = || RuleError::Syntax(src.to_owned());
    let (b, s) = src.trim().split_once('/').ok_or_else(syntax)?;
    let b = b.strip_prefix(&['B', 'b'][..]).ok_or_else(syntax)?;
    let s = s.strip_prefix(&['S', 's'][..]).ok_or_else(syntax)?;

    let digits = |part: &str| -> Result<Vec<u8>, RuleError> {
      part.chars()
        .map(|c| c.to_digit(10).map(|d| d as u8).ok_or_else(syntax))
        .collect()
    };
    Rule::from_counts(&digits(b)?, &digits(s)?)
  }
}
