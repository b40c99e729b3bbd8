use regex::Regex;
use crate::coord::*;
use crate::error::RleError;
use crate::rule::Rule;

const MAX_LINE_LEN: usize = 70;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RlePattern {
  pub cells: Vec<Coord>,
  /// Rule named in the header, if any.
  pub rule: Option<Rule>,
}

/// Read a Life pattern from a RLE string.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>.
///
/// Rows run towards decreasing `y`. The top-left corner of the `x`/`y` box
/// is placed at `(-(x / 2), y / 2)`, so the pattern sits around the origin.
pub fn read(src: impl AsRef<str>) -> Result<RlePattern, RleError> {
  let header_re = Regex::new(r"^x\s*=\s*(\d+)\s*,\s*y\s*=\s*(\d+)(?:\s*,\s*rule\s*=\s*(\S+))?")
    .map_err(|e| RleError::Regex(e.to_string()))?;

  let mut lines = src.as_ref()
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty() && !line.starts_with('#'));

  let header = lines.next().ok_or(RleError::MissingHeader)?;
  if !header.starts_with('x') {
    return Err(RleError::MissingHeader);
  }
  let caps = header_re.captures(header)
    .ok_or_else(|| RleError::InvalidHeader(header.to_owned()))?;
  let dimension = |i: usize| -> Result<i64, RleError> {
    caps[i].parse().map_err(|_| RleError::InvalidHeader(header.to_owned()))
  };
  let width = dimension(1)?;
  let height = dimension(2)?;
  let rule = caps.get(3).map(|m| m.as_str().parse::<Rule>()).transpose()?;

  let left = -(width / 2);
  let mut x = left;
  let mut y = height / 2;
  let mut run: Option<i64> = None;
  let mut cells = vec![];

  for c in lines.flat_map(str::chars) {
    if c.is_whitespace() {
      continue;
    }
    if let Some(d) = c.to_digit(10) {
      run = Some(
        run.unwrap_or(0)
          .checked_mul(10)
          .and_then(|n| n.checked_add(d as i64))
          .ok_or(RleError::RunOverflow)?,
      );
      continue;
    }

    let num = run.take().unwrap_or(1);
    // a run never spans more than the header box
    let limit = if c == '$' { height.max(1) } else { width.max(1) };
    if matches!(c, 'b' | 'o' | '$') && num > limit {
      return Err(RleError::RunOutOfRange { run: num, limit });
    }
    match c {
      'b' => {
        x = x.checked_add(num).ok_or(RleError::RunOverflow)?;
      }
      'o' => {
        let end = x.checked_add(num).ok_or(RleError::RunOverflow)?;
        cells.extend((x..end).map(|x| Coord::new(x, y)));
        x = end;
      }
      '$' => {
        x = left;
        y = y.checked_sub(num).ok_or(RleError::RunOverflow)?;
      }
      '!' => {
        return Ok(RlePattern { cells, rule });
      }
      c => {
        return Err(RleError::InvalidCharacter(c));
      }
    }
  }

  Err(RleError::UnexpectedEof)
}

/// Write a Life pattern to a RLE string.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>.
pub fn write(cells: &LiveSet, rule: &Rule) -> String {
  if cells.is_empty() {
    return format!("x = 0, y = 0, rule = {}\n!\n", rule);
  }

  let (min, max) = bounding_box(cells);
  let mut output = format!(
    "x = {}, y = {}, rule = {}\n",
    max.x - min.x + 1,
    max.y - min.y + 1,
    rule
  );

  let mut units = vec![];
  let mut pending_rows = 0;
  for y in (min.y..=max.y).rev() {
    if y != max.y {
      pending_rows += 1;
    }

    let mut row: Vec<(i64, RleUnit)> = vec![];
    for x in min.x..=max.x {
      let unit = if cells.contains(&Coord::new(x, y)) {
        RleUnit::Alive
      } else {
        RleUnit::Dead
      };
      if let Some((num, last)) = row.last_mut() {
        if *last == unit {
          *num += 1;
          continue;
        }
      }
      row.push((1, unit));
    }
    if let Some((_, RleUnit::Dead)) = row.last() {
      row.pop();
    }
    if row.is_empty() {
      continue;
    }

    if pending_rows > 0 {
      units.push((pending_rows, RleUnit::NextRow));
      pending_rows = 0;
    }
    units.extend(row);
  }

  let mut line_len = 0;
  for (num, unit) in units {
    let buf = unit.encode(num);
    if line_len + buf.len() > MAX_LINE_LEN {
      output.push('\n');
      line_len = 0;
    }
    line_len += buf.len();
    output.push_str(&buf);
  }

  output.push('!');
  output.push('\n');
  output
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum RleUnit {
  Dead,
  Alive,
  NextRow,
}

impl RleUnit {
  fn encode(self, num: i64) -> String {
    let c = match self {
      Self::Dead => 'b',
      Self::Alive => 'o',
      Self::NextRow => '$',
    };

    if num == 1 {
      c.to_string()
    } else {
      format!("{}{}", num, c)
    }
  }
}
