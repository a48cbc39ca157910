//! Box storage coordinates.
//!
//! Pokemon are packed into storage boxes in National Dex order: each box is a
//! grid of `rows` by `cols` slots, filled left to right, top to bottom.

use std::fmt;

/// The default number of rows in a box.
pub const DEFAULT_ROWS: i64 = 5;
/// The default number of columns in a box.
pub const DEFAULT_COLS: i64 = 6;

/// Rejected input to a coordinate computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
  #[error("Pokemon id can't be under 1 (got {0})")]
  InvalidId(i64),

  #[error("box {what} must be a positive integer (got {value})")]
  InvalidGeometry { what: &'static str, value: i64 },
}

/// The shape of a storage box.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Geometry {
  rows: u64,
  cols: u64,
}

/// A slot in box storage. All three coordinates are 1-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Slot {
  /// The box number.
  pub r#box: u64,
  /// The row within the box.
  pub row: u64,
  /// The column within the row.
  pub col: u64,
}

impl Geometry {
  /// Creates a new [`Geometry`], rejecting non-positive dimensions.
  pub fn new(rows: i64, cols: i64) -> Result<Self, Error> {
    if rows < 1 {
      return Err(Error::InvalidGeometry {
        what: "rows",
        value: rows,
      });
    }
    if cols < 1 {
      return Err(Error::InvalidGeometry {
        what: "columns",
        value: cols,
      });
    }
    Ok(Self {
      rows: rows as u64,
      cols: cols as u64,
    })
  }

  /// Returns the number of rows per box.
  pub fn rows(&self) -> u64 {
    self.rows
  }

  /// Returns the number of columns per box.
  pub fn cols(&self) -> u64 {
    self.cols
  }

  /// Returns the number of slots in one box, saturating at `u64::MAX`.
  ///
  /// Ids never exceed `i64::MAX`, so a saturated capacity still places every
  /// id in the first box.
  pub fn capacity(&self) -> u64 {
    self.rows.saturating_mul(self.cols)
  }

  /// Computes the slot that National Dex number `id` is stored in.
  pub fn locate(&self, id: i64) -> Result<Slot, Error> {
    if id < 1 {
      return Err(Error::InvalidId(id));
    }

    let work_id = id as u64 - 1;
    let position = work_id % self.capacity();
    Ok(Slot {
      r#box: work_id / self.capacity() + 1,
      row: position / self.cols + 1,
      col: position % self.cols + 1,
    })
  }
}

impl Default for Geometry {
  fn default() -> Self {
    Self {
      rows: DEFAULT_ROWS as u64,
      cols: DEFAULT_COLS as u64,
    }
  }
}

impl fmt::Display for Slot {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Box: {}, line: {}, column: {}", self.r#box, self.row, self.col)
  }
}
