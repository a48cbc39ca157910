//! Progress reporting for long refreshes.

use std::io;
use std::io::Write;

/// The width of the bar, in characters.
const BAR_WIDTH: usize = 30;

/// A single-line progress bar.
///
/// The bar is redrawn in place after every completed unit of work. Failing to
/// draw it is never an error; progress output is best-effort.
pub struct Progress<W: Write> {
  out: W,
  label: String,
  completed: usize,
  total: usize,
}

impl Progress<io::Stderr> {
  /// Creates a progress bar that draws to standard error.
  pub fn stderr() -> Self {
    Self::new(io::stderr())
  }
}

impl<W: Write> Progress<W> {
  /// Creates a new progress bar drawing to `out`.
  pub fn new(out: W) -> Self {
    Self {
      out,
      label: String::new(),
      completed: 0,
      total: 0,
    }
  }

  /// Starts tracking a new batch of `total` units of work.
  pub fn start(&mut self, label: impl Into<String>, total: usize) {
    self.label = label.into();
    self.completed = 0;
    self.total = total;
  }

  /// Marks one more unit of work as done and redraws the bar.
  pub fn inc_completed(&mut self, message: &str) {
    self.completed = (self.completed + 1).min(self.total);
    let filled = if self.total == 0 {
      BAR_WIDTH
    } else {
      self.completed * BAR_WIDTH / self.total
    };

    let _ = write!(
      self.out,
      "\r{} [{}{}] {}/{} {:<24}",
      self.label,
      "#".repeat(filled),
      " ".repeat(BAR_WIDTH - filled),
      self.completed,
      self.total,
      message,
    );
    let _ = self.out.flush();
  }

  /// Ends the current line.
  pub fn finish(&mut self) {
    let _ = writeln!(self.out);
  }

  /// Returns the number of completed units of work.
  pub fn completed(&self) -> usize {
    self.completed
  }

  /// Returns the total number of units of work.
  pub fn total(&self) -> usize {
    self.total
  }

  /// Consumes the bar, returning its output.
  pub fn into_inner(self) -> W {
    self.out
  }
}
