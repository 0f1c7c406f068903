use serde::Serialize;
use thiserror::Error;

/// Disk sizes run from 1 (smallest) up to the puzzle height.
pub type Disk = u8;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum PegError {
  #[error("cannot pop from an empty peg")]
  Empty,

  #[error("peg {0} does not exist")]
  NoSuchPeg(usize),
}

/// A bounded stack of disks, bottom first.  Only the top is ever touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Peg {
  disks: Vec<Disk>,
  capacity: usize,
}

impl Peg {
  pub fn with_capacity(capacity: usize) -> Self {
    Self { disks: Vec::with_capacity(capacity), capacity }
  }

  /// Places `disk` on top.  Callers are responsible for the size rule; use
  /// [crate::move_validator::is_legal_move] when the move isn't known to be good.
  pub fn push(&mut self, disk: Disk) {
    debug_assert!(self.disks.len() < self.capacity, "peg over capacity {}", self.capacity);
    debug_assert!(
      self.top().map_or(true, |top| disk < top),
      "disk {} placed on smaller disk {:?}",
      disk,
      self.top());
    self.disks.push(disk);
  }

  pub fn pop(&mut self) -> Result<Disk, PegError> {
    self.disks.pop().ok_or(PegError::Empty)
  }

  pub fn top(&self) -> Option<Disk> {
    self.disks.last().copied()
  }

  pub fn len(&self) -> usize {
    self.disks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.disks.is_empty()
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Bottom to top.
  pub fn disks(&self) -> &[Disk] {
    &self.disks
  }
}
