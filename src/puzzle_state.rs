use std::fmt;

use derive_new::new;
use log::trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::move_validator::{self, IllegalMove};
use crate::peg::{Disk, Peg, PegError};

pub const NUM_PEGS: usize = 3;

/// The move counter is a u64 and a full solve takes 2^N - 1 moves.
pub const MAX_HEIGHT: u8 = 63;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum HeightError {
  #[error("height must be at least 1")]
  Zero,
  #[error("height {0} exceeds the maximum of {}", MAX_HEIGHT)]
  TooLarge(u64),
}

/// Number of disks in a puzzle, already checked against [MAX_HEIGHT].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Height(u8);

impl Height {
  pub fn new(height: u8) -> Result<Self, HeightError> {
    match height {
      0 => Err(HeightError::Zero),
      h if h > MAX_HEIGHT => Err(HeightError::TooLarge(u64::from(h))),
      h => Ok(Self(h)),
    }
  }

  pub fn get(self) -> u8 {
    self.0
  }

  /// Length of the optimal solution, 2^N - 1.
  pub fn minimum_moves(self) -> u64 {
    u64::MAX >> (64 - u32::from(self.0))
  }
}

impl TryFrom<u8> for Height {
  type Error = HeightError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Height::new(value)
  }
}

impl TryFrom<u64> for Height {
  type Error = HeightError;

  fn try_from(value: u64) -> Result<Self, Self::Error> {
    let narrowed = u8::try_from(value).map_err(|_| HeightError::TooLarge(value))?;
    Height::new(narrowed)
  }
}

impl From<Height> for u8 {
  fn from(height: Height) -> Self {
    height.0
  }
}

impl fmt::Display for Height {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(new, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiskMove {
  pub src_peg: usize,
  pub dst_peg: usize,
}

impl fmt::Display for DiskMove {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} -> {}", self.src_peg, self.dst_peg)
  }
}

/// Result of a checked move.  A rejected move leaves the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
  Applied { disk: Disk },
  Rejected(IllegalMove),
}

impl MoveOutcome {
  pub fn is_applied(&self) -> bool {
    matches!(self, MoveOutcome::Applied { .. })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleState {
  height: Height,
  move_count: u64,
  pegs: [Peg; NUM_PEGS],
}

impl PuzzleState {
  /// All disks stacked on peg 0, largest at the bottom.
  pub fn new(height: Height) -> Self {
    let capacity = usize::from(height.get());
    let mut pegs = [
      Peg::with_capacity(capacity),
      Peg::with_capacity(capacity),
      Peg::with_capacity(capacity),
    ];
    for disk in (1..=height.get()).rev() {
      pegs[0].push(disk);
    }
    return PuzzleState { height, move_count: 0, pegs };
  }

  pub fn height(&self) -> Height {
    self.height
  }

  pub fn move_count(&self) -> u64 {
    self.move_count
  }

  pub fn pegs(&self) -> &[Peg; NUM_PEGS] {
    &self.pegs
  }

  /// Panics if `index` is not a valid peg.
  pub fn peg(&self, index: usize) -> &Peg {
    &self.pegs[index]
  }

  pub fn is_solved(&self) -> bool {
    let height = usize::from(self.height.get());
    self.pegs[1].len() == height || self.pegs[2].len() == height
  }

  /// True until the first disk has moved.
  pub fn is_initial(&self) -> bool {
    self.move_count == 0 && self.pegs[0].len() == usize::from(self.height.get())
  }

  /// Moves the top disk without consulting the size rule.  Only the solvers
  /// call this; their move sequences are legal by construction.  Both pegs are
  /// checked to exist before anything moves.
  pub fn move_unchecked(&mut self, src_peg: usize, dst_peg: usize) -> Result<Disk, PegError> {
    if let Some(&missing) = [src_peg, dst_peg].iter().find(|&&peg| peg >= NUM_PEGS) {
      return Err(PegError::NoSuchPeg(missing));
    }
    let disk = self.pegs[src_peg].pop()?;
    self.pegs[dst_peg].push(disk);
    self.move_count += 1;
    trace!("#{}: disk {} {} -> {}", self.move_count, disk, src_peg, dst_peg);
    Ok(disk)
  }

  pub fn move_with_check(&mut self, src_peg: usize, dst_peg: usize) -> MoveOutcome {
    if let Err(reason) = move_validator::check_move(self, src_peg, dst_peg) {
      return MoveOutcome::Rejected(reason);
    }
    match self.move_unchecked(src_peg, dst_peg) {
      Ok(disk) => MoveOutcome::Applied { disk },
      // check_move already proved both pegs exist and the source is non-empty.
      Err(PegError::Empty) => MoveOutcome::Rejected(IllegalMove::EmptySource(src_peg)),
      Err(PegError::NoSuchPeg(peg)) => MoveOutcome::Rejected(IllegalMove::PegOutOfRange(peg)),
    }
  }
}

impl fmt::Display for PuzzleState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, peg) in self.pegs.iter().enumerate() {
      if index > 0 {
        write!(f, " | ")?;
      }
      write!(f, "{:?}", peg.disks())?;
    }
    Ok(())
  }
}
