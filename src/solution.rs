use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::peg::PegError;
use crate::puzzle_state::DiskMove;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SolveError {
  #[error("puzzle must be in its initial configuration (move count {move_count})")]
  NotInitialState { move_count: u64 },

  #[error("solver produced an impossible move {0}: {1}")]
  Peg(DiskMove, #[source] PegError),
}

/// Serialized form is what `moves_generator --json` prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HanoiSolution {
  pub required_moves: Vec<DiskMove>,
}
