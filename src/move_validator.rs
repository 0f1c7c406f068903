use thiserror::Error;

use crate::peg::Disk;
use crate::puzzle_state::{PuzzleState, NUM_PEGS};

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum IllegalMove {
  #[error("peg {0} does not exist")]
  PegOutOfRange(usize),

  #[error("peg {0} has no disk to move")]
  EmptySource(usize),

  #[error("source and destination are both peg {0}")]
  SamePeg(usize),

  #[error("disk {moving} cannot rest on smaller disk {resting}")]
  LargerOntoSmaller { moving: Disk, resting: Disk },
}

pub fn is_legal_move(state: &PuzzleState, src_peg: usize, dst_peg: usize) -> bool {
  check_move(state, src_peg, dst_peg).is_ok()
}

/// Same decision as [is_legal_move], with the reason a move was refused.
pub fn check_move(state: &PuzzleState, src_peg: usize, dst_peg: usize) -> Result<(), IllegalMove> {
  for peg in [src_peg, dst_peg] {
    if peg >= NUM_PEGS {
      return Err(IllegalMove::PegOutOfRange(peg));
    }
  }

  let moving = state.peg(src_peg).top().ok_or(IllegalMove::EmptySource(src_peg))?;
  let resting = match state.peg(dst_peg).top() {
    None => return Ok(()),
    Some(resting) => resting,
  };

  if src_peg == dst_peg {
    return Err(IllegalMove::SamePeg(src_peg));
  }
  if moving > resting {
    return Err(IllegalMove::LargerOntoSmaller { moving, resting });
  }
  Ok(())
}
