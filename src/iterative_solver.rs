use log::debug;

use crate::puzzle_state::{DiskMove, Height, PuzzleState};
use crate::solution::{HanoiSolution, SolveError};

/// Next peg in the rotation, indexed by `src + 1 + direction`.  Saves a `% 3`.
const NEXT_PEG: [usize; 5] = [0, 1, 2, 0, 1];

/// Produces the optimal solution without recursion and without looking at the
/// pegs: every move is derived from the move index and the height alone.
pub struct IterativeSolver;

impl IterativeSolver {
  pub fn solve<F>(state: &mut PuzzleState, mut on_move: F) -> Result<(), SolveError>
  where
      F: FnMut(&DiskMove, &PuzzleState) {
    if !state.is_initial() {
      return Err(SolveError::NotInitialState { move_count: state.move_count() });
    }
    debug!("Solving {} disks iteratively", state.height());
    for disk_move in GrayCodeMoves::new(state.height()) {
      state
          .move_unchecked(disk_move.src_peg, disk_move.dst_peg)
          .map_err(|e| SolveError::Peg(disk_move, e))?;
      on_move(&disk_move, &*state);
    }
    debug!("Solved in {} moves", state.move_count());
    Ok(())
  }

  pub fn solve_collect(state: &mut PuzzleState) -> Result<HanoiSolution, SolveError> {
    let mut required_moves = Vec::new();
    Self::solve(state, |disk_move, _| required_moves.push(*disk_move))?;
    return Ok(HanoiSolution { required_moves });
  }
}

/// The optimal move sequence for a tower of `height` disks from peg 0 to peg 2.
#[derive(Debug, Clone)]
pub struct GrayCodeMoves {
  height: Height,
  index: u64,
  end: u64,
}

impl GrayCodeMoves {
  pub fn new(height: Height) -> Self {
    Self { height, index: 0, end: height.minimum_moves() }
  }

  /// Which move happens at step `index` (zero based) of a `height` disk solve.
  /// `index` must be below [Height::minimum_moves].
  pub fn move_at(height: Height, index: u64) -> DiskMove {
    let height = u32::from(height.get());

    // The disk that moves is the one whose bit flips in the Gray code of index + 1.
    let disk = (index + 1).trailing_zeros() + 1;

    // Disks with the same parity as the height rotate 0 -> 2 -> 1, the
    // others 0 -> 1 -> 2.
    let direction = (disk ^ (height - 1)) & 1;

    // The higher bits count how often this disk has already moved.
    let src_peg = ((index >> (disk - direction)) % 3) as usize;
    let dst_peg = NEXT_PEG[src_peg + 1 + direction as usize];

    DiskMove::new(src_peg, dst_peg)
  }
}

impl Iterator for GrayCodeMoves {
  type Item = DiskMove;

  fn next(&mut self) -> Option<Self::Item> {
    if self.index >= self.end {
      return None;
    }
    let disk_move = Self::move_at(self.height, self.index);
    self.index += 1;
    Some(disk_move)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    match usize::try_from(self.end - self.index) {
      Ok(remaining) => (remaining, Some(remaining)),
      Err(_) => (usize::MAX, None),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::recursive_solver::RecursiveSolver;

  fn new_state(height: u8) -> PuzzleState {
    PuzzleState::new(Height::new(height).unwrap())
  }

  #[test]
  fn test_single_disk() {
    let mut state = new_state(1);
    let solution = IterativeSolver::solve_collect(&mut state).unwrap();
    assert_eq!(solution.required_moves, vec![DiskMove::new(0, 2)]);
    assert_eq!(state.peg(2).disks(), &[1]);
  }

  #[test]
  fn test_three_disks_canonical_sequence() {
    let mut state = new_state(3);
    let solution = IterativeSolver::solve_collect(&mut state).unwrap();
    let pairs: Vec<(usize, usize)> = solution.required_moves
        .iter()
        .map(|m| (m.src_peg, m.dst_peg))
        .collect();
    assert_eq!(pairs, vec![(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)]);
    assert_eq!(state.peg(2).disks(), &[3, 2, 1]);
    assert_eq!(state.move_count(), 7);
  }

  #[test]
  fn test_even_height_first_move_goes_to_middle_peg() {
    let mut moves = GrayCodeMoves::new(Height::new(4).unwrap());
    assert_eq!(moves.next(), Some(DiskMove::new(0, 1)));
    assert_eq!(moves.next(), Some(DiskMove::new(0, 2)));
    assert_eq!(moves.next(), Some(DiskMove::new(1, 2)));
  }

  #[test]
  fn test_matches_recursive_solver() {
    for height in 1..=16u8 {
      let mut iterative_state = new_state(height);
      let mut recursive_state = new_state(height);
      let iterative = IterativeSolver::solve_collect(&mut iterative_state).unwrap();
      let recursive = RecursiveSolver::solve_collect(&mut recursive_state).unwrap();

      let expected = (1u64 << height) - 1;
      assert_eq!(iterative.required_moves.len() as u64, expected);
      assert_eq!(iterative, recursive, "height {}", height);
      assert_eq!(iterative_state, recursive_state);
      assert_eq!(iterative_state.move_count(), expected);
      assert!(iterative_state.is_solved());
    }
  }

  #[test]
  fn test_every_move_is_legal() {
    for height in [5u8, 8] {
      let mut replay = new_state(height);
      for disk_move in GrayCodeMoves::new(Height::new(height).unwrap()) {
        let outcome = replay.move_with_check(disk_move.src_peg, disk_move.dst_peg);
        assert!(outcome.is_applied(), "{} rejected: {:?}", disk_move, outcome);
      }
      assert!(replay.is_solved());
    }
  }

  #[test]
  fn test_tallest_tower_starts_legally() {
    let height = Height::new(63).unwrap();
    let mut replay = PuzzleState::new(height);
    for disk_move in GrayCodeMoves::new(height).take(4096) {
      assert!(replay.move_with_check(disk_move.src_peg, disk_move.dst_peg).is_applied());
    }
    assert_eq!(replay.move_count(), 4096);
  }

  #[test]
  fn test_move_at_last_step_lands_on_target() {
    for height in 1..=63u8 {
      let height = Height::new(height).unwrap();
      let last = height.minimum_moves() - 1;
      assert_eq!(GrayCodeMoves::move_at(height, last).dst_peg, 2, "height {}", height);
      assert_eq!(GrayCodeMoves::move_at(height, 0).src_peg, 0);
    }
  }

  #[test]
  fn test_size_hint() {
    let moves = GrayCodeMoves::new(Height::new(10).unwrap());
    assert_eq!(moves.size_hint(), (1023, Some(1023)));
    assert_eq!(moves.count(), 1023);
  }
}
