use log::debug;

use crate::puzzle_state::{DiskMove, PuzzleState};
use crate::solution::{HanoiSolution, SolveError};

/// The textbook divide-and-conquer solution.  Call depth equals the number of
/// disks, which [crate::puzzle_state::MAX_HEIGHT] keeps small.
pub struct RecursiveSolver;

impl RecursiveSolver {
  /// Moves the whole tower from peg 0 to peg 2, reporting every move to `on_move`.
  pub fn solve<F>(state: &mut PuzzleState, mut on_move: F) -> Result<(), SolveError>
  where
      F: FnMut(&DiskMove, &PuzzleState) {
    if !state.is_initial() {
      return Err(SolveError::NotInitialState { move_count: state.move_count() });
    }
    let height = state.height();
    debug!("Solving {} disks recursively", height);
    Self::solve_tower(state, height.get(), 0, 2, 1, &mut on_move)?;
    debug!("Solved in {} moves", state.move_count());
    Ok(())
  }

  pub fn solve_collect(state: &mut PuzzleState) -> Result<HanoiSolution, SolveError> {
    let mut required_moves = Vec::new();
    Self::solve(state, |disk_move, _| required_moves.push(*disk_move))?;
    return Ok(HanoiSolution { required_moves });
  }

  /// Moves the top `disk_count` disks of `from` onto `to`, using `aux` as the spare.
  /// The three pegs must be distinct and in range.
  pub fn solve_tower<F>(
      state: &mut PuzzleState,
      disk_count: u8,
      from: usize,
      to: usize,
      aux: usize,
      on_move: &mut F,
  ) -> Result<(), SolveError>
  where
      F: FnMut(&DiskMove, &PuzzleState) {
    if disk_count == 0 {
      return Ok(());
    }
    Self::solve_tower(state, disk_count - 1, from, aux, to, on_move)?;

    let disk_move = DiskMove::new(from, to);
    state.move_unchecked(from, to).map_err(|e| SolveError::Peg(disk_move, e))?;
    on_move(&disk_move, &*state);

    Self::solve_tower(state, disk_count - 1, aux, to, from, on_move)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::puzzle_state::Height;

  fn new_state(height: u8) -> PuzzleState {
    PuzzleState::new(Height::new(height).unwrap())
  }

  #[test]
  fn test_single_disk() {
    let mut state = new_state(1);
    let solution = RecursiveSolver::solve_collect(&mut state).unwrap();
    assert_eq!(solution.required_moves, vec![DiskMove::new(0, 2)]);
    assert_eq!(state.peg(2).disks(), &[1]);
    assert_eq!(state.move_count(), 1);
  }

  #[test]
  fn test_three_disks_canonical_sequence() {
    let mut state = new_state(3);
    let solution = RecursiveSolver::solve_collect(&mut state).unwrap();
    let pairs: Vec<(usize, usize)> = solution.required_moves
        .iter()
        .map(|m| (m.src_peg, m.dst_peg))
        .collect();
    assert_eq!(pairs, vec![(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)]);
    assert_eq!(state.peg(2).disks(), &[3, 2, 1]);
    assert!(state.peg(0).is_empty());
    assert!(state.peg(1).is_empty());
  }

  #[test]
  fn test_move_count_and_solved() {
    for height in 1..=16u8 {
      let mut state = new_state(height);
      let mut observed = 0u64;
      RecursiveSolver::solve(&mut state, |_, _| observed += 1).unwrap();
      let expected = (1u64 << height) - 1;
      assert_eq!(observed, expected);
      assert_eq!(state.move_count(), expected);
      assert!(state.is_solved());
      assert_eq!(state.peg(2).len(), usize::from(height));
    }
  }

  #[test]
  fn test_every_move_is_legal() {
    let mut state = new_state(6);
    let mut replay = new_state(6);
    RecursiveSolver::solve(&mut state, |disk_move, _| {
      assert!(replay.move_with_check(disk_move.src_peg, disk_move.dst_peg).is_applied());
    }).unwrap();
    assert_eq!(replay, state);
  }

  #[test]
  fn test_partial_tower() {
    let mut state = new_state(4);
    let mut moves = 0;
    RecursiveSolver::solve_tower(&mut state, 2, 0, 1, 2, &mut |_: &DiskMove, _: &PuzzleState| moves += 1).unwrap();
    assert_eq!(moves, 3);
    assert_eq!(state.peg(0).disks(), &[4, 3]);
    assert_eq!(state.peg(1).disks(), &[2, 1]);
  }

  #[test]
  fn test_refuses_already_started_puzzle() {
    let mut state = new_state(3);
    state.move_with_check(0, 1);
    assert_eq!(
      RecursiveSolver::solve_collect(&mut state),
      Err(SolveError::NotInitialState { move_count: 1 }));
  }
}
