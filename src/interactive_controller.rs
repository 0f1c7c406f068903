use std::io::BufRead;

use anyhow::{bail, Context};
use log::{debug, info, warn};

use crate::puzzle_state::{DiskMove, MoveOutcome, PuzzleState};
use crate::renderer::BoardRenderer;

/// Where candidate moves come from, typically a person at a terminal.
pub trait MoveSource {
  /// The next candidate, or `None` once no more input will arrive.
  fn next_move(&mut self) -> anyhow::Result<Option<DiskMove>>;
}

/// Reads one move per line as two 1-based peg numbers, e.g. `1 3`.
pub struct LineMoveSource<R: BufRead> {
  reader: R,
  line: String,
}

impl<R: BufRead> LineMoveSource<R> {
  pub fn new(reader: R) -> Self {
    Self { reader, line: String::new() }
  }

  fn parse(line: &str) -> Option<DiskMove> {
    let mut pegs = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<usize>().ok().and_then(|peg| peg.checked_sub(1)));
    let src_peg = pegs.next()??;
    let dst_peg = pegs.next()??;
    if pegs.next().is_some() {
      return None;
    }
    Some(DiskMove::new(src_peg, dst_peg))
  }
}

impl<R: BufRead> MoveSource for LineMoveSource<R> {
  fn next_move(&mut self) -> anyhow::Result<Option<DiskMove>> {
    loop {
      self.line.clear();
      let read = self.reader.read_line(&mut self.line).context("Reading move")?;
      if read == 0 {
        return Ok(None);
      }
      match Self::parse(&self.line) {
        Some(disk_move) => return Ok(Some(disk_move)),
        None => warn!("Expected two peg numbers (1-3), got {:?}", self.line.trim_end()),
      }
    }
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InteractiveSummary {
  pub applied: u64,
  pub rejected: u64,
}

/// Lets a player solve the puzzle one checked move at a time.
pub struct InteractiveController<'a> {
  state: &'a mut PuzzleState,
  summary: InteractiveSummary,
}

impl<'a> InteractiveController<'a> {
  pub fn new(state: &'a mut PuzzleState) -> Self {
    Self { state, summary: InteractiveSummary::default() }
  }

  /// Applies one candidate through the validator.  Illegal moves change nothing.
  pub fn submit(&mut self, candidate: DiskMove) -> MoveOutcome {
    let outcome = self.state.move_with_check(candidate.src_peg, candidate.dst_peg);
    match outcome {
      MoveOutcome::Applied { disk } => {
        debug!("Moved disk {} {}", disk, candidate);
        self.summary.applied += 1;
      }
      MoveOutcome::Rejected(reason) => {
        warn!("Rejected move {}: {}", candidate, reason);
        self.summary.rejected += 1;
      }
    }
    outcome
  }

  /// Runs until the puzzle is solved.  Fails if `source` runs dry first.
  pub fn run(
      mut self,
      source: &mut dyn MoveSource,
      renderer: &mut dyn BoardRenderer,
  ) -> anyhow::Result<InteractiveSummary> {
    renderer.render(&*self.state)?;
    while !self.state.is_solved() {
      let candidate = match source.next_move()? {
        Some(candidate) => candidate,
        None => bail!(
          "Input ended before the puzzle was solved ({} moves made)",
          self.state.move_count()),
      };
      self.submit(candidate);
      renderer.render(&*self.state)?;
    }
    info!(
      "Solved {} disks in {} moves ({} rejected)",
      self.state.height(),
      self.state.move_count(),
      self.summary.rejected);
    Ok(self.summary)
  }
}
