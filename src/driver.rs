use std::io::{BufRead, Write};

use anyhow::Context;
use clap::ArgEnum;
use log::info;

use crate::interactive_controller::{InteractiveController, LineMoveSource};
use crate::iterative_solver::IterativeSolver;
use crate::puzzle_state::{DiskMove, Height, PuzzleState};
use crate::recursive_solver::RecursiveSolver;
use crate::renderer::{BoardRenderer, RenderOptions, TextRenderer};

const MOVE_PROMPT: &str = "move disk from tower, to tower: ";

#[derive(ArgEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  /// Play by hand, one move per line.
  User,
  Iterative,
  Recursive,
}

pub struct DriverOptions {
  pub mode: Mode,
  pub height: Height,
  pub render: RenderOptions,
  /// Draw every intermediate board while a solver runs, not just the first and last.
  pub show_steps: bool,
}

/// Parses a disk count from the command line, rejecting anything outside 1..=63.
pub fn parse_height(value: &str) -> anyhow::Result<Height> {
  let height: u64 = value.trim().parse().with_context(|| format!("{:?} is not a disk count", value))?;
  Ok(Height::try_from(height)?)
}

/// Builds a fresh puzzle and hands it to whichever mode was picked.  Returns the
/// final state, which is always solved on success.
pub fn run(options: DriverOptions, input: impl BufRead, output: impl Write) -> anyhow::Result<PuzzleState> {
  let mut state = PuzzleState::new(options.height);
  let renderer = TextRenderer::new(output, options.render);
  let mut renderer = match options.mode {
    Mode::User => renderer.with_prompt(MOVE_PROMPT),
    Mode::Iterative | Mode::Recursive => renderer,
  };
  info!("Starting {:?} mode with {} disks", options.mode, options.height);

  match options.mode {
    Mode::User => {
      let mut source = LineMoveSource::new(input);
      InteractiveController::new(&mut state).run(&mut source, &mut renderer)?;
    }
    Mode::Iterative | Mode::Recursive => {
      renderer.render(&state)?;
      let mut render_error = None;
      let on_move = |_: &DiskMove, current: &PuzzleState| {
        if options.show_steps && render_error.is_none() {
          render_error = renderer.render(current).err();
        }
      };
      match options.mode {
        Mode::Iterative => IterativeSolver::solve(&mut state, on_move)?,
        _ => RecursiveSolver::solve(&mut state, on_move)?,
      }
      if let Some(e) = render_error {
        return Err(e);
      }
      renderer.render(&state)?;
    }
  }

  info!("Finished after {} moves", state.move_count());
  Ok(state)
}
