use std::io::Write;

use crate::puzzle_state::{PuzzleState, NUM_PEGS};

pub trait BoardRenderer {
  fn render(&mut self, state: &PuzzleState) -> anyhow::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RenderOptions {
  /// Move the cursor back up before each frame so the board redraws in place.
  pub animate: bool,
}

/// Draws the pegs side by side, one text row per disk slot, e.g. for 3 disks:
///
/// ```text
///   -1-     0      0
///  --2--    0      0
/// ---3---   0      0
/// ```
pub struct TextRenderer<W: Write> {
  out: W,
  options: RenderOptions,
  prompt: Option<&'static str>,
  rows_on_screen: usize,
}

impl<W: Write> TextRenderer<W> {
  pub fn new(out: W, options: RenderOptions) -> Self {
    Self { out, options, prompt: None, rows_on_screen: 0 }
  }

  /// Ask for input below every unsolved board.  The player's answer ends the
  /// prompt's line, so an animated redraw climbs one extra row to cover it.
  pub fn with_prompt(mut self, prompt: &'static str) -> Self {
    self.prompt = Some(prompt);
    self
  }

  pub fn into_inner(self) -> W {
    self.out
  }
}

impl<W: Write> BoardRenderer for TextRenderer<W> {
  fn render(&mut self, state: &PuzzleState) -> anyhow::Result<()> {
    if self.options.animate && self.rows_on_screen > 0 {
      write!(self.out, "\x1b[{}F", self.rows_on_screen)?;
    }
    let board = draw_board(state);
    self.out.write_all(board.as_bytes())?;
    self.rows_on_screen = usize::from(state.height().get());

    // Each prompt row ends with a clear so the last typed answer never lingers.
    match self.prompt {
      Some(prompt) if !state.is_solved() => {
        write!(self.out, "{}\x1b[K", prompt)?;
        self.rows_on_screen += 1;
      }
      Some(_) => write!(self.out, "\x1b[K")?,
      None => (),
    }
    self.out.flush()?;
    Ok(())
  }
}

/// Renders nothing.  Used when only the final result matters.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl BoardRenderer for NullRenderer {
  fn render(&mut self, _state: &PuzzleState) -> anyhow::Result<()> {
    Ok(())
  }
}

pub fn draw_board(state: &PuzzleState) -> String {
  let height = usize::from(state.height().get());
  let mut board = String::new();
  for row in (0..height).rev() {
    for peg_index in 0..NUM_PEGS {
      match state.peg(peg_index).disks().get(row) {
        Some(&disk) => draw_disk(&mut board, height, usize::from(disk)),
        None => {
          pad(&mut board, ' ', height);
          board.push('0');
          pad(&mut board, ' ', height);
        }
      }
    }
    board.push('\n');
  }
  board
}

fn draw_disk(board: &mut String, height: usize, disk: usize) {
  let label = disk.to_string();
  // Wide labels eat into the left arm so every slot stays 2 * height + 1 wide.
  let left_arm = disk + 1 - label.len();
  pad(board, ' ', height - disk);
  pad(board, '-', left_arm);
  board.push_str(&label);
  pad(board, '-', disk);
  pad(board, ' ', height - disk);
}

fn pad(board: &mut String, c: char, count: usize) {
  board.extend(std::iter::repeat(c).take(count));
}
