use std::io::{self, BufWriter, Write};

use clap::{ArgEnum, Parser};
use env_logger::Env;

use hanoi_towers::iterative_solver::IterativeSolver;
use hanoi_towers::puzzle_state::{DiskMove, Height, PuzzleState};
use hanoi_towers::recursive_solver::RecursiveSolver;

#[derive(ArgEnum, Debug, Clone, Copy)]
enum Strategy {
  Iterative,
  Recursive,
}

#[derive(Parser, Debug)]
#[clap(name = "moves_generator")]
struct Opts {
  #[clap(short = 'n', long, default_value = "3")]
  height: u8,

  #[clap(short, long, arg_enum, default_value = "iterative")]
  strategy: Strategy,

  /// Emit a single JSON document instead of one "src dst" line per move.
  #[clap(long)]
  json: bool,
}

fn main() -> anyhow::Result<()> {
  env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
  let opts: Opts = Opts::parse();

  let mut state = PuzzleState::new(Height::new(opts.height)?);
  let mut out = BufWriter::new(io::stdout().lock());

  if opts.json {
    let solution = match opts.strategy {
      Strategy::Iterative => IterativeSolver::solve_collect(&mut state)?,
      Strategy::Recursive => RecursiveSolver::solve_collect(&mut state)?,
    };
    serde_json::to_writer(&mut out, &solution)?;
    writeln!(out)?;
  } else {
    let mut write_error = None;
    let on_move = |disk_move: &DiskMove, _: &PuzzleState| {
      if write_error.is_none() {
        write_error = writeln!(out, "{} {}", disk_move.src_peg, disk_move.dst_peg).err();
      }
    };
    match opts.strategy {
      Strategy::Iterative => IterativeSolver::solve(&mut state, on_move)?,
      Strategy::Recursive => RecursiveSolver::solve(&mut state, on_move)?,
    }
    if let Some(e) = write_error {
      return Err(e.into());
    }
  }

  out.flush()?;
  Ok(())
}
