//! Plays or solves the Towers of Hanoi in the terminal.
//!
//! ```text
//! hanoi user 4        # type moves as "from to", pegs numbered 1-3
//! hanoi iterative 20
//! hanoi recursive 5 --steps --animate
//! ```

use std::io;

use clap::Parser;
use env_logger::Env;

use hanoi_towers::driver::{self, DriverOptions, Mode};
use hanoi_towers::puzzle_state::Height;
use hanoi_towers::renderer::RenderOptions;

#[derive(Parser, Debug)]
#[clap(name = "hanoi")]
struct Opts {
    #[clap(arg_enum)]
    mode: Mode,

    /// Number of disks, 1 to 63.
    #[clap(parse(try_from_str = driver::parse_height))]
    height: Height,

    /// Draw the board after every solver move.
    #[clap(long)]
    steps: bool,

    /// Redraw the board in place instead of scrolling.
    #[clap(long)]
    animate: bool,

    /// Print the final state as JSON after the board.
    #[clap(long)]
    json: bool,

    #[clap(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let opts: Opts = Opts::parse();

    let default_filter = if opts.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let stdin = io::stdin();
    let state = driver::run(
        DriverOptions {
            mode: opts.mode,
            height: opts.height,
            render: RenderOptions { animate: opts.animate },
            show_steps: opts.steps,
        },
        stdin.lock(),
        io::stdout(),
    )?;

    println!("Solved in {} moves.", state.move_count());
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    }
    Ok(())
}
