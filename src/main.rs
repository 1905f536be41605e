use std::process::ExitCode;

use clap::Parser;

use arimaa_steps::errors::SolveError;
use arimaa_steps::search::sequence_solver::solve_turn;
use arimaa_steps::session::stdio_session::run_stdio_loop;
use arimaa_steps::utils::render_board::render_board;

#[derive(Debug, Parser)]
#[command(
    name = "arimaa_steps",
    about = "Reconstruct the Arimaa steps played between two positions"
)]
struct Args {
    /// Position before the turn, e.g. 'g "<64 cells>"' (mover is its side)
    #[arg(long, requires = "after")]
    before: Option<String>,

    /// Position after the turn
    #[arg(long, requires = "before")]
    after: Option<String>,

    /// Also print a diagram of the resulting board
    #[arg(long)]
    render: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let (Some(before), Some(after)) = (args.before.as_deref(), args.after.as_deref()) else {
        return match run_stdio_loop(args.render) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("error {err}");
                ExitCode::FAILURE
            }
        };
    };

    match solve_turn(before, after) {
        Ok(explanation) => {
            println!("steps {}", explanation.notation);
            println!("position {}", explanation.position);
            if args.render {
                println!("{}", render_board(&explanation.board));
            }
            ExitCode::SUCCESS
        }
        Err(SolveError::NoSequence) => {
            println!("nosequence");
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("error {err}");
            ExitCode::from(2)
        }
    }
}
