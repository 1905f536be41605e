//! Line-oriented front end for turn reconstruction.
//!
//! Each input line holds two wire positions separated by `;`, the board
//! before and after one turn. Replies are `steps <tokens>` followed by
//! `position <wire>`, or `nosequence`. Malformed lines get an `error` reply.
//! Diagnostics are `info string ...` lines.

use std::io::{self, BufRead, Write};

use crate::board_state::arimaa_types::*;
use crate::errors::SolveError;
use crate::search::sequence_solver::{SearchCounts, SequenceSolver, TurnExplanation};
use crate::utils::render_board::render_board;

pub fn run_stdio_loop(render: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = TurnSession::new(render);

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_line(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct TurnSession {
    solver: SequenceSolver,
    render: bool,
}

impl TurnSession {
    pub fn new(render: bool) -> Self {
        Self {
            solver: SequenceSolver::new(),
            render,
        }
    }

    /// Handle one input line. Returns `true` when the session should end.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }
        if trimmed == "quit" {
            return Ok(true);
        }

        let Some((before, after)) = trimmed.split_once(';') else {
            writeln!(out, "error expected '<before> ; <after>'")?;
            return Ok(false);
        };

        self.solve_pair(before, after, out)?;
        Ok(false)
    }

    pub fn solve_pair(&self, before: &str, after: &str, out: &mut impl Write) -> io::Result<()> {
        match self.solve(before, after) {
            Ok((explanation, counts)) => {
                write_counts(&counts, out)?;
                write_explanation(&explanation, self.render, out)
            }
            Err((SolveError::NoSequence, counts)) => {
                write_counts(&counts, out)?;
                writeln!(out, "nosequence")
            }
            Err((err @ SolveError::Format(_), _)) => writeln!(out, "error {err}"),
        }
    }

    fn solve(
        &self,
        before: &str,
        after: &str,
    ) -> Result<(TurnExplanation, SearchCounts), (SolveError, SearchCounts)> {
        let counts = SearchCounts::default();
        let (before_board, mover) =
            Board::from_wire(before).map_err(|err| (SolveError::from(err), counts))?;
        let (after_board, _) =
            Board::from_wire(after).map_err(|err| (SolveError::from(err), counts))?;

        match self.solver.solve_with_counts(&before_board, mover, &after_board) {
            (Some(explanation), counts) => Ok((explanation, counts)),
            (None, counts) => Err((SolveError::NoSequence, counts)),
        }
    }
}

fn write_counts(counts: &SearchCounts, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "info string expanded {} generated {} enqueued {}",
        counts.expanded, counts.generated, counts.enqueued
    )
}

fn write_explanation(
    explanation: &TurnExplanation,
    render: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "steps {}", explanation.notation)?;
    writeln!(out, "position {}", explanation.position)?;
    if render {
        writeln!(out, "{}", render_board(&explanation.board))?;
    }
    Ok(())
}
