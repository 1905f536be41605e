//! Crate root module declarations for the Arimaa turn reconstruction crate.
//!
//! Given the board before and after a single Arimaa turn, the crate finds
//! the shortest legal sequence of steps (slides, pushes, pulls) explaining
//! the change and renders it in step notation. This file exposes the board
//! model, rules, generators, search, and wire-format utilities so the binary,
//! benches, and collaborating tools can import stable module paths.

pub mod board_state {
    pub mod arimaa_rules;
    pub mod arimaa_types;
    pub mod board;
    pub mod board_state_node;
}

pub mod moves {
    pub mod orthogonal_steps;
    pub mod step_token;
}

pub mod rules {
    pub mod freezing;
    pub mod trap_resolution;
}

pub mod move_generation {
    pub mod legal_pulls;
    pub mod legal_pushes;
    pub mod legal_slides;
    pub mod move_generator;
    pub mod step_apply;
    pub mod step_shared;
}

pub mod search {
    pub mod sequence_solver;
    pub mod zobrist;
}

pub mod utils {
    pub mod algebraic;
    pub mod position_generator;
    pub mod position_parser;
    pub mod random_turn;
    pub mod render_board;
}

pub mod session {
    pub mod stdio_session;
}

pub mod errors;
