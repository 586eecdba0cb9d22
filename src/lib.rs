//! Crate root module declarations for the bitboard chess core.
//!
//! Exposes the position model, leaper attack tables, pseudo-legal move
//! generation, and the notation codec (FEN placement and the fixed 64-character
//! state string) under stable module paths for hosts, the binary, and benches.

pub mod errors;

pub mod game_state {
    pub mod bitboard;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod moves {
    pub mod attack_tables;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod leaper_table;
    pub mod move_descriptions;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod move_apply;
    pub mod move_generator;
    pub mod move_shared;
    pub mod perft;
    pub mod playout;
    pub mod pseudo_moves_leaper;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_slider;
}

pub mod utils {
    pub mod algebraic;
    pub mod placement;
    pub mod render_game_state;
    pub mod state_string;
}
