use anyhow::{Context, Result};
use clap::Parser;

use bitcore_chess::game_state::chess_rules::STARTING_PLACEMENT;
use bitcore_chess::game_state::chess_types::Position;
use bitcore_chess::move_generation::move_generator::{MoveGenerator, PseudoMoveGenerator};
use bitcore_chess::move_generation::perft::perft;
use bitcore_chess::move_generation::playout::{random_playout, seeded_rng};
use bitcore_chess::moves::sliding_moves::{RayScanAttacks, SlidingAttacks};
use bitcore_chess::utils::algebraic::{algebraic_to_square, square_name};
use bitcore_chess::utils::placement::PlacementMode;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Decode a board, list its pseudo-legal moves, and print its state string"
)]
struct Cli {
    /// FEN placement (or a full FEN; only the first field is read)
    #[arg(long, default_value = STARTING_PLACEMENT, conflicts_with = "state")]
    placement: String,

    /// 64-character state string to load instead of a placement
    #[arg(long)]
    state: Option<String>,

    /// reject malformed placement text instead of skipping bad characters
    #[arg(long)]
    strict: bool,

    /// also generate bishop, rook and queen moves by ray scanning
    #[arg(long)]
    sliders: bool,

    /// play this many random moves before listing
    #[arg(long, default_value_t = 0)]
    playout: usize,

    /// seed for --playout
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// list destinations of the piece on this square (e.g. g1)
    #[arg(long)]
    from: Option<String>,

    /// print pseudo-legal perft counts to this depth
    #[arg(long)]
    perft: Option<u8>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.sliders {
        run(&cli, PseudoMoveGenerator::with_sliding_attacks(RayScanAttacks))
    } else {
        run(&cli, PseudoMoveGenerator::new())
    }
}

fn run<S: SlidingAttacks>(cli: &Cli, generator: PseudoMoveGenerator<S>) -> Result<()> {
    let mut position = match &cli.state {
        Some(state) => Position::from_state_string(state).context("loading state string")?,
        None => {
            let mode = if cli.strict {
                PlacementMode::Strict
            } else {
                PlacementMode::Lenient
            };
            Position::from_placement(&cli.placement, mode).context("decoding placement")?
        }
    };

    if cli.playout > 0 {
        let mut rng = seeded_rng(cli.seed);
        let playout = random_playout(&generator, &position, cli.playout, &mut rng)
            .context("running random playout")?;
        let line: Vec<String> = playout.moves.iter().map(ToString::to_string).collect();
        println!("playout: {}", line.join(" "));
        position = playout.position;
    }

    println!("{position}");
    println!("placement: {}", position.placement());
    println!("state:     {}", position.state_string());
    println!("to move:   {:?}", position.side_to_move);

    let moves = generator.generate_moves(&position);
    let listed: Vec<String> = moves.iter().map(ToString::to_string).collect();
    println!("moves ({}): {}", moves.len(), listed.join(" "));

    if let Some(name) = &cli.from {
        let square = algebraic_to_square(name).context("parsing --from")?;
        let targets: Vec<String> = generator
            .destinations_from(&position, square)
            .squares()
            .map(square_name)
            .collect();
        println!("from {name}: {}", targets.join(" "));
    }

    if let Some(depth) = cli.perft {
        for d in 1..=depth {
            let counts = perft(&generator, &position, d).context("running perft")?;
            println!(
                "perft {d}: nodes {} captures {} double pushes {} promotions {}",
                counts.nodes, counts.captures, counts.double_pawn_pushes, counts.promotions
            );
        }
    }

    Ok(())
}
