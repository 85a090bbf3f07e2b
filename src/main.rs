use std::time::Instant;

use anyhow::{bail, Context, Result};
use cairn::{
    perft::{Perft, PerftMode, Restore},
    AnyBoard,
};
use clap::{Parser, Subcommand};
use log::info;

#[derive(Parser, Debug)]
#[command(version, about = "Tak rules engine and perft driver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count leaf positions at increasing depths
    Perft {
        /// Board size, starting from the empty board
        #[arg(long, conflicts_with = "tps")]
        size: Option<usize>,

        /// Position to start from
        #[arg(long)]
        tps: Option<String>,

        /// Deepest depth to count
        #[arg(long, short)]
        depth: u32,

        /// Play out the last ply instead of counting generated moves
        #[arg(long)]
        naive: bool,

        /// Restore positions by copying instead of unmaking moves
        #[arg(long)]
        copy: bool,

        /// Print the node count below each root move at the final depth
        #[arg(long)]
        divide: bool,
    },
    /// List every legal move in a position
    Moves {
        #[arg(long)]
        tps: String,
    },
    /// Play moves from the empty board and print the result
    Play {
        #[arg(long, default_value_t = 6)]
        size: usize,

        moves: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Perft {
            size,
            tps,
            depth,
            naive,
            copy,
            divide,
        } => {
            let mut board = make_board(size, tps.as_deref())?;
            let mode = if naive {
                PerftMode::Naive
            } else {
                PerftMode::Batch
            };
            let restore = if copy { Restore::Copy } else { Restore::Unmake };
            perft(&mut board, depth, mode, restore, divide);
        }
        Command::Moves { tps } => {
            let board = AnyBoard::from_tps(&tps)?;
            for mv in board.legal_moves() {
                println!("{mv}");
            }
        }
        Command::Play { size, moves } => {
            let mut board = AnyBoard::new(size)?;
            for (ply, mv) in moves.iter().enumerate() {
                if board.status().is_over() {
                    bail!("game ended before ply {}: {}", ply + 1, board.status());
                }

                board
                    .play(mv)
                    .with_context(|| format!("ply {}: {mv}", ply + 1))?;
            }

            println!("{board}");
            println!("{}", board.status());
        }
    }

    Ok(())
}

fn make_board(size: Option<usize>, tps: Option<&str>) -> Result<AnyBoard> {
    Ok(match (size, tps) {
        (_, Some(tps)) => AnyBoard::from_tps(tps).context("loading position")?,
        (Some(size), None) => AnyBoard::new(size)?,
        (None, None) => AnyBoard::new(6)?,
    })
}

fn perft(board: &mut AnyBoard, depth: u32, mode: PerftMode, restore: Restore, divide: bool) {
    info!("perft on {}x{}: {board}", board.size(), board.size());

    for d in 1..=depth {
        let perft = Perft::new(d).mode(mode).restore(restore);

        let time = Instant::now();
        let nodes = if divide && d == depth {
            let divided = board.divide(&perft);
            for (mv, nodes) in &divided {
                println!("{mv}: {nodes}");
            }
            divided.iter().map(|&(_, nodes)| nodes).sum()
        } else {
            board.perft(&perft)
        };
        let secs = time.elapsed().as_secs_f64();
        let nps = nodes as f64 / secs;

        println!(
            "depth {d}: {nodes} nodes in {secs:.2}s ({:.1} Mnps, {})",
            nps / 1_000_000.,
            match mode {
                PerftMode::Naive => "naive",
                PerftMode::Batch => "batch",
            },
        );
    }
}
