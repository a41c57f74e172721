mod agent;
mod config;
mod minimax;
mod protocol;
mod reversi;
mod tournament;
#[cfg(test)]
mod util;

use anyhow::Result;
use clap::Parser;

use agent::{MinimaxAgent, RandomAgent};
use config::{Cli, Commands, PlayArgs, SelfplayArgs};
use reversi::Player;

fn selfplay(args: SelfplayArgs) {
    let SelfplayArgs {
        white_depth,
        black_depth,
        random_black,
        games,
        show,
    } = args;

    if show {
        let white = MinimaxAgent::new(Player::White, white_depth);

        let board = if random_black {
            tournament::play_game(white, RandomAgent::new(Player::Black), true)
        } else {
            tournament::play_game(white, MinimaxAgent::new(Player::Black, black_depth), true)
        };

        println!(
            "Final board:\n\n{board}\n\nWhite {} - {} Black",
            board.disc_count(Player::White),
            board.disc_count(Player::Black)
        );
        return;
    }

    let white_builder = move || MinimaxAgent::new(Player::White, white_depth);

    let tally = if random_black {
        tournament::test_agents(white_builder, || RandomAgent::new(Player::Black), games)
    } else {
        tournament::test_agents(white_builder, move || MinimaxAgent::new(Player::Black, black_depth), games)
    };

    println!("White wins: {}", tally.white_wins);
    println!("Draws:      {}", tally.draws);
    println!("Black wins: {}", tally.black_wins);
}

fn main() -> Result<()> {
    // stdout carries the protocol, logs go to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Selfplay(args)) => selfplay(args),
        None => play(cli.play)?,
    }

    Ok(())
}

fn play(args: PlayArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    protocol::run(stdin.lock(), stdout.lock(), args.depth)?;

    Ok(())
}
