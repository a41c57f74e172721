use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::info;
use threadpool::ThreadPool;

use crate::agent::Agent;
use crate::reversi::{Board, Player};

/// Let `playing_agent` move for `player` and tell the other agent.
fn single_ply(
    board: &mut Board,
    playing_agent: &mut impl Agent,
    opponent_agent: &mut impl Agent,
    player: Player,
    print: bool,
) {
    let start_time = std::time::Instant::now();

    let player_move = playing_agent.get_move();

    let dur = start_time.elapsed();

    if !board.has_legal_move(player) {
        // pass, the agent has to agree
        assert!(
            !player_move.in_bounds(),
            "{player} has no legal move but played {player_move:?} in position\n{board}"
        );
        opponent_agent.inform_move(player_move);
        return;
    }

    assert!(
        board.is_legal(player, player_move),
        "Invalid move {player_move:?} by {player} in position\n{board}"
    );

    board.apply_move(player, player_move);
    opponent_agent.inform_move(player_move);

    if print {
        println!("{player} played {player_move} after {dur:?}\n{board}\n");
    }
}

/// Play one game to the end, White moving first. A side without a legal move passes.
pub fn play_game(white_agent: impl Agent, black_agent: impl Agent, print: bool) -> Board {
    use Player::{Black, White};

    assert_eq!(white_agent.player(), White);
    assert_eq!(black_agent.player(), Black);

    let mut board = Board::new();
    let mut white_agent = white_agent;
    let mut black_agent = black_agent;

    let mut current_player = White;

    while !board.is_game_over() {
        match current_player {
            White => single_ply(&mut board, &mut white_agent, &mut black_agent, White, print),
            Black => single_ply(&mut board, &mut black_agent, &mut white_agent, Black, print),
        }

        current_player = !current_player;
    }

    board
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub white_wins: u64,
    pub draws: u64,
    pub black_wins: u64,
}

/// Play `num_runs` independent games on a thread pool, one game per job.
pub fn test_agents<WhiteAgent, BlackAgent>(
    white_agent_builder: impl Fn() -> WhiteAgent,
    black_agent_builder: impl Fn() -> BlackAgent,
    num_runs: usize,
) -> Tally
where
    WhiteAgent: Agent + Send + 'static,
    BlackAgent: Agent + Send + 'static,
{
    let num_workers = num_cpus::get();

    let white_wins = Arc::new(AtomicU64::new(0));
    let black_wins = Arc::new(AtomicU64::new(0));
    let draws = Arc::new(AtomicU64::new(0));

    info!("Playing {num_runs} games on {num_workers} workers");

    let pool = ThreadPool::new(num_workers);

    for _ in 0..num_runs {
        let white_agent = white_agent_builder();
        let black_agent = black_agent_builder();

        let white_wins = Arc::clone(&white_wins);
        let black_wins = Arc::clone(&black_wins);
        let draws = Arc::clone(&draws);

        pool.execute(move || {
            let board = play_game(white_agent, black_agent, false);

            match board.disc_count(Player::White).cmp(&board.disc_count(Player::Black)) {
                std::cmp::Ordering::Less => black_wins.fetch_add(1, Ordering::Release),
                std::cmp::Ordering::Equal => draws.fetch_add(1, Ordering::Release),
                std::cmp::Ordering::Greater => white_wins.fetch_add(1, Ordering::Release),
            };
        });
    }

    pool.join();

    Tally {
        white_wins: white_wins.load(Ordering::Acquire),
        draws: draws.load(Ordering::Acquire),
        black_wins: black_wins.load(Ordering::Acquire),
    }
}

/*====================================================================================================================*/
