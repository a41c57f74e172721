use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "reversi", version, about = "Reversi agent using minimax search with alpha-beta pruning")]
pub struct Cli {
    #[command(flatten)]
    pub play: PlayArgs,

    /// Without a subcommand the agent answers game commands on stdin/stdout
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play games between two agents and report the results
    Selfplay(SelfplayArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Search depth for every game
    #[arg(long, env = "REVERSI_DEPTH", default_value_t = 2)]
    pub depth: u32,
}

#[derive(Args, Debug, Clone)]
pub struct SelfplayArgs {
    #[arg(long, default_value_t = 2)]
    pub white_depth: u32,

    #[arg(long, default_value_t = 2)]
    pub black_depth: u32,

    /// Let Black play random moves instead of searching
    #[arg(long)]
    pub random_black: bool,

    #[arg(long, default_value_t = 20)]
    pub games: usize,

    /// Print every move of a single game instead of running a match
    #[arg(long)]
    pub show: bool,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Commands};

    #[test]
    fn test_default_is_no_subcommand() {
        let cli = Cli::try_parse_from(["reversi"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_play_depth() {
        let cli = Cli::try_parse_from(["reversi", "--depth", "4"]).unwrap();
        assert_eq!(cli.play.depth, 4);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_selfplay_args() {
        let cli = Cli::try_parse_from(["reversi", "selfplay", "--black-depth", "1", "--random-black", "--games", "3"])
            .unwrap();

        match cli.command {
            Some(Commands::Selfplay(args)) => {
                assert_eq!(args.white_depth, 2);
                assert_eq!(args.black_depth, 1);
                assert!(args.random_black);
                assert_eq!(args.games, 3);
                assert!(!args.show);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_depth() {
        assert!(Cli::try_parse_from(["reversi", "--depth", "-1"]).is_err());
    }
}
