mod game;

pub use game::{play_game, test_agents};
