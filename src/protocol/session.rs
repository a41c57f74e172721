use std::io::{BufRead, Write};

use log::{debug, info};

use crate::agent::{Agent, MinimaxAgent};
use crate::protocol::{Command, Connection, ProtocolError, Reply, TimeBudget};
use crate::reversi::{Move, Player};

/// Whether the command loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Game state held by the command loop: the current agent and the depth new games start with.
pub struct Session {
    agent: MinimaxAgent,
    depth: u32,
}

impl Session {
    /// Before the first command the agent plays White.
    pub fn new(depth: u32) -> Self {
        Session {
            agent: MinimaxAgent::new(Player::White, depth),
            depth,
        }
    }

    #[cfg(test)]
    pub fn agent(&self) -> &MinimaxAgent {
        &self.agent
    }

    /// fresh board, `player` to optimise for
    pub fn new_game(&mut self, player: Player) {
        self.agent = MinimaxAgent::new(player, self.depth);
    }

    pub fn opponent_moved(&mut self, move_: Move) {
        self.agent.inform_move(move_);
    }

    pub fn request_move(&mut self) -> Move {
        let move_ = self.agent.get_move();

        debug!("{} plays {move_:?}\n{}", self.agent.player(), self.agent.board());

        move_
    }

    fn log_budget(budget: TimeBudget) {
        debug!(
            "Time budget: {}s for this move, {}s in total (not used)",
            budget.move_time, budget.total_time
        );
    }

    pub fn process_command<R: BufRead, W: Write>(
        &mut self,
        cmd: Command,
        conn: &mut Connection<R, W>,
    ) -> Result<Flow, ProtocolError> {
        debug!("Processing {cmd}");

        match cmd {
            Command::Ugo { budget } => {
                Self::log_budget(budget);

                self.new_game(Player::White);

                let move_ = self.request_move();
                conn.write_reply(Reply::Move(move_))?;
            }
            Command::Hedid { budget, move_ } => {
                Self::log_budget(budget);

                self.opponent_moved(move_);

                let move_ = self.request_move();
                conn.write_reply(Reply::Move(move_))?;
            }
            Command::Onemore => {
                self.new_game(Player::Black);
                conn.write_reply(Reply::Ready)?;
            }
            Command::Bye => {
                info!("Received BYE, exiting");
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }
}

/// Announce readiness, then answer commands until BYE or the end of the input.
pub fn run<R: BufRead, W: Write>(reader: R, writer: W, depth: u32) -> Result<(), ProtocolError> {
    let mut conn = Connection::new(reader, writer);
    let mut session = Session::new(depth);

    conn.write_reply(Reply::Ready)?;

    while let Some(cmd) = conn.read_command()? {
        if session.process_command(cmd, &mut conn)? == Flow::Exit {
            return Ok(());
        }
    }

    info!("Input closed, exiting");

    Ok(())
}

/*====================================================================================================================*/
