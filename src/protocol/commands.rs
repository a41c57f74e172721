use std::fmt::Display;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::protocol::ProtocolError;
use crate::reversi::Move;

/// Time values sent along with every turn. Accepted and logged, the search does not look at them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBudget {
    pub move_time: f64,
    pub total_time: f64,
}

/// commands sent to the agent
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// new game, we play White and move first
    Ugo { budget: TimeBudget },
    /// the opponent played `move_`, our turn
    Hedid { budget: TimeBudget, move_: Move },
    /// new game, we play Black
    Onemore,
    Bye,
}

/// replies written by the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Ready,
    Move(Move),
}

lazy_static! {
    static ref COMMAND_REGEX: Regex = Regex::new(
        &r"
^
\s*
(?P<cmd>[A-Za-z]+)
(?:
    \s+
    (?P<args>.*?)
)?
\s*
$
"
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>(),
    )
    .unwrap();
}

fn parse_num<T: FromStr>(what: &'static str, value: &str) -> Result<T, ProtocolError> {
    value.parse().map_err(|_| ProtocolError::BadNumber {
        what,
        value: value.to_owned(),
    })
}

fn split_args<'a>(cmd: &'static str, args: &'a str, expected: usize) -> Result<Vec<&'a str>, ProtocolError> {
    let args_vec: Vec<&str> = args.split_ascii_whitespace().collect();

    if args_vec.len() != expected {
        return Err(ProtocolError::ArgCount {
            cmd,
            expected,
            args: args.to_owned(),
        });
    }

    Ok(args_vec)
}

fn parse_budget(args: &[&str]) -> Result<TimeBudget, ProtocolError> {
    Ok(TimeBudget {
        move_time: parse_num("move time", args[0])?,
        total_time: parse_num("total time", args[1])?,
    })
}

impl FromStr for Command {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command_captures = COMMAND_REGEX
            .captures(s)
            .ok_or_else(|| ProtocolError::NoMatch(s.to_owned()))?;

        // non-optional: if it didn't match, we already returned an Err earlier
        let cmd = &command_captures["cmd"];

        let args = command_captures
            .name("args")
            .map(|cap: regex::Match| cap.as_str())
            .unwrap_or("");

        match cmd {
            "UGO" => {
                let args_vec = split_args("UGO", args, 2)?;

                Ok(Command::Ugo {
                    budget: parse_budget(&args_vec)?,
                })
            }
            "HEDID" => {
                let args_vec = split_args("HEDID", args, 4)?;

                let row = parse_num("row", args_vec[2])?;
                let col = parse_num("column", args_vec[3])?;

                Ok(Command::Hedid {
                    budget: parse_budget(&args_vec)?,
                    move_: Move::new(row, col),
                })
            }
            "ONEMORE" => Ok(Command::Onemore),
            "BYE" => Ok(Command::Bye),
            _ => Err(ProtocolError::UnknownCommand(cmd.to_owned())),
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Ugo { budget } => write!(f, "UGO {} {}", budget.move_time, budget.total_time),
            Command::Hedid { budget, move_ } => {
                write!(f, "HEDID {} {} {}", budget.move_time, budget.total_time, move_)
            }
            Command::Onemore => write!(f, "ONEMORE"),
            Command::Bye => write!(f, "BYE"),
        }
    }
}

impl Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reply::Ready => write!(f, "RDY"),
            Reply::Move(move_) => write!(f, "IDO {move_}"),
        }
    }
}

/*====================================================================================================================*/

#[cfg(test)]
mod tests {
    use super::{Command, Reply, TimeBudget};
    use crate::protocol::ProtocolError;
    use crate::reversi::Move;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "UGO 1.5 120".parse::<Command>().unwrap(),
            Command::Ugo {
                budget: TimeBudget {
                    move_time: 1.5,
                    total_time: 120.0
                }
            }
        );

        assert_eq!(
            "  HEDID 0.5 99.25 2 3 \r".parse::<Command>().unwrap(),
            Command::Hedid {
                budget: TimeBudget {
                    move_time: 0.5,
                    total_time: 99.25
                },
                move_: Move::new(2, 3),
            }
        );

        assert_eq!("ONEMORE".parse::<Command>().unwrap(), Command::Onemore);
        assert_eq!("BYE".parse::<Command>().unwrap(), Command::Bye);
    }

    #[test]
    fn test_parse_pass() {
        let cmd: Command = "HEDID 1 1 -1 -1".parse().unwrap();

        assert!(matches!(cmd, Command::Hedid { move_, .. } if move_ == Move::NONE));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<Command>(), Err(ProtocolError::NoMatch(_))));
        assert!(matches!("42".parse::<Command>(), Err(ProtocolError::NoMatch(_))));
        assert!(matches!("FOO 1 2".parse::<Command>(), Err(ProtocolError::UnknownCommand(cmd)) if cmd == "FOO"));
        assert!(matches!(
            "UGO 1".parse::<Command>(),
            Err(ProtocolError::ArgCount { cmd: "UGO", expected: 2, .. })
        ));
        assert!(matches!(
            "HEDID 1 1 2".parse::<Command>(),
            Err(ProtocolError::ArgCount { cmd: "HEDID", expected: 4, .. })
        ));
        assert!(matches!(
            "HEDID 1 1 a 3".parse::<Command>(),
            Err(ProtocolError::BadNumber { what: "row", .. })
        ));
        assert!(matches!(
            "UGO x 1".parse::<Command>(),
            Err(ProtocolError::BadNumber { what: "move time", .. })
        ));
    }

    #[test]
    fn test_display() {
        let cmd = Command::Hedid {
            budget: TimeBudget {
                move_time: 1.0,
                total_time: 2.5,
            },
            move_: Move::new(4, 5),
        };

        assert_eq!(cmd.to_string(), "HEDID 1 2.5 4 5");
        assert_eq!(cmd.to_string().parse::<Command>().unwrap(), cmd);

        assert_eq!(Reply::Ready.to_string(), "RDY");
        assert_eq!(Reply::Move(Move::new(2, 3)).to_string(), "IDO 2 3");
        assert_eq!(Reply::Move(Move::NONE).to_string(), "IDO -1 -1");
    }
}
