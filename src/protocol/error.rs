use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("line \"{0}\" is not a command")]
    NoMatch(String),

    #[error("unknown command {0}")]
    UnknownCommand(String),

    #[error("expected {expected} arguments for {cmd}, got \"{args}\"")]
    ArgCount {
        cmd: &'static str,
        expected: usize,
        args: String,
    },

    #[error("could not parse {what} from \"{value}\"")]
    BadNumber { what: &'static str, value: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
