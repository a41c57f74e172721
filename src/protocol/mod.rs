mod commands;
mod connection;
mod error;
mod session;

pub use commands::{Command, Reply, TimeBudget};
pub use connection::Connection;
pub use error::ProtocolError;
pub use session::run;
