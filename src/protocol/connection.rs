use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::protocol::{Command, ProtocolError, Reply};

/// Line based command channel, commands in and replies out.
pub struct Connection<R: BufRead, W: Write> {
    reader: R,
    writer: W,

    line: String,
}

impl<R: BufRead, W: Write> Connection<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Connection {
            reader,
            writer,
            line: String::new(),
        }
    }

    /// Next command, `None` once the input is closed. Lines that don't parse are logged and skipped.
    pub fn read_command(&mut self) -> Result<Option<Command>, ProtocolError> {
        loop {
            self.line.clear();

            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }

            let msg = self.line.trim();

            if msg.is_empty() {
                continue;
            }

            debug!("< {msg}");

            match msg.parse() {
                Ok(cmd) => return Ok(Some(cmd)),
                Err(err) => warn!("Skipping line: {err}"),
            }
        }
    }

    pub fn write_reply(&mut self, reply: Reply) -> Result<(), ProtocolError> {
        debug!("> {reply}");

        writeln!(self.writer, "{reply}")?;
        self.writer.flush()?;

        Ok(())
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

/*====================================================================================================================*/
