use std::io::Write;

use crate::errors::errors::Error;

use super::tokens::Token;

/// Receives tokens in source order.
pub trait TokenSink {
    fn emit(&mut self, token: Token) -> Result<(), Error>;
}

impl TokenSink for Vec<Token> {
    fn emit(&mut self, token: Token) -> Result<(), Error> {
        self.push(token);
        Ok(())
    }
}

/// Writes one `KIND\t value` line per token.
pub struct LineSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W) -> Self {
        LineSink { writer, written: 0 }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(mut self) -> Result<W, Error> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> TokenSink for LineSink<W> {
    fn emit(&mut self, token: Token) -> Result<(), Error> {
        writeln!(self.writer, "{}", token)?;
        self.written += 1;
        Ok(())
    }
}
