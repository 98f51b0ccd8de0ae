use crate::domain::outcome::Outcome;
use crate::error::Result;
use std::io::Write;

/// Writes outcomes as JSON lines in their boundary form.
pub struct OutcomeWriter<W: Write> {
    writer: W,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_outcome(&mut self, outcome: &Outcome) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &outcome.report())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
