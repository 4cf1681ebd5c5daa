use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::dispatch::{dispatch, Outcome, HELP_TEXT};
use crate::session::Session;
use crate::style::{clear_sequence, Palette, Role};
use crate::table;
use crate::tokenizer::tokenize;

pub const BANNER: &str = "Fired Terminal - File Manager";
const PROMPT: &str = "> ";

pub struct Repl {
    session: Session,
    palette: Palette,
    json: bool,
}

impl Repl {
    pub fn new(session: Session, palette: Palette, json: bool) -> Self {
        Self {
            session,
            palette,
            json,
        }
    }

    /// Runs until `exit` or end of input. A failing command is reported on
    /// `err` and the loop carries on; only terminal I/O errors end it early.
    pub fn run(
        &mut self,
        mut input: impl BufRead,
        mut out: impl Write,
        mut err: impl Write,
    ) -> Result<()> {
        writeln!(out, "{}", BANNER)?;
        let mut buf = Vec::new();
        loop {
            write!(out, "{}", self.palette.paint(Role::Prompt, PROMPT))?;
            out.flush()?;

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("failed to read input")?;
            if read == 0 {
                debug!("end of input");
                return Ok(());
            }
            // Lines are raw bytes; invalid UTF-8 becomes U+FFFD rather than an error.
            let line = String::from_utf8_lossy(&buf);

            match dispatch(&mut self.session, &tokenize(&line)) {
                Ok(Outcome::Exit) => return Ok(()),
                Ok(outcome) => self.show(&outcome, &mut out)?,
                Err(e) => writeln!(err, "error: {:#}", e)?,
            }
        }
    }

    fn show(&self, outcome: &Outcome, out: &mut impl Write) -> Result<()> {
        match outcome {
            Outcome::Nothing | Outcome::Exit => {}
            Outcome::Listing(report) => {
                if self.json {
                    writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
                } else {
                    writeln!(out, "{}", table::render(report, self.palette))?;
                }
            }
            Outcome::WorkingDir(path) => writeln!(out, "{}", path.display())?,
            Outcome::Clear => write!(out, "{}", clear_sequence())?,
            Outcome::Help => writeln!(out, "{}", HELP_TEXT)?,
            Outcome::Unrecognized(word) => writeln!(out, "command not recognized: {}", word)?,
        }
        Ok(())
    }
}
