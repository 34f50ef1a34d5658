//! REPL Module
//!
//! Reads commands from stdin and runs them one at a time against a
//! [`Session`].

mod commands;

pub use commands::{
    catch_succeeds, clean_input, find_command, CliCommand, Flow, Session, COMMANDS,
    MAX_EXPERIENCE,
};

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

/// Prompt printed before every command
pub const PROMPT: &str = "Pokedex > ";

/// Runs the prompt loop until `exit` or end of input.
///
/// Command failures are printed and the loop continues; only failures to
/// read input or write output end it. Input that is not valid UTF-8 is
/// decoded lossily, so it reaches the dispatcher as an unknown command.
pub async fn run<R, W>(session: &mut Session, mut input: R, out: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            debug!("End of input, leaving the prompt");
            writeln!(out)?;
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);

        match session.execute(&line, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(err) => writeln!(out, "error: {}", err)?,
        }
    }
}
