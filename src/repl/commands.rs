//! Command table and session state
//!
//! A [`Session`] owns the repository, the pagination cursor and the caught
//! creatures. Each input line is tokenized and dispatched to one command.

use std::collections::BTreeSet;
use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{PokedexError, Result};
use crate::repository::PokeApi;

/// Upper bound of the catch roll; also the highest difficulty that can
/// still be caught.
pub const MAX_EXPERIENCE: u32 = 1000;

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Help,
    Map,
    MapBack,
    Explore,
    Catch,
    Pokedex,
    Cache,
    Exit,
}

/// One entry of the command table.
#[derive(Debug, Clone, Copy)]
pub struct CliCommand {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    kind: CommandKind,
}

/// Every command the prompt understands, in help order.
pub const COMMANDS: &[CliCommand] = &[
    CliCommand {
        name: "help",
        usage: "help",
        description: "Displays this help message",
        kind: CommandKind::Help,
    },
    CliCommand {
        name: "map",
        usage: "map",
        description: "Lists the next page of location areas",
        kind: CommandKind::Map,
    },
    CliCommand {
        name: "mapb",
        usage: "mapb",
        description: "Lists the previous page of location areas",
        kind: CommandKind::MapBack,
    },
    CliCommand {
        name: "explore",
        usage: "explore <area>",
        description: "Lists the Pokemon found in a location area",
        kind: CommandKind::Explore,
    },
    CliCommand {
        name: "catch",
        usage: "catch <pokemon>",
        description: "Throws a Pokeball at a Pokemon",
        kind: CommandKind::Catch,
    },
    CliCommand {
        name: "pokedex",
        usage: "pokedex",
        description: "Lists the Pokemon caught this session",
        kind: CommandKind::Pokedex,
    },
    CliCommand {
        name: "cache",
        usage: "cache",
        description: "Shows what the response cache currently holds",
        kind: CommandKind::Cache,
    },
    CliCommand {
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
        kind: CommandKind::Exit,
    },
];

/// Looks up a command by name.
pub fn find_command(name: &str) -> Option<&'static CliCommand> {
    COMMANDS.iter().find(|command| command.name == name)
}

/// Lowercases `text` and splits it on whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

/// Decides a catch: a roll at or below `MAX_EXPERIENCE - difficulty` wins.
///
/// Anything harder than `MAX_EXPERIENCE` can never be caught.
pub fn catch_succeeds(difficulty: u32, roll: u32) -> bool {
    i64::from(roll) <= i64::from(MAX_EXPERIENCE) - i64::from(difficulty)
}

// == Session ==
/// State carried between commands.
pub struct Session {
    api: PokeApi,
    page_size: u32,
    /// Page currently shown, `None` before the first `map`
    cursor: Option<u32>,
    /// Whether the listing continues after `cursor`
    has_next: bool,
    caught: BTreeSet<String>,
    rng: StdRng,
}

impl Session {
    pub fn new(api: PokeApi, page_size: u32) -> Self {
        Self::with_rng(api, page_size, StdRng::from_entropy())
    }

    /// Create a session with a caller-provided random source
    pub fn with_rng(api: PokeApi, page_size: u32, rng: StdRng) -> Self {
        Self {
            api,
            page_size,
            cursor: None,
            has_next: true,
            caught: BTreeSet::new(),
            rng,
        }
    }

    /// The page currently shown, if any.
    pub fn cursor(&self) -> Option<u32> {
        self.cursor
    }

    /// Names caught so far, sorted.
    pub fn caught(&self) -> impl Iterator<Item = &str> {
        self.caught.iter().map(String::as_str)
    }

    // == Execute ==
    /// Runs one input line, writing human-readable output to `out`.
    pub async fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let words = clean_input(line);
        let Some((name, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };

        let Some(command) = find_command(name) else {
            writeln!(out, "command was not found")?;
            return Ok(Flow::Continue);
        };
        debug!("Dispatching '{}' with {} argument(s)", command.name, args.len());

        match command.kind {
            CommandKind::Help => self.help(out)?,
            CommandKind::Map => self.map_forward(out).await?,
            CommandKind::MapBack => self.map_back(out).await?,
            CommandKind::Explore => {
                let area = required_arg(args, command)?;
                self.explore(area, out).await?
            }
            CommandKind::Catch => {
                let name = required_arg(args, command)?;
                self.catch(name, out).await?
            }
            CommandKind::Pokedex => self.pokedex(out)?,
            CommandKind::Cache => self.cache(out).await?,
            CommandKind::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for command in COMMANDS {
            writeln!(out, "{}: {}", command.usage, command.description)?;
        }
        Ok(())
    }

    async fn map_forward<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.cursor.is_some() && !self.has_next {
            writeln!(out, "you're on the last page")?;
            return Ok(());
        }

        let target = self.cursor.map_or(1, |page| page + 1);
        self.show_page(target, out).await
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        match self.cursor {
            Some(page) if page > 1 => self.show_page(page - 1, out).await,
            _ => {
                writeln!(out, "you're on the first page")?;
                Ok(())
            }
        }
    }

    /// Fetches and prints `page`, moving the cursor only on success.
    async fn show_page<W: Write>(&mut self, page: u32, out: &mut W) -> Result<()> {
        let listing = self.api.location_page(self.page_size, page).await?;

        self.cursor = Some(page);
        self.has_next = listing.has_next();

        for location in &listing.results {
            writeln!(out, "{}", location.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<()> {
        let names = self.api.list_encounters(area).await?;

        writeln!(out, "Exploring {}...", area)?;
        writeln!(out, "Found Pokemon:")?;
        for name in names {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let difficulty = self.api.entity_difficulty(name).await?;

        writeln!(out, "Throwing a Pokeball at {}...", name)?;
        let roll = self.rng.gen_range(0..MAX_EXPERIENCE);
        debug!("Catch roll {} against difficulty {}", roll, difficulty);

        if catch_succeeds(difficulty, roll) {
            writeln!(out, "{} was caught!", name)?;
            self.caught.insert(name.to_string());
        } else {
            writeln!(out, "{} escaped!", name)?;
        }
        Ok(())
    }

    fn pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.caught.is_empty() {
            writeln!(out, "Your Pokedex is empty")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for name in &self.caught {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn cache<W: Write>(&self, out: &mut W) -> Result<()> {
        let cache = self.api.cache();
        let stats = cache.stats().await;

        writeln!(
            out,
            "Cache (reap interval {:?}): {} entries, {} hits, {} misses ({:.0}% hit rate), {} reaped",
            cache.interval(),
            stats.total_entries,
            stats.hits,
            stats.misses,
            stats.hit_rate() * 100.0,
            stats.reaped
        )?;
        for entry in cache.entries().await {
            writeln!(
                out,
                " - {} {:>7} bytes  {}",
                entry.inserted_at.format("%H:%M:%S"),
                entry.size,
                entry.key
            )?;
        }
        Ok(())
    }
}

fn required_arg<'a>(args: &'a [String], command: &CliCommand) -> Result<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or_else(|| PokedexError::InvalidArgument(format!("usage: {}", command.usage)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input() {
        let cases = [
            ("  hello  world  ", vec!["hello", "world"]),
            ("  hello  wo rl  ", vec!["hello", "wo", "rl"]),
            ("  hello  ", vec!["hello"]),
            ("Charmander Bulbasaur PIKACHU", vec!["charmander", "bulbasaur", "pikachu"]),
            ("   ", vec![]),
        ];

        for (input, expected) in cases {
            assert_eq!(clean_input(input), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_find_command() {
        assert_eq!(find_command("mapb").map(|c| c.name), Some("mapb"));
        assert!(find_command("fly").is_none());
    }

    #[test]
    fn test_catch_succeeds() {
        assert!(catch_succeeds(0, MAX_EXPERIENCE - 1));
        assert!(catch_succeeds(600, 400));
        assert!(!catch_succeeds(600, 401));
        // Exactly the maximum is caught only on a zero roll
        assert!(catch_succeeds(MAX_EXPERIENCE, 0));
        assert!(!catch_succeeds(MAX_EXPERIENCE, 1));
        // Anything harder is never caught
        assert!(!catch_succeeds(1200, 0));
        assert!(!catch_succeeds(u32::MAX, 0));
    }
}
