//! REPL Module
//!
//! The interactive prompt: reads a line, normalizes it, and dispatches to
//! the matching command. Command failures are printed and the loop goes on;
//! only `exit` or end of input ends the session.

mod commands;

pub use commands::{Command, ALL_COMMANDS};

use std::collections::HashMap;
use std::io::Write;

use rand::Rng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::Pokemon;

// == Input Normalization ==
/// Splits user input into lowercase words, dropping surrounding whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

// == Repl ==
/// Interactive Pokedex session state.
pub struct Repl {
    client: ApiClient,
    /// Pokemon caught this session, by name
    pokedex: HashMap<String, Pokemon>,
    /// Pagination URL for the next `map` page; None means the first page
    next_page: Option<String>,
    /// Pagination URL for the previous `map` page
    previous_page: Option<String>,
}

impl Repl {
    // == Constructor ==
    /// Creates a new session over the given API client.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            pokedex: HashMap::new(),
            next_page: None,
            previous_page: None,
        }
    }

    // == Run ==
    /// Runs the prompt loop until `exit` or end of input.
    pub async fn run(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("Pokedex > ");
            std::io::stdout().flush()?;

            let line = match lines.next_line().await? {
                Some(line) => line,
                None => break, // EOF
            };

            let words = clean_input(&line);
            let Some(word) = words.first() else {
                continue;
            };
            let arg = words.get(1).map(String::as_str);

            match Command::parse(word) {
                Some(Command::Exit) => {
                    println!("Closing the Pokedex... Goodbye!");
                    break;
                }
                Some(command) => {
                    if let Err(e) = self.dispatch(command, arg).await {
                        println!("{}", e);
                    }
                }
                None => println!("Unknown command"),
            }
        }

        Ok(())
    }

    // == Dispatch ==
    /// Runs a single command.
    async fn dispatch(&mut self, command: Command, arg: Option<&str>) -> Result<()> {
        debug!(command = command.name(), ?arg, "dispatching");

        match command {
            Command::Help => self.command_help(),
            Command::Map => self.command_map(false).await?,
            Command::MapBack => self.command_map(true).await?,
            Command::Explore => match arg {
                Some(area) => self.command_explore(area).await?,
                None => println!("Usage: explore <location-area>"),
            },
            Command::Catch => match arg {
                Some(name) => self.command_catch(name).await?,
                None => println!("Usage: catch <pokemon>"),
            },
            Command::Inspect => match arg {
                Some(name) => self.command_inspect(name),
                None => println!("Usage: inspect <pokemon>"),
            },
            Command::Pokedex => self.command_pokedex(),
            Command::CacheStats => self.command_cache_stats().await,
            // Handled in the loop before dispatch
            Command::Exit => {}
        }

        Ok(())
    }

    // == Help ==
    fn command_help(&self) {
        println!("Welcome to the Pokedex!");
        println!("Usage:");
        println!();
        for command in ALL_COMMANDS {
            println!("{}: {}", command.name(), command.description());
        }
    }

    // == Map / MapBack ==
    /// Shows one page of location areas and remembers where it is.
    async fn command_map(&mut self, backwards: bool) -> Result<()> {
        let page_url = if backwards {
            match &self.previous_page {
                Some(url) => Some(url.clone()),
                None => {
                    println!("You're on the first page");
                    return Ok(());
                }
            }
        } else {
            self.next_page.clone()
        };

        let page = self.client.location_areas(page_url.as_deref()).await?;

        for area in &page.results {
            println!("{}", area.name);
        }

        self.next_page = page.next;
        self.previous_page = page.previous;
        Ok(())
    }

    // == Explore ==
    async fn command_explore(&self, area: &str) -> Result<()> {
        println!("Exploring {}...", area);
        let area = self.client.location_area(area).await?;

        println!("Found Pokemon:");
        for encounter in &area.pokemon_encounters {
            println!(" - {}", encounter.pokemon.name);
        }
        Ok(())
    }

    // == Catch ==
    async fn command_catch(&mut self, name: &str) -> Result<()> {
        println!("Throwing a Pokeball at {}...", name);
        let pokemon = self.client.pokemon(name).await?;

        let chance = catch_chance(pokemon.base_experience.unwrap_or(0));
        let roll = rand::thread_rng().gen_range(0..100);

        if roll < chance {
            println!("{} was caught!", pokemon.name);
            self.pokedex.insert(pokemon.name.clone(), pokemon);
        } else {
            println!("{} escaped!", pokemon.name);
        }
        Ok(())
    }

    // == Inspect ==
    fn command_inspect(&self, name: &str) {
        let Some(pokemon) = self.pokedex.get(name) else {
            println!("you have not caught that pokemon");
            return;
        };

        println!("Name: {}", pokemon.name);
        println!("Height: {}", pokemon.height);
        println!("Weight: {}", pokemon.weight);
        println!("Stats:");
        for slot in &pokemon.stats {
            println!("  -{}: {}", slot.stat.name, slot.base_stat);
        }
        println!("Types:");
        for slot in &pokemon.types {
            println!("  - {}", slot.kind.name);
        }
    }

    // == Pokedex ==
    fn command_pokedex(&self) {
        if self.pokedex.is_empty() {
            println!("You haven't caught any Pokemon yet!");
            return;
        }

        println!("Your Pokedex:");
        for name in self.pokedex.keys() {
            println!(" - {}", name);
        }
    }

    // == Cache Stats ==
    async fn command_cache_stats(&self) {
        let stats = self.client.cache_stats().await;
        println!("Response cache:");
        println!("  entries: {}", stats.total_entries);
        println!("  hits: {}", stats.hits);
        println!("  misses: {}", stats.misses);
        println!("  swept: {}", stats.swept);
        println!("  hit rate: {:.1}%", stats.hit_rate() * 100.0);
    }

    // == Shutdown ==
    /// Tears the session down, closing the cache behind the client.
    pub async fn shutdown(self) {
        self.client.close().await;
    }
}

// == Catch Chance ==
/// Catch probability in percent, scaled down by base experience.
///
/// A pokemon with no experience is the easiest catch; the strongest are
/// clamped so every throw has some chance either way.
fn catch_chance(base_experience: u32) -> u32 {
    let scaled = 340u32.saturating_sub(base_experience) * 100 / 340;
    scaled.clamp(30, 90)
}
