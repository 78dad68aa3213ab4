//! Command Registry
//!
//! Names, descriptions, and parsing for the REPL commands.

// == Command ==
/// One of the commands the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
    CacheStats,
}

/// Every command, in the order the help listing shows them.
pub const ALL_COMMANDS: [Command; 9] = [
    Command::Help,
    Command::Exit,
    Command::Map,
    Command::MapBack,
    Command::Explore,
    Command::Catch,
    Command::Inspect,
    Command::Pokedex,
    Command::CacheStats,
];

impl Command {
    // == Parse ==
    /// Looks up a command by its typed name.
    pub fn parse(word: &str) -> Option<Self> {
        ALL_COMMANDS.into_iter().find(|cmd| cmd.name() == word)
    }

    // == Name ==
    /// The name the user types.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
            Command::CacheStats => "cache",
        }
    }

    // == Description ==
    /// One-line description for the help listing.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Displays the next 20 location areas",
            Command::MapBack => "Displays the previous 20 location areas",
            Command::Explore => "Lists the pokemon found in a location area",
            Command::Catch => "Throws a pokeball at a pokemon",
            Command::Inspect => "Shows details of a caught pokemon",
            Command::Pokedex => "Lists all caught pokemon",
            Command::CacheStats => "Shows response cache statistics",
        }
    }
}
