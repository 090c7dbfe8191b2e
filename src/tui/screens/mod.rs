//! Screens of the TUI state machine.

mod match_screen;
mod name_entry;
mod standings;

pub use match_screen::MatchScreen;
pub use name_entry::NameEntryScreen;
pub use standings::StandingsScreen;
