pub mod clock;
pub mod combat;
pub mod command;
pub mod config;
pub mod content;
pub mod game;
pub mod journal;
pub mod replay;
pub mod state;
pub mod types;

pub use clock::GameClock;
pub use command::{Command, CommandType, parse};
pub use config::{DiceMode, GameConfig};
pub use game::Game;
pub use journal::{InputJournal, InputRecord};
pub use replay::*;
pub use state::{Enemy, Player, Tile, World};
pub use types::*;
