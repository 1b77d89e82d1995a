//! Per-player game context.
//! A [`Game`] owns everything one player's commands can touch: world, player,
//! combat session, clock and dice. Commands run one at a time through
//! [`Game::execute`]; handlers live in the submodules.

use tracing::debug;

use crate::clock::GameClock;
use crate::combat::dice::Dice;
use crate::combat::session::CombatSession;
use crate::command::{Command, CommandType, parse};
use crate::config::GameConfig;
use crate::content;
use crate::state::{Player, Tile, World};
use crate::types::*;

mod combat;
mod hash;
mod info;
mod items;
mod movement;
mod roleplay;

#[cfg(test)]
mod test_support;

pub const MOVE_STAMINA_COST: i32 = 5;

pub struct Game {
    config: GameConfig,
    world: World,
    player: Player,
    session: CombatSession,
    clock: GameClock,
    dice: Box<dyn Dice>,
    log: Vec<LogEvent>,
    commands_run: u64,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let dice = config.build_dice();
        Self::with_dice(config, dice)
    }

    /// Starts a game on the default world with an explicit dice source.
    pub fn with_dice(config: GameConfig, dice: Box<dyn Dice>) -> Self {
        Self::with_world(config, content::build_world(), content::START_POS, dice)
    }

    pub fn with_world(config: GameConfig, world: World, start: Pos, dice: Box<dyn Dice>) -> Self {
        let mut player = Player::new(config.player_name.clone(), start);
        player.path = config.path;
        player.inventory = config.starting_inventory.clone();

        Self {
            config,
            world,
            player,
            session: CombatSession::new(),
            clock: GameClock::default(),
            dice,
            log: Vec::new(),
            commands_run: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn session(&self) -> &CombatSession {
        &self.session
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn commands_run(&self) -> u64 {
        self.commands_run
    }

    /// Parses and runs one command line, returning the narrative response.
    pub fn execute(&mut self, line: &str) -> String {
        self.commands_run += 1;
        let command = parse(line);
        debug!(kind = ?command.kind, args = ?command.args, "command parsed");
        if !command.is_valid() {
            return command.error_message;
        }
        self.dispatch(&command)
    }

    fn dispatch(&mut self, command: &Command) -> String {
        match command.kind {
            CommandType::Move => self.handle_move(command),
            CommandType::Look => self.handle_look(command),
            CommandType::Status => self.handle_status(),
            CommandType::Inventory => self.handle_inventory(),
            CommandType::Map => self.handle_map(),
            CommandType::Help => self.handle_help(),
            CommandType::Time => self.handle_time(),
            CommandType::Take => self.handle_take(command),
            CommandType::Drop => self.handle_drop(command),
            CommandType::Gather => self.handle_gather(command),
            CommandType::Attack => self.handle_combat(CombatAction::Attack, &command.args),
            CommandType::Defend => self.handle_combat(CombatAction::Defend, &command.args),
            CommandType::Dodge => self.handle_combat(CombatAction::Dodge, &command.args),
            CommandType::Special => self.handle_combat(CombatAction::Special, &command.args),
            CommandType::Flee => self.handle_flee(),
            CommandType::Meditate => self.handle_meditate(),
            CommandType::Choose => self.handle_choose(command),
            CommandType::Emote => self.handle_emote(command),
            CommandType::Say => self.handle_say(command),
            CommandType::Think => self.handle_think(command),
            CommandType::Roleplay => self.handle_roleplay(command),
        }
    }

    /// Advances the clock and appends any resulting narration to `response`.
    fn pass_time(&mut self, minutes: u32, response: &mut String) {
        for event in self.clock.advance(minutes) {
            response.push('\n');
            response.push_str(&event);
        }
    }

    fn current_tile(&self) -> Option<&Tile> {
        self.world.tile(self.player.pos)
    }
}
