//! Movement between tiles.
//! This module owns exit checks, stamina cost and the clock advance for a move.
//! It does not own tile descriptions; those come from `info`.

use super::*;
use crate::clock::MOVE_MINUTES;

impl Game {
    pub(super) fn handle_move(&mut self, command: &Command) -> String {
        let Some(dir) = command.args.first().and_then(|w| Direction::parse(w)) else {
            return "Which direction? Try north, south, east or west.".to_string();
        };

        if let Some(enc) = self.session.encounter() {
            return format!("You cannot leave while locked in combat with {}!", enc.enemy_name);
        }

        let from = self.player.pos;
        if let Some(tile) = self.current_tile()
            && tile.blocked.contains(&dir)
            && let Some((_, guard)) = self.world.enemies_at(from).next()
        {
            return format!("Path blocked by {}. Defeat it to proceed.", guard.name);
        }

        let to = from.step(dir);
        if !self.world.in_bounds(to) || self.world.tile(to).is_none() {
            return "A shimmering magical barrier blocks your path.".to_string();
        }

        if self.player.stamina < MOVE_STAMINA_COST {
            return "You are too exhausted to move. Try meditating to recover stamina.".to_string();
        }

        self.player.stamina -= MOVE_STAMINA_COST;
        self.player.pos = to;
        self.log.push(LogEvent::Moved { from, to });
        debug!(?from, ?to, stamina = self.player.stamina, "player moved");

        let mut response = format!("You travel {}.\n\n{}", dir.name(), self.describe_location());
        self.pass_time(MOVE_MINUTES, &mut response);
        response
    }
}
