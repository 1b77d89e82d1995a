//! Inventory and resource commands.
//! This module owns moving items between tile and pack, terrain gathering and
//! meditation. Item names are plain strings; matching is by fragment.

use super::*;
use crate::clock::{GATHER_MINUTES, MEDITATE_MINUTES};
use crate::content::gatherables;

const MEDITATE_STAMINA: i32 = 40;
/// Extra stamina from meditating somewhere quiet and enclosed.
const MEDITATE_SHELTER_BONUS: i32 = 10;
const MEDITATE_HEALTH: i32 = 10;

impl Game {
    pub(super) fn handle_take(&mut self, command: &Command) -> String {
        let wanted = command.rest();
        let pos = self.player.pos;
        let Some(tile) = self.world.tile_mut(pos) else {
            return format!("There is no {wanted} here.");
        };
        let Some(i) = tile.find_item(&wanted) else {
            return format!("There is no {wanted} here.");
        };

        let item = tile.items.remove(i);
        self.player.inventory.push(item.clone());
        let response = format!("You take the {item}.");
        self.log.push(LogEvent::ItemTaken { item });
        response
    }

    pub(super) fn handle_drop(&mut self, command: &Command) -> String {
        let wanted = command.rest();
        let Some(i) = self.player.find_item(&wanted) else {
            return format!("You don't have {wanted}.");
        };
        let pos = self.player.pos;
        let Some(tile) = self.world.tile_mut(pos) else {
            return format!("You can't drop {wanted} here.");
        };

        let item = self.player.inventory.remove(i);
        tile.items.push(item.clone());
        let response = format!("You drop the {item}.");
        self.log.push(LogEvent::ItemDropped { item });
        response
    }

    pub(super) fn handle_gather(&mut self, command: &Command) -> String {
        if self.session.in_combat() {
            return "You can't gather while fighting!".to_string();
        }
        let Some(terrain) = self.current_tile().map(|t| t.terrain) else {
            return "There is nothing here to gather.".to_string();
        };
        let available = gatherables(terrain);

        let resource = match command.args.first() {
            Some(wanted) => {
                let needle = wanted.replace(' ', "_");
                match available.iter().find(|r| r.contains(needle.as_str())) {
                    Some(found) => *found,
                    None => {
                        return format!(
                            "You can't find any {wanted} in the {}. You might find: {}.",
                            terrain.name(),
                            available.join(", ")
                        );
                    }
                }
            }
            None => available[self.dice.pick_index(available.len())],
        };

        self.player.inventory.push(format!("gathered {resource}"));
        let mut response = match command.args.get(1) {
            Some(source) => format!("You gather some {resource} from {source}."),
            None => format!("You gather some {resource}."),
        };
        self.pass_time(GATHER_MINUTES, &mut response);
        response
    }

    pub(super) fn handle_inventory(&mut self) -> String {
        if self.player.inventory.is_empty() {
            return "Your inventory is empty.".to_string();
        }
        let mut lines = vec!["You are carrying:".to_string()];
        lines.extend(self.player.inventory.iter().map(|item| format!("  - {item}")));
        lines.join("\n")
    }

    pub(super) fn handle_meditate(&mut self) -> String {
        let pos = self.player.pos;
        if self.world.enemies_at(pos).next().is_some() {
            return "You cannot find peace with enemies nearby.".to_string();
        }

        let shelter = matches!(
            self.current_tile().map(|t| t.terrain),
            Some(TerrainType::Ruins | TerrainType::Cave)
        );
        let gain = if shelter { MEDITATE_STAMINA + MEDITATE_SHELTER_BONUS } else { MEDITATE_STAMINA };

        let p = &mut self.player;
        let stamina_before = p.stamina;
        p.stamina = (p.stamina + gain).min(p.max_stamina);
        p.health = (p.health + MEDITATE_HEALTH).min(p.max_health);

        let mut response = format!(
            "You close your eyes and let the world settle. Stamina restored by {}.",
            p.stamina - stamina_before
        );
        if shelter {
            response.push_str(" The stillness of this place deepens your focus.");
        }
        self.pass_time(MEDITATE_MINUTES, &mut response);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::combat::dice::FixedDice;
    use crate::content::keys;

    #[test]
    fn take_and_drop_move_items() {
        let (mut game, _) = guarded_field_game();
        assert_eq!(game.execute("take map"), "You take the old_map.");
        assert_eq!(game.player().inventory, vec!["old_map".to_string()]);
        assert!(game.world().tile(FIELD_START).unwrap().items.is_empty());
        assert_eq!(game.execute("take map"), "There is no map here.");

        assert_eq!(game.execute("drop old map"), "You drop the old_map.");
        assert!(game.player().inventory.is_empty());
        assert_eq!(game.execute("drop sword"), "You don't have sword.");
        assert_eq!(
            game.log(),
            &[
                LogEvent::ItemTaken { item: "old_map".to_string() },
                LogEvent::ItemDropped { item: "old_map".to_string() },
            ]
        );
    }

    #[test]
    fn inventory_listing() {
        let mut game = open_field_game();
        assert_eq!(game.execute("inventory"), "Your inventory is empty.");
        game.player.inventory.push("crystal_focus".to_string());
        assert_eq!(game.execute("i"), "You are carrying:\n  - crystal_focus");
    }

    #[test]
    fn gather_named_resource_from_source() {
        let mut game = open_field_game();
        let response = game.execute("gather herbs from the meadow");
        assert!(response.starts_with("You gather some herbs from the meadow."));
        assert_eq!(game.player().inventory, vec!["gathered herbs".to_string()]);
        assert_eq!(game.clock().formatted(), "Day 1, 08:10");
    }

    #[test]
    fn gather_without_a_name_picks_from_terrain() {
        let mut game = open_field_game();
        game.execute("forage");
        // Fixed dice always pick the first clearing resource.
        assert_eq!(game.player().inventory, vec!["gathered flowers".to_string()]);
    }

    #[test]
    fn gather_refuses_foreign_resources_and_combat() {
        let mut game = open_field_game();
        let response = game.execute("gather crystals");
        assert!(response.contains("You can't find any crystals in the clearing"));
        assert!(game.player().inventory.is_empty());

        let (mut fighting, _) = guarded_field_game();
        fighting.execute("attack");
        assert_eq!(fighting.execute("gather herbs"), "You can't gather while fighting!");
    }

    #[test]
    fn meditation_restores_within_limits() {
        let mut game = open_field_game();
        game.player.stamina = 30;
        game.player.health = 95;
        game.execute("meditate");
        assert_eq!(game.player().stamina, 70);
        assert_eq!(game.player().health, 100);
        assert_eq!(game.clock().formatted(), "Day 1, 08:30");

        game.execute("rest");
        assert_eq!(game.player().stamina, 100);
    }

    #[test]
    fn meditation_runs_deeper_in_ruins() {
        let (mut game, wisp) = arena_game(keys::TWILIGHT_WISP, None, Box::new(FixedDice::test_mode()));
        assert_eq!(game.execute("meditate"), "You cannot find peace with enemies nearby.");

        game.world.remove_enemy(FIELD_START, wisp);
        game.player.stamina = 0;
        game.execute("meditate");
        assert_eq!(game.player().stamina, 50);
    }
}
