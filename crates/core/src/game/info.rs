//! Read-only commands: look, status, map, help and time.
//! None of these advance the clock.

use super::*;
use crate::combat::elements::{base_status_chance, status_for};

const HELP_GROUPS: &[(&str, &str)] = &[
    ("Movement", "north/south/east/west (n/s/e/w), go <direction>"),
    ("Looking", "look, look at <thing>, status, inventory, map, time"),
    ("Items", "take <item>, drop <item>, gather [resource] [from <source>]"),
    ("Combat", "attack [enemy] [element], defend, dodge, special, flee"),
    ("Recovery", "meditate"),
    ("Your path", "choose warrior|mystic|stealth"),
    ("Roleplay", "say <words>, emote <action>, think <thought>, or just describe what you do"),
];

impl Game {
    /// Full description of the tile the player stands on.
    pub fn describe_location(&self) -> String {
        let pos = self.player.pos;
        let Some(tile) = self.world.tile(pos) else {
            return "You stand in formless mist.".to_string();
        };

        let mut lines = vec![
            format!("== {} ==", tile.area),
            tile.description.clone(),
            format!("Terrain: {}", tile.terrain.name()),
        ];
        if !tile.items.is_empty() {
            lines.push(format!("You see: {}", tile.items.join(", ")));
        }
        let enemies: Vec<&str> = self.world.enemies_at(pos).map(|(_, e)| e.name.as_str()).collect();
        if !enemies.is_empty() {
            lines.push(format!("Enemies: {}", enemies.join(", ")));
        }

        let guarded = !enemies.is_empty();
        let exits: Vec<String> = Direction::ALL
            .into_iter()
            .filter(|dir| self.world.tile(pos.step(*dir)).is_some())
            .map(|dir| {
                if guarded && tile.blocked.contains(&dir) {
                    format!("{} (blocked)", dir.name())
                } else {
                    dir.name().to_string()
                }
            })
            .collect();
        lines.push(format!("Exits: {}", exits.join(", ")));
        lines.join("\n")
    }

    pub(super) fn handle_look(&mut self, command: &Command) -> String {
        let target = command.rest();
        if target.is_empty() {
            return self.describe_location();
        }

        let pos = self.player.pos;
        if let Some(id) = self.world.find_enemy_at(pos, &target)
            && let Some(enemy) = self.world.enemies.get(id)
        {
            return format!(
                "{}: {} ({}/{} HP)",
                enemy.name, enemy.description, enemy.health, enemy.max_health
            );
        }
        if let Some(tile) = self.current_tile()
            && let Some(i) = tile.find_item(&target)
        {
            return format!("You see {} lying here.", tile.items[i]);
        }
        if let Some(i) = self.player.find_item(&target) {
            return format!("You carry {}.", self.player.inventory[i]);
        }
        format!("You don't see any {target} here.")
    }

    pub(super) fn handle_status(&mut self) -> String {
        let p = &self.player;
        let mut lines = vec![
            p.name.clone(),
            format!("Health: {}/{}", p.health, p.max_health),
            format!("Stamina: {}/{}", p.stamina, p.max_stamina),
            format!("Path: {}", p.path.map_or("undecided", PathType::name)),
            format!("Position: ({}, {})", p.pos.x, p.pos.y),
            format!("Time: {} ({})", self.clock.formatted(), self.clock.time_of_day().name()),
        ];
        if let Some(block) = self.session.format_combat_status() {
            lines.push(String::new());
            lines.push(block);
        }
        lines.join("\n")
    }

    pub(super) fn handle_map(&mut self) -> String {
        let mut rows = Vec::new();
        for y in (0..self.world.height).rev() {
            let row: String = (0..self.world.width)
                .map(|x| {
                    let pos = Pos { y, x };
                    if pos == self.player.pos {
                        '@'
                    } else if self.world.enemies_at(pos).next().is_some() {
                        '!'
                    } else if self.world.tile(pos).is_some_and(|t| t.authored) {
                        '*'
                    } else {
                        '.'
                    }
                })
                .collect();
            rows.push(row);
        }
        rows.push("@ you  ! enemies  * landmark".to_string());
        rows.join("\n")
    }

    pub(super) fn handle_help(&mut self) -> String {
        let mut lines = vec!["Commands:".to_string()];
        lines.extend(HELP_GROUPS.iter().map(|(group, words)| format!("  {group}: {words}")));
        lines.push(String::new());
        lines.push("Elements (status effect, base chance):".to_string());
        lines.extend(Element::ALL.iter().map(|e| {
            format!("  {}: {} {}%", e.name(), status_for(*e).name(), base_status_chance(*e))
        }));
        lines.join("\n")
    }

    pub(super) fn handle_time(&mut self) -> String {
        format!("{}. {}", self.clock.formatted(), self.clock.time_of_day().description())
    }
}
