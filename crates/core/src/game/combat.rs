//! Combat command handling.
//! This module resolves which enemy a combat command targets, opens sessions,
//! runs one player/enemy exchange per command and writes the results back onto
//! the persistent player, enemy and tile. It does not own combat math; that
//! lives in `crate::combat`.

use super::*;
use tracing::warn;

use crate::combat::session::TurnOutcome;

const FILLER_WORDS: [&str; 5] = ["the", "at", "with", "using", "on"];

/// Splits a trailing element name off combat arguments and drops filler words.
fn split_target(args: &[String]) -> (String, Option<Element>) {
    let mut words: Vec<&str> = args.iter().map(String::as_str).collect();
    let element = words.last().and_then(|w| Element::parse(w));
    if element.is_some() {
        words.pop();
    }
    let target =
        words.into_iter().filter(|w| !FILLER_WORDS.contains(w)).collect::<Vec<_>>().join(" ");
    (target, element)
}

fn push_turn(lines: &mut Vec<String>, turn: TurnOutcome) {
    lines.extend(turn.status_messages);
    if !turn.message.is_empty() {
        lines.push(turn.message);
    }
}

impl Game {
    pub(super) fn handle_combat(&mut self, action: CombatAction, args: &[String]) -> String {
        let (target, element) = split_target(args);
        let pos = self.player.pos;
        let action = match (action, element) {
            (CombatAction::Attack, Some(e)) if e != Element::Physical => CombatAction::Elemental,
            (action, _) => action,
        };

        if let Some(current) = self.session.current_enemy() {
            if !self.world.enemies.contains_key(current) {
                warn!(?current, "session enemy vanished from the world");
                self.session.end_combat();
                return CombatError::EnemyMissing(current).to_string();
            }
            if !target.is_empty() {
                match self.world.find_enemy_at(pos, &target) {
                    Some(id) if id == current => {}
                    Some(_) => {
                        let name = self.session.encounter().map(|e| e.enemy_name.clone());
                        return format!(
                            "You are locked in combat with {}!",
                            name.unwrap_or_default()
                        );
                    }
                    None => return format!("There is no {target} here to fight."),
                }
            }
            return self.exchange(action, element);
        }

        if self.world.enemies_at(pos).next().is_none() {
            return "There are no enemies here to fight.".to_string();
        }
        let Some(id) = self.world.find_enemy_at(pos, &target) else {
            return format!("There is no {target} here to fight.");
        };
        let (Some(enemy), Some(tile)) = (self.world.enemies.get(id), self.world.tile(pos)) else {
            return "There are no enemies here to fight.".to_string();
        };

        let message = self.session.start_combat(&self.player, id, enemy, tile.terrain);
        self.log.push(LogEvent::CombatStarted { enemy: id });
        message
    }

    /// One player turn followed by one enemy turn.
    fn exchange(&mut self, action: CombatAction, element: Option<Element>) -> String {
        let mut lines = Vec::new();

        let player_turn = match self.session.process_player_turn(action, element, self.dice.as_mut()) {
            Ok(turn) => turn,
            Err(err) => return err.to_string(),
        };
        let dealt = player_turn.damage;
        push_turn(&mut lines, player_turn);

        let Some(enc) = self.session.encounter_mut() else {
            return CombatError::NotInCombat.to_string();
        };
        enc.enemy_stats.health -= dealt;
        if enc.enemy_stats.is_defeated() {
            return self.resolve_victory(lines, action);
        }
        if enc.player_stats.is_defeated() {
            return self.resolve_defeat(lines);
        }

        let enemy_turn = match self.session.process_enemy_turn(self.dice.as_mut()) {
            Ok(turn) => turn,
            Err(err) => return err.to_string(),
        };
        let taken = enemy_turn.damage;
        let phase = enemy_turn.phase_entered;
        push_turn(&mut lines, enemy_turn);

        let Some(enc) = self.session.encounter_mut() else {
            return CombatError::NotInCombat.to_string();
        };
        if let Some(phase) = phase {
            self.log.push(LogEvent::BossPhaseChanged { enemy: enc.enemy, phase });
        }
        enc.player_stats.health -= taken;
        if enc.enemy_stats.is_defeated() {
            return self.resolve_victory(lines, action);
        }
        if enc.player_stats.is_defeated() {
            return self.resolve_defeat(lines);
        }

        self.sync_health();
        if let Some(block) = self.session.format_combat_status() {
            lines.push(String::new());
            lines.push(block);
        }
        let mut response = lines.join("\n");
        self.pass_time(action.duration_minutes(), &mut response);
        response
    }

    /// Copies session health onto the persistent player and enemy.
    fn sync_health(&mut self) {
        let Some(enc) = self.session.encounter() else {
            return;
        };
        self.player.health = enc.player_stats.health.clamp(0, self.player.max_health);
        if let Some(enemy) = self.world.enemies.get_mut(enc.enemy) {
            enemy.health = enc.enemy_stats.health.max(0);
        }
    }

    fn resolve_victory(&mut self, mut lines: Vec<String>, action: CombatAction) -> String {
        let Some(enc) = self.session.end_combat() else {
            return CombatError::NotInCombat.to_string();
        };
        let pos = self.player.pos;
        self.player.health = enc.player_stats.health.clamp(1, self.player.max_health);

        let was_blocked = self.current_tile().is_some_and(|t| !t.blocked.is_empty());
        if let Some(enemy) = self.world.remove_enemy(pos, enc.enemy) {
            lines.push(format!("You have defeated {}!", enemy.name));
            if !enemy.drops.is_empty() {
                lines.push(format!("It dropped: {}.", enemy.drops.join(", ")));
                if let Some(tile) = self.world.tile_mut(pos) {
                    tile.items.extend(enemy.drops);
                }
            }
        }
        if was_blocked && self.current_tile().is_some_and(|t| t.blocked.is_empty()) {
            lines.push("The way forward is clear.".to_string());
        }
        self.log.push(LogEvent::EnemyDefeated { enemy: enc.enemy });

        let mut response = lines.join("\n");
        self.pass_time(action.duration_minutes(), &mut response);
        response
    }

    /// Soft defeat: the player survives at 1 health and the enemy keeps its wounds.
    fn resolve_defeat(&mut self, mut lines: Vec<String>) -> String {
        let Some(enc) = self.session.end_combat() else {
            return CombatError::NotInCombat.to_string();
        };
        self.player.health = 1;
        if let Some(enemy) = self.world.enemies.get_mut(enc.enemy) {
            enemy.health = enc.enemy_stats.health.max(1);
        }
        lines.push(format!(
            "You have been defeated by {}... but manage to escape with your life.",
            enc.enemy_name
        ));
        self.log.push(LogEvent::PlayerDefeated { enemy: enc.enemy });
        lines.join("\n")
    }

    pub(super) fn handle_flee(&mut self) -> String {
        if !self.session.in_combat() {
            return "You are not in combat.".to_string();
        }
        self.sync_health();
        let Some(enc) = self.session.end_combat() else {
            return CombatError::NotInCombat.to_string();
        };
        self.log.push(LogEvent::Fled { enemy: enc.enemy });
        format!("You break away from {} and retreat to catch your breath.", enc.enemy_name)
    }
}
