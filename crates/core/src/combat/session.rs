//! Combat session controller.
//! One [`CombatSession`] lives in each player's game context and holds at most
//! one active [`Encounter`]. It sequences player and enemy turns but leaves
//! victory, defeat and write-back of health to the command layer.

use tracing::{debug, info};

use super::boss::{boss_phase, handle_shadow_centaur_special, phase_transition_message};
use super::damage::{AttackResult, calculate_damage, get_dodge_result};
use super::dice::Dice;
use super::elements::terrain_element;
use super::identity::{EnemyIdentity, classify_entity};
use super::stats::CombatStats;
use super::status::apply_status_effects;
use super::strategy::determine_enemy_strategy;
use crate::state::{Enemy, Player};
use crate::types::{
    CombatAction, CombatError, Element, EnemyId, PathType, StatusEffect, TerrainType,
};

pub const FLAGSHIP_CRITICAL_CHANCE: i32 = 15;
const HEALTH_BAR_WIDTH: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encounter {
    pub enemy: EnemyId,
    pub enemy_name: String,
    pub identity: EnemyIdentity,
    pub player_path: Option<PathType>,
    pub player_stats: CombatStats,
    pub enemy_stats: CombatStats,
    pub terrain: TerrainType,
    pub turn_count: i32,
    /// Highest boss phase already narrated.
    pub announced_phase: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnOutcome {
    pub damage: i32,
    pub message: String,
    /// Expiry and periodic-damage lines from the acting side's status tick.
    pub status_messages: Vec<String>,
    /// Set when a boss crosses into a new phase this turn.
    pub phase_entered: Option<u8>,
}

impl TurnOutcome {
    fn new(damage: i32, message: impl Into<String>, status_messages: Vec<String>) -> Self {
        Self { damage, message: message.into(), status_messages, phase_entered: None }
    }
}

#[derive(Debug, Default)]
pub struct CombatSession {
    encounter: Option<Encounter>,
}

impl CombatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_combat(&self) -> bool {
        self.encounter.is_some()
    }

    pub fn current_enemy(&self) -> Option<EnemyId> {
        self.encounter.as_ref().map(|e| e.enemy)
    }

    pub fn encounter(&self) -> Option<&Encounter> {
        self.encounter.as_ref()
    }

    pub fn encounter_mut(&mut self) -> Option<&mut Encounter> {
        self.encounter.as_mut()
    }

    /// Opens a session against `enemy` and returns the encounter narration.
    pub fn start_combat(
        &mut self,
        player: &Player,
        enemy_id: EnemyId,
        enemy: &Enemy,
        terrain: TerrainType,
    ) -> String {
        let identity = classify_entity(&enemy.name);
        let mut player_stats = CombatStats::from_player(player);
        let mut enemy_stats = CombatStats::from_enemy(enemy);

        player_stats.affinities.add(terrain_element(terrain), 1);

        let message = if identity.is_flagship {
            enemy_stats.affinities.set(Element::Shadow, 3);
            enemy_stats.affinities.set(Element::Physical, -3);
            enemy_stats.critical_chance = FLAGSHIP_CRITICAL_CHANCE;
            format!(
                "You face the {}, the dark mirror of your former self. Shadows coil around its hooves as it bars the way to your final challenge: reclaim what was lost or be consumed by the dark.",
                enemy.name
            )
        } else {
            format!("You encounter {}! Prepare for combat!", enemy.name)
        };

        info!(enemy = %enemy.name, terrain = terrain.name(), boss = identity.is_boss, "combat started");
        let announced_phase = boss_phase(&enemy_stats);
        self.encounter = Some(Encounter {
            enemy: enemy_id,
            enemy_name: enemy.name.clone(),
            identity,
            player_path: player.path,
            player_stats,
            enemy_stats,
            terrain,
            turn_count: 0,
            announced_phase,
        });
        message
    }

    /// Closes the session, handing back its final state.
    pub fn end_combat(&mut self) -> Option<Encounter> {
        let ended = self.encounter.take();
        if let Some(enc) = &ended {
            info!(enemy = %enc.enemy_name, turns = enc.turn_count, "combat ended");
        }
        ended
    }

    pub fn process_player_turn(
        &mut self,
        action: CombatAction,
        element: Option<Element>,
        dice: &mut dyn Dice,
    ) -> Result<TurnOutcome, CombatError> {
        let enc = self.encounter.as_mut().ok_or(CombatError::MissingStats)?;
        let element = element.unwrap_or(Element::Physical);

        let stunned = enc.player_stats.has_effect(StatusEffect::Stun);
        let (tick, status_messages) = apply_status_effects(&mut enc.player_stats);
        enc.player_stats.health -= tick;
        if enc.player_stats.is_defeated() {
            return Ok(TurnOutcome::new(0, "You were defeated by status effects!", status_messages));
        }
        if stunned {
            return Ok(TurnOutcome::new(
                0,
                "You are stunned and cannot act this turn!",
                status_messages,
            ));
        }

        let outcome = match action {
            CombatAction::Defend => {
                enc.player_stats.defense += 5;
                TurnOutcome::new(0, "You take a defensive stance, increasing your defense!", status_messages)
            }
            CombatAction::Dodge => {
                enc.player_stats.dodge_chance += 15;
                TurnOutcome::new(0, "You prepare to dodge, increasing your evasion!", status_messages)
            }
            CombatAction::Attack | CombatAction::Elemental => {
                let attacker = enc.player_stats.clone();
                match player_strike(enc, &attacker, element, true, dice) {
                    Some(result) => TurnOutcome::new(result.damage_dealt, result.message, status_messages),
                    None => TurnOutcome::new(0, "Your attack missed!", status_messages),
                }
            }
            CombatAction::Special => special_action(enc, dice, status_messages),
        };
        Ok(outcome)
    }

    pub fn process_enemy_turn(&mut self, dice: &mut dyn Dice) -> Result<TurnOutcome, CombatError> {
        let enc = self.encounter.as_mut().ok_or(CombatError::MissingStats)?;
        if enc.enemy_stats.is_defeated() {
            return Ok(TurnOutcome::new(0, "The enemy was defeated by status effects!", Vec::new()));
        }

        enc.turn_count += 1;
        let stunned = enc.enemy_stats.has_effect(StatusEffect::Stun);
        let (tick, status_messages) = apply_status_effects(&mut enc.enemy_stats);
        enc.enemy_stats.health -= tick;
        if enc.enemy_stats.is_defeated() {
            return Ok(TurnOutcome::new(0, "The enemy was defeated by status effects!", status_messages));
        }
        if stunned {
            return Ok(TurnOutcome::new(
                0,
                "The enemy is stunned and cannot attack this turn!",
                status_messages,
            ));
        }

        let mut phase_entered = None;
        let mut preamble = String::new();
        if enc.identity.is_flagship {
            let phase = boss_phase(&enc.enemy_stats);
            if phase > enc.announced_phase {
                enc.announced_phase = phase;
                phase_entered = Some(phase);
                if let Some(text) = phase_transition_message(phase) {
                    preamble = format!("{text}\n");
                }
            }
            let special = handle_shadow_centaur_special(
                &mut enc.enemy_stats,
                &mut enc.player_stats,
                enc.turn_count,
                dice,
            );
            if special.ability_used {
                return Ok(TurnOutcome {
                    damage: special.damage_dealt,
                    message: format!("{preamble}{}", special.message),
                    status_messages,
                    phase_entered,
                });
            }
        }

        let (action, element) = determine_enemy_strategy(&enc.enemy_stats, Some(&enc.identity), dice);
        debug!(?action, element = element.name(), turn = enc.turn_count, "enemy strategy");
        let (damage, message) = match action {
            CombatAction::Defend => {
                enc.enemy_stats.defense += 5;
                (0, "The enemy takes a defensive stance, increasing its defense!".to_string())
            }
            CombatAction::Dodge => {
                enc.enemy_stats.dodge_chance += 15;
                (0, "The enemy prepares to dodge, increasing its evasion!".to_string())
            }
            CombatAction::Attack | CombatAction::Elemental | CombatAction::Special => {
                if get_dodge_result(&enc.enemy_stats, &enc.player_stats, dice) {
                    (0, "You dodged the enemy's attack!".to_string())
                } else {
                    let result = calculate_damage(
                        &enc.enemy_stats,
                        &enc.player_stats,
                        Some(element),
                        Some(enc.terrain),
                        dice,
                    );
                    if let Some(effect) = result.status_applied {
                        let potency = dice.roll_range(1, 3);
                        let duration = dice.roll_range(2, 4);
                        enc.player_stats.add_status(effect, duration, potency, element);
                    }
                    (result.damage_dealt, result.message)
                }
            }
        };

        Ok(TurnOutcome { damage, message: format!("{preamble}{message}"), status_messages, phase_entered })
    }

    /// Health bars and active effects for both sides.
    pub fn format_combat_status(&self) -> Option<String> {
        let enc = self.encounter.as_ref()?;
        Some(format_status_block(&enc.player_stats, &enc.enemy_stats, &enc.enemy_name))
    }
}

/// Resolves a player strike with `attacker` standing in for the player's stats.
/// Returns `None` when the enemy dodges.
fn player_strike(
    enc: &mut Encounter,
    attacker: &CombatStats,
    element: Element,
    dodgeable: bool,
    dice: &mut dyn Dice,
) -> Option<AttackResult> {
    if dodgeable && get_dodge_result(attacker, &enc.enemy_stats, dice) {
        return None;
    }
    let mut result =
        calculate_damage(attacker, &enc.enemy_stats, Some(element), Some(enc.terrain), dice);
    if let Some(effect) = result.status_applied {
        let potency = dice.roll_range(1, 3);
        let duration = dice.roll_range(2, 4);
        enc.enemy_stats.add_status(effect, duration, potency, element);
    }
    if result.damage_dealt <= 0 {
        result.damage_dealt = (attacker.damage / 10).max(1);
    }
    Some(result)
}

fn special_action(enc: &mut Encounter, dice: &mut dyn Dice, status_messages: Vec<String>) -> TurnOutcome {
    let base = enc.player_stats.clone();
    let (attacker, element, dodgeable, opener) = match enc.player_path {
        Some(PathType::Warrior) => {
            let mut boosted = base;
            boosted.damage = boosted.damage * 3 / 2;
            (boosted, Element::Physical, true, "You unleash a warrior's fury!")
        }
        Some(PathType::Mystic) => {
            let element = strongest_magic(&base);
            (base, element, true, "You channel mystic energy into a focused spell!")
        }
        Some(PathType::Stealth) => {
            (base, Element::Shadow, false, "You strike from the shadows with a stealth assault!")
        }
        None => (base, Element::Physical, true, "You have no path to draw power from."),
    };

    match player_strike(enc, &attacker, element, dodgeable, dice) {
        Some(result) => TurnOutcome::new(
            result.damage_dealt,
            format!("{opener} {}", result.message),
            status_messages,
        ),
        None => TurnOutcome::new(0, format!("{opener} Your attack missed!"), status_messages),
    }
}

/// Highest non-physical affinity, first in enumeration order on ties.
fn strongest_magic(stats: &CombatStats) -> Element {
    let mut best = (Element::Fire, i32::MIN);
    for (element, affinity) in stats.affinities.iter().filter(|(e, _)| *e != Element::Physical) {
        if affinity > best.1 {
            best = (element, affinity);
        }
    }
    best.0
}

pub fn health_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * HEALTH_BAR_WIDTH as f64).clamp(0.0, HEALTH_BAR_WIDTH as f64)
        as usize;
    format!("[{}{}]", "█".repeat(filled), " ".repeat(HEALTH_BAR_WIDTH - filled))
}

fn effect_list(stats: &CombatStats) -> String {
    if stats.status_effects.is_empty() {
        return "None".to_string();
    }
    stats.status_effects.iter().map(|e| e.effect.name()).collect::<Vec<_>>().join(", ")
}

pub fn format_status_block(player: &CombatStats, enemy: &CombatStats, enemy_name: &str) -> String {
    [
        "=== COMBAT STATUS ===".to_string(),
        format!(
            "You: {}/{} HP {}",
            player.health,
            player.max_health,
            health_bar(player.health_percent())
        ),
        format!("Status Effects: {}", effect_list(player)),
        String::new(),
        format!(
            "{enemy_name}: {}/{} HP {}",
            enemy.health,
            enemy.max_health,
            health_bar(enemy.health_percent())
        ),
        format!("Status Effects: {}", effect_list(enemy)),
        "====================".to_string(),
    ]
    .join("\n")
}
