//! Single-attack resolution and dodge checks.
//! Both functions are read-only over their combatants; rolls come from the
//! caller's [`Dice`].

use tracing::debug;

use super::dice::Dice;
use super::elements::{self, attack_flavor, status_flavor};
use super::stats::CombatStats;
use crate::types::{Element, StatusEffect, TerrainType};

pub const CRITICAL_MULTIPLIER: f64 = 1.5;
pub const VULNERABLE_MULTIPLIER: f64 = 1.3;
const DEFENSE_SOFTCAP: f64 = 50.0;

#[derive(Clone, Debug, PartialEq)]
pub struct AttackResult {
    pub damage_dealt: i32,
    pub is_critical: bool,
    pub status_applied: Option<StatusEffect>,
    pub message: String,
    pub elemental_bonus: bool,
}

/// Effectiveness of `element` against `defender`, and whether it counts as a bonus.
pub fn effectiveness_against(defender: &CombatStats, element: Element) -> (f64, bool) {
    let mut multiplier = 1.0;
    let mut effective = false;

    if element == Element::Fire && defender.affinity(Element::Earth) > 0 {
        multiplier = VULNERABLE_MULTIPLIER;
        effective = true;
    } else if let Some((_, m)) = elements::chart_row(element)
        .find(|(target, m)| defender.affinity(*target) > 0 && *m > 1.0)
    {
        multiplier = m;
        effective = true;
    }

    if defender.affinity(element) < 0 {
        multiplier = VULNERABLE_MULTIPLIER;
        effective = true;
    }
    (multiplier, effective)
}

/// Fraction of damage removed by `defense`. Negative defense removes nothing.
pub fn defense_reduction(defense: i32) -> f64 {
    let defense = f64::from(defense.max(0));
    defense / (defense + DEFENSE_SOFTCAP)
}

pub fn calculate_damage(
    attacker: &CombatStats,
    defender: &CombatStats,
    element: Option<Element>,
    terrain: Option<TerrainType>,
    dice: &mut dyn Dice,
) -> AttackResult {
    let element = element.unwrap_or(Element::Physical);
    let affinity = attacker.affinity(element);
    let affinity_multiplier = 1.0 + 0.1 * f64::from(affinity);

    let is_critical = dice.chance(attacker.critical_chance);
    let critical_multiplier = if is_critical { CRITICAL_MULTIPLIER } else { 1.0 };

    let (effectiveness, elemental_bonus) = effectiveness_against(defender, element);
    let terrain_multiplier = elements::terrain_multiplier(terrain, element);
    let terrain_bonus = terrain_multiplier > 1.0;

    let raw = f64::from(attacker.damage)
        * affinity_multiplier
        * critical_multiplier
        * effectiveness
        * terrain_multiplier;
    let reduced = raw * (1.0 - defense_reduction(defender.defense));
    let damage_dealt = (reduced.round() as i32).max(1);

    let status_chance = 10 + 5 * affinity;
    let status_applied = dice.chance(status_chance).then(|| elements::status_for(element));

    debug!(
        element = element.name(),
        raw,
        damage_dealt,
        is_critical,
        elemental_bonus,
        terrain_bonus,
        "attack resolved"
    );

    AttackResult {
        damage_dealt,
        is_critical,
        status_applied,
        message: attack_message(
            element,
            damage_dealt,
            is_critical,
            elemental_bonus,
            terrain_bonus,
            status_applied,
        ),
        elemental_bonus,
    }
}

fn attack_message(
    element: Element,
    damage: i32,
    is_critical: bool,
    is_effective: bool,
    terrain_bonus: bool,
    status: Option<StatusEffect>,
) -> String {
    let mut parts = vec![format!("The attack {}", attack_flavor(element))];
    if is_critical {
        parts.push("critically".to_string());
    }
    if is_effective {
        parts.push("and is super effective".to_string());
    }
    if terrain_bonus {
        parts.push("with terrain advantage".to_string());
    }
    parts.push(format!("for {damage} damage"));
    if let Some(effect) = status {
        parts.push(status_flavor(effect).to_string());
    }
    format!("{}!", parts.join(" "))
}

/// Whether `defender` avoids an attack from `attacker`.
/// Confusion and blindness on the attacker add miss chance; chill on the
/// defender eats into its dodge chance.
pub fn get_dodge_result(attacker: &CombatStats, defender: &CombatStats, dice: &mut dyn Dice) -> bool {
    let miss_chance = 5 * attacker.potency_of(StatusEffect::Confusion)
        + 10 * attacker.potency_of(StatusEffect::Blind);
    let dodge_chance =
        (defender.dodge_chance - 5 * defender.potency_of(StatusEffect::Chill)).max(0);
    dice.chance(dodge_chance + miss_chance)
}
