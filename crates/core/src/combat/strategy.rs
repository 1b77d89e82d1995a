//! Enemy action and element selection.

use std::iter;

use super::dice::Dice;
use super::identity::EnemyIdentity;
use super::stats::CombatStats;
use crate::types::{CombatAction, Element};

const STANCE_SWITCH_CHANCE: i32 = 10;

/// Picks the enemy's action and element for this turn.
///
/// The element is the highest positive affinity, first in enumeration order on
/// ties, or physical when nothing is positive. Shadow-aligned enemies always
/// attack with shadow. Without an identity the weighted picker decides.
pub fn determine_enemy_strategy(
    enemy: &CombatStats,
    identity: Option<&EnemyIdentity>,
    dice: &mut dyn Dice,
) -> (CombatAction, Element) {
    let element = match identity {
        Some(id) if id.shadow_aligned => Element::Shadow,
        Some(_) => strongest_element(enemy),
        None => get_enemy_attack_element(enemy, dice),
    };

    if dice.chance(STANCE_SWITCH_CHANCE) {
        let stance = [CombatAction::Defend, CombatAction::Dodge][dice.pick_index(2)];
        return (stance, element);
    }
    (CombatAction::Attack, element)
}

fn strongest_element(enemy: &CombatStats) -> Element {
    let mut best = (Element::Physical, 0);
    for (element, affinity) in enemy.affinities.iter() {
        if affinity > best.1 {
            best = (element, affinity);
        }
    }
    best.0
}

/// Weighted pick: each positive-affinity element appears `affinity` times.
/// Shadow affinity of 3 or more always picks shadow.
pub fn get_enemy_attack_element(enemy: &CombatStats, dice: &mut dyn Dice) -> Element {
    if enemy.affinity(Element::Shadow) >= 3 {
        return Element::Shadow;
    }
    let pool: Vec<Element> = enemy
        .affinities
        .positive()
        .flat_map(|(element, affinity)| iter::repeat_n(element, affinity as usize))
        .collect();
    if pool.is_empty() {
        return Element::Physical;
    }
    pool[dice.pick_index(pool.len())]
}
