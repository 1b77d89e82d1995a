//! Name-based classification of combatants.
//! Elemental identity and boss membership come from substring heuristics on the
//! enemy's name. Everything that depends on those heuristics asks this module.

use super::stats::Affinities;
use crate::types::Element;

const BOSS_NAMES: [&str; 5] =
    ["shadow centaur", "second centaur", "shadow guardian", "corrupted druid", "phantom assassin"];

const FLAGSHIP_NAMES: [&str; 2] = ["shadow centaur", "second centaur"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyIdentity {
    pub affinities: Affinities,
    pub is_boss: bool,
    /// The scripted final boss with the four-phase special-ability machine.
    pub is_flagship: bool,
    /// Forces shadow as the attack element regardless of numeric affinity.
    pub shadow_aligned: bool,
}

pub fn classify_entity(name: &str) -> EnemyIdentity {
    let lower = name.to_lowercase();
    EnemyIdentity {
        affinities: affinities_for(&lower),
        is_boss: BOSS_NAMES.iter().any(|b| lower.contains(b)),
        is_flagship: FLAGSHIP_NAMES.iter().any(|b| lower.contains(b)),
        shadow_aligned: lower.contains("shadow") || lower.contains("phantom"),
    }
}

pub fn is_boss_enemy(name: &str) -> bool {
    classify_entity(name).is_boss
}

fn affinities_for(lower: &str) -> Affinities {
    let mut a = Affinities::default();
    if lower.contains("shadow") {
        a.set(Element::Shadow, 3);
        a.set(Element::Light, -2);
    } else if lower.contains("wolf") {
        a.set(Element::Physical, 2);
        a.set(Element::Fire, 1);
    } else if lower.contains("druid") {
        a.set(Element::Earth, 3);
        a.set(Element::Water, 2);
        a.set(Element::Fire, -2);
    } else if lower.contains("phantom") {
        a.set(Element::Shadow, 3);
        a.set(Element::Physical, -1);
        a.set(Element::Light, -2);
    } else if lower.contains("guardian") {
        a.set(Element::Physical, 2);
        a.set(Element::Shadow, 2);
        a.set(Element::Light, 2);
    } else if lower.contains("centaur") {
        for element in Element::ALL {
            a.set(element, 2);
        }
    } else {
        a.set(Element::Physical, 2);
    }
    a
}
