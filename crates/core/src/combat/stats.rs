//! Per-combatant combat records and their construction from world entities.

use serde::{Deserialize, Serialize};

use super::identity::classify_entity;
use crate::state::{Enemy, Player};
use crate::types::{Element, PathType, StatusEffect};

pub const PLAYER_BASE_DAMAGE: i32 = 20;
pub const PLAYER_BASE_DEFENSE: i32 = 5;
pub const BASE_CRITICAL_CHANCE: i32 = 5;
pub const BASE_DODGE_CHANCE: i32 = 5;

/// Integer affinity per element, indexed in [`Element::ALL`] order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Affinities([i32; 7]);

impl Affinities {
    pub fn get(&self, element: Element) -> i32 {
        self.0[element.index()]
    }

    pub fn set(&mut self, element: Element, value: i32) {
        self.0[element.index()] = value;
    }

    pub fn add(&mut self, element: Element, delta: i32) {
        self.0[element.index()] += delta;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, i32)> + '_ {
        Element::ALL.into_iter().map(|e| (e, self.get(e)))
    }

    pub fn positive(&self) -> impl Iterator<Item = (Element, i32)> + '_ {
        self.iter().filter(|(_, a)| *a > 0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusEffectInstance {
    pub effect: StatusEffect,
    pub duration: i32,
    pub potency: i32,
    pub source: Element,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatStats {
    pub health: i32,
    pub max_health: i32,
    pub damage: i32,
    pub defense: i32,
    pub critical_chance: i32,
    pub dodge_chance: i32,
    pub affinities: Affinities,
    pub status_effects: Vec<StatusEffectInstance>,
}

impl CombatStats {
    pub fn new(health: i32, damage: i32, defense: i32) -> Self {
        Self {
            health,
            max_health: health,
            damage,
            defense,
            critical_chance: BASE_CRITICAL_CHANCE,
            dodge_chance: BASE_DODGE_CHANCE,
            affinities: Affinities::default(),
            status_effects: Vec::new(),
        }
    }

    /// Enemy defense scales with its max health; affinities come from its name.
    pub fn from_enemy(enemy: &Enemy) -> Self {
        let identity = classify_entity(&enemy.name);
        Self {
            health: enemy.health,
            max_health: enemy.max_health,
            damage: enemy.damage,
            defense: (enemy.max_health / 20).max(0),
            critical_chance: BASE_CRITICAL_CHANCE,
            dodge_chance: BASE_DODGE_CHANCE,
            affinities: identity.affinities,
            status_effects: Vec::new(),
        }
    }

    pub fn from_player(player: &Player) -> Self {
        let mut stats = Self {
            health: player.health,
            max_health: player.max_health,
            damage: PLAYER_BASE_DAMAGE,
            defense: PLAYER_BASE_DEFENSE,
            critical_chance: BASE_CRITICAL_CHANCE,
            dodge_chance: BASE_DODGE_CHANCE,
            affinities: Affinities::default(),
            status_effects: Vec::new(),
        };
        if let Some(path) = player.path {
            stats.apply_path(path);
        }
        for item in &player.inventory {
            stats.apply_item(item);
        }
        stats
    }

    fn apply_path(&mut self, path: PathType) {
        match path {
            PathType::Warrior => {
                self.damage += 10;
                self.defense += 5;
                self.affinities.add(Element::Physical, 2);
            }
            PathType::Mystic => {
                for element in Element::CLASSICAL {
                    self.affinities.add(element, 1);
                }
            }
            PathType::Stealth => {
                self.critical_chance += 10;
                self.dodge_chance += 10;
                self.affinities.add(Element::Shadow, 2);
            }
        }
    }

    /// First matching keyword wins for each item.
    fn apply_item(&mut self, item: &str) {
        let item = item.to_lowercase();
        if item.contains("sword") {
            self.damage += 15;
            self.affinities.add(Element::Physical, 1);
        } else if item.contains("staff") {
            for element in Element::CLASSICAL {
                self.affinities.add(element, 1);
            }
        } else if item.contains("dagger") {
            self.critical_chance += 15;
            self.affinities.add(Element::Shadow, 1);
        } else if item.contains("cloak") {
            self.dodge_chance += 15;
        } else if item.contains("essence") {
            for element in Element::ALL.into_iter().filter(|e| *e != Element::Physical) {
                self.affinities.add(element, 1);
            }
        }
    }

    pub fn affinity(&self, element: Element) -> i32 {
        self.affinities.get(element)
    }

    /// First active instance of `effect`, if any.
    pub fn effect(&self, effect: StatusEffect) -> Option<&StatusEffectInstance> {
        self.status_effects.iter().find(|e| e.effect == effect)
    }

    pub fn has_effect(&self, effect: StatusEffect) -> bool {
        self.effect(effect).is_some()
    }

    pub fn potency_of(&self, effect: StatusEffect) -> i32 {
        self.effect(effect).map_or(0, |e| e.potency)
    }

    pub fn add_status(&mut self, effect: StatusEffect, duration: i32, potency: i32, source: Element) {
        self.status_effects.push(StatusEffectInstance { effect, duration, potency, source });
    }

    pub fn health_percent(&self) -> f64 {
        if self.max_health <= 0 {
            return 0.0;
        }
        f64::from(self.health) / f64::from(self.max_health) * 100.0
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Elements with positive affinity, strongest first, always including
    /// physical as a fallback.
    pub fn available_elements(&self) -> Vec<(Element, i32)> {
        let mut elements: Vec<(Element, i32)> = self.affinities.positive().collect();
        if !elements.iter().any(|(e, _)| *e == Element::Physical) {
            elements.push((Element::Physical, 0));
        }
        elements.sort_by(|a, b| b.1.cmp(&a.1));
        elements
    }
}
