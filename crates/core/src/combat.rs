//! Turn-based elemental combat.
//! Lookup tables and stat construction sit at the bottom; `session` drives one
//! encounter on top of damage, status, strategy and boss resolution.

pub mod boss;
pub mod damage;
pub mod dice;
pub mod elements;
pub mod identity;
pub mod session;
pub mod stats;
pub mod status;
pub mod strategy;

pub use boss::{BossSpecial, boss_phase, handle_shadow_centaur_special};
pub use damage::{AttackResult, calculate_damage, get_dodge_result};
pub use dice::{Dice, FixedDice, ScriptedDice, SeededDice};
pub use identity::{EnemyIdentity, classify_entity, is_boss_enemy};
pub use session::{CombatSession, Encounter, TurnOutcome};
pub use stats::{Affinities, CombatStats, StatusEffectInstance};
pub use status::apply_status_effects;
pub use strategy::{determine_enemy_strategy, get_enemy_attack_element};
