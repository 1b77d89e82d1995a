//! Four-phase special abilities for the flagship boss.
//!
//! The phase comes from the boss's current health as a percentage of its max:
//! above 75% is phase 1, above 50% phase 2, above 25% phase 3, anything lower
//! phase 4. Phases 1-3 only act on turns divisible by 3, 2 and 2 respectively;
//! phase 4 acts every turn. When no ability fires the caller runs an ordinary
//! enemy turn instead.
//!
//! Ability damage is a straight multiple of the boss's damage and bypasses the
//! player's defense.

use tracing::{debug, warn};

use super::dice::Dice;
use super::stats::CombatStats;
use crate::types::{Element, StatusEffect};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BossSpecial {
    pub damage_dealt: i32,
    pub message: String,
    pub ability_used: bool,
}

impl BossSpecial {
    fn idle() -> Self {
        Self { damage_dealt: 0, message: String::new(), ability_used: false }
    }

    fn used(damage_dealt: i32, message: String) -> Self {
        Self { damage_dealt, message, ability_used: true }
    }
}

pub fn boss_phase(boss: &CombatStats) -> u8 {
    let pct = boss.health_percent();
    if pct > 75.0 {
        1
    } else if pct > 50.0 {
        2
    } else if pct > 25.0 {
        3
    } else {
        4
    }
}

/// One-time narration when the boss enters `phase`.
pub fn phase_transition_message(phase: u8) -> Option<&'static str> {
    match phase {
        2 => Some(
            "The Shadow Centaur's form flickers, shadows bleeding from its wounds as it grows more aggressive!",
        ),
        3 => Some("The Shadow Centaur roars in fury, dark energy crackling around its hooves!"),
        4 => Some(
            "The Shadow Centaur's eyes glow with desperate power. It is wounded and at its most dangerous!",
        ),
        _ => None,
    }
}

fn scaled(damage: i32, factor: f64) -> i32 {
    (f64::from(damage) * factor) as i32
}

pub fn handle_shadow_centaur_special(
    boss: &mut CombatStats,
    player: &mut CombatStats,
    turn_count: i32,
    dice: &mut dyn Dice,
) -> BossSpecial {
    let turn = if turn_count < 0 {
        warn!(turn_count, "negative boss turn count, using 1");
        1
    } else {
        turn_count
    };

    let phase = boss_phase(boss);
    let special = match phase {
        1 if turn > 0 && turn % 3 == 0 => shadow_wave(boss, player, dice),
        2 if turn > 0 && turn % 2 == 0 => {
            if dice.pick_index(2) == 0 {
                shadow_strike(boss, player, dice)
            } else {
                void_shield(boss)
            }
        }
        3 if turn > 0 && turn % 2 == 0 => {
            if dice.pick_index(2) == 0 {
                shadow_nova(boss, player, dice)
            } else {
                life_drain(boss)
            }
        }
        4 => match dice.pick_index(3) {
            0 => shadow_explosion(boss),
            1 => void_consumption(boss, player),
            _ => reality_tear(boss, player, dice),
        },
        _ => BossSpecial::idle(),
    };

    debug!(phase, turn, used = special.ability_used, damage = special.damage_dealt, "boss turn");
    special
}

fn shadow_wave(boss: &CombatStats, player: &mut CombatStats, dice: &mut dyn Dice) -> BossSpecial {
    let dmg = scaled(boss.damage, 0.8);
    let mut msg = format!(
        "The Shadow Centaur raises its arms, sending a wave of dark energy toward you!\nThe shadow wave deals {dmg} damage!"
    );
    if dice.chance(30) {
        player.add_status(StatusEffect::Weaken, 2, 2, Element::Shadow);
        msg.push_str("\nThe shadow energy weakens your defenses!");
    }
    BossSpecial::used(dmg, msg)
}

fn shadow_strike(boss: &CombatStats, player: &mut CombatStats, dice: &mut dyn Dice) -> BossSpecial {
    let dmg = scaled(boss.damage, 1.2);
    let mut msg = format!(
        "The Shadow Centaur charges forward with supernatural speed, its form blurring with shadow!\nThe shadow strike deals {dmg} damage!"
    );
    if dice.chance(50) {
        player.add_status(StatusEffect::Blind, 2, 2, Element::Shadow);
        msg.push_str("\nThe attack temporarily blinds you!");
    }
    BossSpecial::used(dmg, msg)
}

fn void_shield(boss: &mut CombatStats) -> BossSpecial {
    boss.defense += 10;
    let dmg = scaled(boss.damage, 0.5);
    BossSpecial::used(
        dmg,
        format!(
            "The Shadow Centaur surrounds itself with a swirling vortex of void energy!\nIts defenses are greatly increased!\nThe void energy lashes out at you, dealing {dmg} damage!"
        ),
    )
}

fn shadow_nova(boss: &CombatStats, player: &mut CombatStats, dice: &mut dyn Dice) -> BossSpecial {
    let dmg = scaled(boss.damage, 1.5);
    let (effect, flavor) = [
        (StatusEffect::Burn, "The dark flames burn your skin!"),
        (StatusEffect::Confusion, "The chaotic energy disorients your senses!"),
        (StatusEffect::Weaken, "The void energy saps your strength!"),
    ][dice.pick_index(3)];
    player.add_status(effect, 3, 2, Element::Shadow);
    BossSpecial::used(
        dmg,
        format!(
            "The Shadow Centaur slams its hooves into the ground, releasing a nova of dark energy!\nThe shadow nova deals {dmg} damage!\n{flavor}"
        ),
    )
}

fn life_drain(boss: &mut CombatStats) -> BossSpecial {
    let dmg = boss.damage;
    let heal = scaled(dmg, 0.7);
    boss.health = (boss.health + heal).min(boss.max_health);
    BossSpecial::used(
        dmg,
        format!(
            "The Shadow Centaur extends a shadowy tendril that latches onto your life force!\nThe life drain deals {dmg} damage and heals the Shadow Centaur for {heal} health!"
        ),
    )
}

fn shadow_explosion(boss: &CombatStats) -> BossSpecial {
    let dmg = scaled(boss.damage, 2.0);
    BossSpecial::used(
        dmg,
        format!(
            "The Shadow Centaur's form becomes unstable, exploding with concentrated shadow energy!\nThe shadow explosion deals {dmg} damage!"
        ),
    )
}

fn void_consumption(boss: &CombatStats, player: &mut CombatStats) -> BossSpecial {
    let dmg = scaled(boss.damage, 1.2);
    player.add_status(StatusEffect::Weaken, 2, 2, Element::Shadow);
    player.add_status(StatusEffect::Confusion, 2, 2, Element::Shadow);
    BossSpecial::used(
        dmg,
        format!(
            "The Shadow Centaur opens a rift to the void, drawing in surrounding energy!\nThe void consumption deals {dmg} damage!\nYou feel weakened and disoriented by the void energy!"
        ),
    )
}

fn reality_tear(boss: &CombatStats, player: &mut CombatStats, dice: &mut dyn Dice) -> BossSpecial {
    let dmg = scaled(boss.damage, 1.5);
    let mut msg = format!(
        "The Shadow Centaur tears at the fabric of reality itself, creating a devastating rift!\nThe reality tear bypasses your defenses and deals {dmg} damage!"
    );
    if dice.chance(30) {
        player.add_status(StatusEffect::Stun, 1, 1, Element::Shadow);
        msg.push_str("\nThe reality distortion stuns you!");
    }
    BossSpecial::used(dmg, msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::dice::{FixedDice, ScriptedDice};

    fn boss(health: i32) -> CombatStats {
        let mut stats = CombatStats::new(300, 60, 15);
        stats.health = health;
        stats
    }

    fn player() -> CombatStats {
        CombatStats::new(100, 20, 5)
    }

    #[test]
    fn phase_one_fires_every_third_turn() {
        let mut dice = FixedDice::test_mode();
        let fired = handle_shadow_centaur_special(&mut boss(250), &mut player(), 3, &mut dice);
        assert!(fired.ability_used);
        assert_eq!(fired.damage_dealt, 48);
        assert!(fired.message.contains("wave of dark energy"));

        let idle = handle_shadow_centaur_special(&mut boss(250), &mut player(), 4, &mut dice);
        assert!(!idle.ability_used);
        assert_eq!(idle.damage_dealt, 0);
    }

    #[test]
    fn turn_zero_never_fires_before_final_phase() {
        let mut dice = FixedDice::test_mode();
        for health in [250, 200, 100] {
            let r = handle_shadow_centaur_special(&mut boss(health), &mut player(), 0, &mut dice);
            assert!(!r.ability_used, "health {health}");
        }
    }

    #[test]
    fn final_phase_always_fires() {
        let mut dice = FixedDice::test_mode();
        for turn in [-5, 0, 1, 2, 7] {
            let r = handle_shadow_centaur_special(&mut boss(50), &mut player(), turn, &mut dice);
            assert!(r.ability_used, "turn {turn}");
        }
    }

    #[test]
    fn phase_boundaries() {
        assert_eq!(boss_phase(&boss(300)), 1);
        assert_eq!(boss_phase(&boss(226)), 1);
        assert_eq!(boss_phase(&boss(225)), 2);
        assert_eq!(boss_phase(&boss(150)), 3);
        assert_eq!(boss_phase(&boss(76)), 3);
        assert_eq!(boss_phase(&boss(75)), 4);
        assert_eq!(boss_phase(&boss(0)), 4);
    }

    #[test]
    fn void_shield_raises_defense() {
        let mut b = boss(200);
        // Index roll 2 picks the second ability.
        let r = handle_shadow_centaur_special(&mut b, &mut player(), 2, &mut ScriptedDice::new(vec![2]));
        assert!(r.ability_used);
        assert_eq!(b.defense, 25);
        assert_eq!(r.damage_dealt, 30);
        assert!(r.message.contains("swirling vortex"));
    }

    #[test]
    fn life_drain_heals_capped() {
        let mut b = boss(140);
        let r = handle_shadow_centaur_special(&mut b, &mut player(), 4, &mut ScriptedDice::new(vec![2]));
        assert_eq!(r.damage_dealt, 60);
        assert_eq!(b.health, 182);
        assert!(r.message.contains("shadowy tendril"));
    }

    #[test]
    fn void_consumption_applies_two_effects() {
        let mut p = player();
        let r = handle_shadow_centaur_special(&mut boss(30), &mut p, 1, &mut ScriptedDice::new(vec![2]));
        assert_eq!(r.damage_dealt, 72);
        assert!(p.has_effect(StatusEffect::Weaken));
        assert!(p.has_effect(StatusEffect::Confusion));
    }

    #[test]
    fn reality_tear_can_stun() {
        let mut p = player();
        let r = handle_shadow_centaur_special(&mut boss(30), &mut p, 1, &mut ScriptedDice::new(vec![3, 1]));
        assert_eq!(r.damage_dealt, 90);
        assert!(r.message.contains("fabric of reality"));
        assert_eq!(p.potency_of(StatusEffect::Stun), 1);
    }
}
