use centaur_core::combat::{
    CombatStats, FixedDice, SeededDice, apply_status_effects, calculate_damage, get_dodge_result,
    handle_shadow_centaur_special,
};
use centaur_core::{Element, StatusEffect, TerrainType};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};

/// Every roll at 100: no crits or procs unless a chance is 100.
fn never_lucky() -> FixedDice {
    FixedDice { percent: 100 }
}

fn runner(cases: u32) -> TestRunner {
    TestRunner::new(ProptestConfig { cases, ..ProptestConfig::default() })
}

fn stats(damage: i32, defense: i32) -> CombatStats {
    CombatStats::new(100, damage, defense)
}

#[test]
fn damage_never_drops_below_one() {
    let strategy = (
        1..500i32,
        0..2000i32,
        0..Element::ALL.len(),
        0..TerrainType::ALL.len(),
        -3..=3i32,
        -3..=3i32,
        any::<u64>(),
    );
    runner(256)
        .run(&strategy, |(damage, defense, el, terrain, atk_aff, def_aff, seed)| {
            let element = Element::ALL[el];
            let mut attacker = stats(damage, 0);
            attacker.affinities.set(element, atk_aff);
            let mut defender = stats(1, defense);
            defender.affinities.set(element, def_aff);

            let result = calculate_damage(
                &attacker,
                &defender,
                Some(element),
                Some(TerrainType::ALL[terrain]),
                &mut SeededDice::new(seed),
            );
            if result.damage_dealt < 1 {
                return Err(TestCaseError::fail(format!("damage {} < 1", result.damage_dealt)));
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn more_defense_never_means_more_damage() {
    runner(256)
        .run(&(1..300i32, 0..500i32, 1..100i32, 0..Element::ALL.len()), |(damage, low, extra, el)| {
            let element = Element::ALL[el];
            let attacker = stats(damage, 0);
            let soft = calculate_damage(&attacker, &stats(1, low), Some(element), None, &mut never_lucky());
            let hard =
                calculate_damage(&attacker, &stats(1, low + extra), Some(element), None, &mut never_lucky());
            if hard.damage_dealt > soft.damage_dealt {
                return Err(TestCaseError::fail(format!(
                    "defense {} -> {} raised damage {} -> {}",
                    low,
                    low + extra,
                    soft.damage_dealt,
                    hard.damage_dealt
                )));
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn critical_hits_always_hit_harder() {
    runner(256)
        .run(&(4..300i32, 0..=50i32), |(damage, defense)| {
            let defender = stats(1, defense);
            let mut sure = stats(damage, 0);
            sure.critical_chance = 100;
            let mut never = stats(damage, 0);
            never.critical_chance = 0;

            let crit = calculate_damage(&sure, &defender, None, None, &mut never_lucky());
            let plain = calculate_damage(&never, &defender, None, None, &mut never_lucky());
            if !crit.is_critical || crit.damage_dealt <= plain.damage_dealt {
                return Err(TestCaseError::fail(format!(
                    "crit {} vs plain {}",
                    crit.damage_dealt, plain.damage_dealt
                )));
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn earth_hits_harder_in_the_forest() {
    runner(256)
        .run(&(10..300i32, 0..=50i32), |(damage, defense)| {
            let attacker = stats(damage, 0);
            let defender = stats(1, defense);
            let forest = calculate_damage(
                &attacker,
                &defender,
                Some(Element::Earth),
                Some(TerrainType::Forest),
                &mut never_lucky(),
            );
            let clearing = calculate_damage(
                &attacker,
                &defender,
                Some(Element::Earth),
                Some(TerrainType::Clearing),
                &mut never_lucky(),
            );
            if forest.damage_dealt <= clearing.damage_dealt {
                return Err(TestCaseError::fail(format!(
                    "forest {} vs clearing {}",
                    forest.damage_dealt, clearing.damage_dealt
                )));
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn fire_scorches_earthbound_defenders() {
    runner(64)
        .run(&(1..5i32, 1..300i32), |(earth, damage)| {
            let mut defender = stats(1, 0);
            defender.affinities.set(Element::Earth, earth);
            let result =
                calculate_damage(&stats(damage, 0), &defender, Some(Element::Fire), None, &mut never_lucky());
            let expected = ((f64::from(damage) * 1.3).round() as i32).max(1);
            if !result.elemental_bonus || result.damage_dealt != expected {
                return Err(TestCaseError::fail(format!(
                    "bonus {} damage {} expected {}",
                    result.elemental_bonus, result.damage_dealt, expected
                )));
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn two_ticks_expire_a_two_turn_effect() {
    let mut target = stats(1, 0);
    target.add_status(StatusEffect::Chill, 2, 1, Element::Water);
    apply_status_effects(&mut target);
    assert_eq!(target.status_effects.len(), 1);
    apply_status_effects(&mut target);
    assert!(target.status_effects.is_empty());
}

#[test]
fn dodge_boundary_in_test_mode() {
    let attacker = stats(10, 0);
    let mut defender = stats(1, 0);
    defender.dodge_chance = 75;
    assert!(get_dodge_result(&attacker, &defender, &mut FixedDice::test_mode()));
    defender.dodge_chance = 0;
    assert!(!get_dodge_result(&attacker, &defender, &mut FixedDice::test_mode()));
}

#[test]
fn boss_phase_one_acts_every_third_turn() {
    let mut boss = CombatStats::new(300, 60, 15);
    boss.health = 250;
    let mut player = stats(20, 5);
    let mut dice = FixedDice::test_mode();
    assert!(handle_shadow_centaur_special(&mut boss, &mut player, 3, &mut dice).ability_used);
    assert!(!handle_shadow_centaur_special(&mut boss, &mut player, 4, &mut dice).ability_used);
}

#[test]
fn boss_final_phase_always_acts() {
    runner(64)
        .run(&(-50..50i32, 1..=75i32, any::<u64>()), |(turn, health, seed)| {
            let mut boss = CombatStats::new(300, 60, 15);
            boss.health = health;
            let mut player = stats(20, 5);
            let special =
                handle_shadow_centaur_special(&mut boss, &mut player, turn, &mut SeededDice::new(seed));
            if !special.ability_used {
                return Err(TestCaseError::fail(format!("turn {turn} health {health} idle")));
            }
            Ok(())
        })
        .unwrap();
}
