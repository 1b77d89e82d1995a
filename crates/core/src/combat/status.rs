//! Status-effect lifecycle: duration ticks, periodic damage, expiry.

use super::stats::CombatStats;
use crate::types::StatusEffect;

/// Ticks every active effect on `combatant` once, in list order.
///
/// Each duration drops by one; an effect that reaches zero is removed and does
/// not tick. Burn deals `2 × potency`, bleed `3 × potency`. The returned total
/// is not subtracted from health here.
pub fn apply_status_effects(combatant: &mut CombatStats) -> (i32, Vec<String>) {
    let mut total = 0;
    let mut messages = Vec::new();

    combatant.status_effects.retain_mut(|instance| {
        instance.duration -= 1;
        if instance.duration <= 0 {
            messages.push(format!("The {} effect has worn off.", instance.effect.name()));
            return false;
        }
        match instance.effect {
            StatusEffect::Burn => {
                let dmg = instance.potency * 2;
                total += dmg;
                messages.push(format!("Burn damage: {dmg}"));
            }
            StatusEffect::Bleed => {
                let dmg = instance.potency * 3;
                total += dmg;
                messages.push(format!("Bleed damage: {dmg}"));
            }
            StatusEffect::Chill
            | StatusEffect::Stun
            | StatusEffect::Confusion
            | StatusEffect::Blind
            | StatusEffect::Weaken => {}
        }
        true
    });

    (total, messages)
}
