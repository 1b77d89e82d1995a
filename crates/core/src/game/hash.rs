//! Stable snapshot hashing for deterministic verification.
//! This module keeps hashing concerns separate from command handling.
//! It does not own replay execution or journal persistence.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::combat::stats::CombatStats;

fn write_str(hasher: &mut Xxh3, s: &str) {
    hasher.write_usize(s.len());
    hasher.write(s.as_bytes());
}

fn write_pos(hasher: &mut Xxh3, pos: Pos) {
    hasher.write_i32(pos.x);
    hasher.write_i32(pos.y);
}

fn write_stats(hasher: &mut Xxh3, stats: &CombatStats) {
    hasher.write_i32(stats.health);
    hasher.write_i32(stats.damage);
    hasher.write_i32(stats.defense);
    hasher.write_i32(stats.critical_chance);
    hasher.write_i32(stats.dodge_chance);
    for (_, affinity) in stats.affinities.iter() {
        hasher.write_i32(affinity);
    }
    for effect in &stats.status_effects {
        write_str(hasher, effect.effect.name());
        hasher.write_i32(effect.duration);
        hasher.write_i32(effect.potency);
    }
}

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.config.seed);
        hasher.write_u64(self.commands_run);
        hasher.write_u64(self.clock.total_minutes());

        let p = &self.player;
        write_pos(&mut hasher, p.pos);
        hasher.write_i32(p.health);
        hasher.write_i32(p.stamina);
        write_str(&mut hasher, p.path.map_or("", PathType::name));
        for item in &p.inventory {
            write_str(&mut hasher, item);
        }

        match self.session.encounter() {
            Some(enc) => {
                hasher.write_u8(1);
                write_str(&mut hasher, &enc.enemy_name);
                hasher.write_i32(enc.turn_count);
                hasher.write_u8(enc.announced_phase);
                write_stats(&mut hasher, &enc.player_stats);
                write_stats(&mut hasher, &enc.enemy_stats);
            }
            None => hasher.write_u8(0),
        }

        for (pos, tile) in &self.world.tiles {
            write_pos(&mut hasher, *pos);
            for item in &tile.items {
                write_str(&mut hasher, item);
            }
            for dir in &tile.blocked {
                write_str(&mut hasher, dir.name());
            }
            for (_, enemy) in self.world.enemies_at(*pos) {
                write_str(&mut hasher, &enemy.name);
                hasher.write_i32(enemy.health);
            }
        }
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;

    #[test]
    fn identical_histories_hash_identically() {
        let mut a = open_field_game();
        let mut b = open_field_game();
        for line in ["east", "gather", "say hello"] {
            a.execute(line);
            b.execute(line);
        }
        assert_eq!(a.snapshot_hash(), b.snapshot_hash());
    }

    #[test]
    fn state_changes_move_the_hash() {
        let (mut game, _) = guarded_field_game();
        let before = game.snapshot_hash();
        game.execute("take map");
        let after_take = game.snapshot_hash();
        assert_ne!(before, after_take);
        game.execute("attack wolf");
        assert_ne!(after_take, game.snapshot_hash());
    }

    #[test]
    fn read_only_commands_still_count() {
        let mut game = open_field_game();
        let before = game.snapshot_hash();
        game.execute("look");
        assert_ne!(before, game.snapshot_hash());
    }
}
