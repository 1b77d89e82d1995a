//! Injectable randomness for combat and world rolls.
//! Every chance check in the core goes through a [`Dice`] owned by the caller,
//! so one seeded generator per player context replaces any ambient RNG.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

pub trait Dice {
    /// Uniform roll in `1..=100`.
    fn roll_percent(&mut self) -> u32;

    /// Uniform roll in `lo..=hi`. Returns `lo` when the range is empty.
    fn roll_range(&mut self, lo: i32, hi: i32) -> i32;

    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Percent check: succeeds when the roll is at or under `percent`.
    /// Chances at or below zero never succeed but still consume a roll.
    fn chance(&mut self, percent: i32) -> bool {
        let roll = self.roll_percent();
        i64::from(roll) <= i64::from(percent)
    }
}

pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl Dice for SeededDice {
    fn roll_percent(&mut self) -> u32 {
        (self.rng.next_u64() % 100) as u32 + 1
    }

    fn roll_range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (i64::from(hi) - i64::from(lo) + 1) as u64;
        lo + (self.rng.next_u64() % span) as i32
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.rng.next_u64() % len as u64) as usize
    }
}

/// Returns the same percent on every roll. At 75 a dodge lands exactly when the
/// dodge chance reaches 75, while ordinary crit, proc and strategy chances fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDice {
    pub percent: u32,
}

impl FixedDice {
    pub const TEST_MODE_PERCENT: u32 = 75;

    pub fn test_mode() -> Self {
        Self { percent: Self::TEST_MODE_PERCENT }
    }
}

impl Dice for FixedDice {
    fn roll_percent(&mut self) -> u32 {
        self.percent.clamp(1, 100)
    }

    fn roll_range(&mut self, lo: i32, _hi: i32) -> i32 {
        lo
    }

    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }
}

/// Cycles through a fixed list of percent rolls. Ranges and picks derive from
/// the same sequence so a script controls every draw.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: Vec<u32>,
    cursor: usize,
}

impl ScriptedDice {
    pub fn new(rolls: Vec<u32>) -> Self {
        Self { rolls, cursor: 0 }
    }

    fn next_roll(&mut self) -> u32 {
        if self.rolls.is_empty() {
            return 100;
        }
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        roll.clamp(1, 100)
    }
}

impl Dice for ScriptedDice {
    fn roll_percent(&mut self) -> u32 {
        self.next_roll()
    }

    fn roll_range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = hi - lo + 1;
        lo + (self.next_roll() as i32 - 1) % span
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_roll() as usize - 1) % len
    }
}
