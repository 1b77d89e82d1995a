//! In-game clock advanced by player actions.

use serde::{Deserialize, Serialize};

pub const MOVE_MINUTES: u32 = 15;
pub const GATHER_MINUTES: u32 = 10;
pub const MEDITATE_MINUTES: u32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    Dawn,
    Morning,
    Noon,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=6 => TimeOfDay::Dawn,
            7..=11 => TimeOfDay::Morning,
            12..=13 => TimeOfDay::Noon,
            14..=16 => TimeOfDay::Afternoon,
            17..=19 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TimeOfDay::Dawn => "dawn",
            TimeOfDay::Morning => "morning",
            TimeOfDay::Noon => "noon",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TimeOfDay::Dawn => "The dawn breaks over the horizon, painting the sky in soft hues.",
            TimeOfDay::Morning => "The morning sun casts long shadows across the land.",
            TimeOfDay::Noon => "The sun reaches its zenith, bathing everything in bright light.",
            TimeOfDay::Afternoon => {
                "The afternoon sun warms the air as shadows begin to lengthen."
            }
            TimeOfDay::Evening => "The evening light bathes everything in golden hues.",
            TimeOfDay::Night => "The land lies under a blanket of stars.",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameClock {
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl Default for GameClock {
    fn default() -> Self {
        Self { day: 1, hour: 8, minute: 0 }
    }
}

impl GameClock {
    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_hour(self.hour)
    }

    pub fn formatted(&self) -> String {
        format!("Day {}, {:02}:{:02}", self.day, self.hour, self.minute)
    }

    pub fn total_minutes(&self) -> u64 {
        (u64::from(self.day) - 1) * 24 * 60 + u64::from(self.hour) * 60 + u64::from(self.minute)
    }

    /// Moves the clock forward and returns narration for any time-of-day or
    /// day boundary crossed, time-of-day first.
    pub fn advance(&mut self, minutes: u32) -> Vec<String> {
        if minutes == 0 {
            return Vec::new();
        }
        let before_tod = self.time_of_day();
        let before_day = self.day;

        let total = self.minute + minutes;
        self.minute = total % 60;
        let hours = self.hour + total / 60;
        self.hour = hours % 24;
        self.day += hours / 24;

        let mut events = Vec::new();
        let now = self.time_of_day();
        if now != before_tod {
            events.push(format!("The {} arrives. {}", now.name(), now.description()));
        }
        if self.day > before_day {
            events.push(format!("A new day dawns. Day {} begins.", self.day));
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_day_one_morning() {
        let clock = GameClock::default();
        assert_eq!(clock.formatted(), "Day 1, 08:00");
        assert_eq!(clock.time_of_day(), TimeOfDay::Morning);
    }

    #[test]
    fn minutes_roll_into_hours() {
        let mut clock = GameClock::default();
        assert!(clock.advance(45).is_empty());
        assert!(clock.advance(30).is_empty());
        assert_eq!(clock.formatted(), "Day 1, 09:15");
    }

    #[test]
    fn crossing_noon_announces_it() {
        let mut clock = GameClock { day: 1, hour: 11, minute: 50 };
        let events = clock.advance(15);
        assert_eq!(
            events,
            vec!["The noon arrives. The sun reaches its zenith, bathing everything in bright light."
                .to_string()]
        );
    }

    #[test]
    fn midnight_starts_a_new_day() {
        let mut clock = GameClock { day: 1, hour: 23, minute: 55 };
        let events = clock.advance(10);
        assert_eq!(clock.formatted(), "Day 2, 00:05");
        assert_eq!(events, vec!["A new day dawns. Day 2 begins.".to_string()]);
    }

    #[test]
    fn large_jumps_span_days() {
        let mut clock = GameClock::default();
        let events = clock.advance(3 * 24 * 60);
        assert_eq!(clock.formatted(), "Day 4, 08:00");
        assert_eq!(events, vec!["A new day dawns. Day 4 begins.".to_string()]);
        assert_eq!(clock.total_minutes(), 3 * 24 * 60 + 8 * 60);
    }

    #[test]
    fn time_of_day_bands() {
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Dawn);
        assert_eq!(TimeOfDay::from_hour(7), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(13), TimeOfDay::Noon);
        assert_eq!(TimeOfDay::from_hour(14), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(19), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(20), TimeOfDay::Night);
    }
}
