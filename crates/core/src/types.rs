use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use thiserror::Error;

new_key_type! {
    pub struct EnemyId;
}

/// Grid position. `y` grows northward, `x` grows eastward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, dir: Direction) -> Pos {
        let (dy, dx) = dir.delta();
        Pos { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::South, Direction::East, Direction::West];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (1, 0),
            Direction::South => (-1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Accepts full names and single-letter shortcuts.
    pub fn parse(word: &str) -> Option<Direction> {
        match word {
            "north" | "n" => Some(Direction::North),
            "south" | "s" => Some(Direction::South),
            "east" | "e" => Some(Direction::East),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainType {
    Forest,
    Mountain,
    Ruins,
    Clearing,
    Valley,
    Cave,
}

impl TerrainType {
    pub const ALL: [TerrainType; 6] = [
        TerrainType::Forest,
        TerrainType::Mountain,
        TerrainType::Ruins,
        TerrainType::Clearing,
        TerrainType::Valley,
        TerrainType::Cave,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TerrainType::Forest => "forest",
            TerrainType::Mountain => "mountain",
            TerrainType::Ruins => "ruins",
            TerrainType::Clearing => "clearing",
            TerrainType::Valley => "valley",
            TerrainType::Cave => "cave",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathType {
    Warrior,
    Mystic,
    Stealth,
}

impl PathType {
    pub fn name(self) -> &'static str {
        match self {
            PathType::Warrior => "warrior",
            PathType::Mystic => "mystic",
            PathType::Stealth => "stealth",
        }
    }

    pub fn parse(word: &str) -> Option<PathType> {
        match word {
            "warrior" => Some(PathType::Warrior),
            "mystic" => Some(PathType::Mystic),
            "stealth" => Some(PathType::Stealth),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Physical,
    Fire,
    Water,
    Earth,
    Air,
    Shadow,
    Light,
}

impl Element {
    /// Enumeration order. Tie-breaks and chart scans walk this order.
    pub const ALL: [Element; 7] = [
        Element::Physical,
        Element::Fire,
        Element::Water,
        Element::Earth,
        Element::Air,
        Element::Shadow,
        Element::Light,
    ];

    pub const CLASSICAL: [Element; 4] = [Element::Fire, Element::Water, Element::Earth, Element::Air];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Physical => "physical",
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Shadow => "shadow",
            Element::Light => "light",
        }
    }

    pub fn parse(word: &str) -> Option<Element> {
        Element::ALL.into_iter().find(|e| e.name() == word)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusEffect {
    Burn,
    Chill,
    Stun,
    Confusion,
    Bleed,
    Blind,
    Weaken,
}

impl StatusEffect {
    pub fn name(self) -> &'static str {
        match self {
            StatusEffect::Burn => "burn",
            StatusEffect::Chill => "chill",
            StatusEffect::Stun => "stun",
            StatusEffect::Confusion => "confusion",
            StatusEffect::Bleed => "bleed",
            StatusEffect::Blind => "blind",
            StatusEffect::Weaken => "weaken",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CombatAction {
    Attack,
    Elemental,
    Defend,
    Dodge,
    Special,
}

impl CombatAction {
    /// In-game minutes the action consumes.
    pub fn duration_minutes(self) -> u32 {
        match self {
            CombatAction::Attack | CombatAction::Elemental => 30,
            CombatAction::Defend => 10,
            CombatAction::Dodge => 5,
            CombatAction::Special => 20,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    Moved { from: Pos, to: Pos },
    CombatStarted { enemy: EnemyId },
    BossPhaseChanged { enemy: EnemyId, phase: u8 },
    EnemyDefeated { enemy: EnemyId },
    PlayerDefeated { enemy: EnemyId },
    Fled { enemy: EnemyId },
    ItemTaken { item: String },
    ItemDropped { item: String },
    PathChosen { path: PathType },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombatError {
    #[error("Error: Missing combat stats")]
    MissingStats,
    #[error("not in combat")]
    NotInCombat,
    #[error("enemy {0:?} is no longer in the world")]
    EnemyMissing(EnemyId),
}
