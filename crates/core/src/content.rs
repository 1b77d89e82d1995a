//! Static world content: enemy catalog, story areas, gatherable resources.

use crate::state::{Enemy, Tile, World};
use crate::types::{Direction, Pos, TerrainType};

pub const WORLD_WIDTH: i32 = 10;
pub const WORLD_HEIGHT: i32 = 10;
pub const START_POS: Pos = Pos { y: 0, x: 5 };

pub mod keys {
    pub const WOLF_PACK: &str = "wolf_pack";
    pub const SHADOW_HOUND: &str = "shadow_hound";
    pub const CRYSTAL_GOLEM: &str = "crystal_golem";
    pub const SPECTRAL_SENTINEL: &str = "spectral_sentinel";
    pub const CORRUPTED_CENTAUR_SPIRIT: &str = "corrupted_centaur_spirit";
    pub const TWILIGHT_WISP: &str = "twilight_wisp";
    pub const MANA_WRAITH: &str = "mana_wraith";
    pub const SHADOW_KNIGHT: &str = "shadow_knight";
    pub const VOID_WALKER: &str = "void_walker";
    pub const PHANTOM_ASSASSIN: &str = "phantom_assassin";
    pub const SHADOW_STALKER: &str = "shadow_stalker";
    pub const SHADOW_GUARDIAN: &str = "shadow_guardian";
    pub const SHADOW_CENTAUR: &str = "shadow_centaur";
}

pub fn enemy_template(key: &str) -> Option<Enemy> {
    let enemy = match key {
        keys::WOLF_PACK => Enemy::new(
            "Twilight Wolf Pack",
            "A pack of wolves touched by shadow magic, hunting in perfect coordination.",
            60,
            15,
        )
        .with_drops(&["wolf_fang", "shadow_touched_pelt"]),
        keys::SHADOW_HOUND => Enemy::new(
            "Shadow Hound",
            "A creature of pure shadow, barely visible until it strikes.",
            45,
            25,
        )
        .with_drops(&["shadow_essence", "void_fang"]),
        keys::CRYSTAL_GOLEM => Enemy::new(
            "Crystal Golem",
            "A massive construct of living crystal, pulsing with stored magical energy.",
            120,
            30,
        )
        .with_drops(&["perfect_crystal", "golem_core"]),
        keys::SPECTRAL_SENTINEL => Enemy::new(
            "Spectral Sentinel",
            "The vigilant spirit of an ancient guard, still patrolling its post.",
            80,
            35,
        )
        .with_drops(&["spectral_essence", "ancient_weapon"]),
        keys::CORRUPTED_CENTAUR_SPIRIT => Enemy::new(
            "Corrupted Centaur Spirit",
            "The twisted remnant of a fallen centaur warrior, consumed by darkness.",
            90,
            40,
        )
        .with_drops(&["corrupted_essence", "warrior_memory"]),
        keys::TWILIGHT_WISP => Enemy::new(
            "Twilight Wisp",
            "A mischievous spirit that leads travelers astray.",
            30,
            15,
        )
        .with_drops(&["wisp_essence", "twilight_shard"]),
        keys::MANA_WRAITH => Enemy::new(
            "Mana Wraith",
            "A spirit that feeds on magical energy, drawn to sources of power.",
            70,
            25,
        )
        .with_drops(&["wraith_essence", "crystallized_mana"]),
        keys::SHADOW_KNIGHT => Enemy::new(
            "Shadow Knight",
            "An elite warrior in service to the second centaur, wielding both blade and shadow.",
            150,
            45,
        )
        .with_drops(&["shadow_steel", "void_essence"]),
        keys::VOID_WALKER => Enemy::new(
            "Void Walker",
            "A being of pure void, barely held together by the second centaur's will.",
            120,
            50,
        )
        .with_drops(&["void_crystal", "null_essence"]),
        keys::PHANTOM_ASSASSIN => Enemy::new(
            "Phantom Assassin",
            "A deadly spirit that guards the secret paths. It strikes without warning.",
            80,
            50,
        )
        .with_drops(&["shadow_essence", "phantom_dagger"]),
        keys::SHADOW_STALKER => Enemy::new(
            "Shadow Stalker",
            "A creature of pure darkness that hunts at night. Nearly invisible in shadows.",
            80,
            25,
        )
        .with_drops(&["shadow_essence", "stealth_cloak"]),
        keys::SHADOW_GUARDIAN => Enemy::new(
            "Shadow Guardian",
            "A towering sentinel of living darkness that bars the valley road.",
            140,
            40,
        )
        .with_drops(&["guardian_essence"]),
        keys::SHADOW_CENTAUR => Enemy::new(
            "Shadow Centaur",
            "Your rival and dark mirror, crowned in stolen power.",
            300,
            60,
        )
        .with_drops(&["crown_of_dominion"]),
        _ => return None,
    };
    Some(enemy)
}

struct Area {
    name: &'static str,
    pos: Pos,
    terrain: TerrainType,
    description: &'static str,
    items: &'static [&'static str],
    enemies: &'static [&'static str],
    blocked: &'static [Direction],
}

const AREAS: &[Area] = &[
    Area {
        name: "Awakening Woods",
        pos: Pos { y: 0, x: 5 },
        terrain: TerrainType::Forest,
        description: "Ancient woods where you first awakened, stripped of your power.",
        items: &["basic_supplies", "old_map"],
        enemies: &[keys::WOLF_PACK],
        blocked: &[Direction::North],
    },
    Area {
        name: "Hermit's Grove",
        pos: Pos { y: 0, x: 4 },
        terrain: TerrainType::Forest,
        description: "A peaceful grove where the Hermit Druid contemplates the mysteries of the past.",
        items: &["crystal_focus", "ancient_scroll"],
        enemies: &[],
        blocked: &[],
    },
    Area {
        name: "Warrior's Camp",
        pos: Pos { y: 0, x: 6 },
        terrain: TerrainType::Clearing,
        description: "A small camp where the Fallen Warrior resides, surrounded by old battle standards.",
        items: &["training_sword"],
        enemies: &[],
        blocked: &[],
    },
    Area {
        name: "Trials Path",
        pos: Pos { y: 2, x: 5 },
        terrain: TerrainType::Clearing,
        description: "A crossroads where the three paths diverge, each leading to a different destiny.",
        items: &["path_marker", "ancient_inscription"],
        enemies: &[keys::TWILIGHT_WISP],
        blocked: &[],
    },
    Area {
        name: "Twilight Glade",
        pos: Pos { y: 3, x: 4 },
        terrain: TerrainType::Forest,
        description: "A small clearing where twilight seems to linger eternally.",
        items: &["shadow_essence_fragment"],
        enemies: &[keys::SHADOW_HOUND, keys::TWILIGHT_WISP],
        blocked: &[],
    },
    Area {
        name: "Warriors' Hollow",
        pos: Pos { y: 3, x: 6 },
        terrain: TerrainType::Ruins,
        description: "A sheltered hollow where ancient warriors once made camp.",
        items: &["warrior_token", "ancient_battle_plan"],
        enemies: &[keys::SPECTRAL_SENTINEL, keys::CORRUPTED_CENTAUR_SPIRIT],
        blocked: &[],
    },
    Area {
        name: "Mystic Mountains",
        pos: Pos { y: 4, x: 3 },
        terrain: TerrainType::Mountain,
        description: "Jagged peaks pulse with ancient power, their surfaces etched with glowing runes.",
        items: &["crystal_shard", "runic_inscription"],
        enemies: &[keys::CRYSTAL_GOLEM],
        blocked: &[],
    },
    Area {
        name: "Crystal Outpost",
        pos: Pos { y: 5, x: 2 },
        terrain: TerrainType::Mountain,
        description: "A former research post of the centaur mystics, now overrun by crystal formations.",
        items: &["crystal_key", "mystic_research_notes"],
        enemies: &[keys::CRYSTAL_GOLEM, keys::MANA_WRAITH],
        blocked: &[],
    },
    Area {
        name: "Crystal Caves",
        pos: Pos { y: 6, x: 3 },
        terrain: TerrainType::Cave,
        description: "A vast network of crystal-lined caves, humming with ancient magical frequencies.",
        items: &["mystic_crystal", "resonance_key"],
        enemies: &[keys::MANA_WRAITH],
        blocked: &[Direction::North],
    },
    Area {
        name: "Forgotten Grove",
        pos: Pos { y: 5, x: 5 },
        terrain: TerrainType::Forest,
        description: "A mysterious grove where shadows move with purpose and secrets hide in plain sight.",
        items: &["stealth_technique"],
        enemies: &[keys::SHADOW_STALKER],
        blocked: &[],
    },
    Area {
        name: "Ancient Ruins",
        pos: Pos { y: 4, x: 7 },
        terrain: TerrainType::Ruins,
        description: "Crumbling ruins of a mighty centaur stronghold, echoing with memories of battle.",
        items: &["ancient_sword", "battle_relic"],
        enemies: &[keys::PHANTOM_ASSASSIN],
        blocked: &[],
    },
    Area {
        name: "Enchanted Valley",
        pos: Pos { y: 5, x: 7 },
        terrain: TerrainType::Valley,
        description: "A valley of ancient battlefields, where the spirits of fallen warriors still linger.",
        items: &[],
        enemies: &[keys::SHADOW_GUARDIAN],
        blocked: &[Direction::North],
    },
    Area {
        name: "Shadow Domain",
        pos: Pos { y: 9, x: 5 },
        terrain: TerrainType::Ruins,
        description: "The corrupted throne of your rival, where reality itself bends to their will.",
        items: &[],
        enemies: &[keys::SHADOW_KNIGHT, keys::VOID_WALKER, keys::SHADOW_CENTAUR],
        blocked: &[],
    },
];

fn wilderness_terrain(pos: Pos) -> TerrainType {
    let idx = (pos.x * 7 + pos.y * 3).rem_euclid(TerrainType::ALL.len() as i32) as usize;
    TerrainType::ALL[idx]
}

fn wilderness_description(terrain: TerrainType) -> &'static str {
    match terrain {
        TerrainType::Forest => "Dense trees crowd the trail, their canopy whispering overhead.",
        TerrainType::Mountain => "A rocky slope climbs toward wind-scoured ridges.",
        TerrainType::Ruins => "Broken pillars jut from the grass, remnants of a forgotten age.",
        TerrainType::Clearing => "An open meadow of tall grass sways in the breeze.",
        TerrainType::Valley => "A gentle valley where a cold stream winds between low hills.",
        TerrainType::Cave => "The mouth of a shallow cave breathes cool, damp air.",
    }
}

/// Resources the `gather` command can collect on `terrain`.
pub fn gatherables(terrain: TerrainType) -> &'static [&'static str] {
    match terrain {
        TerrainType::Forest => &["leaves", "branches", "herbs", "berries"],
        TerrainType::Clearing => &["flowers", "grass", "herbs"],
        TerrainType::Mountain => &["rocks", "crystals", "roots"],
        TerrainType::Ruins => &["rubble", "artifacts", "dust"],
        TerrainType::Cave => &["mushrooms", "crystals", "moss"],
        TerrainType::Valley => &["reeds", "river_stones", "wildflowers"],
    }
}

/// Builds the full 10×10 world: authored areas first, wilderness elsewhere.
pub fn build_world() -> World {
    let mut world = World::new(WORLD_WIDTH, WORLD_HEIGHT);
    for y in 0..WORLD_HEIGHT {
        for x in 0..WORLD_WIDTH {
            let pos = Pos { y, x };
            let terrain = wilderness_terrain(pos);
            world.set_tile(pos, Tile::new("Wilderness", terrain, wilderness_description(terrain)));
        }
    }

    for area in AREAS {
        let mut tile = Tile::new(area.name, area.terrain, area.description);
        tile.authored = true;
        tile.items = area.items.iter().map(|i| i.to_string()).collect();
        tile.blocked = area.blocked.iter().copied().collect();
        world.set_tile(area.pos, tile);
        for key in area.enemies {
            if let Some(enemy) = enemy_template(key) {
                world.spawn_enemy(area.pos, enemy);
            }
        }
    }
    world
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_key_resolves() {
        for area in AREAS {
            for key in area.enemies {
                assert!(enemy_template(key).is_some(), "missing enemy {key}");
            }
        }
        assert!(enemy_template("goblin").is_none());
    }

    #[test]
    fn world_covers_the_grid() {
        let world = build_world();
        assert_eq!(world.tiles.len(), (WORLD_WIDTH * WORLD_HEIGHT) as usize);
        assert!(world.tile(START_POS).is_some_and(|t| t.authored));
    }

    #[test]
    fn areas_sit_inside_the_grid_without_overlap() {
        let world = World::new(WORLD_WIDTH, WORLD_HEIGHT);
        for (i, a) in AREAS.iter().enumerate() {
            assert!(world.in_bounds(a.pos), "{} out of bounds", a.name);
            assert!(AREAS[i + 1..].iter().all(|b| b.pos != a.pos), "{} overlaps", a.name);
        }
    }

    #[test]
    fn blocked_areas_have_enemies() {
        for area in AREAS.iter().filter(|a| !a.blocked.is_empty()) {
            assert!(!area.enemies.is_empty(), "{} blocks with no guard", area.name);
        }
    }

    #[test]
    fn boss_lair_holds_the_shadow_centaur() {
        let world = build_world();
        let lair = Pos { y: 9, x: 5 };
        assert!(world.find_enemy_at(lair, "shadow centaur").is_some());
    }
}
