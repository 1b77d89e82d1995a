use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::types::{Direction, EnemyId, PathType, Pos, TerrainType};

pub const PLAYER_MAX_HEALTH: i32 = 100;
pub const PLAYER_MAX_STAMINA: i32 = 100;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub stamina: i32,
    pub max_stamina: i32,
    pub inventory: Vec<String>,
    pub pos: Pos,
    pub path: Option<PathType>,
}

impl Player {
    pub fn new(name: impl Into<String>, pos: Pos) -> Self {
        Self {
            name: name.into(),
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            stamina: PLAYER_MAX_STAMINA,
            max_stamina: PLAYER_MAX_STAMINA,
            inventory: Vec::new(),
            pos,
            path: None,
        }
    }

    /// Index of the first inventory item containing `fragment`, case-insensitively.
    pub fn find_item(&self, fragment: &str) -> Option<usize> {
        find_by_fragment(&self.inventory, fragment)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub description: String,
    pub health: i32,
    pub max_health: i32,
    pub damage: i32,
    pub drops: Vec<String>,
}

impl Enemy {
    pub fn new(name: impl Into<String>, description: impl Into<String>, health: i32, damage: i32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            health,
            max_health: health,
            damage,
            drops: Vec::new(),
        }
    }

    pub fn with_drops(mut self, drops: &[&str]) -> Self {
        self.drops = drops.iter().map(|d| d.to_string()).collect();
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub area: String,
    pub terrain: TerrainType,
    pub description: String,
    pub items: Vec<String>,
    pub enemies: Vec<EnemyId>,
    /// Exits held shut while any enemy remains on the tile.
    pub blocked: BTreeSet<Direction>,
    /// Hand-placed story area rather than generated wilderness.
    pub authored: bool,
}

impl Tile {
    pub fn new(area: impl Into<String>, terrain: TerrainType, description: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            terrain,
            description: description.into(),
            items: Vec::new(),
            enemies: Vec::new(),
            blocked: BTreeSet::new(),
            authored: false,
        }
    }

    pub fn find_item(&self, fragment: &str) -> Option<usize> {
        find_by_fragment(&self.items, fragment)
    }
}

fn find_by_fragment(items: &[String], fragment: &str) -> Option<usize> {
    let needle = fragment.to_lowercase().replace(' ', "_");
    let spaced = fragment.to_lowercase();
    items.iter().position(|item| {
        let lower = item.to_lowercase();
        lower.contains(&needle) || lower.contains(&spaced)
    })
}

/// Tiles on a bounded grid plus the enemies that stand on them.
#[derive(Clone, Debug)]
pub struct World {
    pub width: i32,
    pub height: i32,
    pub tiles: BTreeMap<Pos, Tile>,
    pub enemies: SlotMap<EnemyId, Enemy>,
}

impl World {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, tiles: BTreeMap::new(), enemies: SlotMap::with_key() }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    pub fn tile(&self, pos: Pos) -> Option<&Tile> {
        self.tiles.get(&pos)
    }

    pub fn tile_mut(&mut self, pos: Pos) -> Option<&mut Tile> {
        self.tiles.get_mut(&pos)
    }

    pub fn set_tile(&mut self, pos: Pos, tile: Tile) {
        self.tiles.insert(pos, tile);
    }

    /// Places `enemy` on the tile at `pos`. Returns `None` when there is no tile.
    pub fn spawn_enemy(&mut self, pos: Pos, enemy: Enemy) -> Option<EnemyId> {
        let tile = self.tiles.get_mut(&pos)?;
        let id = self.enemies.insert(enemy);
        tile.enemies.push(id);
        Some(id)
    }

    pub fn enemies_at(&self, pos: Pos) -> impl Iterator<Item = (EnemyId, &Enemy)> + '_ {
        self.tiles
            .get(&pos)
            .into_iter()
            .flat_map(|tile| tile.enemies.iter())
            .filter_map(|id| self.enemies.get(*id).map(|e| (*id, e)))
    }

    /// First enemy at `pos` whose name contains `fragment`, case-insensitively.
    /// An empty fragment matches the first enemy present.
    pub fn find_enemy_at(&self, pos: Pos, fragment: &str) -> Option<EnemyId> {
        let needle = fragment.trim().to_lowercase();
        self.enemies_at(pos)
            .find(|(_, e)| needle.is_empty() || e.name.to_lowercase().contains(&needle))
            .map(|(id, _)| id)
    }

    /// Takes the enemy off its tile and out of the world. Clearing the last
    /// enemy from a tile also opens its blocked exits.
    pub fn remove_enemy(&mut self, pos: Pos, id: EnemyId) -> Option<Enemy> {
        let enemy = self.enemies.remove(id)?;
        if let Some(tile) = self.tiles.get_mut(&pos) {
            tile.enemies.retain(|e| *e != id);
            if tile.enemies.is_empty() {
                tile.blocked.clear();
            }
        }
        Some(enemy)
    }
}
