//! Shared fixtures for the `game` submodule test suites.
//! Small hand-built worlds keep handler tests independent of story content.

use super::*;
use crate::combat::dice::FixedDice;
use crate::content::{enemy_template, keys};
use crate::state::Tile;

pub(super) const FIELD_START: Pos = Pos { y: 1, x: 1 };

fn field_world(terrain: TerrainType) -> World {
    let mut world = World::new(3, 3);
    for y in 0..3 {
        for x in 0..3 {
            world.set_tile(Pos { y, x }, Tile::new("Open Field", terrain, "Tall grass and open sky."));
        }
    }
    world
}

/// 3×3 clearing with no enemies; the player starts in the middle.
pub(super) fn open_field_game() -> Game {
    Game::with_world(
        GameConfig::default(),
        field_world(TerrainType::Clearing),
        FIELD_START,
        Box::new(FixedDice::test_mode()),
    )
}

/// Open field with a wolf pack in the middle tile holding the north exit.
pub(super) fn guarded_field_game() -> (Game, EnemyId) {
    let mut world = field_world(TerrainType::Forest);
    let wolves = world
        .spawn_enemy(FIELD_START, enemy_template(keys::WOLF_PACK).unwrap())
        .unwrap();
    world.tile_mut(FIELD_START).unwrap().blocked.insert(Direction::North);
    world.tile_mut(FIELD_START).unwrap().items.push("old_map".to_string());
    let game = Game::with_world(
        GameConfig::default(),
        world,
        FIELD_START,
        Box::new(FixedDice::test_mode()),
    );
    (game, wolves)
}

/// Same as [`guarded_field_game`] with a caller-chosen enemy and dice.
pub(super) fn arena_game(key: &str, path: Option<PathType>, dice: Box<dyn Dice>) -> (Game, EnemyId) {
    let mut world = field_world(TerrainType::Ruins);
    let enemy = world.spawn_enemy(FIELD_START, enemy_template(key).unwrap()).unwrap();
    let config = GameConfig { path, ..GameConfig::default() };
    (Game::with_world(config, world, FIELD_START, dice), enemy)
}
