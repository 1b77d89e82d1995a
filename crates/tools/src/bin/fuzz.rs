use anyhow::{Result, ensure};
use centaur_core::{Game, GameConfig};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tools::{format_snapshot_hash, logging};

const VERBS: &[&str] = &[
    "n", "s", "e", "w", "look", "status", "inventory", "map", "time", "gather", "meditate",
    "attack", "defend", "dodge", "special", "flee", "take", "drop", "say",
];
const TARGETS: &[&str] = &["", "wolf", "golem", "shadow", "map", "crystal", "fire", "earth"];
const PATHS: &[&str] = &["choose warrior", "choose mystic", "choose stealth"];

#[derive(Parser)]
#[command(author, version, about = "Drive a game with random commands and check invariants", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    commands: u32,
}

fn choose<'a>(rng: &mut ChaCha8Rng, slice: &[&'a str]) -> &'a str {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn random_line(rng: &mut ChaCha8Rng) -> String {
    if rng.next_u64() % 50 == 0 {
        return choose(rng, PATHS).to_string();
    }
    let verb = choose(rng, VERBS);
    let target = choose(rng, TARGETS);
    format!("{verb} {target}").trim().to_string()
}

fn check_invariants(game: &Game, step: u32) -> Result<()> {
    let player = game.player();
    ensure!(
        (1..=player.max_health).contains(&player.health),
        "step {step}: health {} outside 1..={}",
        player.health,
        player.max_health
    );
    ensure!(
        (0..=player.max_stamina).contains(&player.stamina),
        "step {step}: stamina {} outside 0..={}",
        player.stamina,
        player.max_stamina
    );
    ensure!(game.world().in_bounds(player.pos), "step {step}: player out of bounds at {:?}", player.pos);

    if let Some(enemy) = game.session().current_enemy() {
        ensure!(game.world().enemies.contains_key(enemy), "step {step}: session enemy missing");
        ensure!(
            game.world().enemies_at(player.pos).any(|(id, _)| id == enemy),
            "step {step}: session enemy is not on the player's tile"
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init("warn");

    println!("Starting fuzz harness on seed {} for {} commands...", args.seed, args.commands);
    let mut game = Game::new(GameConfig::with_seed(args.seed));
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for step in 0..args.commands {
        let line = random_line(&mut rng);
        game.execute(&line);
        check_invariants(&game, step)?;
    }

    println!(
        "Fuzz completed successfully. {} commands, clock {}, snapshot {}",
        game.commands_run(),
        game.clock().formatted(),
        format_snapshot_hash(game.snapshot_hash())
    );
    Ok(())
}
