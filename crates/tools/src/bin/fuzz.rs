use std::time::Duration;

use anyhow::{Result, anyhow, ensure};
use clap::Parser;
use game_core::{
    Direction, FrameInput, GameSession, GhostMode, MapSource, SessionConfig, SessionPhase,
    TileKind,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 5_000)]
    frames: u32,
    /// Play on the hand-authored map instead of a generated one
    #[arg(long)]
    default_map: bool,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn main() -> Result<()> {
    let args = Args::parse();
    let source = if args.default_map { MapSource::Default } else { MapSource::Generated };
    println!("Fuzzing a session on seed {} for max {} frames...", args.seed, args.frames);

    let mut session = GameSession::new(SessionConfig::new(args.seed, source))
        .map_err(|error| anyhow!("session setup failed: {error}"))?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut now = Duration::ZERO;
    let mut last_score = 0_u32;
    let mut last_lives = session.lives();

    for _ in 0..args.frames {
        let input = match rng.next_u64() % 8 {
            0 => FrameInput::idle(),
            1 => FrameInput { toggle_pause: true, ..FrameInput::idle() },
            _ => FrameInput::steer(choose(
                &mut rng,
                &[Direction::Up, Direction::Left, Direction::Down, Direction::Right],
            )),
        };
        session.update(input, now);
        now += Duration::from_millis(16);

        ensure!(session.score() >= last_score, "score regressed mid-run");
        ensure!(session.lives() <= last_lives, "lives increased mid-run");
        last_score = session.score();
        last_lives = session.lives();

        // Gate openness must always derive from current ghost state.
        let state = session.state();
        let expected_open = state.ghosts.values().any(|ghost| {
            ghost.mode == GhostMode::Normal
                && state.grid.tile_at(ghost.mover.pos) == TileKind::GhostSpawn
        });
        ensure!(
            state.grid.gates_open() == expected_open,
            "gate state drifted from ghost positions/modes"
        );
        session.drain_events();

        if session.phase() == SessionPhase::GameOver {
            println!("Game over after {} simulated frames", session.frame());
            break;
        }
    }

    println!(
        "Score: {}  Lives: {}  Difficulty: {}",
        session.score(),
        session.lives(),
        session.difficulty()
    );
    println!("Snapshot hash: 0x{:016x}", session.snapshot_hash());
    Ok(())
}
