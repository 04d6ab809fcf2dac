//! Behavior suite for the per-frame session rules: scoring, collisions,
//! death and respawn, level progression, gates, pause and start-delay.

use std::collections::BTreeSet;
use std::time::Duration;

use super::*;
use crate::movement::player_can_enter;

const FRAME: Duration = Duration::from_millis(16);

fn default_session() -> GameSession {
    GameSession::new(SessionConfig::new(7, MapSource::Default)).expect("session must build")
}

/// Arm and skip the spawn delay; returns a `now` safely past it.
fn past_delay(session: &mut GameSession) -> Duration {
    session.update(FrameInput::idle(), Duration::ZERO);
    Duration::from_secs(4)
}

/// Keep the roster imprisoned so tests can steer the player undisturbed.
fn freeze_ghosts(session: &mut GameSession) {
    for ghost in session.state.ghosts.values_mut() {
        ghost.release_frame = u64::MAX;
    }
}

fn ghost_ids(session: &GameSession) -> Vec<GhostId> {
    session.state.ghosts.keys().collect()
}

/// Walkable tiles reachable by the player from the spawn.
fn reachable_from_spawn(grid: &GridMap) -> BTreeSet<Pos> {
    let start = grid.player_spawn();
    let mut seen = BTreeSet::from([start]);
    let mut stack = vec![start];
    while let Some(pos) = stack.pop() {
        for direction in Direction::PRIORITY {
            if !player_can_enter(grid, pos, direction) {
                continue;
            }
            let next = grid.wrap(pos.step(direction));
            if seen.insert(next) {
                stack.push(next);
            }
        }
    }
    seen
}

#[test]
fn default_session_spawns_the_classic_roster() {
    let session = default_session();
    assert_eq!(session.state.ghosts.len(), 4);
    assert_eq!(session.lives(), 3);
    assert_eq!(session.difficulty(), 1);
    assert_eq!(session.state.player.pos, session.state.grid.player_spawn());
    for ghost in session.state.ghosts.values() {
        assert_eq!(ghost.mode, GhostMode::Imprisoned);
        assert_eq!(
            session.state.grid.tile_at(ghost.mover.pos),
            TileKind::GhostSpawn,
            "ghosts spawn on holding cells"
        );
    }
}

#[test]
fn eating_a_pellet_scores_ten_and_removes_it() {
    let mut session = default_session();
    let now = past_delay(&mut session);
    freeze_ghosts(&mut session);
    let before = session.state.pellets.len();

    let pellet = Pos { y: 1, x: 2 };
    assert!(session.state.pellets.contains_key(&pellet));
    session.state.player.pos = pellet;
    session.drain_events();
    session.update(FrameInput::idle(), now);

    assert_eq!(session.score(), PELLET_POINTS);
    assert_eq!(session.state.pellets.len(), before - 1);
    assert!(session
        .events()
        .iter()
        .any(|event| matches!(event, SessionEvent::PelletEaten { remaining, .. }
            if *remaining == before - 1)));
}

#[test]
fn eat_cue_fires_on_every_fourth_pellet() {
    let mut session = default_session();
    let mut now = past_delay(&mut session);
    freeze_ghosts(&mut session);
    session.drain_events();

    let targets: Vec<Pos> = session
        .state
        .pellets
        .keys()
        .filter(|pos| pos.y == 4)
        .take(4)
        .copied()
        .collect();
    assert_eq!(targets.len(), 4);
    for pos in targets {
        session.state.player.pos = pos;
        session.update(FrameInput::idle(), now);
        now += FRAME;
    }

    let cues = session
        .events()
        .iter()
        .filter(|event| matches!(event, SessionEvent::EatCue))
        .count();
    assert_eq!(cues, 1);
}

#[test]
fn energizer_scares_every_free_ghost() {
    let mut session = default_session();
    let now = past_delay(&mut session);
    freeze_ghosts(&mut session);

    let ids = ghost_ids(&session);
    // One ghost roams free, the rest stay imprisoned.
    {
        let ghost = &mut session.state.ghosts[ids[0]];
        ghost.mode = GhostMode::Normal;
        ghost.mover.pos = Pos { y: 1, x: 20 };
    }

    session.state.player.pos = Pos { y: 1, x: 1 };
    session.drain_events();
    session.update(FrameInput::idle(), now);

    assert!(session
        .events()
        .iter()
        .any(|event| matches!(event, SessionEvent::GhostsScared)));
    assert_eq!(session.state.ghosts[ids[0]].mode, GhostMode::Scared);
    for &id in &ids[1..] {
        assert_eq!(session.state.ghosts[id].mode, GhostMode::Imprisoned);
    }
}

#[test]
fn scare_timer_expiry_restores_normal_mode() {
    let mut session = default_session();
    let now = past_delay(&mut session);
    freeze_ghosts(&mut session);

    let ids = ghost_ids(&session);
    {
        let ghost = &mut session.state.ghosts[ids[0]];
        ghost.mode = GhostMode::Scared;
        ghost.scare_frames_left = 1;
        ghost.mover.pos = Pos { y: 1, x: 20 };
    }

    session.update(FrameInput::idle(), now);
    assert_eq!(session.state.ghosts[ids[0]].mode, GhostMode::Normal);
}

#[test]
fn capture_scoring_stacks_with_the_imprisoned_count() {
    let mut session = default_session();
    let mut now = past_delay(&mut session);
    freeze_ghosts(&mut session);

    let spawn = session.state.grid.player_spawn();
    let ids = ghost_ids(&session);

    {
        let ghost = &mut session.state.ghosts[ids[0]];
        ghost.mode = GhostMode::Scared;
        ghost.scare_frames_left = ghost::SCARE_FRAMES;
        ghost.mover.pos = spawn;
    }
    session.drain_events();
    session.update(FrameInput::idle(), now);
    now += FRAME;

    // Captured ghost went home imprisoned; nobody else was captive, so the
    // award is 200 * 1.
    assert_eq!(session.score(), GHOST_CAPTURE_POINTS);
    assert_eq!(session.state.ghosts[ids[0]].mode, GhostMode::Imprisoned);
    assert_eq!(session.state.ghosts[ids[0]].mover.pos, session.state.ghosts[ids[0]].home);

    // Second capture while one ghost is already imprisoned: 200 * 2.
    {
        let ghost = &mut session.state.ghosts[ids[1]];
        ghost.mode = GhostMode::Scared;
        ghost.scare_frames_left = ghost::SCARE_FRAMES;
        ghost.mover.pos = spawn;
    }
    session.update(FrameInput::idle(), now);

    assert_eq!(session.score(), GHOST_CAPTURE_POINTS * 3);
    let awards: Vec<u32> = session
        .events()
        .iter()
        .filter_map(|event| match event {
            SessionEvent::GhostCaptured { points, .. } => Some(*points),
            _ => None,
        })
        .collect();
    assert_eq!(awards, vec![200, 400]);
}

#[test]
fn normal_ghost_collision_costs_a_life_and_respawns_everyone() {
    let mut session = default_session();
    let now = past_delay(&mut session);

    let ids = ghost_ids(&session);
    {
        let ghost = &mut session.state.ghosts[ids[0]];
        ghost.mode = GhostMode::Normal;
        ghost.mover.pos = session.state.grid.player_spawn();
    }
    session.drain_events();
    session.update(FrameInput::idle(), now);

    assert_eq!(session.lives(), 2);
    assert!(session
        .events()
        .iter()
        .any(|event| matches!(event, SessionEvent::PlayerDied { lives_left: 2 })));
    assert_eq!(session.state.player.pos, session.state.grid.player_spawn());
    for ghost in session.state.ghosts.values() {
        assert_eq!(ghost.mode, GhostMode::Imprisoned);
    }

    // The fresh start-delay swallows movement input.
    session.update(FrameInput::steer(Direction::Left), now + FRAME);
    assert_eq!(session.state.player.facing, None);
    assert!(session.start_delay_remaining(now + FRAME).is_some());
}

#[test]
fn game_over_is_terminal() {
    let mut session = default_session();
    let now = past_delay(&mut session);
    session.lives = 1;

    let ids = ghost_ids(&session);
    {
        let ghost = &mut session.state.ghosts[ids[0]];
        ghost.mode = GhostMode::Normal;
        ghost.mover.pos = session.state.grid.player_spawn();
    }
    session.drain_events();
    session.update(FrameInput::idle(), now);

    assert_eq!(session.phase(), SessionPhase::GameOver);
    assert_eq!(session.lives(), 0);
    assert!(session
        .events()
        .iter()
        .any(|event| matches!(event, SessionEvent::GameOver { .. })));

    // No further input is processed.
    let frozen = session.snapshot_hash();
    session.update(FrameInput::steer(Direction::Right), now + FRAME);
    session.update(FrameInput::steer(Direction::Up), now + FRAME * 2);
    assert_eq!(session.snapshot_hash(), frozen);
}

#[test]
fn clearing_the_board_advances_difficulty_on_a_fresh_connected_maze() {
    let mut session = default_session();
    let mut now = past_delay(&mut session);
    freeze_ghosts(&mut session);

    let initial_pellets = session.state.pellets.len();
    let mut eaten = 0_usize;
    while session.difficulty() == 1 {
        let pos = *session.state.pellets.keys().next().expect("pellets remain");
        session.state.player.pos = pos;
        session.update(FrameInput::idle(), now);
        now += FRAME;
        eaten += 1;
        assert!(eaten <= initial_pellets, "level must clear once all pellets are gone");
    }

    assert_eq!(eaten, initial_pellets);
    assert_eq!(session.difficulty(), 2);
    assert_eq!(session.lives(), 3, "lives survive the transition");
    assert_eq!(
        session.score(),
        PELLET_POINTS * initial_pellets as u32,
        "score survives the transition"
    );
    assert!(session.events().iter().any(|event| {
        matches!(event, SessionEvent::LevelCleared { next_difficulty: 2, .. })
    }));

    // The replacement level is a freshly generated, fully stocked map…
    assert_eq!(session.source(), MapSource::Generated);
    let grid = &session.state.grid;
    assert_eq!(session.state.pellets.len(), grid.pellet_tile_count());
    assert!(session.start_delay_remaining(now).is_some());

    // …and every pellet on it is reachable from the new spawn.
    let reachable = reachable_from_spawn(grid);
    for pos in session.state.pellets.keys() {
        assert!(reachable.contains(pos), "pellet at {pos:?} must be reachable");
    }
}

#[test]
fn gate_openness_is_derived_from_ghost_state_each_frame() {
    let mut session = default_session();
    let mut now = past_delay(&mut session);
    freeze_ghosts(&mut session);

    session.update(FrameInput::idle(), now);
    now += FRAME;
    assert!(!session.state.grid.gates_open(), "all ghosts imprisoned, gates shut");

    let ids = ghost_ids(&session);
    session.state.ghosts[ids[0]].mode = GhostMode::Normal;
    session.update(FrameInput::idle(), now);
    now += FRAME;
    assert!(
        session.state.grid.gates_open(),
        "a released ghost waiting in the pen opens the gates"
    );

    // Once that ghost is out on the floor the gates derive shut again.
    {
        let ghost = &mut session.state.ghosts[ids[0]];
        ghost.mover = Mover::at(Pos { y: 10, x: 1 }, ghost.mover.speed);
    }
    session.update(FrameInput::idle(), now);
    assert!(!session.state.grid.gates_open());
}

#[test]
fn released_ghosts_path_out_of_the_pen() {
    let mut session = default_session();
    let mut now = past_delay(&mut session);

    let mut left_pen = false;
    for _ in 0..300 {
        session.update(FrameInput::idle(), now);
        now += FRAME;
        if session.phase() == SessionPhase::GameOver {
            break;
        }
        let outside = session.state.ghosts.values().any(|ghost| {
            ghost.mode == GhostMode::Normal
                && !matches!(
                    session.state.grid.tile_at(ghost.mover.pos),
                    TileKind::GhostSpawn | TileKind::GhostGate
                )
        });
        if outside {
            left_pen = true;
            break;
        }
    }
    assert!(left_pen, "a released ghost must leave the pen within a few seconds");
}

#[test]
fn pause_freezes_the_whole_update() {
    let mut session = default_session();
    let now = past_delay(&mut session);
    freeze_ghosts(&mut session);

    session.update(FrameInput { toggle_pause: true, ..FrameInput::idle() }, now);
    assert!(session.is_paused());

    let frozen = session.snapshot_hash();
    session.update(FrameInput::steer(Direction::Left), now + FRAME);
    assert_eq!(session.snapshot_hash(), frozen);

    session.update(
        FrameInput { toggle_pause: true, ..FrameInput::idle() },
        now + FRAME * 2,
    );
    assert!(!session.is_paused());
    session.update(FrameInput::steer(Direction::Left), now + FRAME * 3);
    assert_ne!(session.snapshot_hash(), frozen);
}

#[test]
fn start_delay_is_measured_on_the_callers_clock() {
    let mut session = default_session();
    session.update(FrameInput::idle(), Duration::from_secs(10));

    // 1 second in: still frozen regardless of how many frames elapse.
    for _ in 0..30 {
        session.update(FrameInput::steer(Direction::Left), Duration::from_secs(11));
    }
    assert_eq!(session.state.player.facing, None);
    assert!(session.start_delay_remaining(Duration::from_secs(11)).is_some());

    // Past the deadline the same input moves the player.
    session.update(FrameInput::steer(Direction::Left), Duration::from_millis(13_100));
    assert_eq!(session.state.player.facing, Some(Direction::Left));
    assert!(session.start_delay_remaining(Duration::from_millis(13_100)).is_none());
}

#[test]
fn restart_command_resets_the_run_on_the_same_grid() {
    let mut session = default_session();
    let now = past_delay(&mut session);
    freeze_ghosts(&mut session);

    session.state.player.pos = Pos { y: 1, x: 2 };
    session.update(FrameInput::idle(), now);
    assert_eq!(session.score(), PELLET_POINTS);
    let full_count = session.state.grid.pellet_tile_count();

    session.update(
        FrameInput { command: Some(DebugCommand::RestartCurrent), ..FrameInput::idle() },
        now + FRAME,
    );
    assert_eq!(session.score(), 0);
    assert_eq!(session.lives(), 3);
    assert_eq!(session.difficulty(), 1);
    assert_eq!(session.state.pellets.len(), full_count);
    assert_eq!(session.state.grid.width(), 28, "same grid is kept");
}

#[test]
fn regenerate_commands_switch_the_map_source() {
    let mut session = default_session();
    let now = past_delay(&mut session);

    session.update(
        FrameInput { command: Some(DebugCommand::RegenerateRandom), ..FrameInput::idle() },
        now,
    );
    assert_eq!(session.source(), MapSource::Generated);
    assert_eq!(session.state.grid.width(), 25);
    assert_eq!(session.state.grid.height(), 29);
    assert_eq!(session.state.ghosts.len(), 2, "generated maps start with two ghosts");

    session.update(
        FrameInput { command: Some(DebugCommand::RegenerateDefault), ..FrameInput::idle() },
        now + FRAME,
    );
    assert_eq!(session.source(), MapSource::Default);
    assert_eq!(session.state.grid.width(), 28);
    assert_eq!(session.state.ghosts.len(), 4);
}

#[test]
fn generated_levels_scale_the_roster_with_difficulty() {
    let mut session =
        GameSession::new(SessionConfig::new(11, MapSource::Generated)).expect("session");
    assert_eq!(session.state.ghosts.len(), 2);

    session.difficulty = 4;
    session.rebuild_level();
    assert_eq!(session.state.ghosts.len(), 3);

    session.difficulty = 7;
    session.rebuild_level();
    assert_eq!(session.state.ghosts.len(), 4);
}
