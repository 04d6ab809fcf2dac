//! Frame-synchronous game orchestration.
//!
//! `GameSession` owns the grid, the player, the ghosts and the pellet set
//! for one run, and advances them in a fixed intra-frame order: player
//! input, ghost updates, player-ghost collisions, pellet consumption, win
//! check, gate recompute. Everything is synchronous; the caller supplies a
//! monotonic `now` each frame so the start-delay window stays correct under
//! variable frame rates.

use std::fmt;
use std::mem;
use std::time::Duration;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use slotmap::SlotMap;

use crate::ghost::{self, Ghost, Persona};
use crate::grid::{GridMap, MapError};
use crate::maze::{self, MazeError};
use crate::movement::{self, Mover};
use crate::state::LevelState;
use crate::types::{
    DebugCommand, Direction, FrameInput, GhostId, GhostMode, GhostName, PelletKind, Pos,
    SessionEvent, SessionPhase, TileKind,
};

pub const PLAYER_SPEED: u8 = 4;
pub const DEFAULT_LIVES: u8 = 3;
/// Gameplay stays frozen this long after every (re)spawn, measured on the
/// caller's monotonic clock.
pub const START_DELAY: Duration = Duration::from_secs(3);

pub const PELLET_POINTS: u32 = 10;
pub const GHOST_CAPTURE_POINTS: u32 = 200;
/// The munch cue fires on every 4th pellet.
const EAT_CUE_INTERVAL: u32 = 4;

const DEFAULT_MAP_GHOSTS: usize = 4;
const BASE_GENERATED_GHOSTS: usize = 2;
/// Generated levels field one extra ghost per this many difficulty levels.
const GHOST_TIER_LEVELS: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapSource {
    Default,
    Generated,
}

#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    pub seed: u64,
    pub source: MapSource,
    pub lives: u8,
    pub start_delay: Duration,
}

impl SessionConfig {
    pub fn new(seed: u64, source: MapSource) -> Self {
        Self { seed, source, lives: DEFAULT_LIVES, start_delay: START_DELAY }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionError {
    Map(MapError),
    Maze(MazeError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(error) => write!(f, "invalid map: {error}"),
            Self::Maze(error) => write!(f, "maze generation failed: {error}"),
        }
    }
}

pub struct GameSession {
    state: LevelState,
    source: MapSource,
    initial_lives: u8,
    start_delay: Duration,
    rng: ChaCha8Rng,
    score: u32,
    lives: u8,
    difficulty: u32,
    paused: bool,
    phase: SessionPhase,
    frame: u64,
    pellets_eaten: u32,
    /// Armed on (re)spawn; converted into a deadline on the next update so
    /// the session never has to read a clock itself.
    delay_pending: bool,
    start_delay_until: Option<Duration>,
    events: Vec<SessionEvent>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let grid = Self::build_grid(config.source, &mut rng)?;
        let pellets = grid.pellet_scan();
        let player = Mover::at(grid.player_spawn(), PLAYER_SPEED);

        let mut session = Self {
            state: LevelState { grid, player, ghosts: SlotMap::with_key(), pellets },
            source: config.source,
            initial_lives: config.lives,
            start_delay: config.start_delay,
            rng,
            score: 0,
            lives: config.lives,
            difficulty: 1,
            paused: false,
            phase: SessionPhase::Playing,
            frame: 0,
            pellets_eaten: 0,
            delay_pending: true,
            start_delay_until: None,
            events: Vec::new(),
        };
        session.spawn_entities();
        session.recompute_gates();
        Ok(session)
    }

    /// Advance one frame. `now` must come from a monotonic clock.
    pub fn update(&mut self, input: FrameInput, now: Duration) {
        if let Some(command) = input.command {
            self.apply_command(command);
            return;
        }
        if self.phase == SessionPhase::GameOver {
            return;
        }
        if input.toggle_pause {
            self.paused = !self.paused;
        }
        if self.paused {
            return;
        }

        if self.delay_pending {
            self.start_delay_until = Some(now + self.start_delay);
            self.delay_pending = false;
        }
        if let Some(deadline) = self.start_delay_until {
            if now < deadline {
                // Motion and input are frozen; derived state still settles.
                self.recompute_gates();
                return;
            }
            self.start_delay_until = None;
        }

        self.frame += 1;

        self.step_player(input.direction);
        self.step_ghosts();

        if self.resolve_ghost_collisions() {
            self.recompute_gates();
            return;
        }

        self.consume_pellet();

        if self.state.pellets.is_empty() {
            let next_difficulty = self.difficulty + 1;
            self.events
                .push(SessionEvent::LevelCleared { score: self.score, next_difficulty });
            self.difficulty = next_difficulty;
            self.source = MapSource::Generated;
            self.rebuild_level();
            return;
        }

        self.recompute_gates();
    }

    pub fn state(&self) -> &LevelState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn source(&self) -> MapSource {
        self.source
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn pellets_eaten(&self) -> u32 {
        self.pellets_eaten
    }

    /// Remaining start-delay window, if gameplay is currently frozen.
    pub fn start_delay_remaining(&self, now: Duration) -> Option<Duration> {
        if self.delay_pending {
            return Some(self.start_delay);
        }
        match self.start_delay_until {
            Some(deadline) if now < deadline => Some(deadline - now),
            _ => None,
        }
    }

    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Hand the accumulated events to the presentation layer.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        mem::take(&mut self.events)
    }

    /// Canonical state digest for determinism tests and the fuzz harness.
    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;
        use xxhash_rust::xxh3::Xxh3;

        let mut hasher = Xxh3::new();
        hasher.write_u64(self.frame);
        hasher.write_u32(self.score);
        hasher.write_u8(self.lives);
        hasher.write_u32(self.difficulty);
        hasher.write_u8(match self.phase {
            SessionPhase::Playing => 0,
            SessionPhase::GameOver => 1,
        });

        hasher.write_i32(self.state.player.pos.y);
        hasher.write_i32(self.state.player.pos.x);
        hasher.write_u8(direction_code(self.state.player.facing));
        hasher.write_u8(self.state.player.progress);

        for ghost in self.state.ghosts.values() {
            hasher.write_i32(ghost.mover.pos.y);
            hasher.write_i32(ghost.mover.pos.x);
            hasher.write_u8(direction_code(ghost.mover.facing));
            hasher.write_u8(ghost.mover.progress);
            hasher.write_u8(match ghost.mode {
                GhostMode::Normal => 0,
                GhostMode::Scared => 1,
                GhostMode::Imprisoned => 2,
            });
        }

        hasher.write_usize(self.state.pellets.len());
        for pos in self.state.pellets.keys() {
            hasher.write_i32(pos.y);
            hasher.write_i32(pos.x);
        }
        hasher.finish()
    }

    fn step_player(&mut self, requested: Option<Direction>) {
        let state = &mut self.state;
        let grid = &state.grid;
        let pass =
            |pos: Pos, direction: Direction| movement::player_can_enter(grid, pos, direction);
        movement::advance(&mut state.player, requested, grid, &pass);
    }

    fn step_ghosts(&mut self) {
        let player_pos = self.state.player.pos;
        let player_facing = self.state.player.facing;
        let normal_speed = Ghost::normal_speed(self.difficulty);
        let ids: Vec<GhostId> = self.state.ghosts.keys().collect();

        for id in ids {
            let frame = self.frame;
            {
                let ghost = &mut self.state.ghosts[id];
                match ghost.mode {
                    GhostMode::Imprisoned if frame >= ghost.release_frame => {
                        ghost.mode = GhostMode::Normal;
                        ghost.mover.speed = normal_speed;
                        self.events.push(SessionEvent::GhostReleased { ghost: id });
                    }
                    GhostMode::Scared => {
                        ghost.scare_frames_left = ghost.scare_frames_left.saturating_sub(1);
                        if ghost.scare_frames_left == 0 {
                            ghost.mode = GhostMode::Normal;
                            ghost.mover.speed = normal_speed;
                        }
                    }
                    _ => {}
                }
            }

            let steering = {
                let ghost = &self.state.ghosts[id];
                // Steer at rest and on boundary-crossing frames; speeds that
                // do not divide the tile substeps still turn at junctions.
                let at_decision_point = ghost.mover.is_aligned()
                    || u16::from(ghost.mover.progress) + u16::from(ghost.mover.speed)
                        >= u16::from(movement::TILE_SUBSTEPS);
                if at_decision_point {
                    ghost.choose_direction(&self.state.grid, player_pos, player_facing)
                } else {
                    ghost.mover.facing
                }
            };

            let mode = self.state.ghosts[id].mode;
            let state = &mut self.state;
            let grid = &state.grid;
            let pass =
                |pos: Pos, direction: Direction| ghost::can_enter(grid, mode, pos, direction);
            movement::advance(&mut state.ghosts[id].mover, steering, grid, &pass);
        }
    }

    /// Returns true when the player died this frame and the rest of the
    /// frame must be skipped.
    fn resolve_ghost_collisions(&mut self) -> bool {
        let player_pos = self.state.player.pos;
        let colliding: Vec<GhostId> = self
            .state
            .ghosts
            .iter()
            .filter(|(_, ghost)| ghost.mover.pos == player_pos)
            .map(|(id, _)| id)
            .collect();

        if colliding
            .iter()
            .any(|&id| self.state.ghosts[id].mode == GhostMode::Normal)
        {
            self.handle_death();
            return true;
        }

        for id in colliding {
            if self.state.ghosts[id].mode == GhostMode::Scared {
                self.capture_ghost(id);
            }
        }
        false
    }

    fn consume_pellet(&mut self) {
        let player_pos = self.state.player.pos;
        let Some(kind) = self.state.pellets.remove(&player_pos) else {
            return;
        };

        self.score += PELLET_POINTS;
        self.pellets_eaten += 1;
        self.events.push(SessionEvent::PelletEaten {
            pos: player_pos,
            remaining: self.state.pellets.len(),
        });
        if self.pellets_eaten % EAT_CUE_INTERVAL == 0 {
            self.events.push(SessionEvent::EatCue);
        }
        if kind == PelletKind::Energizer {
            self.events.push(SessionEvent::EnergizerEaten { pos: player_pos });
            self.scare_ghosts();
            self.events.push(SessionEvent::GhostsScared);
        }
    }

    fn scare_ghosts(&mut self) {
        for ghost in self.state.ghosts.values_mut() {
            if ghost.mode != GhostMode::Imprisoned {
                ghost.mode = GhostMode::Scared;
                ghost.scare_frames_left = ghost::SCARE_FRAMES;
                ghost.mover.speed = ghost::SCARED_SPEED;
            }
        }
    }

    fn capture_ghost(&mut self, id: GhostId) {
        let frame = self.frame;
        {
            let ghost = &mut self.state.ghosts[id];
            ghost.mode = GhostMode::Imprisoned;
            ghost.scare_frames_left = 0;
            ghost.mover = Mover::at(ghost.home, ghost::SCARED_SPEED);
            ghost.release_frame = frame + ghost::RELEASE_INTERVAL_FRAMES;
        }

        let imprisoned = self
            .state
            .ghosts
            .values()
            .filter(|ghost| ghost.mode == GhostMode::Imprisoned)
            .count() as u32;
        let points = GHOST_CAPTURE_POINTS * imprisoned;
        self.score += points;
        self.events.push(SessionEvent::GhostCaptured { ghost: id, points });
    }

    fn handle_death(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(SessionEvent::PlayerDied { lives_left: self.lives });
        if self.lives == 0 {
            self.phase = SessionPhase::GameOver;
            self.events.push(SessionEvent::GameOver { score: self.score });
        } else {
            self.spawn_entities();
            self.delay_pending = true;
        }
    }

    fn apply_command(&mut self, command: DebugCommand) {
        match command {
            DebugCommand::RestartCurrent => self.reset_run(None),
            DebugCommand::RegenerateDefault => self.reset_run(Some(MapSource::Default)),
            DebugCommand::RegenerateRandom => self.reset_run(Some(MapSource::Generated)),
        }
    }

    /// Fresh run on either the current grid or a newly built one.
    fn reset_run(&mut self, source: Option<MapSource>) {
        self.score = 0;
        self.lives = self.initial_lives;
        self.difficulty = 1;
        self.paused = false;
        self.phase = SessionPhase::Playing;
        self.pellets_eaten = 0;

        match source {
            Some(source) => {
                self.source = source;
                self.rebuild_level();
            }
            None => {
                self.state.pellets = self.state.grid.pellet_scan();
                self.spawn_entities();
                self.delay_pending = true;
                self.recompute_gates();
            }
        }
    }

    fn rebuild_level(&mut self) {
        let grid = match Self::build_grid(self.source, &mut self.rng) {
            Ok(grid) => grid,
            // The generator retries invalid draws internally; if it still
            // fails, the hand-authored map is always a safe level.
            Err(_) => GridMap::parse(&maze::default_map_rows())
                .expect("default map is a valid grid"),
        };
        self.state.grid = grid;
        self.state.pellets = self.state.grid.pellet_scan();
        self.pellets_eaten = 0;
        self.spawn_entities();
        self.delay_pending = true;
        self.recompute_gates();
    }

    fn build_grid(source: MapSource, rng: &mut ChaCha8Rng) -> Result<GridMap, SessionError> {
        let rows = match source {
            MapSource::Default => maze::default_map_rows(),
            MapSource::Generated => {
                maze::generated_map_rows(rng.next_u64()).map_err(SessionError::Maze)?
            }
        };
        GridMap::parse(&rows).map_err(SessionError::Map)
    }

    /// (Re)spawn the player and the ghost roster from the grid's spawn
    /// tiles. Pellets are untouched — death respawns must not refill them.
    fn spawn_entities(&mut self) {
        let player_spawn = self.state.grid.player_spawn();
        let holding = self.state.grid.holding_cells();
        let count = self.ghost_count().clamp(1, holding.len());

        self.state.player = Mover::at(player_spawn, PLAYER_SPEED);
        self.state.ghosts.clear();
        for index in 0..count {
            // Spread the roster across the holding region.
            let home = holding[index * holding.len() / count];
            let persona = Persona::for_name(GhostName::for_index(index));
            let release_frame =
                self.frame + (index as u64 + 1) * ghost::RELEASE_INTERVAL_FRAMES;
            let id = self.state.ghosts.insert(Ghost::imprisoned(persona, home, release_frame));
            self.state.ghosts[id].id = id;
        }
    }

    fn ghost_count(&self) -> usize {
        match self.source {
            MapSource::Default => DEFAULT_MAP_GHOSTS,
            MapSource::Generated => {
                BASE_GENERATED_GHOSTS
                    + ((self.difficulty.saturating_sub(1)) / GHOST_TIER_LEVELS) as usize
            }
        }
    }

    /// Gate openness is a pure function of current ghost positions and
    /// modes, recomputed every frame and never persisted.
    fn recompute_gates(&mut self) {
        let open = self.state.ghosts.values().any(|ghost| {
            ghost.mode == GhostMode::Normal
                && self.state.grid.tile_at(ghost.mover.pos) == TileKind::GhostSpawn
        });
        self.state.grid.set_gates_open(open);
    }
}

fn direction_code(direction: Option<Direction>) -> u8 {
    match direction {
        None => 0,
        Some(Direction::Up) => 1,
        Some(Direction::Left) => 2,
        Some(Direction::Down) => 3,
        Some(Direction::Right) => 4,
    }
}

#[cfg(test)]
mod tests;
