//! Per-ghost behavior: mode state machine and steering heuristics.

use crate::grid::GridMap;
use crate::movement::Mover;
use crate::pathfinding::{manhattan, shortest_distance};
use crate::types::{Direction, GhostId, GhostMode, GhostName, Pos, TileKind};

/// Frames a scare lasts at the 60 Hz presentation tick.
pub const SCARE_FRAMES: u32 = 420;
/// Release stagger between pen-mates, in simulated frames.
pub const RELEASE_INTERVAL_FRAMES: u64 = 120;

pub const SCARED_SPEED: u8 = 2;
const BASE_NORMAL_SPEED: u8 = 4;
const MAX_NORMAL_SPEED: u8 = 8;
/// Ghosts gain one substep of speed per this many difficulty levels.
const SPEEDUP_LEVELS: u32 = 3;

/// Chase personality. The classic four differ only in where they aim:
/// `ambush_offset` tiles ahead of the player's facing, plus an optional
/// shyness radius that sends the ghost to its scatter corner when it gets
/// close. Explicit policy values, not hidden constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Persona {
    pub name: GhostName,
    pub ambush_offset: i32,
    pub shy_radius: Option<u32>,
}

impl Persona {
    pub fn for_name(name: GhostName) -> Self {
        match name {
            GhostName::Blinky => Self { name, ambush_offset: 0, shy_radius: None },
            GhostName::Pinky => Self { name, ambush_offset: 4, shy_radius: None },
            GhostName::Inky => Self { name, ambush_offset: 2, shy_radius: None },
            GhostName::Clyde => Self { name, ambush_offset: 0, shy_radius: Some(8) },
        }
    }
}

#[derive(Clone, Debug)]
pub struct Ghost {
    pub id: GhostId,
    pub persona: Persona,
    pub mover: Mover,
    pub mode: GhostMode,
    pub scare_frames_left: u32,
    /// Simulation frame at which the session grants release from the pen.
    pub release_frame: u64,
    /// Holding cell this ghost is teleported back to when eaten.
    pub home: Pos,
}

impl Ghost {
    pub fn imprisoned(persona: Persona, home: Pos, release_frame: u64) -> Self {
        Self {
            id: GhostId::default(),
            persona,
            mover: Mover::at(home, SCARED_SPEED),
            mode: GhostMode::Imprisoned,
            scare_frames_left: 0,
            release_frame,
            home,
        }
    }

    pub fn name(&self) -> GhostName {
        self.persona.name
    }

    /// Chase speed scaled by difficulty, capped below a full tile per frame.
    pub fn normal_speed(difficulty: u32) -> u8 {
        let bonus = difficulty.saturating_sub(1) / SPEEDUP_LEVELS;
        (u32::from(BASE_NORMAL_SPEED) + bonus).min(u32::from(MAX_NORMAL_SPEED)) as u8
    }

    /// Pick the next direction at a tile boundary. Deterministic: candidates
    /// are scanned in the fixed priority order with strict improvement, and
    /// the reverse of the current facing is a dead-end-only last resort.
    pub fn choose_direction(
        &self,
        grid: &GridMap,
        player_pos: Pos,
        player_facing: Option<Direction>,
    ) -> Option<Direction> {
        match self.mode {
            GhostMode::Imprisoned => self.pace_in_pen(grid),
            GhostMode::Scared => self.flee(grid, player_pos),
            GhostMode::Normal => {
                let target = if self.inside_pen(grid) {
                    grid.pen_exit()
                } else {
                    self.chase_target(grid, player_pos, player_facing)
                };
                self.chase(grid, target)
            }
        }
    }

    fn inside_pen(&self, grid: &GridMap) -> bool {
        matches!(
            grid.tile_at(self.mover.pos),
            TileKind::GhostSpawn | TileKind::GhostGate
        )
    }

    fn chase_target(
        &self,
        grid: &GridMap,
        player_pos: Pos,
        player_facing: Option<Direction>,
    ) -> Pos {
        if let Some(radius) = self.persona.shy_radius
            && manhattan(self.mover.pos, player_pos) <= radius
        {
            return self.scatter_corner(grid);
        }

        let Some(facing) = player_facing else {
            return player_pos;
        };
        let (dy, dx) = facing.delta();
        let offset = self.persona.ambush_offset;
        Pos {
            y: (player_pos.y + dy * offset).clamp(0, grid.height() as i32 - 1),
            x: (player_pos.x + dx * offset).clamp(0, grid.width() as i32 - 1),
        }
    }

    fn scatter_corner(&self, grid: &GridMap) -> Pos {
        let right = grid.width() as i32 - 2;
        let bottom = grid.height() as i32 - 2;
        match self.persona.name {
            GhostName::Blinky => Pos { y: 1, x: right },
            GhostName::Pinky => Pos { y: 1, x: 1 },
            GhostName::Inky => Pos { y: bottom, x: right },
            GhostName::Clyde => Pos { y: bottom, x: 1 },
        }
    }

    fn chase(&self, grid: &GridMap, target: Pos) -> Option<Direction> {
        let reverse = self.mover.facing.map(Direction::opposite);
        let pass = |pos: Pos, direction: Direction| can_enter(grid, self.mode, pos, direction);

        let mut best: Option<(u32, Direction)> = None;
        for direction in Direction::PRIORITY {
            if Some(direction) == reverse {
                continue;
            }
            if !pass(self.mover.pos, direction) {
                continue;
            }
            let neighbor = grid.wrap(self.mover.pos.step(direction));
            // Unreachable targets still get a stable ordering via a penalized
            // straight-line estimate.
            let distance = shortest_distance(grid, neighbor, target, &pass)
                .unwrap_or_else(|| 10_000 + manhattan(neighbor, target));
            let better = match best {
                None => true,
                Some((best_distance, _)) => distance < best_distance,
            };
            if better {
                best = Some((distance, direction));
            }
        }

        match best {
            Some((_, direction)) => Some(direction),
            None => reverse.filter(|&direction| pass(self.mover.pos, direction)),
        }
    }

    fn flee(&self, grid: &GridMap, player_pos: Pos) -> Option<Direction> {
        let mut best: Option<(u32, Direction)> = None;
        for direction in Direction::PRIORITY {
            if !can_enter(grid, self.mode, self.mover.pos, direction) {
                continue;
            }
            let neighbor = grid.wrap(self.mover.pos.step(direction));
            let distance = manhattan(neighbor, player_pos);
            let better = match best {
                None => true,
                Some((best_distance, _)) => distance > best_distance,
            };
            if better {
                best = Some((distance, direction));
            }
        }
        best.map(|(_, direction)| direction)
    }

    /// Imprisoned ghosts shuttle between holding cells until released.
    fn pace_in_pen(&self, grid: &GridMap) -> Option<Direction> {
        let stays_inside = |direction: Direction| {
            let target = grid.wrap(self.mover.pos.step(direction));
            grid.tile_at(target) == TileKind::GhostSpawn
        };
        if let Some(current) = self.mover.facing {
            if stays_inside(current) {
                return Some(current);
            }
            if stays_inside(current.opposite()) {
                return Some(current.opposite());
            }
        }
        Direction::PRIORITY.into_iter().find(|&direction| stays_inside(direction))
    }
}

/// Ghost passability. Walls block; gate tiles are outward-only: a released
/// ghost still standing in the pen may step up through them, anything else —
/// inbound ghosts included — is blocked, and a ghost already on a gate can
/// only keep moving out.
pub fn can_enter(grid: &GridMap, mode: GhostMode, pos: Pos, direction: Direction) -> bool {
    if grid.tile_at(pos) == TileKind::GhostGate && direction != Direction::Up {
        return false;
    }
    let target = grid.wrap(pos.step(direction));
    match grid.tile_at(target) {
        TileKind::Wall => false,
        TileKind::GhostGate => {
            direction == Direction::Up
                && mode != GhostMode::Imprisoned
                && grid.tile_at(pos) == TileKind::GhostSpawn
        }
        _ => true,
    }
}
