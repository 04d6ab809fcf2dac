//! Discrete-grid movement shared by the player and the ghosts.
//!
//! An entity occupies exactly one tile; `progress` measures how far it has
//! travelled toward the next one in 1/16-tile substeps. Logical occupancy
//! (collision, pellet pickup) always uses the tile position; the fractional
//! offset exists for rendering only.

use crate::grid::GridMap;
use crate::types::{Direction, Pos, TileKind};

/// Sub-tile progress units per tile.
pub const TILE_SUBSTEPS: u8 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mover {
    pub pos: Pos,
    pub facing: Option<Direction>,
    pub progress: u8,
    pub speed: u8,
}

impl Mover {
    pub fn at(pos: Pos, speed: u8) -> Self {
        Self { pos, facing: None, progress: 0, speed }
    }

    /// Tile-aligned movers may change direction this frame.
    pub fn is_aligned(&self) -> bool {
        self.progress == 0
    }

    /// Fraction of a tile travelled toward the next one, for rendering.
    pub fn offset_fraction(&self) -> f32 {
        f32::from(self.progress) / f32::from(TILE_SUBSTEPS)
    }
}

/// Advance `mover` by one frame of motion.
///
/// A requested turn is honored at tile alignment when the adjacent tile that
/// way can be entered; otherwise the mover keeps its current facing while
/// that stays passable, and stops flush otherwise. An impossible request is
/// silently ignored, never an error.
pub fn advance(
    mover: &mut Mover,
    requested: Option<Direction>,
    grid: &GridMap,
    can_enter: &impl Fn(Pos, Direction) -> bool,
) {
    if mover.is_aligned() {
        steer(mover, requested, can_enter);
    }
    let Some(mut direction) = mover.facing else {
        return;
    };

    mover.progress = mover.progress.saturating_add(mover.speed);
    while mover.progress >= TILE_SUBSTEPS {
        mover.progress -= TILE_SUBSTEPS;
        mover.pos = grid.wrap(mover.pos.step(direction));
        if mover.progress == 0 {
            break;
        }
        // Leftover motion crosses into another tile; re-steer at this
        // alignment before spending it.
        steer(mover, requested, can_enter);
        match mover.facing {
            Some(next) => direction = next,
            None => {
                mover.progress = 0;
                break;
            }
        }
    }
}

fn steer(
    mover: &mut Mover,
    requested: Option<Direction>,
    can_enter: &impl Fn(Pos, Direction) -> bool,
) {
    if let Some(turn) = requested
        && can_enter(mover.pos, turn)
    {
        mover.facing = Some(turn);
        return;
    }
    if let Some(current) = mover.facing
        && can_enter(mover.pos, current)
    {
        return;
    }
    mover.facing = None;
}

/// Player passability: walls always block, and gate tiles block the player
/// symmetrically from both sides.
pub fn player_can_enter(grid: &GridMap, pos: Pos, direction: Direction) -> bool {
    let target = grid.wrap(pos.step(direction));
    let tile = grid.tile_at(target);
    tile.is_walkable() && tile != TileKind::GhostGate
}
