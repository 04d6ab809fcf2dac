//! Mutable level state, owned exclusively by the session.

use std::collections::BTreeMap;

use slotmap::SlotMap;

use crate::ghost::Ghost;
use crate::grid::GridMap;
use crate::movement::Mover;
use crate::types::{GhostId, PelletKind, Pos};

/// Everything that changes while a level is played. The session hands out
/// shared references for rendering; nothing else mutates it.
pub struct LevelState {
    pub grid: GridMap,
    pub player: Mover,
    pub ghosts: SlotMap<GhostId, Ghost>,
    pub pellets: BTreeMap<Pos, PelletKind>,
}
