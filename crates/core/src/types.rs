use slotmap::new_key_type;

new_key_type! {
    pub struct GhostId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Self {
        let (dy, dx) = direction.delta();
        Self { y: self.y + dy, x: self.x + dx }
    }
}

/// Declaration order doubles as the fixed tie-break priority used everywhere
/// a direction must be chosen deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    pub const PRIORITY: [Self; 4] = [Self::Up, Self::Left, Self::Down, Self::Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Left => (0, -1),
            Self::Down => (1, 0),
            Self::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Left => Self::Right,
            Self::Down => Self::Up,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Wall,
    Floor,
    Pellet,
    PowerPellet,
    GhostGate,
    PlayerSpawn,
    GhostSpawn,
}

impl TileKind {
    /// Whether an entity may stand on this tile at all. Gate passability is
    /// stricter and handled by the movement rules, not here.
    pub fn is_walkable(self) -> bool {
        self != Self::Wall
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PelletKind {
    Normal,
    Energizer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GhostMode {
    Normal,
    Scared,
    Imprisoned,
}

/// The classic identities, assigned cyclically when a level fields more than
/// four ghosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GhostName {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl GhostName {
    pub fn for_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::Blinky,
            1 => Self::Pinky,
            2 => Self::Inky,
            _ => Self::Clyde,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Blinky => "Blinky",
            Self::Pinky => "Pinky",
            Self::Inky => "Inky",
            Self::Clyde => "Clyde",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Playing,
    GameOver,
}

/// Edge-triggered debug/replay commands from the input collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebugCommand {
    RestartCurrent,
    RegenerateDefault,
    RegenerateRandom,
}

/// One frame's worth of input intent. `direction` reflects held keys;
/// `toggle_pause` and `command` must already be edge-triggered by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub direction: Option<Direction>,
    pub toggle_pause: bool,
    pub command: Option<DebugCommand>,
}

impl FrameInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn steer(direction: Direction) -> Self {
        Self { direction: Some(direction), ..Self::default() }
    }
}

/// Domain events appended by the session each frame, drained by the
/// presentation layer for sound cues and leaderboard submissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    PelletEaten { pos: Pos, remaining: usize },
    /// Every 4th pellet; the presentation layer maps this to the munch sound.
    EatCue,
    EnergizerEaten { pos: Pos },
    GhostsScared,
    GhostReleased { ghost: GhostId },
    GhostCaptured { ghost: GhostId, points: u32 },
    PlayerDied { lives_left: u8 },
    /// Terminal. Carries the final score for the leaderboard collaborator.
    GameOver { score: u32 },
    /// All pellets cleared; score at clear time is recorded externally.
    LevelCleared { score: u32, next_difficulty: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_priority_order_is_up_left_down_right() {
        assert_eq!(
            Direction::PRIORITY,
            [Direction::Up, Direction::Left, Direction::Down, Direction::Right]
        );
    }

    #[test]
    fn opposite_is_an_involution() {
        for direction in Direction::PRIORITY {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn ghost_names_cycle_past_four() {
        assert_eq!(GhostName::for_index(0), GhostName::Blinky);
        assert_eq!(GhostName::for_index(3), GhostName::Clyde);
        assert_eq!(GhostName::for_index(4), GhostName::Blinky);
        assert_eq!(GhostName::for_index(6), GhostName::Inky);
    }
}
