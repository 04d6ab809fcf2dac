pub mod ghost;
pub mod grid;
pub mod leaderboard;
pub mod maze;
pub mod movement;
pub mod pathfinding;
pub mod session;
pub mod state;
pub mod types;

pub use ghost::{Ghost, Persona};
pub use grid::{GridMap, MapError};
pub use leaderboard::{ScoreBoard, ScoreRecord};
pub use maze::{MazeAlgorithm, MazeError, MazeTopology};
pub use movement::Mover;
pub use session::{GameSession, MapSource, SessionConfig, SessionError};
pub use state::LevelState;
pub use types::*;
