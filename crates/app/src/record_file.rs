//! JSON persistence for the local leaderboard.
//!
//! Score submissions are fire-and-forget: a failed write leaves the
//! in-memory board (and whatever the player last saw) untouched, and the
//! simulation is never blocked on it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use game_core::ScoreBoard;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::APP_NAME;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordFile {
    pub format_version: u32,
    pub board: ScoreBoard,
}

impl RecordFile {
    pub fn new(board: ScoreBoard) -> Self {
        Self { format_version: 1, board }
    }

    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("records.json");
            path
        })
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let file: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(file)
    }

    /// Best-effort load; failures surface on stderr and start an empty board.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(file) => file,
            Err(error) if error.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(error) => {
                eprintln!("leaderboard file unreadable ({error}); starting empty");
                Self::default()
            }
        }
    }

    /// Record a score and persist, swallowing (but reporting) I/O failures.
    pub fn submit_and_save(&mut self, path: Option<&Path>, player: &str, score: u32) {
        self.board.submit(player, score);
        if let Some(path) = path
            && let Err(error) = self.write_atomic(path)
        {
            eprintln!("leaderboard write failed ({error}); keeping in-memory scores");
        }
    }
}
