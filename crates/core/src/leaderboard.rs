//! Local score board standing in for the external leaderboard service.
//!
//! Same operation surface as the remote collaborator (`submit`, top-N,
//! per-player rank); the app layer persists it as JSON and treats every
//! write as fire-and-forget so the frame loop never waits on it.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub player: String,
    pub score: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    records: Vec<ScoreRecord>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result, keeping only each player's best. Ranking is
    /// score-descending; name breaks ties so the order is total.
    pub fn submit(&mut self, player: &str, score: u32) {
        match self.records.iter_mut().find(|record| record.player == player) {
            Some(existing) => {
                if score > existing.score {
                    existing.score = score;
                }
            }
            None => {
                self.records.push(ScoreRecord { player: player.to_string(), score });
            }
        }
        self.records
            .sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.player.cmp(&b.player)));
    }

    pub fn top_n(&self, n: usize) -> &[ScoreRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// 1-based rank, `None` for unknown players.
    pub fn player_rank(&self, player: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.player == player)
            .map(|index| index + 1)
    }

    pub fn player_high(&self, player: &str) -> Option<u32> {
        self.records
            .iter()
            .find(|record| record.player == player)
            .map(|record| record.score)
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_keeps_each_players_best() {
        let mut board = ScoreBoard::new();
        board.submit("ada", 300);
        board.submit("ada", 120);
        board.submit("ada", 450);
        assert_eq!(board.player_high("ada"), Some(450));
        assert_eq!(board.records().len(), 1);
    }

    #[test]
    fn ranking_is_score_descending_with_name_tie_break() {
        let mut board = ScoreBoard::new();
        board.submit("carol", 200);
        board.submit("bob", 500);
        board.submit("ada", 200);

        assert_eq!(board.player_rank("bob"), Some(1));
        assert_eq!(board.player_rank("ada"), Some(2));
        assert_eq!(board.player_rank("carol"), Some(3));
        assert_eq!(board.player_rank("mallory"), None);
    }

    #[test]
    fn top_n_clamps_to_the_record_count() {
        let mut board = ScoreBoard::new();
        board.submit("ada", 10);
        board.submit("bob", 20);
        assert_eq!(board.top_n(10).len(), 2);
        assert_eq!(board.top_n(1)[0].player, "bob");
    }

    #[test]
    fn json_roundtrip_preserves_order() {
        let mut board = ScoreBoard::new();
        board.submit("ada", 300);
        board.submit("bob", 200);
        let json = serde_json::to_string(&board).expect("serialize");
        let decoded: ScoreBoard = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(board, decoded);
    }
}
