//! # Leaderboard Module
//!
//! Persisted high-score table.
//!
//! Entries are kept sorted by score (highest first), then by play time and
//! click count (lowest first), and saved as pretty JSON after every change.

use crate::config::{ANONYMOUS_PLAYER_NAME, LEADERBOARD_FILE_NAME, MAX_LEADERBOARD_ENTRIES};
use crate::MatchResult;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A finished session recorded on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "playerName")]
    pub player_name: String,
    pub score: u32,
    pub total_clicks: u32,
    /// Play time in whole seconds
    pub total_time: u32,
}

impl LeaderboardEntry {
    /// Creates a new entry.
    pub fn new(
        player_name: impl Into<String>,
        score: u32,
        total_clicks: u32,
        total_time: u32,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            score,
            total_clicks,
            total_time,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LeaderboardData {
    #[serde(default)]
    entries: Vec<LeaderboardEntry>,
}

/// High-score table bound to a file.
///
/// # Examples
///
/// ```
/// use memory_match::Leaderboard;
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut board = Leaderboard::load(dir.path().join("scores.json"));
/// board.add_entry("ADA", 3000, 12, 40).unwrap();
/// board.add_entry("", 3500, 20, 55).unwrap();
///
/// let top = board.top_entries();
/// assert_eq!(top[0].player_name, "Anonymous");
/// assert_eq!(top[1].player_name, "ADA");
/// ```
#[derive(Debug, Clone)]
pub struct Leaderboard {
    path: PathBuf,
    data: LeaderboardData,
}

impl Leaderboard {
    /// Loads the leaderboard stored at `path`.
    ///
    /// A missing file gives an empty board. An unreadable or corrupt file is
    /// logged and also gives an empty board; it is overwritten on the next save.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = if path.exists() {
            match Self::read(&path) {
                Ok(data) => data,
                Err(e) => {
                    error!(
                        "Error loading leaderboard from {}: {}. Initializing new leaderboard.",
                        path.display(),
                        e
                    );
                    LeaderboardData::default()
                }
            }
        } else {
            LeaderboardData::default()
        };

        let mut board = Self { path, data };
        board.sort_entries();
        info!("Leaderboard loaded. Entries: {}", board.data.entries.len());
        board
    }

    /// Loads `leaderboard.json` from `dir`.
    pub fn load_in(dir: impl AsRef<Path>) -> Self {
        Self::load(dir.as_ref().join(LEADERBOARD_FILE_NAME))
    }

    fn read(path: &Path) -> MatchResult<LeaderboardData> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// File the leaderboard is persisted to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the leaderboard to disk.
    pub fn save(&mut self) -> MatchResult<()> {
        self.sort_entries();
        let result: MatchResult<()> = serde_json::to_string_pretty(&self.data)
            .map_err(Into::into)
            .and_then(|json| fs::write(&self.path, json).map_err(Into::into));
        match &result {
            Ok(()) => info!("Leaderboard saved."),
            Err(e) => error!("Error saving leaderboard: {}", e),
        }
        result
    }

    /// Records a finished session and saves. Blank names become "Anonymous".
    pub fn add_entry(
        &mut self,
        player_name: &str,
        score: u32,
        total_clicks: u32,
        total_time: u32,
    ) -> MatchResult<()> {
        let name = if player_name.trim().is_empty() {
            ANONYMOUS_PLAYER_NAME
        } else {
            player_name
        };
        self.data
            .entries
            .push(LeaderboardEntry::new(name, score, total_clicks, total_time));
        self.save()
    }

    /// The best entries, at most [`MAX_LEADERBOARD_ENTRIES`].
    pub fn top_entries(&self) -> &[LeaderboardEntry] {
        let len = self.data.entries.len().min(MAX_LEADERBOARD_ENTRIES);
        &self.data.entries[..len]
    }

    /// Every stored entry in rank order.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.data.entries
    }

    /// Removes every entry and saves.
    pub fn clear(&mut self) -> MatchResult<()> {
        self.data = LeaderboardData::default();
        self.save()?;
        info!("Leaderboard cleared.");
        Ok(())
    }

    fn sort_entries(&mut self) {
        self.data.entries.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(a.total_time.cmp(&b.total_time))
                .then(a.total_clicks.cmp(&b.total_clicks))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let board = Leaderboard::load_in(dir.path());
        assert!(board.entries().is_empty());
        assert!(board.path().ends_with(LEADERBOARD_FILE_NAME));
    }

    #[test]
    fn test_ranking_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = Leaderboard::load_in(dir.path());
        board.add_entry("slow", 2000, 10, 90).unwrap();
        board.add_entry("fast", 2000, 10, 30).unwrap();
        board.add_entry("best", 2500, 40, 120).unwrap();
        board.add_entry("clicky", 2000, 25, 30).unwrap();

        let names: Vec<&str> = board.entries().iter().map(|e| e.player_name.as_str()).collect();
        assert_eq!(names, vec!["best", "fast", "clicky", "slow"]);
    }

    #[test]
    fn test_top_entries_capped() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = Leaderboard::load_in(dir.path());
        for i in 0..12 {
            board.add_entry(&format!("p{}", i), i * 100, 0, 0).unwrap();
        }
        assert_eq!(board.entries().len(), 12);
        assert_eq!(board.top_entries().len(), MAX_LEADERBOARD_ENTRIES);
        assert_eq!(board.top_entries()[0].score, 1100);
    }

    #[test]
    fn test_persists_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut board = Leaderboard::load_in(dir.path());
            board.add_entry("ADA", 4600, 10, 60).unwrap();
        }
        let board = Leaderboard::load_in(dir.path());
        assert_eq!(
            board.entries(),
            &[LeaderboardEntry::new("ADA", 4600, 10, 60)]
        );
    }

    #[test]
    fn test_corrupt_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LEADERBOARD_FILE_NAME);
        fs::write(&path, "{ this is not json").unwrap();

        let mut board = Leaderboard::load(&path);
        assert!(board.entries().is_empty());

        board.add_entry("ADA", 1, 1, 1).unwrap();
        let reloaded = Leaderboard::load(&path);
        assert_eq!(reloaded.entries().len(), 1);
    }

    #[test]
    fn test_null_entries_field_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LEADERBOARD_FILE_NAME);
        fs::write(&path, "{}").unwrap();
        assert!(Leaderboard::load(&path).entries().is_empty());
    }

    #[test]
    fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = Leaderboard::load_in(dir.path());
        board.add_entry("ADA", 10, 1, 1).unwrap();
        board.clear().unwrap();
        assert!(board.entries().is_empty());
        assert!(Leaderboard::load_in(dir.path()).entries().is_empty());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory does not exist
        let mut board = Leaderboard::load(dir.path().join("missing").join("board.json"));
        assert!(board.add_entry("ADA", 10, 1, 1).is_err());
    }

    #[test]
    fn test_file_format() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = Leaderboard::load_in(dir.path());
        board.add_entry("ADA", 10, 2, 3).unwrap();
        let json = fs::read_to_string(board.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["entries"][0]["playerName"], "ADA");
        assert_eq!(value["entries"][0]["total_clicks"], 2);
    }
}
