//! Ranking leaderboard
//!
//! Keeps the best runs sorted by score (descending), then elapsed time
//! (ascending, so a faster run with the same score ranks higher). Persisted as
//! a single JSON record through a [`RecordStore`].

use serde::{Deserialize, Serialize};

use crate::persistence::{PersistenceError, RecordStore};

/// Maximum number of ranking entries to keep
pub const MAX_RANKINGS: usize = 10;

/// Record name the leaderboard is stored under
pub const RANKING_RECORD: &str = "ranking.json";

/// A single leaderboard entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    /// Run length in seconds
    pub elapsed_time: f32,
    /// Blocks broken during the run
    pub score: u32,
    /// 1-based position, assigned after sorting
    #[serde(default)]
    pub rank: u32,
}

impl RankingEntry {
    /// True if `self` belongs strictly above `other`
    fn outranks(&self, other: &RankingEntry) -> bool {
        self.score > other.score
            || (self.score == other.score && self.elapsed_time < other.elapsed_time)
    }
}

/// On-disk shape of the leaderboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RankingRecord {
    #[serde(default)]
    rankings: Vec<RankingEntry>,
}

/// Bounded, sorted, persisted leaderboard
#[derive(Debug, Clone)]
pub struct RankingStore {
    entries: Vec<RankingEntry>,
    capacity: usize,
    record_name: String,
}

impl Default for RankingStore {
    fn default() -> Self {
        Self::new(MAX_RANKINGS, RANKING_RECORD)
    }
}

impl RankingStore {
    /// Create an empty leaderboard
    pub fn new(capacity: usize, record_name: &str) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
            record_name: record_name.to_string(),
        }
    }

    /// Build a leaderboard from arbitrary entries (sorted, truncated, re-ranked)
    pub fn from_entries(entries: Vec<RankingEntry>, capacity: usize, record_name: &str) -> Self {
        let mut store = Self::new(capacity, record_name);
        store.entries = entries;
        store.sort_and_truncate();
        store
    }

    /// Load the leaderboard; a missing or unreadable record is a cold start
    pub fn load<R: RecordStore + ?Sized>(records: &R, capacity: usize, record_name: &str) -> Self {
        let payload = match records.read_record(record_name) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                log::info!("No rankings found, starting fresh");
                return Self::new(capacity, record_name);
            }
            Err(e) => {
                log::warn!("Could not read rankings ({}), starting fresh", e);
                return Self::new(capacity, record_name);
            }
        };

        match serde_json::from_str::<RankingRecord>(&payload) {
            Ok(record) => {
                let store = Self::from_entries(record.rankings, capacity, record_name);
                log::info!("Loaded {} rankings", store.entries.len());
                store
            }
            Err(e) => {
                log::warn!("Ranking record is corrupt ({}), starting fresh", e);
                Self::new(capacity, record_name)
            }
        }
    }

    /// Write the leaderboard to storage
    pub fn save<R: RecordStore + ?Sized>(&self, records: &mut R) -> Result<(), PersistenceError> {
        let record = RankingRecord {
            rankings: self.entries.clone(),
        };
        let json = serde_json::to_string(&record)?;
        records.write_record(&self.record_name, &json)?;
        log::info!("Rankings saved ({} entries)", self.entries.len());
        Ok(())
    }

    /// Insert a run without persisting.
    /// Returns the rank achieved, or None if it fell off the bottom.
    pub fn insert(&mut self, elapsed_time: f32, score: u32) -> Option<u32> {
        let elapsed_time = if elapsed_time.is_finite() {
            elapsed_time.max(0.0)
        } else {
            0.0
        };
        let entry = RankingEntry {
            elapsed_time,
            score,
            rank: 0,
        };

        // Ties with an existing entry land below it
        let pos = self
            .entries
            .iter()
            .position(|e| entry.outranks(e))
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);
        self.entries.truncate(self.capacity);
        self.assign_ranks();

        (pos < self.capacity).then(|| pos as u32 + 1)
    }

    /// Record a finished run, persist, and return the updated leaderboard.
    /// A failed write is logged; the in-memory leaderboard still updates.
    pub fn add<R: RecordStore + ?Sized>(
        &mut self,
        elapsed_time: f32,
        score: u32,
        records: &mut R,
    ) -> &[RankingEntry] {
        match self.insert(elapsed_time, score) {
            Some(rank) => log::info!("Run ranked #{} (score {}, {:.3}s)", rank, score, elapsed_time),
            None => log::info!("Run did not rank (score {}, {:.3}s)", score, elapsed_time),
        }
        if let Err(e) = self.save(records) {
            log::error!("Failed to save rankings: {}", e);
        }
        &self.entries
    }

    /// Clear every entry and persist the empty leaderboard
    pub fn reset<R: RecordStore + ?Sized>(&mut self, records: &mut R) {
        self.entries.clear();
        if let Err(e) = self.save(records) {
            log::error!("Failed to save rankings: {}", e);
        }
        log::info!("Rankings reset");
    }

    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    fn sort_and_truncate(&mut self) {
        for entry in &mut self.entries {
            if !entry.elapsed_time.is_finite() || entry.elapsed_time < 0.0 {
                entry.elapsed_time = 0.0;
            }
        }
        // Stable: equal (score, time) keep their stored order
        self.entries.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(a.elapsed_time.total_cmp(&b.elapsed_time))
        });
        self.entries.truncate(self.capacity);
        self.assign_ranks();
    }

    fn assign_ranks(&mut self) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.rank = i as u32 + 1;
        }
    }
}

/// Format a run length as `mm:ss.fff`
pub fn format_game_time(seconds: f32) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let total_ms = (f64::from(seconds) * 1000.0).round() as u64;
    let minutes = (total_ms / 60_000) % 60;
    let secs = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;
    format!("{:02}:{:02}.{:03}", minutes, secs, millis)
}
