//! Run configuration for the batch simulator and the interactive table.

use crate::dealer::Dealer;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("players must be between 2 and 10, got {0}")]
    PlayerCount(usize),
    #[error("at least one deal is required")]
    NoDeals,
    #[error("human seat {seat} is outside a {players}-seat table")]
    HumanSeat { seat: usize, players: usize },
}

fn check_players(players: usize) -> Result<(), ConfigError> {
    if Dealer::PLAYERS.contains(&players) {
        Ok(())
    } else {
        Err(ConfigError::PlayerCount(players))
    }
}

/// Batch simulation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct SimConfig {
    pub players: usize,
    pub deals: u64,
    /// Base seed; deal `i` shuffles with a seed derived from `(seed, i)`.
    pub seed: u64,
    pub parallel: bool,
    /// Where to write per-seat history records, if anywhere.
    pub records_path: Option<PathBuf>,
    /// Where to write the aggregated knowledge table, if anywhere.
    pub knowledge_path: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            players: 2,
            deals: 1000,
            seed: 0,
            parallel: true,
            records_path: Some(PathBuf::from("records.csv")),
            knowledge_path: None,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_players(self.players)?;
        if self.deals == 0 {
            return Err(ConfigError::NoDeals);
        }
        Ok(())
    }

    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    pub fn with_deals(mut self, deals: u64) -> Self {
        self.deals = deals;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Interactive table settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TableConfig {
    pub players: usize,
    pub human_seat: usize,
    /// Knowledge table used by the bots; without one they play at even odds.
    pub knowledge_path: Option<PathBuf>,
    pub seed: Option<u64>,
    /// Ante every seat posts before the pre-flop bidding.
    pub opening_bid: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { players: 2, human_seat: 1, knowledge_path: None, seed: None, opening_bid: 10 }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_players(self.players)?;
        if self.human_seat >= self.players {
            return Err(ConfigError::HumanSeat { seat: self.human_seat, players: self.players });
        }
        Ok(())
    }

    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_knowledge(mut self, path: impl Into<PathBuf>) -> Self {
        self.knowledge_path = Some(path.into());
        self
    }
}
