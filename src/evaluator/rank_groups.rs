use crate::cards::{Card, Rank};

/// Occurrence count per rank, indexed by rank value (2..=14).
///
/// Walking the array from Ace down gives a fixed, high-to-low order for
/// every group query, so "first pair found" never depends on insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    counts: [u8; 15],
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank().value() as usize] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.value() as usize]
    }

    /// Ranks occurring exactly `k` times, highest first.
    pub fn with_count(&self, k: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ALL.iter().rev().copied().filter(move |r| self.count(*r) == k)
    }

    /// Number of ranks occurring exactly `k` times.
    pub fn groups_of(&self, k: u8) -> usize {
        self.with_count(k).count()
    }

    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    pub fn trips(&self) -> Vec<Rank> {
        self.with_count(3).collect()
    }

    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// Ranks occurring two or three times, highest first.
    pub fn matched(&self) -> Vec<Rank> {
        Rank::ALL.iter().rev().copied().filter(|r| matches!(self.count(*r), 2 | 3)).collect()
    }
}
