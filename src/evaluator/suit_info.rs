use crate::cards::{Card, Rank, Suit};

/// Cards needed in one suit for a flush.
const FLUSH_SIZE: u8 = 5;

/// The flush suit, if any, and the ranks held in it (ascending).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
    pub suited_ranks: Vec<Rank>,
}

impl SuitInfo {
    /// Count cards per suit; a suit with five or more members is a flush.
    /// Input order is preserved, so rank-sorted cards give ascending ranks.
    pub fn detect(cards: &[Card]) -> Self {
        let mut counts = [0u8; 4];
        for card in cards {
            counts[card.suit().symbol()] += 1;
        }
        let flush_suit = Suit::ALL.iter().copied().find(|s| counts[s.symbol()] >= FLUSH_SIZE);
        let suited_ranks = match flush_suit {
            Some(suit) => cards.iter().filter(|c| c.suit() == suit).map(|c| c.rank()).collect(),
            None => Vec::new(),
        };
        Self { flush_suit, suited_ranks }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}
