use crate::cards::{Card, DeckCard, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("cannot cut {amount} cards from a deck of {left}")]
    InvalidCut { amount: usize, left: usize },
    #[error("insufficient cards: wanted {wanted}, {left} left")]
    Insufficient { wanted: usize, left: usize },
}

/// A standard 52-card deck, optionally with two jokers.
///
/// Dealt cards are remembered as in-play and folded back in by the next shuffle.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<DeckCard>,
    in_play: Vec<DeckCard>,
}

impl Deck {
    /// ```
    /// use holdem_sim::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.cards_left(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(54);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(DeckCard::Standard(Card::new(r, s)));
            }
        }
        Self { cards, in_play: Vec::new() }
    }

    /// A 54-card deck: the standard 52 plus two jokers at the bottom.
    pub fn with_jokers() -> Self {
        let mut deck = Self::standard();
        deck.cards.push(DeckCard::Joker);
        deck.cards.push(DeckCard::Joker);
        deck
    }

    /// Total cards owned by the deck, dealt or not.
    pub fn total(&self) -> usize {
        self.cards.len() + self.in_play.len()
    }

    pub fn cards_left(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Return in-play cards and shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Return in-play cards and shuffle using the provided RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.append(&mut self.in_play);
        self.cards.shuffle(rng);
    }

    /// Move the top `amount` cards to the bottom.
    pub fn cut(&mut self, amount: usize) -> Result<(), DeckError> {
        if amount == 0 || amount >= self.cards.len() {
            return Err(DeckError::InvalidCut { amount, left: self.cards.len() });
        }
        self.cards.rotate_left(amount);
        Ok(())
    }

    /// Deal `n` cards from the top of the deck.
    pub fn deal(&mut self, n: usize) -> Result<Vec<DeckCard>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::Insufficient { wanted: n, left: self.cards.len() });
        }
        let dealt: Vec<DeckCard> = self.cards.drain(..n).collect();
        self.in_play.extend_from_slice(&dealt);
        Ok(dealt)
    }

    /// Deal a single card from the top of the deck.
    pub fn deal_one(&mut self) -> Result<DeckCard, DeckError> {
        let mut one = self.deal(1)?;
        one.pop().ok_or(DeckError::Insufficient { wanted: 1, left: 0 })
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
