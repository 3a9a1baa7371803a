//! Dealer: owns the deck for one table and deals a Hold'em hand phase by phase.

use crate::cards::{Card, DeckCard};
use crate::deck::{Deck, DeckError};
use crate::hand::{HandError, HoleCards};
use rand::Rng;
use std::ops::RangeInclusive;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealError {
    #[error("a table seats 2 to 10 players, got {0}")]
    PlayerCount(usize),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("a joker cannot be dealt into a hold'em hand")]
    Joker,
    #[error(transparent)]
    Hand(#[from] HandError),
}

#[derive(Debug, Clone)]
pub struct Dealer {
    players: usize,
    deck: Deck,
}

impl Dealer {
    pub const PLAYERS: RangeInclusive<usize> = 2..=10;

    pub fn new(players: usize) -> Result<Self, DealError> {
        if !Self::PLAYERS.contains(&players) {
            return Err(DealError::PlayerCount(players));
        }
        Ok(Self { players, deck: Deck::standard() })
    }

    pub fn players(&self) -> usize {
        self.players
    }

    pub fn cards_left(&self) -> usize {
        self.deck.cards_left()
    }

    pub fn shuffle_seeded(&mut self, seed: u64) {
        self.deck.shuffle_seeded(seed);
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deck.shuffle_with(rng);
    }

    pub fn cut(&mut self, amount: usize) -> Result<(), DealError> {
        Ok(self.deck.cut(amount)?)
    }

    /// Deal hole cards: two rounds, one card to each seat per round.
    pub fn distribute(&mut self) -> Result<Vec<HoleCards>, DealError> {
        let first = self.deal_cards(self.players)?;
        let second = self.deal_cards(self.players)?;
        first
            .into_iter()
            .zip(second)
            .map(|(a, b)| Ok(HoleCards::try_new(a, b)?))
            .collect()
    }

    /// Burn three, then deal the three flop cards.
    pub fn flop(&mut self) -> Result<Vec<Card>, DealError> {
        self.deck.deal(3)?;
        self.deal_cards(3)
    }

    /// Burn one, then deal the turn card.
    pub fn turn(&mut self) -> Result<Card, DealError> {
        self.burn_and_deal_one()
    }

    /// Burn one, then deal the river card.
    pub fn river(&mut self) -> Result<Card, DealError> {
        self.burn_and_deal_one()
    }

    fn burn_and_deal_one(&mut self) -> Result<Card, DealError> {
        self.deck.deal(1)?;
        let card = self.deck.deal_one()?;
        Card::try_from(card).map_err(|_| DealError::Joker)
    }

    fn deal_cards(&mut self, n: usize) -> Result<Vec<Card>, DealError> {
        self.deck
            .deal(n)?
            .into_iter()
            .map(|c: DeckCard| Card::try_from(c).map_err(|_| DealError::Joker))
            .collect()
    }
}
