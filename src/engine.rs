// Table API boundary. Agents and the TUI drive a deal through this trait
// instead of reaching into `Game` internals.

use crate::betting::{Action, ActionKind, Phase};
use crate::game::{ActionError, GameError, Game, Street};
use crate::hand::Board;

pub trait GameEngine {
    // Deal lifecycle
    fn new_hand(&mut self) -> Result<(), GameError>;

    // Bidding
    fn act(&mut self, action: Action) -> Result<(), ActionError>;

    // Queries
    fn legal_actions(&self, seat: usize) -> Vec<ActionKind>;
    fn to_call(&self, seat: usize) -> u64;
    fn highest_bid(&self) -> u64;
    fn previous_round_high(&self) -> u64;
    fn bid(&self, seat: usize) -> u64;
    fn pot(&self) -> u64;
    fn board(&self) -> &Board;
    /// Category ordinals `seat` has held after each dealing phase so far.
    fn phase_scores(&self, seat: usize) -> Vec<u8>;
    fn current(&self) -> usize;
    fn button(&self) -> usize;
    fn street(&self) -> Street;

    fn phase(&self) -> Option<Phase> {
        self.street().phase()
    }
}

impl GameEngine for Game {
    fn new_hand(&mut self) -> Result<(), GameError> {
        self.new_hand()
    }

    fn act(&mut self, action: Action) -> Result<(), ActionError> {
        self.act(action)
    }

    fn legal_actions(&self, seat: usize) -> Vec<ActionKind> {
        self.legal_actions(seat)
    }
    fn to_call(&self, seat: usize) -> u64 {
        self.to_call(seat)
    }
    fn highest_bid(&self) -> u64 {
        self.highest_bid
    }
    fn previous_round_high(&self) -> u64 {
        self.previous_round_high
    }
    fn bid(&self, seat: usize) -> u64 {
        self.seats.get(seat).map_or(0, |s| s.bid)
    }
    fn pot(&self) -> u64 {
        self.pot
    }
    fn board(&self) -> &Board {
        &self.board
    }
    fn phase_scores(&self, seat: usize) -> Vec<u8> {
        self.seats.get(seat).map(|s| s.scores.clone()).unwrap_or_default()
    }
    fn current(&self) -> usize {
        self.current
    }
    fn button(&self) -> usize {
        self.button
    }
    fn street(&self) -> Street {
        self.street
    }
}
