//! holdem-sim: Texas Hold'em deal simulator
//!
//! - Classify 2 to 7 cards into a category plus tie-break ranks
//! - Resolve a showdown into a single winner or a tie
//! - Record per-phase categories over many deals and learn win odds from them
//! - Bid from those odds at an interactive table
//!
//! ## Quick start: classify a Hold'em hand
//! ```
//! use holdem_sim::cards::{Card, Rank, Suit};
//! use holdem_sim::evaluator::{evaluate_holdem, Category};
//! use holdem_sim::hand::{Board, HoleCards};
//!
//! let hole = HoleCards::try_new(
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! ).unwrap();
//! let board = Board::try_new(vec![
//!     Card::new(Rank::King, Suit::Clubs),
//!     Card::new(Rank::Queen, Suit::Diamonds),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Three, Suit::Spades),
//!     Card::new(Rank::Two, Suit::Clubs),
//! ]).unwrap();
//!
//! let rank = evaluate_holdem(&hole, board.as_slice()).unwrap();
//! assert_eq!(rank.category, Category::Pair);
//! assert_eq!(rank.tie_break[0], Rank::Ace);
//! ```
//!
//! ## Binaries
//! ```sh
//! cargo run --release --bin holdem-sim -- --players 2 --deals 100000 --knowledge knowledge.txt
//! cargo run --bin holdem-tui -- --knowledge knowledge.txt
//! ```

pub mod agents;
pub mod betting;
pub mod cards;
pub mod config;
pub mod dealer;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod history;
pub mod knowledge;
pub mod showdown;
pub mod simulation;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
