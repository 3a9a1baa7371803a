//! Showdown: score every seat and pick the winner(s).
//!
//! Resolution first keeps the seats holding the best category, then walks the
//! tie-break lists one position at a time, dropping every seat that falls
//! below the best value at that position.

use crate::cards::Card;
use crate::evaluator::{evaluate_holdem, EvalError, HandRank};
use crate::hand::HoleCards;

/// Seat index (or indices, on a split) that won a showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WinnerSet {
    Single(usize),
    /// Two or more seats tied, in ascending seat order.
    Tie(Vec<usize>),
}

impl WinnerSet {
    pub fn contains(&self, seat: usize) -> bool {
        match self {
            WinnerSet::Single(s) => *s == seat,
            WinnerSet::Tie(seats) => seats.contains(&seat),
        }
    }

    pub fn indices(&self) -> Vec<usize> {
        match self {
            WinnerSet::Single(s) => vec![*s],
            WinnerSet::Tie(seats) => seats.clone(),
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, WinnerSet::Tie(_))
    }
}

/// One seat's evaluated hand at showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct PlayerResult {
    pub player: usize,
    pub rank: HandRank,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveError {
    #[error("no results to resolve")]
    EmptyResultSet,
    #[error("tie-break lists differ in length within category {category}")]
    UnequalTieBreakLengths { category: u8 },
}

/// Determine the winning seat(s) from per-seat ranks, indexed by seat.
///
/// ```
/// use holdem_sim::cards::Rank::*;
/// use holdem_sim::evaluator::{Category, HandRank};
/// use holdem_sim::showdown::{resolve, WinnerSet};
///
/// let kings = HandRank::new(Category::Pair, vec![King, Jack, Nine, Seven]);
/// let queens = HandRank::new(Category::Pair, vec![Queen, Jack, Ten, Nine]);
/// assert_eq!(resolve(&[kings, queens]).unwrap(), WinnerSet::Single(0));
/// ```
pub fn resolve(results: &[HandRank]) -> Result<WinnerSet, ResolveError> {
    let best = results.iter().map(|r| r.category).max().ok_or(ResolveError::EmptyResultSet)?;

    let mut candidates: Vec<usize> =
        (0..results.len()).filter(|&i| results[i].category == best).collect();
    if let [only] = candidates.as_slice() {
        return Ok(WinnerSet::Single(*only));
    }

    let width = results[candidates[0]].tie_break.len();
    if candidates.iter().any(|&i| results[i].tie_break.len() != width) {
        return Err(ResolveError::UnequalTieBreakLengths { category: best.ordinal() });
    }

    for round in 0..width {
        let top = candidates.iter().map(|&i| results[i].tie_break[round]).max();
        candidates.retain(|&i| Some(results[i].tie_break[round]) == top);
        log::debug!("tie-break round {round}: {} seat(s) left {:?}", candidates.len(), candidates);
        if let [only] = candidates.as_slice() {
            return Ok(WinnerSet::Single(*only));
        }
    }

    Ok(WinnerSet::Tie(candidates))
}

/// Classify each seat's hole cards together with the community cards.
pub fn score_players(
    hands: &[HoleCards],
    community: &[Card],
) -> Result<Vec<PlayerResult>, EvalError> {
    hands
        .iter()
        .enumerate()
        .map(|(player, hole)| {
            let rank = evaluate_holdem(hole, community)?;
            log::debug!("seat {player} holds {rank}");
            Ok(PlayerResult { player, rank })
        })
        .collect()
}

/// Score every seat and resolve the showdown in one step.
pub fn showdown(
    hands: &[HoleCards],
    community: &[Card],
) -> Result<(Vec<PlayerResult>, WinnerSet), ShowdownError> {
    let results = score_players(hands, community)?;
    let ranks: Vec<HandRank> = results.iter().map(|r| r.rank.clone()).collect();
    let winners = resolve(&ranks)?;
    Ok((results, winners))
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowdownError {
    #[error("hand evaluation failed: {0}")]
    Evaluation(#[from] EvalError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
