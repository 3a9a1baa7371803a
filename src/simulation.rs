//! Batch driver: deal many hands without bidding and record how each seat's
//! category evolved through the phases.

use crate::cards::Card;
use crate::config::{ConfigError, SimConfig};
use crate::dealer::{DealError, Dealer};
use crate::evaluator::{classify_hand, evaluate_holdem, Category, EvalError};
use crate::hand::{Hand, HoleCards};
use crate::history::{HistoryRecord, PhaseScores};
use crate::showdown::{self, PlayerResult, ShowdownError, WinnerSet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Deal(#[from] DealError),
    #[error(transparent)]
    Evaluation(#[from] EvalError),
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}

/// Everything observed in one simulated deal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct DealRecord {
    pub seed: u64,
    pub hands: Vec<HoleCards>,
    pub community: Vec<Card>,
    pub results: Vec<PlayerResult>,
    pub winners: WinnerSet,
    /// One record per seat, in seat order.
    pub history: Vec<HistoryRecord>,
}

/// Seed for deal `index` of a run started from `base`.
pub fn deal_seed(base: u64, index: u64) -> u64 {
    base ^ index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Play one deal to showdown: shuffle, cut, hole cards, flop, turn, river.
///
/// ```
/// use holdem_sim::simulation::play_deal;
///
/// let deal = play_deal(3, 42).unwrap();
/// assert_eq!(deal.history.len(), 3);
/// assert_eq!(deal.community.len(), 5);
/// assert_eq!(deal, play_deal(3, 42).unwrap());
/// ```
pub fn play_deal(players: usize, seed: u64) -> Result<DealRecord, SimError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut dealer = Dealer::new(players)?;
    dealer.shuffle_with(&mut rng);
    dealer.cut(rng.random_range(1..=51))?;

    let hands = dealer.distribute()?;
    let mut checkpoints: Vec<Vec<Category>> = vec![Vec::with_capacity(5); players];
    let mut record_phase = |community: &[Card]| -> Result<(), EvalError> {
        for (seat, hole) in hands.iter().enumerate() {
            checkpoints[seat].push(evaluate_holdem(hole, community)?.category);
        }
        Ok(())
    };

    let mut community = Vec::with_capacity(5);
    record_phase(community.as_slice())?;
    community.extend(dealer.flop()?);
    record_phase(community.as_slice())?;
    community.push(dealer.turn()?);
    record_phase(community.as_slice())?;
    community.push(dealer.river()?);
    record_phase(community.as_slice())?;

    let board_only = classify_hand(&Hand::try_new(community.clone()).map_err(EvalError::from)?);
    let (results, winners) = showdown::showdown(&hands, &community)?;

    let history = checkpoints
        .into_iter()
        .enumerate()
        .map(|(seat, c)| {
            let scores = PhaseScores([c[0], c[1], c[2], c[3], board_only.category]);
            HistoryRecord::new(scores, winners.contains(seat))
        })
        .collect();

    log::debug!("deal {seed:#018x}: winners {:?}", winners.indices());
    Ok(DealRecord { seed, hands, community, results, winners, history })
}

/// Run `config.deals` deals. Results come back in deal order whether or not
/// they were played in parallel.
pub fn simulate(config: &SimConfig) -> Result<Vec<DealRecord>, SimError> {
    config.validate()?;
    log::info!("{:<32}{:<32}", "simulating deals", config.deals);
    let run = |i: u64| play_deal(config.players, deal_seed(config.seed, i));
    let deals = if config.parallel {
        (0..config.deals).into_par_iter().map(run).collect::<Result<Vec<_>, _>>()?
    } else {
        (0..config.deals).map(run).collect::<Result<Vec<_>, _>>()?
    };
    log::info!("{:<32}{:<32}", "finished deals", deals.len());
    Ok(deals)
}

/// Flatten the per-seat history of every deal, deal by deal.
pub fn history_of(deals: &[DealRecord]) -> Vec<HistoryRecord> {
    deals.iter().flat_map(|d| d.history.iter().copied()).collect()
}

/// Outcome counts over a batch of deals.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Summary {
    pub deals: u64,
    /// Outright wins per seat.
    pub wins: Vec<u64>,
    /// Shared wins per seat.
    pub ties: Vec<u64>,
    /// Showdown categories over all seats, indexed by ordinal.
    pub categories: [u64; 10],
}

impl Summary {
    pub fn from_deals(players: usize, deals: &[DealRecord]) -> Self {
        let mut summary = Self {
            deals: deals.len() as u64,
            wins: vec![0; players],
            ties: vec![0; players],
            categories: [0; 10],
        };
        for deal in deals {
            match &deal.winners {
                WinnerSet::Single(seat) => summary.wins[*seat] += 1,
                WinnerSet::Tie(seats) => seats.iter().for_each(|s| summary.ties[*s] += 1),
            }
            for result in &deal.results {
                summary.categories[result.rank.category.ordinal() as usize] += 1;
            }
        }
        summary
    }

    pub fn tie_deals(deals: &[DealRecord]) -> usize {
        deals.iter().filter(|d| d.winners.is_tie()).count()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "deals: {}", self.deals)?;
        for (seat, (w, t)) in self.wins.iter().zip(&self.ties).enumerate() {
            writeln!(f, "seat {seat}: {w} wins, {t} split")?;
        }
        let seen = self.categories.iter().sum::<u64>().max(1) as f64;
        for c in Category::ALL {
            let n = self.categories[c.ordinal() as usize];
            writeln!(f, "{:<16}{:>8} {:>6.2}%", c.name(), n, n as f64 * 100.0 / seen)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_differ_per_deal() {
        assert_ne!(deal_seed(7, 0), deal_seed(7, 1));
        assert_ne!(deal_seed(7, 0), deal_seed(8, 0));
    }

    #[test]
    fn categories_never_drop_as_cards_arrive() {
        for seed in 0..50 {
            let deal = play_deal(4, seed).unwrap();
            for record in &deal.history {
                let o = record.scores.ordinals();
                assert!(o[0] <= o[1] && o[1] <= o[2] && o[2] <= o[3], "{o:?}");
            }
        }
    }

    #[test]
    fn river_scores_match_showdown() {
        let deal = play_deal(6, 99).unwrap();
        for (record, result) in deal.history.iter().zip(&deal.results) {
            assert_eq!(record.scores.river(), result.rank.category);
        }
        let won: Vec<usize> =
            deal.history.iter().enumerate().filter(|(_, r)| r.won).map(|(i, _)| i).collect();
        assert_eq!(won, deal.winners.indices());
    }

    #[test]
    fn parallel_and_serial_agree() {
        let cfg = SimConfig::default().with_players(3).with_deals(40).with_seed(5);
        let parallel = simulate(&cfg.clone().with_parallel(true)).unwrap();
        let serial = simulate(&cfg.with_parallel(false)).unwrap();
        assert_eq!(parallel, serial);
    }

    #[test]
    fn summary_counts_every_deal() {
        let cfg = SimConfig::default().with_players(2).with_deals(30).with_seed(1);
        let deals = simulate(&cfg).unwrap();
        let summary = Summary::from_deals(2, &deals);
        let decided: u64 = summary.wins.iter().sum();
        assert_eq!(decided as usize + Summary::tie_deals(&deals), 30);
        assert_eq!(summary.categories.iter().sum::<u64>(), 60);
    }
}
