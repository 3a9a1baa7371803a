use crate::betting::{Action, ActionKind, Phase};
use crate::dealer::{DealError, Dealer};
use crate::evaluator::{evaluate_holdem, Category, EvalError};
use crate::hand::{Board, HoleCards};
use crate::showdown::{score_players, resolve, ShowdownError, WinnerSet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SeatStatus {
    /// Still in the deal and has not acted this phase.
    Waiting,
    Hold,
    Call,
    Raise,
    Folded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Street {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    /// Betting phase for this street, `None` once the deal is over.
    pub fn phase(self) -> Option<Phase> {
        match self {
            Street::PreFlop => Some(Phase::PreFlop),
            Street::Flop => Some(Phase::Flop),
            Street::Turn => Some(Phase::Turn),
            Street::River => Some(Phase::River),
            Street::Showdown => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandHistoryVerb {
    Ante,
    Hold,
    Fold,
    Call,
    Raise,
    Win,
    Split,
}

impl HandHistoryVerb {
    pub fn label(self) -> &'static str {
        match self {
            HandHistoryVerb::Ante => "Ante",
            HandHistoryVerb::Hold => "Hold",
            HandHistoryVerb::Fold => "Fold",
            HandHistoryVerb::Call => "Call",
            HandHistoryVerb::Raise => "Raise by",
            HandHistoryVerb::Win => "Win",
            HandHistoryVerb::Split => "Split",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Deal(#[from] DealError),
    #[error("hand evaluation failed: {0}")]
    Evaluation(#[from] EvalError),
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
    #[error("a deal is still in progress")]
    DealInProgress,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("the deal is over")]
    HandOver,
    #[error("seat {0} has folded")]
    Folded(usize),
    #[error("cannot hold while {to_call} behind: fold, call or raise")]
    HoldWhileBehind { to_call: u64 },
    #[error("nothing to call: fold, hold or raise")]
    NothingToCall,
    #[error("a raise must add at least 1")]
    ZeroRaise,
    #[error(transparent)]
    Game(#[from] GameError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct HandHistoryEntry {
    pub seat: usize,
    pub verb: HandHistoryVerb,
    pub amount: Option<u64>,
    pub street: Street,
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Seat {
    pub(crate) name: String,
    pub(crate) bid: u64,
    pub(crate) net: i64,
    pub(crate) status: SeatStatus,
    pub(crate) hole: Option<HoleCards>,
    /// Category ordinal after each dealing phase so far (hole, flop, turn, river).
    pub(crate) scores: Vec<u8>,
    pub(crate) last_action: Option<String>,
}

impl Seat {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total bid this deal.
    pub fn bid(&self) -> u64 {
        self.bid
    }

    /// Winnings minus bids over every finished deal.
    pub fn net(&self) -> i64 {
        self.net
    }

    pub fn status(&self) -> SeatStatus {
        self.status
    }

    pub fn hole(&self) -> Option<HoleCards> {
        self.hole
    }

    pub fn scores(&self) -> &[u8] {
        &self.scores
    }

    pub fn last_action(&self) -> Option<&str> {
        self.last_action.as_deref()
    }

    fn in_hand(&self) -> bool {
        self.status != SeatStatus::Folded
    }
}

/// One table playing successive deals with hold/fold/call/raise bidding.
///
/// Every seat antes `opening_bid`, then each phase runs one betting round
/// starting left of the button. A round ends once every seat still in the
/// deal has acted and matched the highest bid. The pot is the sum of all bids.
///
/// ```
/// use holdem_sim::betting::Action;
/// use holdem_sim::game::{Game, Street};
///
/// let mut game = Game::with_seed(2, 10, 7).unwrap();
/// game.new_hand().unwrap();
/// assert_eq!(game.pot(), 20);
/// game.act(Action::Hold).unwrap();
/// game.act(Action::Hold).unwrap();
/// assert_eq!(game.street(), Street::Flop);
/// assert_eq!(game.board().len(), 3);
/// ```
#[derive(Debug)]
#[non_exhaustive]
pub struct Game {
    pub(crate) opening_bid: u64,
    pub(crate) dealer: Dealer,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) board: Board,
    pub(crate) seats: Vec<Seat>,
    pub(crate) pot: u64,
    pub(crate) button: usize,
    pub(crate) current: usize,
    pub(crate) street: Street,
    pub(crate) highest_bid: u64,
    pub(crate) previous_round_high: u64,
    pub(crate) acted: Vec<bool>,
    pub(crate) winners: Option<WinnerSet>,
    /// Showdown categories per seat for the last deal (None if folded).
    pub(crate) showdown_categories: Vec<Option<Category>>,
    hand_history: Vec<HandHistoryEntry>,
}

impl Game {
    pub fn new(players: usize, opening_bid: u64) -> Result<Self, GameError> {
        Self::with_seed(players, opening_bid, rand::rng().random())
    }

    pub fn with_seed(players: usize, opening_bid: u64, seed: u64) -> Result<Self, GameError> {
        let dealer = Dealer::new(players)?;
        let seats = (1..=players)
            .map(|i| Seat {
                name: format!("P{i}"),
                bid: 0,
                net: 0,
                status: SeatStatus::Waiting,
                hole: None,
                scores: Vec::with_capacity(4),
                last_action: None,
            })
            .collect();
        Ok(Self {
            opening_bid,
            dealer,
            rng: ChaCha8Rng::seed_from_u64(seed),
            board: Board::new(),
            seats,
            pot: 0,
            button: players - 1,
            current: 0,
            street: Street::Showdown,
            highest_bid: 0,
            previous_round_high: 0,
            acted: vec![false; players],
            winners: None,
            showdown_categories: vec![None; players],
            hand_history: Vec::new(),
        })
    }

    pub fn opening_bid(&self) -> u64 {
        self.opening_bid
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn pot(&self) -> u64 {
        self.pot
    }

    pub fn button(&self) -> usize {
        self.button
    }

    /// Seat to act.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn highest_bid(&self) -> u64 {
        self.highest_bid
    }

    /// Highest bid when the current phase started.
    pub fn previous_round_high(&self) -> u64 {
        self.previous_round_high
    }

    /// Winners of the last finished deal.
    pub fn winners(&self) -> Option<&WinnerSet> {
        self.winners.as_ref()
    }

    pub fn showdown_categories(&self) -> &[Option<Category>] {
        &self.showdown_categories
    }

    pub fn to_call(&self, seat: usize) -> u64 {
        self.seats.get(seat).map_or(0, |s| self.highest_bid.saturating_sub(s.bid))
    }

    /// Actions open to `seat`: fold/call/raise when behind the highest bid,
    /// fold/hold/raise when matched.
    pub fn legal_actions(&self, seat: usize) -> Vec<ActionKind> {
        let in_hand = self.seats.get(seat).is_some_and(Seat::in_hand);
        if self.street == Street::Showdown || !in_hand {
            return Vec::new();
        }
        if self.to_call(seat) > 0 {
            vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise]
        } else {
            vec![ActionKind::Fold, ActionKind::Hold, ActionKind::Raise]
        }
    }

    pub fn history_recent(&self, n: usize) -> Vec<HandHistoryEntry> {
        let start = self.hand_history.len().saturating_sub(n);
        self.hand_history[start..].to_vec()
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<HandHistoryEntry> {
        let len = self.hand_history.len();
        let offset = offset.min(len.saturating_sub(n));
        let end = len.saturating_sub(offset);
        let start = end.saturating_sub(n);
        self.hand_history[start..end].to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.hand_history.len()
    }

    /// Shuffle, cut, deal hole cards and take the antes.
    ///
    /// Fails with [`GameError::DealInProgress`] until the current deal has
    /// reached showdown.
    pub fn new_hand(&mut self) -> Result<(), GameError> {
        if self.street != Street::Showdown {
            return Err(GameError::DealInProgress);
        }
        self.button = (self.button + 1) % self.seats.len();
        self.dealer.shuffle_with(&mut self.rng);
        let cut = self.rng.random_range(1..=51);
        self.dealer.cut(cut)?;
        let hands = self.dealer.distribute()?;

        self.board.clear();
        self.pot = 0;
        self.hand_history.clear();
        self.winners = None;
        self.showdown_categories = vec![None; self.seats.len()];
        for (i, hole) in hands.into_iter().enumerate() {
            let seat = &mut self.seats[i];
            seat.hole = Some(hole);
            seat.status = SeatStatus::Waiting;
            seat.bid = self.opening_bid;
            seat.scores.clear();
            seat.last_action = None;
            self.pot += self.opening_bid;
            if self.opening_bid > 0 {
                self.record_history(i, HandHistoryVerb::Ante, Some(self.opening_bid));
            }
        }
        self.highest_bid = self.opening_bid;
        self.street = Street::PreFlop;
        self.record_scores()?;
        self.start_round();
        log::debug!("new deal, button P{}", self.button + 1);
        Ok(())
    }

    /// Apply `action` for the seat to act.
    pub fn act(&mut self, action: Action) -> Result<(), ActionError> {
        if self.street == Street::Showdown {
            return Err(ActionError::HandOver);
        }
        let idx = self.current;
        if !self.seats[idx].in_hand() {
            return Err(ActionError::Folded(idx));
        }
        let to_call = self.to_call(idx);
        match action {
            Action::Fold => {
                self.seats[idx].status = SeatStatus::Folded;
                self.seats[idx].last_action = Some("Fold".into());
                self.record_history(idx, HandHistoryVerb::Fold, None);
            }
            Action::Hold => {
                if to_call > 0 {
                    return Err(ActionError::HoldWhileBehind { to_call });
                }
                self.seats[idx].status = SeatStatus::Hold;
                self.seats[idx].last_action = Some("Hold".into());
                self.record_history(idx, HandHistoryVerb::Hold, None);
            }
            Action::Call => {
                if to_call == 0 {
                    return Err(ActionError::NothingToCall);
                }
                self.pay(idx, to_call);
                self.seats[idx].status = SeatStatus::Call;
                self.seats[idx].last_action = Some(format!("Call {to_call}"));
                self.record_history(idx, HandHistoryVerb::Call, Some(to_call));
            }
            Action::Raise(by) => {
                if by == 0 {
                    return Err(ActionError::ZeroRaise);
                }
                self.highest_bid += by;
                self.pay(idx, self.highest_bid - self.seats[idx].bid);
                self.seats[idx].status = SeatStatus::Raise;
                self.seats[idx].last_action = Some(format!("Raise {by}"));
                self.record_history(idx, HandHistoryVerb::Raise, Some(by));
                // Everyone else must respond to the new bid.
                self.acted.iter_mut().for_each(|a| *a = false);
            }
        }
        self.acted[idx] = true;
        log::debug!("P{} {action} (highest {})", idx + 1, self.highest_bid);
        self.advance()?;
        Ok(())
    }

    fn pay(&mut self, idx: usize, amount: u64) {
        self.seats[idx].bid += amount;
        self.pot += amount;
    }

    fn advance(&mut self) -> Result<(), GameError> {
        if self.count_in_hand() <= 1 {
            return self.finish_uncontested();
        }
        if self.round_complete() {
            return self.deal_next_street();
        }
        self.current = self.next_in_hand_from(self.current);
        Ok(())
    }

    fn round_complete(&self) -> bool {
        self.seats
            .iter()
            .zip(&self.acted)
            .filter(|(s, _)| s.in_hand())
            .all(|(s, acted)| *acted && s.bid == self.highest_bid)
    }

    fn start_round(&mut self) {
        self.previous_round_high = self.highest_bid;
        self.acted = vec![false; self.seats.len()];
        for seat in self.seats.iter_mut().filter(|s| s.in_hand()) {
            seat.status = SeatStatus::Waiting;
        }
        self.current = self.next_in_hand_from(self.button);
    }

    fn deal_next_street(&mut self) -> Result<(), GameError> {
        match self.street {
            Street::PreFlop => {
                self.board.extend(self.dealer.flop()?);
                self.street = Street::Flop;
            }
            Street::Flop => {
                self.board.extend([self.dealer.turn()?]);
                self.street = Street::Turn;
            }
            Street::Turn => {
                self.board.extend([self.dealer.river()?]);
                self.street = Street::River;
            }
            Street::River => return self.finish_showdown(),
            Street::Showdown => return Ok(()),
        }
        self.record_scores()?;
        self.start_round();
        Ok(())
    }

    fn record_scores(&mut self) -> Result<(), GameError> {
        for seat in &mut self.seats {
            if let Some(hole) = seat.hole.as_ref() {
                let rank = evaluate_holdem(hole, self.board.as_slice())?;
                seat.scores.push(rank.category.ordinal());
            }
        }
        Ok(())
    }

    fn count_in_hand(&self) -> usize {
        self.seats.iter().filter(|s| s.in_hand()).count()
    }

    fn next_in_hand_from(&self, start: usize) -> usize {
        let n = self.seats.len();
        (1..=n).map(|k| (start + k) % n).find(|&i| self.seats[i].in_hand()).unwrap_or(start)
    }

    fn finish_uncontested(&mut self) -> Result<(), GameError> {
        let Some(winner) = self.seats.iter().position(Seat::in_hand) else {
            return Ok(());
        };
        self.street = Street::Showdown;
        self.award(&WinnerSet::Single(winner));
        self.winners = Some(WinnerSet::Single(winner));
        Ok(())
    }

    /// Compare every seat still in the deal and pay out the pot.
    pub fn finish_showdown(&mut self) -> Result<(), GameError> {
        self.street = Street::Showdown;
        let contenders: Vec<usize> = (0..self.seats.len())
            .filter(|&i| self.seats[i].in_hand() && self.seats[i].hole.is_some())
            .collect();
        let hands: Vec<HoleCards> = contenders.iter().filter_map(|&i| self.seats[i].hole).collect();

        let results = score_players(&hands, self.board.as_slice()).map_err(ShowdownError::from)?;
        let ranks: Vec<_> = results.iter().map(|r| r.rank.clone()).collect();
        for (result, &seat) in results.iter().zip(&contenders) {
            self.showdown_categories[seat] = Some(result.rank.category);
        }
        let winners = match resolve(&ranks).map_err(ShowdownError::from)? {
            WinnerSet::Single(i) => WinnerSet::Single(contenders[i]),
            WinnerSet::Tie(list) => {
                WinnerSet::Tie(list.into_iter().map(|i| contenders[i]).collect())
            }
        };
        self.award(&winners);
        self.winners = Some(winners);
        Ok(())
    }

    /// Split the pot evenly; odd chips go to the earliest winning seats.
    fn award(&mut self, winners: &WinnerSet) {
        for seat in &mut self.seats {
            seat.net -= seat.bid as i64;
        }
        let seats = winners.indices();
        let per = self.pot / seats.len() as u64;
        let mut rem = self.pot % seats.len() as u64;
        let verb = if winners.is_tie() { HandHistoryVerb::Split } else { HandHistoryVerb::Win };
        for &i in &seats {
            let mut amount = per;
            if rem > 0 {
                amount += 1;
                rem -= 1;
            }
            self.seats[i].net += amount as i64;
            self.seats[i].last_action = Some(format!("{} {amount}", verb.label()));
            self.record_history(i, verb, Some(amount));
        }
        log::debug!("pot {} to {:?}", self.pot, seats);
        self.pot = 0;
    }

    fn record_history(&mut self, seat: usize, verb: HandHistoryVerb, amount: Option<u64>) {
        let entry = HandHistoryEntry { seat, verb, amount, street: self.street };
        self.hand_history.push(entry);
    }
}
