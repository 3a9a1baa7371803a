//! Bidding decisions driven by an estimated win percentage.
//!
//! The odds are scaled by a per-phase ratio into an upper bound. Pre-flop the
//! bot never folds and raises toward half of that bound; later phases raise
//! toward a third of it, keep calling while the bid stays under the full bound
//! and fold once it goes past.

use std::fmt;
use std::str::FromStr;

/// A bidding move. `Raise` carries the amount added on top of the current
/// highest bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Hold,
    Fold,
    Call,
    Raise(u64),
}

impl Action {
    pub fn kind(self) -> ActionKind {
        match self {
            Action::Hold => ActionKind::Hold,
            Action::Fold => ActionKind::Fold,
            Action::Call => ActionKind::Call,
            Action::Raise(_) => ActionKind::Raise,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Raise(by) => write!(f, "raise {by}"),
            other => write!(f, "{}", other.kind()),
        }
    }
}

/// An action name as typed by a player, before any amount is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Hold,
    Fold,
    Call,
    Raise,
}

impl ActionKind {
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::Hold => "hold",
            ActionKind::Fold => "fold",
            ActionKind::Call => "call",
            ActionKind::Raise => "raise",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown action '{0}': expected hold, fold, call or raise")]
pub struct ActionParseError(pub String);

impl FromStr for ActionKind {
    type Err = ActionParseError;

    /// ```
    /// use holdem_sim::betting::ActionKind;
    ///
    /// assert_eq!(" Raise\n".parse::<ActionKind>().unwrap(), ActionKind::Raise);
    /// assert!("check".parse::<ActionKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hold" => Ok(ActionKind::Hold),
            "fold" => Ok(ActionKind::Fold),
            "call" => Ok(ActionKind::Call),
            "raise" => Ok(ActionKind::Raise),
            _ => Err(ActionParseError(s.to_string())),
        }
    }
}

/// Betting phase, numbered by how many community-card deals preceded it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    PreFlop = 0,
    Flop = 1,
    Turn = 2,
    River = 3,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::PreFlop, Phase::Flop, Phase::Turn, Phase::River];

    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn next(self) -> Option<Phase> {
        match self {
            Phase::PreFlop => Some(Phase::Flop),
            Phase::Flop => Some(Phase::Turn),
            Phase::Turn => Some(Phase::River),
            Phase::River => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::PreFlop => "Pre-flop",
            Phase::Flop => "Flop",
            Phase::Turn => "Turn",
            Phase::River => "River",
        };
        f.write_str(name)
    }
}

/// How much of the win percentage the bot is willing to put behind a bid.
pub fn ratio(phase: Phase, odds: f64) -> f64 {
    match phase {
        Phase::PreFlop => 2.0 / 5.0,
        Phase::Flop if odds >= 80.0 => 5.0 / 5.0,
        Phase::Flop => 3.0 / 5.0,
        Phase::Turn if odds >= 80.0 => 6.0 / 5.0,
        Phase::Turn => 2.0 / 5.0,
        Phase::River if odds >= 85.0 => 7.0 / 5.0,
        Phase::River => 1.0 / 5.0,
    }
}

/// The bid level past which the bot stops following, measured from the
/// previous round's highest bid.
pub fn upper_bound(phase: Phase, odds: f64) -> u64 {
    let scaled = (ratio(phase, odds) * odds).trunc().max(0.0) as u64;
    scaled * 2
}

/// Choose an action for the bot.
///
/// `current_bid` is the table's highest bid, `previous_round_high` the highest
/// bid when this phase started and `my_highest_bid` what the bot has put in.
///
/// ```
/// use holdem_sim::betting::{decide, Action, Phase};
///
/// // ub = trunc(0.4 * 50) * 2 = 40; target = 0 + 40 / 2 = 20
/// assert_eq!(decide(Phase::PreFlop, 5, 0, 0, 50.0), Action::Raise(15));
/// assert_eq!(decide(Phase::PreFlop, 25, 0, 0, 50.0), Action::Call);
/// ```
pub fn decide(
    phase: Phase,
    current_bid: u64,
    previous_round_high: u64,
    my_highest_bid: u64,
    odds: f64,
) -> Action {
    let ub = upper_bound(phase, odds);
    let divisor = if phase == Phase::PreFlop { 2 } else { 3 };
    let target = previous_round_high + ub / divisor;

    if target > current_bid && current_bid >= my_highest_bid {
        return Action::Raise(target - current_bid);
    }
    if phase == Phase::PreFlop {
        return if my_highest_bid < current_bid { Action::Call } else { Action::Hold };
    }
    if current_bid < previous_round_high + ub {
        if my_highest_bid == current_bid {
            return Action::Hold;
        }
        if my_highest_bid < current_bid {
            return Action::Call;
        }
    }
    Action::Fold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_table() {
        assert_eq!(ratio(Phase::PreFlop, 99.0), 0.4);
        assert_eq!(ratio(Phase::Flop, 80.0), 1.0);
        assert_eq!(ratio(Phase::Flop, 79.9), 0.6);
        assert_eq!(ratio(Phase::Turn, 80.0), 1.2);
        assert_eq!(ratio(Phase::Turn, 10.0), 0.4);
        assert_eq!(ratio(Phase::River, 85.0), 1.4);
        assert_eq!(ratio(Phase::River, 84.0), 0.2);
    }

    #[test]
    fn upper_bound_truncates_before_doubling() {
        // 0.6 * 55.5 = 33.3 -> 33 -> 66
        assert_eq!(upper_bound(Phase::Flop, 55.5), 66);
        // 1.4 * 100 = 140 -> 280
        assert_eq!(upper_bound(Phase::River, 100.0), 280);
        assert_eq!(upper_bound(Phase::River, 0.0), 0);
    }

    #[test]
    fn preflop_never_folds() {
        // ub = 40, target 20
        assert_eq!(decide(Phase::PreFlop, 20, 0, 20, 50.0), Action::Hold);
        assert_eq!(decide(Phase::PreFlop, 500, 0, 20, 50.0), Action::Call);
        assert_eq!(decide(Phase::PreFlop, 500, 0, 600, 50.0), Action::Hold);
    }

    #[test]
    fn postflop_raises_holds_calls_then_folds() {
        // Flop, odds 50: ub = trunc(0.6 * 50) * 2 = 60, third = 20.
        assert_eq!(decide(Phase::Flop, 100, 100, 100, 50.0), Action::Raise(20));
        assert_eq!(decide(Phase::Flop, 130, 100, 130, 50.0), Action::Hold);
        assert_eq!(decide(Phase::Flop, 130, 100, 110, 50.0), Action::Call);
        assert_eq!(decide(Phase::Flop, 160, 100, 110, 50.0), Action::Fold);
        assert_eq!(decide(Phase::Flop, 160, 100, 160, 50.0), Action::Fold);
    }

    #[test]
    fn raises_when_behind_but_under_target() {
        // Turn, odds 50: ub = trunc(0.4 * 50) * 2 = 40, third = 13, target 113.
        assert_eq!(decide(Phase::Turn, 105, 100, 90, 50.0), Action::Raise(8));
    }

    #[test]
    fn action_names() {
        assert_eq!(Action::Raise(12).to_string(), "raise 12");
        assert_eq!(Action::Call.to_string(), "call");
        assert_eq!("FOLD".parse::<ActionKind>(), Ok(ActionKind::Fold));
        assert_eq!(Phase::Flop.next(), Some(Phase::Turn));
        assert_eq!(Phase::River.next(), None);
    }
}
