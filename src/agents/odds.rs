use crate::betting::{decide, Action};
use crate::engine::GameEngine;
use crate::game::{ActionError, Street};
use crate::knowledge::Knowledge;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::{AgentKind, PlayerAgent};

/// Win percentage assumed when the knowledge table has nothing for a seat.
pub const FALLBACK_ODDS: f64 = 50.0;

/// Bids from the win percentage its knowledge table gives for the
/// categories it has held so far this deal.
#[derive(Debug, Clone)]
pub struct OddsBot {
    knowledge: Option<Arc<Knowledge>>,
    delay: Duration,
    next_action_at: Option<Instant>,
    last_odds: Option<f64>,
}

impl OddsBot {
    pub fn new(knowledge: Option<Arc<Knowledge>>) -> Self {
        Self { knowledge, delay: Duration::ZERO, next_action_at: None, last_odds: None }
    }

    /// Pause this long on each turn before acting.
    pub fn with_delay_ms(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }

    /// Odds used for the most recent decision.
    pub fn last_odds(&self) -> Option<f64> {
        self.last_odds
    }

    /// Win percentage for a sequence of phase scores.
    pub fn odds_for(&self, scores: &[u8]) -> f64 {
        match self.knowledge.as_deref().and_then(|k| k.winning_odds(scores)) {
            Some(odds) => odds,
            None => {
                log::warn!("no knowledge for scores {scores:?}, assuming {FALLBACK_ODDS}%");
                FALLBACK_ODDS
            }
        }
    }

    /// The action this bot would take for `seat` right now.
    pub fn choose(&mut self, engine: &dyn GameEngine, seat: usize) -> Option<Action> {
        let phase = engine.phase()?;
        let odds = self.odds_for(&engine.phase_scores(seat));
        self.last_odds = Some(odds);
        let (highest, opened_at) = (engine.highest_bid(), engine.previous_round_high());
        let action = decide(phase, highest, opened_at, engine.bid(seat), odds);
        log::debug!("P{} {phase} odds {odds:.1}% -> {action}", seat + 1);
        Some(action)
    }
}

impl PlayerAgent for OddsBot {
    fn kind(&self) -> AgentKind {
        AgentKind::Bot
    }

    fn on_turn(&mut self, engine: &mut dyn GameEngine, seat: usize) -> Result<bool, ActionError> {
        if engine.street() == Street::Showdown || engine.current() != seat {
            return Ok(false);
        }
        if self.delay > Duration::ZERO {
            let now = Instant::now();
            match self.next_action_at {
                None => {
                    self.next_action_at = Some(now + self.delay);
                    return Ok(false);
                }
                Some(next) if now < next => return Ok(false),
                Some(_) => {}
            }
        }
        self.next_action_at = None;

        match self.choose(engine, seat) {
            Some(action) => engine.act(action).map(|_| true),
            None => Ok(false),
        }
    }
}
