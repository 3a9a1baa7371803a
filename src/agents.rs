//! Agents: pluggable seat controllers.
//!
//! `PlayerAgent` is the seat-level trait and `AgentTable` decides which
//! agent acts for which seat. UIs stay thin: they queue human intents and
//! tick the table.

use crate::betting::Action;
use crate::engine::GameEngine;
use crate::game::{ActionError, Street};
use core::fmt;

/// Kinds of agents attached to seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentKind {
    Human,
    Bot,
}

/// A seat controller that can act for a player when it is their turn.
pub trait PlayerAgent {
    /// Called when `seat` is the current actor. Returns whether it acted.
    fn on_turn(&mut self, engine: &mut dyn GameEngine, seat: usize) -> Result<bool, ActionError>;
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    /// Queue an action intent; the default ignores it.
    fn receive(&mut self, _action: Action) -> bool {
        false
    }
}

mod odds;

pub use odds::{OddsBot, FALLBACK_ODDS};

/// Executes the action a person queued, once it is their turn.
#[derive(Debug, Default)]
pub struct HumanAgent {
    pending: Option<Action>,
}

impl HumanAgent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerAgent for HumanAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }

    fn receive(&mut self, action: Action) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(action);
        true
    }

    fn on_turn(&mut self, engine: &mut dyn GameEngine, seat: usize) -> Result<bool, ActionError> {
        if engine.street() == Street::Showdown {
            self.pending = None;
            return Ok(false);
        }
        if engine.current() != seat {
            return Ok(false);
        }
        match self.pending.take() {
            Some(action) => engine.act(action).map(|_| true),
            None => Ok(false),
        }
    }
}

/// Optional agent per seat; drives whichever one sits at the current seat.
pub struct AgentTable {
    seats: Vec<Option<Box<dyn PlayerAgent>>>,
}

impl fmt::Debug for AgentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: String = self
            .seats
            .iter()
            .map(|a| match a.as_deref().map(|ag| ag.kind()) {
                Some(AgentKind::Bot) => 'B',
                Some(AgentKind::Human) => 'H',
                None => '-',
            })
            .collect();
        write!(f, "AgentTable({flags})")
    }
}

impl AgentTable {
    /// A table with `n` empty seats.
    pub fn for_seats(n: usize) -> Self {
        let mut seats = Vec::with_capacity(n);
        seats.resize_with(n, || None);
        Self { seats }
    }

    pub fn set_agent(&mut self, seat: usize, agent: Option<Box<dyn PlayerAgent>>) {
        if seat >= self.seats.len() {
            self.seats.resize_with(seat + 1, || None);
        }
        self.seats[seat] = agent;
    }

    pub fn agent_kind(&self, seat: usize) -> Option<AgentKind> {
        self.seats.get(seat).and_then(|a| a.as_deref().map(|ag| ag.kind()))
    }

    /// Send an action intent to the agent at `seat`, if any.
    pub fn receive(&mut self, seat: usize, action: Action) -> bool {
        match self.seats.get_mut(seat) {
            Some(Some(agent)) => agent.receive(action),
            _ => false,
        }
    }

    pub fn has_agent(&self, seat: usize) -> bool {
        self.seats.get(seat).is_some_and(Option::is_some)
    }

    pub fn any_bots(&self) -> bool {
        self.seats.iter().flatten().any(|ag| ag.kind() == AgentKind::Bot)
    }

    /// Drive the agent at the current seat, if any.
    pub fn on_turn(&mut self, engine: &mut dyn GameEngine) -> Result<bool, ActionError> {
        let seat = engine.current();
        let Some(Some(agent)) = self.seats.get_mut(seat) else {
            return Ok(false);
        };
        agent.on_turn(engine, seat)
    }

    /// Run agents until a seat without one (or a waiting human) is up, or the
    /// deal ends. Returns how many actions were taken.
    pub fn run_until_blocked(&mut self, engine: &mut dyn GameEngine) -> Result<usize, ActionError> {
        let mut taken = 0;
        while engine.street() != Street::Showdown && self.on_turn(engine)? {
            taken += 1;
        }
        Ok(taken)
    }
}
