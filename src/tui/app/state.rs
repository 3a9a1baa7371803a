use crate::agents::{AgentKind, AgentTable, HumanAgent, OddsBot};
use crate::betting::{Action, ActionKind};
use crate::config::TableConfig;
use crate::game::{Game, GameError, Street};
use crate::knowledge::Knowledge;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    NewDeal,
    Fold,
    Call,
    Hold,
    AmountOpen,
    AmountDigit(u8),
    AmountBackspace,
    AmountInc,
    AmountDec,
    AmountSubmit,
    AmountCancel,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub game: Game,
    pub agents: AgentTable,
    /// Seat played from the keyboard.
    pub human: usize,
    pub hand_started: bool,
    pub deals_played: u64,
    opening_bid: u64,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    amount_entry: Option<String>,
    amount_entry_error: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);
    const BOT_DELAY_MS: u64 = 400;

    /// Seat the human at `config.human_seat` and odds bots everywhere else.
    pub fn new(config: &TableConfig, knowledge: Option<Arc<Knowledge>>) -> Result<Self, GameError> {
        let game = match config.seed {
            Some(seed) => Game::with_seed(config.players, config.opening_bid, seed)?,
            None => Game::new(config.players, config.opening_bid)?,
        };
        let mut agents = AgentTable::for_seats(config.players);
        for seat in 0..config.players {
            if seat == config.human_seat {
                agents.set_agent(seat, Some(Box::new(HumanAgent::new())));
            } else {
                let bot = OddsBot::new(knowledge.clone()).with_delay_ms(Self::BOT_DELAY_MS);
                agents.set_agent(seat, Some(Box::new(bot)));
            }
        }
        Ok(Self {
            game,
            agents,
            human: config.human_seat,
            hand_started: false,
            deals_played: 0,
            opening_bid: config.opening_bid,
            help_open: false,
            history_open: false,
            history_offset: 0,
            amount_entry: None,
            amount_entry_error: None,
            action_error: None,
            action_error_at: None,
        })
    }

    /// Drop bot think time, for scripted play.
    pub fn without_bot_delay(mut self, knowledge: Option<Arc<Knowledge>>) -> Self {
        for seat in 0..self.game.seats().len() {
            if self.agents.agent_kind(seat) == Some(AgentKind::Bot) {
                self.agents.set_agent(seat, Some(Box::new(OddsBot::new(knowledge.clone()))));
            }
        }
        self
    }

    pub fn human_to_act(&self) -> bool {
        self.hand_started
            && self.game.street() != Street::Showdown
            && self.game.current() == self.human
    }

    /// Whether a seat's hole cards may be drawn face up.
    pub fn reveal(&self, seat: usize) -> bool {
        seat == self.human || self.game.street() == Street::Showdown
    }

    pub fn legal_actions(&self) -> Vec<ActionKind> {
        if !self.human_to_act() {
            return Vec::new();
        }
        self.game.legal_actions(self.human)
    }

    fn queue_action(&mut self, action: Action) -> bool {
        if !self.human_to_act() {
            return false;
        }
        self.clear_action_error();
        self.agents.receive(self.human, action)
    }

    pub fn amount_entry_active(&self) -> bool {
        self.amount_entry.is_some()
    }

    pub fn amount_entry_text(&self) -> Option<&str> {
        self.amount_entry.as_deref()
    }

    pub fn amount_entry_error(&self) -> Option<&str> {
        self.amount_entry_error.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    fn set_action_error(&mut self, message: String) {
        self.action_error = Some(message);
        self.action_error_at = Some(Instant::now());
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    fn open_amount_entry(&mut self) -> bool {
        if !self.human_to_act() {
            return false;
        }
        self.amount_entry = Some(self.opening_bid.max(1).to_string());
        self.amount_entry_error = None;
        true
    }

    fn amount_entry_backspace(&mut self) {
        if let Some(buf) = self.amount_entry.as_mut() {
            buf.pop();
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_push_digit(&mut self, digit: u8) {
        if let Some(buf) = self.amount_entry.as_mut() {
            if buf.len() >= 12 {
                return;
            }
            buf.push(char::from(b'0' + digit));
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_adjust(&mut self, delta: i64) {
        let step = self.opening_bid.max(1) as i64;
        if let Some(buf) = self.amount_entry.as_mut() {
            let cur = buf.parse::<i64>().unwrap_or(0);
            *buf = (cur + delta * step).max(0).to_string();
        }
        self.amount_entry_error = None;
    }

    fn amount_entry_submit(&mut self) -> bool {
        let Some(buf) = self.amount_entry.as_ref() else {
            return false;
        };
        let amount = match buf.parse::<u64>() {
            Ok(0) => {
                self.amount_entry_error = Some("Raise must add at least 1".to_string());
                return false;
            }
            Ok(v) => v,
            Err(_) => {
                self.amount_entry_error = Some("Invalid amount".to_string());
                return false;
            }
        };
        if self.queue_action(Action::Raise(amount)) {
            self.amount_entry = None;
            self.amount_entry_error = None;
            return true;
        }
        self.amount_entry_error = Some("Action not allowed".to_string());
        false
    }

    fn amount_entry_cancel(&mut self) {
        self.amount_entry = None;
        self.amount_entry_error = None;
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleHelp => {
                self.history_open = false;
                self.help_open = !self.help_open;
                false
            }
            InputAction::ToggleHistory => {
                self.help_open = false;
                if !self.history_open {
                    self.history_offset = 0;
                }
                self.history_open = !self.history_open;
                false
            }
            InputAction::HistoryUp => {
                if self.history_open {
                    let max_offset =
                        self.game.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::NewDeal => {
                self.new_deal();
                false
            }
            InputAction::Fold => self.queue_action(Action::Fold),
            InputAction::Call => self.queue_action(Action::Call),
            InputAction::Hold => self.queue_action(Action::Hold),
            InputAction::AmountOpen => self.open_amount_entry(),
            InputAction::AmountDigit(d) => {
                self.amount_entry_push_digit(d);
                false
            }
            InputAction::AmountBackspace => {
                self.amount_entry_backspace();
                false
            }
            InputAction::AmountInc => {
                self.amount_entry_adjust(1);
                false
            }
            InputAction::AmountDec => {
                self.amount_entry_adjust(-1);
                false
            }
            InputAction::AmountSubmit => self.amount_entry_submit(),
            InputAction::AmountCancel => {
                self.amount_entry_cancel();
                false
            }
        }
    }

    /// Start the next deal; ignored while one is still being bid.
    pub fn new_deal(&mut self) {
        if self.hand_started && self.game.street() != Street::Showdown {
            return;
        }
        match self.game.new_hand() {
            Ok(()) => {
                self.hand_started = true;
                self.deals_played += 1;
                self.history_offset = 0;
                self.clear_action_error();
            }
            Err(err) => self.set_action_error(err.to_string()),
        }
    }

    pub fn agents_on_turn(&mut self) {
        if !self.hand_started {
            return;
        }
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        match self.agents.on_turn(&mut self.game) {
            Ok(true) => self.clear_action_error(),
            Ok(false) => {}
            Err(err) => self.set_action_error(err.to_string()),
        }
    }
}
