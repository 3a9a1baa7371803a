use crate::cards::{Card, Rank, Suit};
use crate::game::{Seat, SeatStatus, Street};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const LOG_LINES: usize = 4;

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                    // header
            Constraint::Length(5),                    // board
            Constraint::Min(8),                       // seats
            Constraint::Length(LOG_LINES as u16 + 2), // log
            Constraint::Length(4),                    // status bar
        ])
        .split(f.area());

    let game = &app.game;
    let header_lines = vec![
        Line::from(format!(
            "Pot: {}   Highest bid: {}   Round opened at: {}",
            game.pot(),
            game.highest_bid(),
            game.previous_round_high()
        )),
        Line::from(format!(
            "Ante: {}   BTN P{}   Deal #{}",
            game.opening_bid(),
            game.button() + 1,
            app.deals_played
        )),
    ];
    let title = format!("holdem-sim {}", crate::VERSION);
    let header =
        Paragraph::new(header_lines).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    draw_board(f, chunks[1], app);
    draw_seats(f, chunks[2], app);
    draw_log(f, chunks[3], app);
    draw_status(f, chunks[4], app);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    } else if app.amount_entry_active() {
        draw_amount_entry(f, app);
    }
}

fn street_label(street: Street) -> &'static str {
    match street {
        Street::PreFlop => "Pre-flop",
        Street::Flop => "Flop",
        Street::Turn => "Turn",
        Street::River => "River",
        Street::Showdown => "Showdown",
    }
}

fn draw_board(f: &mut Frame, area: Rect, app: &AppState) {
    let street = app.game.street();
    let block =
        Block::default().title(format!("Board: {}", street_label(street))).borders(Borders::ALL);
    let board_inner = inner(area);
    let cards = app.game.board().as_slice();
    let card_width = board_inner.width.saturating_sub(2) / 5;
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(card_width); 5])
        .split(board_inner);
    f.render_widget(block, area);
    for (i, slot) in slots.iter().enumerate() {
        let fresh = (street == Street::Flop && i < 3)
            || (street == Street::Turn && i == 3)
            || (street == Street::River && i == 4);
        render_card_widget(f, *slot, cards.get(i).copied(), fresh.then_some(Color::Yellow));
    }
}

fn draw_seats(f: &mut Frame, area: Rect, app: &AppState) {
    let seats = app.game.seats();
    let total = seats.len();
    let top_cols = total.div_ceil(2) as u16;
    let bottom_cols = total as u16 - top_cols;
    let row_height = area.height / 2;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(row_height), Constraint::Length(row_height)])
        .split(area);
    for (r, cols) in [top_cols, bottom_cols].into_iter().enumerate() {
        if cols == 0 {
            continue;
        }
        let col_width = area.width / cols;
        let col_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..cols).map(|_| Constraint::Length(col_width)).collect::<Vec<_>>())
            .split(rows[r]);
        for c in 0..cols as usize {
            // Top row left to right, bottom row right to left, so seats read as a ring.
            let idx = if r == 0 { c } else { total - 1 - c };
            if let Some(seat) = seats.get(idx) {
                render_seat(f, col_chunks[c], app, idx, seat);
            }
        }
    }
}

fn render_seat(f: &mut Frame, area: Rect, app: &AppState, idx: usize, seat: &Seat) {
    let game = &app.game;
    let showdown = game.street() == Street::Showdown && app.hand_started;
    let mut title = seat.name().to_string();
    if idx == app.human {
        title.push_str(" [You]");
    }
    if idx == game.button() {
        title.push_str(" [BTN]");
    }
    if idx == game.current() && !showdown {
        title.push_str(" [Act]");
    }

    let status = match seat.status() {
        SeatStatus::Waiting => "Waiting",
        SeatStatus::Hold => "Hold",
        SeatStatus::Call => "Call",
        SeatStatus::Raise => "Raise",
        SeatStatus::Folded => "Folded",
    };
    let dim = Style::default().add_modifier(Modifier::DIM);
    let make_line = |label: &str, value: Option<String>| -> Line {
        match value {
            Some(v) => Line::from(format!("{label}{v}")),
            None => Line::from(vec![Span::raw(label.to_string()), Span::styled("--", dim)]),
        }
    };
    let category = if showdown {
        game.showdown_categories().get(idx).copied().flatten().map(|c| c.name().to_string())
    } else {
        None
    };
    let lines = vec![
        Line::from(format!("Bid: {}   Net: {:+}", seat.bid(), seat.net())),
        Line::from(format!("Status: {status}")),
        make_line("Last: ", seat.last_action().map(str::to_string)),
        make_line("Hand: ", category),
    ];

    let won = showdown && game.winners().is_some_and(|w| w.contains(idx));
    let border = if seat.status() == SeatStatus::Folded {
        Some(Color::DarkGray)
    } else if won {
        Some(Color::Green)
    } else if idx == game.current() && !showdown {
        Some(Color::Yellow)
    } else if idx == app.human {
        Some(Color::Cyan)
    } else {
        None
    };
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    f.render_widget(block, area);

    let seat_inner = inner(area);
    let mut text_area = seat_inner;
    let mut cards_area = None;
    if seat.hole().is_some() && seat_inner.height > 3 {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(seat_inner);
        text_area = split[0];
        cards_area = Some(split[1]);
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), text_area);
    if let (Some(hole), Some(area)) = (seat.hole(), cards_area) {
        let cw = area.width.saturating_sub(2) / 2;
        let card_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(cw), Constraint::Length(cw)])
            .split(area);
        let face_up = app.reveal(idx);
        for (slot, card) in card_chunks.iter().zip(hole.as_array()) {
            let shown = face_up.then_some(card);
            render_card_widget(f, *slot, shown, Some(Color::Cyan));
        }
    }
}

fn draw_log(f: &mut Frame, area: Rect, app: &AppState) {
    let lines: Vec<Line> = app
        .game
        .history_recent(LOG_LINES)
        .into_iter()
        .map(|entry| {
            let amount = entry.amount.map(|v| format!(" {v}")).unwrap_or_default();
            Line::from(format!("P{} {}{}", entry.seat + 1, entry.verb.label(), amount))
        })
        .collect();
    let para = Paragraph::new(lines).block(Block::default().title("Log").borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(inner(area));

    let mut left = if !app.hand_started {
        vec![Line::from("Press Space to deal.")]
    } else if app.game.street() == Street::Showdown {
        vec![Line::from(showdown_line(app))]
    } else if app.human_to_act() {
        let legal = app.legal_actions();
        let names: Vec<&str> = legal.iter().map(|k| k.name()).collect();
        vec![Line::from(format!(
            "Your move ({} to call): {}",
            app.game.to_call(app.human),
            names.join(", ")
        ))]
    } else {
        vec![Line::from(format!("Waiting for P{}", app.game.current() + 1))]
    };
    if let Some(err) = app.action_error() {
        let style = Style::default().fg(Color::Red);
        left.push(Line::from(Span::styled(format!("Error: {err}"), style)));
    }

    let right = vec![
        Line::from("F/C/H/R act • Space deal"),
        Line::from("? help • L log • Q quit"),
    ];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}

fn showdown_line(app: &AppState) -> String {
    let Some(winners) = app.game.winners() else {
        return "Deal over. Press Space for the next one.".to_string();
    };
    let names: Vec<String> = winners.indices().iter().map(|i| format!("P{}", i + 1)).collect();
    let verb = if winners.is_tie() { "split the pot" } else { "wins" };
    format!("{} {verb}. Press Space for the next deal.", names.join(" and "))
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries =
        app.game.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    }
    for entry in entries {
        let amount = entry.amount.map(|v| format!(" {v}")).unwrap_or_default();
        lines.push(Line::from(format!(
            "P{} {}{} [{}]",
            entry.seat + 1,
            entry.verb.label(),
            amount,
            street_label(entry.street)
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: L or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- Space: deal the next hand"),
        Line::from("- F: fold"),
        Line::from("- C: call the highest bid"),
        Line::from("- H: hold (only when your bid matches)"),
        Line::from("- R: raise, then enter the amount"),
        Line::from("- L: history"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from(Span::styled("Raise Amount:", bold)),
        Line::from("- 0-9: edit amount"),
        Line::from("- Backspace: delete digit"),
        Line::from("- + / -: adjust by the ante"),
        Line::from("- Enter: submit"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn draw_amount_entry(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 30, f.area());
    let current = app.amount_entry_text().unwrap_or("");
    let lines = vec![
        Line::from(format!("Raise by: {current}")),
        Line::from(format!("Highest bid: {}", app.game.highest_bid())),
        Line::from("Digits to edit, Backspace to delete"),
        Line::from("+/- by the ante, Enter submit, Esc cancel"),
    ];
    let block = Block::default().title("Raise Amount").borders(Borders::ALL);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner(area));
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[0]);
    let error = app.amount_entry_error().unwrap_or("");
    let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
    f.render_widget(Paragraph::new(error_line).alignment(Alignment::Center), chunks[1]);
}

fn suit_style(s: Suit) -> Style {
    match s {
        Suit::Hearts | Suit::Diamonds => Style::default().fg(Color::Red),
        Suit::Spades | Suit::Clubs => Style::default().fg(Color::White),
    }
}

fn rank_label(r: Rank) -> String {
    match r {
        Rank::Ten => "10".to_string(),
        other => other.to_char().to_string(),
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let card_inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(Span::styled(
            format!("{}{}", rank_label(c.rank()), c.suit().glyph()),
            suit_style(c.suit()),
        )),
        None => Line::from("[  ]"),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), card_inner);
}
