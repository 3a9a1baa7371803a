use holdem_sim::agents::{AgentTable, HumanAgent, OddsBot};
use holdem_sim::betting::{Action, ActionKind};
use holdem_sim::engine::GameEngine;
use holdem_sim::game::{ActionError, Game, HandHistoryVerb, SeatStatus, Street};
use holdem_sim::knowledge::Knowledge;
use holdem_sim::showdown::WinnerSet;
use std::sync::Arc;

fn dealt(players: usize, seed: u64) -> Game {
    let mut game = Game::with_seed(players, 10, seed).expect("valid table");
    game.new_hand().expect("deal");
    game
}

#[test]
fn heads_up_hold_to_showdown() {
    let mut game = dealt(2, 1);
    for street in [Street::PreFlop, Street::Flop, Street::Turn, Street::River] {
        assert_eq!(game.street(), street);
        game.act(Action::Hold).unwrap();
        game.act(Action::Hold).unwrap();
    }
    assert_eq!(game.street(), Street::Showdown);
    assert_eq!(game.board().len(), 5);
    let winners = game.winners().cloned().expect("showdown result");
    match &winners {
        WinnerSet::Single(seat) => assert_eq!(game.seats()[*seat].net(), 10),
        WinnerSet::Tie(seats) => assert_eq!(seats, &vec![0, 1]),
    }
}

#[test]
fn behind_seat_must_call_fold_or_raise() {
    let mut game = dealt(3, 2);
    game.act(Action::Raise(15)).unwrap();
    let seat = game.current();
    assert_eq!(game.to_call(seat), 15);
    assert_eq!(
        GameEngine::legal_actions(&game, seat),
        vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise]
    );
    assert_eq!(game.act(Action::Hold), Err(ActionError::HoldWhileBehind { to_call: 15 }));
    game.act(Action::Raise(5)).unwrap();
    assert_eq!(game.highest_bid(), 30);
    assert_eq!(game.pot(), 10 + 25 + 30);
}

#[test]
fn everyone_folding_to_a_raise_ends_the_deal() {
    let mut game = dealt(3, 3);
    let raiser = game.current();
    game.act(Action::Raise(20)).unwrap();
    game.act(Action::Fold).unwrap();
    game.act(Action::Fold).unwrap();
    assert_eq!(game.street(), Street::Showdown);
    assert_eq!(game.winners(), Some(&WinnerSet::Single(raiser)));
    assert_eq!(game.seats()[raiser].net(), 20);
    let last = game.history_recent(1);
    assert_eq!(last[0].verb, HandHistoryVerb::Win);
    assert_eq!(last[0].amount, Some(50));
    assert!(game.showdown_categories().iter().all(Option::is_none));
}

#[test]
fn folded_seats_are_skipped_in_later_rounds() {
    let mut game = dealt(4, 4);
    let folder = game.current();
    game.act(Action::Fold).unwrap();
    for _ in 0..3 {
        game.act(Action::Hold).unwrap();
    }
    assert_eq!(game.street(), Street::Flop);
    for _ in 0..12 {
        if game.street() == Street::Showdown {
            break;
        }
        assert_ne!(game.current(), folder);
        game.act(Action::Hold).unwrap();
    }
    assert_eq!(game.seats()[folder].status(), SeatStatus::Folded);
    assert_eq!(game.street(), Street::Showdown);
}

#[test]
fn phase_scores_grow_with_each_street() {
    let mut game = dealt(2, 5);
    assert_eq!(game.phase_scores(0).len(), 1);
    game.act(Action::Hold).unwrap();
    game.act(Action::Hold).unwrap();
    assert_eq!(game.phase_scores(0).len(), 2);
    assert!(game.phase_scores(0)[1] >= game.phase_scores(0)[0]);
}

#[test]
fn button_moves_every_deal() {
    let mut game = Game::with_seed(3, 10, 6).unwrap();
    game.new_hand().unwrap();
    let first = game.button();
    game.act(Action::Fold).unwrap();
    game.act(Action::Fold).unwrap();
    game.new_hand().unwrap();
    assert_eq!(game.button(), (first + 1) % 3);
    assert_eq!(game.pot(), 30);
}

#[test]
fn seeded_tables_deal_identically() {
    let a = dealt(4, 42);
    let b = dealt(4, 42);
    let holes = |g: &Game| g.seats().iter().map(|s| s.hole()).collect::<Vec<_>>();
    assert_eq!(holes(&a), holes(&b));
}

#[test]
fn human_against_knowledge_bots() {
    let knowledge = Knowledge::parse("0,0,0,0,0|20\n1,1,1,1,0|80\n".as_bytes()).unwrap();
    let knowledge = Arc::new(knowledge);
    let mut game = dealt(3, 8);
    let mut table = AgentTable::for_seats(3);
    table.set_agent(0, Some(Box::new(HumanAgent::new())));
    table.set_agent(1, Some(Box::new(OddsBot::new(Some(knowledge.clone())))));
    table.set_agent(2, Some(Box::new(OddsBot::new(Some(knowledge)))));

    for _ in 0..100 {
        table.run_until_blocked(&mut game).unwrap();
        if game.street() == Street::Showdown {
            break;
        }
        assert_eq!(game.current(), 0);
        let action = if game.to_call(0) > 0 { Action::Call } else { Action::Hold };
        assert!(table.receive(0, action));
        assert!(table.on_turn(&mut game).unwrap());
    }
    assert_eq!(game.street(), Street::Showdown);
    let net: i64 = game.seats().iter().map(|s| s.net()).sum();
    assert_eq!(net, 0);
}
