use holdem_sim::cards::{parse_cards, Rank::*};
use holdem_sim::evaluator::{Category, HandRank};
use holdem_sim::hand::HoleCards;
use holdem_sim::showdown::{resolve, score_players, showdown, ResolveError, WinnerSet};

fn hole(s: &str) -> HoleCards {
    s.parse().expect("valid hole cards")
}

#[test]
fn higher_pair_wins_in_the_first_round() {
    let kings = HandRank::new(Category::Pair, vec![King, Jack, Nine, Seven]);
    let queens = HandRank::new(Category::Pair, vec![Queen, Jack, Ten, Nine]);
    assert_eq!(resolve(&[kings, queens]).unwrap(), WinnerSet::Single(0));
}

#[test]
fn identical_straights_tie() {
    let a = HandRank::new(Category::Straight, vec![Ten]);
    let b = HandRank::new(Category::Straight, vec![Ten]);
    assert_eq!(resolve(&[a, b]).unwrap(), WinnerSet::Tie(vec![0, 1]));
}

#[test]
fn empty_results_are_an_error() {
    assert_eq!(resolve(&[]), Err(ResolveError::EmptyResultSet));
}

#[test]
fn only_the_best_category_reaches_the_kicker_rounds() {
    let results = [
        HandRank::new(Category::Pair, vec![Ace, King, Queen, Jack]),
        HandRank::new(Category::TwoPair, vec![Four, Three, Two]),
        HandRank::new(Category::TwoPair, vec![Four, Three, Five]),
        HandRank::new(Category::HighCard, vec![Ace, King, Queen, Jack, Nine]),
    ];
    assert_eq!(resolve(&results).unwrap(), WinnerSet::Single(2));
}

#[test]
fn ties_keep_seat_order_and_drop_losers() {
    let results = [
        HandRank::new(Category::Flush, vec![King, Ten, Eight, Six, Two]),
        HandRank::new(Category::Flush, vec![King, Ten, Eight, Six, Three]),
        HandRank::new(Category::Flush, vec![King, Nine, Eight, Six, Five]),
        HandRank::new(Category::Flush, vec![King, Ten, Eight, Six, Three]),
    ];
    assert_eq!(resolve(&results).unwrap(), WinnerSet::Tie(vec![1, 3]));
}

#[test]
fn unequal_tie_break_lengths_are_rejected() {
    let results = [
        HandRank::new(Category::Pair, vec![Ace, King]),
        HandRank::new(Category::Pair, vec![Ace, King, Queen, Jack]),
    ];
    assert_eq!(
        resolve(&results),
        Err(ResolveError::UnequalTieBreakLengths { category: Category::Pair.ordinal() })
    );
}

#[test]
fn kicker_decides_between_equal_pairs() {
    let board = parse_cards("Kc 9d 4s 2h 6c").unwrap();
    let hands = [hole("Ks Ad"), hole("Kh Qd")];
    let (results, winners) = showdown(&hands, &board).unwrap();
    assert_eq!(results[0].rank.category, Category::Pair);
    assert_eq!(winners, WinnerSet::Single(0));
}

#[test]
fn board_plays_for_everyone() {
    let board = parse_cards("Tc Jd Qs Kh Ac").unwrap();
    let hands = [hole("2c 3d"), hole("4h 5s"), hole("6c 7d")];
    let (_, winners) = showdown(&hands, &board).unwrap();
    assert_eq!(winners, WinnerSet::Tie(vec![0, 1, 2]));
}

#[test]
fn scores_are_reported_per_seat() {
    let board = parse_cards("Kc 9d 4s").unwrap();
    let results = score_players(&[hole("9h 9s"), hole("Ac 2d")], &board).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].player, 0);
    assert_eq!(results[0].rank.category, Category::ThreeOfAKind);
    assert_eq!(results[1].rank.category, Category::HighCard);
}
