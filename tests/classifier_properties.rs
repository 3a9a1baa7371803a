use holdem_sim::cards::{Card, Rank, Suit};
use holdem_sim::evaluator::{classify, Category, HandRank};
use holdem_sim::showdown::{resolve, WinnerSet};
use proptest::prelude::*;
use proptest::sample::subsequence;

fn full_deck() -> Vec<Card> {
    Rank::ALL.iter().flat_map(|&r| Suit::ALL.iter().map(move |&s| Card::new(r, s))).collect()
}

fn distinct_cards(min: usize, max: usize) -> impl Strategy<Value = Vec<Card>> {
    (min..=max).prop_flat_map(|n| subsequence(full_deck(), n)).prop_shuffle()
}

fn classify_unsorted(cards: &[Card]) -> HandRank {
    let mut sorted = cards.to_vec();
    sorted.sort();
    classify(&sorted).expect("2..=7 distinct cards")
}

fn rank_from_val(v: u8) -> Rank {
    Rank::from_value(v).expect("2..=14")
}

prop_compose! {
    /// Two pair built from explicit ranks plus one odd kicker.
    fn two_pair()(ranks in subsequence((2u8..=14).collect::<Vec<_>>(), 3).prop_shuffle())
        -> (u8, u8, u8)
    {
        let (a, b) = if ranks[0] > ranks[1] { (ranks[0], ranks[1]) } else { (ranks[1], ranks[0]) };
        (a, b, ranks[2])
    }
}

fn two_pair_cards(high: u8, low: u8, kicker: u8) -> Vec<Card> {
    vec![
        Card::new(rank_from_val(high), Suit::Spades),
        Card::new(rank_from_val(high), Suit::Hearts),
        Card::new(rank_from_val(low), Suit::Diamonds),
        Card::new(rank_from_val(low), Suit::Clubs),
        Card::new(rank_from_val(kicker), Suit::Hearts),
    ]
}

proptest! {
    #[test]
    fn classification_ignores_input_order(cards in distinct_cards(2, 7)) {
        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(classify_unsorted(&cards), classify_unsorted(&reversed));
    }

    #[test]
    fn classifying_twice_gives_the_same_rank(cards in distinct_cards(7, 7)) {
        let first = classify_unsorted(&cards);
        let second = classify_unsorted(&cards);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tie_break_width_is_fixed_per_category(a in distinct_cards(7, 7), b in distinct_cards(7, 7)) {
        let (ra, rb) = (classify_unsorted(&a), classify_unsorted(&b));
        if ra.category == rb.category {
            prop_assert_eq!(ra.tie_break.len(), rb.tie_break.len());
            prop_assert!(resolve(&[ra, rb]).is_ok());
        }
    }

    #[test]
    fn higher_category_always_wins(a in distinct_cards(5, 7), b in distinct_cards(5, 7)) {
        let (ra, rb) = (classify_unsorted(&a), classify_unsorted(&b));
        prop_assume!(ra.category != rb.category);
        let expected = if ra.category > rb.category { 0 } else { 1 };
        prop_assert_eq!(resolve(&[ra, rb]).unwrap(), WinnerSet::Single(expected));
    }

    #[test]
    fn adding_cards_never_lowers_the_category(cards in distinct_cards(7, 7)) {
        let mut previous = Category::HighCard;
        for n in [2, 5, 6, 7] {
            let category = classify_unsorted(&cards[..n]).category;
            prop_assert!(category >= previous, "{:?} after {:?}", category, previous);
            previous = category;
        }
    }

    #[test]
    fn higher_top_pair_wins_two_pair((h1, l1, k1) in two_pair(), (h2, l2, k2) in two_pair()) {
        prop_assume!(h1 != h2);
        let a = classify_unsorted(&two_pair_cards(h1, l1, k1));
        let b = classify_unsorted(&two_pair_cards(h2, l2, k2));
        prop_assert_eq!(a.category, Category::TwoPair);
        prop_assert_eq!(b.category, Category::TwoPair);
        let expected = if h1 > h2 { 0 } else { 1 };
        prop_assert_eq!(resolve(&[a, b]).unwrap(), WinnerSet::Single(expected));
    }
}

#[test]
fn quads_outrank_any_full_house() {
    let quads = classify_unsorted(&[
        Card::new(Rank::Two, Suit::Spades),
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::Two, Suit::Diamonds),
        Card::new(Rank::Two, Suit::Clubs),
        Card::new(Rank::Three, Suit::Hearts),
    ]);
    let boat = classify_unsorted(&[
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Ace, Suit::Diamonds),
        Card::new(Rank::King, Suit::Clubs),
        Card::new(Rank::King, Suit::Hearts),
    ]);
    assert!(quads > boat);
    assert_eq!(resolve(&[boat, quads]).unwrap(), WinnerSet::Single(1));
}
