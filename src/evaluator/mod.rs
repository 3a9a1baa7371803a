pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::{Hand, HandError, HoleCards};
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn from_ordinal(v: u8) -> Option<Category> {
        match v {
            0 => Some(Category::HighCard),
            1 => Some(Category::Pair),
            2 => Some(Category::TwoPair),
            3 => Some(Category::ThreeOfAKind),
            4 => Some(Category::Straight),
            5 => Some(Category::Flush),
            6 => Some(Category::FullHouse),
            7 => Some(Category::FourOfAKind),
            8 => Some(Category::StraightFlush),
            9 => Some(Category::RoyalFlush),
            _ => None,
        }
    }

    /// Human readable name shown at showdown.
    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "2 Pair",
            Category::ThreeOfAKind => "3 of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display name for a category ordinal (0..=9).
///
/// ```
/// assert_eq!(holdem_sim::evaluator::category_name(6), Some("Full House"));
/// assert_eq!(holdem_sim::evaluator::category_name(10), None);
/// ```
pub fn category_name(ordinal: u8) -> Option<&'static str> {
    Category::from_ordinal(ordinal).map(Category::name)
}

/// A hand's category plus the ranks that break ties inside that category,
/// most significant first.
///
/// Tie-break lists are only meaningful between hands of the same category,
/// and hands of the same category and card count always carry lists of the
/// same length. The derived ordering compares category first, then the list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct HandRank {
    pub category: Category,
    pub tie_break: Vec<Rank>,
}

impl HandRank {
    pub fn new(category: Category, tie_break: Vec<Rank>) -> Self {
        Self { category, tie_break }
    }

    /// Tie-break ranks as plain values (2..=14).
    pub fn tie_break_values(&self) -> Vec<u8> {
        self.tie_break.iter().map(|r| r.value()).collect()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        if !self.tie_break.is_empty() {
            let kickers: Vec<String> = self.tie_break.iter().map(Rank::to_string).collect();
            write!(f, " [{}]", kickers.join(" "))?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("a hand holds 2 to 7 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
}

/// Classify 2..=7 cards sorted ascending by rank.
///
/// Finds the best category obtainable from the cards; see [`HandRank`] for
/// how the tie-break list is built per category. The sort order is a
/// precondition and is only checked in debug builds.
///
/// ```
/// use holdem_sim::cards::parse_cards;
/// use holdem_sim::evaluator::{classify, Category};
///
/// let cards = parse_cards("2d 2h 3d 3h 3s").unwrap();
/// let rank = classify(&cards).unwrap();
/// assert_eq!(rank.category, Category::FullHouse);
/// assert_eq!(rank.tie_break_values(), vec![3, 2]);
/// ```
pub fn classify(cards: &[Card]) -> Result<HandRank, EvalError> {
    if !(Hand::MIN_CARDS..=Hand::MAX_CARDS).contains(&cards.len()) {
        return Err(EvalError::InvalidHandSize(cards.len()));
    }
    debug_assert!(
        cards.windows(2).all(|w| w[0].rank() <= w[1].rank()),
        "classify expects cards sorted ascending by rank"
    );
    Ok(classify_sorted(cards))
}

/// Classify a validated hand; never fails.
pub fn classify_hand(hand: &Hand) -> HandRank {
    classify_sorted(hand.as_slice())
}

/// Classify hole cards together with the community cards dealt so far.
///
/// ```
/// use holdem_sim::cards::parse_cards;
/// use holdem_sim::evaluator::{evaluate_holdem, Category};
/// use holdem_sim::hand::HoleCards;
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let board = parse_cards("Kc Qd Jh 3s 2c").unwrap();
/// let rank = evaluate_holdem(&hole, &board).unwrap();
/// assert_eq!(rank.category, Category::Pair);
/// ```
pub fn evaluate_holdem(hole: &HoleCards, community: &[Card]) -> Result<HandRank, EvalError> {
    let hand = Hand::combine(hole, community)?;
    Ok(classify_hand(&hand))
}

fn classify_sorted(cards: &[Card]) -> HandRank {
    use detector::{Flow, RULES};
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    let mut best = None;
    for rule in RULES.iter() {
        if rule.apply(&analysis, &mut best) == Flow::Stop {
            break;
        }
    }

    best.unwrap_or_else(|| detector::high_card(&analysis))
}
