use super::hand_analysis::HandAnalysis;
use super::straight_info::StraightInfo;
use crate::cards::Rank;
use crate::evaluator::{Category, HandRank};

/// Whether later rules still get to look at the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Strategy pattern: each rule inspects the analysis and may claim or raise
/// the best category found so far.
pub trait CategoryRule {
    fn apply(&self, analysis: &HandAnalysis, best: &mut Option<HandRank>) -> Flow;
}

fn below(best: &Option<HandRank>, category: Category) -> bool {
    best.as_ref().map_or(true, |b| b.category < category)
}

// ============================================================================
// Rule Implementations (in evaluation order)
// ============================================================================

/// Four of a Kind: quad rank plus the best remaining card. Nothing else is checked.
pub struct FourOfAKindRule;

impl CategoryRule for FourOfAKindRule {
    fn apply(&self, analysis: &HandAnalysis, best: &mut Option<HandRank>) -> Flow {
        match analysis.rank_groups.quad() {
            Some(quad) => {
                *best = Some(analysis.with_kickers(Category::FourOfAKind, &[quad], 1));
                Flow::Stop
            }
            None => Flow::Continue,
        }
    }
}

/// Three of a Kind family: a full house when a second triple or a pair backs
/// the highest triple, plain trips otherwise.
pub struct ThreeOfAKindRule;

impl CategoryRule for ThreeOfAKindRule {
    fn apply(&self, analysis: &HandAnalysis, best: &mut Option<HandRank>) -> Flow {
        let groups = &analysis.rank_groups;
        let trips = groups.trips();
        let Some(&top) = trips.first() else {
            return Flow::Continue;
        };
        let full_house_pair = groups.matched().into_iter().find(|r| *r != top);
        *best = Some(match full_house_pair {
            Some(pair) => HandRank::new(Category::FullHouse, vec![top, pair]),
            None => analysis.with_kickers(Category::ThreeOfAKind, &[top], 2),
        });
        Flow::Continue
    }
}

/// Pair family, only when no triple is present. With three pairs the lowest
/// one is ignored and may serve as the kicker.
pub struct PairRule;

impl CategoryRule for PairRule {
    fn apply(&self, analysis: &HandAnalysis, best: &mut Option<HandRank>) -> Flow {
        let groups = &analysis.rank_groups;
        if groups.groups_of(3) > 0 {
            return Flow::Continue;
        }
        let pairs = groups.pairs();
        match pairs.as_slice() {
            [] => {}
            [pair] => *best = Some(analysis.with_kickers(Category::Pair, &[*pair], 3)),
            [high, low, ..] => {
                *best = Some(analysis.with_kickers(Category::TwoPair, &[*high, *low], 1))
            }
        }
        Flow::Continue
    }
}

/// Straight: claims the hand only when nothing better is already held.
pub struct StraightRule;

impl CategoryRule for StraightRule {
    fn apply(&self, analysis: &HandAnalysis, best: &mut Option<HandRank>) -> Flow {
        if let Some(top) = analysis.straight_info.top_rank {
            if below(best, Category::Straight) {
                *best = Some(HandRank::new(Category::Straight, vec![top]));
            }
        }
        Flow::Continue
    }
}

/// Flush: the five highest ranks of the flush suit.
pub struct FlushRule;

impl CategoryRule for FlushRule {
    fn apply(&self, analysis: &HandAnalysis, best: &mut Option<HandRank>) -> Flow {
        if analysis.suit_info.is_flush() && below(best, Category::Flush) {
            let suited = &analysis.suit_info.suited_ranks;
            let top_five: Vec<Rank> = suited.iter().rev().copied().take(5).collect();
            *best = Some(HandRank::new(Category::Flush, top_five));
        }
        Flow::Continue
    }
}

/// Straight flush / royal flush: rerun the straight scan over the flush suit
/// only. Overrides whatever was found before.
pub struct StraightFlushRule;

impl CategoryRule for StraightFlushRule {
    fn apply(&self, analysis: &HandAnalysis, best: &mut Option<HandRank>) -> Flow {
        if !(analysis.straight_info.is_straight() && analysis.suit_info.is_flush()) {
            return Flow::Continue;
        }
        if let Some(top) = StraightInfo::detect(&analysis.suit_info.suited_ranks).top_rank {
            let category =
                if top == Rank::Ace { Category::RoyalFlush } else { Category::StraightFlush };
            *best = Some(HandRank::new(category, vec![top]));
            return Flow::Stop;
        }
        Flow::Continue
    }
}

/// High card fallback: every rank from the top, minus the two lowest cards.
pub fn high_card(analysis: &HandAnalysis) -> HandRank {
    let keep = analysis.ranks.len().saturating_sub(2);
    let tie_break = analysis.ranks.iter().rev().copied().take(keep).collect();
    HandRank::new(Category::HighCard, tie_break)
}

// ============================================================================
// Static rule list (in evaluation order)
// ============================================================================

pub const RULES: [&dyn CategoryRule; 6] = [
    &FourOfAKindRule,
    &ThreeOfAKindRule,
    &PairRule,
    &StraightRule,
    &FlushRule,
    &StraightFlushRule,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Hand;
    use Rank::*;

    fn analyze(s: &str) -> HandAnalysis {
        let hand: Hand = s.parse().unwrap();
        HandAnalysis::new(hand.as_slice())
    }

    fn run(rule: &dyn CategoryRule, s: &str) -> (Option<HandRank>, Flow) {
        let mut best = None;
        let flow = rule.apply(&analyze(s), &mut best);
        (best, flow)
    }

    #[test]
    fn quads_stop_evaluation() {
        let (best, flow) = run(&FourOfAKindRule, "9c 9d 9h 9s 2c 5d Kh");
        assert_eq!(flow, Flow::Stop);
        assert_eq!(best, Some(HandRank::new(Category::FourOfAKind, vec![Nine, King])));
    }

    #[test]
    fn two_triples_make_a_full_house() {
        let (best, _) = run(&ThreeOfAKindRule, "4c 4d 4h Jc Jd Js 2h");
        assert_eq!(best, Some(HandRank::new(Category::FullHouse, vec![Jack, Four])));
    }

    #[test]
    fn full_house_prefers_highest_pair() {
        let (best, _) = run(&ThreeOfAKindRule, "3c 3d 3h 8c 8d Qs Qh");
        assert_eq!(best, Some(HandRank::new(Category::FullHouse, vec![Three, Queen])));
    }

    #[test]
    fn trips_take_two_kickers() {
        let (best, _) = run(&ThreeOfAKindRule, "2c 6d 6h 6s 9h Jd Ac");
        assert_eq!(best, Some(HandRank::new(Category::ThreeOfAKind, vec![Six, Ace, Jack])));
    }

    #[test]
    fn pair_rule_ignores_hands_with_trips() {
        let (best, _) = run(&PairRule, "6d 6h 6s 9h 9d");
        assert_eq!(best, None);
    }

    #[test]
    fn three_pairs_keep_the_top_two() {
        let (best, _) = run(&PairRule, "2c 2d 5h 5s 9c 9d 3h");
        assert_eq!(best, Some(HandRank::new(Category::TwoPair, vec![Nine, Five, Three])));
        let (best, _) = run(&PairRule, "2c 2d 5h 5s 9c 9d");
        assert_eq!(best, Some(HandRank::new(Category::TwoPair, vec![Nine, Five, Two])));
    }

    #[test]
    fn straight_does_not_downgrade_a_better_hand() {
        let mut best = Some(HandRank::new(Category::FullHouse, vec![Two, Three]));
        StraightRule.apply(&analyze("2c 3d 4h 5s 6c"), &mut best);
        assert_eq!(best.map(|b| b.category), Some(Category::FullHouse));
    }

    #[test]
    fn straight_raises_trips() {
        let mut best = None;
        let a = analyze("5c 5d 5h 6s 7c 8d 9h");
        ThreeOfAKindRule.apply(&a, &mut best);
        StraightRule.apply(&a, &mut best);
        assert_eq!(best, Some(HandRank::new(Category::Straight, vec![Nine])));
    }

    #[test]
    fn flush_keeps_five_highest() {
        let (best, _) = run(&FlushRule, "2h 3h 6h 9h Jh Kh Ac");
        assert_eq!(best, Some(HandRank::new(Category::Flush, vec![King, Jack, Nine, Six, Three])));
    }

    #[test]
    fn straight_flush_needs_suited_run() {
        // Straight 5..9 and a heart flush, but the hearts are not consecutive.
        let (best, flow) = run(&StraightFlushRule, "5h 6h 7c 8h 9h Kh 2d");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(best, None);
    }

    #[test]
    fn steel_wheel_is_a_straight_flush() {
        let (best, flow) = run(&StraightFlushRule, "2d 3d 4d 5d 9c Kh Ad");
        assert_eq!(flow, Flow::Stop);
        assert_eq!(best, Some(HandRank::new(Category::StraightFlush, vec![Five])));
    }

    #[test]
    fn high_card_drops_two_lowest() {
        let seven = high_card(&analyze("2c 4d 7h 9s Jc Kd Ah"));
        assert_eq!(seven.tie_break, vec![Ace, King, Jack, Nine, Seven]);
        assert!(high_card(&analyze("2c 9d")).tie_break.is_empty());
    }
}
