use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, HandRank};

/// Pre-computed analysis of a rank-sorted hand of 2..=7 cards.
/// Built once and shared by all category rules.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Ranks in ascending order, repeats included.
    pub ranks: Vec<Rank>,
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(sorted: &[Card]) -> Self {
        let ranks: Vec<Rank> = sorted.iter().map(|c| c.rank()).collect();
        let rank_groups = RankGroups::from_cards(sorted);
        let suit_info = SuitInfo::detect(sorted);
        let straight_info = StraightInfo::detect(&ranks);
        Self { ranks, rank_groups, suit_info, straight_info }
    }

    /// Up to `n` highest ranks left once every card of `used` is removed.
    pub fn remaining(&self, used: &[Rank], n: usize) -> Vec<Rank> {
        self.ranks.iter().rev().copied().filter(|r| !used.contains(r)).take(n).collect()
    }

    /// `head` followed by up to `n` kickers from the remaining cards.
    pub fn with_kickers(&self, category: Category, head: &[Rank], n: usize) -> HandRank {
        let mut tie_break = head.to_vec();
        tie_break.extend(self.remaining(head, n));
        HandRank::new(category, tie_break)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Hand;

    fn analyze(s: &str) -> HandAnalysis {
        let hand: Hand = s.parse().unwrap();
        HandAnalysis::new(hand.as_slice())
    }

    #[test]
    fn royal_flush_analysis() {
        let a = analyze("Ts Js Qs Ks As");
        assert!(a.suit_info.is_flush());
        assert_eq!(a.straight_info.top_rank, Some(Rank::Ace));
        assert_eq!(a.rank_groups.quad(), None);
        assert!(a.rank_groups.pairs().is_empty());
    }

    #[test]
    fn remaining_skips_used_ranks_and_keeps_order() {
        let a = analyze("2c 5d 9h 9s Qc Kd Ah");
        assert_eq!(a.remaining(&[Rank::Nine], 3), vec![Rank::Ace, Rank::King, Rank::Queen]);
        let used = [Rank::Ace, Rank::King, Rank::Queen, Rank::Nine];
        assert_eq!(a.remaining(&used, 5), vec![Rank::Five, Rank::Two]);
    }

    #[test]
    fn kickers_are_appended_after_head() {
        let a = analyze("Jd Js 4c 8h");
        let rank = a.with_kickers(Category::Pair, &[Rank::Jack], 3);
        assert_eq!(rank.tie_break, vec![Rank::Jack, Rank::Eight, Rank::Four]);
    }
}
