use crate::cards::Rank;

/// Consecutive-by-one steps needed for a straight (five cards).
const STRAIGHT_STEPS: u8 = 4;

/// Whether a run of five consecutive ranks exists, and its top card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Scan ranks sorted ascending for five in a row.
    ///
    /// Repeated ranks are skipped without breaking the run. When the last
    /// (highest) rank is an Ace the scan starts as if a one had been seen, so
    /// A-2-3-4-5 counts with Five on top. Longer runs report their highest card.
    pub fn detect(ranks: &[Rank]) -> Self {
        let mut prev: Option<u8> = match ranks.last() {
            Some(Rank::Ace) => Some(1),
            _ => None,
        };
        let mut steps = 0u8;
        let mut top_rank = None;

        for &rank in ranks {
            let v = rank.value();
            match prev {
                Some(p) if v == p + 1 => {
                    steps += 1;
                    if steps >= STRAIGHT_STEPS {
                        top_rank = Some(rank);
                    }
                }
                Some(p) if v == p => {}
                _ => steps = 0,
            }
            prev = Some(v);
        }

        Self { top_rank }
    }

    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }
}
