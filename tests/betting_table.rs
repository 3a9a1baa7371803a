use holdem_sim::betting::{decide, upper_bound, Action, Phase};

#[test]
fn preflop_raises_toward_half_the_bound() {
    // odds 75: ub = trunc(0.4 * 75) * 2 = 60, target = 10 + 30
    assert_eq!(upper_bound(Phase::PreFlop, 75.0), 60);
    assert_eq!(decide(Phase::PreFlop, 10, 10, 10, 75.0), Action::Raise(30));
    assert_eq!(decide(Phase::PreFlop, 40, 10, 10, 75.0), Action::Call);
    assert_eq!(decide(Phase::PreFlop, 40, 10, 40, 75.0), Action::Hold);
}

#[test]
fn strong_flop_raises_a_third_of_the_bound() {
    // odds 90: ub = trunc(1.0 * 90) * 2 = 180, third = 60
    assert_eq!(decide(Phase::Flop, 40, 40, 40, 90.0), Action::Raise(60));
    assert_eq!(decide(Phase::Flop, 200, 40, 100, 90.0), Action::Call);
    assert_eq!(decide(Phase::Flop, 220, 40, 100, 90.0), Action::Fold);
}

#[test]
fn weak_river_folds_early() {
    // odds 30: ub = trunc(0.2 * 30) * 2 = 12, third = 4
    assert_eq!(upper_bound(Phase::River, 30.0), 12);
    assert_eq!(decide(Phase::River, 100, 100, 100, 30.0), Action::Raise(4));
    assert_eq!(decide(Phase::River, 104, 100, 104, 30.0), Action::Hold);
    assert_eq!(decide(Phase::River, 111, 100, 104, 30.0), Action::Call);
    assert_eq!(decide(Phase::River, 112, 100, 104, 30.0), Action::Fold);
}

#[test]
fn zero_odds_never_raise_after_the_flop() {
    for phase in [Phase::Flop, Phase::Turn, Phase::River] {
        assert_eq!(decide(phase, 50, 50, 50, 0.0), Action::Fold);
    }
    assert_eq!(decide(Phase::PreFlop, 50, 50, 50, 0.0), Action::Hold);
}

#[test]
fn decisions_are_always_legal_for_the_seat() {
    for phase in Phase::ALL {
        for odds in [0.0, 12.5, 50.0, 79.9, 80.0, 85.0, 100.0] {
            for current in [0u64, 10, 25, 60, 120] {
                for mine in [0u64, 10, 25, 60, 120].into_iter().filter(|m| *m <= current) {
                    match decide(phase, current, 0, mine, odds) {
                        Action::Hold => assert_eq!(mine, current),
                        Action::Call => assert!(mine < current),
                        Action::Raise(by) => assert!(by > 0),
                        Action::Fold => assert_ne!(phase, Phase::PreFlop),
                    }
                }
            }
        }
    }
}
