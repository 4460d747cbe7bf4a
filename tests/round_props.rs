use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use termrush::{
    evaluator::{absent_indices, answer, is_correct, is_correct_in, Answer},
    generator::{generate_round, generate_round_in, MIN_PALETTE_SIZE},
    palette::PALETTE_SIZE,
    session::Session,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn at_most_one_figure_is_canonical(seed in any::<u64>(), size in MIN_PALETTE_SIZE..=9usize) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..16 {
            let round = generate_round_in(&mut rng, size);
            prop_assert!(round.canonical_count() <= 1, "{:?}", round);
            prop_assert!(round.occupied().iter().all(|&i| i < size));
        }
    }

    #[test]
    fn zero_correct_rounds_leave_exactly_one_index_out(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..16 {
            let round = generate_round(&mut rng);
            if round.canonical_count() == 0 {
                prop_assert_eq!(absent_indices(&round, PALETTE_SIZE).len(), 1);
                prop_assert!(matches!(answer(&round, PALETTE_SIZE), Answer::Absent(_)));
            }
        }
    }

    #[test]
    fn every_generated_round_has_one_winning_index(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..16 {
            let round = generate_round(&mut rng);
            let winners = (0..PALETTE_SIZE).filter(|&i| is_correct(&round, i)).count();
            prop_assert_eq!(winners, 1, "{:?}", round);
        }
    }

    #[test]
    fn evaluation_is_pure(seed in any::<u64>(), selected in 0..PALETTE_SIZE) {
        let mut rng = StdRng::seed_from_u64(seed);
        let round = generate_round(&mut rng);
        let copy = round;
        let first = is_correct_in(&round, selected, PALETTE_SIZE);
        let second = is_correct_in(&round, selected, PALETTE_SIZE);
        prop_assert_eq!(first, second);
        prop_assert_eq!(round, copy);
    }

    #[test]
    fn selector_stays_in_range_and_wraps(
        seed in any::<u64>(),
        moves in proptest::collection::vec(any::<bool>(), 0..64),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Session::new(&mut rng, std::time::Duration::from_secs(30), std::time::Duration::ZERO);
        let mut expected: i64 = 0;
        for right in moves {
            if right {
                session.move_right();
                expected += 1;
            } else {
                session.move_left();
                expected -= 1;
            }
            prop_assert!(session.selected < PALETTE_SIZE);
            prop_assert_eq!(session.selected as i64, expected.rem_euclid(PALETTE_SIZE as i64));
        }
    }
}
