use itertools::Itertools;
use log::warn;

use crate::figure::GameRound;
use crate::palette::PALETTE_SIZE;

/// The index a player has to confirm to win a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// One of the shown figures is canonical; its symbol is the answer.
    Matching(usize),
    /// Neither figure is canonical and exactly one index is missing from both.
    Absent(usize),
    /// Neither figure is canonical but the missing set is not a single index.
    /// Generated rounds never land here; any missing index is accepted.
    AnyAbsent(Vec<usize>),
}

impl Answer {
    pub fn accepts(&self, selected: usize) -> bool {
        match self {
            Answer::Matching(index) | Answer::Absent(index) => *index == selected,
            Answer::AnyAbsent(indices) => indices.contains(&selected),
        }
    }
}

/// Palette indices that appear in neither figure, as symbol or as color.
pub fn absent_indices(round: &GameRound, palette_size: usize) -> Vec<usize> {
    let occupied = round.occupied();
    (0..palette_size)
        .filter(|i| !occupied.contains(i))
        .collect_vec()
}

pub fn answer(round: &GameRound, palette_size: usize) -> Answer {
    if round.first.is_canonical() {
        return Answer::Matching(round.first.symbol);
    }
    if round.second.is_canonical() {
        return Answer::Matching(round.second.symbol);
    }

    match absent_indices(round, palette_size).as_slice() {
        [index] => Answer::Absent(*index),
        others => {
            warn!(
                "round {:?} has {} absent indices, accepting any of them",
                round,
                others.len()
            );
            Answer::AnyAbsent(others.to_vec())
        }
    }
}

/// Whether confirming `selected` wins `round` on the fixed palette.
pub fn is_correct(round: &GameRound, selected: usize) -> bool {
    is_correct_in(round, selected, PALETTE_SIZE)
}

pub fn is_correct_in(round: &GameRound, selected: usize, palette_size: usize) -> bool {
    answer(round, palette_size).accepts(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn first_figure_canonical() {
        let round = GameRound::new((2, 2), (0, 3));
        assert!(is_correct(&round, 2));
        assert!(!is_correct(&round, 0));
        assert!(!is_correct(&round, 3));
    }

    #[test]
    fn second_figure_canonical() {
        let round = GameRound::new((0, 2), (3, 3));
        assert_eq!(answer(&round, PALETTE_SIZE), Answer::Matching(3));
        assert!(is_correct(&round, 3));
        assert!(!is_correct(&round, 0));
        assert!(!is_correct(&round, 4));
    }

    #[test]
    fn first_figure_wins_when_both_are_canonical() {
        let round = GameRound::new((1, 1), (4, 4));
        assert_eq!(answer(&round, PALETTE_SIZE), Answer::Matching(1));
        assert!(!is_correct(&round, 4));
    }

    #[test]
    fn absent_index_is_the_answer_when_nothing_matches() {
        let round = GameRound::new((0, 1), (2, 3));
        assert_eq!(answer(&round, PALETTE_SIZE), Answer::Absent(4));
        assert!(is_correct(&round, 4));
        for i in 0..4 {
            assert!(!is_correct(&round, i), "index {i} should be wrong");
        }
    }

    #[test]
    fn repeated_indices_accept_any_absent_index() {
        // Shares index 1 between the figures, leaving 3 and 4 unshown.
        let round = GameRound::new((0, 1), (1, 2));
        assert_eq!(absent_indices(&round, PALETTE_SIZE), vec![3, 4]);
        assert_matches!(answer(&round, PALETTE_SIZE), Answer::AnyAbsent(ref v) if v == &[3, 4]);
        assert!(is_correct(&round, 3));
        assert!(is_correct(&round, 4));
        assert!(!is_correct(&round, 1));
    }

    #[test]
    fn evaluation_is_repeatable() {
        let round = GameRound::new((3, 0), (1, 4));
        let before = round;
        let a = is_correct(&round, 2);
        let b = is_correct(&round, 2);
        assert_eq!(a, b);
        assert!(a);
        assert_eq!(round, before);
    }
}
