use rand::Rng;

use crate::figure::{Figure, GameRound};
use crate::palette::PALETTE_SIZE;

/// Smallest palette for which a zero-correct round can show four distinct
/// indices.
pub const MIN_PALETTE_SIZE: usize = 4;

/// Builds a round for the fixed palette.
pub fn generate_round<R: Rng + ?Sized>(rng: &mut R) -> GameRound {
    generate_round_in(rng, PALETTE_SIZE)
}

/// Builds a round over a palette of `palette_size` indices.
///
/// A fair coin picks between a round with exactly one canonical figure and a
/// round with none. Either way at most one figure is canonical, and in the
/// zero-correct case the four shown indices are pairwise distinct.
///
/// # Panics
///
/// Panics if `palette_size < MIN_PALETTE_SIZE`.
pub fn generate_round_in<R: Rng + ?Sized>(rng: &mut R, palette_size: usize) -> GameRound {
    assert!(
        palette_size >= MIN_PALETTE_SIZE,
        "palette needs at least {MIN_PALETTE_SIZE} entries, got {palette_size}"
    );

    if rng.gen_bool(0.5) {
        let index = rng.gen_range(0..palette_size);
        let correct = Figure::new(index, index);
        let incorrect = distractor(rng, palette_size, correct);

        if rng.gen_bool(0.5) {
            GameRound {
                first: correct,
                second: incorrect,
            }
        } else {
            GameRound {
                first: incorrect,
                second: correct,
            }
        }
    } else {
        let symbol = rng.gen_range(0..palette_size);
        let color = draw_excluding(rng, palette_size, &[symbol]);
        let first = Figure::new(symbol, color);

        GameRound {
            first,
            second: distractor(rng, palette_size, first),
        }
    }
}

/// A non-canonical figure that shares no index with `avoid`.
///
/// For a canonical `avoid` this is the plain two-exclusion rule: the symbol
/// differs from `avoid`'s, and the color differs from both the new symbol and
/// `avoid`'s color.
fn distractor<R: Rng + ?Sized>(rng: &mut R, palette_size: usize, avoid: Figure) -> Figure {
    let symbol = draw_excluding(rng, palette_size, &[avoid.symbol, avoid.color]);
    let color = draw_excluding(rng, palette_size, &[symbol, avoid.symbol, avoid.color]);
    Figure::new(symbol, color)
}

/// Uniform draw from `0..palette_size` skipping `excluded`, by rejection.
///
/// The caller must leave at least one index unexcluded, otherwise this never
/// returns.
pub fn draw_excluding<R: Rng + ?Sized>(
    rng: &mut R,
    palette_size: usize,
    excluded: &[usize],
) -> usize {
    debug_assert!(
        (0..palette_size).any(|i| !excluded.contains(&i)),
        "every index in 0..{palette_size} is excluded"
    );

    loop {
        let candidate = rng.gen_range(0..palette_size);
        if !excluded.contains(&candidate) {
            return candidate;
        }
    }
}
