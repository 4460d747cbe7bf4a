/// A shape drawn in some color, both given as palette indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Figure {
    pub symbol: usize,
    pub color: usize,
}

impl Figure {
    pub fn new(symbol: usize, color: usize) -> Self {
        Self { symbol, color }
    }

    /// A figure is canonical when it is drawn in its own palette color.
    pub fn is_canonical(&self) -> bool {
        self.symbol == self.color
    }
}

impl From<(usize, usize)> for Figure {
    fn from(v: (usize, usize)) -> Self {
        Figure {
            symbol: v.0,
            color: v.1,
        }
    }
}

/// The two figures shown together in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRound {
    pub first: Figure,
    pub second: Figure,
}

impl GameRound {
    pub fn new(first: impl Into<Figure>, second: impl Into<Figure>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn canonical_count(&self) -> usize {
        [self.first, self.second]
            .iter()
            .filter(|f| f.is_canonical())
            .count()
    }

    /// Every palette index shown in the round, as symbol or as color.
    pub fn occupied(&self) -> [usize; 4] {
        [
            self.first.symbol,
            self.first.color,
            self.second.symbol,
            self.second.color,
        ]
    }
}
