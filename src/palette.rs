use ratatui::style::Color;

/// Number of shapes (and colors) in the fixed palette.
pub const PALETTE_SIZE: usize = 5;

/// Shapes in palette order. The shape at index `i` belongs with the hue at
/// index `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Shape {
    Diamond,
    Circle,
    Triangle,
    Square,
    Star,
}

pub const SHAPES: [Shape; PALETTE_SIZE] = [
    Shape::Diamond,
    Shape::Circle,
    Shape::Triangle,
    Shape::Square,
    Shape::Star,
];

impl Shape {
    pub fn from_index(index: usize) -> Option<Self> {
        SHAPES.get(index).copied()
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Shape::Diamond => "◆",
            Shape::Circle => "●",
            Shape::Triangle => "▲",
            Shape::Square => "■",
            Shape::Star => "★",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Hue {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
}

pub const HUES: [Hue; PALETTE_SIZE] = [Hue::Red, Hue::Green, Hue::Yellow, Hue::Blue, Hue::Magenta];

impl Hue {
    pub fn from_index(index: usize) -> Option<Self> {
        HUES.get(index).copied()
    }

    pub fn color(self) -> Color {
        match self {
            Hue::Red => Color::Red,
            Hue::Green => Color::Green,
            Hue::Yellow => Color::Yellow,
            Hue::Blue => Color::Blue,
            Hue::Magenta => Color::Magenta,
        }
    }
}
