use std::fmt::Display;

use enum_map::Enum;

pub const PALETTE_SIZE: usize = 8;

pub const ALL_COLORS: [Color; PALETTE_SIZE] = [
    Color::Black,
    Color::White,
    Color::Brown,
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Purple,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, PartialOrd, Ord)]
pub enum Color {
    Black,
    White,
    Brown,
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

impl Color {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
            Color::Brown => "Brown",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Purple => "Purple",
        }
    }

    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Black => (0x21, 0x21, 0x21),
            Color::White => (0xfa, 0xfa, 0xfa),
            Color::Brown => (0x8d, 0x6e, 0x63),
            Color::Red => (0xf4, 0x43, 0x36),
            Color::Green => (0x4c, 0xaf, 0x50),
            Color::Blue => (0x0d, 0x47, 0xa1),
            Color::Yellow => (0xff, 0xeb, 0x3b),
            Color::Purple => (0xab, 0x47, 0xbc),
        }
    }

    /// Palette position, usable as an index into [`ALL_COLORS`].
    #[must_use]
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn next(self) -> Self {
        ALL_COLORS[(self.index() + 1) % PALETTE_SIZE]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        ALL_COLORS[(self.index() + PALETTE_SIZE - 1) % PALETTE_SIZE]
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_distinct_and_indexed() {
        for (idx, color) in ALL_COLORS.iter().enumerate() {
            assert_eq!(color.index(), idx);
            assert_eq!(ALL_COLORS.iter().filter(|c| *c == color).count(), 1);
        }
    }

    #[test]
    fn cycling_wraps_around() {
        assert_eq!(Color::Purple.next(), Color::Black);
        assert_eq!(Color::Black.prev(), Color::Purple);
        let mut color = Color::Red;
        for _ in 0..PALETTE_SIZE {
            color = color.next();
        }
        assert_eq!(color, Color::Red);
    }
}
