use std::fmt::Display;

use crate::Color;

pub const CODE_LENGTH: usize = 4;

/// A full row of colors: the hidden secret or a submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(pub [Color; CODE_LENGTH]);

impl Code {
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    #[must_use]
    #[inline(always)]
    pub fn get(&self, idx: usize) -> Color {
        self.0[idx]
    }

    #[must_use]
    #[inline(always)]
    pub fn contains(&self, color: Color) -> bool {
        self.0.contains(&color)
    }

    #[must_use]
    pub fn has_distinct_colors(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(idx, color)| !self.0[..idx].contains(color))
    }

    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = &Color> + '_ {
        self.0.iter()
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, color) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    #[test]
    fn distinct_colors() {
        assert!(Code::new([Black, White, Brown, Red]).has_distinct_colors());
        assert!(!Code::new([Black, White, Black, Red]).has_distinct_colors());
        assert!(!Code::new([Red, Red, Red, Red]).has_distinct_colors());
    }

    #[test]
    fn display() {
        let code = Code::new([Green, Blue, Yellow, Purple]);
        assert_eq!(code.to_string(), "Green Blue Yellow Purple");
    }
}
