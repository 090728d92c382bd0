use std::fmt::Display;

use enum_map::{Enum, EnumMap};

use crate::{Code, CODE_LENGTH};

/// Verdict for a single guess slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, PartialOrd, Ord)]
pub enum Mark {
    /// Right color in the right slot
    Correct,
    /// Color is in the secret but somewhere else
    Present,
    /// Color is not in the secret
    Absent,
}

impl Mark {
    #[must_use]
    pub fn symbol(&self) -> char {
        match self {
            Mark::Correct => '●',
            Mark::Present => '◐',
            Mark::Absent => '○',
        }
    }
}

/// Positional marks, one per guess slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback(pub [Mark; CODE_LENGTH]);

impl Feedback {
    #[must_use]
    #[inline(always)]
    pub fn mark(&self, idx: usize) -> Mark {
        self.0[idx]
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|m| *m == Mark::Correct)
    }

    /// Marks sorted best first, as pegs are shown on a physical board.
    /// This drops the slot each mark belongs to.
    #[must_use]
    pub fn display_order(&self) -> [Mark; CODE_LENGTH] {
        let mut marks = self.0;
        marks.sort_unstable();
        marks
    }

    #[must_use]
    pub fn tally(&self) -> EnumMap<Mark, u8> {
        let mut counts = EnumMap::default();
        for mark in self.0 {
            counts[mark] += 1;
        }
        counts
    }
}

impl Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for mark in self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

/// A submitted guess together with the feedback it earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attempt {
    pub code: Code,
    pub feedback: Feedback,
}

impl Attempt {
    #[must_use]
    pub fn new(code: Code, feedback: Feedback) -> Self {
        Self { code, feedback }
    }
}
