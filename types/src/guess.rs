use crate::{Code, Color, CODE_LENGTH};

/// The row the player is currently filling in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Guess([Option<Color>; CODE_LENGTH]);

impl Guess {
    pub const EMPTY: Self = Self([None; CODE_LENGTH]);

    #[must_use]
    #[inline(always)]
    pub fn slot(&self, idx: usize) -> Option<Color> {
        self.0[idx]
    }

    #[must_use]
    #[inline(always)]
    pub fn slots(&self) -> &[Option<Color>; CODE_LENGTH] {
        &self.0
    }

    /// Put `color` into slot `idx`.
    /// If `color` already sits in another slot it moves here, and that other
    /// slot receives whatever `idx` held before.
    ///
    /// # Panics
    /// If `idx` is not below [`CODE_LENGTH`]
    pub fn set(&mut self, idx: usize, color: Color) {
        assert!(idx < CODE_LENGTH, "slot {idx} out of range");
        if let Some(current) = self.position(color) {
            self.0[current] = self.0[idx];
        }
        self.0[idx] = Some(color);
    }

    #[must_use]
    pub fn position(&self, color: Color) -> Option<usize> {
        self.0.iter().position(|slot| *slot == Some(color))
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// The guess as a [`Code`], once every slot is filled.
    #[must_use]
    pub fn complete(&self) -> Option<Code> {
        let mut colors = [Color::Black; CODE_LENGTH];
        for (dst, slot) in colors.iter_mut().zip(self.0) {
            *dst = slot?;
        }
        Some(Code(colors))
    }

    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    fn no_duplicates(guess: &Guess) -> bool {
        guess
            .slots()
            .iter()
            .flatten()
            .enumerate()
            .all(|(idx, c)| guess.slots().iter().flatten().skip(idx + 1).all(|o| o != c))
    }

    #[test]
    fn set_moves_existing_color() {
        let mut guess = Guess::EMPTY;
        guess.set(0, Red);
        guess.set(2, Red);
        assert_eq!(guess.slots(), &[None, None, Some(Red), None]);
    }

    #[test]
    fn set_swaps_with_previous_occupant() {
        let mut guess = Guess::EMPTY;
        guess.set(0, Red);
        guess.set(1, Blue);
        guess.set(1, Red);
        assert_eq!(guess.slots(), &[Some(Blue), Some(Red), None, None]);
    }

    #[test]
    fn set_same_slot_is_noop() {
        let mut guess = Guess::EMPTY;
        guess.set(3, Green);
        guess.set(3, Green);
        assert_eq!(guess.slots(), &[None, None, None, Some(Green)]);
    }

    #[test]
    fn set_never_duplicates() {
        let colors = [Black, White, Brown, Red, Black, Red, White, Brown, Black];
        let mut guess = Guess::EMPTY;
        for (step, color) in colors.into_iter().enumerate() {
            guess.set((step * 3) % CODE_LENGTH, color);
            assert!(no_duplicates(&guess), "{guess:?}");
        }
    }

    #[test]
    fn complete() {
        let mut guess = Guess::EMPTY;
        assert!(guess.is_empty());
        assert_eq!(guess.complete(), None);
        guess.set(0, Black);
        guess.set(1, White);
        guess.set(2, Brown);
        assert!(!guess.is_complete());
        assert_eq!(guess.complete(), None);
        guess.set(3, Red);
        assert!(guess.is_complete());
        assert_eq!(guess.complete(), Some(Code([Black, White, Brown, Red])));
        guess.clear();
        assert!(guess.is_empty());
    }

    #[test]
    #[should_panic]
    fn set_out_of_range() {
        let mut guess = Guess::EMPTY;
        guess.set(CODE_LENGTH, Red);
    }
}
