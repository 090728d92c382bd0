use masterbrain_types::Attempt;
use smallvec::SmallVec;

use crate::config::DEFAULT_MAX_ATTEMPTS;

/// Attempts submitted so far in the current game, oldest first.
/// Holds at most `limit` attempts.
#[derive(Debug, Clone)]
pub struct History {
    attempts: SmallVec<Attempt, { DEFAULT_MAX_ATTEMPTS as usize }>,
    limit: u8,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl History {
    #[must_use]
    pub fn new(limit: u8) -> Self {
        Self {
            attempts: SmallVec::new(),
            limit,
        }
    }

    /// # Panics
    /// If the history is already full
    pub fn push(&mut self, attempt: Attempt) {
        assert!(!self.is_full(), "history holds at most {} attempts", self.limit);
        self.attempts.push(attempt);
    }

    pub fn clear(&mut self) {
        self.attempts.clear();
    }

    #[must_use]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    #[must_use]
    #[inline(always)]
    pub fn limit(&self) -> u8 {
        self.limit
    }

    #[must_use]
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.attempts.len() >= usize::from(self.limit)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Attempt> {
        self.attempts.get(idx)
    }

    #[must_use]
    pub fn last(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = &Attempt> + '_ {
        self.attempts.iter()
    }
}
