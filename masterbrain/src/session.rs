use masterbrain_types::{Attempt, Code, Color, Guess, ALL_COLORS, CODE_LENGTH};
use rand::{thread_rng, Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::{
    config::Config,
    error::{ConfigError, EngineError},
    history::History,
    score, secret,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No secret drawn yet. Only [`Session::init`] leaves this state.
    NotStarted,
    Playing,
    /// The secret was found. Input is blocked until the next [`Session::init`].
    Won,
}

/// What happened to an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Scored and recorded, the game goes on.
    Continue(Attempt),
    /// Every slot was correct.
    Won { attempt: Attempt, attempts_used: usize },
    /// The last row was used without finding `secret`. The session has
    /// already been restarted with a new secret.
    Exhausted { attempt: Attempt, secret: Code },
}

/// One game from `init` until the secret is found or the rows run out.
pub struct Session {
    secret: Option<Code>,
    guess: Guess,
    history: History,
    selected: Color,
    state: GameState,
    seed: u64,
    rng: XorShiftRng,
}

impl Session {
    /// Fails on a config that [`Config::validate`] rejects.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| thread_rng().gen());
        Ok(Self {
            secret: None,
            guess: Guess::EMPTY,
            history: History::new(config.max_attempts),
            selected: ALL_COLORS[0],
            state: GameState::NotStarted,
            seed,
            rng: XorShiftRng::seed_from_u64(seed),
        })
    }

    /// Start a new game: fresh secret, empty board.
    pub fn init(&mut self) {
        let secret = secret::generate(&mut self.rng);
        log::trace!("secret is {secret}");
        self.secret = Some(secret);
        self.history.clear();
        self.guess.clear();
        self.state = GameState::Playing;
        log::info!("new game (seed {}, {} attempts)", self.seed, self.history.limit());
    }

    /// Restart the generator from `seed` and start a new game.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = XorShiftRng::seed_from_u64(seed);
        self.init();
    }

    pub fn select(&mut self, color: Color) {
        self.selected = color;
    }

    /// Put `color` into slot `idx`, moving it there if it is already placed
    /// in another slot.
    pub fn set_slot(&mut self, idx: usize, color: Color) -> Result<(), EngineError> {
        self.ensure_playing()?;
        if idx >= CODE_LENGTH {
            log::warn!("rejected slot {idx}");
            return Err(EngineError::SlotOutOfRange(idx));
        }
        self.guess.set(idx, color);
        Ok(())
    }

    pub fn place_selected(&mut self, idx: usize) -> Result<(), EngineError> {
        self.set_slot(idx, self.selected)
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.guess.is_complete()
    }

    pub fn submit(&mut self) -> Result<SubmitOutcome, EngineError> {
        self.ensure_playing()?;
        let Some(secret) = self.secret else {
            return Err(EngineError::NotPlaying(self.state));
        };
        let Some(code) = self.guess.complete() else {
            return Err(EngineError::Incomplete);
        };

        let attempt = Attempt::new(code, score::compute_feedback(&code, &secret));
        self.history.push(attempt);
        self.guess.clear();
        log::debug!(
            "attempt {}: {} -> {}",
            self.history.len(),
            attempt.code,
            attempt.feedback
        );

        if attempt.feedback.is_win() {
            self.state = GameState::Won;
            log::info!("won after {} attempts", self.history.len());
            return Ok(SubmitOutcome::Won {
                attempt,
                attempts_used: self.history.len(),
            });
        }
        if self.history.is_full() {
            log::info!("out of attempts, secret was {secret}");
            self.init();
            return Ok(SubmitOutcome::Exhausted { attempt, secret });
        }
        Ok(SubmitOutcome::Continue(attempt))
    }

    fn ensure_playing(&self) -> Result<(), EngineError> {
        if self.state == GameState::Playing {
            Ok(())
        } else {
            log::warn!("rejected input while {:?}", self.state);
            Err(EngineError::NotPlaying(self.state))
        }
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn guess(&self) -> &Guess {
        &self.guess
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of submitted rows, which is also the row being filled in.
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn max_attempts(&self) -> u8 {
        self.history.limit()
    }

    #[must_use]
    pub fn selected(&self) -> Color {
        self.selected
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn secret(&self) -> Option<&Code> {
        self.secret.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn set_secret(&mut self, secret: Code) {
        self.secret = Some(secret);
    }
}
