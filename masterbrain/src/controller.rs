use masterbrain_types::{Attempt, Code, Color};

use crate::{
    config::Config,
    error::{ConfigError, EngineError},
    session::{Session, SubmitOutcome},
};

/// The presentation side of a game. It is told when to redraw and about
/// anything the player should see a message for.
pub trait Presenter {
    fn render(&mut self, session: &Session);

    /// Input stays blocked until the player starts a new game.
    fn won(&mut self, attempt: &Attempt, attempts_used: usize);

    /// `attempt` is the scored last row. The session has already restarted
    /// when this is called, so it is no longer in the history.
    fn exhausted(&mut self, attempt: &Attempt, secret: &Code);

    fn incomplete(&mut self);

    fn rejected(&mut self, error: &EngineError);
}

/// Player input, as forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Init,
    Reseed(u64),
    Select(Color),
    SetSlot(usize, Color),
    PlaceSelected(usize),
    Submit,
}

pub struct Controller<P: Presenter> {
    session: Session,
    presenter: P,
}

impl<P: Presenter> Controller<P> {
    /// Start a game right away and draw it.
    pub fn new(config: &Config, presenter: P) -> Result<Self, ConfigError> {
        let mut controller = Self {
            session: Session::new(config)?,
            presenter,
        };
        controller.handle(Command::Init);
        Ok(controller)
    }

    pub fn handle(&mut self, command: Command) {
        let result = match command {
            Command::Init => {
                self.session.init();
                Ok(())
            }
            Command::Reseed(seed) => {
                self.session.reseed(seed);
                Ok(())
            }
            Command::Select(color) => {
                self.session.select(color);
                Ok(())
            }
            Command::SetSlot(idx, color) => self.session.set_slot(idx, color),
            Command::PlaceSelected(idx) => self.session.place_selected(idx),
            Command::Submit => self.session.submit().map(|outcome| self.notify(outcome)),
        };
        match result {
            Ok(()) => {}
            Err(EngineError::Incomplete) => self.presenter.incomplete(),
            Err(e) => self.presenter.rejected(&e),
        }
        self.presenter.render(&self.session);
    }

    fn notify(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Continue(_) => {}
            SubmitOutcome::Won {
                attempt,
                attempts_used,
            } => self.presenter.won(&attempt, attempts_used),
            SubmitOutcome::Exhausted { attempt, secret } => {
                self.presenter.exhausted(&attempt, &secret);
            }
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
