#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]
pub mod config;
pub mod controller;
pub mod error;
pub mod history;
pub mod score;
pub mod secret;
pub mod session;

pub use config::Config;
pub use controller::{Command, Controller, Presenter};
pub use error::{ConfigError, EngineError};
pub use history::History;
pub use session::{GameState, Session, SubmitOutcome};
