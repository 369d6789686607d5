//! Page Bootstrap
//!
//! Session-driven start-up state: prompt for a username or load data.

use crate::error::AppError;
use crate::session::{KeyValueStorage, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootState {
    /// Page just loaded, session not yet read
    Initial,
    /// Username dialog showing. `previous` is the session that stays active
    /// if the dialog is dismissed.
    Prompting { previous: Option<String> },
    Authenticated(String),
}

impl BootState {
    /// Leave `Initial` by reading the session
    pub fn resolve<S: KeyValueStorage>(session: &Session<S>) -> Self {
        match session.get() {
            Some(name) => BootState::Authenticated(name),
            None => BootState::Prompting { previous: None },
        }
    }

    /// Persist the submitted name. On error the state is unchanged.
    pub fn submit_username<S: KeyValueStorage>(&self, session: &Session<S>, input: &str) -> Result<Self, AppError> {
        let name = session.set(input)?;
        Ok(BootState::Authenticated(name))
    }

    /// Username label clicked
    pub fn reopen_prompt(&self) -> Self {
        match self {
            BootState::Authenticated(name) => BootState::Prompting { previous: Some(name.clone()) },
            BootState::Initial => BootState::Prompting { previous: None },
            prompting => prompting.clone(),
        }
    }

    /// Prompt closed without submitting; only a prior session can be resumed
    pub fn dismiss_prompt(&self) -> Self {
        match self {
            BootState::Prompting { previous: Some(name) } => BootState::Authenticated(name.clone()),
            other => other.clone(),
        }
    }

    /// Username the UI should show and load data for
    pub fn username(&self) -> Option<&str> {
        match self {
            BootState::Authenticated(name) => Some(name),
            BootState::Prompting { previous } => previous.as_deref(),
            BootState::Initial => None,
        }
    }

    pub fn is_prompting(&self) -> bool {
        matches!(self, BootState::Prompting { .. })
    }
}
