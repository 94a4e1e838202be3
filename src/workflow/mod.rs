//! Page state machines.
//!
//! Each page owns one workflow value. Transitions are plain methods so they
//! can be driven from Dioxus signals and from tests alike; the async drivers
//! (`submit`, `create`, `confirm_send`, ...) only talk to a [`StateCell`].
//!
//! Drivers take a ticket when a request starts and hand it back on
//! completion. A completion whose ticket is no longer current is dropped,
//! so a late response never lands on discarded state.

pub mod campaign;
pub mod campaign_list;
pub mod login;
pub mod upload;

use std::cell::RefCell;
use std::sync::OnceLock;

use regex::Regex;

/// Mutable home of a workflow value.
pub trait StateCell<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T> StateCell<T> for RefCell<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// Page-level status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub tone: Tone,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.tone == Tone::Error
    }
}

/// Async load of a read-only snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> From<Result<T, crate::api::ApiError>> for LoadState<T> {
    fn from(result: Result<T, crate::api::ApiError>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err.user_message()),
        }
    }
}

/// Loose `local@domain.tld` check; the server has the final word.
pub fn is_email_shaped(candidate: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok())
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(candidate.trim()))
}
