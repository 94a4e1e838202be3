//! Login form.
//!
//! `Idle -> Submitting -> Failed(message)`. Success writes the token to the
//! session store and leaves the form in `Idle`; the guard takes it from there.

use tracing::{info, warn};

use super::StateCell;
use crate::api::{ApiClient, ApiError};
use crate::session::SessionStore;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter your email and password";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginPhase {
    Idle,
    Submitting,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    phase: LoginPhase,
    attempt: u64,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            phase: LoginPhase::Idle,
            attempt: 0,
        }
    }
}

/// Credentials captured when a login attempt starts.
#[derive(Debug, Clone)]
pub struct LoginTicket {
    pub attempt: u64,
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn phase(&self) -> &LoginPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoginPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn begin(&mut self) -> Result<LoginTicket, ApiError> {
        if self.is_submitting() {
            return Err(ApiError::Validation("Login already in progress".to_string()));
        }
        let email = self.email.trim().to_string();
        if email.is_empty() || self.password.is_empty() {
            self.phase = LoginPhase::Failed(MISSING_CREDENTIALS_MESSAGE.to_string());
            return Err(ApiError::Validation(MISSING_CREDENTIALS_MESSAGE.to_string()));
        }

        self.attempt += 1;
        self.phase = LoginPhase::Submitting;
        Ok(LoginTicket {
            attempt: self.attempt,
            email,
            password: self.password.clone(),
        })
    }

    /// Apply the outcome for `attempt`. Returns false if it was stale.
    pub fn finish(&mut self, attempt: u64, result: Result<(), ApiError>) -> bool {
        if attempt != self.attempt || !self.is_submitting() {
            return false;
        }
        self.phase = match result {
            Ok(()) => {
                self.password.clear();
                LoginPhase::Idle
            }
            Err(ApiError::Authorization(detail)) if detail.is_empty() => {
                LoginPhase::Failed(INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            Err(err) => LoginPhase::Failed(err.user_message()),
        };
        true
    }
}

/// Run one login attempt. On success the token lands in `session`.
pub async fn submit<C: StateCell<LoginForm>>(cell: &C, api: &ApiClient, session: &dyn SessionStore) {
    let ticket = match cell.update(LoginForm::begin) {
        Ok(ticket) => ticket,
        Err(err) => {
            info!(reason = %err, "Login not submitted");
            return;
        }
    };

    let result = match api.login(&ticket.email, &ticket.password).await {
        Ok(token) => {
            session.set(token);
            Ok(())
        }
        Err(err) => {
            warn!(email = %ticket.email, error = %err, "Login failed");
            Err(err)
        }
    };
    cell.update(|form| form.finish(ticket.attempt, result));
}
