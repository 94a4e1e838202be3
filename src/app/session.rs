//! Session and API client context.
//!
//! [`ReactiveSession`] wraps the durable store and bumps a revision signal
//! on every write, so the gate re-renders and re-derives authentication
//! when a token is stored, cleared by logout, or cleared by the API client.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::api::{ApiClient, ReqwestTransport};
use crate::config::ClientConfig;
use crate::session::{default_store, SessionStore, SessionToken};
use crate::workflow::StateCell;

#[derive(Clone)]
pub struct ReactiveSession {
    store: Rc<dyn SessionStore>,
    revision: Signal<u64>,
}

impl ReactiveSession {
    pub fn new(store: Rc<dyn SessionStore>, revision: Signal<u64>) -> Self {
        Self { store, revision }
    }

    /// Subscribe the calling component to session writes.
    pub fn track(&self) {
        let _ = (self.revision)();
    }

    fn bump(&self) {
        let mut revision = self.revision;
        *revision.write() += 1;
    }
}

impl SessionStore for ReactiveSession {
    fn get(&self) -> Option<SessionToken> {
        self.store.get()
    }

    fn set(&self, token: SessionToken) {
        self.store.set(token);
        self.bump();
    }

    fn clear(&self) {
        self.store.clear();
        self.bump();
    }
}

impl<T: 'static> StateCell<T> for Signal<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut signal = *self;
        let mut value = signal.write();
        f(&mut value)
    }
}

/// Install the session and API client for the whole tree.
pub fn use_console_provider(config: &ClientConfig) {
    let revision = use_signal(|| 0u64);
    let session = use_hook(|| {
        ReactiveSession::new(default_store(&config.token_storage_key), revision)
    });
    let client = use_hook(|| {
        let transport = Rc::new(ReqwestTransport::new(config.clone()));
        ApiClient::new(transport, Rc::new(session.clone()))
    });
    use_context_provider(|| session);
    use_context_provider(|| client);
}

/// Session handle. Reserved for the gate, the login page and the topbar.
pub fn use_session() -> ReactiveSession {
    use_context::<ReactiveSession>()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}
