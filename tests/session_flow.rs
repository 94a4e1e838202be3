//! Login, guarded navigation and session loss, end to end against a
//! scripted backend.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use campaign_console::api::{ApiClient, ApiRequest, ApiResponse, Transport, TransportError};
use campaign_console::app::Route;
use campaign_console::guard::{evaluate, GuardDecision};
use campaign_console::session::{MemorySessionStore, SessionStore};
use campaign_console::workflow::login::{self, LoginForm};

#[derive(Default)]
struct ScriptedBackend {
    replies: RefCell<VecDeque<(u16, &'static str)>>,
    seen: RefCell<Vec<ApiRequest>>,
}

impl ScriptedBackend {
    fn new(replies: &[(u16, &'static str)]) -> Rc<Self> {
        Rc::new(Self {
            replies: RefCell::new(replies.iter().copied().collect()),
            seen: RefCell::new(Vec::new()),
        })
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedBackend {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.seen.borrow_mut().push(request);
        match self.replies.borrow_mut().pop_front() {
            Some((status, body)) => Ok(ApiResponse::new(status, body)),
            None => Err(TransportError("no scripted reply".to_string())),
        }
    }
}

fn protected_routes() -> Vec<Route> {
    vec![
        Route::Dashboard {},
        Route::Contacts {},
        Route::CampaignCreate {},
        Route::Campaigns {},
        Route::CampaignDetail { id: 1 },
    ]
}

fn signed_in(backend: &Rc<ScriptedBackend>, session: &MemorySessionStore) -> ApiClient {
    let api = ApiClient::new(backend.clone(), Rc::new(session.clone()));
    let form = RefCell::new(LoginForm::new("admin@example.com", "correct horse"));
    tokio_test::block_on(login::submit(&form, &api, session));
    api
}

#[test]
fn test_login_unlocks_protected_routes() {
    let backend = ScriptedBackend::new(&[(200, r#"{"token": "jwt-1", "token_type": "bearer"}"#)]);
    let session = MemorySessionStore::new();

    for route in protected_routes() {
        assert_eq!(evaluate(&route, &session), GuardDecision::Redirect(Route::Login {}));
    }

    signed_in(&backend, &session);

    assert!(session.is_authenticated());
    for route in protected_routes() {
        assert_eq!(evaluate(&route, &session), GuardDecision::Render);
    }
    assert_eq!(
        evaluate(&Route::Login {}, &session),
        GuardDecision::Redirect(Route::Dashboard {})
    );
}

#[test]
fn test_logout_redirects_every_protected_route() {
    let backend = ScriptedBackend::new(&[(200, r#"{"token": "jwt-1"}"#)]);
    let session = MemorySessionStore::new();
    signed_in(&backend, &session);

    session.clear();

    for route in protected_routes() {
        assert_eq!(evaluate(&route, &session), GuardDecision::Redirect(Route::Login {}));
    }
    assert_eq!(evaluate(&Route::Login {}, &session), GuardDecision::Render);
}

#[test]
fn test_rejected_token_ends_session() {
    let backend = ScriptedBackend::new(&[
        (200, r#"{"token": "jwt-expired"}"#),
        (401, r#"{"detail": "Token expired"}"#),
    ]);
    let session = MemorySessionStore::new();
    let api = signed_in(&backend, &session);

    let err = tokio_test::block_on(api.dashboard_stats()).unwrap_err();

    assert!(err.is_authorization());
    assert!(!session.is_authenticated());
    assert_eq!(
        evaluate(&Route::Campaigns {}, &session),
        GuardDecision::Redirect(Route::Login {})
    );

    let seen = backend.seen.borrow();
    assert!(seen[0].bearer.is_none());
    assert_eq!(seen[1].bearer.as_ref().map(|t| t.as_str()), Some("jwt-expired"));
}
