//! Campaign composer: create a campaign, then send it to a test address.
//!
//! Two independent machines share the page. Creation keeps the form filled
//! in so the draft can be tested or submitted again; test-send needs the id
//! of a created campaign.

use tracing::{info, warn};

use super::{is_email_shaped, Banner, StateCell};
use crate::api::{ApiClient, ApiError, CampaignId};

pub const SUBJECT_MAX_CHARS: usize = 100;
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill all fields";
pub const NOT_CREATED_MESSAGE: &str = "Please create the campaign first";
pub const MISSING_RECIPIENT_MESSAGE: &str = "Please enter a test email address";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignDraft {
    pub subject: String,
    pub sender: String,
    pub html_body: String,
}

impl CampaignDraft {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.subject.trim().is_empty()
            || self.sender.trim().is_empty()
            || self.html_body.trim().is_empty()
        {
            return Err(ApiError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }
        if self.subject.chars().count() > SUBJECT_MAX_CHARS {
            return Err(ApiError::Validation(format!(
                "Subject must be at most {} characters",
                SUBJECT_MAX_CHARS
            )));
        }
        if !is_email_shaped(&self.sender) {
            return Err(ApiError::Validation(
                "Sender must be a valid email address".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatePhase {
    Idle,
    Creating,
    Created(CampaignId),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestSendPhase {
    Idle,
    Sending,
    Sent,
    Failed,
}

#[derive(Debug, Clone)]
pub struct CreateTicket {
    pub attempt: u64,
    pub draft: CampaignDraft,
}

#[derive(Debug, Clone)]
pub struct TestSendTicket {
    pub attempt: u64,
    pub campaign_id: CampaignId,
    pub recipient: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignComposer {
    pub draft: CampaignDraft,
    pub test_recipient: String,
    create: CreatePhase,
    test_send: TestSendPhase,
    /// Last created campaign; survives a failed re-create.
    campaign_id: Option<CampaignId>,
    banner: Option<Banner>,
    create_attempt: u64,
    test_attempt: u64,
}

impl Default for CampaignComposer {
    fn default() -> Self {
        Self {
            draft: CampaignDraft::default(),
            test_recipient: String::new(),
            create: CreatePhase::Idle,
            test_send: TestSendPhase::Idle,
            campaign_id: None,
            banner: None,
            create_attempt: 0,
            test_attempt: 0,
        }
    }
}

impl CampaignComposer {
    pub fn create_phase(&self) -> CreatePhase {
        self.create
    }

    pub fn test_send_phase(&self) -> TestSendPhase {
        self.test_send
    }

    pub fn campaign_id(&self) -> Option<CampaignId> {
        self.campaign_id
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn is_creating(&self) -> bool {
        self.create == CreatePhase::Creating
    }

    pub fn is_sending_test(&self) -> bool {
        self.test_send == TestSendPhase::Sending
    }

    /// The test-send control exists once a campaign has been created.
    pub fn test_send_available(&self) -> bool {
        self.campaign_id.is_some()
    }

    pub fn can_send_test(&self) -> bool {
        self.test_send_available()
            && !self.is_sending_test()
            && !self.test_recipient.trim().is_empty()
    }

    fn reject(&mut self, message: &str) -> ApiError {
        self.banner = Some(Banner::error(message));
        ApiError::Validation(message.to_string())
    }

    pub fn begin_create(&mut self) -> Result<CreateTicket, ApiError> {
        if self.is_creating() {
            return Err(ApiError::Validation("Campaign is already being created".to_string()));
        }
        if let Err(err) = self.draft.validate() {
            self.banner = Some(Banner::error(err.user_message()));
            return Err(err);
        }

        self.create_attempt += 1;
        self.create = CreatePhase::Creating;
        self.banner = None;
        Ok(CreateTicket {
            attempt: self.create_attempt,
            draft: self.draft.clone(),
        })
    }

    /// Apply the create response. The draft fields are left untouched.
    pub fn finish_create(&mut self, attempt: u64, result: Result<CampaignId, ApiError>) -> bool {
        if attempt != self.create_attempt || !self.is_creating() {
            return false;
        }
        match result {
            Ok(id) => {
                self.campaign_id = Some(id);
                self.create = CreatePhase::Created(id);
                self.banner = Some(Banner::success(format!("Campaign Created! ID: {}", id)));
            }
            Err(err) => {
                self.create = CreatePhase::Failed;
                self.banner = Some(Banner::error(format!(
                    "Error creating campaign: {}",
                    err.user_message()
                )));
            }
        }
        true
    }

    pub fn begin_test_send(&mut self) -> Result<TestSendTicket, ApiError> {
        if self.is_sending_test() {
            return Err(ApiError::Validation("A test email is already being sent".to_string()));
        }
        let Some(campaign_id) = self.campaign_id else {
            return Err(self.reject(NOT_CREATED_MESSAGE));
        };
        let recipient = self.test_recipient.trim().to_string();
        if recipient.is_empty() {
            return Err(self.reject(MISSING_RECIPIENT_MESSAGE));
        }
        if !is_email_shaped(&recipient) {
            return Err(self.reject("Test recipient must be a valid email address"));
        }

        self.test_attempt += 1;
        self.test_send = TestSendPhase::Sending;
        self.banner = None;
        Ok(TestSendTicket {
            attempt: self.test_attempt,
            campaign_id,
            recipient,
        })
    }

    pub fn finish_test_send(
        &mut self,
        ticket: &TestSendTicket,
        result: Result<(), ApiError>,
    ) -> bool {
        if ticket.attempt != self.test_attempt || !self.is_sending_test() {
            return false;
        }
        match result {
            Ok(()) => {
                self.test_send = TestSendPhase::Sent;
                self.banner = Some(Banner::success(format!(
                    "Test email sent to {}!",
                    ticket.recipient
                )));
            }
            Err(err) => {
                self.test_send = TestSendPhase::Failed;
                self.banner = Some(Banner::error(format!(
                    "Error sending test email: {}",
                    err.user_message()
                )));
            }
        }
        true
    }
}

/// Create the campaign described by the current draft.
pub async fn create<C: StateCell<CampaignComposer>>(cell: &C, api: &ApiClient) {
    let ticket = match cell.update(CampaignComposer::begin_create) {
        Ok(ticket) => ticket,
        Err(err) => {
            info!(reason = %err, "Campaign not created");
            return;
        }
    };

    let result = api.create_campaign(&ticket.draft).await;
    if let Err(err) = &result {
        warn!(error = %err, "Campaign creation failed");
    }
    cell.update(|composer| composer.finish_create(ticket.attempt, result));
}

/// Send the created campaign to the test recipient.
pub async fn send_test<C: StateCell<CampaignComposer>>(cell: &C, api: &ApiClient) {
    let ticket = match cell.update(CampaignComposer::begin_test_send) {
        Ok(ticket) => ticket,
        Err(err) => {
            info!(reason = %err, "Test email not sent");
            return;
        }
    };

    let result = api.send_test(ticket.campaign_id, &ticket.recipient).await;
    if let Err(err) = &result {
        warn!(campaign_id = ticket.campaign_id, error = %err, "Test send failed");
    }
    cell.update(|composer| composer.finish_test_send(&ticket, result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::mock::MockTransport;
    use crate::session::MemorySessionStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn api(transport: &MockTransport) -> ApiClient {
        ApiClient::new(Rc::new(transport.clone()), Rc::new(MemorySessionStore::new()))
    }

    fn filled() -> CampaignComposer {
        let mut composer = CampaignComposer::default();
        composer.draft = CampaignDraft {
            subject: "Spring sale".to_string(),
            sender: "news@example.com".to_string(),
            html_body: "<h1>50% off</h1>".to_string(),
        };
        composer
    }

    #[tokio::test]
    async fn test_create_enables_test_send_and_keeps_fields() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"id": 42, "status": "created"}"#);
        let cell = RefCell::new(filled());
        assert!(!cell.borrow().test_send_available());

        create(&cell, &api(&transport)).await;

        let composer = cell.borrow();
        assert_eq!(composer.create_phase(), CreatePhase::Created(42));
        assert_eq!(composer.campaign_id(), Some(42));
        assert!(composer.test_send_available());
        assert_eq!(composer.draft, filled().draft);
        assert!(!composer.banner().unwrap().is_error());
    }

    #[tokio::test]
    async fn test_missing_fields_rejected_locally() {
        let transport = MockTransport::new();
        let mut composer = filled();
        composer.draft.html_body.clear();
        let cell = RefCell::new(composer);

        create(&cell, &api(&transport)).await;

        assert_eq!(transport.call_count(), 0);
        assert_eq!(
            cell.borrow().banner(),
            Some(&Banner::error(MISSING_FIELDS_MESSAGE))
        );
        assert_eq!(cell.borrow().create_phase(), CreatePhase::Idle);
    }

    #[test]
    fn test_draft_validation_limits() {
        let mut draft = filled().draft;
        draft.subject = "x".repeat(SUBJECT_MAX_CHARS);
        assert!(draft.validate().is_ok());

        draft.subject.push('x');
        assert!(draft.validate().is_err());

        draft.subject = "ok".to_string();
        draft.sender = "not-an-email".to_string();
        assert!(draft.validate().is_err());
    }

    #[tokio::test]
    async fn test_send_test_with_empty_recipient_makes_no_request() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"id": 42}"#);
        let cell = RefCell::new(filled());
        let api = api(&transport);
        create(&cell, &api).await;
        assert_eq!(transport.call_count(), 1);

        send_test(&cell, &api).await;

        assert_eq!(transport.call_count(), 1);
        assert!(!cell.borrow().can_send_test());
        assert_eq!(
            cell.borrow().banner(),
            Some(&Banner::error(MISSING_RECIPIENT_MESSAGE))
        );
    }

    #[tokio::test]
    async fn test_send_test_before_create_rejected() {
        let transport = MockTransport::new();
        let mut composer = filled();
        composer.test_recipient = "me@example.com".to_string();
        let cell = RefCell::new(composer);

        send_test(&cell, &api(&transport)).await;

        assert_eq!(transport.call_count(), 0);
        assert_eq!(
            cell.borrow().banner(),
            Some(&Banner::error(NOT_CREATED_MESSAGE))
        );
    }

    #[tokio::test]
    async fn test_send_test_posts_campaign_and_recipient() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"id": 7}"#);
        transport.respond(200, r#"{"status": "sent"}"#);
        let cell = RefCell::new(filled());
        let api = api(&transport);
        create(&cell, &api).await;
        cell.borrow_mut().test_recipient = "me@example.com".to_string();

        send_test(&cell, &api).await;

        let requests = transport.requests();
        assert_eq!(requests[1].path, "/campaign/test");
        assert_eq!(requests[1].query_value("campaign_id"), Some("7"));
        assert_eq!(requests[1].query_value("test_email"), Some("me@example.com"));
        let composer = cell.borrow();
        assert_eq!(composer.test_send_phase(), TestSendPhase::Sent);
        assert_eq!(
            composer.banner(),
            Some(&Banner::success("Test email sent to me@example.com!"))
        );
    }

    #[tokio::test]
    async fn test_failed_recreate_keeps_previous_id() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"id": 5}"#);
        transport.respond(500, r#"{"detail": "database unavailable"}"#);
        let cell = RefCell::new(filled());
        let api = api(&transport);

        create(&cell, &api).await;
        create(&cell, &api).await;

        let composer = cell.borrow();
        assert_eq!(composer.create_phase(), CreatePhase::Failed);
        assert_eq!(composer.campaign_id(), Some(5));
        assert_eq!(
            composer.banner(),
            Some(&Banner::error("Error creating campaign: database unavailable"))
        );
    }
}
