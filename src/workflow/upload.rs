//! Contact CSV upload.
//!
//! `Idle -> Ready -> Uploading -> Succeeded | Failed`. A success clears the
//! selection but keeps the outcome on screen until the next attempt starts;
//! a failure keeps the selection for a retry.

use tracing::{info, warn};

use super::{Banner, StateCell};
use crate::api::{ApiClient, ApiError, UploadOutcome};

pub const NO_FILE_MESSAGE: &str = "Please select a CSV file first";

/// A CSV picked in the file input, read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            bytes,
        }
    }

    /// Size in kilobytes with two decimals, e.g. `1.50 KB`.
    pub fn size_label(&self) -> String {
        format!("{:.2} KB", self.size as f64 / 1024.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    Ready,
    Uploading,
    Succeeded,
    Failed,
}

/// Issued by [`UploadWorkflow::begin`]; must be handed back to `finish`.
#[derive(Debug, Clone)]
pub struct UploadTicket {
    pub attempt: u64,
    pub file: SelectedFile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadWorkflow {
    phase: UploadPhase,
    selected: Option<SelectedFile>,
    outcome: Option<UploadOutcome>,
    banner: Option<Banner>,
    attempt: u64,
}

impl Default for UploadWorkflow {
    fn default() -> Self {
        Self {
            phase: UploadPhase::Idle,
            selected: None,
            outcome: None,
            banner: None,
            attempt: 0,
        }
    }
}

impl UploadWorkflow {
    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn outcome(&self) -> Option<UploadOutcome> {
        self.outcome
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.phase == UploadPhase::Uploading
    }

    /// Submit is offered only with a file and no upload in flight.
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.is_uploading()
    }

    /// A file was picked. Ignored while an upload is in flight.
    pub fn select_file(&mut self, file: SelectedFile) {
        if self.is_uploading() {
            return;
        }
        self.selected = Some(file);
        self.phase = UploadPhase::Ready;
    }

    /// Reading the picked file failed before it could be selected.
    pub fn reject_file(&mut self, reason: &str) {
        if self.is_uploading() {
            return;
        }
        self.banner = Some(Banner::error(format!("Could not read the selected file: {}", reason)));
    }

    /// Start an attempt. Rejects without a file or while uploading.
    pub fn begin(&mut self) -> Result<UploadTicket, ApiError> {
        if self.is_uploading() {
            return Err(ApiError::Validation("An upload is already in progress".to_string()));
        }
        let Some(file) = self.selected.clone() else {
            self.banner = Some(Banner::error(NO_FILE_MESSAGE));
            return Err(ApiError::Validation(NO_FILE_MESSAGE.to_string()));
        };

        self.attempt += 1;
        self.phase = UploadPhase::Uploading;
        self.outcome = None;
        self.banner = None;
        Ok(UploadTicket {
            attempt: self.attempt,
            file,
        })
    }

    /// Apply the response for `attempt`. Returns false if it was stale.
    pub fn finish(&mut self, attempt: u64, result: Result<UploadOutcome, ApiError>) -> bool {
        if attempt != self.attempt || !self.is_uploading() {
            return false;
        }
        match result {
            Ok(outcome) => {
                self.outcome = Some(outcome);
                self.banner = Some(Banner::success("Uploaded successfully!"));
                self.selected = None;
                self.phase = UploadPhase::Succeeded;
            }
            Err(err) => {
                self.banner = Some(Banner::error(format!("Upload failed: {}", err.user_message())));
                self.phase = UploadPhase::Failed;
            }
        }
        true
    }
}

/// Run one upload attempt against the API.
pub async fn submit<C: StateCell<UploadWorkflow>>(cell: &C, api: &ApiClient) {
    let ticket = match cell.update(UploadWorkflow::begin) {
        Ok(ticket) => ticket,
        Err(err) => {
            info!(reason = %err, "Upload not started");
            return;
        }
    };

    let result = api.upload_contacts(&ticket.file).await;
    if let Err(err) = &result {
        warn!(file = %ticket.file.name, error = %err, "Contact upload failed");
    }
    cell.update(|workflow| workflow.finish(ticket.attempt, result));
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

    fn csv() -> SelectedFile {
        SelectedFile::new("contacts.csv", b"email,name\na@example.com,A\n".to_vec())
    }

    #[tokio::test]
    async fn test_submit_without_file_makes_no_request() {
        let transport = MockTransport::new();
        let cell = RefCell::new(UploadWorkflow::default());

        submit(&cell, &api(&transport)).await;

        assert_eq!(transport.call_count(), 0);
        let workflow = cell.borrow();
        assert_eq!(workflow.phase(), UploadPhase::Idle);
        assert_eq!(workflow.banner(), Some(&Banner::error(NO_FILE_MESSAGE)));
    }

    #[tokio::test]
    async fn test_successful_upload_shows_counts_and_resets_selection() {
        let transport = MockTransport::new();
        transport.respond(
            200,
            r#"{"status": "uploaded", "total": 10, "inserted": 8, "skipped": 2}"#,
        );
        let cell = RefCell::new(UploadWorkflow::default());
        cell.borrow_mut().select_file(csv());

        submit(&cell, &api(&transport)).await;

        let workflow = cell.borrow();
        assert_eq!(
            workflow.outcome(),
            Some(UploadOutcome {
                total: 10,
                inserted: 8,
                skipped: 2
            })
        );
        assert!(!workflow.banner().unwrap().is_error());
        assert!(workflow.selected().is_none());
        assert_eq!(workflow.phase(), UploadPhase::Succeeded);

        let request = &transport.requests()[0];
        assert_eq!(request.path, "/contacts/upload");
    }

    #[tokio::test]
    async fn test_network_failure_keeps_selection() {
        let transport = MockTransport::new();
        transport.fail("connection reset");
        let cell = RefCell::new(UploadWorkflow::default());
        cell.borrow_mut().select_file(csv());

        submit(&cell, &api(&transport)).await;

        let workflow = cell.borrow();
        assert_eq!(workflow.phase(), UploadPhase::Failed);
        assert!(workflow.banner().unwrap().is_error());
        assert_eq!(workflow.selected(), Some(&csv()));
        assert!(workflow.outcome().is_none());
    }

    #[test]
    fn test_outcome_visible_until_next_attempt() {
        let mut workflow = UploadWorkflow::default();
        workflow.select_file(csv());
        let ticket = workflow.begin().unwrap();
        let outcome = UploadOutcome {
            total: 1,
            inserted: 1,
            skipped: 0,
        };
        workflow.finish(ticket.attempt, Ok(outcome));

        workflow.select_file(csv());
        assert_eq!(workflow.phase(), UploadPhase::Ready);
        assert_eq!(workflow.outcome(), Some(outcome));

        workflow.begin().unwrap();
        assert!(workflow.outcome().is_none());
    }

    #[test]
    fn test_begin_rejected_while_uploading() {
        let mut workflow = UploadWorkflow::default();
        workflow.select_file(csv());
        workflow.begin().unwrap();

        assert!(!workflow.can_submit());
        assert!(matches!(workflow.begin(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_stale_completion_ignored() {
        let mut workflow = UploadWorkflow::default();
        workflow.select_file(csv());
        let first = workflow.begin().unwrap();
        workflow.finish(first.attempt, Err(ApiError::Network("timeout".to_string())));

        workflow.begin().unwrap();
        let applied = workflow.finish(
            first.attempt,
            Ok(UploadOutcome {
                total: 5,
                inserted: 5,
                skipped: 0,
            }),
        );

        assert!(!applied);
        assert!(workflow.is_uploading());
        assert!(workflow.outcome().is_none());
    }

    #[test]
    fn test_size_label() {
        let file = SelectedFile::new("big.csv", vec![0u8; 1536]);
        assert_eq!(file.size_label(), "1.50 KB");
    }
}
