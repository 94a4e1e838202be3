//! Campaign list with per-row broadcast.
//!
//! Sending is irreversible, so a row goes through an explicit confirmation
//! step before any request is made. Each row tracks its own in-flight send;
//! there is no global lock and no queue.

use std::collections::HashSet;

use tracing::{info, warn};

use super::{Banner, LoadState, StateCell};
use crate::api::{ApiClient, ApiError, CampaignId, CampaignSummary, SendReport};

pub const CONFIRM_PROMPT: &str =
    "Are you sure you want to send this campaign to all active contacts?";

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignBoard {
    campaigns: LoadState<Vec<CampaignSummary>>,
    /// Row whose confirmation prompt is open. One at a time.
    pending_confirmation: Option<CampaignId>,
    in_flight: HashSet<CampaignId>,
    banner: Option<Banner>,
    load_attempt: u64,
}

impl Default for CampaignBoard {
    fn default() -> Self {
        Self {
            campaigns: LoadState::Loading,
            pending_confirmation: None,
            in_flight: HashSet::new(),
            banner: None,
            load_attempt: 0,
        }
    }
}

impl CampaignBoard {
    pub fn campaigns(&self) -> &LoadState<Vec<CampaignSummary>> {
        &self.campaigns
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn pending_confirmation(&self) -> Option<CampaignId> {
        self.pending_confirmation
    }

    pub fn is_sending(&self, id: CampaignId) -> bool {
        self.in_flight.contains(&id)
    }

    /// Start a (re)load. Any banner from an earlier action is dismissed.
    pub fn begin_load(&mut self) -> u64 {
        self.load_attempt += 1;
        self.campaigns = LoadState::Loading;
        self.banner = None;
        self.load_attempt
    }

    pub fn finish_load(
        &mut self,
        attempt: u64,
        result: Result<Vec<CampaignSummary>, ApiError>,
    ) -> bool {
        if attempt != self.load_attempt {
            return false;
        }
        self.campaigns = result.into();
        true
    }

    /// Open the confirmation prompt for a row. Replaces any other open prompt.
    pub fn request_send(&mut self, id: CampaignId) {
        if self.is_sending(id) {
            return;
        }
        self.pending_confirmation = Some(id);
    }

    /// Dismiss the prompt. No request is made.
    pub fn cancel_send(&mut self) {
        if let Some(id) = self.pending_confirmation.take() {
            info!(campaign_id = id, "Broadcast cancelled");
        }
    }

    /// The user confirmed. Returns the row to send, or `None` if no prompt
    /// was open for it.
    pub fn confirm_send(&mut self, id: CampaignId) -> Option<CampaignId> {
        if self.pending_confirmation != Some(id) || self.is_sending(id) {
            return None;
        }
        self.pending_confirmation = None;
        self.in_flight.insert(id);
        self.banner = None;
        Some(id)
    }

    pub fn finish_send(&mut self, id: CampaignId, result: Result<SendReport, ApiError>) -> bool {
        if !self.in_flight.remove(&id) {
            return false;
        }
        self.banner = Some(match result {
            Ok(report) => Banner::success(format!(
                "Campaign sent successfully! Total sent: {}",
                report.total_sent
            )),
            Err(err) => Banner::error(format!("Failed to send campaign: {}", err.user_message())),
        });
        true
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }
}

/// (Re)load the campaign list.
pub async fn load<C: StateCell<CampaignBoard>>(cell: &C, api: &ApiClient) {
    let attempt = cell.update(CampaignBoard::begin_load);
    let result = api.list_campaigns().await;
    if let Err(err) = &result {
        warn!(error = %err, "Failed to load campaigns");
    }
    cell.update(|board| board.finish_load(attempt, result));
}

/// Broadcast a campaign whose confirmation prompt is open.
pub async fn confirm_send<C: StateCell<CampaignBoard>>(cell: &C, api: &ApiClient, id: CampaignId) {
    let Some(id) = cell.update(|board| board.confirm_send(id)) else {
        return;
    };

    info!(campaign_id = id, "Broadcast confirmed");
    let result = api.send_campaign(id).await;
    if let Err(err) = &result {
        warn!(campaign_id = id, error = %err, "Broadcast failed");
    }
    cell.update(|board| board.finish_send(id, result));
}
