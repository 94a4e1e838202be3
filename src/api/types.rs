//! Wire types exchanged with the campaign backend.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::session::SessionToken;

/// Server-assigned campaign identifier.
pub type CampaignId = i64;

/// `POST /login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl LoginResponse {
    pub fn into_token(self) -> Option<SessionToken> {
        self.token.and_then(SessionToken::new)
    }
}

/// `POST /contacts/upload`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadOutcome {
    #[serde(default)]
    pub total: u64,
    pub inserted: u64,
    #[serde(default)]
    pub skipped: u64,
}

/// `GET /stats/dashboard`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub campaigns: u64,
    #[serde(default)]
    pub contacts: u64,
    #[serde(default)]
    pub active_contacts: u64,
    #[serde(default)]
    pub sent: u64,
    #[serde(default)]
    pub delivered: u64,
    #[serde(default)]
    pub opens: u64,
    #[serde(default)]
    pub clicks: u64,
    /// Percentage, already rounded by the server.
    #[serde(default)]
    pub open_rate: f64,
    #[serde(default)]
    pub click_rate: f64,
}

/// `POST /campaign/create`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CampaignCreated {
    pub id: CampaignId,
}

/// Entry of `GET /campaigns/all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub id: CampaignId,
    pub subject: String,
    pub sender: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl CampaignSummary {
    /// `created_at` as `YYYY-MM-DD HH:MM`.
    ///
    /// The backend emits naive timestamps; offset-aware ones are accepted too.
    /// Unparseable values are shown verbatim.
    pub fn created_display(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.format("%Y-%m-%d %H:%M").to_string());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt.format("%Y-%m-%d %H:%M").to_string());
        }
        Some(raw.to_string())
    }
}

/// `POST /campaign/send`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SendReport {
    pub total_sent: u64,
    #[serde(default)]
    pub total_failed: Option<u64>,
    #[serde(default)]
    pub total_contacts: Option<u64>,
}

/// `GET /stats/campaign/{id}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CampaignStats {
    pub campaign_id: CampaignId,
    #[serde(default)]
    pub sent: u64,
    #[serde(default)]
    pub delivered: u64,
    #[serde(default)]
    pub opens: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub bounces: u64,
    #[serde(default)]
    pub open_rate: f64,
    #[serde(default)]
    pub click_rate: f64,
}

/// `GET /verify`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SessionIdentity {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_outcome_defaults_missing_counts() {
        let outcome: UploadOutcome =
            serde_json::from_str(r#"{"status": "uploaded", "inserted": 3}"#).unwrap();
        assert_eq!(
            outcome,
            UploadOutcome {
                total: 0,
                inserted: 3,
                skipped: 0
            }
        );
    }

    #[test]
    fn test_login_response_without_token() {
        let resp: LoginResponse = serde_json::from_str(r#"{"token": ""}"#).unwrap();
        assert!(resp.into_token().is_none());

        let resp: LoginResponse =
            serde_json::from_str(r#"{"token": "jwt", "token_type": "bearer"}"#).unwrap();
        assert_eq!(resp.into_token().unwrap().as_str(), "jwt");
    }

    #[test]
    fn test_created_display_formats() {
        let mut summary = CampaignSummary {
            id: 1,
            subject: "Hello".to_string(),
            sender: "news@example.com".to_string(),
            created_at: Some("2025-03-04T09:15:42.123456".to_string()),
        };
        assert_eq!(summary.created_display().as_deref(), Some("2025-03-04 09:15"));

        summary.created_at = Some("2025-03-04T09:15:42+00:00".to_string());
        assert_eq!(summary.created_display().as_deref(), Some("2025-03-04 09:15"));

        summary.created_at = Some("yesterday".to_string());
        assert_eq!(summary.created_display().as_deref(), Some("yesterday"));

        summary.created_at = None;
        assert_eq!(summary.created_display(), None);
    }

    #[test]
    fn test_dashboard_stats_partial_body() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"campaigns": 4, "open_rate": 12.5}"#).unwrap();
        assert_eq!(stats.campaigns, 4);
        assert_eq!(stats.contacts, 0);
        assert_eq!(stats.open_rate, 12.5);
    }
}
