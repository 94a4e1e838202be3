//! Campaign backend API client.
//!
//! Every call goes through [`ApiClient::execute`], which attaches the bearer
//! token when one exists and acts as the single response interceptor:
//! an authorization failure on a call that carried a token clears the session.

pub mod error;
pub mod transport;
pub mod types;

use std::rc::Rc;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

pub use error::ApiError;
pub use transport::{
    ApiRequest, ApiResponse, FormField, Method, ReqwestTransport, RequestBody, Transport,
    TransportError,
};
pub use types::{
    CampaignCreated, CampaignId, CampaignStats, CampaignSummary, DashboardStats, LoginResponse,
    SendReport, SessionIdentity, UploadOutcome,
};

use crate::session::{SessionStore, SessionToken};
use crate::workflow::campaign::CampaignDraft;
use crate::workflow::upload::SelectedFile;

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Network(err.0)
    }
}

/// Client shared by every page through context.
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn Transport>,
    session: Rc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn Transport>, session: Rc<dyn SessionStore>) -> Self {
        Self { transport, session }
    }

    /// Send a request and interpret the status.
    pub async fn execute(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        request.bearer = self.session.get();
        let authenticated = request.bearer.is_some();
        let method = request.method.as_str();
        let path = request.path.clone();

        debug!(method, path = %path, authenticated, "API request");

        let response = self.transport.execute(request).await.map_err(|e| {
            warn!(method, path = %path, error = %e, "API request failed to reach server");
            ApiError::from(e)
        })?;

        if response.is_success() {
            if let Some(message) = error::embedded_error(&response.body) {
                warn!(path = %path, status = response.status, %message, "API reported failure in success body");
                return Err(ApiError::Server {
                    status: response.status,
                    message,
                });
            }
            return Ok(response);
        }

        let detail = error::extract_detail(&response.body);

        if matches!(response.status, 401 | 403) {
            if authenticated {
                warn!(path = %path, status = response.status, "Session rejected by server, clearing token");
                self.session.clear();
            }
            let message = detail
                .or_else(|| authenticated.then(|| error::SESSION_EXPIRED_MESSAGE.to_string()))
                .unwrap_or_default();
            return Err(ApiError::Authorization(message));
        }

        warn!(path = %path, status = response.status, detail = ?detail, "API error response");
        Err(ApiError::Server {
            status: response.status,
            message: detail.unwrap_or_else(|| error::GENERIC_SERVER_MESSAGE.to_string()),
        })
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let response = self.execute(request).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Server {
            status: response.status,
            message: format!("Unexpected response from server: {}", e),
        })
    }

    /// `POST /login`. The caller stores the token.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionToken, ApiError> {
        let request = ApiRequest::post("/login").multipart(vec![
            FormField::Text {
                name: "email".to_string(),
                value: email.to_string(),
            },
            FormField::Text {
                name: "password".to_string(),
                value: password.to_string(),
            },
        ]);
        let response: LoginResponse = self.fetch_json(request).await?;
        let token = response.into_token().ok_or_else(|| ApiError::Server {
            status: 200,
            message: "Login response did not include a token".to_string(),
        })?;
        info!(email, "Logged in");
        Ok(token)
    }

    /// `GET /verify`
    pub async fn verify_session(&self) -> Result<SessionIdentity, ApiError> {
        self.fetch_json(ApiRequest::get("/verify")).await
    }

    /// `POST /contacts/upload` with the CSV as multipart field `file`.
    pub async fn upload_contacts(&self, file: &SelectedFile) -> Result<UploadOutcome, ApiError> {
        info!(file = %file.name, bytes = file.size, "Uploading contacts CSV");
        let request = ApiRequest::post("/contacts/upload").multipart(vec![FormField::File {
            name: "file".to_string(),
            file_name: file.name.clone(),
            content_type: "text/csv".to_string(),
            bytes: file.bytes.clone(),
        }]);
        let outcome: UploadOutcome = self.fetch_json(request).await?;
        info!(
            inserted = outcome.inserted,
            skipped = outcome.skipped,
            total = outcome.total,
            "Contacts uploaded"
        );
        Ok(outcome)
    }

    /// `GET /stats/dashboard`
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.fetch_json(ApiRequest::get("/stats/dashboard")).await
    }

    /// `POST /campaign/create` with the draft as query parameters.
    pub async fn create_campaign(&self, draft: &CampaignDraft) -> Result<CampaignId, ApiError> {
        let request = ApiRequest::post("/campaign/create")
            .query("subject", &draft.subject)
            .query("sender", &draft.sender)
            .query("html", &draft.html_body);
        let created: CampaignCreated = self.fetch_json(request).await?;
        info!(campaign_id = created.id, "Campaign created");
        Ok(created.id)
    }

    /// `POST /campaign/test`
    pub async fn send_test(&self, campaign_id: CampaignId, test_email: &str) -> Result<(), ApiError> {
        let request = ApiRequest::post("/campaign/test")
            .query("campaign_id", campaign_id)
            .query("test_email", test_email);
        self.execute(request).await?;
        info!(campaign_id, test_email, "Test email sent");
        Ok(())
    }

    /// `GET /campaigns/all`
    pub async fn list_campaigns(&self) -> Result<Vec<CampaignSummary>, ApiError> {
        self.fetch_json(ApiRequest::get("/campaigns/all")).await
    }

    /// `POST /campaign/send`. Broadcasts to every active contact.
    pub async fn send_campaign(&self, campaign_id: CampaignId) -> Result<SendReport, ApiError> {
        let request = ApiRequest::post("/campaign/send").query("campaign_id", campaign_id);
        let report: SendReport = self.fetch_json(request).await?;
        info!(campaign_id, total_sent = report.total_sent, "Campaign broadcast");
        Ok(report)
    }

    /// `GET /stats/campaign/{id}`
    pub async fn campaign_stats(&self, campaign_id: CampaignId) -> Result<CampaignStats, ApiError> {
        self.fetch_json(ApiRequest::get(format!("/stats/campaign/{}", campaign_id)))
            .await
    }
}
