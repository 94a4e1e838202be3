//! Page components, one per route.
//!
//! Pages reach the backend through the `ApiClient` context and keep their
//! state in a workflow value held by a signal.

mod campaign_create;
mod campaign_detail;
mod campaigns;
mod contacts;
mod dashboard;
mod login;
mod misconfigured;
mod not_found;

pub use campaign_create::CampaignCreate;
pub use campaign_detail::CampaignDetail;
pub use campaigns::Campaigns;
pub use contacts::Contacts;
pub use dashboard::Dashboard;
pub use login::Login;
pub use misconfigured::Misconfigured;
pub use not_found::NotFound;
