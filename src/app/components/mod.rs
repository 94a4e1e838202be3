//! Shared UI components: the guard layout, the application shell and
//! presentational pieces.

pub mod banner;
pub mod gate;
pub mod layout;
pub mod sidebar;
pub mod stats_card;
pub mod topbar;

pub use banner::BannerView;
pub use gate::Gate;
pub use layout::{Shell, CUSTOM_STYLES};
pub use sidebar::Sidebar;
pub use stats_card::StatsCard;
pub use topbar::Topbar;
