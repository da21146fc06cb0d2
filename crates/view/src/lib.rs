//! Marketing studio view layer: view state, derived data, and HTML rendering.
//!
//! State lives in the request query string; every render derives filtered
//! campaigns, stats and the selection from it without keeping anything shared.

pub mod calendar;
pub mod filter;
pub mod html;
pub mod render;
pub mod state;
pub mod stats;
pub mod styling;
pub mod theme;
pub mod view_model;

pub use calendar::{CalendarView, PromotionCalendar};
pub use filter::filter_campaigns;
pub use render::render_page;
pub use state::{ExecutionState, StatusFilter, StudioEvent, Tab, ViewParams, ViewState};
pub use stats::CampaignStats;
pub use theme::{ThemeMode, ThemeProvider};
pub use view_model::{StudioView, ViewSnapshot};
