//! View state for the studio screen and the events that drive it.
//!
//! A `ViewState` is owned by exactly one page render. Interactions are
//! expressed as `StudioEvent`s; links on the page carry the state that
//! results from applying their event, encoded as a query string.

use serde::{Deserialize, Serialize};
use std::fmt;
use studio_core::types::CampaignStatus;
use studio_core::Catalog;
use tracing::{debug, warn};

// ─── Tabs ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Overview,
    Scheduler,
    Execution,
    Performance,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Scheduler, Tab::Execution, Tab::Performance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Scheduler => "scheduler",
            Tab::Execution => "execution",
            Tab::Performance => "performance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Campaign Overview",
            Tab::Scheduler => "Campaign Scheduler",
            Tab::Execution => "Run Campaign",
            Tab::Performance => "Performance Monitor",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

// ─── Status filter ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CampaignStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: CampaignStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Status",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(StatusFilter::All);
        }
        CampaignStatus::parse(value).map(StatusFilter::Only)
    }

    /// Every selectable option, in dropdown order.
    pub fn options() -> impl Iterator<Item = StatusFilter> {
        std::iter::once(StatusFilter::All).chain(CampaignStatus::ALL.into_iter().map(StatusFilter::Only))
    }
}

// ─── Execution toggle ──────────────────────────────────────────────────────

/// Session-level launch switch. Independent of any campaign's own status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionState {
    #[default]
    Paused,
    Running,
}

impl ExecutionState {
    pub fn toggled(self) -> Self {
        match self {
            ExecutionState::Paused => ExecutionState::Running,
            ExecutionState::Running => ExecutionState::Paused,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, ExecutionState::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionState::Paused => "paused",
            ExecutionState::Running => "running",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "paused" => Some(ExecutionState::Paused),
            "running" => Some(ExecutionState::Running),
            _ => None,
        }
    }
}

impl fmt::Display for ExecutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Events ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudioEvent {
    SelectTab(Tab),
    Search(String),
    FilterStatus(StatusFilter),
    SelectCampaign(String),
    ToggleExecution,
}

// ─── Request parameters ────────────────────────────────────────────────────

/// Raw query parameters of a studio page request. Every field is optional
/// and unrecognised values fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewParams {
    pub tab: Option<String>,
    pub q: Option<String>,
    pub status: Option<String>,
    pub campaign: Option<String>,
    pub execution: Option<String>,
    pub theme: Option<String>,
}

impl ViewParams {
    /// Collect raw query pairs. A repeated key keeps its last value and
    /// unknown keys are ignored, so one bad pair never drops the others.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "tab" => &mut params.tab,
                "q" => &mut params.q,
                "status" => &mut params.status,
                "campaign" => &mut params.campaign,
                "execution" => &mut params.execution,
                "theme" => &mut params.theme,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        params
    }
}

// ─── View state ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub tab: Tab,
    pub status_filter: StatusFilter,
    pub query: String,
    selected: Option<String>,
    pub execution: ExecutionState,
}

impl ViewState {
    /// State on first mount: overview tab, no filters, execution paused, and
    /// the first catalog campaign selected.
    pub fn initial(catalog: &Catalog) -> Self {
        Self {
            tab: Tab::default(),
            status_filter: StatusFilter::default(),
            query: String::new(),
            selected: catalog.first_campaign().map(|c| c.id.clone()),
            execution: ExecutionState::default(),
        }
    }

    /// Rebuild the state a link encoded. Returns the state and whether a
    /// requested campaign had to be replaced by the default selection.
    pub fn from_params(params: &ViewParams, catalog: &Catalog) -> (Self, bool) {
        let mut state = Self::initial(catalog);
        if let Some(tab) = params.tab.as_deref() {
            match Tab::parse(tab) {
                Some(t) => state.tab = t,
                None => debug!(tab, "Unknown tab, using default"),
            }
        }
        if let Some(status) = params.status.as_deref() {
            match StatusFilter::parse(status) {
                Some(f) => state.status_filter = f,
                None => debug!(status, "Unknown status filter, using default"),
            }
        }
        if let Some(q) = params.q.as_deref() {
            state.query = q.to_string();
        }
        if let Some(execution) = params.execution.as_deref() {
            match ExecutionState::parse(execution) {
                Some(e) => state.execution = e,
                None => debug!(execution, "Unknown execution state, using default"),
            }
        }
        let mut fell_back = false;
        if let Some(id) = params.campaign.as_deref() {
            if !state.select(id, catalog) {
                warn!(campaign = id, "Requested campaign not in catalog, keeping default selection");
                fell_back = true;
            }
        }
        (state, fell_back)
    }

    /// Apply one interaction. Data in the catalog is never touched.
    pub fn apply(&mut self, event: StudioEvent, catalog: &Catalog) {
        match event {
            StudioEvent::SelectTab(tab) => self.tab = tab,
            StudioEvent::Search(query) => self.query = query,
            StudioEvent::FilterStatus(filter) => self.status_filter = filter,
            StudioEvent::SelectCampaign(id) => {
                if !self.select(&id, catalog) {
                    warn!(campaign = %id, "Ignoring selection of unknown campaign");
                }
            }
            StudioEvent::ToggleExecution => self.execution = self.execution.toggled(),
        }
    }

    /// Copy of this state with `event` applied.
    pub fn with(&self, event: StudioEvent, catalog: &Catalog) -> Self {
        let mut next = self.clone();
        next.apply(event, catalog);
        next
    }

    fn select(&mut self, id: &str, catalog: &Catalog) -> bool {
        match catalog.campaign(id) {
            Some(campaign) => {
                self.selected = Some(campaign.id.clone());
                true
            }
            None => false,
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Encode as a query string (`?tab=...`), optionally pinning a theme.
    pub fn to_query(&self, theme: Option<&str>) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.append_pair("tab", self.tab.as_str());
        if !self.query.is_empty() {
            query.append_pair("q", &self.query);
        }
        query.append_pair("status", self.status_filter.as_str());
        if let Some(id) = &self.selected {
            query.append_pair("campaign", id);
        }
        query.append_pair("execution", self.execution.as_str());
        if let Some(theme) = theme {
            query.append_pair("theme", theme);
        }
        format!("?{}", query.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn test_initial_selects_first_campaign() {
        let state = ViewState::initial(&catalog());
        assert_eq!(state.selected_id(), Some("camp-001"));
        assert_eq!(state.tab, Tab::Overview);
        assert_eq!(state.execution, ExecutionState::Paused);
        assert_eq!(state.status_filter, StatusFilter::All);
    }

    #[test]
    fn test_empty_catalog_has_no_selection() {
        let mut empty = catalog();
        empty.campaigns.clear();
        assert_eq!(ViewState::initial(&empty).selected_id(), None);
    }

    #[test]
    fn test_toggle_alternates_strictly() {
        let catalog = catalog();
        let before = catalog.clone();
        let mut state = ViewState::initial(&catalog);
        let mut seen = Vec::new();
        for _ in 0..4 {
            state.apply(StudioEvent::ToggleExecution, &catalog);
            seen.push(state.execution);
        }
        assert_eq!(
            seen,
            vec![
                ExecutionState::Running,
                ExecutionState::Paused,
                ExecutionState::Running,
                ExecutionState::Paused
            ]
        );
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_select_unknown_campaign_keeps_selection() {
        let catalog = catalog();
        let mut state = ViewState::initial(&catalog);
        state.apply(StudioEvent::SelectCampaign("camp-003".into()), &catalog);
        assert_eq!(state.selected_id(), Some("camp-003"));
        state.apply(StudioEvent::SelectCampaign("nope".into()), &catalog);
        assert_eq!(state.selected_id(), Some("camp-003"));
    }

    #[test]
    fn test_from_params_parses_everything() {
        let params = ViewParams {
            tab: Some("execution".into()),
            q: Some("sale".into()),
            status: Some("paused".into()),
            campaign: Some("camp-004".into()),
            execution: Some("running".into()),
            theme: None,
        };
        let (state, fell_back) = ViewState::from_params(&params, &catalog());
        assert!(!fell_back);
        assert_eq!(state.tab, Tab::Execution);
        assert_eq!(state.query, "sale");
        assert_eq!(state.status_filter, StatusFilter::Only(CampaignStatus::Paused));
        assert_eq!(state.selected_id(), Some("camp-004"));
        assert!(state.execution.is_running());
    }

    #[test]
    fn test_from_params_falls_back_on_garbage() {
        let params = ViewParams {
            tab: Some("reports".into()),
            status: Some("archived".into()),
            campaign: Some("camp-404".into()),
            execution: Some("launching".into()),
            ..Default::default()
        };
        let (state, fell_back) = ViewState::from_params(&params, &catalog());
        assert!(fell_back);
        assert_eq!(state, ViewState::initial(&catalog()));
    }

    #[test]
    fn test_query_roundtrip() {
        let catalog = catalog();
        let state = ViewState::initial(&catalog)
            .with(StudioEvent::SelectTab(Tab::Scheduler), &catalog)
            .with(StudioEvent::Search("Q4 & more".into()), &catalog)
            .with(StudioEvent::SelectCampaign("camp-002".into()), &catalog);
        let query = state.to_query(Some("dark"));
        assert!(query.starts_with("?tab=scheduler&q=Q4+%26+more"));

        let parsed = ViewParams::from_pairs(url::form_urlencoded::parse(query[1..].as_bytes()));
        assert_eq!(parsed.theme.as_deref(), Some("dark"));
        let (back, _) = ViewState::from_params(&parsed, &catalog);
        assert_eq!(back, state);
    }

    #[test]
    fn test_repeated_key_keeps_last_value_and_others() {
        let params = ViewParams::from_pairs([
            ("campaign", "camp-004"),
            ("q", "a"),
            ("q", "b"),
            ("utm_source", "mail"),
            ("execution", "running"),
        ]);
        assert_eq!(params.q.as_deref(), Some("b"));
        let (state, fell_back) = ViewState::from_params(&params, &catalog());
        assert!(!fell_back);
        assert_eq!(state.selected_id(), Some("camp-004"));
        assert_eq!(state.query, "b");
        assert!(state.execution.is_running());
    }

    #[test]
    fn test_unknown_execution_keeps_other_params() {
        let params = ViewParams::from_pairs([("tab", "performance"), ("execution", "warp")]);
        let (state, _) = ViewState::from_params(&params, &catalog());
        assert_eq!(state.tab, Tab::Performance);
        assert_eq!(state.execution, ExecutionState::Paused);
    }

    #[test]
    fn test_status_filter_options_order() {
        let labels: Vec<_> = StatusFilter::options().map(|f| f.as_str()).collect();
        assert_eq!(labels, vec!["all", "approved", "running", "paused", "completed"]);
    }
}
