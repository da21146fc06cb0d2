//! Derived view: everything a render needs, recomputed from the state and
//! the catalog on every request.

use crate::filter::filter_campaigns;
use crate::state::{ExecutionState, Tab, ViewState};
use crate::stats::CampaignStats;
use serde::Serialize;
use studio_core::types::Campaign;
use studio_core::Catalog;

pub struct StudioView<'a> {
    pub state: &'a ViewState,
    pub catalog: &'a Catalog,
    pub filtered: Vec<&'a Campaign>,
    pub stats: CampaignStats,
    pub selected: Option<&'a Campaign>,
}

impl<'a> StudioView<'a> {
    pub fn derive(state: &'a ViewState, catalog: &'a Catalog) -> Self {
        Self {
            state,
            catalog,
            filtered: filter_campaigns(&catalog.campaigns, state.status_filter, &state.query),
            stats: CampaignStats::compute(&catalog.campaigns),
            selected: state.selected_id().and_then(|id| catalog.campaign(id)),
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            tab: self.state.tab,
            status_filter: self.state.status_filter.as_str().to_string(),
            query: self.state.query.clone(),
            execution: self.state.execution,
            selected_campaign: self.selected.map(|c| SelectedCampaign {
                id: c.id.clone(),
                name: c.name.clone(),
                duration_days: c.duration_days(),
                creative_ids: c.creatives.iter().map(|cr| cr.id.clone()).collect(),
            }),
            filtered_campaign_ids: self.filtered.iter().map(|c| c.id.clone()).collect(),
            stats: self.stats.clone(),
        }
    }
}

/// JSON shape of `GET /api/v1/studio/view`.
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub tab: Tab,
    pub status_filter: String,
    pub query: String,
    pub execution: ExecutionState,
    pub selected_campaign: Option<SelectedCampaign>,
    pub filtered_campaign_ids: Vec<String>,
    pub stats: CampaignStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectedCampaign {
    pub id: String,
    pub name: String,
    pub duration_days: i64,
    pub creative_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{StatusFilter, StudioEvent};
    use studio_core::types::CampaignStatus;

    #[test]
    fn test_initial_snapshot() {
        let catalog = Catalog::builtin();
        let state = ViewState::initial(&catalog);
        let snapshot = StudioView::derive(&state, &catalog).snapshot();
        let selected = snapshot.selected_campaign.unwrap();
        assert_eq!(selected.id, "camp-001");
        assert_eq!(selected.duration_days, 31);
        assert_eq!(selected.creative_ids, vec!["cr-001", "cr-002", "cr-003", "cr-004"]);
        assert_eq!(snapshot.filtered_campaign_ids.len(), 5);
    }

    #[test]
    fn test_stats_ignore_filters() {
        let catalog = Catalog::builtin();
        let unfiltered = ViewState::initial(&catalog);
        let filtered = unfiltered
            .with(StudioEvent::FilterStatus(StatusFilter::Only(CampaignStatus::Completed)), &catalog)
            .with(StudioEvent::Search("xyz".into()), &catalog);
        let a = StudioView::derive(&unfiltered, &catalog);
        let b = StudioView::derive(&filtered, &catalog);
        assert!(b.filtered.is_empty());
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn test_selection_survives_filter() {
        let catalog = Catalog::builtin();
        let state = ViewState::initial(&catalog)
            .with(StudioEvent::FilterStatus(StatusFilter::Only(CampaignStatus::Running)), &catalog);
        let view = StudioView::derive(&state, &catalog);
        assert_eq!(view.filtered.len(), 1);
        assert_eq!(view.selected.map(|c| c.id.as_str()), Some("camp-001"));
    }

    #[test]
    fn test_snapshot_serializes_enums_as_strings() {
        let catalog = Catalog::builtin();
        let state = ViewState::initial(&catalog).with(StudioEvent::ToggleExecution, &catalog);
        let json = serde_json::to_value(StudioView::derive(&state, &catalog).snapshot()).unwrap();
        assert_eq!(json["tab"], "overview");
        assert_eq!(json["execution"], "running");
        assert_eq!(json["status_filter"], "all");
        assert_eq!(json["stats"]["total_budget"], 188_000);
    }
}
