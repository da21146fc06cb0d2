//! The fixture catalog: every campaign and display fixture the studio shows.
//!
//! The catalog is built once at startup and never mutated afterwards; callers
//! share it behind an `Arc`.

use crate::error::{StudioError, StudioResult};
use crate::fixtures;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub campaigns: Vec<Campaign>,
    #[serde(default)]
    pub performance_metrics: Vec<PerformanceMetric>,
    #[serde(default)]
    pub platform_performance: Vec<PlatformPerformance>,
    #[serde(default)]
    pub ai_suggestions: Vec<AiSuggestion>,
    #[serde(default)]
    pub schedule_hints: Vec<ScheduleHint>,
}

impl Catalog {
    /// The built-in demo catalog.
    pub fn builtin() -> Self {
        Self {
            campaigns: fixtures::campaigns(),
            performance_metrics: fixtures::performance_metrics(),
            platform_performance: fixtures::platform_performance(),
            ai_suggestions: fixtures::ai_suggestions(),
            schedule_hints: fixtures::schedule_hints(),
        }
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json(json: &str) -> StudioResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file. Dates that are not `YYYY-MM-DD` fail here.
    pub fn load(path: impl AsRef<Path>) -> StudioResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            campaigns = catalog.campaigns.len(),
            "Catalog loaded from file"
        );
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise fall back to the built-in set.
    pub fn load_or_builtin(path: Option<&str>) -> StudioResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let catalog = Self::builtin();
                info!(campaigns = catalog.campaigns.len(), "Using built-in catalog");
                Ok(catalog)
            }
        }
    }

    pub fn validate(&self) -> StudioResult<()> {
        if self.campaigns.is_empty() {
            return Err(StudioError::Catalog(
                "catalog must contain at least one campaign".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        let mut total_budget: u64 = 0;
        for campaign in &self.campaigns {
            if campaign.id.is_empty() {
                return Err(StudioError::Catalog("campaign id must not be empty".to_string()));
            }
            if !seen.insert(campaign.id.as_str()) {
                return Err(StudioError::Catalog(format!(
                    "duplicate campaign id '{}'",
                    campaign.id
                )));
            }
            total_budget = total_budget.checked_add(campaign.budget).ok_or_else(|| {
                StudioError::Catalog(format!(
                    "total budget overflows at campaign '{}'",
                    campaign.id
                ))
            })?;
        }
        Ok(())
    }

    pub fn campaign(&self, id: &str) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == id)
    }

    pub fn first_campaign(&self) -> Option<&Campaign> {
        self.campaigns.first()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.campaigns.len(), 5);
        assert_eq!(catalog.first_campaign().unwrap().id, "camp-001");
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.campaign("camp-004").unwrap().name, "Holiday Special Promotion");
        assert!(catalog.campaign("camp-999").is_none());
    }

    #[test]
    fn test_json_roundtrip_of_builtin() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
    }

    #[test]
    fn test_rejects_empty_campaign_list() {
        let err = Catalog::from_json(r#"{"campaigns": []}"#).unwrap_err();
        assert!(matches!(err, StudioError::Catalog(_)));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut catalog = Catalog::builtin();
        let dup = catalog.campaigns[0].clone();
        catalog.campaigns.push(dup);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate campaign id 'camp-001'"));
    }

    #[test]
    fn test_rejects_malformed_dates() {
        let json = r#"{
            "campaigns": [{
                "id": "c1",
                "name": "Broken",
                "status": "approved",
                "objective": "x",
                "budget": 10,
                "start_date": "2025-13-45",
                "end_date": "2025-11-15",
                "audience": "everyone"
            }]
        }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, StudioError::Serialization(_)));
    }

    #[test]
    fn test_minimal_campaign_defaults_collections() {
        let json = r#"{
            "campaigns": [{
                "id": "c1",
                "name": "Minimal",
                "status": "paused",
                "objective": "x",
                "budget": 10,
                "start_date": "2025-10-01",
                "end_date": "2025-10-01",
                "audience": "everyone"
            }]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        let campaign = &catalog.campaigns[0];
        assert!(campaign.platforms.is_empty());
        assert!(campaign.creatives.is_empty());
        assert_eq!(campaign.duration_days(), 0);
        assert!(catalog.ai_suggestions.is_empty());
    }

    #[test]
    fn test_rejects_budget_total_overflow() {
        let campaign = |id: &str| {
            format!(
                r#"{{"id": "{id}", "name": "Big", "status": "approved", "objective": "x",
                    "budget": {}, "start_date": "2025-10-01", "end_date": "2025-10-02",
                    "audience": "everyone"}}"#,
                u64::MAX
            )
        };
        let json = format!(r#"{{"campaigns": [{}, {}]}}"#, campaign("c1"), campaign("c2"));
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("total budget overflows at campaign 'c2'"));

        let single = format!(r#"{{"campaigns": [{}]}}"#, campaign("c1"));
        assert!(Catalog::from_json(&single).is_ok());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Catalog::load("/nonexistent/studio-catalog.json").unwrap_err();
        assert!(matches!(err, StudioError::Io(_)));
    }
}
