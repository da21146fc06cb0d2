//! Studio domain types: campaigns, creatives, and the read-only
//! performance fixtures shown on the dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Campaign ──────────────────────────────────────────────────────────────

/// A marketing campaign as presented in the studio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub status: CampaignStatus,
    pub objective: String,
    /// Whole currency units.
    pub budget: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub platforms: Vec<String>,
    pub audience: String,
    #[serde(default)]
    pub creatives: Vec<Creative>,
}

impl Campaign {
    /// Length of the flight in whole days, rounded up.
    pub fn duration_days(&self) -> i64 {
        crate::duration_days(self.start_date, self.end_date)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Approved,
    Running,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 4] = [
        CampaignStatus::Approved,
        CampaignStatus::Running,
        CampaignStatus::Paused,
        CampaignStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Approved => "approved",
            CampaignStatus::Running => "running",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CampaignStatus::Approved => "Approved",
            CampaignStatus::Running => "Running",
            CampaignStatus::Paused => "Paused",
            CampaignStatus::Completed => "Completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Creative ──────────────────────────────────────────────────────────────

/// A single advertising asset belonging to a campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Creative {
    pub id: String,
    pub kind: CreativeKind,
    pub name: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub status: CreativeStatus,
    #[serde(default)]
    pub performance: Option<CreativePerformance>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CreativeKind {
    Image,
    Video,
    Text,
}

impl CreativeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreativeKind::Image => "image",
            CreativeKind::Video => "video",
            CreativeKind::Text => "text",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CreativeKind::Image => "Image",
            CreativeKind::Video => "Video",
            CreativeKind::Text => "Text",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CreativeStatus {
    Approved,
    Pending,
    Rejected,
}

impl CreativeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreativeStatus::Approved => "approved",
            CreativeStatus::Pending => "pending",
            CreativeStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreativePerformance {
    pub impressions: u64,
    pub clicks: u64,
    pub ctr: f64,
}

// ─── Performance fixtures ──────────────────────────────────────────────────

/// Headline metric card. Values are display strings, not measurements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceMetric {
    pub title: String,
    pub value: String,
    pub change: String,
    pub kind: MetricKind,
}

impl PerformanceMetric {
    pub fn is_positive(&self) -> bool {
        self.change.starts_with('+')
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Impressions,
    Clicks,
    Ctr,
    Spend,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformPerformance {
    pub platform: String,
    pub impressions: String,
    pub clicks: String,
    pub ctr: String,
    pub spend: String,
    pub roas: String,
    pub rating: PlatformRating,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlatformRating {
    Excellent,
    Good,
}

impl PlatformRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformRating::Excellent => "excellent",
            PlatformRating::Good => "good",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiSuggestion {
    pub id: String,
    pub category: SuggestionCategory,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub action: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    Optimization,
    Creative,
    Timing,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        }
    }
}

/// Scheduling recommendation shown beside the campaign dates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleHint {
    pub kind: ScheduleHintKind,
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleHintKind {
    LaunchWindow,
    PeakHours,
    Conflicts,
}
