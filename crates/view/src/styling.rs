//! Badge and accent classes for statuses and ratings.

use studio_core::types::{
    CampaignStatus, CreativeKind, CreativeStatus, Impact, MetricKind, PlatformRating,
    ScheduleHintKind,
};

pub fn campaign_status_badge(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Approved => "bg-green-100 text-green-700",
        CampaignStatus::Running => "bg-blue-100 text-blue-700",
        CampaignStatus::Paused => "bg-yellow-100 text-yellow-700",
        CampaignStatus::Completed => "bg-gray-100 text-gray-700",
    }
}

pub fn creative_status_badge(status: CreativeStatus) -> &'static str {
    match status {
        CreativeStatus::Approved => "bg-green-100 text-green-700",
        CreativeStatus::Pending => "bg-yellow-100 text-yellow-700",
        CreativeStatus::Rejected => "bg-red-100 text-red-700",
    }
}

/// Placeholder icon and colour for creatives without a thumbnail.
pub fn creative_placeholder(kind: CreativeKind) -> (&'static str, &'static str) {
    match kind {
        CreativeKind::Video => ("video", "text-blue-500"),
        CreativeKind::Text => ("file-text", "text-purple-500"),
        CreativeKind::Image => ("image", "text-green-500"),
    }
}

/// Border/background of a suggestion card.
pub fn impact_card(impact: Impact) -> &'static str {
    match impact {
        Impact::High => "border-red-500 bg-red-50",
        Impact::Medium => "border-yellow-500 bg-yellow-50",
        Impact::Low => "border-blue-500 bg-blue-50",
    }
}

pub fn impact_badge(impact: Impact) -> &'static str {
    match impact {
        Impact::High => "bg-red-100 text-red-700",
        Impact::Medium => "bg-yellow-100 text-yellow-700",
        Impact::Low => "bg-blue-100 text-blue-700",
    }
}

pub fn rating_badge(rating: PlatformRating) -> &'static str {
    match rating {
        PlatformRating::Excellent => "bg-green-100 text-green-700",
        PlatformRating::Good => "bg-blue-100 text-blue-700",
    }
}

pub fn change_badge(positive: bool) -> &'static str {
    if positive {
        "text-green-700 bg-green-100"
    } else {
        "text-red-700 bg-red-100"
    }
}

/// Icon name and colour family of a headline metric.
pub fn metric_icon(kind: MetricKind) -> (&'static str, &'static str) {
    match kind {
        MetricKind::Impressions => ("eye", "blue"),
        MetricKind::Clicks => ("mouse-pointer", "green"),
        MetricKind::Ctr => ("trending-up", "green"),
        MetricKind::Spend => ("dollar-sign", "orange"),
    }
}

/// Icon, icon colour and row background of a scheduling hint.
pub fn schedule_hint_style(kind: ScheduleHintKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        ScheduleHintKind::LaunchWindow => ("thumbs-up", "text-green-600", "bg-green-50"),
        ScheduleHintKind::PeakHours => ("clock", "text-blue-600", "bg-blue-50"),
        ScheduleHintKind::Conflicts => ("target", "text-purple-600", "bg-purple-50"),
    }
}
