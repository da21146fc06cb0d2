//! Built-in demo data for the studio.

use crate::types::*;
use chrono::NaiveDate;

const THUMB_BASE: &str = "https://images.pexels.com/photos";
const THUMB_QUERY: &str = "auto=compress&cs=tinysrgb&w=400";

fn thumb(photo_id: u32) -> Option<String> {
    Some(format!(
        "{THUMB_BASE}/{photo_id}/pexels-photo-{photo_id}.jpeg?{THUMB_QUERY}"
    ))
}

const fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => date,
        None => panic!("invalid fixture date"),
    }
}

/// Start and end date of each fixture campaign. Evaluated at compile time, so
/// an impossible date fails the build.
const SCHEDULES: [(&str, NaiveDate, NaiveDate); 5] = [
    ("camp-001", ymd(2025, 10, 15), ymd(2025, 11, 15)),
    ("camp-002", ymd(2025, 10, 1), ymd(2025, 12, 31)),
    ("camp-003", ymd(2025, 10, 20), ymd(2025, 11, 10)),
    ("camp-004", ymd(2025, 11, 1), ymd(2025, 12, 25)),
    ("camp-005", ymd(2025, 9, 1), ymd(2025, 9, 30)),
];

fn creative(id: &str, kind: CreativeKind, name: &str, thumbnail: Option<String>) -> Creative {
    Creative {
        id: id.to_string(),
        kind,
        name: name.to_string(),
        thumbnail,
        status: CreativeStatus::Approved,
        performance: None,
    }
}

fn platforms(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "camp-001".to_string(),
            name: "Summer Sale 2025".to_string(),
            status: CampaignStatus::Approved,
            objective: "Drive conversions and increase sales".to_string(),
            budget: 50_000,
            start_date: SCHEDULES[0].1,
            end_date: SCHEDULES[0].2,
            platforms: platforms(&["Facebook", "Instagram", "Google Ads", "LinkedIn"]),
            audience: "Age 25-45, Urban, Tech-savvy professionals".to_string(),
            creatives: vec![
                creative("cr-001", CreativeKind::Image, "Hero Banner - Desktop", thumb(6289065)),
                creative("cr-002", CreativeKind::Video, "Product Showcase 30s", None),
                creative("cr-003", CreativeKind::Image, "Mobile Banner", thumb(3184338)),
                creative("cr-004", CreativeKind::Text, "Ad Copy - Primary", None),
            ],
        },
        Campaign {
            id: "camp-002".to_string(),
            name: "Brand Awareness Q4".to_string(),
            status: CampaignStatus::Running,
            objective: "Increase brand visibility and engagement".to_string(),
            budget: 35_000,
            start_date: SCHEDULES[1].1,
            end_date: SCHEDULES[1].2,
            platforms: platforms(&["YouTube", "TikTok", "Instagram"]),
            audience: "Age 18-35, Social media active users".to_string(),
            creatives: vec![
                creative("cr-005", CreativeKind::Video, "Brand Story Video", None),
                creative("cr-006", CreativeKind::Image, "Social Media Card", thumb(3184465)),
            ],
        },
        Campaign {
            id: "camp-003".to_string(),
            name: "Product Launch Teaser".to_string(),
            status: CampaignStatus::Approved,
            objective: "Generate buzz for new product launch".to_string(),
            budget: 25_000,
            start_date: SCHEDULES[2].1,
            end_date: SCHEDULES[2].2,
            platforms: platforms(&["Twitter", "LinkedIn", "Facebook"]),
            audience: "Tech enthusiasts, Early adopters".to_string(),
            creatives: vec![
                creative("cr-007", CreativeKind::Video, "Teaser Video 15s", None),
                creative("cr-008", CreativeKind::Image, "Product Teaser Banner", thumb(3184339)),
            ],
        },
        Campaign {
            id: "camp-004".to_string(),
            name: "Holiday Special Promotion".to_string(),
            status: CampaignStatus::Paused,
            objective: "Drive holiday season sales".to_string(),
            budget: 60_000,
            start_date: SCHEDULES[3].1,
            end_date: SCHEDULES[3].2,
            platforms: platforms(&["Facebook", "Instagram", "Google Ads", "Pinterest"]),
            audience: "Shoppers, Gift buyers".to_string(),
            creatives: vec![
                creative("cr-009", CreativeKind::Image, "Holiday Banner Set", thumb(3184360)),
                creative("cr-010", CreativeKind::Video, "Holiday Promo 30s", None),
            ],
        },
        Campaign {
            id: "camp-005".to_string(),
            name: "Customer Retention Campaign".to_string(),
            status: CampaignStatus::Completed,
            objective: "Increase customer loyalty and repeat purchases".to_string(),
            budget: 18_000,
            start_date: SCHEDULES[4].1,
            end_date: SCHEDULES[4].2,
            platforms: platforms(&["Email", "Facebook", "Instagram"]),
            audience: "Existing customers".to_string(),
            creatives: vec![creative(
                "cr-011",
                CreativeKind::Image,
                "Loyalty Program Banner",
                thumb(3184287),
            )],
        },
    ]
}

pub fn performance_metrics() -> Vec<PerformanceMetric> {
    let metric = |title: &str, value: &str, change: &str, kind| PerformanceMetric {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        kind,
    };
    vec![
        metric("Impressions", "2.4M", "+18.2%", MetricKind::Impressions),
        metric("Clicks", "67.8K", "+12.5%", MetricKind::Clicks),
        metric("CTR", "2.82%", "+0.4%", MetricKind::Ctr),
        metric("Spend", "$12,450", "+8.7%", MetricKind::Spend),
    ]
}

pub fn platform_performance() -> Vec<PlatformPerformance> {
    let row = |platform: &str,
               impressions: &str,
               clicks: &str,
               ctr: &str,
               spend: &str,
               roas: &str,
               rating| PlatformPerformance {
        platform: platform.to_string(),
        impressions: impressions.to_string(),
        clicks: clicks.to_string(),
        ctr: ctr.to_string(),
        spend: spend.to_string(),
        roas: roas.to_string(),
        rating,
    };
    vec![
        row("Facebook", "1.2M", "32.4K", "2.7%", "$4,200", "4.2x", PlatformRating::Excellent),
        row("Instagram", "850K", "21.5K", "2.5%", "$3,800", "3.8x", PlatformRating::Good),
        row("Google Ads", "280K", "11.2K", "4.0%", "$3,200", "5.1x", PlatformRating::Excellent),
        row("LinkedIn", "70K", "2.7K", "3.9%", "$1,250", "2.8x", PlatformRating::Good),
    ]
}

pub fn ai_suggestions() -> Vec<AiSuggestion> {
    vec![
        AiSuggestion {
            id: "1".to_string(),
            category: SuggestionCategory::Optimization,
            title: "Increase Facebook Budget".to_string(),
            description: "Facebook ads showing 15% higher CTR. Consider reallocating 20% budget from LinkedIn.".to_string(),
            impact: Impact::High,
            action: "Optimize Budget".to_string(),
        },
        AiSuggestion {
            id: "2".to_string(),
            category: SuggestionCategory::Creative,
            title: "Refresh Creative Assets".to_string(),
            description: "Creative fatigue detected. Video creative performance dropped 12% in last 3 days.".to_string(),
            impact: Impact::Medium,
            action: "Generate New Creative".to_string(),
        },
        AiSuggestion {
            id: "3".to_string(),
            category: SuggestionCategory::Timing,
            title: "Optimal Schedule Window".to_string(),
            description: "Peak engagement detected 6-9 PM. Increase bid adjustments during these hours.".to_string(),
            impact: Impact::High,
            action: "Adjust Schedule".to_string(),
        },
    ]
}

pub fn schedule_hints() -> Vec<ScheduleHint> {
    let hint = |kind, title: &str, detail: &str| ScheduleHint {
        kind,
        title: title.to_string(),
        detail: detail.to_string(),
    };
    vec![
        hint(ScheduleHintKind::LaunchWindow, "Best Launch Window", "Oct 15-18 recommended"),
        hint(ScheduleHintKind::PeakHours, "Peak Hours", "6-9 PM weekdays"),
        hint(ScheduleHintKind::Conflicts, "Avoid Conflicts", "2 campaigns overlap"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedules_line_up_with_campaigns() {
        let campaigns = campaigns();
        assert_eq!(campaigns.len(), SCHEDULES.len());
        for (campaign, (id, start, end)) in campaigns.iter().zip(SCHEDULES) {
            assert_eq!(campaign.id, id);
            assert_eq!((campaign.start_date, campaign.end_date), (start, end));
            assert!(start <= end, "{id}");
        }
    }

    #[test]
    fn test_thumbnail_urls() {
        let first = &campaigns()[0].creatives[0];
        assert_eq!(
            first.thumbnail.as_deref(),
            Some("https://images.pexels.com/photos/6289065/pexels-photo-6289065.jpeg?auto=compress&cs=tinysrgb&w=400")
        );
    }

    #[test]
    fn test_every_campaign_has_creatives() {
        assert!(campaigns().iter().all(|c| !c.creatives.is_empty()));
    }
}
