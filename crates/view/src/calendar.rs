//! Promotion calendar shown under the scheduler tab.
//!
//! The scheduler treats the calendar as an opaque collaborator: it hands over
//! a theme and embeds whatever markup comes back. The built-in calendar lists
//! launch and end dates of every catalog campaign, grouped by month.

use crate::html::{escape, icon};
use crate::theme::ThemeProvider;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use studio_core::Catalog;

/// A sub-view embedded in the scheduler tab.
pub trait CalendarView: Send + Sync {
    fn render(&self, theme: &dyn ThemeProvider) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarEventType {
    Launch,
    End,
}

impl CalendarEventType {
    fn label(&self) -> &'static str {
        match self {
            CalendarEventType::Launch => "Launch",
            CalendarEventType::End => "End",
        }
    }

    fn badge(&self) -> &'static str {
        match self {
            CalendarEventType::Launch => "bg-green-100 text-green-700",
            CalendarEventType::End => "bg-gray-100 text-gray-700",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub campaign_id: String,
    pub campaign_name: String,
    pub event_type: CalendarEventType,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct PromotionCalendar {
    events: Vec<CalendarEvent>,
}

impl PromotionCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// One launch event per start date and one end event per end date.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut calendar = Self::new();
        for campaign in &catalog.campaigns {
            for (event_type, date) in [
                (CalendarEventType::Launch, campaign.start_date),
                (CalendarEventType::End, campaign.end_date),
            ] {
                calendar.add_event(CalendarEvent {
                    campaign_id: campaign.id.clone(),
                    campaign_name: campaign.name.clone(),
                    event_type,
                    date,
                });
            }
        }
        calendar
    }

    /// Insert keeping chronological order; same-day events keep insertion order.
    pub fn add_event(&mut self, event: CalendarEvent) {
        let at = self.events.partition_point(|e| e.date <= event.date);
        self.events.insert(at, event);
    }

    /// Events grouped by (year, month), in calendar order.
    pub fn by_month(&self) -> Vec<((i32, u32), Vec<&CalendarEvent>)> {
        let mut groups: Vec<((i32, u32), Vec<&CalendarEvent>)> = Vec::new();
        for event in &self.events {
            let key = (event.date.year(), event.date.month());
            if let Some((last, bucket)) = groups.last_mut() {
                if *last == key {
                    bucket.push(event);
                    continue;
                }
            }
            groups.push((key, vec![event]));
        }
        groups
    }
}

fn month_heading(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{year}-{month:02}"))
}

impl CalendarView for PromotionCalendar {
    fn render(&self, theme: &dyn ThemeProvider) -> String {
        let t = theme.classes();
        let mut html = format!(
            "<section class=\"{} {} border rounded-2xl p-6\" id=\"promotion-calendar\">\n",
            t.card_bg, t.border
        );
        html.push_str(&format!(
            "<h3 class=\"text-lg font-semibold {} mb-4 flex items-center\">{}Promotion Calendar</h3>\n",
            t.text,
            icon("calendar", "mr-2 text-blue-600")
        ));

        if self.events.is_empty() {
            html.push_str(&format!(
                "<p class=\"text-sm {}\">No promotions scheduled</p>\n",
                t.text_secondary
            ));
        }

        for ((year, month), events) in self.by_month() {
            html.push_str(&format!(
                "<div class=\"mb-4\"><h4 class=\"text-sm font-semibold {} mb-2\">{}</h4><ul class=\"space-y-2\">\n",
                t.text,
                month_heading(year, month)
            ));
            for event in events {
                html.push_str(&format!(
                    "<li class=\"flex items-center justify-between p-2 rounded-lg {}\"><span class=\"text-sm {}\">{} &middot; {}</span><span class=\"px-2 py-1 rounded-full text-xs font-medium {}\">{}</span></li>\n",
                    t.hover,
                    t.text,
                    event.date.format("%b %-d"),
                    escape(&event.campaign_name),
                    event.event_type.badge(),
                    event.event_type.label()
                ));
            }
            html.push_str("</ul></div>\n");
        }

        html.push_str("</section>\n");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_two_events_per_campaign_in_order() {
        let catalog = Catalog::builtin();
        let calendar = PromotionCalendar::from_catalog(&catalog);
        assert_eq!(calendar.events.len(), catalog.campaigns.len() * 2);
        assert!(calendar.events.windows(2).all(|w| w[0].date <= w[1].date));
        // Customer Retention starts first.
        assert_eq!(calendar.events[0].campaign_id, "camp-005");
        assert_eq!(calendar.events[0].event_type, CalendarEventType::Launch);
    }

    #[test]
    fn test_grouped_by_month() {
        let calendar = PromotionCalendar::from_catalog(&Catalog::builtin());
        let months: Vec<_> = calendar.by_month().into_iter().map(|(k, _)| k).collect();
        assert_eq!(months, vec![(2025, 9), (2025, 10), (2025, 11), (2025, 12)]);
    }

    #[test]
    fn test_render_lists_months_and_escapes() {
        let mut calendar = PromotionCalendar::new();
        calendar.add_event(CalendarEvent {
            campaign_id: "x".into(),
            campaign_name: "Fish & Chips".into(),
            event_type: CalendarEventType::Launch,
            date: date("2026-01-05"),
        });
        let html = calendar.render(&ThemeMode::Light);
        assert!(html.contains("January 2026"));
        assert!(html.contains("Jan 5 &middot; Fish &amp; Chips"));
        assert!(!html.contains("No promotions scheduled"));
    }

    #[test]
    fn test_render_empty() {
        let html = PromotionCalendar::new().render(&ThemeMode::Dark);
        assert!(html.contains("No promotions scheduled"));
        assert!(html.contains("bg-gray-800"));
    }
}
