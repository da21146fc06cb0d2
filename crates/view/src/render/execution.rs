use super::Page;
use crate::html::{escape, icon};
use crate::state::StudioEvent;
use crate::styling::{campaign_status_badge, change_badge, metric_icon};

const QUICK_ACTIONS: [(&str, &str); 4] = [
    ("Adjust Budget", "blue"),
    ("Update Creative", "purple"),
    ("Modify Targeting", "green"),
    ("View Reports", "orange"),
];

pub(crate) fn render(page: &Page<'_>) -> String {
    let t = page.t;
    let running = page.view.state.execution.is_running();
    let selected = page.view.selected;
    let platforms: &[String] = selected.map(|c| c.platforms.as_slice()).unwrap_or(&[]);

    let mut html = format!(
        "<section class=\"{} {} border rounded-2xl p-6\" id=\"campaign-execution\" data-execution=\"{}\">\n",
        t.card_bg,
        t.border,
        page.view.state.execution
    );

    let (button_icon, button_label, button_class) = if running {
        ("pause", "Pause Campaign", "bg-yellow-600")
    } else {
        ("play", "Launch Campaign", "bg-green-600")
    };
    html.push_str(&format!(
        "<div class=\"flex items-center justify-between mb-6\"><div class=\"flex items-center space-x-3\">{}<div><h3 class=\"text-xl font-semibold {}\">Campaign Execution</h3><p class=\"text-sm {}\">Launch and manage your campaigns</p></div></div><a href=\"{}\" class=\"flex items-center space-x-2 px-4 py-2 {} text-white rounded-lg\" id=\"execution-toggle\">{}<span>{}</span></a></div>\n",
        icon("play", "text-green-600"),
        t.text,
        t.text_secondary,
        page.link(StudioEvent::ToggleExecution),
        button_class,
        icon(button_icon, "w-4 h-4"),
        button_label
    ));

    // The session toggle and the campaign's own lifecycle status are separate;
    // both are shown so a mismatch is visible.
    if let Some(campaign) = selected {
        html.push_str(&format!(
            "<p class=\"text-sm {} mb-4\" id=\"execution-target\">{} &middot; campaign status <span class=\"px-2 py-1 rounded-full text-xs font-medium {}\">{}</span></p>\n",
            t.text_secondary,
            escape(&campaign.name),
            campaign_status_badge(campaign.status),
            campaign.status
        ));
    }

    if running {
        html.push_str(&format!(
            "<div class=\"bg-gradient-to-r from-green-50 to-blue-50 rounded-xl p-4 border border-green-200 mb-6\" id=\"live-banner\"><div class=\"flex items-center space-x-3\"><div class=\"w-3 h-3 bg-green-500 rounded-full animate-pulse\"></div><div><p class=\"font-semibold {}\">Campaign is Live</p><p class=\"text-sm {}\">Running across {} platforms</p></div></div></div>\n",
            t.text,
            t.text_secondary,
            platforms.len()
        ));
    }

    html.push_str("<div class=\"grid grid-cols-1 md:grid-cols-2 gap-6\">\n");

    html.push_str(&format!(
        "<div class=\"{} {} border rounded-xl p-5\"><h4 class=\"font-semibold {} mb-4 flex items-center\">{}Campaign Status</h4><div class=\"space-y-3\">",
        t.card_bg,
        t.border,
        t.text,
        icon("activity", "mr-2 text-blue-600")
    ));
    let (badge_class, badge_label) = if running {
        ("bg-green-100 text-green-700", "Live")
    } else {
        ("bg-gray-100 text-gray-700", "Paused")
    };
    for platform in platforms {
        html.push_str(&format!(
            "<div class=\"flex items-center justify-between p-3 rounded-lg {}\"><span class=\"font-medium {}\">{}</span><span class=\"px-3 py-1 rounded-full text-xs font-medium {}\" data-platform-state>{}</span></div>",
            t.hover,
            t.text,
            escape(platform),
            badge_class,
            badge_label
        ));
    }
    html.push_str("</div></div>\n");

    html.push_str(&format!(
        "<div class=\"{} {} border rounded-xl p-5\"><h4 class=\"font-semibold {} mb-4 flex items-center\">{}Quick Actions</h4><div class=\"space-y-2\">",
        t.card_bg,
        t.border,
        t.text,
        icon("settings", "mr-2 text-purple-600")
    ));
    for (label, color) in QUICK_ACTIONS {
        html.push_str(&format!(
            "<button type=\"button\" class=\"w-full flex items-center justify-between p-3 rounded-lg bg-{color}-50 text-{color}-700\"><span class=\"font-medium\">{}</span>{}</button>",
            label,
            icon("chevron-right", "w-4 h-4")
        ));
    }
    html.push_str("</div></div>\n");

    html.push_str("</div>\n</section>\n");

    if running {
        html.push_str(&live_metrics(page));
    }
    html
}

fn live_metrics(page: &Page<'_>) -> String {
    let t = page.t;
    let mut html = format!(
        "<section class=\"{} {} border rounded-2xl p-6\" id=\"live-metrics\"><h3 class=\"text-lg font-semibold {} mb-4\">Live Campaign Metrics</h3><div class=\"grid grid-cols-1 md:grid-cols-4 gap-4\">\n",
        t.card_bg, t.border, t.text
    );
    for metric in &page.view.catalog.performance_metrics {
        let (icon_name, color) = metric_icon(metric.kind);
        html.push_str(&format!(
            "<div class=\"{} {} border rounded-xl p-4\"><div class=\"flex items-center justify-between mb-2\">{}<span class=\"text-xs font-semibold px-2 py-1 rounded-full {}\">{}</span></div><p class=\"text-2xl font-bold {}\">{}</p><p class=\"text-sm {}\">{}</p></div>\n",
            t.card_bg,
            t.border,
            icon(icon_name, &format!("text-{color}-600")),
            change_badge(metric.is_positive()),
            escape(&metric.change),
            t.text,
            escape(&metric.value),
            t.text_secondary,
            escape(&metric.title)
        ));
    }
    html.push_str("</div></section>\n");
    html
}

#[cfg(test)]
mod tests {
    use crate::calendar::PromotionCalendar;
    use crate::render::render_page;
    use crate::state::{StudioEvent, Tab, ViewState};
    use crate::theme::ThemeMode;
    use studio_core::Catalog;

    fn render(state: &ViewState, catalog: &Catalog) -> String {
        render_page(state, catalog, &ThemeMode::Light, &PromotionCalendar::new())
    }

    fn execution_state(catalog: &Catalog) -> ViewState {
        ViewState::initial(catalog).with(StudioEvent::SelectTab(Tab::Execution), catalog)
    }

    #[test]
    fn test_paused_shows_launch_and_no_metrics() {
        let catalog = Catalog::builtin();
        let html = render(&execution_state(&catalog), &catalog);
        assert!(html.contains("Launch Campaign"));
        assert!(!html.contains("Pause Campaign"));
        assert!(!html.contains("id=\"live-banner\""));
        assert!(!html.contains("id=\"live-metrics\""));
        assert_eq!(html.matches("data-platform-state>Paused<").count(), 4);
        assert!(html.contains("execution=running"));
    }

    #[test]
    fn test_running_shows_banner_and_metrics() {
        let catalog = Catalog::builtin();
        let state = execution_state(&catalog).with(StudioEvent::ToggleExecution, &catalog);
        let html = render(&state, &catalog);
        assert!(html.contains("Pause Campaign"));
        assert!(html.contains("Campaign is Live"));
        assert!(html.contains("Running across 4 platforms"));
        assert_eq!(html.matches("data-platform-state>Live<").count(), 4);
        assert!(html.contains("id=\"live-metrics\""));
        assert!(html.contains("67.8K"));
        assert!(html.contains("+18.2%"));
    }

    #[test]
    fn test_toggle_link_flips_execution() {
        let catalog = Catalog::builtin();
        let state = execution_state(&catalog).with(StudioEvent::ToggleExecution, &catalog);
        let html = render(&state, &catalog);
        assert!(html.contains(
            "href=\"?tab=execution&amp;status=all&amp;campaign=camp-001&amp;execution=paused&amp;theme=light\" class=\"flex items-center space-x-2 px-4 py-2 bg-yellow-600"
        ));
    }

    #[test]
    fn test_mismatch_between_toggle_and_campaign_status_is_visible() {
        let catalog = Catalog::builtin();
        let state = execution_state(&catalog)
            .with(StudioEvent::SelectCampaign("camp-004".into()), &catalog)
            .with(StudioEvent::ToggleExecution, &catalog);
        let html = render(&state, &catalog);
        assert!(html.contains("Campaign is Live"));
        assert!(html.contains("Holiday Special Promotion &middot; campaign status"));
        assert!(html.contains(">paused</span></p>"));
        assert_eq!(catalog.campaign("camp-004").unwrap().status.as_str(), "paused");
    }
}
