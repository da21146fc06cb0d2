use super::Page;
use crate::html::{escape, icon};
use crate::styling::schedule_hint_style;
use studio_core::types::Campaign;

pub(crate) fn render(page: &Page<'_>) -> String {
    let mut html = String::new();
    if let Some(campaign) = page.view.selected {
        html.push_str(&schedule_panel(page, campaign));
    }
    html.push_str(&page.calendar.render(page.theme));
    html
}

fn schedule_panel(page: &Page<'_>, campaign: &Campaign) -> String {
    let t = page.t;
    let mut html = format!(
        "<section class=\"{} {} border rounded-2xl p-6\" id=\"campaign-schedule\">\n",
        t.card_bg, t.border
    );
    html.push_str(&format!(
        "<div class=\"flex items-center justify-between mb-6\"><div><h3 class=\"text-xl font-semibold {}\">Schedule Campaign: {}</h3><p class=\"text-sm {}\">Plan optimal timing for maximum impact</p></div><button type=\"button\" class=\"flex items-center space-x-2 px-4 py-2 bg-blue-600 text-white rounded-lg\">{}<span>Add to Calendar</span></button></div>\n",
        t.text,
        escape(&campaign.name),
        t.text_secondary,
        icon("plus", "w-4 h-4")
    ));
    html.push_str("<div class=\"grid grid-cols-1 lg:grid-cols-3 gap-6 mb-6\">\n");

    // Dates
    html.push_str(&format!(
        "<div class=\"{} {} border rounded-xl p-5\"><h4 class=\"font-semibold {} mb-4 flex items-center\">{}Campaign Dates</h4><div class=\"space-y-3\">",
        t.card_bg,
        t.border,
        t.text,
        icon("calendar", "mr-2 text-blue-600")
    ));
    for (label, name, date) in [
        ("Start Date", "start_date", campaign.start_date),
        ("End Date", "end_date", campaign.end_date),
    ] {
        html.push_str(&format!(
            "<div><label class=\"text-xs {} mb-1 block\">{}</label><input type=\"date\" name=\"{}\" value=\"{}\" readonly class=\"w-full px-3 py-2 {} {} border rounded-lg text-sm {}\"/></div>",
            t.text_secondary,
            label,
            name,
            date.format("%Y-%m-%d"),
            t.card_bg,
            t.border,
            t.text
        ));
    }
    html.push_str(&format!(
        "<div class=\"pt-2\"><p class=\"text-xs {}\">Duration</p><p class=\"text-lg font-bold {}\">{} days</p></div></div></div>\n",
        t.text_secondary,
        t.text,
        campaign.duration_days()
    ));

    // Platforms
    html.push_str(&format!(
        "<div class=\"{} {} border rounded-xl p-5\"><h4 class=\"font-semibold {} mb-4 flex items-center\">{}Selected Platforms</h4><div class=\"space-y-2\">",
        t.card_bg,
        t.border,
        t.text,
        icon("globe", "mr-2 text-purple-600")
    ));
    for platform in &campaign.platforms {
        html.push_str(&format!(
            "<div class=\"flex items-center justify-between p-2 rounded-lg bg-gradient-to-r from-blue-50 to-purple-50\"><span class=\"font-medium text-sm {}\">{}</span><span class=\"px-2 py-1 bg-green-100 text-green-700 rounded-full text-xs font-medium\">Active</span></div>",
            t.text,
            escape(platform)
        ));
    }
    html.push_str("</div></div>\n");

    // Recommendations
    html.push_str(&format!(
        "<div class=\"{} {} border rounded-xl p-5\" id=\"schedule-hints\"><h4 class=\"font-semibold {} mb-4 flex items-center\">{}AI Recommendations</h4><div class=\"space-y-3\">",
        t.card_bg,
        t.border,
        t.text,
        icon("sparkles", "mr-2 text-orange-600")
    ));
    for hint in &page.view.catalog.schedule_hints {
        let (icon_name, icon_color, row_bg) = schedule_hint_style(hint.kind);
        html.push_str(&format!(
            "<div class=\"flex items-start space-x-2 p-2 rounded-lg {}\">{}<div><p class=\"text-xs font-medium {}\">{}</p><p class=\"text-xs {}\">{}</p></div></div>",
            row_bg,
            icon(icon_name, &format!("{icon_color} mt-0.5 flex-shrink-0")),
            t.text,
            escape(&hint.title),
            t.text_secondary,
            escape(&hint.detail)
        ));
    }
    html.push_str("</div></div>\n");

    html.push_str("</div>\n</section>\n");
    html
}
