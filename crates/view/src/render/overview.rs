use super::Page;
use crate::html::{currency, currency_thousands, escape, icon, plural};
use crate::state::{StatusFilter, StudioEvent};
use crate::styling::{campaign_status_badge, creative_placeholder, creative_status_badge};
use studio_core::types::{Campaign, Creative};

pub(crate) fn render(page: &Page<'_>) -> String {
    let mut html = String::new();
    html.push_str(&stat_cards(page));
    html.push_str(&campaign_list(page));
    if let Some(campaign) = page.view.selected {
        html.push_str(&detail_panel(page, campaign));
        html.push_str(&creative_gallery(page, campaign));
    }
    html
}

fn stat_cards(page: &Page<'_>) -> String {
    let t = page.t;
    let stats = &page.view.stats;
    let cards = [
        ("folder-open", "blue", stats.total.to_string(), "Total Campaigns", "All campaigns in system"),
        ("check-circle", "green", stats.approved.to_string(), "Approved", "Ready to launch"),
        ("play", "blue", stats.running.to_string(), "Running", "Currently live"),
        ("dollar-sign", "purple", currency_thousands(stats.total_budget), "Total Budget", "Across all campaigns"),
    ];

    let mut html = String::from("<div class=\"grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4\" id=\"campaign-stats\">\n");
    for (icon_name, color, value, title, caption) in cards {
        html.push_str(&format!(
            "<div class=\"{} {} border rounded-2xl p-5\"><div class=\"flex items-center justify-between mb-3\"><div class=\"p-3 bg-{color}-100 rounded-xl\">{}</div><span class=\"text-2xl font-bold text-{color}-600\">{}</span></div><h3 class=\"font-semibold {}\">{}</h3><p class=\"text-sm {}\">{}</p></div>\n",
            t.card_bg,
            t.border,
            icon(icon_name, &format!("text-{color}-600")),
            value,
            t.text,
            title,
            t.text_secondary,
            caption,
        ));
    }
    html.push_str("</div>\n");
    html
}

fn filter_form(page: &Page<'_>) -> String {
    let t = page.t;
    let state = page.view.state;
    let mut html = format!(
        "<form method=\"get\" class=\"flex flex-col sm:flex-row gap-3\">{}",
        page.hidden_state_inputs()
    );
    html.push_str(&format!(
        "<input type=\"text\" name=\"q\" placeholder=\"Search campaigns...\" value=\"{}\" class=\"px-4 py-2 {} {} border rounded-lg text-sm {} w-full sm:w-64\"/>",
        escape(&state.query),
        t.card_bg,
        t.border,
        t.text
    ));
    html.push_str(&format!(
        "<select name=\"status\" class=\"px-4 py-2 {} {} border rounded-lg text-sm {}\">",
        t.card_bg, t.border, t.text
    ));
    for option in StatusFilter::options() {
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            option.as_str(),
            if option == state.status_filter { " selected" } else { "" },
            option.label()
        ));
    }
    html.push_str("</select>");
    html.push_str("<button type=\"submit\" class=\"px-4 py-2 bg-blue-600 text-white rounded-lg text-sm\">Apply</button></form>");
    html
}

fn campaign_list(page: &Page<'_>) -> String {
    let t = page.t;
    let filtered = &page.view.filtered;
    let mut html = format!(
        "<section class=\"{} {} border rounded-2xl p-6\" id=\"campaign-list\">\n",
        t.card_bg, t.border
    );
    html.push_str(&format!(
        "<div class=\"flex flex-col md:flex-row md:items-center justify-between gap-4 mb-6\"><div><h3 class=\"text-xl font-semibold {} mb-1\">Campaign List</h3><p class=\"text-sm {}\">{} found</p></div>{}</div>\n",
        t.text,
        t.text_secondary,
        plural(filtered.len(), "campaign"),
        filter_form(page)
    ));

    html.push_str("<div class=\"grid grid-cols-1 lg:grid-cols-2 xl:grid-cols-3 gap-4\">\n");
    for campaign in filtered {
        html.push_str(&campaign_card(page, campaign));
    }
    html.push_str("</div>\n");

    if filtered.is_empty() {
        html.push_str(&format!(
            "<div class=\"text-center py-12\" id=\"empty-state\">{}<p class=\"text-lg font-semibold {} mb-1\">No campaigns found</p><p class=\"text-sm {}\">Try adjusting your filters or search query</p></div>\n",
            icon("alert-circle", "mx-auto text-gray-400 mb-3"),
            t.text,
            t.text_secondary
        ));
    }

    html.push_str("</section>\n");
    html
}

fn campaign_card(page: &Page<'_>, campaign: &Campaign) -> String {
    let t = page.t;
    let selected = page.view.state.selected_id() == Some(campaign.id.as_str());
    let frame = if selected {
        "border-blue-500 bg-blue-50 shadow-lg".to_string()
    } else {
        format!("{} {}", t.border, t.hover)
    };

    format!(
        "<a href=\"{}\" class=\"block p-5 rounded-xl border-2 {}\" data-campaign=\"{}\"{}><div class=\"flex items-start justify-between mb-3\"><h4 class=\"font-bold {} text-lg\">{}</h4><span class=\"px-3 py-1 rounded-full text-xs font-semibold {}\">{}</span></div><p class=\"text-sm {} mb-4 line-clamp-2\">{}</p><div class=\"space-y-2 mb-4\"><div class=\"flex items-center justify-between\"><span class=\"text-xs {}\">Budget</span><span class=\"text-sm font-bold {}\">{}</span></div><div class=\"flex items-center justify-between\"><span class=\"text-xs {}\">Duration</span><span class=\"text-sm font-semibold {}\">{} days</span></div></div><div class=\"flex items-center justify-between pt-3 border-t border-gray-200\"><span class=\"text-xs {}\">{} platforms</span><span class=\"text-xs {}\">{} creatives</span></div></a>\n",
        page.link(StudioEvent::SelectCampaign(campaign.id.clone())),
        frame,
        escape(&campaign.id),
        if selected { " aria-selected=\"true\"" } else { "" },
        t.text,
        escape(&campaign.name),
        campaign_status_badge(campaign.status),
        campaign.status,
        t.text_secondary,
        escape(&campaign.objective),
        t.text_secondary,
        t.text,
        currency(campaign.budget),
        t.text_secondary,
        t.text,
        campaign.duration_days(),
        t.text_secondary,
        campaign.platforms.len(),
        t.text_secondary,
        campaign.creatives.len(),
    )
}

fn detail_panel(page: &Page<'_>, campaign: &Campaign) -> String {
    let t = page.t;
    let mut html = format!(
        "<section class=\"{} {} border rounded-2xl p-6\" id=\"campaign-detail\">\n",
        t.card_bg, t.border
    );
    html.push_str(&format!(
        "<div class=\"flex items-center justify-between mb-6\"><div><h3 class=\"text-2xl font-bold {}\">{}</h3><p class=\"{} mt-1\">{}</p></div><span class=\"px-4 py-2 rounded-xl text-sm font-semibold {}\">{}</span></div>\n",
        t.text,
        escape(&campaign.name),
        t.text_secondary,
        escape(&campaign.objective),
        campaign_status_badge(campaign.status),
        campaign.status
    ));

    let facts = [
        ("Budget", currency(campaign.budget)),
        ("Duration", format!("{} days", campaign.duration_days())),
        ("Platforms", campaign.platforms.len().to_string()),
        ("Creatives", campaign.creatives.len().to_string()),
    ];
    html.push_str("<div class=\"grid grid-cols-2 gap-4 mb-6\">\n");
    for (label, value) in facts {
        html.push_str(&format!(
            "<div class=\"p-4 rounded-xl {}\"><p class=\"text-sm {} mb-1\">{}</p><p class=\"text-xl font-bold {}\">{}</p></div>\n",
            t.hover, t.text_secondary, label, t.text, value
        ));
    }
    html.push_str("</div>\n");

    html.push_str(&format!(
        "<div class=\"mb-6\"><h4 class=\"text-sm font-semibold {} mb-2\">Target Audience</h4><p class=\"{}\">{}</p></div>\n",
        t.text,
        t.text_secondary,
        escape(&campaign.audience)
    ));

    html.push_str(&format!(
        "<div><h4 class=\"text-sm font-semibold {} mb-2\">Selected Platforms</h4><div class=\"flex flex-wrap gap-2\">",
        t.text
    ));
    for platform in &campaign.platforms {
        html.push_str(&format!(
            "<span class=\"px-3 py-1 bg-blue-100 text-blue-700 rounded-lg text-sm font-medium\">{}</span>",
            escape(platform)
        ));
    }
    html.push_str("</div></div>\n</section>\n");
    html
}

fn creative_gallery(page: &Page<'_>, campaign: &Campaign) -> String {
    let t = page.t;
    let mut html = format!(
        "<section class=\"{} {} border rounded-2xl p-6\" id=\"creative-gallery\"><h3 class=\"text-lg font-semibold {} mb-4\">Approved Creatives</h3><div class=\"grid grid-cols-1 md:grid-cols-2 gap-4\">\n",
        t.card_bg, t.border, t.text
    );
    for creative in &campaign.creatives {
        html.push_str(&creative_card(page, creative));
    }
    html.push_str("</div></section>\n");
    html
}

fn creative_card(page: &Page<'_>, creative: &Creative) -> String {
    let t = page.t;
    let preview = match &creative.thumbnail {
        Some(url) => format!(
            "<img src=\"{}\" alt=\"{}\" class=\"w-full h-40 object-cover\"/>",
            escape(url),
            escape(&creative.name)
        ),
        None => {
            let (icon_name, color) = creative_placeholder(creative.kind);
            format!(
                "<div class=\"w-full h-40 bg-gradient-to-br from-blue-100 to-purple-100 flex items-center justify-center\" data-placeholder=\"{}\">{}</div>",
                creative.kind.as_str(),
                icon(icon_name, color)
            )
        }
    };

    let mut html = format!(
        "<div class=\"{} border rounded-xl overflow-hidden {}\" data-creative=\"{}\">{}<div class=\"p-4\"><div class=\"flex items-center justify-between mb-2\"><h4 class=\"font-semibold {} text-sm\">{}</h4><span class=\"px-2 py-1 rounded-full text-xs font-medium {}\">{}</span></div><p class=\"text-xs {}\">{}</p>",
        t.border,
        t.hover,
        escape(&creative.id),
        preview,
        t.text,
        escape(&creative.name),
        creative_status_badge(creative.status),
        creative.status.as_str(),
        t.text_secondary,
        creative.kind.label()
    );
    if let Some(perf) = &creative.performance {
        html.push_str(&format!(
            "<p class=\"text-xs {} mt-2\">{} impressions &middot; {} clicks &middot; {:.2}% CTR</p>",
            t.text_secondary, perf.impressions, perf.clicks, perf.ctr
        ));
    }
    html.push_str("<div class=\"flex items-center space-x-2 mt-3\">");
    for (icon_name, class) in [
        ("eye", "bg-blue-100 text-blue-600"),
        ("download", "bg-gray-100 text-gray-600"),
        ("edit-3", "bg-gray-100 text-gray-600"),
    ] {
        html.push_str(&format!(
            "<button type=\"button\" class=\"p-2 rounded-lg {}\">{}</button>",
            class,
            icon(icon_name, "w-4 h-4")
        ));
    }
    html.push_str("</div></div></div>\n");
    html
}
