use super::Page;
use crate::html::{escape, icon};
use crate::styling::{change_badge, impact_badge, impact_card, metric_icon, rating_badge};

const TABLE_COLUMNS: [(&str, &str); 7] = [
    ("Platform", "text-left"),
    ("Impressions", "text-right"),
    ("Clicks", "text-right"),
    ("CTR", "text-right"),
    ("Spend", "text-right"),
    ("ROAS", "text-right"),
    ("Status", "text-center"),
];

pub(crate) fn render(page: &Page<'_>) -> String {
    let mut html = String::new();
    html.push_str(&metric_cards(page));
    html.push_str(&platform_table(page));
    html.push_str(&suggestions(page));
    html
}

fn metric_cards(page: &Page<'_>) -> String {
    let t = page.t;
    let mut html = String::from("<div class=\"grid grid-cols-1 md:grid-cols-4 gap-6\" id=\"performance-metrics\">\n");
    for metric in &page.view.catalog.performance_metrics {
        let (icon_name, color) = metric_icon(metric.kind);
        html.push_str(&format!(
            "<div class=\"{} {} border rounded-2xl p-6\"><div class=\"flex items-center justify-between mb-4\"><div class=\"p-3 bg-{color}-100 rounded-xl\">{}</div><span class=\"text-xs font-semibold px-3 py-1 rounded-full {}\">{}</span></div><h3 class=\"text-2xl font-bold {} mb-1\">{}</h3><p class=\"{} text-sm\">{}</p></div>\n",
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
    html.push_str("</div>\n");
    html
}

fn platform_table(page: &Page<'_>) -> String {
    let t = page.t;
    let mut html = format!(
        "<section class=\"{} {} border rounded-2xl p-6\" id=\"platform-performance\"><h3 class=\"text-xl font-semibold {} mb-6\">Platform Performance</h3><div class=\"overflow-x-auto\"><table class=\"w-full\"><thead><tr class=\"border-b {}\">",
        t.card_bg, t.border, t.text, t.border
    );
    for (title, align) in TABLE_COLUMNS {
        html.push_str(&format!(
            "<th class=\"{} py-3 px-4 font-semibold {}\">{}</th>",
            align, t.text, title
        ));
    }
    html.push_str("</tr></thead><tbody>\n");

    for row in &page.view.catalog.platform_performance {
        html.push_str(&format!("<tr class=\"border-b {} {}\">", t.border, t.hover));
        html.push_str(&format!(
            "<td class=\"py-4 px-4\"><span class=\"font-medium {}\">{}</span></td>",
            t.text,
            escape(&row.platform)
        ));
        for value in [&row.impressions, &row.clicks, &row.ctr, &row.spend] {
            html.push_str(&format!(
                "<td class=\"py-4 px-4 text-right font-medium {}\">{}</td>",
                t.text,
                escape(value)
            ));
        }
        html.push_str(&format!(
            "<td class=\"py-4 px-4 text-right font-bold text-green-600\">{}</td>",
            escape(&row.roas)
        ));
        html.push_str(&format!(
            "<td class=\"py-4 px-4 text-center\"><span class=\"px-3 py-1 rounded-full text-xs font-medium {}\">{}</span></td></tr>\n",
            rating_badge(row.rating),
            row.rating.as_str()
        ));
    }

    html.push_str("</tbody></table></div></section>\n");
    html
}

fn suggestions(page: &Page<'_>) -> String {
    let t = page.t;
    let mut html = format!(
        "<section class=\"{} {} border rounded-2xl p-6\" id=\"ai-suggestions\"><div class=\"flex items-center space-x-3 mb-6\">{}<h3 class=\"text-xl font-semibold {}\">AI Performance Agent Suggestions</h3></div><div class=\"space-y-4\">\n",
        t.card_bg,
        t.border,
        icon("bot", "text-purple-600"),
        t.text
    );
    for suggestion in &page.view.catalog.ai_suggestions {
        html.push_str(&format!(
            "<div class=\"border-l-4 rounded-lg p-5 {}\" data-impact=\"{}\"><div class=\"flex items-center space-x-2 mb-2\">{}<h4 class=\"font-semibold {}\">{}</h4><span class=\"px-2 py-1 rounded-full text-xs font-medium {}\">{} impact</span></div><p class=\"text-sm {} mb-3\">{}</p><button type=\"button\" class=\"flex items-center space-x-2 px-4 py-2 bg-purple-600 text-white rounded-lg text-sm font-medium\">{}<span>{}</span></button></div>\n",
            impact_card(suggestion.impact),
            suggestion.impact.as_str(),
            icon("sparkles", "text-purple-500"),
            t.text,
            escape(&suggestion.title),
            impact_badge(suggestion.impact),
            suggestion.impact.as_str(),
            t.text_secondary,
            escape(&suggestion.description),
            icon("zap", "w-4 h-4"),
            escape(&suggestion.action)
        ));
    }
    html.push_str("</div></section>\n");
    html
}
