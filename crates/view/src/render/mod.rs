//! HTML rendering of the studio screen.
//!
//! Every interactive element is a plain link or GET form whose target is the
//! current view state with one `StudioEvent` applied, so the page works
//! without client-side scripting.

mod execution;
mod overview;
mod performance;
mod scheduler;

use crate::calendar::CalendarView;
use crate::html::{escape, icon};
use crate::state::{StudioEvent, Tab, ViewState};
use crate::theme::{ThemeClasses, ThemeProvider};
use crate::view_model::StudioView;
use studio_core::Catalog;

/// Everything a section renderer can read.
pub(crate) struct Page<'a> {
    pub view: StudioView<'a>,
    pub theme: &'a dyn ThemeProvider,
    pub t: ThemeClasses,
    pub calendar: &'a dyn CalendarView,
}

impl Page<'_> {
    /// `href` value for the state reached by `event`, already escaped.
    pub fn link(&self, event: StudioEvent) -> String {
        let next = self.view.state.with(event, self.view.catalog);
        escape(&next.to_query(Some(self.theme.name())))
    }

    /// Hidden inputs carrying the state a GET form does not edit itself.
    pub fn hidden_state_inputs(&self) -> String {
        let state = self.view.state;
        let mut html = String::new();
        html.push_str(&format!(
            "<input type=\"hidden\" name=\"tab\" value=\"{}\"/>",
            state.tab.as_str()
        ));
        if let Some(id) = state.selected_id() {
            html.push_str(&format!(
                "<input type=\"hidden\" name=\"campaign\" value=\"{}\"/>",
                escape(id)
            ));
        }
        html.push_str(&format!(
            "<input type=\"hidden\" name=\"execution\" value=\"{}\"/>",
            state.execution.as_str()
        ));
        html.push_str(&format!(
            "<input type=\"hidden\" name=\"theme\" value=\"{}\"/>",
            self.theme.name()
        ));
        html
    }
}

fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Overview => "folder-open",
        Tab::Scheduler => "calendar-check",
        Tab::Execution => "play",
        Tab::Performance => "bar-chart-3",
    }
}

/// Render the full HTML document for `state`.
pub fn render_page(
    state: &ViewState,
    catalog: &Catalog,
    theme: &dyn ThemeProvider,
    calendar: &dyn CalendarView,
) -> String {
    let page = Page {
        view: StudioView::derive(state, catalog),
        theme,
        t: theme.classes(),
        calendar,
    };
    let t = page.t;

    let mut html = String::from("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width,initial-scale=1\"><title>Marketing Studio</title><script src=\"https://cdn.tailwindcss.com\"></script><script src=\"https://unpkg.com/lucide@latest\"></script></head>\n");
    html.push_str(&format!(
        "<body class=\"min-h-screen {}\"><div class=\"space-y-6 md:space-y-8 p-6 md:p-8\">\n",
        t.bg
    ));

    html.push_str(&format!(
        "<header><div class=\"flex items-center space-x-3 mb-2\">{}<h2 class=\"text-3xl font-bold {} bg-gradient-to-r from-green-600 to-blue-600 bg-clip-text text-transparent\">Marketing Studio</h2></div><p class=\"{}\">Execute, monitor, and optimize your approved campaigns</p></header>\n",
        icon("target", t.text),
        t.text,
        t.text_secondary
    ));

    html.push_str(&render_tabs(&page));

    let section = match state.tab {
        Tab::Overview => overview::render(&page),
        Tab::Scheduler => scheduler::render(&page),
        Tab::Execution => execution::render(&page),
        Tab::Performance => performance::render(&page),
    };
    html.push_str(&format!(
        "<main id=\"section-{}\" class=\"space-y-6\">\n{}</main>\n",
        state.tab.as_str(),
        section
    ));

    html.push_str("</div><script>lucide.createIcons();</script></body></html>\n");
    html
}

fn render_tabs(page: &Page<'_>) -> String {
    let t = page.t;
    let mut html = format!(
        "<nav class=\"{} {} border rounded-xl p-2\"><div class=\"flex space-x-2 overflow-x-auto\">\n",
        t.card_bg, t.border
    );
    for tab in Tab::ALL {
        let active = page.view.state.tab == tab;
        let class = if active {
            format!("{} text-white shadow-lg", t.accent)
        } else {
            format!("{} {}", t.text, t.hover)
        };
        html.push_str(&format!(
            "<a href=\"{}\" class=\"flex items-center px-4 py-3 rounded-xl font-medium whitespace-nowrap {}\"{}>{}{}</a>\n",
            page.link(StudioEvent::SelectTab(tab)),
            class,
            if active { " aria-current=\"page\"" } else { "" },
            icon(tab_icon(tab), "mr-2"),
            tab.label()
        ));
    }
    html.push_str("</div></nav>\n");
    html
}
