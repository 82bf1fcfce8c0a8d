//! HTML rendering of search results.
//!
//! A [`View`] stands in for a DOM container: its content is replaced
//! wholesale on every render, never diffed. The [`ResultRenderer`] owns the
//! list view, the detail view, and the records behind the current list so
//! that selecting an entry re-renders the detail without another fetch.

use crate::models::Country;

/// An owned rendering surface. Content is always overwritten as a whole.
#[derive(Debug, Default)]
pub struct View {
    html: String,
}

impl View {
    pub fn set_html(&mut self, html: String) {
        self.html = html;
    }

    /// Safe to call when already empty.
    pub fn clear(&mut self) {
        self.html.clear();
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// Minimal HTML text escaping for interpolated values.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn list_item(country: &Country) -> String {
    format!(
        "<li class=\"list\">\n  <img src=\"{}\" width=\"60\" height=\"40\" alt=\"Flag of {}\">\n  <p class=\"text\">{}</p>\n</li>",
        escape(&country.flag_url),
        escape(&country.common_name),
        escape(&country.common_name),
    )
}

fn detail_card(country: &Country) -> String {
    format!(
        "<div class=\"country-card\">\n  <img src=\"{}\" width=\"80\" height=\"60\" alt=\"Flag of {}\">\n  <h1 class=\"text\">{}</h1>\n  <p>Capital: {}</p>\n  <p>Population: {}</p>\n  <p>Languages: {}</p>\n</div>",
        escape(&country.flag_url),
        escape(&country.common_name),
        escape(&country.common_name),
        escape(country.capital.as_deref().unwrap_or("")),
        country.population,
        escape(&country.language_names()),
    )
}

#[derive(Debug, Default)]
pub struct ResultRenderer {
    list_view: View,
    detail_view: View,
    /// Records behind the current list; selection indexes into these.
    listed: Vec<Country>,
}

impl ResultRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list view with one entry per record and remember the
    /// records for [`ResultRenderer::select`].
    pub fn render_list(&mut self, records: Vec<Country>) {
        let items: Vec<String> = records.iter().map(list_item).collect();
        self.list_view
            .set_html(format!("<ul class=\"country-list\">\n{}\n</ul>", items.join("\n")));
        self.listed = records;
    }

    /// Replace the detail view with a single country card.
    pub fn render_detail(&mut self, record: &Country) {
        self.detail_view.set_html(detail_card(record));
    }

    /// Render the detail view for list entry `index`, leaving the list
    /// untouched. Returns false for an out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        match self.listed.get(index) {
            Some(record) => {
                self.detail_view.set_html(detail_card(record));
                true
            }
            None => false,
        }
    }

    pub fn clear_list(&mut self) {
        self.list_view.clear();
        self.listed.clear();
    }

    pub fn clear_detail(&mut self) {
        self.detail_view.clear();
    }

    pub fn clear_all(&mut self) {
        self.clear_list();
        self.clear_detail();
    }

    pub fn list_view(&self) -> &View {
        &self.list_view
    }

    pub fn detail_view(&self) -> &View {
        &self.detail_view
    }

    /// Number of entries behind the current list.
    pub fn listed_len(&self) -> usize {
        self.listed.len()
    }
}
