use crate::catalog::ArticleRecord;

// live article search
//
// a single pass over the catalog matching the query against title and category, with no
// ranking of any kind.  each search surface (desktop navbar, mobile menu) calls this on
// its own, so nothing here is stateful

// counted in chars, so one astral character is one, not two utf-16 units
pub const MIN_QUERY_CHARS: usize = 2;
pub const MAX_RESULTS: usize = 8;

pub const NO_RESULTS_TEXT: &str = "No articles found";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    // the query is too short to search, so the results surface should be hidden entirely
    Suppressed,
    // possibly empty, which is rendered as NO_RESULTS_TEXT rather than an empty list
    Results(Vec<&'a ArticleRecord>),
}

impl<'a> SearchOutcome<'a> {
    pub fn records(&self) -> &[&'a ArticleRecord] {
        match self {
            SearchOutcome::Suppressed => &[],
            SearchOutcome::Results(records) => records.as_slice(),
        }
    }
}

pub fn is_searchable(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_CHARS
}

pub fn filter<'a>(query: &str, catalog: &'a [ArticleRecord]) -> SearchOutcome<'a> {
    if !is_searchable(query) {
        return SearchOutcome::Suppressed;
    }

    let needle = query.to_lowercase();

    let records = catalog
        .iter()
        .filter(|record| {
            record.title.to_lowercase().contains(&needle)
                || record.category.to_lowercase().contains(&needle)
        })
        .take(MAX_RESULTS)
        .collect();

    SearchOutcome::Results(records)
}

// markup for the results dropdown, or None when the surface should be hidden
pub fn render_results(outcome: &SearchOutcome) -> Option<String> {
    match outcome {
        SearchOutcome::Suppressed => None,
        SearchOutcome::Results(records) if records.is_empty() => Some(format!(
            r#"<div class="p-4 text-gray-500 dark:text-gray-400">{NO_RESULTS_TEXT}</div>"#
        )),
        SearchOutcome::Results(records) => Some(
            records
                .iter()
                .map(|record| render_record(record))
                .collect::<Vec<String>>()
                .join(""),
        ),
    }
}

fn render_record(record: &ArticleRecord) -> String {
    let url = escape_html(record.url);
    let category = escape_html(record.category);
    let title = escape_html(record.title);

    format!(
        r#"<a href="{url}" class="block p-4 hover:bg-gray-50 dark:hover:bg-gray-700 transition border-b border-gray-200 dark:border-gray-700 last:border-0"><div class="text-xs text-blue-600 dark:text-blue-400 mb-1">{category}</div><div class="font-semibold text-gray-800 dark:text-gray-200">{title}</div></a>"#
    )
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
