// Rendered HTML → de-duplicated plain text.

use std::collections::HashSet;

use scraper::{Html, Selector};

/// Strip `<script>` and `<style>` elements from rendered markup, collect the
/// remaining visible text, and collapse it to trimmed, de-duplicated lines.
pub fn clean_page_text(html: &str) -> String {
    let text = visible_text(html);
    dedup_lines(&text)
}

/// Text content of the document with script and style elements removed.
fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut stripped = document.html();
    for tag in ["script", "style"] {
        let selector = Selector::parse(tag).expect("valid selector");
        for element in document.select(&selector) {
            stripped = stripped.replace(&element.html(), "");
        }
    }

    let document = Html::parse_document(&stripped);
    document.root_element().text().collect()
}

/// Trim each line, drop empties, and keep only the first occurrence of any
/// repeated line, preserving insertion order. Note this also drops lines that
/// legitimately repeat on the page (a price shown twice keeps one copy).
fn dedup_lines(text: &str) -> String {
    let mut seen = HashSet::new();
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && seen.insert(*line))
        .collect();
    lines.join("\n")
}
