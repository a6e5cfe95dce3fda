use anyhow::Result;
use extract::SpecDocument;
use extract::metadata::{clean_heading, code_from_link};
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<]+?>").expect("tag pattern"));

/// Spec codes linked from the all-titles index, unique, in page order
pub fn spec_codes(index_html: &str) -> Vec<String> {
    let document = Html::parse_document(index_html);
    let link_selector = match Selector::parse("a[href*='specs/']") {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    let mut seen = HashSet::new();
    document
        .select(&link_selector)
        .filter_map(|el| el.value().attr("href"))
        .filter_map(code_from_link)
        .filter(|code| seen.insert(code.clone()))
        .collect()
}

/// Text of the first h1, h2 or b element, without a trailing code
pub fn heading_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let heading_selector = Selector::parse("h1, h2, b").ok()?;

    document
        .select(&heading_selector)
        .next()
        .map(|el| clean_heading(&el.text().collect::<String>()))
}

/// Remove every tag, leaving entities and whitespace untouched
pub fn strip_markup(html: &str) -> String {
    TAG.replace_all(html, "").to_string()
}

/// Build a `SpecDocument` from a fetched spec page
pub fn parse_spec_page(code: &str, html: &str) -> Result<SpecDocument> {
    let Some(title) = heading_title(html) else {
        anyhow::bail!("No heading found on spec page {}", code);
    };

    Ok(SpecDocument {
        code: code.to_string(),
        title,
        raw_text: strip_markup(html),
    })
}
