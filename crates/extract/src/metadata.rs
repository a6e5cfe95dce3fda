//! Title and code heuristics for document file names and spec pages.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static LEADING_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})").expect("leading code pattern"));

static LINK_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})spe\.html").expect("link code pattern"));

static TRAILING_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}\d{4}$").expect("trailing code pattern"));

/// Leading 4-digit code of a file name, or the fallback
///
/// "0009 - SUPPORT SERVICES SUPERVISOR.txt" -> "0009"
pub fn code_from_file_name(file_name: &str, fallback: Option<&str>) -> Option<String> {
    LEADING_CODE
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .or_else(|| fallback.map(str::to_string))
}

/// File stem, keeping only what follows the first " - "
pub fn title_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    match stem.split_once(" - ") {
        Some((_, title)) => title.to_string(),
        None => stem,
    }
}

/// Code from a spec link such as "specs/0123spe.html"
pub fn code_from_link(href: &str) -> Option<String> {
    LINK_CODE
        .captures(href)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Heading text with a trailing "   1234" code removed
pub fn clean_heading(heading: &str) -> String {
    let heading = heading.trim();
    TRAILING_CODE.replace(heading, "").trim().to_string()
}
