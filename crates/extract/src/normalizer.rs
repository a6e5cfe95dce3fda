use regex::Regex;
use std::sync::LazyLock;

static ITEM_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",|\bor\b|;").expect("item separator pattern"));

/// Turns a candidate clause into accepted parent titles
#[derive(Debug, Clone)]
pub struct TitleNormalizer {
    /// Uppercased denylist tokens
    denylist: Vec<String>,
}

impl TitleNormalizer {
    pub fn new(denylist: &[String]) -> Self {
        Self {
            denylist: denylist.iter().map(|s| s.to_uppercase()).collect(),
        }
    }

    /// Split a clause on commas, semicolons and the word "or", keeping accepted items
    pub fn titles(&self, clause: &str) -> Vec<String> {
        ITEM_SEPARATOR
            .split(clause)
            .filter_map(|item| self.normalize(item))
            .collect()
    }

    /// Clean one item and run the acceptance test
    pub fn normalize(&self, item: &str) -> Option<String> {
        let clean = clean_item(item);
        self.accepts(&clean).then_some(clean)
    }

    pub fn accepts(&self, title: &str) -> bool {
        if title.is_empty() || title.chars().count() <= 3 {
            return false;
        }

        let upper = title.to_uppercase();
        !self.denylist.iter().any(|token| upper.contains(token.as_str()))
    }
}

/// Trim, flatten newlines, drop the "n " left behind by the introducer, drop one trailing separator
pub fn clean_item(item: &str) -> String {
    let mut clean = item.trim().replace('\n', " ");

    let without_article = clean
        .strip_prefix("n ")
        .filter(|rest| rest.chars().next().is_some_and(char::is_uppercase))
        .map(str::to_string);
    if let Some(rest) = without_article {
        clean = rest;
    }

    let clean = clean
        .strip_suffix(';')
        .or_else(|| clean.strip_suffix(','))
        .unwrap_or(clean.as_str());

    clean.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractorConfig;

    fn page() -> TitleNormalizer {
        TitleNormalizer::new(&ExtractorConfig::page().denylist)
    }

    fn document() -> TitleNormalizer {
        TitleNormalizer::new(&ExtractorConfig::document().denylist)
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            page().titles("Senior Clerk, Clerk Typist or Typist"),
            vec!["Senior Clerk", "Clerk Typist", "Typist"]
        );
    }

    #[test]
    fn test_or_inside_word_is_not_a_separator() {
        assert_eq!(page().titles("Senior Operator; Editor"), vec!["Senior Operator", "Editor"]);
    }

    #[test]
    fn test_clean_item() {
        assert_eq!(clean_item("  Account\nClerk  "), "Account Clerk");
        assert_eq!(clean_item("n Account Clerk Typist;"), "Account Clerk Typist");
        assert_eq!(clean_item("Typist,"), "Typist");
        // Only stripped when an uppercase letter follows
        assert_eq!(clean_item("n account clerk"), "n account clerk");
    }

    #[test]
    fn test_short_items_rejected() {
        assert_eq!(page().normalize("  RN "), None);
        assert_eq!(page().normalize("Aide"), Some("Aide".to_string()));
        assert_eq!(page().normalize(""), None);
    }

    #[test]
    fn test_denylist_is_case_insensitive_substring() {
        assert_eq!(page().normalize("Suffolk Clerk"), None);
        assert_eq!(page().normalize("two years"), None);
        assert_eq!(page().normalize("Telephone Operator"), Some("Telephone Operator".to_string()));
        assert_eq!(document().normalize("Telephone Operator"), None);
        assert_eq!(document().normalize("at least one year"), None);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let normalizer = document();
        for item in ["n Senior Clerk;", "  Clerk\nTypist ", "Account Clerk Typist,"] {
            let once = normalizer.normalize(item).unwrap();
            let twice = normalizer.normalize(&once).unwrap();
            assert_eq!(once, twice);
        }
    }
}
