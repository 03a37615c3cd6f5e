//! Keyword search over the documentation catalog

use super::catalog::{DocEntry, CATALOG};

/// One search result with its relevance score
#[derive(Debug, Clone, Copy)]
pub struct SearchHit {
    pub entry: &'static DocEntry,
    pub score: u8,
}

/// Search the catalog for a keyword, case-insensitively.
///
/// An option-name match scores 3, a category match 2, a description
/// match 1. Results are ordered by score descending; entries with equal
/// scores keep catalog order. An empty query returns no hits.
pub fn search(query: &str) -> Vec<SearchHit> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = CATALOG
        .iter()
        .filter_map(|entry| {
            let score = if entry.option.to_lowercase().contains(&term) {
                3
            } else if entry.category.to_lowercase().contains(&term) {
                2
            } else if entry.description.to_lowercase().contains(&term) {
                1
            } else {
                return None;
            };
            Some(SearchHit { entry, score })
        })
        .collect();

    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::catalog::EntryKind;

    #[test]
    fn test_empty_query_returns_nothing() {
        assert!(search("").is_empty());
        assert!(search("   ").is_empty());
    }

    #[test]
    fn test_no_match_returns_nothing() {
        assert!(search("zzzznotanoption").is_empty());
    }

    #[test]
    fn test_case_insensitive_option_match() {
        let hits = search("health");
        assert!(!hits.is_empty());
        assert_eq!(hits[0].score, 3);
        assert_eq!(hits[0].entry.option, "Health");
    }

    #[test]
    fn test_option_matches_outrank_description_matches() {
        // "damage" appears in several descriptions and two option names
        let hits = search("damage");
        let mut seen_lower_score = false;
        for hit in &hits {
            if hit.score < 3 {
                seen_lower_score = true;
            } else {
                assert!(
                    !seen_lower_score,
                    "option match ranked below a weaker match"
                );
            }
        }
        assert_eq!(hits[0].entry.option, "Damage");
    }

    #[test]
    fn test_category_match_scores_two() {
        let hits = search("disguise");
        assert!(hits
            .iter()
            .any(|h| h.score == 2 && h.entry.category == "Disguise"));
    }

    #[test]
    fn test_equal_scores_keep_catalog_order() {
        let hits = search("boss");
        let bossbar: Vec<&str> = hits
            .iter()
            .filter(|h| h.entry.category == "BossBar" && h.score == 2)
            .map(|h| h.entry.option)
            .collect();
        assert_eq!(
            bossbar,
            vec!["Enabled", "Title", "Range", "Color", "Style", "DarkenSky"]
        );
    }

    #[test]
    fn test_both_kinds_are_searchable() {
        let hits = search("Damage");
        assert!(hits.iter().any(|h| h.entry.kind == EntryKind::Boss));
        assert!(hits.iter().any(|h| h.entry.kind == EntryKind::Item));
    }
}
