//! Pure filtering and derivation logic over the in-memory collection.

use emoji_host::EmojiRecord;

/// Normalizes caller-supplied tags for admission into a record: trims
/// whitespace, lowercases, drops empties, and deduplicates while keeping the
/// first occurrence's position.
pub fn normalize_tags<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags: Vec<String> = Vec::new();
    for tag in raw {
        let tag = tag.as_ref().trim().to_lowercase();
        if tag.is_empty() || tags.iter().any(|existing| existing == &tag) {
            continue;
        }
        tags.push(tag);
    }
    tags
}

/// The view-filter predicate.
///
/// A record matches when both hold:
/// - search match: `search_term` empty, OR the glyph contains it
///   (case-sensitive), OR the description contains it case-insensitively, OR
///   any tag contains it case-insensitively;
/// - tag match: `selected_tags` empty, OR at least one selected tag is a
///   member of the record's tag set (OR across selections, never AND).
pub fn record_matches_filter(
    record: &EmojiRecord,
    search_term: &str,
    selected_tags: &[String],
) -> bool {
    let matches_search = search_term.is_empty() || {
        let term_lower = search_term.to_lowercase();
        record.emoji.contains(search_term)
            || record
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&term_lower))
            || record
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&term_lower))
    };

    let matches_tags =
        selected_tags.is_empty() || selected_tags.iter().any(|tag| record.has_tag(tag));

    matches_search && matches_tags
}

/// Every tag appearing on any record, deduplicated and lexicographically
/// sorted. Recomputed from scratch on each call.
pub fn tag_universe(records: &[EmojiRecord]) -> Vec<String> {
    let mut tags: Vec<String> = records
        .iter()
        .flat_map(|record| record.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(id: &str, emoji: &str, description: Option<&str>, tags: &[&str]) -> EmojiRecord {
        EmojiRecord {
            id: id.to_string(),
            emoji: emoji.to_string(),
            description: description.map(str::to_string),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at_unix_ms: None,
            updated_at_unix_ms: None,
        }
    }

    #[test]
    fn normalize_tags_lowercases_trims_and_dedups() {
        assert_eq!(
            normalize_tags(["Travel", "  beach ", "TRAVEL", "", "  "]),
            vec!["travel".to_string(), "beach".to_string()]
        );
    }

    #[test]
    fn normalize_tags_keeps_first_occurrence_order() {
        assert_eq!(
            normalize_tags(["night", "aesthetic", "Night"]),
            vec!["night".to_string(), "aesthetic".to_string()]
        );
    }

    #[test]
    fn empty_search_and_tags_match_everything() {
        let r = record("1", "✨", None, &[]);
        assert!(record_matches_filter(&r, "", &[]));
    }

    #[test]
    fn glyph_match_is_case_sensitive_substring() {
        let r = record("1", ":D", None, &[]);
        assert!(record_matches_filter(&r, ":D", &[]));
        assert!(record_matches_filter(&r, "D", &[]));
        // No other field to match through, so the lowered form misses.
        assert!(!record_matches_filter(&r, ":d", &[]));
    }

    #[test]
    fn description_match_is_case_insensitive() {
        let r = record("1", "🌙", Some("Crescent Moon"), &[]);
        assert!(record_matches_filter(&r, "moon", &[]));
        assert!(record_matches_filter(&r, "CRESCENT", &[]));
        assert!(!record_matches_filter(&r, "sun", &[]));
    }

    #[test]
    fn tag_search_match_is_case_insensitive_substring() {
        let r = record("1", "✈️", None, &["transport"]);
        assert!(record_matches_filter(&r, "transp", &[]));
        assert!(record_matches_filter(&r, "SPORT", &[]));
    }

    #[test]
    fn selected_tags_are_or_combined_membership() {
        let travel = record("1", "✈️", None, &["travel", "transport"]);
        let night = record("2", "🌙", None, &["aesthetic", "night"]);

        let selection = vec!["travel".to_string(), "night".to_string()];
        assert!(record_matches_filter(&travel, "", &selection));
        assert!(record_matches_filter(&night, "", &selection));

        let miss = vec!["food".to_string()];
        assert!(!record_matches_filter(&travel, "", &miss));

        // Membership is exact, not substring.
        assert!(!record_matches_filter(&travel, "", &["trav".to_string()]));
    }

    #[test]
    fn search_and_tag_predicates_are_and_combined() {
        let r = record("1", "✈️", Some("Airplane Travel"), &["travel"]);
        assert!(record_matches_filter(&r, "airplane", &["travel".to_string()]));
        assert!(!record_matches_filter(&r, "airplane", &["night".to_string()]));
        assert!(!record_matches_filter(&r, "moon", &["travel".to_string()]));
    }

    #[test]
    fn tag_universe_is_sorted_and_deduplicated() {
        let records = vec![
            record("1", "✈️", None, &["travel", "transport"]),
            record("2", "🏖️", None, &["travel", "beach"]),
            record("3", "🌙", None, &["aesthetic"]),
        ];
        assert_eq!(
            tag_universe(&records),
            vec![
                "aesthetic".to_string(),
                "beach".to_string(),
                "transport".to_string(),
                "travel".to_string(),
            ]
        );
    }

    #[test]
    fn tag_universe_of_untagged_collection_is_empty() {
        let records = vec![record("1", "✨", None, &[])];
        assert!(tag_universe(&records).is_empty());
    }

    #[test]
    fn derivations_are_stable_across_repeated_calls() {
        let records = vec![
            record("1", "✈️", Some("Airplane Travel"), &["travel"]),
            record("2", "🌙", Some("Crescent Moon"), &["night"]),
        ];
        assert_eq!(tag_universe(&records), tag_universe(&records));
        let first: Vec<bool> = records
            .iter()
            .map(|r| record_matches_filter(r, "moon", &[]))
            .collect();
        let second: Vec<bool> = records
            .iter()
            .map(|r| record_matches_filter(r, "moon", &[]))
            .collect();
        assert_eq!(first, second);
    }
}
