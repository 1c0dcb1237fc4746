//! The persisted emoji entity shared by every layer.

use serde::{Deserialize, Serialize};

/// One stored emoji entry.
///
/// `tags` defaults to empty on decode so payloads written before the tags
/// field existed still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    /// Opaque store-assigned identifier, unique across the collection and
    /// immutable after creation.
    pub id: String,
    /// The glyph or short textual emoticon. Never empty once admitted.
    pub emoji: String,
    /// Optional human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Lowercase tags in insertion order; no duplicates within one record.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Store-assigned creation time in unix milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_unix_ms: Option<u64>,
    /// Store-assigned last-update time in unix milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at_unix_ms: Option<u64>,
}

impl EmojiRecord {
    /// Returns true when `tag` is a member of this record's tag set.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn record_serialization_shape_is_compatible() {
        let record = EmojiRecord {
            id: "1700000000000".to_string(),
            emoji: "✨".to_string(),
            description: Some("Sparkles".to_string()),
            tags: vec!["aesthetic".to_string(), "magic".to_string()],
            created_at_unix_ms: Some(1_700_000_000_000),
            updated_at_unix_ms: Some(1_700_000_000_000),
        };

        let value = serde_json::to_value(&record).expect("serialize record");
        let object = value.as_object().expect("object");
        assert_eq!(object.get("id"), Some(&json!("1700000000000")));
        assert_eq!(object.get("emoji"), Some(&json!("✨")));
        assert_eq!(object.get("description"), Some(&json!("Sparkles")));
        assert_eq!(object.get("tags"), Some(&json!(["aesthetic", "magic"])));
        assert_eq!(
            object.get("created_at_unix_ms"),
            Some(&json!(1_700_000_000_000u64))
        );
    }

    #[test]
    fn absent_optional_fields_are_not_serialized() {
        let record = EmojiRecord {
            id: "1".to_string(),
            emoji: ":)".to_string(),
            description: None,
            tags: Vec::new(),
            created_at_unix_ms: None,
            updated_at_unix_ms: None,
        };

        let value = serde_json::to_value(&record).expect("serialize record");
        let object = value.as_object().expect("object");
        assert!(!object.contains_key("description"));
        assert!(!object.contains_key("created_at_unix_ms"));
        assert!(!object.contains_key("updated_at_unix_ms"));
        assert_eq!(object.get("tags"), Some(&json!([])));
    }

    #[test]
    fn pre_tags_payload_decodes_with_empty_tag_set() {
        let record: EmojiRecord =
            serde_json::from_value(json!({"id": "7", "emoji": "🌙", "description": "Moon"}))
                .expect("decode legacy payload");
        assert_eq!(record.emoji, "🌙");
        assert!(record.tags.is_empty());
    }

    #[test]
    fn has_tag_matches_exact_members_only() {
        let record = EmojiRecord {
            id: "1".to_string(),
            emoji: "✈️".to_string(),
            description: None,
            tags: vec!["travel".to_string(), "transport".to_string()],
            created_at_unix_ms: None,
            updated_at_unix_ms: None,
        };
        assert!(record.has_tag("travel"));
        assert!(!record.has_tag("trav"));
        assert!(!record.has_tag("TRAVEL"));
    }
}
