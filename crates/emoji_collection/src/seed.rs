//! Starter-set seeding for an empty store.

use emoji_host::{EmojiRecord, EmojiTableStore, StoreError};

/// One built-in starter definition.
#[derive(Debug, Clone, Copy)]
pub struct StarterEmoji {
    /// The glyph to create.
    pub emoji: &'static str,
    /// Display label.
    pub description: &'static str,
    /// Lowercase tags.
    pub tags: &'static [&'static str],
}

/// The built-in starter collection created when the store is empty at
/// session start. One record is created per entry; glyphs that repeat across
/// entries are intentionally not deduplicated.
pub const STARTER_EMOJIS: &[StarterEmoji] = &[
    // Travel & places
    StarterEmoji {
        emoji: "✈️",
        description: "Airplane Travel",
        tags: &["travel", "transport"],
    },
    StarterEmoji {
        emoji: "🏖️",
        description: "Beach Vacation",
        tags: &["travel", "beach", "vacation"],
    },
    StarterEmoji {
        emoji: "🗼",
        description: "Tokyo Tower",
        tags: &["travel", "landmark", "japan"],
    },
    StarterEmoji {
        emoji: "🏛️",
        description: "Classical Building",
        tags: &["travel", "architecture", "culture"],
    },
    StarterEmoji {
        emoji: "🌸",
        description: "Cherry Blossom",
        tags: &["nature", "spring", "aesthetic"],
    },
    StarterEmoji {
        emoji: "🌺",
        description: "Hibiscus Flower",
        tags: &["nature", "tropical", "aesthetic"],
    },
    StarterEmoji {
        emoji: "🌴",
        description: "Palm Tree",
        tags: &["nature", "tropical", "vacation"],
    },
    StarterEmoji {
        emoji: "🏔️",
        description: "Snow Mountain",
        tags: &["nature", "mountain", "winter"],
    },
    // Aesthetic vibes
    StarterEmoji {
        emoji: "✨",
        description: "Sparkles",
        tags: &["aesthetic", "magic", "vibes"],
    },
    StarterEmoji {
        emoji: "🌙",
        description: "Crescent Moon",
        tags: &["aesthetic", "night", "mystical"],
    },
    StarterEmoji {
        emoji: "⭐",
        description: "Star",
        tags: &["aesthetic", "night", "dreams"],
    },
    StarterEmoji {
        emoji: "💫",
        description: "Dizzy Star",
        tags: &["aesthetic", "magic", "sparkle"],
    },
    StarterEmoji {
        emoji: "🌟",
        description: "Glowing Star",
        tags: &["aesthetic", "bright", "special"],
    },
    StarterEmoji {
        emoji: "💖",
        description: "Sparkling Heart",
        tags: &["love", "aesthetic", "cute"],
    },
    StarterEmoji {
        emoji: "💕",
        description: "Two Hearts",
        tags: &["love", "cute", "relationship"],
    },
    StarterEmoji {
        emoji: "🎀",
        description: "Ribbon Bow",
        tags: &["cute", "feminine", "gift"],
    },
    // Food & lifestyle
    StarterEmoji {
        emoji: "🍓",
        description: "Strawberry",
        tags: &["food", "fruit", "sweet"],
    },
    StarterEmoji {
        emoji: "🥐",
        description: "Croissant",
        tags: &["food", "breakfast", "french"],
    },
    StarterEmoji {
        emoji: "☕",
        description: "Coffee",
        tags: &["drink", "morning", "cafe"],
    },
    StarterEmoji {
        emoji: "🧋",
        description: "Bubble Tea",
        tags: &["drink", "asian", "trendy"],
    },
    StarterEmoji {
        emoji: "🍰",
        description: "Cake Slice",
        tags: &["food", "dessert", "celebration"],
    },
    StarterEmoji {
        emoji: "🦋",
        description: "Butterfly",
        tags: &["nature", "transformation", "aesthetic"],
    },
    StarterEmoji {
        emoji: "🌈",
        description: "Rainbow",
        tags: &["nature", "colorful", "pride"],
    },
    // Nature & weather
    StarterEmoji {
        emoji: "🌊",
        description: "Ocean Wave",
        tags: &["nature", "water", "beach"],
    },
    StarterEmoji {
        emoji: "☀️",
        description: "Sun",
        tags: &["weather", "sunny", "happy"],
    },
    StarterEmoji {
        emoji: "🌤️",
        description: "Sun Behind Cloud",
        tags: &["weather", "partly-sunny"],
    },
    StarterEmoji {
        emoji: "🍃",
        description: "Leaves",
        tags: &["nature", "green", "plants"],
    },
    // Fashion & beauty
    StarterEmoji {
        emoji: "💄",
        description: "Lipstick",
        tags: &["beauty", "makeup", "fashion"],
    },
    StarterEmoji {
        emoji: "👗",
        description: "Dress",
        tags: &["fashion", "clothing", "feminine"],
    },
    StarterEmoji {
        emoji: "👠",
        description: "High Heel",
        tags: &["fashion", "shoes", "elegant"],
    },
    StarterEmoji {
        emoji: "💍",
        description: "Ring",
        tags: &["jewelry", "wedding", "luxury"],
    },
    StarterEmoji {
        emoji: "💎",
        description: "Diamond",
        tags: &["luxury", "jewelry", "precious"],
    },
    StarterEmoji {
        emoji: "🌹",
        description: "Red Rose",
        tags: &["love", "romance", "elegant"],
    },
    // Camera & social
    StarterEmoji {
        emoji: "📸",
        description: "Camera Flash",
        tags: &["photography", "social", "memories"],
    },
    StarterEmoji {
        emoji: "🎬",
        description: "Movie Camera",
        tags: &["entertainment", "film", "creative"],
    },
    StarterEmoji {
        emoji: "🎨",
        description: "Artist Palette",
        tags: &["art", "creative", "painting"],
    },
    StarterEmoji {
        emoji: "📚",
        description: "Books",
        tags: &["education", "reading", "knowledge"],
    },
    StarterEmoji {
        emoji: "🎵",
        description: "Musical Note",
        tags: &["music", "entertainment", "sound"],
    },
    StarterEmoji {
        emoji: "🎭",
        description: "Theater Masks",
        tags: &["entertainment", "drama", "performance"],
    },
];

/// Result of one seeding run.
#[derive(Debug, Clone, Default)]
pub struct SeedOutcome {
    /// Records created before the run finished or aborted, in creation order.
    pub created: Vec<EmojiRecord>,
    /// The failure that aborted the run, when one occurred. Records created
    /// before the failure are kept; there is no rollback.
    pub error: Option<StoreError>,
}

/// Creates one record per [`STARTER_EMOJIS`] entry against `table`.
///
/// Creation is sequential; the first failure aborts the remainder and is
/// reported through [`SeedOutcome::error`] alongside the subset that did
/// succeed.
pub async fn seed_starter_set(table: &dyn EmojiTableStore) -> SeedOutcome {
    let mut outcome = SeedOutcome::default();
    for starter in STARTER_EMOJIS {
        let tags: Vec<String> = starter.tags.iter().map(|t| t.to_string()).collect();
        match table
            .create(starter.emoji, Some(starter.description), &tags)
            .await
        {
            Ok(record) => outcome.created.push(record),
            Err(err) => {
                outcome.error = Some(err);
                break;
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use emoji_host::MemoryEmojiTableStore;
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn starter_list_tags_are_lowercase_and_unique_per_entry() {
        for starter in STARTER_EMOJIS {
            for (i, tag) in starter.tags.iter().enumerate() {
                assert_eq!(*tag, tag.to_lowercase(), "tag {tag} must be lowercase");
                assert!(
                    !starter.tags[..i].contains(tag),
                    "duplicate tag {tag} on {}",
                    starter.emoji
                );
            }
            assert!(!starter.emoji.is_empty());
        }
    }

    #[test]
    fn seeding_creates_one_record_per_starter_entry() {
        let table = MemoryEmojiTableStore::default();
        let outcome = block_on(seed_starter_set(&table));

        assert!(outcome.error.is_none());
        assert_eq!(outcome.created.len(), STARTER_EMOJIS.len());
        assert_eq!(table.len(), STARTER_EMOJIS.len());

        for starter in STARTER_EMOJIS {
            let occurrences = outcome
                .created
                .iter()
                .filter(|r| {
                    r.emoji == starter.emoji && r.description.as_deref() == Some(starter.description)
                })
                .count();
            assert_eq!(occurrences, 1, "starter {} seeded once", starter.emoji);
        }
    }

    #[test]
    fn seeded_records_carry_assigned_ids() {
        let table = MemoryEmojiTableStore::default();
        let outcome = block_on(seed_starter_set(&table));

        let mut ids: Vec<&str> = outcome.created.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), STARTER_EMOJIS.len(), "ids are unique");
    }
}
