//! Engagement kind -> storage location

use reelmate_core::EngagementKind;

/// Edge table and the `food_posts` counter column it drives
///
/// Both names are compile-time constants, so they can be spliced into SQL
/// text without escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementTable {
    pub edges: &'static str,
    pub counter: &'static str,
}

impl From<EngagementKind> for EngagementTable {
    fn from(kind: EngagementKind) -> Self {
        match kind {
            EngagementKind::Like => Self {
                edges: "food_likes",
                counter: "like_count",
            },
            EngagementKind::Save => Self {
                edges: "food_saves",
                counter: "save_count",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_map_to_distinct_tables() {
        let like = EngagementTable::from(EngagementKind::Like);
        let save = EngagementTable::from(EngagementKind::Save);

        assert_eq!(like.edges, "food_likes");
        assert_eq!(like.counter, "like_count");
        assert_eq!(save.edges, "food_saves");
        assert_eq!(save.counter, "save_count");
    }
}
