//! Badge catalog — the static registry of every achievement.
//!
//! Badge IDs use SCREAMING_SNAKE_CASE as their string value and are stable
//! across application versions. The catalog is an explicitly constructed,
//! immutable value handed to the evaluator, so tests can substitute fixture
//! catalogs; adding an achievement means appending an entry with a fresh id,
//! a category and a threshold value, with no evaluator changes.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Badge IDs
// ============================================================================

pub const PREMIERE_GORGEE: &str = "PREMIERE_GORGEE";
pub const PREMIER_REPAS: &str = "PREMIER_REPAS";
pub const PREMIERE_ACTIVITE: &str = "PREMIERE_ACTIVITE";
pub const PREMIER_JEUNE: &str = "PREMIER_JEUNE";

pub const STREAK_3: &str = "STREAK_3";
pub const STREAK_7: &str = "STREAK_7";
pub const STREAK_14: &str = "STREAK_14";
pub const STREAK_30: &str = "STREAK_30";
pub const STREAK_90: &str = "STREAK_90";

pub const ACTIVITY_MINS_1000: &str = "ACTIVITY_MINS_1000";
pub const ACTIVITY_MINS_5000: &str = "ACTIVITY_MINS_5000";
pub const ACTIVITY_MINS_10000: &str = "ACTIVITY_MINS_10000";
pub const ACTIVITY_MINS_25000: &str = "ACTIVITY_MINS_25000";

pub const FAST_16H: &str = "FAST_16H";
pub const FAST_24H: &str = "FAST_24H";
pub const FASTING_STREAK_7: &str = "FASTING_STREAK_7";

pub const SLEEP_8H: &str = "SLEEP_8H";
pub const SLEEP_QUALITY_STREAK_3: &str = "SLEEP_QUALITY_STREAK_3";

pub const TOTAL_WATER_100: &str = "TOTAL_WATER_100";
pub const TOTAL_WATER_500: &str = "TOTAL_WATER_500";
pub const TOTAL_WATER_1000: &str = "TOTAL_WATER_1000";
pub const TOTAL_FOOD_100: &str = "TOTAL_FOOD_100";
pub const TOTAL_FOOD_500: &str = "TOTAL_FOOD_500";

pub const ANNIVERSARY_6_MONTHS: &str = "ANNIVERSARY_6_MONTHS";
pub const ANNIVERSARY_1_YEAR: &str = "ANNIVERSARY_1_YEAR";
pub const ANNIVERSARY_2_YEARS: &str = "ANNIVERSARY_2_YEARS";

// ============================================================================
// Types
// ============================================================================

/// Cosmetic badge rank; never consulted by the evaluator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Legendary,
}

/// Rule family a badge belongs to; selects the evaluator predicate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Special,
    Streak,
    Activity,
    Fasting,
    Sleep,
    Total,
    Anniversary,
}

impl BadgeCategory {
    /// Lowercase name, also the ordering key for summary rendering
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeCategory::Special => "special",
            BadgeCategory::Streak => "streak",
            BadgeCategory::Activity => "activity",
            BadgeCategory::Fasting => "fasting",
            BadgeCategory::Sleep => "sleep",
            BadgeCategory::Total => "total",
            BadgeCategory::Anniversary => "anniversary",
        }
    }
}

impl fmt::Display for BadgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BadgeDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tier: BadgeTier,
    pub category: BadgeCategory,
    /// Numeric threshold the category predicate tests against.
    /// Anniversary values are fractional years (0.5 = six months).
    pub value: f64,
}

/// Immutable, ordered registry of all achievements.
///
/// Catalog order is the order newly-earned badges are returned, committed
/// and celebrated in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeCatalog {
    badges: Vec<BadgeDefinition>,
}

impl BadgeCatalog {
    pub fn new(badges: Vec<BadgeDefinition>) -> Self {
        Self { badges }
    }

    pub fn iter(&self) -> impl Iterator<Item = &BadgeDefinition> {
        self.badges.iter()
    }

    pub fn get(&self, id: &str) -> Option<&BadgeDefinition> {
        self.badges.iter().find(|badge| badge.id == id)
    }

    pub fn in_category(&self, category: BadgeCategory) -> impl Iterator<Item = &BadgeDefinition> {
        self.badges.iter().filter(move |badge| badge.category == category)
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}

impl Default for BadgeCatalog {
    fn default() -> Self {
        default_catalog()
    }
}

fn entry(
    id: &str,
    name: &str,
    description: &str,
    tier: BadgeTier,
    category: BadgeCategory,
    value: f64,
) -> BadgeDefinition {
    BadgeDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        tier,
        category,
        value,
    }
}

/// The canonical achievement catalog shipped with the application
pub fn default_catalog() -> BadgeCatalog {
    use BadgeCategory::*;
    use BadgeTier::*;

    BadgeCatalog::new(vec![
        // One-shot firsts
        entry(PREMIERE_GORGEE, "Première Gorgée", "Log your first glass of water.", Bronze, Special, 1.0),
        entry(PREMIER_REPAS, "Premier Repas", "Log your first meal.", Bronze, Special, 1.0),
        entry(PREMIERE_ACTIVITE, "Première Activité", "Log your first activity.", Bronze, Special, 1.0),
        entry(PREMIER_JEUNE, "Premier Jeûne", "Complete your first fast.", Bronze, Special, 1.0),
        // Consecutive logging days
        entry(STREAK_3, "On a Roll", "Log something 3 days in a row.", Bronze, Streak, 3.0),
        entry(STREAK_7, "Full Week", "Log something 7 days in a row.", Silver, Streak, 7.0),
        entry(STREAK_14, "Fortnight", "Log something 14 days in a row.", Gold, Streak, 14.0),
        entry(STREAK_30, "Monthly Habit", "Log something 30 days in a row.", Platinum, Streak, 30.0),
        entry(STREAK_90, "Quarter Master", "Log something 90 days in a row.", Diamond, Streak, 90.0),
        // Cumulative activity minutes
        entry(ACTIVITY_MINS_1000, "Mover", "Accumulate 1,000 activity minutes.", Bronze, Activity, 1000.0),
        entry(ACTIVITY_MINS_5000, "Athlete", "Accumulate 5,000 activity minutes.", Silver, Activity, 5000.0),
        entry(ACTIVITY_MINS_10000, "Machine", "Accumulate 10,000 activity minutes.", Gold, Activity, 10000.0),
        entry(ACTIVITY_MINS_25000, "Iron Will", "Accumulate 25,000 activity minutes.", Platinum, Activity, 25000.0),
        // Fasting milestones
        entry(FAST_16H, "16:8", "Hold a single fast for 16 hours.", Bronze, Fasting, 16.0),
        entry(FAST_24H, "Full Day Fast", "Hold a single fast for 24 hours.", Silver, Fasting, 24.0),
        entry(FASTING_STREAK_7, "Fasting Week", "Complete a fast 7 days in a row.", Gold, Fasting, 7.0),
        // Sleep milestones
        entry(SLEEP_8H, "Solid Eight", "Sleep 8 hours in a single night.", Bronze, Sleep, 480.0),
        entry(SLEEP_QUALITY_STREAK_3, "Well Rested", "Sleep well 3 nights in a row.", Silver, Sleep, 3.0),
        // Cumulative log counts
        entry(TOTAL_WATER_100, "Hydration Habit", "Log water 100 times.", Bronze, Total, 100.0),
        entry(TOTAL_WATER_500, "Fountain", "Log water 500 times.", Silver, Total, 500.0),
        entry(TOTAL_WATER_1000, "Waterfall", "Log water 1,000 times.", Gold, Total, 1000.0),
        entry(TOTAL_FOOD_100, "Food Journal", "Log food 100 times.", Bronze, Total, 100.0),
        entry(TOTAL_FOOD_500, "Gourmet Scribe", "Log food 500 times.", Silver, Total, 500.0),
        // Time with the app
        entry(ANNIVERSARY_6_MONTHS, "Six Months In", "Six months since your first log.", Silver, Anniversary, 0.5),
        entry(ANNIVERSARY_1_YEAR, "One Year", "One year since your first log.", Gold, Anniversary, 1.0),
        entry(ANNIVERSARY_2_YEARS, "Two Years", "Two years since your first log.", Legendary, Anniversary, 2.0),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = default_catalog();
        let ids: HashSet<&str> = catalog.iter().map(|badge| badge.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_catalog_values_are_positive() {
        for badge in default_catalog().iter() {
            assert!(badge.value > 0.0, "{} has non-positive value", badge.id);
        }
    }

    #[test]
    fn test_fixed_id_badges_are_present() {
        let catalog = default_catalog();
        for id in [
            PREMIERE_GORGEE,
            PREMIER_REPAS,
            PREMIERE_ACTIVITE,
            PREMIER_JEUNE,
            FAST_16H,
            FAST_24H,
            FASTING_STREAK_7,
            SLEEP_8H,
            SLEEP_QUALITY_STREAK_3,
        ] {
            assert!(catalog.get(id).is_some(), "missing fixed-id badge {}", id);
        }
    }

    #[test]
    fn test_total_ids_name_their_domain() {
        for badge in default_catalog().in_category(BadgeCategory::Total) {
            assert!(
                badge.id.starts_with("TOTAL_WATER_") || badge.id.starts_with("TOTAL_FOOD_"),
                "total badge {} names no domain",
                badge.id
            );
        }
    }

    #[test]
    fn test_streak_ladder_matches_thresholds() {
        let catalog = default_catalog();
        let values: Vec<f64> = catalog
            .in_category(BadgeCategory::Streak)
            .map(|badge| badge.value)
            .collect();
        assert_eq!(values, vec![3.0, 7.0, 14.0, 30.0, 90.0]);
    }

    #[test]
    fn test_specials_precede_streaks_in_catalog_order() {
        let catalog = default_catalog();
        let first_streak = catalog
            .iter()
            .position(|badge| badge.category == BadgeCategory::Streak)
            .unwrap();
        let last_special = catalog
            .iter()
            .enumerate()
            .filter(|(_, badge)| badge.category == BadgeCategory::Special)
            .map(|(index, _)| index)
            .last()
            .unwrap();
        assert!(last_special < first_streak);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&BadgeCategory::Anniversary).unwrap();
        assert_eq!(json, "\"anniversary\"");
    }
}
