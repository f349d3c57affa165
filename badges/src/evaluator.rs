//! Badge evaluator
//!
//! Decides which achievements a user has newly unlocked. Purely functional:
//! the caller owns the earned set and commits the returned ids itself, which
//! makes evaluation idempotent and safe to re-run on every log mutation.

use chrono::{DateTime, Utc};
use tracing::debug;

use wellness_tracker_shared::models::EarnedBadgeSet;

use crate::catalog::{self, BadgeCatalog, BadgeCategory, BadgeDefinition};
use crate::stats::{derive_stats, LogHistory, UserStats};

/// Whether a single badge qualifies against the derived stats
pub fn qualifies(badge: &BadgeDefinition, stats: &UserStats) -> bool {
    match badge.category {
        // One-shot firsts, dispatched by fixed id
        BadgeCategory::Special => match badge.id.as_str() {
            catalog::PREMIERE_GORGEE => stats.total_water_logs > 0,
            catalog::PREMIER_REPAS => stats.total_food_logs > 0,
            catalog::PREMIERE_ACTIVITE => stats.total_activity_logs > 0,
            catalog::PREMIER_JEUNE => stats.total_completed_fasts > 0,
            _ => false,
        },
        BadgeCategory::Streak => f64::from(stats.current_streak) >= badge.value,
        BadgeCategory::Activity => stats.total_activity_minutes as f64 >= badge.value,
        // Fixed ids: the first two test single-session duration, the third a streak
        BadgeCategory::Fasting => match badge.id.as_str() {
            catalog::FAST_16H | catalog::FAST_24H => stats.max_fast_duration_hours >= badge.value,
            catalog::FASTING_STREAK_7 => f64::from(stats.current_fasting_streak) >= badge.value,
            _ => false,
        },
        BadgeCategory::Sleep => match badge.id.as_str() {
            catalog::SLEEP_8H => f64::from(stats.max_sleep_duration_minutes) >= badge.value,
            catalog::SLEEP_QUALITY_STREAK_3 => {
                f64::from(stats.current_sleep_quality_streak) >= badge.value
            }
            _ => false,
        },
        // Disambiguated by the domain named in the id
        BadgeCategory::Total => {
            if badge.id.starts_with("TOTAL_WATER_") {
                stats.total_water_logs as f64 >= badge.value
            } else if badge.id.starts_with("TOTAL_FOOD_") {
                stats.total_food_logs as f64 >= badge.value
            } else {
                false
            }
        }
        BadgeCategory::Anniversary => stats.years_with_app >= badge.value,
    }
}

/// Newly-qualifying badges given already-derived stats, in catalog order
pub fn evaluate_with_stats(
    catalog: &BadgeCatalog,
    stats: &UserStats,
    earned: &EarnedBadgeSet,
) -> Vec<BadgeDefinition> {
    catalog
        .iter()
        .filter(|badge| !earned.contains(&badge.id))
        .filter(|badge| qualifies(badge, stats))
        .cloned()
        .collect()
}

/// Evaluate the full catalog against the raw logs.
///
/// Returns exactly the badges that newly qualify — never one already in
/// `earned`, each at most once, in catalog order (which is also commit and
/// celebration order). Short-circuits before deriving stats when every badge
/// is already earned.
pub fn evaluate_new_badges(
    catalog: &BadgeCatalog,
    history: &LogHistory<'_>,
    earned: &EarnedBadgeSet,
    now: DateTime<Utc>,
) -> Vec<BadgeDefinition> {
    if catalog.iter().all(|badge| earned.contains(&badge.id)) {
        return Vec::new();
    }

    let stats = derive_stats(history, now);
    let newly_earned = evaluate_with_stats(catalog, &stats, earned);
    if !newly_earned.is_empty() {
        debug!(
            count = newly_earned.len(),
            ids = ?newly_earned.iter().map(|badge| badge.id.as_str()).collect::<Vec<_>>(),
            "badges newly qualified"
        );
    }
    newly_earned
}
