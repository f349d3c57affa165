//! Display selection
//!
//! Chooses which badges to surface: a compact per-category summary for the
//! dashboard widget, and the full gallery ordering for the achievements page.
//! Presentation only — nothing here affects evaluation.

use std::cmp::Ordering;

use wellness_tracker_shared::models::EarnedBadgeSet;

use crate::catalog::{BadgeCatalog, BadgeCategory, BadgeDefinition};

/// Categories that contribute one representative badge to the summary
const SUMMARY_CATEGORIES: [BadgeCategory; 5] = [
    BadgeCategory::Streak,
    BadgeCategory::Activity,
    BadgeCategory::Fasting,
    BadgeCategory::Sleep,
    BadgeCategory::Anniversary,
];

/// A badge paired with whether the user has earned it
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeStatus {
    pub definition: BadgeDefinition,
    pub earned: bool,
}

/// Representative badges for a compact summary view.
///
/// Per threshold category: the highest-value earned badge, or failing that
/// the lowest-value unearned one as the next goal. Every `special` badge is
/// always included with its earned flag. Output is stably sorted by category
/// name for consistent rendering.
pub fn select_summary_badges(catalog: &BadgeCatalog, earned: &EarnedBadgeSet) -> Vec<BadgeStatus> {
    let mut selected = Vec::new();

    for category in SUMMARY_CATEGORIES {
        let mut entries: Vec<&BadgeDefinition> = catalog.in_category(category).collect();
        entries.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));

        let mut highest_earned = None;
        let mut next_unearned = None;
        for entry in entries {
            if earned.contains(&entry.id) {
                highest_earned = Some(entry);
            } else {
                next_unearned = Some(entry);
                break;
            }
        }

        if let Some(badge) = highest_earned {
            selected.push(BadgeStatus {
                definition: badge.clone(),
                earned: true,
            });
        } else if let Some(badge) = next_unearned {
            selected.push(BadgeStatus {
                definition: badge.clone(),
                earned: false,
            });
        }
    }

    for badge in catalog.in_category(BadgeCategory::Special) {
        selected.push(BadgeStatus {
            definition: badge.clone(),
            earned: earned.contains(&badge.id),
        });
    }

    selected.sort_by_key(|status| status.definition.category.as_str());
    selected
}

/// Full gallery ordering: earned badges first in chronological earn order,
/// then unearned badges in catalog order.
pub fn select_gallery_badges(catalog: &BadgeCatalog, earned: &EarnedBadgeSet) -> Vec<BadgeStatus> {
    let mut earned_entries: Vec<(usize, &BadgeDefinition)> = catalog
        .iter()
        .filter_map(|badge| earned.position(&badge.id).map(|position| (position, badge)))
        .collect();
    earned_entries.sort_by_key(|(position, _)| *position);

    let mut gallery: Vec<BadgeStatus> = earned_entries
        .into_iter()
        .map(|(_, badge)| BadgeStatus {
            definition: badge.clone(),
            earned: true,
        })
        .collect();

    gallery.extend(
        catalog
            .iter()
            .filter(|badge| !earned.contains(&badge.id))
            .map(|badge| BadgeStatus {
                definition: badge.clone(),
                earned: false,
            }),
    );

    gallery
}
