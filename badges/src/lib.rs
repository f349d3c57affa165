//! Wellness Tracker Achievement Engine
//!
//! Derives streaks, cumulative totals and milestone crossings from the
//! heterogeneous wellness logs (water, food, activity, fasting, sleep) and
//! decides, idempotently, which achievements a user has newly unlocked.
//!
//! The pipeline is pure end to end: [`stats::derive_stats`] reduces the raw
//! logs to scalars, [`evaluator::evaluate_new_badges`] tests the not-yet-
//! earned subset of an injected [`catalog::BadgeCatalog`] against them, and
//! [`display`] picks what to render. [`tracker::WellnessTracker`] is the
//! stateful facade that wires these together for the application shell.

pub mod catalog;
pub mod display;
pub mod evaluator;
pub mod queue;
pub mod stats;
pub mod tracker;

// Re-export commonly used items
pub use catalog::{default_catalog, BadgeCatalog, BadgeCategory, BadgeDefinition, BadgeTier};
pub use display::{select_gallery_badges, select_summary_badges, BadgeStatus};
pub use evaluator::{evaluate_new_badges, evaluate_with_stats, qualifies};
pub use queue::CelebrationQueue;
pub use stats::{derive_stats, LogHistory, UserStats};
pub use tracker::WellnessTracker;
