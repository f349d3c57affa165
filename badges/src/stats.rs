//! Statistic derivation over the raw log stores
//!
//! Pure reductions from the five log collections to the scalar and streak
//! statistics the badge predicates are evaluated against. No I/O, no side
//! effects; the clock is an explicit parameter so tests control "today".
//!
//! # Day-key convention
//!
//! Calendar-day keys are taken in UTC (`DateTime<Utc>::date_naive()`), for
//! every domain. UTC has no DST, so a streak can never gain or lose a day
//! across a transition; the trade-off is that a log close to local midnight
//! may land on the neighboring UTC day.

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashSet;

use wellness_tracker_shared::models::{ActivityLog, FastingLog, FoodLog, SleepLog, WaterLog};

/// Seconds in an average Gregorian year (365.25 days)
const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 3600.0;

/// Read-only view over the application's log stores
#[derive(Debug, Clone, Copy)]
pub struct LogHistory<'a> {
    pub water: &'a [WaterLog],
    pub food: &'a [FoodLog],
    pub activity: &'a [ActivityLog],
    pub fasting: &'a [FastingLog],
    pub sleep: &'a [SleepLog],
    /// Timestamp of the very first log of any domain; set once, never updated
    pub first_log_date: Option<DateTime<Utc>>,
}

/// Derived statistics the badge predicates consume
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserStats {
    pub total_water_logs: usize,
    pub total_food_logs: usize,
    pub total_activity_logs: usize,
    pub total_activity_minutes: i64,
    pub total_completed_fasts: usize,
    /// Longest single completed fast, in fractional hours
    pub max_fast_duration_hours: f64,
    pub max_sleep_duration_minutes: i32,
    /// Consecutive days with any water/food/activity log
    pub current_streak: u32,
    /// Consecutive days with a completed fast (keyed by end time)
    pub current_fasting_streak: u32,
    /// Consecutive days with a good-or-excellent sleep log
    pub current_sleep_quality_streak: u32,
    /// Fractional years since the first log; 0 when there is none
    pub years_with_app: f64,
}

/// Calendar-day key for a timestamp, in UTC
pub fn day_key(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.date_naive()
}

/// Count consecutive active days ending at `today`, or at yesterday when
/// today has no activity yet (the streak stays alive until the day elapses).
/// Zero when neither today nor yesterday is active.
pub fn consecutive_days(active_days: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut cursor = if active_days.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) => yesterday,
            None => return 0,
        }
    };

    let mut streak = 0;
    while active_days.contains(&cursor) {
        streak += 1;
        match cursor.pred_opt() {
            Some(previous) => cursor = previous,
            None => break,
        }
    }
    streak
}

/// Reduce the raw logs to the statistics the evaluator needs.
///
/// Empty collections yield zeroed stats; malformed records (negative
/// durations, fasts ending before they start) contribute zero rather than
/// failing.
pub fn derive_stats(history: &LogHistory<'_>, now: DateTime<Utc>) -> UserStats {
    let today = day_key(now);

    let total_activity_minutes: i64 = history
        .activity
        .iter()
        .map(|log| i64::from(log.duration_minutes.max(0)))
        .sum();

    let completed_fasts: Vec<&FastingLog> = history
        .fasting
        .iter()
        .filter(|fast| fast.is_completed())
        .collect();

    let max_fast_duration_hours = completed_fasts
        .iter()
        .filter_map(|fast| fast.duration_hours())
        .fold(0.0_f64, f64::max);

    let max_sleep_duration_minutes = history
        .sleep
        .iter()
        .map(|log| log.duration_minutes.max(0))
        .max()
        .unwrap_or(0);

    let mut daily_logs: HashSet<NaiveDate> = HashSet::new();
    daily_logs.extend(history.water.iter().map(|log| day_key(log.logged_at)));
    daily_logs.extend(history.food.iter().map(|log| day_key(log.logged_at)));
    daily_logs.extend(history.activity.iter().map(|log| day_key(log.logged_at)));

    let fasting_days: HashSet<NaiveDate> = completed_fasts
        .iter()
        .filter_map(|fast| fast.ended_at.map(day_key))
        .collect();

    let restful_sleep_days: HashSet<NaiveDate> = history
        .sleep
        .iter()
        .filter(|log| log.quality.is_restful())
        .map(|log| day_key(log.logged_at))
        .collect();

    let years_with_app = history
        .first_log_date
        .map(|first| {
            let seconds = (now - first).num_seconds().max(0);
            seconds as f64 / SECONDS_PER_YEAR
        })
        .unwrap_or(0.0);

    UserStats {
        total_water_logs: history.water.len(),
        total_food_logs: history.food.len(),
        total_activity_logs: history.activity.len(),
        total_activity_minutes,
        total_completed_fasts: completed_fasts.len(),
        max_fast_duration_hours,
        max_sleep_duration_minutes,
        current_streak: consecutive_days(&daily_logs, today),
        current_fasting_streak: consecutive_days(&fasting_days, today),
        current_sleep_quality_streak: consecutive_days(&restful_sleep_days, today),
        years_with_app,
    }
}
