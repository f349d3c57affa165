//! Data models for the Wellness Tracker application

use chrono::{DateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Water intake log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterLog {
    pub id: Uuid,
    /// Amount drunk, in milliliters
    pub amount_ml: i32,
    pub logged_at: DateTime<Utc>,
}

/// Food log entry with macronutrients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodLog {
    pub id: Uuid,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub logged_at: DateTime<Utc>,
}

/// Physical activity log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: Uuid,
    pub duration_minutes: i32,
    pub logged_at: DateTime<Utc>,
}

/// Fasting session status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FastingStatus {
    Active,
    Completed,
}

/// Fasting session log
///
/// At most one record may be `Active` at a time; a `Completed` record always
/// has a non-null `ended_at` that is not before `started_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FastingLog {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    pub status: FastingStatus,
}

impl FastingLog {
    pub fn is_completed(&self) -> bool {
        self.status == FastingStatus::Completed && self.ended_at.is_some()
    }

    /// Duration of a completed fast in fractional hours.
    ///
    /// Returns `None` for active sessions; a malformed record whose end
    /// precedes its start counts as zero rather than a negative duration.
    pub fn duration_hours(&self) -> Option<f64> {
        if self.status != FastingStatus::Completed {
            return None;
        }
        let ended_at = self.ended_at?;
        let seconds = (ended_at - self.started_at).num_seconds().max(0);
        Some(seconds as f64 / 3600.0)
    }
}

/// Subjective sleep quality rating
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Bad,
    Average,
    Good,
    Excellent,
}

impl SleepQuality {
    /// Whether this rating counts toward the sleep-quality streak
    pub fn is_restful(&self) -> bool {
        matches!(self, SleepQuality::Good | SleepQuality::Excellent)
    }
}

impl std::str::FromStr for SleepQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bad" => Ok(SleepQuality::Bad),
            "average" => Ok(SleepQuality::Average),
            "good" => Ok(SleepQuality::Good),
            "excellent" => Ok(SleepQuality::Excellent),
            _ => Err(format!("Unknown sleep quality: {}", s)),
        }
    }
}

/// Sleep log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepLog {
    pub id: Uuid,
    /// Clock time the user went to bed
    pub bed_time: NaiveTime,
    /// Clock time the user woke up
    pub wake_time: NaiveTime,
    /// Derived duration; wraps past midnight when wake < bed
    pub duration_minutes: i32,
    pub quality: SleepQuality,
    pub logged_at: DateTime<Utc>,
}

impl SleepLog {
    /// Minutes slept between two clock times, wrapping past midnight.
    ///
    /// 23:00 -> 07:00 is 480 minutes; 13:00 -> 13:30 is 30 minutes.
    /// Identical times count as a full 24 hours asleep, not zero.
    pub fn duration_between(bed_time: NaiveTime, wake_time: NaiveTime) -> i32 {
        let bed = (bed_time.hour() * 60 + bed_time.minute()) as i32;
        let wake = (wake_time.hour() * 60 + wake_time.minute()) as i32;
        let mut minutes = wake - bed;
        if minutes <= 0 {
            minutes += 24 * 60;
        }
        minutes
    }
}

/// Append-only, order-preserving set of earned badge ids.
///
/// Order is chronological earn order. An id never appears twice and is never
/// removed here; account-level resets belong to the surrounding application.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct EarnedBadgeSet {
    ids: Vec<String>,
}

impl EarnedBadgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from persisted ids, keeping the first occurrence of duplicates.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for id in ids {
            set.insert(id);
        }
        set
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|earned| earned == id)
    }

    /// Append an id. Returns `false` (and leaves the set unchanged) if the id
    /// was already present.
    pub fn insert<S: Into<String>>(&mut self, id: S) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Chronological earn position of an id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|earned| earned == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rstest::rstest;

    fn fast(started_h: i64, ended_h: Option<i64>, status: FastingStatus) -> FastingLog {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        FastingLog {
            id: Uuid::new_v4(),
            started_at: base + Duration::hours(started_h),
            ended_at: ended_h.map(|h| base + Duration::hours(h)),
            status,
        }
    }

    #[test]
    fn test_completed_fast_duration() {
        let log = fast(0, Some(18), FastingStatus::Completed);
        assert!((log.duration_hours().unwrap() - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_active_fast_has_no_duration() {
        let log = fast(0, None, FastingStatus::Active);
        assert!(log.duration_hours().is_none());
        assert!(!log.is_completed());
    }

    #[test]
    fn test_out_of_order_fast_counts_as_zero() {
        let log = fast(10, Some(2), FastingStatus::Completed);
        assert_eq!(log.duration_hours(), Some(0.0));
    }

    #[rstest]
    #[case("23:00", "07:00", 480)]
    #[case("13:00", "13:30", 30)]
    #[case("00:00", "00:00", 1440)]
    #[case("22:30", "06:15", 465)]
    fn test_sleep_duration_wraps_midnight(
        #[case] bed: &str,
        #[case] wake: &str,
        #[case] expected: i32,
    ) {
        let bed = NaiveTime::parse_from_str(bed, "%H:%M").unwrap();
        let wake = NaiveTime::parse_from_str(wake, "%H:%M").unwrap();
        assert_eq!(SleepLog::duration_between(bed, wake), expected);
    }

    proptest::proptest! {
        #[test]
        fn test_sleep_duration_always_within_a_day(
            bed_minutes in 0u32..1440,
            wake_minutes in 0u32..1440,
        ) {
            let bed = NaiveTime::from_hms_opt(bed_minutes / 60, bed_minutes % 60, 0).unwrap();
            let wake = NaiveTime::from_hms_opt(wake_minutes / 60, wake_minutes % 60, 0).unwrap();
            let duration = SleepLog::duration_between(bed, wake);
            proptest::prop_assert!(duration >= 1 && duration <= 1440);
        }
    }

    #[test]
    fn test_earned_set_rejects_duplicates() {
        let mut set = EarnedBadgeSet::new();
        assert!(set.insert("STREAK_3"));
        assert!(!set.insert("STREAK_3"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_earned_set_preserves_insertion_order() {
        let set = EarnedBadgeSet::from_ids(["B", "A", "C", "A"]);
        let ids: Vec<&str> = set.iter().collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
        assert_eq!(set.position("A"), Some(1));
        assert_eq!(set.position("Z"), None);
    }

    #[test]
    fn test_sleep_quality_restful() {
        assert!(SleepQuality::Good.is_restful());
        assert!(SleepQuality::Excellent.is_restful());
        assert!(!SleepQuality::Average.is_restful());
        assert!(!SleepQuality::Bad.is_restful());
    }
}
