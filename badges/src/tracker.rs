//! Tracker facade
//!
//! Owns the five log stores, the earned-badge set, the first-log date and the
//! celebration queue, and drives the flow the evaluator is built for: every
//! log mutation re-evaluates the catalog, commits newly-earned ids in
//! evaluator order, and queues them for one-at-a-time celebration.
//!
//! Validation happens here, at the boundary; the evaluator itself stays
//! lenient about whatever is already in the stores.

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use wellness_tracker_shared::errors::AppError;
use wellness_tracker_shared::models::{
    ActivityLog, EarnedBadgeSet, FastingLog, FastingStatus, FoodLog, SleepLog, WaterLog,
};
use wellness_tracker_shared::types::{
    LogActivityRequest, LogFoodRequest, LogSleepRequest, LogWaterRequest,
};
use wellness_tracker_shared::validation;

use crate::catalog::{BadgeCatalog, BadgeDefinition};
use crate::display::{select_gallery_badges, select_summary_badges, BadgeStatus};
use crate::evaluator::evaluate_new_badges;
use crate::queue::CelebrationQueue;
use crate::stats::{derive_stats, LogHistory, UserStats};

/// In-memory application shell around the achievement engine
#[derive(Debug, Clone)]
pub struct WellnessTracker {
    catalog: BadgeCatalog,
    water: Vec<WaterLog>,
    food: Vec<FoodLog>,
    activity: Vec<ActivityLog>,
    fasting: Vec<FastingLog>,
    sleep: Vec<SleepLog>,
    earned: EarnedBadgeSet,
    first_log_date: Option<DateTime<Utc>>,
    celebrations: CelebrationQueue,
}

impl WellnessTracker {
    pub fn new(catalog: BadgeCatalog) -> Self {
        Self::restore(catalog, EarnedBadgeSet::new(), None)
    }

    /// Rebuild a tracker from persisted account state
    pub fn restore(
        catalog: BadgeCatalog,
        earned: EarnedBadgeSet,
        first_log_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            catalog,
            water: Vec::new(),
            food: Vec::new(),
            activity: Vec::new(),
            fasting: Vec::new(),
            sleep: Vec::new(),
            earned,
            first_log_date,
            celebrations: CelebrationQueue::new(),
        }
    }

    // ------------------------------------------------------------------
    // Logging operations
    // ------------------------------------------------------------------

    pub fn log_water(&mut self, request: LogWaterRequest) -> Result<WaterLog, AppError> {
        request.validate()?;
        let log = WaterLog {
            id: Uuid::new_v4(),
            amount_ml: request.amount_ml,
            logged_at: request.logged_at,
        };
        self.water.push(log.clone());
        self.record_first_log(log.logged_at);
        self.reevaluate();
        Ok(log)
    }

    pub fn log_food(&mut self, request: LogFoodRequest) -> Result<FoodLog, AppError> {
        request.validate()?;
        let log = FoodLog {
            id: Uuid::new_v4(),
            calories: request.calories,
            protein_g: request.protein_g,
            carbs_g: request.carbs_g,
            fat_g: request.fat_g,
            logged_at: request.logged_at,
        };
        self.food.push(log.clone());
        self.record_first_log(log.logged_at);
        self.reevaluate();
        Ok(log)
    }

    pub fn log_activity(&mut self, request: LogActivityRequest) -> Result<ActivityLog, AppError> {
        request.validate()?;
        let log = ActivityLog {
            id: Uuid::new_v4(),
            duration_minutes: request.duration_minutes,
            logged_at: request.logged_at,
        };
        self.activity.push(log.clone());
        self.record_first_log(log.logged_at);
        self.reevaluate();
        Ok(log)
    }

    pub fn log_sleep(&mut self, request: LogSleepRequest) -> Result<SleepLog, AppError> {
        let bed_time = validation::parse_clock_time(&request.bed_time).map_err(AppError::Validation)?;
        let wake_time =
            validation::parse_clock_time(&request.wake_time).map_err(AppError::Validation)?;
        let log = SleepLog {
            id: Uuid::new_v4(),
            bed_time,
            wake_time,
            duration_minutes: SleepLog::duration_between(bed_time, wake_time),
            quality: request.quality,
            logged_at: request.logged_at,
        };
        self.sleep.push(log.clone());
        self.record_first_log(log.logged_at);
        self.reevaluate();
        Ok(log)
    }

    /// Begin a fasting session. At most one may be active at a time.
    pub fn start_fast(&mut self, started_at: DateTime<Utc>) -> Result<FastingLog, AppError> {
        if self.fasting.iter().any(|fast| fast.status == FastingStatus::Active) {
            return Err(AppError::Conflict("A fast is already in progress".to_string()));
        }
        let log = FastingLog {
            id: Uuid::new_v4(),
            started_at,
            ended_at: None,
            status: FastingStatus::Active,
        };
        self.fasting.push(log.clone());
        self.record_first_log(started_at);
        self.reevaluate();
        Ok(log)
    }

    /// Complete the active fasting session
    pub fn end_fast(&mut self, ended_at: DateTime<Utc>) -> Result<FastingLog, AppError> {
        let index = self
            .fasting
            .iter()
            .position(|fast| fast.status == FastingStatus::Active)
            .ok_or_else(|| AppError::NotFound("No fast in progress".to_string()))?;

        validation::validate_fast_times(self.fasting[index].started_at, ended_at)
            .map_err(AppError::Validation)?;

        let fast = &mut self.fasting[index];
        fast.ended_at = Some(ended_at);
        fast.status = FastingStatus::Completed;
        let completed = fast.clone();

        self.reevaluate();
        Ok(completed)
    }

    // ------------------------------------------------------------------
    // Deletion (edits are delete + recreate)
    // ------------------------------------------------------------------

    pub fn delete_water(&mut self, id: Uuid) -> Result<(), AppError> {
        Self::remove_log(&mut self.water, id, |log| log.id, "water log")?;
        self.reevaluate();
        Ok(())
    }

    pub fn delete_food(&mut self, id: Uuid) -> Result<(), AppError> {
        Self::remove_log(&mut self.food, id, |log| log.id, "food log")?;
        self.reevaluate();
        Ok(())
    }

    pub fn delete_activity(&mut self, id: Uuid) -> Result<(), AppError> {
        Self::remove_log(&mut self.activity, id, |log| log.id, "activity log")?;
        self.reevaluate();
        Ok(())
    }

    pub fn delete_fast(&mut self, id: Uuid) -> Result<(), AppError> {
        Self::remove_log(&mut self.fasting, id, |log| log.id, "fasting log")?;
        self.reevaluate();
        Ok(())
    }

    pub fn delete_sleep(&mut self, id: Uuid) -> Result<(), AppError> {
        Self::remove_log(&mut self.sleep, id, |log| log.id, "sleep log")?;
        self.reevaluate();
        Ok(())
    }

    fn remove_log<T>(
        logs: &mut Vec<T>,
        id: Uuid,
        key: impl Fn(&T) -> Uuid,
        kind: &str,
    ) -> Result<T, AppError> {
        let index = logs
            .iter()
            .position(|log| key(log) == id)
            .ok_or_else(|| AppError::NotFound(format!("No {} with id {}", kind, id)))?;
        Ok(logs.remove(index))
    }

    // ------------------------------------------------------------------
    // Read side
    // ------------------------------------------------------------------

    pub fn stats(&self) -> UserStats {
        derive_stats(&self.history(), Utc::now())
    }

    pub fn earned_badges(&self) -> &EarnedBadgeSet {
        &self.earned
    }

    pub fn first_log_date(&self) -> Option<DateTime<Utc>> {
        self.first_log_date
    }

    pub fn summary_badges(&self) -> Vec<BadgeStatus> {
        select_summary_badges(&self.catalog, &self.earned)
    }

    pub fn gallery_badges(&self) -> Vec<BadgeStatus> {
        select_gallery_badges(&self.catalog, &self.earned)
    }

    /// Badge currently awaiting its celebration, if any
    pub fn current_celebration(&self) -> Option<&BadgeDefinition> {
        self.celebrations.current()
    }

    /// Dismiss the current celebration and advance to the next
    pub fn dismiss_celebration(&mut self) -> Option<BadgeDefinition> {
        self.celebrations.dismiss()
    }

    pub fn pending_celebrations(&self) -> usize {
        self.celebrations.len()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn history(&self) -> LogHistory<'_> {
        LogHistory {
            water: &self.water,
            food: &self.food,
            activity: &self.activity,
            fasting: &self.fasting,
            sleep: &self.sleep,
            first_log_date: self.first_log_date,
        }
    }

    fn record_first_log(&mut self, at: DateTime<Utc>) {
        if self.first_log_date.is_none() {
            self.first_log_date = Some(at);
        }
    }

    fn reevaluate(&mut self) {
        let newly_earned = evaluate_new_badges(&self.catalog, &self.history(), &self.earned, Utc::now());
        for badge in &newly_earned {
            if self.earned.insert(badge.id.clone()) {
                info!(badge_id = %badge.id, name = %badge.name, "badge unlocked");
            }
        }
        self.celebrations.enqueue_all(newly_earned);
    }
}

impl Default for WellnessTracker {
    fn default() -> Self {
        Self::new(BadgeCatalog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, default_catalog};
    use chrono::Duration;
    use wellness_tracker_shared::models::SleepQuality;

    fn water_request(amount_ml: i32) -> LogWaterRequest {
        LogWaterRequest {
            amount_ml,
            logged_at: Utc::now(),
        }
    }

    #[test]
    fn test_first_water_log_unlocks_and_celebrates() {
        let mut tracker = WellnessTracker::default();
        tracker.log_water(water_request(250)).unwrap();

        assert!(tracker.earned_badges().contains(catalog::PREMIERE_GORGEE));
        assert_eq!(
            tracker.current_celebration().unwrap().id,
            catalog::PREMIERE_GORGEE
        );
    }

    #[test]
    fn test_second_water_log_never_retriggers_the_special() {
        let mut tracker = WellnessTracker::default();
        tracker.log_water(water_request(250)).unwrap();
        tracker.dismiss_celebration().unwrap();

        tracker.log_water(water_request(300)).unwrap();
        assert_eq!(tracker.pending_celebrations(), 0);
        assert_eq!(tracker.earned_badges().len(), 1);
    }

    #[test]
    fn test_invalid_water_amount_is_rejected_without_side_effects() {
        let mut tracker = WellnessTracker::default();
        let result = tracker.log_water(water_request(0));

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(tracker.first_log_date().is_none());
        assert!(tracker.earned_badges().is_empty());
    }

    #[test]
    fn test_out_of_range_food_and_activity_are_rejected() {
        let mut tracker = WellnessTracker::default();

        let food = tracker.log_food(LogFoodRequest {
            calories: 450.0,
            protein_g: -1.0,
            carbs_g: 30.0,
            fat_g: 12.0,
            logged_at: Utc::now(),
        });
        assert!(matches!(food, Err(AppError::Validation(_))));

        let activity = tracker.log_activity(LogActivityRequest {
            duration_minutes: 1441,
            logged_at: Utc::now(),
        });
        assert!(matches!(activity, Err(AppError::Validation(_))));

        assert!(tracker.first_log_date().is_none());
        assert!(tracker.earned_badges().is_empty());
    }

    #[test]
    fn test_first_log_date_is_set_once() {
        let mut tracker = WellnessTracker::default();
        let first = Utc::now() - Duration::days(3);

        tracker
            .log_water(LogWaterRequest {
                amount_ml: 250,
                logged_at: first,
            })
            .unwrap();
        tracker.log_water(water_request(250)).unwrap();

        assert_eq!(tracker.first_log_date(), Some(first));
    }

    #[test]
    fn test_only_one_active_fast_at_a_time() {
        let mut tracker = WellnessTracker::default();
        tracker.start_fast(Utc::now()).unwrap();

        let second = tracker.start_fast(Utc::now());
        assert!(matches!(second, Err(AppError::Conflict(_))));
    }

    #[test]
    fn test_end_fast_without_active_session() {
        let mut tracker = WellnessTracker::default();
        let result = tracker.end_fast(Utc::now());
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_end_fast_before_start_is_rejected() {
        let mut tracker = WellnessTracker::default();
        let started_at = Utc::now();
        tracker.start_fast(started_at).unwrap();

        let result = tracker.end_fast(started_at - Duration::hours(1));
        assert!(matches!(result, Err(AppError::Validation(_))));
        // The session is still active and can complete normally
        tracker.end_fast(started_at + Duration::hours(2)).unwrap();
    }

    #[test]
    fn test_long_fast_unlocks_duration_badges() {
        let mut tracker = WellnessTracker::default();
        let now = Utc::now();

        tracker.start_fast(now - Duration::hours(17)).unwrap();
        let completed = tracker.end_fast(now).unwrap();
        assert_eq!(completed.status, FastingStatus::Completed);

        assert!(tracker.earned_badges().contains(catalog::PREMIER_JEUNE));
        assert!(tracker.earned_badges().contains(catalog::FAST_16H));
        assert!(!tracker.earned_badges().contains(catalog::FAST_24H));
    }

    #[test]
    fn test_sleep_log_derives_wrapped_duration() {
        let mut tracker = WellnessTracker::default();
        let log = tracker
            .log_sleep(LogSleepRequest {
                bed_time: "23:00".to_string(),
                wake_time: "07:00".to_string(),
                quality: SleepQuality::Good,
                logged_at: Utc::now(),
            })
            .unwrap();

        assert_eq!(log.duration_minutes, 480);
        assert!(tracker.earned_badges().contains(catalog::SLEEP_8H));
    }

    #[test]
    fn test_malformed_clock_string_is_rejected() {
        let mut tracker = WellnessTracker::default();
        let result = tracker.log_sleep(LogSleepRequest {
            bed_time: "25:00".to_string(),
            wake_time: "07:00".to_string(),
            quality: SleepQuality::Good,
            logged_at: Utc::now(),
        });
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_deleting_a_log_never_revokes_a_badge() {
        let mut tracker = WellnessTracker::default();
        let log = tracker.log_water(water_request(250)).unwrap();
        assert!(tracker.earned_badges().contains(catalog::PREMIERE_GORGEE));

        tracker.delete_water(log.id).unwrap();
        assert!(tracker.earned_badges().contains(catalog::PREMIERE_GORGEE));
        assert_eq!(tracker.stats().total_water_logs, 0);
    }

    #[test]
    fn test_delete_unknown_log_is_not_found() {
        let mut tracker = WellnessTracker::default();
        assert!(matches!(
            tracker.delete_activity(Uuid::new_v4()),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_restore_skips_already_earned_badges() {
        let catalog = default_catalog();
        let earned = EarnedBadgeSet::from_ids([catalog::PREMIERE_GORGEE]);
        let mut tracker = WellnessTracker::restore(catalog, earned, Some(Utc::now()));

        tracker.log_water(water_request(250)).unwrap();
        assert_eq!(tracker.pending_celebrations(), 0);
    }
}
