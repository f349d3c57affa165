//! Request types accepted by the tracker facade
//!
//! These are the input shapes the application shell hands to the tracker.
//! Simple range checks live on the types via `validator` derives; cross-field
//! rules (fast ordering, clock-string parsing) live in [`crate::validation`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::SleepQuality;

/// Log a water intake
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogWaterRequest {
    /// Amount in milliliters
    #[validate(range(min = 1, max = 5000))]
    pub amount_ml: i32,
    #[serde(default = "Utc::now")]
    pub logged_at: DateTime<Utc>,
}

/// Log a meal with macronutrients
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogFoodRequest {
    #[validate(range(min = 0.0, max = 50000.0))]
    pub calories: f64,
    #[validate(range(min = 0.0, max = 5000.0))]
    pub protein_g: f64,
    #[validate(range(min = 0.0, max = 5000.0))]
    pub carbs_g: f64,
    #[validate(range(min = 0.0, max = 5000.0))]
    pub fat_g: f64,
    #[serde(default = "Utc::now")]
    pub logged_at: DateTime<Utc>,
}

/// Log a physical activity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogActivityRequest {
    /// Duration in minutes (up to 24 hours)
    #[validate(range(min = 0, max = 1440))]
    pub duration_minutes: i32,
    #[serde(default = "Utc::now")]
    pub logged_at: DateTime<Utc>,
}

/// Log a night of sleep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSleepRequest {
    /// Bed time as an `HH:MM` clock string
    pub bed_time: String,
    /// Wake time as an `HH:MM` clock string
    pub wake_time: String,
    pub quality: SleepQuality,
    #[serde(default = "Utc::now")]
    pub logged_at: DateTime<Utc>,
}
