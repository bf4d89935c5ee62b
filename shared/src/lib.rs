use serde::{Deserialize, Serialize};
use std::fmt;

/// Care event ID in format: "event::<category-slug>::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    /// ID of the puppy this event belongs to
    pub puppy_id: String,
    /// What kind of care event this is
    pub category: EventCategory,
    /// When the event happened (RFC 3339)
    pub occurred_at: String,
    /// When the event ended, for events with a duration (naps)
    pub ended_at: Option<String>,
    /// Where a potty event happened
    pub location: Option<PottyLocation>,
    /// Free-text note (max 256 characters)
    pub note: Option<String>,
    /// Metadata for an attached photo, if one was picked
    pub attachment: Option<MediaAttachment>,
}

/// Category of a care event, used for rendering and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventCategory {
    /// Potty break (inside or outside)
    Potty,
    /// Nap with a start and end time
    Nap,
    /// Walk or play session
    Exercise,
    /// Meal or snack
    Meal,
    /// Photo or note "moment" with no care semantics
    Moment,
}

impl EventCategory {
    /// Stable slug used in event IDs and API query strings
    pub fn slug(&self) -> &'static str {
        match self {
            EventCategory::Potty => "potty",
            EventCategory::Nap => "nap",
            EventCategory::Exercise => "exercise",
            EventCategory::Meal => "meal",
            EventCategory::Moment => "moment",
        }
    }

    /// Parse a slug back into a category
    pub fn from_slug(slug: &str) -> Option<EventCategory> {
        match slug {
            "potty" => Some(EventCategory::Potty),
            "nap" => Some(EventCategory::Nap),
            "exercise" => Some(EventCategory::Exercise),
            "meal" => Some(EventCategory::Meal),
            "moment" => Some(EventCategory::Moment),
            _ => None,
        }
    }

    /// Display label for headers and chips
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Potty => "Potty",
            EventCategory::Nap => "Nap",
            EventCategory::Exercise => "Exercise",
            EventCategory::Meal => "Meal",
            EventCategory::Moment => "Moment",
        }
    }
}

/// Where a potty event happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PottyLocation {
    Outside,
    Inside,
}

impl PottyLocation {
    pub fn label(&self) -> &'static str {
        match self {
            PottyLocation::Outside => "Outside",
            PottyLocation::Inside => "Inside",
        }
    }
}

/// Metadata for a picked photo attachment. Raw bytes never travel over the
/// wire from this layer; only what the backend needs to file the attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaAttachment {
    /// Client-generated UUID
    pub id: String,
    pub file_name: String,
    pub mime_type: String,
    /// Capture timestamp extracted from the original byte payload, when the
    /// payload was available and carried one (RFC 3339)
    pub captured_at: Option<String>,
    /// Size of the original payload, when it could be loaded
    pub byte_len: Option<u64>,
}

impl MediaAttachment {
    /// Generate a client-side attachment ID
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

impl Event {
    /// Generate an event ID from its category and timestamp
    pub fn generate_id(category: EventCategory, epoch_millis: u64) -> String {
        format!("event::{}::{}", category.slug(), epoch_millis)
    }

    /// Parse an event ID into its category and timestamp
    pub fn parse_id(id: &str) -> Result<(EventCategory, u64), EventIdError> {
        let parts: Vec<&str> = id.split("::").collect();
        if parts.len() != 3 || parts[0] != "event" {
            return Err(EventIdError::InvalidFormat);
        }

        let category = EventCategory::from_slug(parts[1]).ok_or(EventIdError::InvalidCategory)?;

        let epoch_millis = parts[2]
            .parse::<u64>()
            .map_err(|_| EventIdError::InvalidTimestamp)?;

        Ok((category, epoch_millis))
    }

    /// Extract epoch timestamp from the event ID for sorting
    pub fn extract_timestamp(&self) -> Result<u64, EventIdError> {
        Self::parse_id(&self.id).map(|(_, timestamp)| timestamp)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventIdError {
    InvalidFormat,
    InvalidCategory,
    InvalidTimestamp,
}

impl fmt::Display for EventIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventIdError::InvalidFormat => write!(f, "Invalid event ID format"),
            EventIdError::InvalidCategory => write!(f, "Invalid event category"),
            EventIdError::InvalidTimestamp => write!(f, "Invalid timestamp in event ID"),
        }
    }
}

impl std::error::Error for EventIdError {}

/// The two bounded exercise settings for a puppy. Replaced wholesale on
/// save; there is no partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseConfig {
    /// Minutes of structured exercise allowed per month of age, per day
    pub minutes_per_month_of_age: u8,
    /// Maximum number of walks per day
    pub max_walks_per_day: u8,
}

impl ExerciseConfig {
    pub const MIN_MINUTES_PER_MONTH: u8 = 1;
    pub const MAX_MINUTES_PER_MONTH: u8 = 10;
    pub const MIN_WALKS_PER_DAY: u8 = 1;
    pub const MAX_WALKS_PER_DAY: u8 = 5;

    /// Whether both fields are inside their declared ranges
    pub fn is_valid(&self) -> bool {
        (Self::MIN_MINUTES_PER_MONTH..=Self::MAX_MINUTES_PER_MONTH)
            .contains(&self.minutes_per_month_of_age)
            && (Self::MIN_WALKS_PER_DAY..=Self::MAX_WALKS_PER_DAY).contains(&self.max_walks_per_day)
    }

    /// Daily exercise allowance for a puppy of the given age
    pub fn daily_allowance_minutes(&self, age_in_months: u32) -> u32 {
        age_in_months * self.minutes_per_month_of_age as u32
    }
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        Self {
            minutes_per_month_of_age: 5,
            max_walks_per_day: 2,
        }
    }
}

/// Puppy profile ID in format: "puppy::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuppyProfile {
    pub id: String,
    pub name: String,
    /// Birthdate in YYYY-MM-DD format
    pub birthdate: String,
    /// Days left in the trial period; non-positive means expired
    pub trial_days_remaining: i64,
    /// Exercise settings, when the owner has configured them
    pub exercise_config: Option<ExerciseConfig>,
}

impl PuppyProfile {
    /// Generate a puppy ID based on timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("puppy::{}", epoch_millis)
    }

    /// Parse a puppy ID to extract the timestamp
    pub fn parse_id(id: &str) -> Result<u64, PuppyIdError> {
        let parts: Vec<&str> = id.split("::").collect();
        if parts.len() != 2 || parts[0] != "puppy" {
            return Err(PuppyIdError::InvalidFormat);
        }

        parts[1].parse::<u64>().map_err(|_| PuppyIdError::InvalidTimestamp)
    }

    /// Configured exercise settings, or the documented defaults when none
    /// have been saved yet
    pub fn effective_exercise_config(&self) -> ExerciseConfig {
        self.exercise_config.unwrap_or_default()
    }

    /// Whole months of age on the given date. Saturates at zero for
    /// birthdates in the future or unparseable strings.
    pub fn age_in_months(&self, on: chrono::NaiveDate) -> u32 {
        use chrono::Datelike;

        let birth = match chrono::NaiveDate::parse_from_str(&self.birthdate, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => return 0,
        };
        if on < birth {
            return 0;
        }

        let mut months =
            (on.year() - birth.year()) * 12 + on.month() as i32 - birth.month() as i32;
        if on.day() < birth.day() {
            months -= 1;
        }
        months.max(0) as u32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PuppyIdError {
    InvalidFormat,
    InvalidTimestamp,
}

impl fmt::Display for PuppyIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuppyIdError::InvalidFormat => write!(f, "Invalid puppy ID format"),
            PuppyIdError::InvalidTimestamp => write!(f, "Invalid timestamp in puppy ID"),
        }
    }
}

impl std::error::Error for PuppyIdError {}

/// Response containing the currently active puppy profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveProfileResponse {
    pub profile: Option<PuppyProfile>,
}

/// Request to replace the active puppy's exercise settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateExerciseConfigRequest {
    /// Puppy to update, or None for the active puppy
    pub puppy_id: Option<String>,
    pub minutes_per_month_of_age: u8,
    pub max_walks_per_day: u8,
}

/// Response after replacing the exercise settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateExerciseConfigResponse {
    pub profile: PuppyProfile,
    pub success_message: String,
}

/// Request to log a new care event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub category: EventCategory,
    /// Optional timestamp override (RFC 3339) - uses current time if not provided
    pub occurred_at: Option<String>,
    pub ended_at: Option<String>,
    pub location: Option<PottyLocation>,
    pub note: Option<String>,
    pub attachment: Option<MediaAttachment>,
}

/// Response after logging a care event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEventResponse {
    pub event: Event,
    pub success_message: String,
}

/// Response for an inclusive-range event query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventListResponse {
    pub events: Vec<Event>,
}

/// Backend-computed potty streak summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakStats {
    /// Consecutive accident-free days, ending today
    pub current_days: u32,
    pub best_days: u32,
    /// Display string, e.g. "4 days accident-free"
    pub formatted_current: String,
}

/// Backend-computed potty gap summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapStats {
    pub average_minutes: i64,
    pub longest_minutes: i64,
    /// Display string, e.g. "every 2h 15m"
    pub formatted_average: String,
}

/// Backend-computed counts for today
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayStats {
    pub potty_count: u32,
    pub meal_count: u32,
    pub exercise_minutes: i64,
    pub walk_count: u32,
    /// Display string, e.g. "5 potty breaks so far"
    pub formatted_headline: String,
}

/// Backend-computed sleep summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepStats {
    pub nap_count_today: u32,
    pub nap_minutes_today: i64,
    /// Minutes since the most recent nap ended, or None if no nap today
    pub minutes_since_wake: Option<i64>,
    /// Minutes past the recommended post-wake potty window; non-positive
    /// means still inside the window. None if no nap today.
    pub post_wake_overdue_minutes: Option<i64>,
    /// Display string, e.g. "3 naps, 2h 40m"
    pub formatted_total: String,
}

/// Backend-computed pattern-analysis summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternStats {
    /// Typical minutes between waking and the next potty event
    pub typical_wake_to_potty_minutes: i64,
    /// Display string, e.g. "usually needs to go 10m after waking"
    pub formatted_insight: String,
}

/// The stats dashboard's entire input: five independent summaries computed
/// by the backend view-model. Opaque to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub streak: StreakStats,
    pub gaps: GapStats,
    pub today: TodayStats,
    pub sleep: SleepStats,
    pub pattern: PatternStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_generate_event_id() {
        let potty_id = Event::generate_id(EventCategory::Potty, 1722950400000);
        assert_eq!(potty_id, "event::potty::1722950400000");

        let nap_id = Event::generate_id(EventCategory::Nap, 1722954000000);
        assert_eq!(nap_id, "event::nap::1722954000000");
    }

    #[test]
    fn test_parse_event_id() {
        let (category, timestamp) = Event::parse_id("event::potty::1722950400000").unwrap();
        assert_eq!(category, EventCategory::Potty);
        assert_eq!(timestamp, 1722950400000);

        let (category, timestamp) = Event::parse_id("event::moment::1722954000000").unwrap();
        assert_eq!(category, EventCategory::Moment);
        assert_eq!(timestamp, 1722954000000);

        // Wrong prefix
        assert_eq!(
            Event::parse_id("walk::potty::1722950400000"),
            Err(EventIdError::InvalidFormat)
        );
        // Unknown category
        assert_eq!(
            Event::parse_id("event::bath::1722950400000"),
            Err(EventIdError::InvalidCategory)
        );
        // Garbage timestamp
        assert_eq!(
            Event::parse_id("event::potty::abc"),
            Err(EventIdError::InvalidTimestamp)
        );
    }

    #[test]
    fn test_category_slug_round_trip() {
        for category in [
            EventCategory::Potty,
            EventCategory::Nap,
            EventCategory::Exercise,
            EventCategory::Meal,
            EventCategory::Moment,
        ] {
            assert_eq!(EventCategory::from_slug(category.slug()), Some(category));
        }
        assert_eq!(EventCategory::from_slug("grooming"), None);
    }

    #[test]
    fn test_exercise_config_defaults() {
        let config = ExerciseConfig::default();
        assert_eq!(config.minutes_per_month_of_age, 5);
        assert_eq!(config.max_walks_per_day, 2);
        assert!(config.is_valid());
    }

    #[test]
    fn test_exercise_config_validity_bounds() {
        let mut config = ExerciseConfig::default();

        config.minutes_per_month_of_age = ExerciseConfig::MIN_MINUTES_PER_MONTH;
        assert!(config.is_valid());
        config.minutes_per_month_of_age = ExerciseConfig::MAX_MINUTES_PER_MONTH;
        assert!(config.is_valid());
        config.minutes_per_month_of_age = 0;
        assert!(!config.is_valid());
        config.minutes_per_month_of_age = 11;
        assert!(!config.is_valid());

        config = ExerciseConfig::default();
        config.max_walks_per_day = 0;
        assert!(!config.is_valid());
        config.max_walks_per_day = 6;
        assert!(!config.is_valid());
    }

    #[test]
    fn test_daily_allowance() {
        let config = ExerciseConfig::default();
        // Classic five-minute rule: 4-month-old puppy gets 20 minutes
        assert_eq!(config.daily_allowance_minutes(4), 20);
    }

    #[test]
    fn test_effective_exercise_config_falls_back_to_default() {
        let profile = PuppyProfile {
            id: PuppyProfile::generate_id(1722950400000),
            name: "Biscuit".to_string(),
            birthdate: "2025-03-01".to_string(),
            trial_days_remaining: 14,
            exercise_config: None,
        };
        assert_eq!(profile.effective_exercise_config(), ExerciseConfig::default());
    }

    #[test]
    fn test_age_in_months() {
        let profile = PuppyProfile {
            id: PuppyProfile::generate_id(1722950400000),
            name: "Biscuit".to_string(),
            birthdate: "2025-01-15".to_string(),
            trial_days_remaining: 14,
            exercise_config: None,
        };

        // Day-of-month before the birth day: the month hasn't completed yet
        assert_eq!(profile.age_in_months(NaiveDate::from_ymd_opt(2025, 8, 6).unwrap()), 6);
        assert_eq!(profile.age_in_months(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()), 7);
        // Before birth
        assert_eq!(profile.age_in_months(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()), 0);
    }

    #[test]
    fn test_parse_puppy_id() {
        let id = PuppyProfile::generate_id(1722950400000);
        assert_eq!(PuppyProfile::parse_id(&id), Ok(1722950400000));
        assert_eq!(
            PuppyProfile::parse_id("pup::123"),
            Err(PuppyIdError::InvalidFormat)
        );
        assert_eq!(
            PuppyProfile::parse_id("puppy::xyz"),
            Err(PuppyIdError::InvalidTimestamp)
        );
    }
}
