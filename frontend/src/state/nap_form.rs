//! Nap sheet form state.
//!
//! Pure state object for the nap log sheet: two timestamps kept in order by
//! their paired setters, an upper bound at the sheet's creation time, and a
//! derived duration that never reports zero or negative.

use chrono::{Duration, NaiveDateTime};

#[derive(Debug, Clone, PartialEq)]
pub struct NapFormState {
    /// Wall-clock time when the sheet was presented; upper bound for both fields
    created_at: NaiveDateTime,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub note: String,
}

impl NapFormState {
    /// Defaults: end = now, start = now - default duration.
    pub fn new(created_at: NaiveDateTime, default_duration_minutes: i64) -> Self {
        Self {
            created_at,
            start: created_at - Duration::minutes(default_duration_minutes),
            end: created_at,
            note: String::new(),
        }
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Move the start time. Clamped to the creation time; dragging it past
    /// the end time drags the end time along so start <= end always holds.
    pub fn set_start(&mut self, start: NaiveDateTime) {
        self.start = start.min(self.created_at);
        if self.start > self.end {
            self.end = self.start;
        }
    }

    /// Move the end time. Clamped to the creation time (no future-dated
    /// naps); dragging it before the start time drags the start time along.
    pub fn set_end(&mut self, end: NaiveDateTime) {
        self.end = end.min(self.created_at);
        if self.end < self.start {
            self.start = self.end;
        }
    }

    /// Whole minutes between start and end, rounded down, floored at 1 so a
    /// sub-minute nap never reads as zero.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes().max(1)
    }

    /// The note, or None when blank
    pub fn note_or_none(&self) -> Option<String> {
        let trimmed = self.note.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reference_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_defaults_from_default_duration() {
        let t = reference_time();
        let form = NapFormState::new(t, 25);
        assert_eq!(form.end, t);
        assert_eq!(form.start, t - Duration::minutes(25));
        assert_eq!(form.duration_minutes(), 25);
        assert_eq!(form.note_or_none(), None);
    }

    #[test]
    fn test_end_clamps_to_creation_time() {
        let t = reference_time();
        let mut form = NapFormState::new(t, 25);
        form.set_end(t + Duration::seconds(1));
        assert_eq!(form.end, t);
    }

    #[test]
    fn test_start_clamps_to_creation_time() {
        let t = reference_time();
        let mut form = NapFormState::new(t, 25);
        form.set_start(t + Duration::minutes(5));
        assert_eq!(form.start, t);
        assert_eq!(form.end, t);
    }

    #[test]
    fn test_paired_setters_keep_order() {
        let t = reference_time();
        let mut form = NapFormState::new(t, 25);

        // Start dragged past end pulls end along
        form.set_start(t - Duration::minutes(5));
        assert!(form.start <= form.end);
        form.set_start(t - Duration::minutes(2));
        assert!(form.start <= form.end);

        // End dragged before start pulls start along
        form.set_end(t - Duration::minutes(40));
        assert_eq!(form.start, form.end);
    }

    #[test]
    fn test_duration_never_below_one_minute() {
        let t = reference_time();
        let mut form = NapFormState::new(t, 25);
        form.set_start(t - Duration::seconds(20));
        assert_eq!(form.duration_minutes(), 1);

        form.set_start(t);
        assert_eq!(form.duration_minutes(), 1);
    }

    #[test]
    fn test_duration_rounds_down() {
        let t = reference_time();
        let mut form = NapFormState::new(t, 25);
        form.set_start(t - Duration::seconds(90));
        assert_eq!(form.duration_minutes(), 1);
    }

    #[test]
    fn test_note_or_none_trims_blank() {
        let t = reference_time();
        let mut form = NapFormState::new(t, 25);
        form.note = "   ".to_string();
        assert_eq!(form.note_or_none(), None);
        form.note = "  slept by the door ".to_string();
        assert_eq!(form.note_or_none(), Some("slept by the door".to_string()));
    }
}
