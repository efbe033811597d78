use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::RecurrencePattern;

/// A validated recurrence cadence: "every `interval` `pattern`, counted from
/// `schedule_from`, ending before `end_date`".
///
/// Occurrences are exactly the dates congruent with the cadence anchored at
/// `schedule_from`. Monthly and yearly cadences keep the anchor's day of
/// month, clamping to the last valid day when the target month is shorter
/// (Jan 31 -> Feb 29 -> Mar 31).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pattern: RecurrencePattern,
    interval: u32,
    schedule_from: NaiveDate,
    end_date: Option<NaiveDate>,
}

impl RecurrenceRule {
    pub fn new(
        pattern: RecurrencePattern,
        interval: u32,
        schedule_from: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, CoreError> {
        if interval < 1 {
            return Err(CoreError::Validation(format!(
                "recurrence interval must be at least 1, got {}",
                interval
            )));
        }
        if let Some(end) = end_date {
            if end <= schedule_from {
                return Err(CoreError::Validation(format!(
                    "recurrence end date {} must be strictly after the schedule anchor {}",
                    end, schedule_from
                )));
            }
        }
        Ok(Self {
            pattern,
            interval,
            schedule_from,
            end_date,
        })
    }

    pub fn pattern(&self) -> RecurrencePattern {
        self.pattern
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn schedule_from(&self) -> NaiveDate {
        self.schedule_from
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// The earliest occurrence strictly after `after`, or `None` once the
    /// cadence has run past its end date. The end date itself is never an
    /// occurrence.
    pub fn next_occurrence_after(&self, after: NaiveDate) -> Option<NaiveDate> {
        let candidate = match self.pattern {
            RecurrencePattern::Daily => self.next_by_days(after, i64::from(self.interval)),
            RecurrencePattern::Weekly => self.next_by_days(after, i64::from(self.interval) * 7),
            RecurrencePattern::Monthly => self.next_by_months(after, i64::from(self.interval)),
            RecurrencePattern::Yearly => self.next_by_months(after, i64::from(self.interval) * 12),
        };
        match self.end_date {
            Some(end) if candidate >= end => None,
            _ => Some(candidate),
        }
    }

    /// All occurrences strictly after `start_exclusive` and at most
    /// `end_inclusive`, in strictly increasing order. Always finite: bounded
    /// by `end_inclusive` even for open-ended rules.
    pub fn occurrences_between(
        &self,
        start_exclusive: NaiveDate,
        end_inclusive: NaiveDate,
    ) -> Vec<NaiveDate> {
        let mut occurrences = Vec::new();
        let mut cursor = start_exclusive;
        while let Some(next) = self.next_occurrence_after(cursor) {
            if next > end_inclusive {
                break;
            }
            occurrences.push(next);
            cursor = next;
        }
        occurrences
    }

    fn next_by_days(&self, after: NaiveDate, step: i64) -> NaiveDate {
        let elapsed = after.signed_duration_since(self.schedule_from).num_days();
        let steps = if elapsed < 0 { 0 } else { elapsed / step + 1 };
        self.schedule_from + Duration::days(steps * step)
    }

    fn next_by_months(&self, after: NaiveDate, step: i64) -> NaiveDate {
        let elapsed_months = i64::from(after.year() - self.schedule_from.year()) * 12
            + i64::from(after.month() as i32 - self.schedule_from.month() as i32);
        // Starting estimate is never past the answer; clamping can leave the
        // candidate at or before `after` within the same month, so walk
        // forward until strictly past it.
        let mut steps = (elapsed_months / step).max(0);
        loop {
            let candidate = add_months_clamped(self.schedule_from, steps * step);
            if candidate > after {
                return candidate;
            }
            steps += 1;
        }
    }
}

/// Add `months` to `date`, clamping the day of month to the last valid day
/// of the target month. Feb 29 anchors land on Feb 28 in non-leap years.
fn add_months_clamped(date: NaiveDate, months: i64) -> NaiveDate {
    let total = i64::from(date.year()) * 12 + i64::from(date.month0()) + months;
    let year = total.div_euclid(12) as i32;
    let month = total.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
    }
}
