use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("date range step must be positive, got {0}")]
    NegativeStep(TimeDelta),
}

/// Points on a time line that a [`DateRange`] can walk over.
pub trait RangePoint: Copy + PartialOrd {
    fn utc_now() -> Self;
    fn checked_step(self, step: TimeDelta) -> Option<Self>;
}

impl RangePoint for NaiveDateTime {
    fn utc_now() -> Self {
        Utc::now().naive_utc()
    }

    fn checked_step(self, step: TimeDelta) -> Option<Self> {
        self.checked_add_signed(step)
    }
}

impl RangePoint for NaiveDate {
    fn utc_now() -> Self {
        Utc::now().date_naive()
    }

    fn checked_step(self, step: TimeDelta) -> Option<Self> {
        self.checked_add_signed(step)
    }
}

impl RangePoint for DateTime<Utc> {
    fn utc_now() -> Self {
        Utc::now()
    }

    fn checked_step(self, step: TimeDelta) -> Option<Self> {
        self.checked_add_signed(step)
    }
}

#[derive(Debug, Clone)]
pub struct DateRange<T> {
    next: Option<T>,
    stop: T,
    step: TimeDelta,
}

impl<T: RangePoint> DateRange<T> {
    pub fn stop(&self) -> T {
        self.stop
    }

    pub fn step(&self) -> TimeDelta {
        self.step
    }
}

impl<T: RangePoint> Iterator for DateRange<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next.filter(|current| *current < self.stop)?;
        self.next = current.checked_step(self.step);
        Some(current)
    }
}

impl<T: RangePoint> std::iter::FusedIterator for DateRange<T> {}

/// Points from `start` (inclusive) to `stop` (exclusive) spaced by `step`.
///
/// `stop` defaults to the current UTC time and a missing or zero `step` to one day.
pub fn irange<T: RangePoint>(
    start: T,
    stop: Option<T>,
    step: Option<TimeDelta>,
) -> Result<DateRange<T>, DateRangeError> {
    let step = match step {
        Some(step) if step < TimeDelta::zero() => return Err(DateRangeError::NegativeStep(step)),
        Some(step) if !step.is_zero() => step,
        _ => TimeDelta::days(1),
    };
    Ok(DateRange {
        next: Some(start),
        stop: stop.unwrap_or_else(T::utc_now),
        step,
    })
}

#[cfg(test)]
#[path = "range_test.rs"]
mod tests;
