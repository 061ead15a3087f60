use chrono::{NaiveTime, TimeDelta};

/// Elapsed hours between a bedtime and a wake time, both taken as
/// times-of-day on a common reference date. A wake time at or before
/// the bedtime belongs to the following day, so equal times come out
/// as a full 24 hours.
pub fn sleep_duration(bedtime: NaiveTime, wake_time: NaiveTime) -> f64 {
    let mut slept = wake_time - bedtime;
    if wake_time <= bedtime {
        slept += TimeDelta::days(1);
    }

    slept.num_seconds() as f64 / 3600.0
}
