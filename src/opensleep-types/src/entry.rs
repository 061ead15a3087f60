use chrono::{NaiveDate, NaiveTime};

/// One logged night. Immutable once created; the duration is derived
/// when the entry is built and never recomputed afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SleepEntry {
    pub date: NaiveDate,
    pub bedtime: NaiveTime,
    pub wake_time: NaiveTime,
    pub sleep_duration_hours: f64,
}
