use chrono::{NaiveDate, NaiveTime};
use opensleep_algos::sleep_duration;
use opensleep_types::SleepEntry;

/// Ordered record of one session's sleep entries. Lives in memory
/// only; the whole journal is dropped when the session ends.
#[derive(Debug, Default)]
pub struct SleepJournal {
    entries: Vec<SleepEntry>,
}

impl SleepJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the duration from the bedtime and wake time and appends
    /// the entry. Duplicate dates are independent submissions, never
    /// merged.
    pub fn append(
        &mut self,
        date: NaiveDate,
        bedtime: NaiveTime,
        wake_time: NaiveTime,
    ) -> SleepEntry {
        let entry = SleepEntry {
            date,
            bedtime,
            wake_time,
            sleep_duration_hours: sleep_duration(bedtime, wake_time),
        };
        self.entries.push(entry);
        entry
    }

    pub fn clear(&mut self) {
        self.entries = Vec::new();
    }

    /// Snapshot of the entries in the order they were submitted.
    pub fn entries(&self) -> &[SleepEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
    }

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn append_derives_duration() {
        let mut journal = SleepJournal::new();
        let entry = journal.append(date(1), hm(23, 0), hm(7, 0));

        assert_eq!(entry.sleep_duration_hours, 8.0);
        assert_eq!(journal.entries(), &[entry]);
    }

    #[test]
    fn entries_keep_submission_order() {
        let mut journal = SleepJournal::new();
        journal.append(date(3), hm(23, 0), hm(7, 0));
        journal.append(date(1), hm(22, 0), hm(6, 0));
        journal.append(date(2), hm(0, 30), hm(8, 0));

        let dates: Vec<_> = journal.entries().iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date(3), date(1), date(2)]);
        assert_eq!(journal.len(), 3);
    }

    #[test]
    fn duplicate_dates_are_kept() {
        let mut journal = SleepJournal::new();
        journal.append(date(1), hm(23, 0), hm(7, 0));
        journal.append(date(1), hm(14, 0), hm(15, 0));

        assert_eq!(journal.len(), 2);
    }

    #[test]
    fn clear_empties_the_journal() {
        let mut journal = SleepJournal::new();
        journal.append(date(1), hm(23, 0), hm(7, 0));
        journal.clear();

        assert!(journal.is_empty());
        assert_eq!(journal.entries(), &[]);
    }
}
