use chrono::{NaiveDate, NaiveTime};
use opensleep_algos::{SleepPatternAnalyzer, SleepReport};
use opensleep_types::SleepEntry;

use crate::SleepJournal;

/// Session facade. The presentation layer talks to this and nothing
/// else; one instance per session, never shared.
#[derive(Debug, Default)]
pub struct OpenSleep {
    pub journal: SleepJournal,
}

impl OpenSleep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit_entry(
        &mut self,
        date: NaiveDate,
        bedtime: NaiveTime,
        wake_time: NaiveTime,
    ) -> SleepEntry {
        let entry = self.journal.append(date, bedtime, wake_time);
        info!(
            "logged {:.2}h of sleep for {}",
            entry.sleep_duration_hours, entry.date
        );
        entry
    }

    pub fn clear_all(&mut self) {
        let dropped = self.journal.len();
        self.journal.clear();
        info!("cleared {} entries", dropped);
    }

    /// Runs the analyzer over the current snapshot. Recomputed from
    /// scratch on every call.
    pub fn analysis(&self) -> SleepReport {
        SleepPatternAnalyzer::new(self.journal.entries()).analyze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
    }

    #[test]
    fn analysis_reflects_submitted_entries() {
        let mut session = OpenSleep::new();
        session.submit_entry(date(1), hm(23, 0), hm(6, 0));
        session.submit_entry(date(2), hm(23, 0), hm(7, 0));

        let report = session.analysis();
        assert_eq!(report.average_sleep_hours, 7.5);
        assert_eq!(report.bedtime_consistency_std_dev, 0.0);
    }

    #[test]
    fn clear_reverts_analysis_to_placeholder() {
        let mut session = OpenSleep::new();
        session.submit_entry(date(1), hm(23, 0), hm(7, 0));
        session.submit_entry(date(2), hm(22, 0), hm(6, 0));
        session.clear_all();

        assert!(session.journal.is_empty());
        let report = session.analysis();
        assert_eq!(report.average_sleep_hours, 0.0);
        assert_eq!(
            report.recommendations,
            vec![opensleep_algos::ADD_MORE_DATA.to_owned()]
        );
    }
}
