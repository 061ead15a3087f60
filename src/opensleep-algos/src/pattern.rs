use std::fmt::Display;

use opensleep_types::SleepEntry;

use crate::helpers::time_math::{decimal_hours, mean, sample_std_dev};

pub const ADD_MORE_DATA: &str = "Add more data to get meaningful insights.";

const SLEEP_BELOW_RANGE: &str = "Your average sleep duration is below the recommended 7-8 hours. Try to go to bed earlier or wake up later.";
const SLEEP_ABOVE_RANGE: &str = "Your average sleep duration is above the recommended 7-8 hours. While sleep needs vary, excessive sleep can sometimes indicate underlying health issues.";
const SLEEP_IN_RANGE: &str = "Your average sleep duration is within the recommended range. Great job!";

const BEDTIME_VARIES: &str = "Your bedtime varies significantly. Try to go to bed at the same time each night to improve sleep quality.";
const BEDTIME_IRREGULAR: &str = "Your bedtime is somewhat irregular. Consider establishing a more consistent sleep schedule.";
const BEDTIME_CONSISTENT: &str = "Your bedtime is consistent, which is excellent for maintaining healthy sleep patterns.";

const DURATION_VARIES: &str = "Your sleep duration varies considerably. Aim for a consistent amount of sleep each night.";

#[derive(Default)]
pub struct SleepPatternAnalyzer {
    durations: Vec<f64>,
    bedtimes: Vec<f64>,
}

/// Summary of one analysis pass. Built from scratch on every request,
/// never cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SleepReport {
    pub average_sleep_hours: f64,
    pub bedtime_consistency_std_dev: f64,
    pub recommendations: Vec<String>,
}

impl SleepPatternAnalyzer {
    pub fn new(entries: &[SleepEntry]) -> Self {
        let mut analyzer = SleepPatternAnalyzer::default();
        analyzer.process_entries(entries);
        analyzer
    }

    fn process_entries(&mut self, entries: &[SleepEntry]) {
        for entry in entries {
            self.durations.push(entry.sleep_duration_hours);
            self.bedtimes.push(decimal_hours(entry.bedtime));
        }
    }

    pub fn analyze(&self) -> SleepReport {
        if self.durations.len() < 2 {
            return SleepReport {
                average_sleep_hours: mean(&self.durations),
                bedtime_consistency_std_dev: 0.0,
                recommendations: vec![ADD_MORE_DATA.to_owned()],
            };
        }

        let average_sleep_hours = mean(&self.durations);
        let sleep_std_dev = sample_std_dev(&self.durations);
        let bedtime_std_dev = sample_std_dev(&self.bedtimes);

        let mut recommendations = Vec::new();

        let duration_guidance = if average_sleep_hours < 7.0 {
            SLEEP_BELOW_RANGE
        } else if average_sleep_hours > 9.0 {
            SLEEP_ABOVE_RANGE
        } else {
            SLEEP_IN_RANGE
        };
        recommendations.push(duration_guidance.to_owned());

        let bedtime_guidance = if bedtime_std_dev > 1.5 {
            BEDTIME_VARIES
        } else if bedtime_std_dev > 0.75 {
            BEDTIME_IRREGULAR
        } else {
            BEDTIME_CONSISTENT
        };
        recommendations.push(bedtime_guidance.to_owned());

        if sleep_std_dev > 1.5 {
            recommendations.push(DURATION_VARIES.to_owned());
        }

        SleepReport {
            average_sleep_hours,
            bedtime_consistency_std_dev: bedtime_std_dev,
            recommendations,
        }
    }
}

impl SleepReport {
    pub fn duration_verdict(&self) -> &'static str {
        if (7.0..=9.0).contains(&self.average_sleep_hours) {
            "Good"
        } else {
            "Needs improvement"
        }
    }

    pub fn consistency_verdict(&self) -> &'static str {
        if self.bedtime_consistency_std_dev < 0.75 {
            "Consistent"
        } else {
            "Variable"
        }
    }
}

impl Display for SleepReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Average sleep duration: {:.2} hours ({})\n",
            self.average_sleep_hours,
            self.duration_verdict(),
        ))?;
        f.write_fmt(format_args!(
            "Bedtime consistency: {:.2} hours std ({})\n",
            self.bedtime_consistency_std_dev,
            self.consistency_verdict(),
        ))?;
        f.write_str("Recommendations:\n")?;
        for recommendation in &self.recommendations {
            f.write_fmt(format_args!("\t- {}\n", recommendation))?;
        }
        Ok(())
    }
}
