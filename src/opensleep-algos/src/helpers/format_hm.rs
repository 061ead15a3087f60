use chrono::{NaiveTime, Timelike as _};

pub trait FormatHM {
    fn format_hm(&self) -> String;
}

impl FormatHM for NaiveTime {
    fn format_hm(&self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }
}
