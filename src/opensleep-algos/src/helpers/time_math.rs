use chrono::{NaiveTime, Timelike as _};

/// Time-of-day as decimal hours, e.g. 23:30 -> 23.5. No midnight
/// wrapping: 01:00 maps to 1.0, not 25.0.
pub fn decimal_hours(time: NaiveTime) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0_f64
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Sample standard deviation, divisor n - 1. Zero for fewer than two
/// values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0_f64;
    }

    let mean = mean(values);
    let variance = values
        .iter()
        .map(|x| (x - mean).powi(2))
        .sum::<f64>()
        / (values.len() - 1) as f64;

    variance.sqrt()
}

pub fn round_float(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
