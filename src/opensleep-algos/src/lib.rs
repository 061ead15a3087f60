pub(crate) mod duration;
pub use duration::sleep_duration;

pub(crate) mod pattern;
pub use pattern::{ADD_MORE_DATA, SleepPatternAnalyzer, SleepReport};

pub mod helpers;
