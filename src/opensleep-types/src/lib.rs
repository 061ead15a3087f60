#[macro_use]
extern crate serde;

mod entry;
pub use entry::SleepEntry;
