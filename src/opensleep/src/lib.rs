#[macro_use]
extern crate log;

mod journal;
pub use journal::SleepJournal;

mod session;
pub use session::OpenSleep;

pub mod cli;
