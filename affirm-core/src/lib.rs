pub mod affirm;
pub mod config;
pub mod fetch;
pub mod journal;
pub mod notify;
pub mod prefs;
pub mod questions;
pub mod reminder;
pub mod schedule;

pub use affirm::Affirm;
pub use config::Config;
pub use fetch::Affirmation;
pub use journal::JournalEntry;
pub use notify::{Notification, NotifierPort};
pub use questions::AnswerOutcome;
pub use reminder::{AlarmPort, TriggerEvent};
