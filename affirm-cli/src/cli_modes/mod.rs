mod answer_mode;
mod editor_utils;
mod journal_mode;
mod remind_mode;
mod setup_mode;
mod today_mode;
mod trigger_mode;

pub use answer_mode::answer_mode;
pub use journal_mode::journal_mode;
pub use remind_mode::remind_mode;
pub use setup_mode::setup_mode;
pub use today_mode::today_mode;
pub use trigger_mode::trigger_mode;
