use crate::cli::TriggerAction;
use crate::notifier::TerminalNotifier;
use crate::render::Renderer;
use affirm_core::Affirm;
use anyhow::Result;
use chrono::Local;

/// Feeds a scheduler-style event into the reminder dispatcher, the way the
/// original receiver was invoked by the OS.
pub fn trigger_mode(renderer: &Renderer, app: &Affirm, action: TriggerAction) -> Result<()> {
    let mut alarm = app.file_alarm();
    let mut notifier = TerminalNotifier::new(renderer);
    let now = Local::now().naive_local();
    app.reminders
        .handle_event(action.event(), now, &mut alarm, &mut notifier)
}
