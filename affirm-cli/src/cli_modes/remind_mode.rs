use crate::notifier::TerminalNotifier;
use crate::render::Renderer;
use affirm_core::Affirm;
use anyhow::Result;
use chrono::{Local, NaiveTime, Timelike};
use std::{thread, time::Duration};

/// Longest single sleep in the watch loop; waking up periodically keeps the
/// loop honest across suspend/resume and wall-clock changes.
const MAX_SLEEP_SECS: u64 = 60;

pub fn remind_mode(
    renderer: &Renderer,
    app: &Affirm,
    time: Option<&str>,
    cancel: bool,
    status: bool,
    watch: bool,
) -> Result<()> {
    let mut alarm = app.file_alarm();

    if cancel {
        app.reminders.cancel(&mut alarm)?;
        renderer.print_info("Daily reminder cancelled.");
        return Ok(());
    }

    if status {
        return print_status(renderer, app);
    }

    if watch {
        return watch_loop(renderer, app);
    }

    let Some(time) = time else {
        return print_status(renderer, app);
    };
    let Ok(parsed) = NaiveTime::parse_from_str(time, "%H:%M") else {
        renderer.print_info(&format!("'{time}' is not a valid time, expected HH:MM."));
        return Ok(());
    };

    let now = Local::now().naive_local();
    let first_fire = app
        .reminders
        .schedule(parsed.hour(), parsed.minute(), now, &mut alarm)?;
    renderer.print_info(&format!(
        "Daily reminder set for {time}. First delivery: {}.",
        first_fire.format("%d/%m/%y %H:%M")
    ));
    renderer.print_md("*Run `affirm remind --watch` to receive it in this terminal.*");
    Ok(())
}

fn print_status(renderer: &Renderer, app: &Affirm) -> Result<()> {
    let now = Local::now().naive_local();
    match app.reminders.status(now) {
        Some(status) => renderer.print_info(&format!(
            "Reminder armed for {:02}:{:02} daily. Next delivery: {}.",
            status.schedule.hour,
            status.schedule.minute,
            status.next_fire.format("%d/%m/%y %H:%M")
        )),
        None => renderer.print_info("No reminder scheduled. Try `affirm remind 08:30`."),
    }
    Ok(())
}

/// Foreground delivery loop: the terminal stand-in for the platform alarm
/// service invoking its receiver.
fn watch_loop(renderer: &Renderer, app: &Affirm) -> Result<()> {
    let mut alarm = app.file_alarm();
    let mut notifier = TerminalNotifier::new(renderer);

    loop {
        let now = Local::now().naive_local();
        let Some(next_fire) = app.reminders.fire_due(now, &mut alarm, &mut notifier)? else {
            renderer.print_info("No reminder scheduled, nothing to watch.");
            return Ok(());
        };

        let wait = (next_fire - now).num_seconds().max(1) as u64;
        thread::sleep(Duration::from_secs(wait.min(MAX_SLEEP_SECS)));
    }
}
