use affirm_core::TriggerEvent;
use clap::{Parser, Subcommand, ValueEnum};

use crate::render::ColorMode;

/// affirm — daily affirmations, journaling and reflection reminders
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, global = true, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show today's affirmation, question and most recent journal entry
    Today,
    /// Store your name and finish first-launch setup
    Setup {
        /// How the app should address you.
        name: Vec<String>,
    },
    /// Write a journal entry, or list/delete existing ones
    Journal {
        /// Show all entries, newest first.
        #[arg(long)]
        list: bool,
        /// Delete the entry at a displayed index (see --list).
        #[arg(long, value_name = "INDEX", conflicts_with = "list")]
        delete: Option<usize>,
        /// Free text for the entry; opens your editor when omitted.
        text: Vec<String>,
    },
    /// Answer today's reflection question
    Answer {
        /// Show every question with its stored answer.
        #[arg(long)]
        list: bool,
        /// Your answer; opens your editor when omitted.
        text: Vec<String>,
    },
    /// Schedule, inspect or cancel the daily reminder
    Remind {
        /// Reminder time of day, e.g. `08:30`.
        #[arg(value_name = "HH:MM")]
        time: Option<String>,
        /// Cancel the scheduled reminder.
        #[arg(long, conflicts_with = "time")]
        cancel: bool,
        /// Show the armed schedule and its next delivery.
        #[arg(long, conflicts_with_all = ["time", "cancel"])]
        status: bool,
        /// Stay in the foreground and deliver reminders as they come due.
        #[arg(long, conflicts_with_all = ["time", "cancel", "status"])]
        watch: bool,
    },
    /// Inject a scheduler-style trigger event
    Trigger {
        #[arg(value_enum)]
        action: TriggerAction,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug)]
pub enum TriggerAction {
    SetAlarm,
    CancelAlarm,
    BootCompleted,
}

impl TriggerAction {
    pub fn event(self) -> TriggerEvent {
        match self {
            TriggerAction::SetAlarm => TriggerEvent::SetAlarm,
            TriggerAction::CancelAlarm => TriggerEvent::CancelAlarm,
            TriggerAction::BootCompleted => TriggerEvent::BootCompleted,
        }
    }
}
