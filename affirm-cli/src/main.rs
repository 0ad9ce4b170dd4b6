mod cli;
mod cli_modes;
mod logging;
mod notifier;
mod render;

use anyhow::Result;
use clap::Parser;

use affirm_core::Affirm;
use cli::{Cli, Command};
use cli_modes::{answer_mode, journal_mode, remind_mode, setup_mode, today_mode, trigger_mode};
use render::{ColorMode, Renderer};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("affirm: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let app = Affirm::new()?;
    let _logger = logging::init(&app.config.data_dir)?;

    let use_color = match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                false
            } else {
                io::stdout().is_terminal()
            }
        }
    };
    let renderer = Renderer::new(use_color);

    // Everything except setup is gated behind onboarding.
    if app.prefs.first_launch() && !matches!(cli.command, Some(Command::Setup { .. })) {
        renderer.print_info("Welcome to affirm! Run `affirm setup <name>` to get started.");
        return Ok(());
    }

    match cli.command {
        None | Some(Command::Today) => today_mode(&renderer, &app),
        Some(Command::Setup { name }) => setup_mode(&renderer, &app, &name.join(" ")),
        Some(Command::Journal { list, delete, text }) => {
            journal_mode(&renderer, &app, list, delete, &text)
        }
        Some(Command::Answer { list, text }) => answer_mode(&renderer, &app, list, &text),
        Some(Command::Remind {
            time,
            cancel,
            status,
            watch,
        }) => remind_mode(&renderer, &app, time.as_deref(), cancel, status, watch),
        Some(Command::Trigger { action }) => trigger_mode(&renderer, &app, action),
    }
}
