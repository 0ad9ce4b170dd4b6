use super::editor_utils::{create_editor_buffer, resolve_editor};
use crate::render::Renderer;
use affirm_core::{Affirm, AnswerOutcome};
use anyhow::Result;

pub fn answer_mode(renderer: &Renderer, app: &Affirm, list: bool, text: &[String]) -> Result<()> {
    if list {
        for status in app.questions.statuses() {
            renderer.print_question_status(&status);
        }
        return Ok(());
    }

    let index = app.questions.current_index();
    let question = app.questions.today_question();

    if app.prefs.answered(index) || app.prefs.daily_task_completed() {
        renderer.print_info("Today's question is already answered. Come back tomorrow.");
        return Ok(());
    }

    renderer.print_question(question, false);
    let input = if text.is_empty() {
        let editor = resolve_editor(&app.config.editor)?;
        create_editor_buffer(&editor)?
    } else {
        text.join(" ")
    };
    if input.trim().is_empty() {
        renderer.print_info("Can't save an empty answer.");
        return Ok(());
    }

    match app.questions.answer(index, &input)? {
        AnswerOutcome::Saved => {
            renderer.print_info(&format!("Answer saved for day {}.", index + 1));
        }
        AnswerOutcome::AlreadyAnswered | AnswerOutcome::DayComplete => {
            renderer.print_info("Today's question is already answered. Come back tomorrow.");
        }
        AnswerOutcome::NotCurrent => {
            renderer.print_info("That question isn't open yet.");
        }
    }
    Ok(())
}
