use crate::render::Renderer;
use affirm_core::Affirm;
use anyhow::Result;

/// The composite home view: affirmation card, today's question and the most
/// recent journal entry, if there is one.
pub fn today_mode(renderer: &Renderer, app: &Affirm) -> Result<()> {
    let affirmation = app.api().fetch();
    renderer.print_affirmation(&affirmation);

    let question = app.questions.today_question();
    let locked = app.prefs.daily_task_completed();
    renderer.print_question(question, locked);

    if let Some(entry) = app.journal.latest() {
        renderer.print_md("# RECENT JOURNAL ENTRY");
        renderer.print_journal_entry(None, &entry);
    }
    Ok(())
}
