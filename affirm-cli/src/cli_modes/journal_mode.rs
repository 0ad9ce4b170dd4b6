use super::editor_utils::{create_editor_buffer, resolve_editor};
use crate::render::Renderer;
use affirm_core::Affirm;
use anyhow::Result;

pub fn journal_mode(
    renderer: &Renderer,
    app: &Affirm,
    list: bool,
    delete: Option<usize>,
    text: &[String],
) -> Result<()> {
    if list {
        let entries = app.journal.list();
        if entries.is_empty() {
            renderer.print_info("No journal entries yet.");
            return Ok(());
        }
        renderer.print_info(&format!("{} entries found.", entries.len()));
        for (index, entry) in entries.iter().enumerate() {
            renderer.print_journal_entry(Some(index), entry);
        }
        return Ok(());
    }

    if let Some(index) = delete {
        if app.journal.delete_at(index)? {
            renderer.print_info(&format!("Deleted entry {index}."));
        } else {
            renderer.print_info(&format!("No entry at index {index}."));
        }
        return Ok(());
    }

    let input = if text.is_empty() {
        let editor = resolve_editor(&app.config.editor)?;
        create_editor_buffer(&editor)?
    } else {
        text.join(" ")
    };
    if input.trim().is_empty() {
        renderer.print_info("Can't save an empty journal entry.");
        return Ok(());
    }

    let entry = app.journal.append(&input)?;
    renderer.print_info(&format!("Saved your entry ({}).", entry.date_time));
    Ok(())
}
