use crate::render::Renderer;
use affirm_core::Affirm;
use anyhow::Result;

pub fn setup_mode(renderer: &Renderer, app: &Affirm, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        renderer.print_info("Your name can't be empty. Try `affirm setup <name>`.");
        return Ok(());
    }

    app.prefs.set_user_name(name)?;
    app.prefs.set_first_launch(false)?;
    log::info!("Setup finished");
    renderer.print_info(&format!(
        "Hey {name}! You're all set. Try `affirm` for today's view, or `affirm remind 08:30` for a daily nudge."
    ));
    Ok(())
}
