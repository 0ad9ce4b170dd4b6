use crate::render::Renderer;
use affirm_core::{Notification, NotifierPort};
use anyhow::Result;

/// Delivers notifications as terminal cards. There is no permission gate in a
/// terminal, so this port is always granted.
pub struct TerminalNotifier<'a> {
    renderer: &'a Renderer,
}

impl<'a> TerminalNotifier<'a> {
    pub fn new(renderer: &'a Renderer) -> Self {
        Self { renderer }
    }
}

impl NotifierPort for TerminalNotifier<'_> {
    fn permission_granted(&self) -> bool {
        true
    }

    fn deliver(&mut self, notification: Notification) -> Result<()> {
        self.renderer.print_notification(&notification);
        Ok(())
    }
}
