//! Notification templates and the permission-gated emitter.

use crate::prefs::Prefs;
use anyhow::Result;

/// Channel identifier; also doubles as the notification title, as the
/// original app titled its notifications with the channel name.
pub const CHANNEL_ID: &str = "Daily Affirmations";

/// Fixed id reused for every delivery: a second firing replaces the first
/// instead of stacking.
pub const NOTIFICATION_ID: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub channel: &'static str,
    pub title: String,
    pub body: String,
    pub expanded: String,
}

/// Delivery side of the notification flow.
///
/// The terminal implementation always has permission; test doubles model the
/// denied/ungranted paths.
pub trait NotifierPort {
    fn permission_granted(&self) -> bool;

    /// Whether an inline permission request is possible from this context.
    /// Only some delivery contexts can ask (the original could only request
    /// from an activity); everywhere else the gap is a silent no-op.
    fn can_request_permission(&self) -> bool {
        false
    }

    /// Returns whether permission was granted after the request.
    fn request_permission(&mut self) -> bool {
        false
    }

    fn deliver(&mut self, notification: Notification) -> Result<()>;
}

/// Two states: idle until a trigger event or explicit request fires it.
#[derive(Debug)]
pub struct Emitter {
    prefs: Prefs,
}

impl Emitter {
    pub fn new(prefs: Prefs) -> Self {
        Self { prefs }
    }

    /// Builds the notification from the templates with the stored username
    /// interpolated (default `"User"`).
    pub fn build(&self) -> Notification {
        let name = self.prefs.user_name();
        Notification {
            id: NOTIFICATION_ID,
            channel: CHANNEL_ID,
            title: CHANNEL_ID.to_string(),
            body: format!("Hey {name}, it's time for your daily affirmation!"),
            expanded: format!(
                "Hey {name}, take a minute to read today's affirmation and write down how you feel."
            ),
        }
    }

    /// Checks permission, requesting it inline where the port allows, then
    /// submits the notification. Delivery without permission is left to the
    /// port, which may drop it silently.
    pub fn fire(&self, port: &mut dyn NotifierPort) -> Result<()> {
        if !port.permission_granted() {
            if port.can_request_permission() {
                if !port.request_permission() {
                    log::warn!("Notification permission denied by user");
                }
            } else {
                log::warn!("Notification permission missing and not requestable here");
            }
        }
        log::info!("Alarm triggered, notifying user");
        port.deliver(self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Port double that only records deliveries it has permission for,
    /// like the platform notification manager.
    struct MemoryNotifier {
        granted: bool,
        requestable: bool,
        shown: Vec<Notification>,
    }

    impl MemoryNotifier {
        fn new(granted: bool, requestable: bool) -> Self {
            Self {
                granted,
                requestable,
                shown: Vec::new(),
            }
        }
    }

    impl NotifierPort for MemoryNotifier {
        fn permission_granted(&self) -> bool {
            self.granted
        }

        fn can_request_permission(&self) -> bool {
            self.requestable
        }

        fn request_permission(&mut self) -> bool {
            self.granted = true;
            self.granted
        }

        fn deliver(&mut self, notification: Notification) -> Result<()> {
            if self.granted {
                // Same id replaces in place.
                self.shown.retain(|n| n.id != notification.id);
                self.shown.push(notification);
            }
            Ok(())
        }
    }

    fn mk_emitter(name: Option<&str>) -> (Emitter, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let prefs = Prefs::new(tmp.path()).unwrap();
        if let Some(name) = name {
            prefs.set_user_name(name).unwrap();
        }
        (Emitter::new(prefs), tmp)
    }

    #[test]
    fn username_is_interpolated_exactly_once() {
        let (emitter, _tmp) = mk_emitter(Some("Alex"));
        let notification = emitter.build();
        assert_eq!(notification.body.matches("Alex").count(), 1);
        assert!(notification.body.contains("Alex"));
        assert_eq!(notification.title, CHANNEL_ID);
    }

    #[test]
    fn missing_username_falls_back_to_user() {
        let (emitter, _tmp) = mk_emitter(None);
        assert!(emitter.build().body.contains("Hey User,"));
    }

    #[test]
    fn firing_twice_replaces_instead_of_stacking() {
        let (emitter, _tmp) = mk_emitter(Some("Alex"));
        let mut port = MemoryNotifier::new(true, false);
        emitter.fire(&mut port).unwrap();
        emitter.fire(&mut port).unwrap();
        assert_eq!(port.shown.len(), 1);
    }

    #[test]
    fn ungranted_and_unrequestable_is_a_silent_no_op() {
        let (emitter, _tmp) = mk_emitter(Some("Alex"));
        let mut port = MemoryNotifier::new(false, false);
        emitter.fire(&mut port).unwrap();
        assert!(port.shown.is_empty());
    }

    #[test]
    fn inline_request_unblocks_delivery() {
        let (emitter, _tmp) = mk_emitter(Some("Alex"));
        let mut port = MemoryNotifier::new(false, true);
        emitter.fire(&mut port).unwrap();
        assert_eq!(port.shown.len(), 1);
    }
}
