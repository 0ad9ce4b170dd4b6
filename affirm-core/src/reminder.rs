//! Daily reminder flow: desired-time selection, persisted schedule, rollover,
//! recurring registration and trigger handling.
//!
//! The OS scheduler of the original app is modelled as the [`AlarmPort`];
//! inbound callbacks are [`TriggerEvent`] values dispatched to a handler that
//! only touches the durable store and the ports, never UI state.

use crate::notify::{Emitter, NotifierPort};
use crate::prefs::Prefs;
use crate::schedule::{ReminderSchedule, next_trigger};
use anyhow::{Context, Result};
use chrono::{Days, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const ALARM_FILE: &str = "alarm.json";
const REGISTRATION_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Recurring-trigger registrar. At most one registration exists under the
/// fixed identifier; arming again replaces it.
pub trait AlarmPort {
    fn arm(&mut self, first_fire: NaiveDateTime, period_days: u64) -> Result<()>;
    fn disarm(&mut self) -> Result<()>;
}

/// The small set of inbound trigger actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    SetAlarm,
    CancelAlarm,
    BootCompleted,
}

#[derive(Debug, Serialize, Deserialize)]
struct Registration {
    next_fire: String,
    period_days: u64,
}

/// File-backed registrar: the registration survives process restarts, which
/// is what boot-time re-arming relies on.
#[derive(Debug)]
pub struct FileAlarm {
    path: PathBuf,
}

impl FileAlarm {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(ALARM_FILE),
        }
    }

    /// The active registration, if any. A malformed file reads as none.
    pub fn registration(&self) -> Option<(NaiveDateTime, u64)> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let reg: Registration = serde_json::from_str(&raw).ok()?;
        let next_fire =
            NaiveDateTime::parse_from_str(&reg.next_fire, REGISTRATION_TIME_FORMAT).ok()?;
        Some((next_fire, reg.period_days))
    }
}

impl AlarmPort for FileAlarm {
    fn arm(&mut self, first_fire: NaiveDateTime, period_days: u64) -> Result<()> {
        let reg = Registration {
            next_fire: first_fire.format(REGISTRATION_TIME_FORMAT).to_string(),
            period_days,
        };
        fs::write(&self.path, serde_json::to_string_pretty(&reg)?)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    fn disarm(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("removing {}", self.path.display())),
        }
    }
}

/// Current armed state plus the computed next fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderStatus {
    pub schedule: ReminderSchedule,
    pub next_fire: NaiveDateTime,
}

#[derive(Debug)]
pub struct Reminders {
    prefs: Prefs,
}

impl Reminders {
    pub fn new(prefs: Prefs) -> Self {
        Self { prefs }
    }

    /// Persists the selected time, arms a daily trigger at the next matching
    /// instant and returns that instant.
    ///
    /// The old registration is always cancelled first. Registrar failure
    /// degrades to best effort: logged, never surfaced to the user.
    pub fn schedule(
        &self,
        hour: u32,
        minute: u32,
        now: NaiveDateTime,
        alarm: &mut dyn AlarmPort,
    ) -> Result<NaiveDateTime> {
        alarm.disarm()?;
        self.prefs.set_selected_time(hour, minute)?;
        self.prefs.set_alarm_set(true)?;

        let first_fire = next_trigger(now, hour, minute);
        if first_fire.date() != now.date() {
            log::info!("Added a day");
        }
        if let Err(err) = alarm.arm(first_fire, 1) {
            log::warn!("Could not register alarm, delivery degrades to best effort: {err:#}");
        }
        log::info!("Notification scheduled for {hour}:{minute} daily");
        Ok(first_fire)
    }

    /// Cancels the registration and clears the armed flag.
    pub fn cancel(&self, alarm: &mut dyn AlarmPort) -> Result<()> {
        alarm.disarm()?;
        self.prefs.set_alarm_set(false)?;
        log::info!("Notifications cancelled");
        Ok(())
    }

    pub fn status(&self, now: NaiveDateTime) -> Option<ReminderStatus> {
        let (hour, minute) = self.prefs.selected_time()?;
        let armed = self.prefs.alarm_set();
        if !armed {
            return None;
        }
        Some(ReminderStatus {
            schedule: ReminderSchedule {
                armed,
                hour,
                minute,
            },
            next_fire: next_trigger(now, hour, minute),
        })
    }

    /// Dispatches an inbound trigger action.
    ///
    /// Set and cancel actions both run the notification path, faithful to the
    /// receiver they are modelled on; boot re-arms the persisted schedule
    /// when it is still flagged armed.
    pub fn handle_event(
        &self,
        event: TriggerEvent,
        now: NaiveDateTime,
        alarm: &mut dyn AlarmPort,
        notifier: &mut dyn NotifierPort,
    ) -> Result<()> {
        match event {
            TriggerEvent::SetAlarm | TriggerEvent::CancelAlarm => {
                Emitter::new(self.prefs.clone()).fire(notifier)
            }
            TriggerEvent::BootCompleted => {
                log::info!("Received boot event, daily affirmations active!");
                if !self.prefs.alarm_set() {
                    return Ok(());
                }
                let Some((hour, minute)) = self.prefs.selected_time() else {
                    return Ok(());
                };
                let first_fire = next_trigger(now, hour, minute);
                if let Err(err) = alarm.arm(first_fire, 1) {
                    log::warn!("Boot re-arm failed: {err:#}");
                }
                Ok(())
            }
        }
    }

    /// Fires the registration when due and advances it by its period until it
    /// is in the future again; the foreground watch loop drives this.
    ///
    /// Returns the next pending fire, or `None` when nothing is registered.
    pub fn fire_due(
        &self,
        now: NaiveDateTime,
        alarm: &mut FileAlarm,
        notifier: &mut dyn NotifierPort,
    ) -> Result<Option<NaiveDateTime>> {
        let Some((mut next_fire, period_days)) = alarm.registration() else {
            return Ok(None);
        };
        if next_fire > now {
            return Ok(Some(next_fire));
        }

        Emitter::new(self.prefs.clone()).fire(notifier)?;
        while next_fire <= now {
            match next_fire.checked_add_days(Days::new(period_days)) {
                Some(advanced) => next_fire = advanced,
                None => break,
            }
        }
        alarm.arm(next_fire, period_days)?;
        Ok(Some(next_fire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Notification;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    #[derive(Default)]
    struct MemoryAlarm {
        armed: Option<(NaiveDateTime, u64)>,
        disarm_calls: usize,
    }

    impl AlarmPort for MemoryAlarm {
        fn arm(&mut self, first_fire: NaiveDateTime, period_days: u64) -> Result<()> {
            self.armed = Some((first_fire, period_days));
            Ok(())
        }

        fn disarm(&mut self) -> Result<()> {
            self.armed = None;
            self.disarm_calls += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryNotifier {
        shown: Vec<Notification>,
    }

    impl NotifierPort for MemoryNotifier {
        fn permission_granted(&self) -> bool {
            true
        }

        fn deliver(&mut self, notification: Notification) -> Result<()> {
            self.shown.push(notification);
            Ok(())
        }
    }

    fn mk_reminders() -> (Reminders, Prefs, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let prefs = Prefs::new(tmp.path()).unwrap();
        (Reminders::new(prefs.clone()), prefs, tmp)
    }

    fn march_14(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 14)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn schedule_past_time_arms_tomorrow_and_cancel_disarms() {
        let (reminders, prefs, _tmp) = mk_reminders();
        let mut alarm = MemoryAlarm::default();

        let first_fire = reminders
            .schedule(8, 30, march_14(9, 0), &mut alarm)
            .unwrap();

        let tomorrow = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        assert_eq!(first_fire, tomorrow);
        assert_eq!(alarm.armed, Some((tomorrow, 1)));
        assert!(prefs.alarm_set());
        assert_eq!(prefs.selected_time(), Some((8, 30)));
        // Defensive disarm always happens before arming.
        assert_eq!(alarm.disarm_calls, 1);

        reminders.cancel(&mut alarm).unwrap();
        assert_eq!(alarm.armed, None);
        assert!(!prefs.alarm_set());
    }

    #[test]
    fn schedule_future_time_arms_today() {
        let (reminders, _prefs, _tmp) = mk_reminders();
        let mut alarm = MemoryAlarm::default();
        let first_fire = reminders
            .schedule(21, 0, march_14(9, 0), &mut alarm)
            .unwrap();
        assert_eq!(first_fire, march_14(21, 0));
    }

    #[test]
    fn status_reports_only_when_armed() {
        let (reminders, prefs, _tmp) = mk_reminders();
        let mut alarm = MemoryAlarm::default();
        assert!(reminders.status(march_14(9, 0)).is_none());

        reminders.schedule(8, 30, march_14(9, 0), &mut alarm).unwrap();
        let status = reminders.status(march_14(9, 0)).unwrap();
        assert_eq!(status.schedule.hour, 8);
        assert_eq!(status.schedule.minute, 30);
        assert!(status.schedule.armed);

        prefs.set_alarm_set(false).unwrap();
        assert!(reminders.status(march_14(9, 0)).is_none());
    }

    #[test]
    fn trigger_actions_fire_the_notification() {
        let (reminders, _prefs, _tmp) = mk_reminders();
        let mut alarm = MemoryAlarm::default();
        let mut notifier = MemoryNotifier::default();

        reminders
            .handle_event(TriggerEvent::SetAlarm, march_14(8, 30), &mut alarm, &mut notifier)
            .unwrap();
        reminders
            .handle_event(TriggerEvent::CancelAlarm, march_14(8, 30), &mut alarm, &mut notifier)
            .unwrap();
        assert_eq!(notifier.shown.len(), 2);
        assert!(alarm.armed.is_none());
    }

    #[test]
    fn boot_rearms_only_an_armed_schedule() {
        let (reminders, prefs, _tmp) = mk_reminders();
        let mut alarm = MemoryAlarm::default();
        let mut notifier = MemoryNotifier::default();

        prefs.set_selected_time(8, 30).unwrap();
        reminders
            .handle_event(TriggerEvent::BootCompleted, march_14(9, 0), &mut alarm, &mut notifier)
            .unwrap();
        assert!(alarm.armed.is_none());

        prefs.set_alarm_set(true).unwrap();
        reminders
            .handle_event(TriggerEvent::BootCompleted, march_14(9, 0), &mut alarm, &mut notifier)
            .unwrap();
        let (first_fire, period) = alarm.armed.unwrap();
        assert_eq!(first_fire.time().format("%H:%M").to_string(), "08:30");
        assert_eq!(period, 1);
        assert!(notifier.shown.is_empty());
    }

    #[test]
    fn file_alarm_round_trips_and_survives_reopen() {
        let tmp = tempdir().unwrap();
        let mut alarm = FileAlarm::new(tmp.path());
        assert!(alarm.registration().is_none());

        alarm.arm(march_14(8, 30), 1).unwrap();
        let reopened = FileAlarm::new(tmp.path());
        assert_eq!(reopened.registration(), Some((march_14(8, 30), 1)));

        alarm.disarm().unwrap();
        assert!(alarm.registration().is_none());
        // Disarming twice is fine.
        alarm.disarm().unwrap();
    }

    #[test]
    fn fire_due_delivers_and_advances_past_now() {
        let (reminders, _prefs, tmp) = mk_reminders();
        let mut alarm = FileAlarm::new(tmp.path());
        let mut notifier = MemoryNotifier::default();

        alarm.arm(march_14(8, 30), 1).unwrap();

        // Not due yet: nothing delivered.
        let next = reminders
            .fire_due(march_14(8, 0), &mut alarm, &mut notifier)
            .unwrap();
        assert_eq!(next, Some(march_14(8, 30)));
        assert!(notifier.shown.is_empty());

        // Two missed periods collapse into one delivery.
        let two_days_on = NaiveDate::from_ymd_opt(2024, 3, 16)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let next = reminders
            .fire_due(two_days_on, &mut alarm, &mut notifier)
            .unwrap()
            .unwrap();
        assert_eq!(notifier.shown.len(), 1);
        assert!(next > two_days_on);
        assert_eq!(next.time().format("%H:%M").to_string(), "08:30");
    }
}
