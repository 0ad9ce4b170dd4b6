use crate::{
    config::Config,
    fetch::AffirmationsApi,
    journal::Journal,
    prefs::Prefs,
    questions::Questions,
    reminder::{FileAlarm, Reminders},
};
use anyhow::{Context, Result};
use std::fs;

/// The central struct for all app operations: owns the configuration and the
/// stores built on the shared preference handle.
#[derive(Debug)]
pub struct Affirm {
    pub config: Config,
    pub prefs: Prefs,
    pub journal: Journal,
    pub questions: Questions,
    pub reminders: Reminders,
}

impl Affirm {
    /// Creates a new `Affirm` instance, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Affirm` instance with a specific `Config`.
    ///
    /// This also ensures that the data directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)
            .with_context(|| format!("creating data dir {}", config.data_dir.display()))?;

        let prefs = Prefs::new(&config.data_dir)?;
        let journal = Journal::new(prefs.clone(), config.journal_time_format.clone());
        let questions = Questions::new(prefs.clone(), config.answer_date_format.clone());
        let reminders = Reminders::new(prefs.clone());
        Ok(Self {
            config,
            prefs,
            journal,
            questions,
            reminders,
        })
    }

    /// Client for the configured affirmation endpoint.
    pub fn api(&self) -> AffirmationsApi {
        AffirmationsApi::new(self.config.api_base_url.clone())
    }

    /// The durable alarm registration next to the preference store.
    pub fn file_alarm(&self) -> FileAlarm {
        FileAlarm::new(&self.config.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::mk_config;
    use crate::questions::AnswerOutcome;
    use tempfile::tempdir;

    fn mk_affirm() -> (Affirm, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let config = mk_config(tmp.path().join("affirm"));
        let app = Affirm::with_config(config).unwrap();
        (app, tmp)
    }

    #[test]
    fn with_config_creates_the_data_dir() {
        let (app, _tmp) = mk_affirm();
        assert!(app.config.data_dir.exists());
    }

    #[test]
    fn stores_share_one_preference_namespace() {
        let (app, _tmp) = mk_affirm();
        app.journal.append("shared state").unwrap();
        assert_eq!(app.questions.answer(0, "fine").unwrap(), AnswerOutcome::Saved);

        // Both stores wrote through the same prefs handle.
        assert_eq!(app.journal.latest().unwrap().text, "shared state");
        assert!(app.prefs.daily_task_completed());
    }
}
