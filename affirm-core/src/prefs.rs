//! Flat key-value preference store, persisted as one JSON object on disk.
//!
//! Every screen of the original app shared a single preference namespace; here
//! that namespace is a `Prefs` handle with typed accessors per logical field,
//! injected into the stores that need it instead of reached through a global.
//! Each write is an independent read-modify-write; the single CLI process
//! serializes them.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const PREFS_FILE: &str = "prefs.json";

/// Handle to the durable preference map.
///
/// Cloning is cheap; clones share the same backing file.
#[derive(Debug, Clone)]
pub struct Prefs {
    path: PathBuf,
}

impl Prefs {
    /// Opens (or prepares) the preference store under `data_dir`.
    pub fn new(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)
            .with_context(|| format!("creating {}", data_dir.display()))?;
        Ok(Self {
            path: data_dir.join(PREFS_FILE),
        })
    }

    /// Missing or malformed file degrades to an empty map, never an error.
    fn load(&self) -> Map<String, Value> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Map::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    fn save(&self, map: &Map<String, Value>) -> Result<()> {
        let raw = serde_json::to_string_pretty(&Value::Object(map.clone()))?;
        fs::write(&self.path, raw)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    pub(crate) fn get_string(&self, key: &str, default: &str) -> String {
        match self.load().get(key) {
            Some(Value::String(s)) => s.clone(),
            _ => default.to_string(),
        }
    }

    pub(crate) fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.load().get(key) {
            Some(Value::Bool(b)) => *b,
            _ => default,
        }
    }

    pub(crate) fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.load().get(key) {
            Some(Value::Number(n)) => n.as_i64().unwrap_or(default),
            _ => default,
        }
    }

    pub(crate) fn put(&self, key: &str, value: Value) -> Result<()> {
        let mut map = self.load();
        map.insert(key.to_string(), value);
        self.save(&map)
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.load().contains_key(key)
    }

    // Typed accessors, one per logical field of the persisted layout.

    /// Stored username, `"User"` when absent (the notification default).
    pub fn user_name(&self) -> String {
        self.get_string("user_name", "User")
    }

    pub fn set_user_name(&self, name: &str) -> Result<()> {
        self.put("user_name", Value::String(name.trim().to_string()))
    }

    pub fn has_user_name(&self) -> bool {
        self.contains("user_name")
    }

    pub fn first_launch(&self) -> bool {
        self.get_bool("first_launch", true)
    }

    pub fn set_first_launch(&self, value: bool) -> Result<()> {
        self.put("first_launch", Value::Bool(value))
    }

    /// Armed-schedule flag: true means a recurring trigger should be
    /// (re-)registered, e.g. after a restart.
    pub fn alarm_set(&self) -> bool {
        self.get_bool("alarm_set", false)
    }

    pub fn set_alarm_set(&self, value: bool) -> Result<()> {
        self.put("alarm_set", Value::Bool(value))
    }

    /// The user-selected reminder time, if one was ever picked.
    pub fn selected_time(&self) -> Option<(u32, u32)> {
        if !self.contains("hour_selected") || !self.contains("minute_selected") {
            return None;
        }
        let hour = self.get_int("hour_selected", 0);
        let minute = self.get_int("minute_selected", 0);
        Some((hour as u32, minute as u32))
    }

    pub fn set_selected_time(&self, hour: u32, minute: u32) -> Result<()> {
        self.put("hour_selected", Value::from(hour))?;
        self.put("minute_selected", Value::from(minute))
    }

    /// Raw serialized journal entry list (a JSON array string under one key).
    pub(crate) fn entries_json(&self) -> String {
        self.get_string("entries", "[]")
    }

    pub(crate) fn set_entries_json(&self, json: &str) -> Result<()> {
        self.put("entries", Value::String(json.to_string()))
    }

    /// Index of the last answered question, 0 when nothing was answered yet.
    pub fn previous_question(&self) -> usize {
        self.get_int("previous_question", 0).max(0) as usize
    }

    pub fn set_previous_question(&self, index: usize) -> Result<()> {
        self.put("previous_question", Value::from(index as i64))
    }

    pub fn answered(&self, index: usize) -> bool {
        self.get_bool(&format!("answer_{index}"), false)
    }

    pub fn set_answered(&self, index: usize) -> Result<()> {
        self.put(&format!("answer_{index}"), Value::Bool(true))
    }

    pub fn answer_text(&self, index: usize) -> Option<String> {
        let key = format!("daily_answer_{index}");
        self.contains(&key).then(|| self.get_string(&key, ""))
    }

    pub fn set_answer_text(&self, index: usize, text: &str) -> Result<()> {
        self.put(&format!("daily_answer_{index}"), Value::String(text.to_string()))
    }

    pub fn answer_date(&self, index: usize) -> Option<String> {
        let key = format!("daily_answer_{index}_time");
        self.contains(&key).then(|| self.get_string(&key, ""))
    }

    pub fn set_answer_date(&self, index: usize, date: &str) -> Result<()> {
        self.put(
            &format!("daily_answer_{index}_time"),
            Value::String(date.to_string()),
        )
    }

    /// Gate for one-answer-per-day. Nothing in this codebase resets it; the
    /// reset lives outside the app (see DESIGN.md).
    pub fn daily_task_completed(&self) -> bool {
        self.get_bool("daily_task_completed", false)
    }

    pub fn set_daily_task_completed(&self, value: bool) -> Result<()> {
        self.put("daily_task_completed", Value::Bool(value))
    }
}
