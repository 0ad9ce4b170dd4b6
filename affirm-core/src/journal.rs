//! Free-text journal, stored as one serialized list under the `entries` key.
//!
//! Storage order is insertion order; the UI-facing order is newest-first, so
//! display indices are mapped back before a delete.

use crate::prefs::Prefs;
use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub text: String,
    #[serde(rename = "dateTime")]
    pub date_time: String,
}

#[derive(Debug)]
pub struct Journal {
    prefs: Prefs,
    time_format: String,
}

impl Journal {
    pub fn new(prefs: Prefs, time_format: String) -> Self {
        Self { prefs, time_format }
    }

    /// Trims the text, stamps the current local date/time and appends the
    /// entry to the end of the persisted sequence.
    pub fn append(&self, text: &str) -> Result<JournalEntry> {
        let stamp = Local::now().format(&self.time_format).to_string();
        self.append_stamped(text, &stamp)
    }

    fn append_stamped(&self, text: &str, stamp: &str) -> Result<JournalEntry> {
        let entry = JournalEntry {
            text: text.trim().to_string(),
            date_time: stamp.to_string(),
        };
        let mut stored = self.stored_entries();
        stored.push(entry.clone());
        self.prefs.set_entries_json(&serde_json::to_string(&stored)?)?;
        Ok(entry)
    }

    /// All entries, newest first.
    pub fn list(&self) -> Vec<JournalEntry> {
        let mut stored = self.stored_entries();
        stored.reverse();
        stored
    }

    /// The most recently appended entry, if any.
    pub fn latest(&self) -> Option<JournalEntry> {
        self.stored_entries().pop()
    }

    /// Deletes the entry at a newest-first display index.
    ///
    /// Returns whether something was removed; an out-of-bounds index is a
    /// no-op, mirroring the original guard.
    pub fn delete_at(&self, display_index: usize) -> Result<bool> {
        let mut stored = self.stored_entries();
        if display_index >= stored.len() {
            return Ok(false);
        }
        let storage_index = stored.len() - display_index - 1;
        stored.remove(storage_index);
        self.prefs.set_entries_json(&serde_json::to_string(&stored)?)?;
        Ok(true)
    }

    /// Malformed or absent stored JSON defaults to an empty list.
    fn stored_entries(&self) -> Vec<JournalEntry> {
        serde_json::from_str(&self.prefs.entries_json()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn mk_journal() -> (Journal, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let prefs = Prefs::new(tmp.path()).unwrap();
        let journal = Journal::new(prefs, "%d/%m/%y, %I:%M %p".to_string());
        (journal, tmp)
    }

    #[test]
    fn list_is_newest_first_and_delete_maps_back() {
        let (journal, _tmp) = mk_journal();
        journal.append("a").unwrap();
        journal.append("b").unwrap();

        let texts: Vec<String> = journal.list().into_iter().map(|e| e.text).collect();
        assert_eq!(texts, vec!["b", "a"]);

        assert!(journal.delete_at(1).unwrap());
        let texts: Vec<String> = journal.list().into_iter().map(|e| e.text).collect();
        assert_eq!(texts, vec!["b"]);
    }

    #[test]
    fn append_trims_whitespace() {
        let (journal, _tmp) = mk_journal();
        journal.append("  kept my promise today \n").unwrap();
        assert_eq!(journal.list()[0].text, "kept my promise today");
    }

    #[test]
    fn latest_is_the_last_appended() {
        let (journal, _tmp) = mk_journal();
        assert_eq!(journal.latest(), None);
        journal.append("first").unwrap();
        journal.append("second").unwrap();
        assert_eq!(journal.latest().unwrap().text, "second");
    }

    #[test]
    fn delete_out_of_bounds_is_a_no_op() {
        let (journal, _tmp) = mk_journal();
        journal.append("only").unwrap();
        assert!(!journal.delete_at(5).unwrap());
        assert_eq!(journal.list().len(), 1);
    }

    #[test]
    fn malformed_stored_json_reads_as_empty() {
        let (journal, _tmp) = mk_journal();
        journal.prefs.set_entries_json("not an array").unwrap();
        assert!(journal.list().is_empty());
        // A fresh append re-establishes a valid list.
        journal.append("recovered").unwrap();
        assert_eq!(journal.list().len(), 1);
    }

    #[test]
    fn stored_shape_uses_the_wire_key() {
        let (journal, _tmp) = mk_journal();
        journal.append_stamped("x", "01/03/24, 12:00 PM").unwrap();
        let raw = journal.prefs.entries_json();
        assert!(raw.contains("\"dateTime\":\"01/03/24, 12:00 PM\""));
    }
}
