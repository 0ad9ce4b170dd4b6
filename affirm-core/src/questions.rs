//! Rotating daily reflection questions: one question may be answered per
//! calendar day, and answered questions stay readable forever.

use crate::prefs::Prefs;
use anyhow::Result;
use chrono::Local;

/// The built-in question rotation, one per day, 0-based.
pub const QUESTIONS: &[&str] = &[
    "What made you smile today?",
    "What are you grateful for right now?",
    "What is something kind you did for yourself today?",
    "What is one thing you learned about yourself this week?",
    "What would you tell a friend who felt the way you feel today?",
    "What small win are you proud of today?",
    "What do you want to let go of before tomorrow?",
];

/// Result of trying to save an answer. Rejections carry no mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Saved,
    /// That question already holds a permanent answer.
    AlreadyAnswered,
    /// Today's answer was already given; further input is locked until the
    /// daily flag resets.
    DayComplete,
    /// Only the question at the current pointer accepts input.
    NotCurrent,
}

/// One row of the questions overview.
#[derive(Debug, Clone)]
pub struct QuestionStatus {
    pub index: usize,
    pub question: &'static str,
    pub answered: bool,
    pub answer: Option<String>,
    pub answered_on: Option<String>,
}

#[derive(Debug)]
pub struct Questions {
    prefs: Prefs,
    date_format: String,
}

impl Questions {
    pub fn new(prefs: Prefs, date_format: String) -> Self {
        Self { prefs, date_format }
    }

    /// The index currently open for answering.
    ///
    /// The stored pointer names the last answered question; once that slot is
    /// filled, the pointer's successor is next, clamped to the rotation end.
    pub fn current_index(&self) -> usize {
        let prev = self.prefs.previous_question();
        if self.prefs.answered(prev) {
            (prev + 1).min(QUESTIONS.len() - 1)
        } else {
            prev
        }
    }

    pub fn question(&self, index: usize) -> Option<&'static str> {
        QUESTIONS.get(index).copied()
    }

    pub fn today_question(&self) -> &'static str {
        QUESTIONS[self.current_index()]
    }

    /// Tries to save an answer for `index`, stamped with today's date.
    ///
    /// Accepted only when the slot is unanswered, the daily-completed flag is
    /// clear, and `index` is the current pointer; otherwise the matching
    /// rejection is returned and nothing is written.
    pub fn answer(&self, index: usize, text: &str) -> Result<AnswerOutcome> {
        if self.prefs.answered(index) {
            return Ok(AnswerOutcome::AlreadyAnswered);
        }
        if self.prefs.daily_task_completed() {
            return Ok(AnswerOutcome::DayComplete);
        }
        if index != self.current_index() {
            return Ok(AnswerOutcome::NotCurrent);
        }

        let date = Local::now().format(&self.date_format).to_string();
        self.prefs.set_answered(index)?;
        self.prefs.set_answer_text(index, text.trim())?;
        self.prefs.set_answer_date(index, &date)?;
        self.prefs.set_daily_task_completed(true)?;
        self.prefs.set_previous_question(index)?;
        log::info!("Saved answer for question {index}");
        Ok(AnswerOutcome::Saved)
    }

    /// Overview of the whole rotation, in question order.
    pub fn statuses(&self) -> Vec<QuestionStatus> {
        QUESTIONS
            .iter()
            .copied()
            .enumerate()
            .map(|(index, question)| QuestionStatus {
                index,
                question,
                answered: self.prefs.answered(index),
                answer: self.prefs.answer_text(index),
                answered_on: self.prefs.answer_date(index),
            })
            .collect()
    }
}
