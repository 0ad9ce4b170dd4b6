use super::theme::Calm;
use affirm_core::{Affirmation, JournalEntry, Notification};
use affirm_core::questions::QuestionStatus;
use termimad::MadSkin;

pub struct Renderer {
    skin: MadSkin,
    use_color: bool,
}

impl Renderer {
    pub fn new(use_color: bool) -> Self {
        Self {
            skin: Calm::default_calm_skin(),
            use_color,
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// The affirmation card. The author/share line only appears when the
    /// fetch succeeded and the author survived the unknown-author rule.
    pub fn print_affirmation(&self, affirmation: &Affirmation) {
        let mut md = format!("# AFFIRMATION\n> {}\n", affirmation.text);
        if affirmation.can_share && !affirmation.author.is_empty() {
            md.push_str(&format!("*by: {}*\n", affirmation.author));
        }
        self.print_md(&md);
    }

    pub fn print_question(&self, question: &str, locked: bool) {
        let mut md = format!("# TODAY'S QUESTION\n{question}\n");
        if locked {
            md.push_str("*Answered for today. Come back tomorrow.*\n");
        } else {
            md.push_str("*Answer with `affirm answer`.*\n");
        }
        self.print_md(&md);
    }

    pub fn print_journal_entry(&self, index: Option<usize>, entry: &JournalEntry) {
        let heading = match index {
            Some(i) => format!("## [{i}] {}", entry.date_time),
            None => format!("## {}", entry.date_time),
        };
        self.print_md(&format!("{heading}\n{}\n", entry.text));
    }

    pub fn print_question_status(&self, status: &QuestionStatus) {
        let day = status.index + 1;
        let mut md = format!("## Day {day} — {}\n", status.question);
        match (&status.answer, &status.answered_on) {
            (Some(answer), Some(date)) => {
                md.push_str(&format!("{answer}\n*{date}*\n"));
            }
            (Some(answer), None) => {
                md.push_str(&format!("{answer}\n"));
            }
            _ => md.push_str("*Not answered yet.*\n"),
        }
        self.print_md(&md);
    }

    pub fn print_notification(&self, notification: &Notification) {
        let md = format!(
            "# {}\n{}\n",
            notification.title, notification.expanded
        );
        self.print_md(&md);
    }
}
