//! Answer record types for Questa.
//!
//! One `AnswerRecord` is appended per answered question. Records are written
//! once and never read back by this system; downstream analysis consumes the
//! logs out of band.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One answered question, as appended to a category's answer log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub scale_title: String,
    pub question_text: String,
    pub selected_option_label: String,
    pub answered_at: DateTime<Utc>,
}

impl AnswerRecord {
    /// Build a record stamped with the current time.
    pub fn new(
        scale_title: impl Into<String>,
        question_text: impl Into<String>,
        selected_option_label: impl Into<String>,
    ) -> Self {
        Self {
            scale_title: scale_title.into(),
            question_text: question_text.into(),
            selected_option_label: selected_option_label.into(),
            answered_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_record_serialize_has_all_fields() {
        let record = AnswerRecord::new("Adjustment", "I stay calm under pressure", "Agree");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"scale_title\":\"Adjustment\""));
        assert!(json.contains("\"question_text\":\"I stay calm under pressure\""));
        assert!(json.contains("\"selected_option_label\":\"Agree\""));
        assert!(json.contains("\"answered_at\":"));
    }

    #[test]
    fn test_answer_record_survives_separator_text() {
        // Field values containing " - " must stay unambiguous, which is the
        // reason records are structured rather than joined plain text.
        let record = AnswerRecord::new("A - B", "Q - with dash", "Yes - mostly");
        let json = serde_json::to_string(&record).unwrap();
        let parsed: AnswerRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.scale_title, "A - B");
        assert_eq!(parsed.question_text, "Q - with dash");
        assert_eq!(parsed.selected_option_label, "Yes - mostly");
    }
}
