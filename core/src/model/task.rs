use chrono::NaiveDate;

use crate::validate::coerce_integer;

/// Display-only view of a raw status code.
///
/// Storage is deliberately lenient: a task keeps whatever status string it
/// was created with, and only the four normalized codes {P, E, T, C} have a
/// defined rendering. Everything else shows up as an explicit ERROR marker
/// instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    InProgress,
    Done,
    Cancelled,
    Unrecognized,
}

impl Status {
    pub fn from_code(code: &str) -> Self {
        match code.to_uppercase().as_str() {
            "P" => Status::Pending,
            "E" => Status::InProgress,
            "T" => Status::Done,
            "C" => Status::Cancelled,
            _ => Status::Unrecognized,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In progress",
            Status::Done => "Done",
            Status::Cancelled => "Cancelled",
            Status::Unrecognized => "ERROR",
        }
    }
}

/// One editable field of an edit request.
///
/// Empty input keeps the stored value. Whitespace-only input blanks the
/// field on purpose, and the literal whitespace typed is what gets stored,
/// so "leave unchanged" and "set to blank" stay distinct states instead of
/// being inferred back from a trimmed string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Keep,
    Clear(String),
    Set(String),
}

impl FieldEdit {
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            FieldEdit::Keep
        } else if raw.trim().is_empty() {
            FieldEdit::Clear(raw.to_string())
        } else {
            FieldEdit::Set(raw.to_string())
        }
    }

    fn apply(self, field: &mut String) {
        match self {
            FieldEdit::Keep => {}
            FieldEdit::Clear(blank) => *field = blank,
            FieldEdit::Set(value) => *field = value,
        }
    }
}

/// A to-do item. Title, description, status, difficulty and expiration are
/// stored exactly as entered; the date stamps are the only structured
/// fields. `creation` never changes after construction.
#[derive(Debug, Clone)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub status: String,
    pub difficulty: String,
    pub expiration: String,
    creation: NaiveDate,
    last_edition: NaiveDate,
}

impl Task {
    /// Builds a task with `creation = last_edition = creation`. Status and
    /// difficulty are not validated here; the display mappers surface
    /// unrecognized values later.
    pub fn new(
        title: String,
        description: String,
        status: String,
        difficulty: String,
        expiration: String,
        creation: NaiveDate,
    ) -> Self {
        Self {
            title,
            description,
            status,
            difficulty,
            expiration,
            creation,
            last_edition: creation,
        }
    }

    pub fn creation(&self) -> NaiveDate {
        self.creation
    }

    pub fn last_edition(&self) -> NaiveDate {
        self.last_edition
    }

    pub fn status_label(&self) -> &'static str {
        Status::from_code(&self.status).label()
    }

    /// Three-glyph severity indicator for difficulties 1..=3. The stored
    /// value is coerced the same way numeric input is, so " 2 " and "2.0"
    /// both render two stars.
    pub fn difficulty_stars(&self) -> &'static str {
        match coerce_integer(&self.difficulty) {
            Some(1) => "★☆☆",
            Some(2) => "★★☆",
            Some(3) => "★★★",
            _ => "ERROR",
        }
    }

    /// Applies the edit and stamps `last_edition = today`, even when every
    /// field is `Keep`. The new expiration is not re-validated here; callers
    /// check the date format before invoking.
    pub fn edit(
        &mut self,
        description: FieldEdit,
        status: FieldEdit,
        difficulty: FieldEdit,
        expiration: FieldEdit,
        today: NaiveDate,
    ) {
        description.apply(&mut self.description);
        status.apply(&mut self.status);
        difficulty.apply(&mut self.difficulty);
        expiration.apply(&mut self.expiration);
        self.last_edition = today;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Task {
        Task::new(
            "Buy groceries".to_string(),
            "Milk and bread".to_string(),
            "p".to_string(),
            "2".to_string(),
            "15/03/2024".to_string(),
            date(2024, 1, 10),
        )
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::from_code("P").label(), "Pending");
        assert_eq!(Status::from_code("e").label(), "In progress");
        assert_eq!(Status::from_code("t").label(), "Done");
        assert_eq!(Status::from_code("C").label(), "Cancelled");
        assert_eq!(Status::from_code("X").label(), "ERROR");
        assert_eq!(Status::from_code("Pending").label(), "ERROR");
        assert_eq!(Status::from_code("").label(), "ERROR");
    }

    #[test]
    fn test_difficulty_stars() {
        let mut task = sample();
        task.difficulty = "1".to_string();
        assert_eq!(task.difficulty_stars(), "★☆☆");
        task.difficulty = "2".to_string();
        assert_eq!(task.difficulty_stars(), "★★☆");
        task.difficulty = " 3 ".to_string();
        assert_eq!(task.difficulty_stars(), "★★★");
        task.difficulty = "4".to_string();
        assert_eq!(task.difficulty_stars(), "ERROR");
        task.difficulty = "easy".to_string();
        assert_eq!(task.difficulty_stars(), "ERROR");
    }

    #[test]
    fn test_new_stamps_both_dates() {
        let task = sample();
        assert_eq!(task.creation(), date(2024, 1, 10));
        assert_eq!(task.last_edition(), date(2024, 1, 10));
    }

    #[test]
    fn test_field_edit_from_raw() {
        assert_eq!(FieldEdit::from_raw(""), FieldEdit::Keep);
        assert_eq!(FieldEdit::from_raw(" "), FieldEdit::Clear(" ".to_string()));
        assert_eq!(FieldEdit::from_raw("  "), FieldEdit::Clear("  ".to_string()));
        assert_eq!(FieldEdit::from_raw("x"), FieldEdit::Set("x".to_string()));
    }

    #[test]
    fn test_edit_with_all_keep_only_stamps_last_edition() {
        let mut task = sample();
        task.edit(
            FieldEdit::Keep,
            FieldEdit::Keep,
            FieldEdit::Keep,
            FieldEdit::Keep,
            date(2024, 2, 1),
        );
        assert_eq!(task.description, "Milk and bread");
        assert_eq!(task.status, "p");
        assert_eq!(task.difficulty, "2");
        assert_eq!(task.expiration, "15/03/2024");
        assert_eq!(task.creation(), date(2024, 1, 10));
        assert_eq!(task.last_edition(), date(2024, 2, 1));
    }

    #[test]
    fn test_edit_clear_sets_literal_whitespace() {
        let mut task = sample();
        task.edit(
            FieldEdit::Keep,
            FieldEdit::Keep,
            FieldEdit::Keep,
            FieldEdit::from_raw(" "),
            date(2024, 2, 1),
        );
        assert_eq!(task.expiration, " ");

        // Distinct from Keep, which leaves the old value in place.
        let mut other = sample();
        other.edit(
            FieldEdit::Keep,
            FieldEdit::Keep,
            FieldEdit::Keep,
            FieldEdit::Keep,
            date(2024, 2, 1),
        );
        assert_eq!(other.expiration, "15/03/2024");
    }

    #[test]
    fn test_edit_set_replaces_fields() {
        let mut task = sample();
        task.edit(
            FieldEdit::Set("New text".to_string()),
            FieldEdit::Set("T".to_string()),
            FieldEdit::Set("3".to_string()),
            FieldEdit::Set("01/04/2024".to_string()),
            date(2024, 2, 2),
        );
        assert_eq!(task.description, "New text");
        assert_eq!(task.status, "T");
        assert_eq!(task.difficulty, "3");
        assert_eq!(task.expiration, "01/04/2024");
        assert_eq!(task.last_edition(), date(2024, 2, 2));
        assert_eq!(task.title, "Buy groceries");
    }
}
