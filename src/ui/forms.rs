use anyhow::{anyhow, bail, Result};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::Student;

/// Shortest accepted student name, counted in characters.
pub(crate) const MIN_NAME_LENGTH: usize = 2;
/// Longest accepted name. The report's name column is one wider.
pub(crate) const MAX_NAME_LENGTH: usize = 49;
pub(crate) const MAX_GPA: f64 = 10.0;
pub(crate) const MIN_GPA: f64 = 0.0;

/// Internal representation of the student record form.
#[derive(Default, Clone)]
pub(crate) struct StudentForm {
    pub(crate) name: String,
    pub(crate) age: String,
    pub(crate) gpa: String,
    pub(crate) active: StudentField,
    pub(crate) error: Option<String>,
}

/// Fields available within the student form.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub(crate) enum StudentField {
    #[default]
    Name,
    Age,
    Gpa,
}

impl StudentField {
    pub(crate) fn label(self) -> &'static str {
        match self {
            StudentField::Name => "Name",
            StudentField::Age => "Age",
            StudentField::Gpa => "GPA",
        }
    }
}

impl StudentForm {
    /// Populate the form from an existing record when editing.
    pub(crate) fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            age: student.age.to_string(),
            gpa: student.gpa.to_string(),
            active: StudentField::Name,
            error: None,
        }
    }

    /// Cycle focus across the three fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            StudentField::Name => StudentField::Age,
            StudentField::Age => StudentField::Gpa,
            StudentField::Gpa => StudentField::Name,
        };
    }

    /// Append a character to the active field. Characters that can never be
    /// valid for the field are refused outright.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        match self.active {
            StudentField::Name => {
                let has_room = self.name.chars().count() < MAX_NAME_LENGTH;
                if has_room && (ch.is_ascii_alphabetic() || ch == ' ') {
                    self.name.push(ch);
                    true
                } else {
                    false
                }
            }
            StudentField::Age => {
                if ch.is_ascii_digit() {
                    self.age.push(ch);
                    true
                } else {
                    false
                }
            }
            StudentField::Gpa => {
                if ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-') {
                    self.gpa.push(ch);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            StudentField::Name => {
                self.name.pop();
            }
            StudentField::Age => {
                self.age.pop();
            }
            StudentField::Gpa => {
                self.gpa.pop();
            }
        }
    }

    /// Validate every field and build the record. The first failing field
    /// takes focus so the user lands where the fix is needed.
    pub(crate) fn parse_inputs(&mut self) -> Result<Student> {
        let name = validate_name(&self.name).inspect_err(|_| self.active = StudentField::Name)?;
        let age = parse_age(&self.age).inspect_err(|_| self.active = StudentField::Age)?;
        let gpa = parse_gpa(&self.gpa).inspect_err(|_| self.active = StudentField::Gpa)?;
        Ok(Student { name, age, gpa })
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field: StudentField) -> Line<'static> {
        let value = self.value(field);
        let is_active = self.active == field;

        let display = if value.is_empty() {
            "<required>".to_string()
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field.label())),
            Span::styled(display, style),
        ])
    }

    /// Return the character count for the requested field.
    pub(crate) fn value_len(&self, field: StudentField) -> usize {
        self.value(field).chars().count()
    }

    fn value(&self, field: StudentField) -> &str {
        match field {
            StudentField::Name => &self.name,
            StudentField::Age => &self.age,
            StudentField::Gpa => &self.gpa,
        }
    }
}

/// Names are letters separated by single spaces, between
/// [`MIN_NAME_LENGTH`] and [`MAX_NAME_LENGTH`] characters long. Trailing spaces
/// are trimmed; a leading space is an error.
pub(crate) fn validate_name(raw: &str) -> Result<String> {
    let name = raw.trim_end();
    if name.is_empty() {
        bail!("Please enter at least one character.");
    }
    if name.starts_with(' ') || name.contains("  ") {
        bail!("Name must not start with a space or repeat spaces.");
    }
    if !name.chars().all(|ch| ch.is_ascii_alphabetic() || ch == ' ') {
        bail!("Name may only contain letters and spaces.");
    }
    if name.chars().count() < MIN_NAME_LENGTH {
        bail!("Name must have at least {MIN_NAME_LENGTH} characters.");
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        bail!("Name must have at most {MAX_NAME_LENGTH} characters.");
    }
    Ok(name.to_string())
}

pub(crate) fn parse_age(raw: &str) -> Result<u32> {
    parse_count(raw).and_then(|age| {
        u32::try_from(age).map_err(|_| anyhow!("Age is too large."))
    })
}

/// Accepts `(sign)(digits)(.)(digits)(e(sign)digits)` with at least one digit
/// before any exponent, then checks the GPA range.
pub(crate) fn parse_gpa(raw: &str) -> Result<f64> {
    let text = raw.trim();
    if !is_real_number(text) {
        bail!("Incorrect format of floating-point number. Example: 3.2; 5e-1");
    }
    let gpa: f64 = text
        .parse()
        .map_err(|_| anyhow!("Incorrect format of floating-point number."))?;
    if !(MIN_GPA..=MAX_GPA).contains(&gpa) {
        bail!("Invalid GPA. Enter a value from {MIN_GPA} to {MAX_GPA}.");
    }
    // "-0" parses to negative zero; store the plain zero.
    Ok(if gpa == 0.0 { 0.0 } else { gpa })
}

/// Non-negative whole number typed as digits only.
pub(crate) fn parse_count(raw: &str) -> Result<usize> {
    let text = raw.trim();
    if text.is_empty() {
        bail!("Please enter a number.");
    }
    if !text.chars().all(|ch| ch.is_ascii_digit()) {
        bail!("Invalid! Non-negative integers only.");
    }
    text.parse::<usize>()
        .map_err(|_| anyhow!("Number is too large."))
}

fn is_real_number(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };

    let mut digits = 0;
    let mut dots = 0;
    for ch in mantissa.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    if digits == 0 || dots > 1 {
        return false;
    }

    match exponent {
        None => true,
        Some(exponent) => {
            let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_digit())
        }
    }
}

/// What a one-line prompt is allowed to collect.
#[derive(Copy, Clone, PartialEq, Eq)]
pub(crate) enum PromptKind {
    Digits,
    Text,
}

/// Single-field form used for counts, positions, target names, and file
/// names.
#[derive(Clone)]
pub(crate) struct PromptForm {
    pub(crate) label: &'static str,
    pub(crate) value: String,
    pub(crate) kind: PromptKind,
    pub(crate) error: Option<String>,
}

impl PromptForm {
    pub(crate) fn digits(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            kind: PromptKind::Digits,
            error: None,
        }
    }

    pub(crate) fn text(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            kind: PromptKind::Text,
            error: None,
        }
    }

    pub(crate) fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        let accepted = match self.kind {
            PromptKind::Digits => ch.is_ascii_digit(),
            PromptKind::Text => !ch.is_control(),
        };
        if accepted {
            self.value.push(ch);
        }
        accepted
    }

    pub(crate) fn backspace(&mut self) {
        self.value.pop();
    }

    pub(crate) fn parse_number(&self) -> Result<usize> {
        parse_count(&self.value)
    }

    /// The typed text, required to be non-empty. Surrounding whitespace is
    /// kept for names since matching is exact.
    pub(crate) fn parse_text(&self) -> Result<String> {
        if self.value.trim().is_empty() {
            bail!("Please enter at least one character.");
        }
        Ok(self.value.clone())
    }

    pub(crate) fn build_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::raw(format!("{}: ", self.label)),
            Span::styled(self.value.clone(), Style::default().fg(Color::Yellow)),
        ])
    }

    pub(crate) fn cursor_offset(&self) -> usize {
        self.label.chars().count() + 2 + self.value.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules_match_prompt_guidelines() {
        assert_eq!(validate_name("Anna Le").unwrap(), "Anna Le");
        assert_eq!(validate_name("Bao  ").unwrap(), "Bao");
        assert!(validate_name("").is_err());
        assert!(validate_name("A").is_err());
        assert!(validate_name(" Anna").is_err());
        assert!(validate_name("Anna  Le").is_err());
        assert!(validate_name("Ann4").is_err());
        assert!(validate_name("Anna!").is_err());
        assert!(validate_name(&"A".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(validate_name(&"A".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn name_field_stops_accepting_keys_at_cap() {
        let mut form = StudentForm::default();
        for _ in 0..MAX_NAME_LENGTH {
            assert!(form.push_char('a'));
        }
        assert!(!form.push_char('a'));
        assert!(!form.push_char(' '));
        assert_eq!(form.value_len(StudentField::Name), MAX_NAME_LENGTH);

        form.backspace();
        assert!(form.push_char('b'));
    }

    #[test]
    fn gpa_accepts_signed_decimal_and_exponent_forms() {
        assert_eq!(parse_gpa("3.2").unwrap(), 3.2);
        assert_eq!(parse_gpa("5e-1").unwrap(), 0.5);
        assert_eq!(parse_gpa("+1E1").unwrap(), 10.0);
        assert_eq!(parse_gpa(".5").unwrap(), 0.5);
        assert_eq!(parse_gpa("7.").unwrap(), 7.0);
        assert_eq!(parse_gpa("-0").unwrap().to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn gpa_rejects_bad_format_and_range() {
        for bad in ["", ".", "e3", "1e", "1e+", "1.2.3", "abc", "1-2", "NaN", "inf"] {
            assert!(parse_gpa(bad).is_err(), "{bad} should be rejected");
        }
        let err = parse_gpa("10.5").unwrap_err();
        assert!(err.to_string().contains("Invalid GPA"));
        assert!(parse_gpa("-0.1").is_err());
    }

    #[test]
    fn counts_are_digits_only() {
        assert_eq!(parse_count("12").unwrap(), 12);
        assert_eq!(parse_count(" 3 ").unwrap(), 3);
        assert!(parse_count("-1").is_err());
        assert!(parse_count("1.5").is_err());
        assert!(parse_count("").is_err());
        assert!(parse_age("99999999999").is_err());
    }

    #[test]
    fn student_form_filters_keystrokes_per_field() {
        let mut form = StudentForm::default();
        assert!(form.push_char('A'));
        assert!(!form.push_char('1'));
        form.toggle_field();
        assert!(form.push_char('2'));
        assert!(!form.push_char('x'));
        form.toggle_field();
        assert!(form.push_char('.'));
        form.toggle_field();
        assert!(form.active == StudentField::Name);
        assert_eq!((form.name.as_str(), form.age.as_str(), form.gpa.as_str()), ("A", "2", "."));
    }

    #[test]
    fn parse_inputs_focuses_first_bad_field() {
        let mut form = StudentForm {
            name: "Chi".into(),
            age: "19".into(),
            gpa: "11".into(),
            ..StudentForm::default()
        };
        assert!(form.parse_inputs().is_err());
        assert!(form.active == StudentField::Gpa);

        form.gpa = "2.5".into();
        assert_eq!(form.parse_inputs().unwrap(), Student::new("Chi", 19, 2.5));
    }

    #[test]
    fn editing_form_round_trips_existing_record() {
        let student = Student::new("Bao", 21, 3.9);
        let mut form = StudentForm::from_student(&student);
        assert_eq!(form.parse_inputs().unwrap(), student);
    }

    #[test]
    fn text_prompt_keeps_exact_value() {
        let mut prompt = PromptForm::text("Name");
        assert!(prompt.parse_text().is_err());
        for ch in "Anna".chars() {
            prompt.push_char(ch);
        }
        assert_eq!(prompt.parse_text().unwrap(), "Anna");

        let mut digits = PromptForm::digits("Position");
        assert!(!digits.push_char('a'));
        assert!(digits.push_char('4'));
        assert_eq!(digits.parse_number().unwrap(), 4);
    }
}
