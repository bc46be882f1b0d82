//! Signup form state for the launch screen.

/// Which input currently receives keystrokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Name,
    Email,
}

/// The invite signup form: two text fields, inline validation, and a
/// one-way submitted flag. Editing stops once the form is submitted.
#[derive(Debug, Default)]
pub struct SignupForm {
    name: String,
    email: String,
    focus: FormField,
    error: Option<String>,
    submitted: bool,
}

impl SignupForm {
    /// Construct an empty form focused on the name field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current name buffer.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current email buffer.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Field currently receiving keystrokes.
    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Inline validation message, if the last submit failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a submit has been accepted.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Move focus to the other field.
    pub fn cycle_focus(&mut self) {
        if self.submitted {
            return;
        }
        self.focus = match self.focus {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Name,
        };
    }

    /// Append a printable character to the focused field.
    pub fn insert(&mut self, c: char) {
        if self.submitted || c.is_control() {
            return;
        }
        self.error = None;
        match self.focus {
            FormField::Name => self.name.push(c),
            FormField::Email => self.email.push(c),
        }
    }

    /// Delete the last character of the focused field.
    pub fn delete(&mut self) {
        if self.submitted {
            return;
        }
        self.error = None;
        match self.focus {
            FormField::Name => self.name.pop(),
            FormField::Email => self.email.pop(),
        };
    }

    /// Validate the current buffers and return the trimmed entry.
    pub fn entry(&self) -> Result<(String, String), String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("enter your full name".to_string());
        }
        let email = self.email.trim();
        if !valid_email(email) {
            return Err("enter a valid email address".to_string());
        }
        Ok((name.to_string(), email.to_string()))
    }

    /// Record an accepted submit; further edits are ignored.
    pub fn mark_submitted(&mut self) {
        self.error = None;
        self.submitted = true;
    }

    /// Record a rejected submit.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}

/// Minimal shape check: something before the `@`, a dot in the domain.
fn valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((user, domain)) => !user.is_empty() && domain.contains('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(valid_email("a@b.c"));
        assert!(valid_email("name@company.com"));
        assert!(!valid_email(""));
        assert!(!valid_email("plainaddress"));
        assert!(!valid_email("@company.com"));
        assert!(!valid_email("name@nodot"));
    }

    #[test]
    fn test_focus_cycles_between_fields() {
        let mut form = SignupForm::new();
        assert_eq!(form.focus(), FormField::Name);
        form.cycle_focus();
        assert_eq!(form.focus(), FormField::Email);
        form.cycle_focus();
        assert_eq!(form.focus(), FormField::Name);
    }

    #[test]
    fn test_editing_targets_focused_field() {
        let mut form = SignupForm::new();
        form.insert('J');
        form.insert('o');
        form.cycle_focus();
        form.insert('j');
        form.insert('@');
        form.delete();
        assert_eq!(form.name(), "Jo");
        assert_eq!(form.email(), "j");
    }

    #[test]
    fn test_control_characters_ignored() {
        let mut form = SignupForm::new();
        form.insert('\n');
        form.insert('\t');
        assert_eq!(form.name(), "");
    }

    #[test]
    fn test_entry_requires_name_and_valid_email() {
        let mut form = SignupForm::new();
        assert!(form.entry().is_err());

        for c in "Jo".chars() {
            form.insert(c);
        }
        assert!(form.entry().is_err());

        form.cycle_focus();
        for c in "jo@star.dev".chars() {
            form.insert(c);
        }
        assert_eq!(
            form.entry(),
            Ok(("Jo".to_string(), "jo@star.dev".to_string()))
        );
    }

    #[test]
    fn test_entry_trims_whitespace() {
        let mut form = SignupForm::new();
        for c in "  Jo  ".chars() {
            form.insert(c);
        }
        form.cycle_focus();
        for c in " jo@star.dev ".chars() {
            form.insert(c);
        }
        assert_eq!(
            form.entry(),
            Ok(("Jo".to_string(), "jo@star.dev".to_string()))
        );
    }

    #[test]
    fn test_submitted_form_ignores_edits() {
        let mut form = SignupForm::new();
        form.insert('J');
        form.mark_submitted();
        form.insert('x');
        form.delete();
        form.cycle_focus();
        assert_eq!(form.name(), "J");
        assert_eq!(form.focus(), FormField::Name);
        assert!(form.is_submitted());
    }

    #[test]
    fn test_typing_clears_error() {
        let mut form = SignupForm::new();
        form.set_error("enter your full name");
        assert!(form.error().is_some());
        form.insert('J');
        assert!(form.error().is_none());
    }
}
