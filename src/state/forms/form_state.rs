//! Settings form state and snapshot serialization

use super::field::FormField;
use serde::Serialize;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Identifies one of the settings form's text fields
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Name,
    Email,
}

#[allow(dead_code)]
impl SettingsField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
        }
    }
}

/// Live field values as shown in the onChange panel
#[derive(Debug, Serialize)]
pub struct ChangeSnapshot<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Last-submitted field values as shown in the onSubmit panel
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSnapshot<'a> {
    pub submitted_name: &'a str,
    pub submitted_email: &'a str,
}

/// Settings form: two text fields plus a snapshot of the last submit.
///
/// Submitted values only change through `submit`, which copies both
/// current values in one step.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    pub name: FormField,
    pub email: FormField,
    submitted_name: String,
    submitted_email: String,
    pub active_field_index: usize,
}

impl SettingsForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name"),
            email: FormField::text("email", "Email"),
            submitted_name: String::new(),
            submitted_email: String::new(),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == 2
    }

    /// Replace the value of the named field; other fields are untouched
    #[allow(dead_code)]
    pub fn set_field(&mut self, field: SettingsField, value: String) {
        tracing::trace!(field = field.as_str(), "field changed");
        match field {
            SettingsField::Name => self.name.set_text(value),
            SettingsField::Email => self.email.set_text(value),
        }
    }

    /// Snapshot both current values into the submitted values
    pub fn submit(&mut self) {
        self.submitted_name = self.name.as_text().to_string();
        self.submitted_email = self.email.as_text().to_string();
        tracing::debug!(
            name = %self.submitted_name,
            email = %self.submitted_email,
            "settings submitted"
        );
    }

    pub fn submitted_name(&self) -> &str {
        &self.submitted_name
    }

    pub fn submitted_email(&self) -> &str {
        &self.submitted_email
    }

    /// Current values for the onChange panel
    pub fn change_snapshot(&self) -> ChangeSnapshot<'_> {
        ChangeSnapshot {
            name: self.name.as_text(),
            email: self.email.as_text(),
        }
    }

    /// Last-submitted values for the onSubmit panel
    pub fn submit_snapshot(&self) -> SubmitSnapshot<'_> {
        SubmitSnapshot {
            submitted_name: self.submitted_name(),
            submitted_email: self.submitted_email(),
        }
    }

    /// Pretty-printed JSON of the current values
    pub fn change_json(&self) -> String {
        serde_json::to_string_pretty(&self.change_snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Pretty-printed JSON of the last-submitted values
    pub fn submit_json(&self) -> String {
        serde_json::to_string_pretty(&self.submit_snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SettingsForm {
    fn field_count(&self) -> usize {
        3 // name, email, submit button row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.name,
            // For submit row (index 2), return email as dummy (won't be used for text input)
            _ => &mut self.email,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            // Index 2 is the submit row, no FormField for it
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_into(form: &mut SettingsForm, text: &str) {
        for c in text.chars() {
            form.get_active_field_mut().push_char(c);
        }
    }

    mod settings_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = SettingsForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.name.as_text(), "");
            assert_eq!(form.email.as_text(), "");
            assert_eq!(form.submitted_name(), "");
            assert_eq!(form.submitted_email(), "");
        }

        #[test]
        fn test_default_equals_new() {
            let new = SettingsForm::new();
            let default = SettingsForm::default();
            assert_eq!(new.active_field_index, default.active_field_index);
            assert_eq!(new.name.as_text(), default.name.as_text());
        }

        #[test]
        fn test_field_count() {
            let form = SettingsForm::new();
            assert_eq!(form.field_count(), 3);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = SettingsForm::new();
            for _ in 0..3 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0); // Wrapped back
        }

        #[test]
        fn test_prev_field_cycles() {
            let mut form = SettingsForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, 2); // Wrapped to submit row
        }

        #[test]
        fn test_is_submit_row_active() {
            let mut form = SettingsForm::new();
            assert!(!form.is_submit_row_active());
            form.set_active_field(2);
            assert!(form.is_submit_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = SettingsForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 2);
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = SettingsForm::new();
            assert_eq!(form.get_field(0).unwrap().name, "name");
            assert_eq!(form.get_field(1).unwrap().name, "email");
            assert!(form.get_field(2).is_none()); // submit row
            assert!(form.get_field(3).is_none());
        }

        #[test]
        fn test_set_field_updates_only_named_field() {
            let mut form = SettingsForm::new();
            form.set_field(SettingsField::Name, "Ada".to_string());
            assert_eq!(form.name.as_text(), "Ada");
            assert_eq!(form.email.as_text(), "");

            form.set_field(SettingsField::Email, "ada@x.com".to_string());
            assert_eq!(form.name.as_text(), "Ada");
            assert_eq!(form.email.as_text(), "ada@x.com");
        }

        #[test]
        fn test_set_field_accepts_any_string() {
            let mut form = SettingsForm::new();
            form.set_field(SettingsField::Email, "not an email at all".to_string());
            assert_eq!(form.email.as_text(), "not an email at all");
        }

        #[test]
        fn test_settings_field_as_str() {
            assert_eq!(SettingsField::Name.as_str(), "name");
            assert_eq!(SettingsField::Email.as_str(), "email");
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_submit_before_any_change_yields_empty_values() {
            let mut form = SettingsForm::new();
            form.submit();
            assert_eq!(form.submitted_name(), "");
            assert_eq!(form.submitted_email(), "");
        }

        #[test]
        fn test_submit_copies_both_fields() {
            let mut form = SettingsForm::new();
            form.set_field(SettingsField::Name, "Ada".to_string());
            form.set_field(SettingsField::Email, "ada@x.com".to_string());
            form.submit();
            assert_eq!(form.submitted_name(), "Ada");
            assert_eq!(form.submitted_email(), "ada@x.com");
        }

        #[test]
        fn test_changes_after_submit_do_not_alter_submitted_values() {
            let mut form = SettingsForm::new();
            form.set_field(SettingsField::Name, "Ada".to_string());
            form.submit();
            form.set_field(SettingsField::Name, "Grace".to_string());
            assert_eq!(form.name.as_text(), "Grace");
            assert_eq!(form.submitted_name(), "Ada");
        }

        #[test]
        fn test_second_submit_replaces_snapshot() {
            let mut form = SettingsForm::new();
            form.set_field(SettingsField::Name, "Ada".to_string());
            form.submit();
            form.set_field(SettingsField::Name, "Grace".to_string());
            form.submit();
            assert_eq!(form.submitted_name(), "Grace");
        }

        #[test]
        fn test_submit_via_typed_input() {
            let mut form = SettingsForm::new();
            type_into(&mut form, "Ada");
            form.next_field();
            type_into(&mut form, "ada@x.com");
            form.submit();
            assert_eq!(form.submitted_name(), "Ada");
            assert_eq!(form.submitted_email(), "ada@x.com");
        }
    }

    mod snapshots {
        use super::*;
        use pretty_assertions::assert_eq;
        use serde_json::Value;

        fn parse(json: &str) -> Value {
            serde_json::from_str(json).unwrap()
        }

        #[test]
        fn test_change_json_tracks_latest_values() {
            let mut form = SettingsForm::new();
            form.set_field(SettingsField::Name, "Ada".to_string());
            form.set_field(SettingsField::Email, "ada@x.com".to_string());

            let value = parse(&form.change_json());
            assert_eq!(value["name"], "Ada");
            assert_eq!(value["email"], "ada@x.com");
        }

        #[test]
        fn test_submit_json_uses_camel_case_keys() {
            let mut form = SettingsForm::new();
            form.set_field(SettingsField::Name, "Ada".to_string());
            form.submit();

            let json = form.submit_json();
            assert!(json.contains("\"submittedName\""));
            assert!(json.contains("\"submittedEmail\""));
        }

        #[test]
        fn test_change_json_is_pretty_printed() {
            let form = SettingsForm::new();
            let json = form.change_json();
            assert!(json.contains('\n'));
            assert!(json.contains("  \"name\""));
        }

        #[test]
        fn test_capture_values_scenario() {
            let mut form = SettingsForm::new();
            form.set_field(SettingsField::Name, "Ada".to_string());
            form.set_field(SettingsField::Email, "ada@x.com".to_string());

            let change = parse(&form.change_json());
            assert_eq!(change["name"], "Ada");
            assert_eq!(change["email"], "ada@x.com");

            form.submit();
            let submitted = parse(&form.submit_json());
            assert_eq!(submitted["submittedName"], "Ada");
            assert_eq!(submitted["submittedEmail"], "ada@x.com");

            // Editing after submit changes the live panel only
            form.set_field(SettingsField::Name, "Grace".to_string());
            let change = parse(&form.change_json());
            assert_eq!(change["name"], "Grace");
            assert_eq!(change["email"], "ada@x.com");

            let submitted = parse(&form.submit_json());
            assert_eq!(submitted["submittedName"], "Ada");
            assert_eq!(submitted["submittedEmail"], "ada@x.com");
        }
    }
}
