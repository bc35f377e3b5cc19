//! Form field value objects

/// Represents a single text form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
        }
    }

    /// Get the current text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Replace the field value
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_starts_empty() {
        let field = FormField::text("name", "Name");
        assert_eq!(field.name, "name");
        assert_eq!(field.label, "Name");
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_push_char_appends() {
        let mut field = FormField::text("name", "Name");
        field.push_char('A');
        field.push_char('d');
        field.push_char('a');
        assert_eq!(field.as_text(), "Ada");
    }

    #[test]
    fn test_pop_char_removes_last() {
        let mut field = FormField::text("name", "Name");
        field.set_text("Ada".to_string());
        field.pop_char();
        assert_eq!(field.as_text(), "Ad");
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut field = FormField::text("name", "Name");
        field.pop_char(); // Should not panic
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_set_text_replaces_value() {
        let mut field = FormField::text("email", "Email");
        field.set_text("ada@x.com".to_string());
        assert_eq!(field.as_text(), "ada@x.com");
        field.set_text("grace@y.org".to_string());
        assert_eq!(field.as_text(), "grace@y.org");
    }
}
