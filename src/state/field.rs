//! Form field value objects

use super::Field;

/// A single text input together with the field it edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub field: Field,
    pub value: String,
}

impl FormField {
    /// Create an empty field
    pub fn new(field: Field) -> Self {
        Self {
            field,
            value: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.field.label()
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

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

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Value to render, falling back to the placeholder when empty
    pub fn display_value(&self) -> &str {
        if self.value.is_empty() {
            self.field.placeholder()
        } else {
            &self.value
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let field = FormField::new(Field::Email);
        assert!(field.is_empty());
        assert_eq!(field.label(), "Email Address");
    }

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::new(Field::Name);
        field.push_char('A');
        field.push_char('d');
        field.push_char('a');
        assert_eq!(field.as_text(), "Ada");
        field.pop_char();
        assert_eq!(field.as_text(), "Ad");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = FormField::new(Field::Phone);
        field.pop_char();
        assert!(field.is_empty());
    }

    #[test]
    fn test_display_value_uses_placeholder() {
        let mut field = FormField::new(Field::Name);
        assert_eq!(field.display_value(), "e.g. Stephen King");
        field.set_text("Ada".to_string());
        assert_eq!(field.display_value(), "Ada");
        field.clear();
        assert_eq!(field.display_value(), "e.g. Stephen King");
    }
}
