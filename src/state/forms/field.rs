//! Form field value objects

use serde_yaml_ng::Value;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text; empty means unset
    Text(String),
    /// Numeric input buffer; parsed at snapshot time
    Number(String),
    /// Tri-state toggle: unset / true / false
    Toggle(Option<bool>),
    /// Multiline list entry; one sequence element per line
    Lines(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its YAML key, label, and value
#[derive(Debug, Clone)]
pub struct FormField {
    /// YAML key emitted into the snapshot
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline: false,
        }
    }

    /// Create a new text field with initial value
    pub fn text_with_value(name: &str, label: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(value.to_string()),
            is_multiline: false,
        }
    }

    /// Create a new number field
    pub fn number(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Number(String::new()),
            is_multiline: false,
        }
    }

    /// Create a new number field with initial value
    pub fn number_with_value(name: &str, label: &str, value: i64) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Number(value.to_string()),
            is_multiline: false,
        }
    }

    /// Create a new toggle field (starts unset)
    pub fn toggle(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Toggle(None),
            is_multiline: false,
        }
    }

    /// Create a new multiline list field
    pub fn lines(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Lines(Vec::new()),
            is_multiline: true,
        }
    }

    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Number(s) => s,
            _ => "",
        }
    }

    pub fn is_toggle(&self) -> bool {
        matches!(self.value, FieldValue::Toggle(_))
    }

    /// Cycle a toggle: unset -> true -> false -> unset. No-op for other kinds.
    pub fn cycle_toggle(&mut self) {
        if let FieldValue::Toggle(state) = &mut self.value {
            *state = match state {
                None => Some(true),
                Some(true) => Some(false),
                Some(false) => None,
            };
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Number(s) => {
                if c.is_ascii_digit() || c == '.' || c == '-' {
                    s.push(c);
                }
            }
            FieldValue::Toggle(_) => {
                // Toggles cycle with Space, they don't take text
            }
            FieldValue::Lines(lines) => {
                if lines.is_empty() {
                    lines.push(String::new());
                }
                if let Some(last) = lines.last_mut() {
                    last.push(c);
                }
            }
        }
    }

    /// Start a new entry in a multiline list field
    pub fn push_line(&mut self) {
        if let FieldValue::Lines(lines) = &mut self.value {
            if lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(String::new());
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Number(s) => {
                s.pop();
            }
            FieldValue::Toggle(_) => {}
            FieldValue::Lines(lines) => {
                if let Some(last) = lines.last_mut() {
                    if last.pop().is_none() {
                        lines.pop();
                    }
                }
            }
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Number(s) => s.clear(),
            FieldValue::Toggle(state) => *state = None,
            FieldValue::Lines(lines) => lines.clear(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Number(s) => s.clone(),
            FieldValue::Toggle(None) => String::new(),
            FieldValue::Toggle(Some(true)) => "true".to_string(),
            FieldValue::Toggle(Some(false)) => "false".to_string(),
            FieldValue::Lines(lines) => lines.join("\n"),
        }
    }

    /// Convert the field to its YAML snapshot value.
    ///
    /// Unset values become null so the pruning pass drops them. Number
    /// buffers parse as i64 first so whole numbers serialize without a
    /// trailing `.0`; an unparsable buffer counts as unset.
    pub fn to_yaml(&self) -> Value {
        match &self.value {
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Number(s) => {
                if let Ok(i) = s.parse::<i64>() {
                    Value::Number(i.into())
                } else if let Ok(f) = s.parse::<f64>() {
                    Value::Number(f.into())
                } else {
                    Value::Null
                }
            }
            FieldValue::Toggle(None) => Value::Null,
            FieldValue::Toggle(Some(b)) => Value::Bool(*b),
            FieldValue::Lines(lines) => {
                Value::Sequence(lines.iter().map(|l| Value::String(l.clone())).collect())
            }
        }
    }
}
