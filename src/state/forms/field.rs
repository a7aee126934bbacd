//! Wizard field configuration

use super::validators::Rule;

/// Input behaviour of a wizard field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Digits only (phone, pincode)
    Digits,
    /// Single digit 1-3
    Priority,
}

/// Static configuration for one field of a wizard step
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field path; dotted for nested records ("registered_address.pincode")
    pub path: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Format rule, checked only on non-empty values
    pub rule: Option<Rule>,
    pub multiline: bool,
}

impl FieldSpec {
    pub fn text(path: &'static str, label: &'static str, required: bool) -> Self {
        Self {
            path,
            label,
            kind: FieldKind::Text,
            required,
            rule: None,
            multiline: false,
        }
    }

    pub fn multiline(path: &'static str, label: &'static str, required: bool) -> Self {
        Self {
            path,
            label,
            kind: FieldKind::Text,
            required,
            rule: None,
            multiline: true,
        }
    }

    pub fn digits(path: &'static str, label: &'static str, required: bool, rule: Rule) -> Self {
        Self {
            path,
            label,
            kind: FieldKind::Digits,
            required,
            rule: Some(rule),
            multiline: false,
        }
    }

    pub fn priority(path: &'static str, label: &'static str) -> Self {
        Self {
            path,
            label,
            kind: FieldKind::Priority,
            required: false,
            rule: None,
            multiline: false,
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Filter a typed character according to the field kind.
    /// Returns None when the character must be dropped.
    pub fn accept_char(&self, c: char) -> Option<char> {
        match self.kind {
            FieldKind::Text => Some(c),
            FieldKind::Digits => c.is_ascii_digit().then_some(c),
            FieldKind::Priority => matches!(c, '1'..='3').then_some(c),
        }
    }
}
