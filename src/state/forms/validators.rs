//! Field format rules for Indian trade documents

use once_cell::sync::Lazy;
use regex::Regex;

static GSTIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][0-9A-Z]Z[0-9A-Z]$").unwrap());
static PAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap());
static PINCODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Format rule attached to a wizard field.
/// Checked only on non-empty values; required-ness is a separate concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Gstin,
    Pan,
    Pincode,
    Phone,
    Email,
}

impl Rule {
    pub fn check(&self, value: &str) -> bool {
        match self {
            Self::Gstin => GSTIN.is_match(value),
            Self::Pan => PAN.is_match(value),
            Self::Pincode => PINCODE.is_match(value),
            // separators tolerated; exactly ten digits must remain
            Self::Phone => value.chars().filter(|c| c.is_ascii_digit()).count() == 10,
            Self::Email => EMAIL.is_match(value),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Gstin => "Enter a valid 15-character GSTIN",
            Self::Pan => "Enter a valid 10-character PAN",
            Self::Pincode => "Pincode must be 6 digits",
            Self::Phone => "Phone must have 10 digits",
            Self::Email => "Enter a valid email address",
        }
    }
}
