//! Multi-step form engine
//!
//! Drives a bounded sequence of steps, each with independent field
//! validation. The step index only advances when every validator of the
//! current step passes, only regresses via an explicit retreat, and
//! submission is reachable solely from the last step.

use super::field::{FieldKind, FieldSpec};
use super::validators::Rule;
use std::collections::BTreeMap;

/// Immutable configuration for one wizard step
#[derive(Debug, Clone)]
pub struct StepDefinition {
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
}

/// Result of validating a single step
#[derive(Debug, Clone)]
pub struct StepValidation {
    pub valid: bool,
    /// Complete error map for the step; absent path means no error
    pub errors: BTreeMap<String, String>,
}

/// Submission lifecycle of a form session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Editable again; fields preserved for retry
    Failed,
}

/// Outcome of an advance attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Validation failed or a submission is already in flight
    Blocked,
    /// Moved to the next step
    Moved,
    /// Last step validated; submission has started
    Submit,
}

/// Mutable state of one in-progress wizard
#[derive(Debug, Clone)]
pub struct FormSession {
    steps: Vec<StepDefinition>,
    current_step: usize,
    active_field: usize,
    fields: BTreeMap<String, String>,
    errors: BTreeMap<String, String>,
    submission: SubmissionState,
    submit_error: Option<String>,
}

impl FormSession {
    pub fn new(steps: Vec<StepDefinition>) -> Self {
        debug_assert!(!steps.is_empty());
        Self {
            steps,
            current_step: 0,
            active_field: 0,
            fields: BTreeMap::new(),
            errors: BTreeMap::new(),
            submission: SubmissionState::Idle,
            submit_error: None,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn step(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    pub fn current(&self) -> &StepDefinition {
        &self.steps[self.current_step]
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 == self.steps.len()
    }

    pub fn active_field(&self) -> usize {
        self.active_field
    }

    pub fn active_spec(&self) -> &FieldSpec {
        &self.current().fields[self.active_field]
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn value(&self, path: &str) -> &str {
        self.fields.get(path).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, path: &str) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }

    /// Snapshot of all accumulated field values, for record construction
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Write a field value and clear any error recorded for that path.
    /// Sibling paths are untouched.
    pub fn update_field(&mut self, path: &str, value: impl Into<String>) {
        self.fields.insert(path.to_string(), value.into());
        self.errors.remove(path);
    }

    /// Append a typed character to the active field
    pub fn input_char(&mut self, c: char) {
        let spec = self.active_spec().clone();
        let Some(mut ch) = spec.accept_char(c) else {
            return;
        };
        // Tax codes are stored uppercase so format rules match as typed
        if matches!(spec.rule, Some(Rule::Gstin) | Some(Rule::Pan)) {
            ch = ch.to_ascii_uppercase();
        }
        let mut value = self.value(spec.path).to_string();
        if spec.kind == FieldKind::Priority {
            value.clear();
        }
        value.push(ch);
        self.update_field(spec.path, value);
    }

    /// Remove the last character from the active field
    pub fn backspace(&mut self) {
        let path = self.active_spec().path;
        let mut value = self.value(path).to_string();
        value.pop();
        self.update_field(path, value);
    }

    /// Move focus to the next field in the current step (wraps)
    pub fn next_field(&mut self) {
        let count = self.current().fields.len();
        self.active_field = (self.active_field + 1) % count;
    }

    /// Move focus to the previous field in the current step (wraps)
    pub fn prev_field(&mut self) {
        let count = self.current().fields.len();
        if self.active_field == 0 {
            self.active_field = count - 1;
        } else {
            self.active_field -= 1;
        }
    }

    /// Validate one step against the current field values.
    /// Pure: does not mutate fields or the stored error map.
    pub fn validate_step(&self, index: usize) -> StepValidation {
        let mut errors = BTreeMap::new();
        let Some(step) = self.steps.get(index) else {
            return StepValidation {
                valid: false,
                errors,
            };
        };

        for spec in &step.fields {
            let value = self.value(spec.path).trim().to_string();
            if value.is_empty() {
                if spec.required {
                    errors.insert(
                        spec.path.to_string(),
                        format!("{} is required", spec.label),
                    );
                }
                continue;
            }
            if let Some(rule) = spec.rule {
                if !rule.check(&value) {
                    errors.insert(spec.path.to_string(), rule.message().to_string());
                }
            }
        }

        StepValidation {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Validate the current step and move forward.
    ///
    /// Invalid: errors recorded, step unchanged. Valid mid-form: step
    /// advances. Valid on the last step: submission flips to Submitting and
    /// the caller runs the actual submit. Blocked while a submission is in
    /// flight or after success.
    pub fn advance(&mut self) -> Advance {
        if matches!(
            self.submission,
            SubmissionState::Submitting | SubmissionState::Succeeded
        ) {
            return Advance::Blocked;
        }

        let result = self.validate_step(self.current_step);
        if !result.valid {
            self.errors = result.errors;
            return Advance::Blocked;
        }

        self.errors.clear();
        if self.is_last_step() {
            self.submission = SubmissionState::Submitting;
            self.submit_error = None;
            Advance::Submit
        } else {
            self.current_step += 1;
            self.active_field = 0;
            Advance::Moved
        }
    }

    /// Step back without validating
    pub fn retreat(&mut self) {
        if self.current_step > 0 {
            self.current_step -= 1;
            self.active_field = 0;
        }
    }

    /// Record submission success; the session is terminal after this
    pub fn mark_succeeded(&mut self) {
        self.submission = SubmissionState::Succeeded;
        self.submit_error = None;
    }

    /// Record submission failure; fields are preserved and the form is
    /// editable again for a user-initiated retry
    pub fn mark_failed(&mut self, message: impl Into<String>) {
        self.submission = SubmissionState::Failed;
        self.submit_error = Some(message.into());
    }
}

/// Steps for converting a lead into a full business profile
pub fn business_profile_steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition {
            title: "Company",
            fields: vec![
                FieldSpec::text("company_name", "Company Name", true),
                FieldSpec::text("contact_person", "Contact Person", true),
                FieldSpec::digits("phone", "Phone", true, Rule::Phone),
                FieldSpec::text("email", "Email", true).with_rule(Rule::Email),
            ],
        },
        StepDefinition {
            title: "Registration",
            fields: vec![
                FieldSpec::text("gstin", "GSTIN", true).with_rule(Rule::Gstin),
                FieldSpec::text("pan", "PAN", true).with_rule(Rule::Pan),
                FieldSpec::text("secondary_gstin", "Branch GSTIN (optional)", false)
                    .with_rule(Rule::Gstin),
            ],
        },
        StepDefinition {
            title: "Registered Address",
            fields: vec![
                FieldSpec::text("registered_address.street", "Street", true),
                FieldSpec::text("registered_address.city", "City", true),
                FieldSpec::text("registered_address.state", "State", true),
                FieldSpec::digits(
                    "registered_address.pincode",
                    "Pincode",
                    true,
                    Rule::Pincode,
                ),
            ],
        },
    ]
}

/// Steps for raising a support ticket
pub fn support_ticket_steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition {
            title: "Issue",
            fields: vec![
                FieldSpec::text("subject", "Subject", true),
                FieldSpec::multiline("description", "Description", true),
                FieldSpec::text("category", "Category", true),
                FieldSpec::priority("priority", "Priority (1-3)"),
            ],
        },
        StepDefinition {
            title: "Linkage",
            fields: vec![
                FieldSpec::text("profile_id", "Customer ID (optional)", false),
                FieldSpec::text("order_id", "Order ID (optional)", false),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_session() -> FormSession {
        FormSession::new(business_profile_steps())
    }

    fn fill_company_step(session: &mut FormSession) {
        session.update_field("company_name", "Surat Silk House");
        session.update_field("contact_person", "R. Mehta");
        session.update_field("phone", "9876543210");
        session.update_field("email", "sales@suratsilk.in");
    }

    fn fill_registration_step(session: &mut FormSession) {
        session.update_field("gstin", "24ABCDE1234F1Z5");
        session.update_field("pan", "ABCDE1234F");
    }

    fn fill_address_step(session: &mut FormSession) {
        session.update_field("registered_address.street", "14 Ring Road");
        session.update_field("registered_address.city", "Surat");
        session.update_field("registered_address.state", "Gujarat");
        session.update_field("registered_address.pincode", "395002");
    }

    mod field_updates {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_update_then_read_returns_written_value() {
            let mut session = profile_session();
            session.update_field("registered_address.street", "14 Ring Road");
            assert_eq!(session.value("registered_address.street"), "14 Ring Road");
        }

        #[test]
        fn test_nested_write_leaves_siblings_unchanged() {
            let mut session = profile_session();
            session.update_field("registered_address.city", "Surat");
            session.update_field("registered_address.pincode", "395002");

            session.update_field("registered_address.street", "22 Textile Market");

            assert_eq!(session.value("registered_address.city"), "Surat");
            assert_eq!(session.value("registered_address.pincode"), "395002");
        }

        #[test]
        fn test_update_clears_existing_error_for_path() {
            let mut session = profile_session();
            assert_eq!(session.advance(), Advance::Blocked);
            assert!(session.error("company_name").is_some());

            session.update_field("company_name", "Surat Silk House");
            assert!(session.error("company_name").is_none());
            // other step errors are untouched
            assert!(session.error("phone").is_some());
        }

        #[test]
        fn test_input_char_respects_field_kind() {
            let mut session = profile_session();
            session.next_field();
            session.next_field(); // phone
            assert_eq!(session.active_spec().path, "phone");
            session.input_char('9');
            session.input_char('x');
            session.input_char('8');
            assert_eq!(session.value("phone"), "98");
        }

        #[test]
        fn test_input_char_uppercases_tax_codes() {
            let mut session = profile_session();
            fill_company_step(&mut session);
            assert_eq!(session.advance(), Advance::Moved);
            assert_eq!(session.active_spec().path, "gstin");
            for c in "24abcde".chars() {
                session.input_char(c);
            }
            assert_eq!(session.value("gstin"), "24ABCDE");
        }

        #[test]
        fn test_backspace_pops_last_char() {
            let mut session = profile_session();
            session.input_char('S');
            session.input_char('u');
            session.backspace();
            assert_eq!(session.value("company_name"), "S");
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_validate_step_is_deterministic() {
            let mut session = profile_session();
            session.update_field("phone", "98765");
            let first = session.validate_step(0);
            let second = session.validate_step(0);
            assert_eq!(first.valid, second.valid);
            assert_eq!(first.errors, second.errors);
        }

        #[test]
        fn test_validate_step_does_not_mutate_session() {
            let session = profile_session();
            let result = session.validate_step(0);
            assert!(!result.valid);
            // stored error map stays empty until advance() records it
            assert!(session.error("company_name").is_none());
        }

        #[test]
        fn test_required_check_is_trim_aware() {
            let mut session = profile_session();
            session.update_field("company_name", "   ");
            let result = session.validate_step(0);
            assert_eq!(
                result.errors.get("company_name").map(String::as_str),
                Some("Company Name is required")
            );
        }

        #[test]
        fn test_optional_field_validates_only_when_filled() {
            let mut session = profile_session();
            fill_company_step(&mut session);
            session.advance();
            fill_registration_step(&mut session);

            // empty optional branch GSTIN: step passes
            assert!(session.validate_step(1).valid);

            // malformed optional value: step fails
            session.update_field("secondary_gstin", "bogus");
            let result = session.validate_step(1);
            assert!(!result.valid);
            assert!(result.errors.contains_key("secondary_gstin"));
        }

        #[test]
        fn test_format_rules_reported_with_messages() {
            let mut session = profile_session();
            fill_company_step(&mut session);
            session.update_field("email", "not-an-email");
            let result = session.validate_step(0);
            assert_eq!(
                result.errors.get("email").map(String::as_str),
                Some("Enter a valid email address")
            );
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_advance_blocked_on_invalid_step_keeps_index() {
            let mut session = profile_session();
            assert_eq!(session.advance(), Advance::Blocked);
            assert_eq!(session.current_step(), 0);
            assert!(session.error("company_name").is_some());
        }

        #[test]
        fn test_advance_moves_when_step_valid() {
            let mut session = profile_session();
            fill_company_step(&mut session);
            assert_eq!(session.advance(), Advance::Moved);
            assert_eq!(session.current_step(), 1);
            assert_eq!(session.active_field(), 0);
        }

        #[test]
        fn test_retreat_never_validates() {
            let mut session = profile_session();
            fill_company_step(&mut session);
            session.advance();
            session.update_field("gstin", "garbage");
            session.retreat();
            assert_eq!(session.current_step(), 0);
        }

        #[test]
        fn test_retreat_at_first_step_is_noop() {
            let mut session = profile_session();
            session.retreat();
            assert_eq!(session.current_step(), 0);
        }

        #[test]
        fn test_field_focus_wraps_within_step() {
            let mut session = profile_session();
            let count = session.current().fields.len();
            for _ in 0..count {
                session.next_field();
            }
            assert_eq!(session.active_field(), 0);
            session.prev_field();
            assert_eq!(session.active_field(), count - 1);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        fn session_at_last_step() -> FormSession {
            let mut session = profile_session();
            fill_company_step(&mut session);
            assert_eq!(session.advance(), Advance::Moved);
            fill_registration_step(&mut session);
            assert_eq!(session.advance(), Advance::Moved);
            fill_address_step(&mut session);
            session
        }

        #[test]
        fn test_last_step_advance_starts_submission() {
            let mut session = session_at_last_step();
            assert!(session.is_last_step());
            assert_eq!(session.advance(), Advance::Submit);
            assert_eq!(session.submission(), SubmissionState::Submitting);
        }

        #[test]
        fn test_no_overlapping_submissions() {
            let mut session = session_at_last_step();
            assert_eq!(session.advance(), Advance::Submit);
            assert_eq!(session.advance(), Advance::Blocked);
        }

        #[test]
        fn test_succeeded_is_terminal() {
            let mut session = session_at_last_step();
            session.advance();
            session.mark_succeeded();
            assert_eq!(session.submission(), SubmissionState::Succeeded);
            assert_eq!(session.advance(), Advance::Blocked);
        }

        #[test]
        fn test_failure_preserves_fields_and_reenables_submit() {
            let mut session = session_at_last_step();
            session.advance();
            session.mark_failed("store rejected the record");

            assert_eq!(session.submission(), SubmissionState::Failed);
            assert_eq!(session.submit_error(), Some("store rejected the record"));
            assert_eq!(session.value("company_name"), "Surat Silk House");

            // user-initiated retry succeeds
            assert_eq!(session.advance(), Advance::Submit);
            assert_eq!(session.submission(), SubmissionState::Submitting);
            assert!(session.submit_error().is_none());
        }

        #[test]
        fn test_submission_unreachable_before_last_step() {
            let mut session = profile_session();
            fill_company_step(&mut session);
            assert_eq!(session.advance(), Advance::Moved);
            assert_eq!(session.submission(), SubmissionState::Idle);
        }
    }

    mod ticket_flow {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_ticket_step_one_requires_subject() {
            let mut session = FormSession::new(support_ticket_steps());
            session.update_field("description", "Lot 8 shade differs from sample");
            session.update_field("category", "quality");
            let result = session.validate_step(0);
            assert!(!result.valid);
            assert!(result.errors.contains_key("subject"));
        }

        #[test]
        fn test_ticket_linkage_step_is_fully_optional() {
            let mut session = FormSession::new(support_ticket_steps());
            session.update_field("subject", "Shade mismatch");
            session.update_field("description", "Lot 8 shade differs from sample");
            session.update_field("category", "quality");
            assert_eq!(session.advance(), Advance::Moved);
            assert_eq!(session.advance(), Advance::Submit);
        }
    }
}
