//! Guided multi-step form engine
//!
//! - `field`: field configuration and input filtering
//! - `validators`: format rules (GSTIN, PAN, pincode, phone, email)
//! - `wizard`: step progression, validation gating, submission lifecycle

mod field;
mod validators;
mod wizard;

pub use field::{FieldKind, FieldSpec};
pub use validators::Rule;
pub use wizard::{
    business_profile_steps, support_ticket_steps, Advance, FormSession, StepDefinition,
    SubmissionState,
};
