//! Form rendering module
//!
//! - `field_renderer`: field rendering utilities
//! - `wizard_form`: profile and ticket wizard rendering

mod field_renderer;
mod wizard_form;

pub use wizard_form::{draw_profile_wizard, draw_ticket_create};
