//! Shared UI components

mod button;

pub use button::{render_sidebar_button, BUTTON_HEIGHT};
