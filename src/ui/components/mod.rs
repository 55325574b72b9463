//! Reusable UI components

pub mod common;
pub mod contact_popup;
pub mod dropdown;

// Component exports
pub use contact_popup::{ContactPopup, ContactSubmission, PopupButton, PopupFocus};
pub use dropdown::Dropdown;
