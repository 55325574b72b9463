//! contact-popup - a terminal modal that collects contact information
//!
//! This library provides a modal popup that asks for a phone number or email
//! address plus two multi-select preferences, and the reusable multi-select
//! dropdown widget it is built from. Everything renders with Ratatui and is
//! driven by keyboard and mouse events from crossterm.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`selection`] - Options and ordered selection sets
//! * [`validation`] - Contact info validation
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// File logging setup
pub mod logger;

/// Option and selection data model
pub mod selection;

/// Terminal user interface components and rendering
pub mod ui;

/// Email and phone validation for the contact field
pub mod validation;

pub use selection::{SelectOption, SelectionSet, SelectionTarget};
pub use ui::components::ContactSubmission;
pub use validation::{validate, validate_contact, ContactError};
