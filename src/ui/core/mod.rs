//! Core UI functionality for contact-popup.
//!
//! This module contains the fundamental building blocks for the user interface:
//! event handling, actions, and the component abstraction.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions passed up from components
//! - [`component`] - Base component trait with mount/unmount lifecycle
//! - [`event_handler`] - Terminal event polling and tick generation
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** carry state changes upward; a parent applies or forwards them
//! 3. **Events** are produced by the [`EventHandler`] and dispatched top-down
//!
//! Children never hold references to their parents. Anything a parent needs to
//! know is returned as an [`Action`].

pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
