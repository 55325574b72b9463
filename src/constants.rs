//! Constants used throughout the application
//!
//! This module centralizes UI text, timing and layout values
//! to improve maintainability and consistency.

// Popup text
pub const POPUP_TITLE: &str = " Stay in touch ";
pub const CONTACT_LABEL: &str = "Please enter your phone number or email address";
pub const MATERIALS_LABEL: &str = "Materials you're interested in";
pub const PREFERENCES_LABEL: &str = "How do you like to learn?";
pub const NEXT_BUTTON: &str = " Next ";
pub const CLOSE_BUTTON: &str = " Close ";
pub const CLOSE_GLYPH: &str = "×";

// Validation Error Messages
pub const ERROR_CONTACT_REQUIRED: &str = "Contact info is required.";
pub const ERROR_CONTACT_INVALID: &str = "Please enter a valid phone number or email address.";

// Dropdown timing
pub const DROPDOWN_CLOSE_DELAY_MS: u64 = 300;
pub const DROPDOWN_CLOSE_DELAY_MAX_MS: u64 = 5000;

// Popup sizing constraints
pub const POPUP_DEFAULT_WIDTH_PERCENT: u16 = 70;
pub const POPUP_MIN_WIDTH_PERCENT: u16 = 30;
pub const POPUP_MAX_WIDTH_PERCENT: u16 = 100;
pub const POPUP_HEIGHT_LINES: u16 = 20;

// Event loop timing
pub const TICK_RATE_MS: u64 = 50;

// Config file messages
pub const CONFIG_GENERATED: &str = "✅ Generated default config file";
