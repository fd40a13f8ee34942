//! # UI Components Module
//!
//! This module organizes the UI building blocks for the tip calculator.
//!
//! ## Module Organization:
//! - `styling` - Visual styling, colors, and global egui style setup
//! - `ui_components` - Reusable form widgets (numeric fields, toggle switch,
//!   result rows)

pub mod styling;
pub mod ui_components;

pub use styling::{colors, setup_tip_time_style};
pub use ui_components::*;
