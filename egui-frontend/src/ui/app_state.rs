//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the tip calculator app.
//!
//! ## Key Types:
//! - `TipForm` - Raw form input state (text fields, radio selection, toggle)
//! - `TipTimeApp` - Main application state struct
//!
//! ## State Management:
//! The form holds the four inputs exactly as the user typed or selected them.
//! Normalization and arithmetic live in the `shared` crate; the form only
//! snapshots text and selection state, so it stays testable without an egui
//! context. Derived outputs are recomputed from the form on every frame
//! rather than stored - immediate mode makes recompute-on-change implicit.

use log::info;
use shared::{TipBreakdown, TipInputs, TipPercent};

/// Raw form input state, exactly as entered by the user
#[derive(Debug, Clone, PartialEq)]
pub struct TipForm {
    /// Bill amount text field contents (may be empty or non-numeric)
    pub amount_input: String,

    /// People count text field contents (may be empty or non-numeric)
    pub people_input: String,

    /// Currently selected tip percentage
    pub selected_tip_percent: TipPercent,

    /// Whether the round-up toggle is on
    pub round_up: bool,
}

impl Default for TipForm {
    fn default() -> Self {
        Self {
            amount_input: String::new(),
            people_input: String::new(),
            selected_tip_percent: TipPercent::default(), // 15%
            round_up: false,
        }
    }
}

impl TipForm {
    /// Apply the normalization policy to the raw text and return a
    /// validated snapshot (empty/invalid bill -> 0.0, people -> 1)
    pub fn inputs(&self) -> TipInputs {
        TipInputs::from_raw(
            &self.amount_input,
            self.selected_tip_percent,
            &self.people_input,
            self.round_up,
        )
    }

    /// Normalize and compute the three derived amounts
    pub fn breakdown(&self) -> TipBreakdown {
        TipBreakdown::compute(&self.inputs())
    }
}

/// Main application struct for the egui tip calculator
pub struct TipTimeApp {
    /// Current form state
    pub form: TipForm,
}

impl TipTimeApp {
    /// Create a new TipTimeApp with default form values
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🧮 Initializing TipTimeApp");

        // Install the app-wide styling once at startup
        crate::ui::setup_tip_time_style(&cc.egui_ctx);

        Ok(Self {
            form: TipForm::default(),
        })
    }
}
