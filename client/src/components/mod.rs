//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the sidebar controls. Each keeps its editing state in
//! signals and reports committed values through callbacks.

pub mod box_control;
pub mod preferences_modal;
