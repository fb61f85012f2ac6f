//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so the derivations can be tested without a DOM.

pub mod box_view;
pub mod ui_persistence;
