//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components wrap role screens with authorization and shared chrome while
//! reading the session from Leptos context.

pub mod panel_header;
pub mod session_gate;
