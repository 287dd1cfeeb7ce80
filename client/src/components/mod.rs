//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared page chrome while reading the auth session from
//! Leptos context.

pub mod nav_bar;
pub mod session_panel;
