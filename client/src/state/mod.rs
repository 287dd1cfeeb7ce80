//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only shared state is the auth session; page forms keep their field
//! values in local signals.

pub mod auth;
