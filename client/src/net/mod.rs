//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the session crate's `AuthApi` over browser `fetch`. The
//! wire schema itself lives in `session::types`.

pub mod api;
