//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and auth calls, and delegates shared chrome
//! to `components`. Pages render by auth status but only the landing page
//! redirects.

pub mod admin;
pub mod booking;
pub mod guest_portal;
pub mod landing;
pub mod login;
pub mod operator_dashboard;
pub mod signup;
