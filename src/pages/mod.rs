//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Protected pages wrap their content in `RequireRole`; login pages hand
//! credentials to the auth flow.

pub mod dashboard;
pub mod home;
pub mod login;
