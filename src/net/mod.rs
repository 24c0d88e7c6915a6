//! Network helpers for talking to hosted services.

pub mod api;
