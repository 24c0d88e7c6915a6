//! Navigation helpers.
//!
//! `nav` holds the `Redirector` seam the gate and login flow navigate
//! through: a replacing `RouterRedirector` over the Leptos router, and an
//! in-memory `MemoryHistory` that tests use to check back-navigation.

pub mod nav;
