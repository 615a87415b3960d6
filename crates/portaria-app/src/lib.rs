//! Portaria visitor-management - application wiring.
//!
//! Seeds the in-memory store from a JSON document and renders availability
//! reports. The binary in `main.rs` ties these to configuration and
//! tracing setup.

pub mod report;
pub mod seed;
