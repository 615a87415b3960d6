//! Portaria visitor-management - scheduling and booking services.
//!
//! The heart of the system: slot generation, conflict detection, and
//! appointment validation, plus the booking, access-logging, and priority
//! services built on top of them. Everything here is read/decide logic over
//! the store traits; the only writes happen in [`booking`] and [`access`].

pub mod access;
pub mod booking;
pub mod error;
pub mod priority;
pub mod scheduling;
