//! Portaria visitor-management - shared core types and utilities.
//!
//! This crate holds the pieces every other workspace crate leans on:
//! configuration loading, the core error type, scheduling constants, the
//! weekday wire type, wall-clock date parsing, and the clock abstraction.

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;
