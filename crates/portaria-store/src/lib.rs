//! Portaria visitor-management - domain models and data access.
//!
//! Persistence technology is deliberately abstract: the scheduling services
//! only see the store traits in [`store`], and the bundled
//! [`store::memory::MemoryStore`] is the reference implementation.

pub mod error;
pub mod model;
pub mod store;
