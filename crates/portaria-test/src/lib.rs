//! Portaria visitor-management - integration test support.
//!
//! This crate re-exports the workspace crates to support integration tests
//! that use `portaria::` paths.

#![allow(ambiguous_glob_reexports)]

pub mod component {
    // Re-export core and service modules at the component level
    pub use portaria_core::*;
    pub use portaria_service::*;

    // Re-export the store crate with all its public modules
    pub mod store {
        pub use portaria_store::store::*;
    }

    // Re-export models
    pub mod model {
        pub use portaria_store::model::*;
    }
}

// Re-export the app crate for seed/report helpers
pub mod app {
    pub use portaria_app::*;
}
