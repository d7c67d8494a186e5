//! # nexus-core - Core Domain Types
//!
//! Foundation crate for Nexus Builder. Provides domain types, navigation
//! rules, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing, rand).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`User`], [`UserRole`] - Mocked identity and its privilege tier
//! - [`Project`], [`ProjectFile`], [`ProjectStatus`] - A generated application
//! - [`PerformanceStats`], [`OptimizationLevel`] - Synthetic deployment metrics
//! - [`SystemConfig`] - Admin-editable process-wide configuration
//! - [`ChatMessage`], [`ChatRole`] - Assistant conversation entries
//!
//! ### Navigation (`navigation`)
//! - [`View`], [`EditorTab`] - Flat navigation state
//! - [`can_access()`] - Pure role/view access predicate
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use nexus_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod navigation;
pub mod types;

/// Prelude for common imports used throughout all Nexus crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use navigation::{can_access, EditorTab, View};
pub use types::{
    AppPhase, ChatMessage, ChatRole, OptimizationLevel, PerformanceStats, Project, ProjectFile,
    ProjectStatus, SystemConfig, User, UserRole, SELECTABLE_MODELS,
};
