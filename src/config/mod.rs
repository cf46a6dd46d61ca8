//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → PATCH_DIR / API_PORT / CLI flags override
//!     → validation.rs (semantic checks)
//!     → TrackerConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields except the patch directory have defaults
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{resolve_config, ConfigError, Overrides};
pub use schema::TrackerConfig;
pub use schema::{
    Comparison, CompressionConfig, ListenerConfig, ObservabilityConfig, PatchConfig,
    TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
