//! Forecast Service Provider Interface
//!
//! Defines the collaborators of the rolling forecast workflow (model
//! fitting, correlogram display), the values it produces and its error type.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{CorrelogramDisplay, ModelFitter};
pub use error::{ForecastError, Result};
pub use model::{Correlogram, CorrelogramKind, ForecastRun, ModelOrder};
