//! Contract module containing trait definitions for forecast collaborators

mod correlogram_display;
mod model_fitter;

pub use correlogram_display::CorrelogramDisplay;
pub use model_fitter::ModelFitter;
