//! Model module containing data structures

mod correlogram;
mod forecast_run;
mod model_order;

pub use correlogram::{Correlogram, CorrelogramKind};
pub use forecast_run::ForecastRun;
pub use model_order::ModelOrder;
