//! Correlogram display collaborator

use crate::model::Correlogram;

/// Receives the correlograms produced by parameter diagnostics
pub trait CorrelogramDisplay {
    fn show(&mut self, correlogram: &Correlogram);
}
