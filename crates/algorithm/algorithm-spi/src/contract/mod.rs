//! Contract traits for estimator implementations

mod predictor;

pub use predictor::Predictor;
