//! Error module containing error types and result aliases

mod frame_error;

pub use frame_error::{FrameError, Result};
