//! Data models

pub mod assessment;
pub mod prediction;
pub mod export;

pub use assessment::*;
pub use prediction::*;
pub use export::*;
