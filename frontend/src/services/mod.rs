//! Analysis service communication.
//!
//! # Services
//!
//! - [`analyze`] - Multipart image upload to the analysis backend

pub mod analyze;

pub use analyze::*;
