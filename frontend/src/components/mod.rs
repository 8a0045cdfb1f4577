//! UI Components for the Defect Scan application.
//!
//! # Layout Components
//! - [`Header`] - Top bar with the analysis service target
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Image upload with drag & drop
//! - [`LoadingIndicator`] - Spinner while a batch is analyzed
//! - [`ResultsGrid`] - One card per analysis result
//! - [`ImageViewer`] - Enlarged view of a result image

mod header;
mod hero;
mod upload;
mod progress;
mod results;
mod viewer;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use progress::*;
pub use results::*;
pub use viewer::*;
pub use footer::*;
