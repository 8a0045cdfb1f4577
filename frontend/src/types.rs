//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - Analysis service request/response structures
//! - **Display Types** - Derived values used by the result cards
//! - **Error Types** - Frontend error handling

use serde::Deserialize;
use thiserror::Error;

use crate::config::uploads_url;

// =============================================================================
// API Response Types
// =============================================================================

/// Response from `POST /api/analyze`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Missing means failure.
    #[serde(default)]
    pub success: bool,
    /// One entry per submitted image
    #[serde(default)]
    pub results: Vec<AnalysisResult>,
    /// Service-provided failure message
    #[serde(default)]
    pub error: Option<String>,
}

/// Classification outcome for a single uploaded image.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Original file name
    pub image_name: String,
    /// Full-size processed image (relative path until resolved)
    pub image_path: String,
    /// Thumbnail image (relative path until resolved)
    pub thumbnail_path: String,
    /// Nested analysis payload
    pub analysis: Analysis,
}

/// Analysis payload attached to each result.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Analysis {
    /// Detected object category
    #[serde(default)]
    pub object: Option<String>,
    /// `"yes"` when defective
    #[serde(default)]
    pub defective: String,
    /// Free-text explanation
    #[serde(default)]
    pub explanation: String,
}

impl AnalysisResult {
    /// Rewrite image and thumbnail paths into `{api_base}/uploads/{path}`.
    pub fn resolve_urls(mut self, api_base: &str) -> Self {
        self.image_path = uploads_url(api_base, &self.image_path);
        self.thumbnail_path = uploads_url(api_base, &self.thumbnail_path);
        self
    }

    /// Object label, if the service detected one.
    pub fn object_label(&self) -> Option<&str> {
        self.analysis
            .object
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }

    pub fn defect_status(&self) -> DefectStatus {
        DefectStatus::from_flag(&self.analysis.defective)
    }
}

// =============================================================================
// Display Types
// =============================================================================

/// Binary defect verdict decoded from the string flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefectStatus {
    Defective,
    Clean,
}

impl DefectStatus {
    /// Only the exact string `"yes"` means defective.
    pub fn from_flag(flag: &str) -> Self {
        if flag == "yes" {
            DefectStatus::Defective
        } else {
            DefectStatus::Clean
        }
    }

    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            DefectStatus::Defective => "Defect Detected",
            DefectStatus::Clean => "No Defect",
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            DefectStatus::Defective => "badge badge-defect",
            DefectStatus::Clean => "badge badge-clean",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Shown when the service reports failure without a message.
pub const SERVICE_FALLBACK_MESSAGE: &str = "Failed to analyze images";

/// Shown when a transport error has no message of its own.
pub const NETWORK_FALLBACK_MESSAGE: &str = "Error uploading files. Please try again.";

/// Frontend application errors.
///
/// Every variant is recoverable: it becomes the single error string of
/// the view and the user may retry.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Empty selection.
    #[error("Please select at least one image file.")]
    NoFiles,

    /// A file in the batch does not declare an image content type.
    #[error("Please upload image files only (JPG, PNG, etc.).")]
    NotAnImage { name: String },

    /// The service answered with `success: false`.
    #[error("{0}")]
    Service(String),

    /// Network failure or unparseable body.
    #[error("{0}")]
    Network(String),
}

impl AppError {
    /// Service failure, falling back to a generic message.
    pub fn service(message: Option<String>) -> Self {
        match message {
            Some(msg) if !msg.trim().is_empty() => AppError::Service(msg),
            _ => AppError::Service(SERVICE_FALLBACK_MESSAGE.to_string()),
        }
    }

    /// Transport failure, falling back to a generic message.
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            AppError::Network(NETWORK_FALLBACK_MESSAGE.to_string())
        } else {
            AppError::Network(message)
        }
    }

    /// Whether the error was raised before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::NoFiles | AppError::NotAnImage { .. })
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
