//! View state and the submit cycle.
//!
//! All mutation goes through [`ViewState`] methods on a single
//! `RwSignal`, so the UI thread is the only owner of the state.

use std::future::Future;

use chrono::{DateTime, Local};
use leptos::*;

use crate::files::{validate_batch, ImageFile};
use crate::types::{AnalysisResult, AppError, AppResult, DefectStatus};

/// Everything the upload-and-review view renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    /// Results of the most recent successful submission
    pub results: Vec<AnalysisResult>,
    /// A submission is awaiting its response
    pub is_uploading: bool,
    /// Current user-visible error
    pub error: Option<String>,
    /// When `results` was received
    pub analyzed_at: Option<DateTime<Local>>,
    /// Bumped on every successful submission, keys rendered cards
    pub batch: u64,
}

impl ViewState {
    /// Enter the in-progress state. Returns `false` if already uploading.
    pub fn begin_upload(&mut self) -> bool {
        if self.is_uploading {
            return false;
        }
        self.is_uploading = true;
        self.error = None;
        true
    }

    /// Record a failure. Previous results stay as they are.
    pub fn fail(&mut self, error: &AppError) {
        self.is_uploading = false;
        self.error = Some(error.to_string());
    }

    /// Apply the outcome of a submission.
    pub fn settle(&mut self, outcome: AppResult<Vec<AnalysisResult>>) {
        match outcome {
            Ok(results) => {
                self.is_uploading = false;
                self.error = None;
                self.results = results;
                self.analyzed_at = Some(Local::now());
                self.batch += 1;
            }
            Err(e) => self.fail(&e),
        }
    }

    pub fn defect_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.defect_status() == DefectStatus::Defective)
            .count()
    }
}

/// Run one submit cycle: validate, analyze, settle.
///
/// `analyze` is only invoked for a batch that passed validation and when
/// no other submission is in flight.
pub async fn submit_batch<F, A, Fut>(state: RwSignal<ViewState>, files: Vec<F>, analyze: A)
where
    F: ImageFile,
    A: FnOnce(Vec<F>) -> Fut,
    Fut: Future<Output = AppResult<Vec<AnalysisResult>>>,
{
    if state.with_untracked(|s| s.is_uploading) {
        log::warn!("⏳ Upload already in progress, ignoring {} file(s)", files.len());
        return;
    }

    if let Err(e) = validate_batch(&files) {
        if let AppError::NotAnImage { name } = &e {
            log::warn!("🚫 Rejected batch, not an image: {}", name);
        } else {
            log::warn!("🚫 Rejected empty batch");
        }
        state.update(|s| s.fail(&e));
        return;
    }

    let mut started = false;
    state.update(|s| started = s.begin_upload());
    if !started {
        return;
    }

    log::info!("📤 Uploading {} image(s) for analysis...", files.len());
    let outcome = analyze(files).await;

    match &outcome {
        Ok(results) => log::info!("✅ Received {} analysis result(s)", results.len()),
        Err(e) => log::error!("❌ Analysis failed: {}", e),
    }
    state.update(|s| s.settle(outcome));
}
