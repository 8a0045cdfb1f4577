//! HTTP service for batch image analysis.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{analyze_url, UPLOAD_FIELD};
use crate::types::{AnalysisResult, AnalyzeResponse, AppError, AppResult};

/// Build the multipart body: one `files` entry per image.
pub fn build_form_data(files: &[File]) -> AppResult<FormData> {
    let form_data = FormData::new()
        .map_err(|e| AppError::network(format!("Failed to create FormData: {:?}", e)))?;

    for file in files {
        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(|e| AppError::network(format!("Failed to append file: {:?}", e)))?;
    }

    Ok(form_data)
}

/// Upload a batch of images to `{api_base}/api/analyze`.
///
/// Returns the analysis results with image and thumbnail references
/// already rewritten to absolute URLs under `{api_base}/uploads/`.
pub async fn analyze_images(files: Vec<File>, api_base: &str) -> AppResult<Vec<AnalysisResult>> {
    let form_data = build_form_data(&files)?;

    let url = analyze_url(api_base);
    let response = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AppError::network(e.to_string()))?;

    // The body carries the verdict, whatever the status code says.
    if !response.ok() {
        log::warn!("Analysis service answered with status {}", response.status());
    }

    let body = response
        .json::<AnalyzeResponse>()
        .await
        .map_err(|e| AppError::network(e.to_string()))?;

    interpret_response(body, api_base)
}

/// Turn a decoded response into results or a service error.
pub fn interpret_response(body: AnalyzeResponse, api_base: &str) -> AppResult<Vec<AnalysisResult>> {
    if !body.success {
        return Err(AppError::service(body.error));
    }

    Ok(body
        .results
        .into_iter()
        .map(|result| result.resolve_urls(api_base))
        .collect())
}
