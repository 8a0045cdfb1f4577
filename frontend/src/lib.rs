//! Defect Scan - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading images to the defect analysis
//! service and reviewing the per-image verdicts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (analysis service target)                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (error message + drop zone)              │
//! │  ├── LoadingIndicator (while uploading)                     │
//! │  ├── ResultsGrid (when results loaded)                      │
//! │  └── ImageViewer (when a thumbnail is clicked)              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Build-time configuration and image allowlist
//! - [`types`] - API types, defect status, errors
//! - [`files`] - File sources and batch validation
//! - [`state`] - View state and the submit cycle
//! - [`components`] - UI components
//! - [`services`] - Analysis service communication

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod files;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    AnalyzeResponse, AnalysisResult, Analysis,
    // Display
    DefectStatus,
    // Errors
    AppError, AppResult,
};

// State
pub use files::{FileSource, ImageFile, validate_batch};
pub use state::{ViewState, submit_batch};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
///
/// The crate ships as a `cdylib` only, so this is the single mount point.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Defect Scan - Starting Leptos App (API: {})", API_BASE);

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Wood Defect Detection"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Single owner of everything the view renders
    let state = create_rw_signal(ViewState::default());
    let (selected, set_selected) = create_signal(None::<AnalysisResult>);

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            <UploadSection state=state/>

            <LoadingIndicator state=state/>

            <ResultsGrid state=state set_selected=set_selected/>
        </div>

        <ImageViewer selected=selected set_selected=set_selected/>

        <Footer/>
    }
}
