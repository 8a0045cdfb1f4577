//! Image upload component with drag & drop support.
//!
//! Collects files from a drop or the hidden picker, runs the submit
//! cycle and clears the picker afterwards so the same files can be
//! chosen again.

use std::future::Future;

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::config::API_BASE;
use crate::files::FileSource;
use crate::services::analyze_images;
use crate::state::{submit_batch, ViewState};
use crate::types::{AnalysisResult, AppResult};

/// Empty the picker so choosing the same files again fires `change`.
fn clear_picker(input: &HtmlInputElement) {
    input.set_value("");
}

/// Run one submit cycle, then clear the picker whatever the outcome.
pub async fn upload_and_reset<A, Fut>(
    state: RwSignal<ViewState>,
    files: Vec<File>,
    input: Option<HtmlInputElement>,
    analyze: A,
) where
    A: FnOnce(Vec<File>) -> Fut,
    Fut: Future<Output = AppResult<Vec<AnalysisResult>>>,
{
    submit_batch(state, files, analyze).await;

    if let Some(input) = input {
        clear_picker(&input);
    }
}

#[component]
pub fn UploadSection(state: RwSignal<ViewState>) -> impl IntoView {
    let (is_dragover, set_is_dragover) = create_signal(false);
    let input_ref = create_node_ref::<html::Input>();

    let is_uploading = move || state.with(|s| s.is_uploading);
    let has_error = move || state.with(|s| s.error.is_some());

    let clear_input = move || {
        if let Some(input) = input_ref.get_untracked() {
            clear_picker(&input);
        }
    };

    // Launch one submit cycle for whatever the source holds
    let start_upload = move |source: FileSource| {
        if state.with_untracked(|s| s.is_uploading) {
            log::warn!("⏳ Upload in progress, drop target disabled");
            clear_input();
            return;
        }

        let files = source.files();
        let input = input_ref.get_untracked().map(|input| (*input).clone());
        spawn_local(upload_and_reset(state, files, input, |files| {
            analyze_images(files, API_BASE)
        }));
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
        start_upload(FileSource::Dropped(ev));
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !is_uploading() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        start_upload(FileSource::Picked(input));
    };

    // Clicking anywhere in the zone opens the picker
    let trigger_file_input = move |_| {
        if is_uploading() {
            return;
        }
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    view! {
        <Show
            when=has_error
            fallback=|| view! { }
        >
            <div class="error-message" role="alert">
                {move || state.with(|s| s.error.clone().unwrap_or_default())}
            </div>
        </Show>

        <div
            class=move || {
                let mut classes = vec!["upload-section"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if has_error() {
                    classes.push("has-error");
                }
                if is_uploading() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            id="uploadZone"
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=trigger_file_input
        >
            <input
                type="file"
                id="fileInput"
                multiple=true
                accept="image/*"
                style="display:none"
                node_ref=input_ref
                on:change=on_file_change
                on:click=|ev| ev.stop_propagation()
            />

            <div class="upload-icon">"🖼️"</div>
            <div class="upload-text">
                {move || if is_uploading() {
                    "⏳ Uploading and analyzing..."
                } else {
                    "Drop images here or click to upload"
                }}
            </div>
            <div class="upload-hint">"Supported formats: JPG, PNG"</div>
        </div>
    }
}
