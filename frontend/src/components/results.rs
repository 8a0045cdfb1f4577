//! Results grid: one card per analyzed image.

use leptos::*;

use crate::config::is_allowed_image_url;
use crate::state::ViewState;
use crate::types::AnalysisResult;

/// Summary line above the grid.
fn summary(count: usize, defects: usize) -> String {
    let images = if count == 1 { "image" } else { "images" };
    format!("{} {} analyzed • {} with defects", count, images, defects)
}

#[component]
pub fn ResultsGrid(
    state: RwSignal<ViewState>,
    /// Result shown in the enlarged viewer
    set_selected: WriteSignal<Option<AnalysisResult>>,
) -> impl IntoView {
    let has_results = move || state.with(|s| !s.results.is_empty());

    view! {
        <Show
            when=has_results
            fallback=|| view! { }
        >
            <div class="results-section">
                <div class="results-header">
                    <div class="results-title">
                        {move || state.with(|s| summary(s.results.len(), s.defect_count()))}
                    </div>
                    <div class="results-time">
                        {move || state.with(|s| {
                            s.analyzed_at
                                .map(|at| format!("at {}", at.format("%H:%M:%S")))
                                .unwrap_or_default()
                        })}
                    </div>
                </div>

                <div class="results-grid">
                    <For
                        each=move || state.with(|s| {
                            let batch = s.batch;
                            s.results
                                .iter()
                                .cloned()
                                .enumerate()
                                .map(move |(idx, result)| (batch, idx, result))
                                .collect::<Vec<_>>()
                        })
                        key=|(batch, idx, _)| (*batch, *idx)
                        children=move |(_, _, result)| {
                            view! { <ResultCard result=result set_selected=set_selected/> }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn ResultCard(
    result: AnalysisResult,
    set_selected: WriteSignal<Option<AnalysisResult>>,
) -> impl IntoView {
    let status = result.defect_status();
    let object_label = result.object_label().map(str::to_string);
    let thumbnail = result.thumbnail_path.clone();
    let name = result.image_name.clone();
    let explanation = result.analysis.explanation.clone();

    let open_viewer = {
        let result = result.clone();
        move |_| set_selected.set(Some(result.clone()))
    };

    view! {
        <div class="result-card">
            <div class="result-card-header">
                <div class="result-card-title" title=name.clone()>{name.clone()}</div>
            </div>
            <div class="result-card-content">
                <div class="result-thumbnail" on:click=open_viewer style="cursor: pointer;">
                    <RemoteImage src=thumbnail.clone() alt=name.clone()/>
                </div>

                {object_label.map(|label| view! {
                    <div class="result-object">
                        <span class="result-label">"Object:"</span> " " {label}
                    </div>
                })}

                <div class="result-status">
                    <span class="result-label">"Status:"</span>
                    <span class=status.css_class()>{status.label()}</span>
                </div>
                <p class="result-explanation">{explanation}</p>
            </div>
        </div>
    }
}

/// `<img>` restricted to the image allowlist.
#[component]
pub fn RemoteImage(src: String, alt: String) -> impl IntoView {
    if is_allowed_image_url(&src) {
        view! { <img src=src alt=alt loading="lazy"/> }.into_view()
    } else {
        log::warn!("⚠️ Image source not in allowlist: {}", src);
        view! { <div class="image-unavailable">"Image unavailable"</div> }.into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        assert_eq!(summary(1, 0), "1 image analyzed • 0 with defects");
        assert_eq!(summary(3, 2), "3 images analyzed • 2 with defects");
    }
}
