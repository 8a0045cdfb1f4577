//! Click-to-enlarge image viewer.

use leptos::*;

use crate::components::RemoteImage;
use crate::types::AnalysisResult;

/// Modal overlay showing the full-size image of the selected result.
///
/// Closes on overlay click, the close button or the Escape key.
#[component]
pub fn ImageViewer(
    selected: ReadSignal<Option<AnalysisResult>>,
    set_selected: WriteSignal<Option<AnalysisResult>>,
) -> impl IntoView {
    let close = move || set_selected.set(None);

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && selected.with_untracked(Option::is_some) {
            close();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        {move || selected.get().map(|result| {
            let name = result.image_name.clone();
            view! {
                <div class="viewer-overlay" on:click=move |_| close()>
                    <div class="viewer-content" on:click=|ev| ev.stop_propagation()>
                        <div class="viewer-header">
                            <span class="viewer-title">{name.clone()}</span>
                            <button class="btn btn-secondary" on:click=move |_| close()>"Close"</button>
                        </div>
                        <div class="viewer-image">
                            <RemoteImage src=result.image_path.clone() alt=name.clone()/>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
